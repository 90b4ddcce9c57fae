//! Gate-pair collection across region boundaries.

use dealias_model::SweepGrid;

/// One directed adjacency between gates of two distinct regions. Each
/// physical adjacency is collected twice, once from each endpoint; the edge
/// tracker keeps the canonical orientation and drops the mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GatePair {
    pub label: u32,
    pub neighbor: u32,
    pub velocity: f32,
    pub neighbor_velocity: f32,
}

/// The four search directions from a gate. Ray steps may wrap around the
/// sweep seam; gate steps always stop at the array boundary.
#[derive(Debug, Clone, Copy)]
enum Direction {
    RayBefore,
    RayAfter,
    GateInward,
    GateOutward,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::RayBefore,
    Direction::RayAfter,
    Direction::GateInward,
    Direction::GateOutward,
];

/// Collects every 4-directional adjacency between distinct labeled regions.
///
/// From each labeled gate, steps one cell in each direction. If the stepped
/// cell is excluded (label 0), keeps stepping in the same direction up to the
/// axis' skip budget until a labeled gate is found or the budget runs out.
/// Steps off the ray axis wrap to the opposite edge when `rays_wrap_around`;
/// steps off the gate axis terminate the search.
pub(crate) fn collect_gate_pairs(
    labels: &SweepGrid<u32>,
    velocities: &SweepGrid<f32>,
    rays_wrap_around: bool,
    skip_between_rays: usize,
    skip_along_ray: usize,
) -> Vec<GatePair> {
    let (ray_count, gate_count) = labels.shape();

    let labeled_gates = labels.values().iter().filter(|&&label| label != 0).count();
    let wrap_adjustment = if rays_wrap_around { 2 * gate_count } else { 0 };
    let mut pairs = Vec::with_capacity(4 * (labeled_gates + wrap_adjustment));

    for ray in 0..ray_count {
        for gate in 0..gate_count {
            let label = *labels.get(ray, gate);
            if label == 0 {
                continue;
            }
            let velocity = *velocities.get(ray, gate);

            for direction in DIRECTIONS {
                let budget = match direction {
                    Direction::RayBefore | Direction::RayAfter => skip_between_rays,
                    Direction::GateInward | Direction::GateOutward => skip_along_ray,
                };

                if let Some((neighbor_ray, neighbor_gate)) =
                    seek_labeled(labels, ray, gate, direction, budget, rays_wrap_around)
                {
                    let neighbor = *labels.get(neighbor_ray, neighbor_gate);
                    if neighbor != label {
                        pairs.push(GatePair {
                            label,
                            neighbor,
                            velocity,
                            neighbor_velocity: *velocities.get(neighbor_ray, neighbor_gate),
                        });
                    }
                }
            }
        }
    }

    pairs
}

/// Walks from (ray, gate) in `direction` to the nearest labeled gate,
/// skipping at most `max_skip` excluded gates past the first step. Returns
/// the labeled position, or None if the search hit the grid boundary or ran
/// out of budget on excluded gates.
fn seek_labeled(
    labels: &SweepGrid<u32>,
    ray: usize,
    gate: usize,
    direction: Direction,
    max_skip: usize,
    rays_wrap_around: bool,
) -> Option<(usize, usize)> {
    let (mut ray, mut gate) = step(ray, gate, direction, labels.shape(), rays_wrap_around)?;
    if *labels.get(ray, gate) != 0 {
        return Some((ray, gate));
    }

    for _ in 0..max_skip {
        (ray, gate) = step(ray, gate, direction, labels.shape(), rays_wrap_around)?;
        if *labels.get(ray, gate) != 0 {
            return Some((ray, gate));
        }
    }

    None
}

/// One step in a direction, honoring ray wrap-around. None when off-grid.
fn step(
    ray: usize,
    gate: usize,
    direction: Direction,
    (ray_count, gate_count): (usize, usize),
    rays_wrap_around: bool,
) -> Option<(usize, usize)> {
    match direction {
        Direction::RayBefore => match (ray, rays_wrap_around) {
            (0, true) => Some((ray_count - 1, gate)),
            (0, false) => None,
            _ => Some((ray - 1, gate)),
        },
        Direction::RayAfter => {
            if ray + 1 < ray_count {
                Some((ray + 1, gate))
            } else if rays_wrap_around {
                Some((0, gate))
            } else {
                None
            }
        }
        Direction::GateInward => (gate > 0).then(|| (ray, gate - 1)),
        Direction::GateOutward => (gate + 1 < gate_count).then_some((ray, gate + 1)),
    }
}
