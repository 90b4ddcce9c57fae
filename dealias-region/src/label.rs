//! Connected-region labeling of similar velocities.

use dealias_model::SweepGrid;
use std::collections::VecDeque;

/// Labels connected regions of similar velocity.
///
/// For each consecutive pair of values in `limits`, finds the 4-connected
/// components of included gates whose velocity `v` satisfies `lo <= v < hi`
/// and assigns each component the next global label. Returns the label grid
/// and the number of regions found. Label 0 marks excluded gates (and gates
/// whose velocity falls outside every limit pair).
///
/// Connectivity is strictly in-bounds: regions do not cross the first/last
/// ray seam even for 360-degree sweeps. The edge collector reconnects the
/// seam when rays wrap around.
pub(crate) fn find_regions(
    velocities: &SweepGrid<f32>,
    exclude: &SweepGrid<bool>,
    limits: &[f32],
) -> (SweepGrid<u32>, usize) {
    let (ray_count, gate_count) = velocities.shape();
    let mut labels = SweepGrid::filled(ray_count, gate_count, 0u32);
    let mut region_count = 0usize;

    let included = |ray: usize, gate: usize, lo: f32, hi: f32| -> bool {
        if *exclude.get(ray, gate) {
            return false;
        }
        let velocity = *velocities.get(ray, gate);
        lo <= velocity && velocity < hi
    };

    let mut queue = VecDeque::new();
    for pair in limits.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);

        for ray in 0..ray_count {
            for gate in 0..gate_count {
                if *labels.get(ray, gate) != 0 || !included(ray, gate, lo, hi) {
                    continue;
                }

                // Flood fill the connected component from this seed.
                region_count += 1;
                let label = region_count as u32;
                *labels.get_mut(ray, gate) = label;
                queue.push_back((ray, gate));

                while let Some((seed_ray, seed_gate)) = queue.pop_front() {
                    for (neighbor_ray, neighbor_gate) in
                        neighbors(seed_ray, seed_gate, ray_count, gate_count)
                    {
                        if *labels.get(neighbor_ray, neighbor_gate) == 0
                            && included(neighbor_ray, neighbor_gate, lo, hi)
                        {
                            *labels.get_mut(neighbor_ray, neighbor_gate) = label;
                            queue.push_back((neighbor_ray, neighbor_gate));
                        }
                    }
                }
            }
        }
    }

    (labels, region_count)
}

/// The in-bounds 4-neighborhood of a cell.
fn neighbors(
    ray: usize,
    gate: usize,
    ray_count: usize,
    gate_count: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let mut candidates = [None; 4];
    if ray > 0 {
        candidates[0] = Some((ray - 1, gate));
    }
    if ray + 1 < ray_count {
        candidates[1] = Some((ray + 1, gate));
    }
    if gate > 0 {
        candidates[2] = Some((ray, gate - 1));
    }
    if gate + 1 < gate_count {
        candidates[3] = Some((ray, gate + 1));
    }
    candidates.into_iter().flatten()
}
