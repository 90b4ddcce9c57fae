//! Region membership and fold counts for each node of the network.

/// Tracks which sweep regions each node contains and how many Nyquist
/// intervals each region must be unwrapped by, as the network is reduced.
///
/// Node 0 is reserved for excluded gates and never participates in merging.
pub(crate) struct RegionTracker {
    /// Number of gates in each node.
    node_size: Vec<usize>,

    /// The regions merged into each node. Starts as the identity; a merged
    /// node's list empties into its base.
    regions_in_node: Vec<Vec<usize>>,

    /// Number of unwrappings to apply to dealias each region.
    unwrap_number: Vec<i32>,
}

impl RegionTracker {
    /// Creates a tracker for `region_sizes.len()` regions, one node per
    /// region, with all unwrap counts zero. `region_sizes[i]` is the gate
    /// count of region `i + 1`.
    pub(crate) fn new(region_sizes: &[usize]) -> Self {
        let node_count = region_sizes.len() + 1;

        let mut node_size = vec![0; node_count];
        node_size[1..].copy_from_slice(region_sizes);

        Self {
            node_size,
            regions_in_node: (0..node_count).map(|node| vec![node]).collect(),
            unwrap_number: vec![0; node_count],
        }
    }

    /// The number of gates in a node.
    pub(crate) fn node_size(&self, node: usize) -> usize {
        self.node_size[node]
    }

    /// Merges node `merge` into node `base`, moving its regions and size.
    pub(crate) fn merge_nodes(&mut self, base: usize, merge: usize) {
        let regions = std::mem::take(&mut self.regions_in_node[merge]);
        self.regions_in_node[base].extend(regions);

        self.node_size[base] += self.node_size[merge];
        self.node_size[merge] = 0;
    }

    /// Adds `nwrap` unwrappings to every region contained in a node.
    pub(crate) fn unwrap_node(&mut self, node: usize, nwrap: i32) {
        if nwrap == 0 {
            return;
        }
        for &region in &self.regions_in_node[node] {
            self.unwrap_number[region] += nwrap;
        }
    }

    /// Shifts every region's unwrap count down by a global sweep offset.
    pub(crate) fn apply_sweep_offset(&mut self, offset: i32) {
        for unwrap in &mut self.unwrap_number {
            *unwrap -= offset;
        }
    }

    /// Per-region unwrap counts, indexed by region label. Index 0 is the
    /// excluded-gate slot and stays meaningless.
    pub(crate) fn unwrap_numbers(&self) -> &[i32] {
        &self.unwrap_number
    }
}
