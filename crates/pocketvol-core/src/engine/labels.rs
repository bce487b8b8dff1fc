use std::collections::HashMap;

/// Maps atom indices to the rank of the first pocket that claimed them.
///
/// Merge policy is first-write-wins: pockets are claimed in ranked order
/// (rank 1 first), so once an atom belongs to a pocket, later pockets with
/// a smaller volume never relabel it. Regardless of claim order, an atom
/// shared between pockets ends up labeled with the smallest rank among
/// them. Unclaimed atoms have label `0`.
#[derive(Debug, Clone, Default)]
pub struct PocketLabelMap {
    labels: HashMap<usize, usize>,
}

impl PocketLabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the given atom indices for the pocket with 1-based `rank`.
    /// Atoms already claimed keep their existing, smaller-or-equal label.
    pub fn claim(&mut self, rank: usize, atom_indices: &[usize]) {
        for &index in atom_indices {
            self.labels
                .entry(index)
                .and_modify(|existing| {
                    if rank < *existing {
                        *existing = rank;
                    }
                })
                .or_insert(rank);
        }
    }

    /// The label of an atom index; `0` when no pocket claimed it.
    pub fn label_for(&self, atom_index: usize) -> usize {
        self.labels.get(&atom_index).copied().unwrap_or(0)
    }

    /// Number of atoms claimed by at least one pocket.
    pub fn claimed_count(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclaimed_atoms_have_label_zero() {
        let map = PocketLabelMap::new();
        assert_eq!(map.label_for(17), 0);
        assert_eq!(map.claimed_count(), 0);
    }

    #[test]
    fn shared_atom_keeps_the_smaller_rank_when_claimed_in_rank_order() {
        let mut map = PocketLabelMap::new();
        map.claim(1, &[4, 5]);
        map.claim(2, &[5, 6]);
        assert_eq!(map.label_for(4), 1);
        assert_eq!(map.label_for(5), 1);
        assert_eq!(map.label_for(6), 2);
    }

    #[test]
    fn shared_atom_keeps_the_smaller_rank_regardless_of_claim_order() {
        let mut map = PocketLabelMap::new();
        map.claim(3, &[8]);
        map.claim(1, &[8]);
        assert_eq!(map.label_for(8), 1);
    }

    #[test]
    fn claimed_count_tracks_distinct_atoms() {
        let mut map = PocketLabelMap::new();
        map.claim(1, &[0, 1]);
        map.claim(2, &[1, 2]);
        assert_eq!(map.claimed_count(), 3);
    }
}
