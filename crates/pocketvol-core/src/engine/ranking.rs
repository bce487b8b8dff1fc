use std::cmp::Ordering;

/// A permutation of pocket indices ordered by descending volume.
///
/// Position `i` of the ranking (0-based; rank number `i + 1`) holds the
/// *original* emission index of the `i`-th largest pocket, which is what
/// names NanoShaper's per-cavity triangulation file. The underlying sort is
/// stable, so pockets with equal volume keep their original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketRanking {
    order: Vec<usize>,
}

impl PocketRanking {
    /// Computes the ranking over per-pocket volumes given in original
    /// emission order. Pure; zero pockets yields an empty ranking.
    pub fn by_descending_volume(volumes: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..volumes.len()).collect();
        // NaN never occurs in NanoShaper reports; treat it as equal so the
        // stable sort falls back to emission order.
        order.sort_by(|&a, &b| {
            volumes[b]
                .partial_cmp(&volumes[a])
                .unwrap_or(Ordering::Equal)
        });
        Self { order }
    }

    /// The original pocket index at ranked position `i`.
    pub fn original_index(&self, i: usize) -> Option<usize> {
        self.order.get(i).copied()
    }

    /// Iterates over `(ranked position, original index)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies the permutation to a parallel slice, yielding its elements
    /// in ranked order.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.order.iter().map(|&i| items[i].clone()).collect()
    }
}
