//! Equal-width binning shared by the entropy and mutual information
//! estimators. Both discretize over the observed value range with the same
//! bin count, so normalized results stay comparable across calls.

use ndarray::ArrayView1;

/// Default number of equal-width bins used by the entropy and mutual
/// information estimators.
pub(crate) const DEFAULT_BIN_COUNT: usize = 30;

/// An equal-width partition of an observed value range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BinGrid {
    lower: f64,
    width: f64,
    bins: usize,
}

impl BinGrid {
    /// Fit a grid of `bins` equal-width bins to the observed range of
    /// `values`. A zero-width range (constant series) collapses every value
    /// into bin 0, which is what makes the entropy of a constant series 0
    /// without a special case.
    pub(crate) fn fit(values: ArrayView1<'_, f64>, bins: usize) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Self {
            lower: min,
            width: (max - min) / bins as f64,
            bins,
        }
    }

    /// Map a value to its bin index. The range maximum lands in the last
    /// bin rather than opening a phantom one past the end.
    pub(crate) fn index(&self, value: f64) -> usize {
        if self.width <= 0.0 {
            return 0;
        }
        let idx = ((value - self.lower) / self.width) as usize;
        idx.min(self.bins - 1)
    }

    /// Occupancy counts of `values` over this grid.
    pub(crate) fn counts(&self, values: ArrayView1<'_, f64>) -> Vec<usize> {
        let mut counts = vec![0usize; self.bins];
        for &v in values {
            counts[self.index(v)] += 1;
        }
        counts
    }
}
