use crate::certifier::{Certificate, Pretest, Verdict};

/// Tallies over one resolver run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pregraphs: usize,
    /// Disproved because the base kernel has dimension 2 or more.
    pub kernel_too_large: usize,
    /// Disproved because the one-dimensional base kernel has a zero entry.
    pub zero_coordinate: usize,
    /// Disproved after sweeping every sign variant.
    pub disproved_by_search: usize,
    pub not_disproved: usize,
    pub variants_examined: usize,
    pub solver_calls: usize,
}

impl RunStats {
    pub fn from_certificates<'a>(certificates: impl IntoIterator<Item = &'a Certificate>) -> Self {
        let mut stats = RunStats::default();
        for certificate in certificates {
            stats.pregraphs += 1;
            stats.variants_examined += certificate.variants_examined;
            stats.solver_calls += certificate.solver_calls;
            match (certificate.verdict, certificate.pretest) {
                (Verdict::NotDisproved, _) => stats.not_disproved += 1,
                (Verdict::Disproved, Pretest::KernelTooLarge { .. }) => stats.kernel_too_large += 1,
                (Verdict::Disproved, Pretest::ZeroCoordinate { .. }) => stats.zero_coordinate += 1,
                (Verdict::Disproved, Pretest::Inconclusive { .. }) => stats.disproved_by_search += 1,
            }
        }
        stats
    }

    pub fn disproved(&self) -> usize {
        self.kernel_too_large + self.zero_coordinate + self.disproved_by_search
    }
}

/// Histogram of base-kernel dimensions, one bin per dimension.
/// Dimensions at or above `num_bins - 1` share the last bin.
pub fn kernel_dimension_histogram<'a>(
    certificates: impl IntoIterator<Item = &'a Certificate>,
    num_bins: usize,
) -> Vec<usize> {
    let mut hist = vec![0; num_bins];
    if num_bins == 0 {
        return hist;
    }
    for certificate in certificates {
        let bin = certificate.pretest.kernel_dimension().min(num_bins - 1);
        hist[bin] += 1;
    }
    hist
}
