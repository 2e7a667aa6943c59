/// Tolerances for comparing evaluated curve values and reduced sums.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance for coordinate and length comparisons
    pub linear: f64,
    /// Allowed rounding drift per summed term
    pub per_term: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_PER_TERM: f64 = 1e-9;

    pub const fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            per_term: Self::DEFAULT_PER_TERM,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if two sums over `terms` values agree up to accumulated rounding.
    ///
    /// The bound grows with the number of terms and with the magnitude of the
    /// sums, so reductions with different groupings still compare equal.
    pub fn sum_eq(self, a: f64, b: f64, terms: usize) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= self.per_term * terms.max(1) as f64 * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
