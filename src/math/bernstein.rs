use super::binomial::pascal_row;

/// `baseᵉˣᵖ` by repeated multiplication; `0⁰ == 1`.
fn pow(base: f64, exp: usize) -> f64 {
    (0..exp).fold(1.0, |acc, _| acc * base)
}

/// `[1, base, base², ..., base^n]`.
fn powers(base: f64, n: usize) -> Vec<f64> {
    std::iter::successors(Some(1.0), |p| Some(p * base))
        .take(n + 1)
        .collect()
}

/// Bernstein basis of one degree with its binomial row built once.
///
/// Reuse one basis for every parameter of a sampling pass: each
/// [`weights`](Self::weights) call only rebuilds the power tables.
#[derive(Debug, Clone)]
pub struct BernsteinBasis {
    coefficients: Vec<f64>,
}

impl BernsteinBasis {
    /// Creates the basis of degree `n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            coefficients: pascal_row(n),
        }
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// `B(n, i, t)`, or `0.0` for `i > n`.
    #[must_use]
    pub fn weight(&self, i: usize, t: f64) -> f64 {
        let n = self.degree();
        match self.coefficients.get(i) {
            Some(c) => c * pow(t, i) * pow(1.0 - t, n - i),
            None => 0.0,
        }
    }

    /// All `n + 1` weights at parameter `t`.
    #[must_use]
    pub fn weights(&self, t: f64) -> Vec<f64> {
        let n = self.degree();
        let t_pow = powers(t, n);
        let s_pow = powers(1.0 - t, n);
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * t_pow[i] * s_pow[n - i])
            .collect()
    }
}

/// Bernstein basis polynomial `B(n, i, t) = C(n, i) · tⁱ · (1 − t)ⁿ⁻ⁱ`.
///
/// Returns `0.0` for `i > n`.
#[must_use]
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    BernsteinBasis::new(n).weight(i, t)
}

/// All `n + 1` Bernstein weights of a degree-`n` curve at parameter `t`.
#[must_use]
pub fn bernstein_weights(n: usize, t: f64) -> Vec<f64> {
    BernsteinBasis::new(n).weights(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quadratic_midpoint_weights() {
        let w = bernstein_weights(2, 0.5);
        assert_relative_eq!(w[0], 0.25);
        assert_relative_eq!(w[1], 0.5);
        assert_relative_eq!(w[2], 0.25);
    }

    #[test]
    fn zero_base_power_is_one() {
        // t = 0: only the first weight survives, which needs 0⁰ == 1.
        assert_relative_eq!(bernstein(3, 0, 0.0), 1.0);
        assert_relative_eq!(bernstein(3, 3, 0.0), 0.0);
        // t = 1: only the last weight survives, which needs (1 - 1)⁰ == 1.
        assert_relative_eq!(bernstein(3, 3, 1.0), 1.0);
        assert_relative_eq!(bernstein(3, 0, 1.0), 0.0);
    }

    #[test]
    fn partition_of_unity() {
        for n in 0..=12 {
            for step in 0..=10 {
                let t = f64::from(step) / 10.0;
                let sum: f64 = bernstein_weights(n, t).iter().sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn partition_of_unity_at_high_degree() {
        for n in [67, 68, 79, 150, 400] {
            let basis = BernsteinBasis::new(n);
            for step in 0..=8 {
                let t = f64::from(step) / 8.0;
                let sum: f64 = basis.weights(t).iter().sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn weights_match_single_basis() {
        let t = 0.3;
        let basis = BernsteinBasis::new(5);
        for (i, w) in basis.weights(t).iter().enumerate() {
            assert_relative_eq!(*w, bernstein(5, i, t), epsilon = 1e-15);
            assert_relative_eq!(*w, basis.weight(i, t), epsilon = 1e-15);
        }
    }

    #[test]
    fn index_above_degree_is_zero() {
        assert_relative_eq!(bernstein(2, 3, 0.4), 0.0);
    }
}
