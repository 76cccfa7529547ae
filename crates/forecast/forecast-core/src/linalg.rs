//! Dense symmetric positive-definite solves
//!
//! The model only ever solves small normal-equation systems (a few dozen
//! columns), so a row-major `Vec<f64>` with a hand-written Cholesky
//! factorisation is all that is needed.

use forecast_spi::{ForecastError, Result};

/// Lower-triangular Cholesky factor `L` with `A = L·Lᵀ`.
#[derive(Debug, Clone)]
pub struct CholeskyFactor {
    dim: usize,
    lower: Vec<f64>,
}

impl CholeskyFactor {
    /// Factor a symmetric positive-definite `dim × dim` row-major matrix.
    ///
    /// Only the lower triangle of `matrix` is read.
    pub fn decompose(matrix: &[f64], dim: usize) -> Result<Self> {
        if matrix.len() != dim * dim {
            return Err(ForecastError::NumericalError(format!(
                "expected {} entries for a {dim}x{dim} matrix, got {}",
                dim * dim,
                matrix.len()
            )));
        }

        let mut lower = vec![0.0; dim * dim];
        for i in 0..dim {
            for j in 0..=i {
                let dot: f64 = (0..j).map(|k| lower[i * dim + k] * lower[j * dim + k]).sum();
                let value = matrix[i * dim + j] - dot;

                if i == j {
                    if !(value.is_finite() && value > 0.0) {
                        return Err(ForecastError::NumericalError(format!(
                            "matrix is not positive definite (pivot {i} = {value})"
                        )));
                    }
                    lower[i * dim + i] = value.sqrt();
                } else {
                    lower[i * dim + j] = value / lower[j * dim + j];
                }
            }
        }

        Ok(Self { dim, lower })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Solve `L·y = b`.
    pub fn forward(&self, b: &[f64]) -> Vec<f64> {
        let n = self.dim;
        let mut y = vec![0.0; n];
        for i in 0..n {
            let dot: f64 = (0..i).map(|k| self.lower[i * n + k] * y[k]).sum();
            y[i] = (b[i] - dot) / self.lower[i * n + i];
        }
        y
    }

    /// Solve `Lᵀ·x = y`.
    fn backward(&self, y: &[f64]) -> Vec<f64> {
        let n = self.dim;
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let dot: f64 = (i + 1..n).map(|k| self.lower[k * n + i] * x[k]).sum();
            x[i] = (y[i] - dot) / self.lower[i * n + i];
        }
        x
    }

    /// Solve `A·x = b`.
    pub fn solve(&self, b: &[f64]) -> Vec<f64> {
        self.backward(&self.forward(b))
    }

    /// Quadratic form `vᵀ·A⁻¹·v`, i.e. `‖L⁻¹·v‖²`.
    pub fn inverse_quadratic_form(&self, v: &[f64]) -> f64 {
        self.forward(v).iter().map(|z| z * z).sum()
    }
}

/// Accumulates the penalised normal equations `(XᵀX + Λ)·β = Xᵀy` row by row.
#[derive(Debug, Clone)]
pub struct NormalEquations {
    dim: usize,
    gram: Vec<f64>,
    rhs: Vec<f64>,
}

impl NormalEquations {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            gram: vec![0.0; dim * dim],
            rhs: vec![0.0; dim],
        }
    }

    /// Add one design row `x` with target `y`.
    pub fn add_row(&mut self, x: &[f64], y: f64) {
        let n = self.dim;
        for i in 0..n {
            self.rhs[i] += x[i] * y;
            for j in 0..=i {
                self.gram[i * n + j] += x[i] * x[j];
            }
        }
    }

    /// Add `penalty[i]` to the i-th diagonal entry.
    pub fn add_ridge(&mut self, penalty: &[f64]) {
        for (i, p) in penalty.iter().enumerate().take(self.dim) {
            self.gram[i * self.dim + i] += p;
        }
    }

    /// Factor the penalised Gram matrix `XᵀX + Λ`.
    pub fn factor(&self) -> Result<CholeskyFactor> {
        // Only the lower triangle is accumulated, which is all decompose reads
        CholeskyFactor::decompose(&self.gram, self.dim)
    }

    /// Factor the system and return `(β, factor)`.
    pub fn solve(&self) -> Result<(Vec<f64>, CholeskyFactor)> {
        let factor = self.factor()?;
        let beta = factor.solve(&self.rhs);
        if beta.iter().any(|b| !b.is_finite()) {
            return Err(ForecastError::NumericalError(
                "least-squares solution is not finite".to_string(),
            ));
        }
        Ok((beta, factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cholesky_solve_2x2() {
        // [[4, 2], [2, 3]] x = [2, 1]  =>  x = [0.5, 0]
        let factor = CholeskyFactor::decompose(&[4.0, 2.0, 2.0, 3.0], 2).unwrap();
        let x = factor.solve(&[2.0, 1.0]);
        assert!((x[0] - 0.5).abs() < 1e-12);
        assert!(x[1].abs() < 1e-12);
    }

    #[test]
    fn test_inverse_quadratic_form() {
        // A = diag(4, 9)  =>  vᵀA⁻¹v = 1/4 + 4/9 for v = (1, 2)
        let factor = CholeskyFactor::decompose(&[4.0, 0.0, 0.0, 9.0], 2).unwrap();
        let q = factor.inverse_quadratic_form(&[1.0, 2.0]);
        assert!((q - (0.25 + 4.0 / 9.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_indefinite_matrix() {
        let result = CholeskyFactor::decompose(&[1.0, 2.0, 2.0, 1.0], 2);
        assert!(matches!(result, Err(ForecastError::NumericalError(_))));
    }

    #[test]
    fn test_rejects_wrong_size() {
        assert!(CholeskyFactor::decompose(&[1.0, 0.0, 0.0], 2).is_err());
    }

    #[test]
    fn test_normal_equations_recover_line() {
        // y = 3 + 2t
        let mut eq = NormalEquations::new(2);
        for t in 0..10 {
            let t = t as f64;
            eq.add_row(&[1.0, t], 3.0 + 2.0 * t);
        }
        let (beta, factor) = eq.solve().unwrap();
        assert_eq!(factor.dim(), 2);
        assert!((beta[0] - 3.0).abs() < 1e-9);
        assert!((beta[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ridge_makes_collinear_system_solvable() {
        // Second column duplicates the first
        let mut eq = NormalEquations::new(2);
        for _ in 0..4 {
            eq.add_row(&[1.0, 1.0], 2.0);
        }
        assert!(eq.solve().is_err());

        eq.add_ridge(&[0.01, 0.01]);
        let (beta, _) = eq.solve().unwrap();
        assert!((beta[0] + beta[1] - 2.0).abs() < 0.01);
    }
}
