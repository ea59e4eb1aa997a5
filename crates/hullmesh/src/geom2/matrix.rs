//! Dense real matrix with a cofactor-expansion determinant.
//!
//! Scratch structure for the incircle predicate (used at order 4). Storage is
//! a `nalgebra::DMatrix`; the determinant is computed by Laplace expansion
//! along the first row, so small fixed orders involve no pivoting and no
//! division. The raw signed value is returned, without tolerance.

use nalgebra::DMatrix;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Build from row-major data. `None` if `data.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self {
            data: DMatrix::from_row_slice(rows, cols, data),
        })
    }

    /// Build from fixed-width rows.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self {
            data: DMatrix::from_row_slice(rows.len(), C, &flat),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::zeros(rows, cols),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    #[inline]
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Determinant of a square matrix; `None` otherwise. The 0×0 matrix has determinant 1.
    pub fn determinant(&self) -> Option<f64> {
        if !self.is_square() {
            return None;
        }
        Some(cofactor_det(&self.data))
    }
}

fn cofactor_det(m: &DMatrix<f64>) -> f64 {
    let n = m.nrows();
    match n {
        0 => 1.0,
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        _ => {
            let mut det = 0.0;
            for j in 0..n {
                let minor = m.clone().remove_row(0).remove_column(j);
                let term = m[(0, j)] * cofactor_det(&minor);
                if j % 2 == 0 {
                    det += term;
                } else {
                    det -= term;
                }
            }
            det
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_is_rejected() {
        assert!(Matrix::from_row_slice(2, 3, &[1.0; 5]).is_none());
        let m = Matrix::from_row_slice(2, 3, &[1.0; 6]).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert!(m.determinant().is_none());
    }

    #[test]
    fn small_orders() {
        assert_eq!(Matrix::zeros(0, 0).determinant(), Some(1.0));
        assert_eq!(Matrix::from_rows(&[[-3.5]]).determinant(), Some(-3.5));
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.determinant(), Some(-2.0));
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn order_four_is_exact_on_integers() {
        let m = Matrix::from_rows(&[
            [2.0, 0.0, 1.0, 3.0],
            [1.0, -1.0, 0.0, 2.0],
            [0.0, 4.0, 1.0, -2.0],
            [3.0, 1.0, 2.0, 1.0],
        ]);
        let det = m.determinant().unwrap();
        let reference = m.as_dmatrix().clone().determinant();
        assert_eq!(det, det.round());
        assert!((det - reference).abs() < 1e-9, "{det} vs {reference}");
    }

    #[test]
    fn row_swap_flips_sign() {
        let a = Matrix::from_rows(&[
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let b = Matrix::from_rows(&[
            [0.0, 1.0, 4.0],
            [1.0, 2.0, 3.0],
            [5.0, 6.0, 0.0],
        ]);
        assert_eq!(a.determinant(), Some(1.0));
        assert_eq!(b.determinant(), Some(-1.0));
    }

    #[test]
    fn singular_matrix_has_zero_determinant() {
        let m = Matrix::from_rows(&[
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(m.determinant(), Some(0.0));
    }
}
