use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{ResolverError, Result};

/// Basis of `{ x : M x = 0 }`, one primitive integer vector per free column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    ambient: usize,
    basis: Vec<Vec<i64>>,
}

impl Kernel {
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    /// Length of each basis vector, the column count of the matrix.
    pub fn ambient_dimension(&self) -> usize {
        self.ambient
    }

    pub fn basis(&self) -> &[Vec<i64>] {
        &self.basis
    }

    pub fn is_trivial(&self) -> bool {
        self.basis.is_empty()
    }

    /// `sum_k coefficients[k] * basis[k]`.
    pub fn combine(&self, coefficients: &[i64]) -> Result<Vec<i64>> {
        debug_assert_eq!(coefficients.len(), self.basis.len());
        (0..self.ambient)
            .map(|i| {
                let total = self
                    .basis
                    .iter()
                    .zip(coefficients)
                    .try_fold(0i128, |acc, (vector, &c)| {
                        acc.checked_add(i128::from(vector[i]) * i128::from(c))
                    })
                    .ok_or(ResolverError::Overflow("combining kernel vectors"))?;
                i64::try_from(total)
                    .map_err(|_| ResolverError::Overflow("combining kernel vectors"))
            })
            .collect()
    }
}

/// Right kernel of `matrix` over the rationals.
///
/// Elimination is exact. Each basis vector is scaled to a primitive integer
/// vector, which keeps zero coordinates and signs intact.
pub fn right_kernel(matrix: &DMatrix<i64>) -> Result<Kernel> {
    let cols = matrix.ncols();
    let (reduced, pivots) = reduced_row_echelon(matrix);
    let mut basis = Vec::with_capacity(cols - pivots.len());
    for free in (0..cols).filter(|c| !pivots.contains(c)) {
        let mut vector = vec![BigRational::zero(); cols];
        vector[free] = BigRational::one();
        for (row, &pivot) in pivots.iter().enumerate() {
            vector[pivot] = -reduced[row][free].clone();
        }
        basis.push(primitive(&vector)?);
    }
    Ok(Kernel {
        ambient: cols,
        basis,
    })
}

pub fn rank(matrix: &DMatrix<i64>) -> usize {
    reduced_row_echelon(matrix).1.len()
}

/// Gauss-Jordan elimination. Returns the reduced rows and pivot columns.
fn reduced_row_echelon(matrix: &DMatrix<i64>) -> (Vec<Vec<BigRational>>, Vec<usize>) {
    let (n, m) = matrix.shape();
    let mut rows: Vec<Vec<BigRational>> = (0..n)
        .map(|i| {
            (0..m)
                .map(|j| BigRational::from_integer(BigInt::from(matrix[(i, j)])))
                .collect()
        })
        .collect();

    let mut pivots = Vec::new();
    for col in 0..m {
        let r = pivots.len();
        if r == n {
            break;
        }
        let Some(p) = (r..n).find(|&i| !rows[i][col].is_zero()) else {
            continue;
        };
        rows.swap(r, p);
        let pivot = rows[r][col].clone();
        for x in rows[r].iter_mut() {
            *x /= &pivot;
        }
        let pivot_row = rows[r].clone();
        for (i, row) in rows.iter_mut().enumerate() {
            if i == r || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (x, p) in row.iter_mut().zip(&pivot_row) {
                *x -= &factor * p;
            }
        }
        pivots.push(col);
    }
    (rows, pivots)
}

/// Clears denominators and divides out the common factor.
fn primitive(vector: &[BigRational]) -> Result<Vec<i64>> {
    let scale = vector
        .iter()
        .fold(BigInt::one(), |acc, x| acc.lcm(x.denom()));
    let scale = BigRational::from_integer(scale);
    let scaled: Vec<BigInt> = vector.iter().map(|x| (x * &scale).to_integer()).collect();
    let common = scaled.iter().fold(BigInt::zero(), |acc, x| acc.gcd(x));
    scaled
        .into_iter()
        .map(|x| {
            let x = if common > BigInt::one() { x / &common } else { x };
            x.to_i64()
                .ok_or(ResolverError::Overflow("scaling a kernel vector"))
        })
        .collect()
}
