use nalgebra::DMatrix;

use crate::error::Result;
use crate::pregraph::{Connection, Pregraph};
use crate::subsets::subset_masks;

/// Adjacency-style matrix: edges count once per direction, a loop twice on
/// the diagonal, a semi-edge once on the diagonal.
///
/// Assumes 0-based labels; the order is the largest vertex id plus one.
pub fn adjacency_matrix(pregraph: &Pregraph) -> DMatrix<i64> {
    let n = pregraph.order();
    let mut matrix = DMatrix::<i64>::zeros(n, n);
    for connection in pregraph.connections() {
        match *connection {
            Connection::Single(u) => matrix[(u, u)] += 1,
            Connection::Pair(u, v) => {
                matrix[(u, v)] += 1;
                matrix[(v, u)] += 1;
            }
        }
    }
    matrix
}

/// Nonzero entries that are not the first nonzero entry of their row, in
/// row-major order. These are the entries whose sign may be flipped.
pub fn flippable_positions(matrix: &DMatrix<i64>) -> Vec<(usize, usize)> {
    let mut positions = Vec::new();
    for i in 0..matrix.nrows() {
        let mut anchored = false;
        for j in 0..matrix.ncols() {
            if matrix[(i, j)] == 0 {
                continue;
            }
            if anchored {
                positions.push((i, j));
            }
            anchored = true;
        }
    }
    positions
}

/// Lazy sweep over every sign variant of a matrix.
///
/// Variant `mask` negates the flippable positions whose bit is set; mask 0
/// is the base matrix itself. Only the stored entry is negated, its mirror
/// keeps its sign, so variants need not be symmetric.
#[derive(Clone, Debug)]
pub struct SignVariants<'a> {
    base: &'a DMatrix<i64>,
    positions: Vec<(usize, usize)>,
    masks: std::ops::Range<u64>,
}

impl<'a> SignVariants<'a> {
    pub fn new(base: &'a DMatrix<i64>) -> Result<Self> {
        let positions = flippable_positions(base);
        let masks = subset_masks(positions.len(), "flippable positions")?;
        Ok(SignVariants {
            base,
            positions,
            masks,
        })
    }

    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }

    fn variant(&self, mask: u64) -> DMatrix<i64> {
        let mut matrix = self.base.clone();
        for (k, &(i, j)) in self.positions.iter().enumerate() {
            if (mask >> k) & 1 == 1 {
                matrix[(i, j)] = -matrix[(i, j)];
            }
        }
        matrix
    }
}

impl Iterator for SignVariants<'_> {
    type Item = DMatrix<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.masks.next()?;
        Some(self.variant(mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.masks.size_hint()
    }
}

impl ExactSizeIterator for SignVariants<'_> {}

pub fn sign_variants(matrix: &DMatrix<i64>) -> Result<SignVariants<'_>> {
    SignVariants::new(matrix)
}

/// Every sign variant of `matrix`, `2^k` of them for `k` flippable positions.
pub fn enumerate_sign_variants(matrix: &DMatrix<i64>) -> Result<Vec<DMatrix<i64>>> {
    Ok(sign_variants(matrix)?.collect())
}
