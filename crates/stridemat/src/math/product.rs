//! The naive matrix product, written against the 2-D read contract only so
//! that any pairing of matrices, views and stores can be multiplied.

use log::debug;

use crate::error::{MatrixError, Result};
use crate::math::capability::Readable2;

/// What `lhs.times(rhs)` has to compute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Plan {
    /// `lhs` is 1×1: the result is `rhs` scaled by this value.
    ScaleRhs(f64),
    /// `rhs` is 1×1: the result is `lhs` scaled by this value.
    ScaleLhs(f64),
    /// A `rows × cols` matrix of row/column dot products.
    Full { rows: usize, cols: usize },
}

fn is_scalar<M: Readable2<f64> + ?Sized>(m: &M) -> bool {
    m.rows() == 1 && m.cols() == 1
}

pub fn plan<A, B>(lhs: &A, rhs: &B) -> Result<Plan>
where
    A: Readable2<f64> + ?Sized,
    B: Readable2<f64> + ?Sized,
{
    if is_scalar(lhs) {
        return Ok(Plan::ScaleRhs(lhs.get(0, 0)?));
    }
    if is_scalar(rhs) {
        return Ok(Plan::ScaleLhs(rhs.get(0, 0)?));
    }
    if lhs.cols() != rhs.rows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    debug!(
        "multiplying {}×{} by {}×{}",
        lhs.rows(),
        lhs.cols(),
        rhs.rows(),
        rhs.cols()
    );
    Ok(Plan::Full {
        rows: lhs.rows(),
        cols: rhs.cols(),
    })
}

/// Entry `(row, col)` of `lhs * rhs`, summed left to right from `0.0`.
///
/// The summation order is fixed; results are reproducible bit for bit.
pub fn entry<A, B>(lhs: &A, rhs: &B, row: usize, col: usize) -> Result<f64>
where
    A: Readable2<f64> + ?Sized,
    B: Readable2<f64> + ?Sized,
{
    let mut sum = 0.0;
    for k in 0..lhs.cols() {
        sum += lhs.get(row, k)? * rhs.get(k, col)?;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::store::Store2;

    #[test]
    fn test_plan() {
        let a = Store2::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Store2::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let k = Store2::from_rows(vec![vec![2.5]]).unwrap();

        assert_eq!(plan(&k, &a).unwrap(), Plan::ScaleRhs(2.5));
        assert_eq!(plan(&a, &k).unwrap(), Plan::ScaleLhs(2.5));
        assert_eq!(plan(&b, &a), Err(MatrixError::DimensionMismatch { lhs: (1, 3), rhs: (2, 2) }));
        assert_eq!(plan(&a, &a).unwrap(), Plan::Full { rows: 2, cols: 2 });
    }

    #[test]
    fn test_entry() {
        let a = Store2::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Store2::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        assert_eq!(entry(&a, &b, 0, 0).unwrap(), 19.0);
        assert_eq!(entry(&a, &b, 1, 1).unwrap(), 50.0);
    }
}
