//! Dense, owned storage at the root of every view chain.
//!
//! `Store1`/`Store2` are read-only once built; `MutableStore1`/`MutableStore2`
//! keep their cells in a `RefCell` so writes can arrive through any of the
//! shared views sitting on top of them. None of them ever resize.

use std::cell::RefCell;

use num_traits::{One, Zero};

use crate::error::{MatrixError, Result};
use crate::math::capability::{Readable1, Readable2, Writable1, Writable2};

fn fill_vec<T, F>(len: usize, mut fill: F) -> Result<Vec<T>>
where
    F: FnMut(usize) -> Result<T>,
{
    if len == 0 {
        return Err(MatrixError::InvalidSize(vec![len]));
    }
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        data.push(fill(i)?);
    }
    Ok(data)
}

fn fill_rows<T, F>(rows: usize, cols: usize, mut fill: F) -> Result<Vec<Vec<T>>>
where
    F: FnMut(usize, usize) -> Result<T>,
{
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidSize(vec![rows, cols]));
    }
    let mut data = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            row.push(fill(r, c)?);
        }
        data.push(row);
    }
    Ok(data)
}

/// Check that literal rows are non-empty and rectangular.
fn check_rows<T>(rows: &[Vec<T>]) -> Result<(usize, usize)> {
    let expected = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || expected == 0 {
        return Err(MatrixError::InvalidSize(vec![rows.len(), expected]));
    }
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(MatrixError::RaggedRows {
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok((rows.len(), expected))
}

#[inline]
fn out_of_bounds(index: usize, len: usize) -> MatrixError {
    MatrixError::IndexOutOfBounds { index, len }
}

// ---------------------------------------------------------------------------
// 1-D
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Store1<T> {
    data: Vec<T>,
}

impl<T> Store1<T> {
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, mut fill: F) -> Result<Self> {
        Self::try_from_fn(len, |i| Ok(fill(i)))
    }

    pub fn try_from_fn<F: FnMut(usize) -> Result<T>>(len: usize, fill: F) -> Result<Self> {
        Ok(Self {
            data: fill_vec(len, fill)?,
        })
    }

    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrixError::InvalidSize(vec![0]));
        }
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone + Zero> Store1<T> {
    pub fn zeros(len: usize) -> Result<Self> {
        Self::from_fn(len, |_| T::zero())
    }
}

impl<T: Clone + One> Store1<T> {
    pub fn ones(len: usize) -> Result<Self> {
        Self::from_fn(len, |_| T::one())
    }
}

impl<T: Clone> Readable1<T> for Store1<T> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| out_of_bounds(index, self.data.len()))
    }
}

#[derive(Debug)]
pub struct MutableStore1<T> {
    data: RefCell<Vec<T>>,
}

impl<T> MutableStore1<T> {
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, mut fill: F) -> Result<Self> {
        Self::try_from_fn(len, |i| Ok(fill(i)))
    }

    pub fn try_from_fn<F: FnMut(usize) -> Result<T>>(len: usize, fill: F) -> Result<Self> {
        Ok(Self {
            data: RefCell::new(fill_vec(len, fill)?),
        })
    }

    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrixError::InvalidSize(vec![0]));
        }
        Ok(Self {
            data: RefCell::new(data),
        })
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_inner()
    }
}

impl<T: Clone + Zero> MutableStore1<T> {
    pub fn zeros(len: usize) -> Result<Self> {
        Self::from_fn(len, |_| T::zero())
    }
}

impl<T: Clone + One> MutableStore1<T> {
    pub fn ones(len: usize) -> Result<Self> {
        Self::from_fn(len, |_| T::one())
    }
}

impl<T: Clone> Readable1<T> for MutableStore1<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        let data = self.data.borrow();
        data.get(index)
            .cloned()
            .ok_or_else(|| out_of_bounds(index, data.len()))
    }
}

impl<T: Clone> Writable1<T> for MutableStore1<T> {
    fn set(&self, index: usize, value: T) -> Result<T> {
        let mut data = self.data.borrow_mut();
        let len = data.len();
        let cell = data.get_mut(index).ok_or_else(|| out_of_bounds(index, len))?;
        Ok(std::mem::replace(cell, value))
    }
}

// ---------------------------------------------------------------------------
// 2-D
// ---------------------------------------------------------------------------

/// Row-of-rows storage. Every row has `cols` entries; this is checked on
/// construction and never again.
#[derive(Clone, Debug, PartialEq)]
pub struct Store2<T> {
    data: Vec<Vec<T>>,
    cols: usize,
}

impl<T> Store2<T> {
    pub fn from_fn<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::try_from_fn(rows, cols, |r, c| Ok(fill(r, c)))
    }

    pub fn try_from_fn<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<T>,
    {
        Ok(Self {
            data: fill_rows(rows, cols, fill)?,
            cols,
        })
    }

    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self> {
        let (_, cols) = check_rows(&data)?;
        Ok(Self { data, cols })
    }

    pub fn row_slice(&self, row: usize) -> Option<&[T]> {
        self.data.get(row).map(Vec::as_slice)
    }
}

impl<T: Clone + Zero> Store2<T> {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }
}

impl<T: Clone + Zero + One> Store2<T> {
    pub fn eye(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }
}

impl<T: Clone> Readable2<T> for Store2<T> {
    fn rows(&self) -> usize {
        self.data.len()
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        let values = self
            .data
            .get(row)
            .ok_or_else(|| out_of_bounds(row, self.data.len()))?;
        values
            .get(col)
            .cloned()
            .ok_or_else(|| out_of_bounds(col, self.cols))
    }
}

#[derive(Debug)]
pub struct MutableStore2<T> {
    data: RefCell<Vec<Vec<T>>>,
    rows: usize,
    cols: usize,
}

impl<T> MutableStore2<T> {
    pub fn from_fn<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::try_from_fn(rows, cols, |r, c| Ok(fill(r, c)))
    }

    pub fn try_from_fn<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<T>,
    {
        Ok(Self {
            data: RefCell::new(fill_rows(rows, cols, fill)?),
            rows,
            cols,
        })
    }

    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self> {
        let (rows, cols) = check_rows(&data)?;
        Ok(Self {
            data: RefCell::new(data),
            rows,
            cols,
        })
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data.into_inner()
    }
}

impl<T: Clone + Zero> MutableStore2<T> {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }
}

impl<T: Clone> Readable2<T> for MutableStore2<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        let data = self.data.borrow();
        let values = data.get(row).ok_or_else(|| out_of_bounds(row, self.rows))?;
        values
            .get(col)
            .cloned()
            .ok_or_else(|| out_of_bounds(col, self.cols))
    }
}

impl<T: Clone> Writable2<T> for MutableStore2<T> {
    fn set(&self, row: usize, col: usize, value: T) -> Result<T> {
        let mut data = self.data.borrow_mut();
        let values = data
            .get_mut(row)
            .ok_or_else(|| out_of_bounds(row, self.rows))?;
        let cell = values
            .get_mut(col)
            .ok_or_else(|| out_of_bounds(col, self.cols))?;
        Ok(std::mem::replace(cell, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store1_fill_order() {
        let mut calls = Vec::new();
        let store = Store1::from_fn(4, |i| {
            calls.push(i);
            i as f64 * 10.0
        })
        .unwrap();
        assert_eq!(calls, vec![0, 1, 2, 3]);
        assert_eq!(store.as_slice(), &[0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_store1_zero_len() {
        assert_eq!(
            Store1::<f64>::zeros(0).unwrap_err(),
            MatrixError::InvalidSize(vec![0])
        );
        assert!(MutableStore1::<f64>::from_vec(vec![]).is_err());
    }

    #[test]
    fn test_mutable_store1_set_returns_previous() {
        let store = MutableStore1::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(store.set(1, 7.0).unwrap(), 2.0);
        assert_eq!(store.get(1).unwrap(), 7.0);
        assert_eq!(
            store.set(3, 0.0),
            Err(MatrixError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(store.into_vec(), vec![1.0, 7.0, 3.0]);
    }

    #[test]
    fn test_store2_ragged_rows() {
        let err = Store2::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(err.is_invalid_size());
    }

    #[test]
    fn test_store2_empty_rows() {
        assert!(Store2::<f64>::from_rows(vec![]).unwrap_err().is_invalid_size());
        assert!(Store2::<f64>::from_rows(vec![vec![]]).unwrap_err().is_invalid_size());
        assert!(MutableStore2::<f64>::zeros(2, 0).unwrap_err().is_invalid_size());
    }

    #[test]
    fn test_store2_eye() {
        let eye = Store2::<f64>::eye(3).unwrap();
        assert_eq!(eye.row_slice(1), Some(&[0.0, 1.0, 0.0][..]));
        assert_eq!(eye.shape(), (3, 3));
        assert_eq!(eye.size(), 9);
    }

    #[test]
    fn test_mutable_store2_set() {
        let store = MutableStore2::<f64>::zeros(2, 3).unwrap();
        assert_eq!(store.set(1, 2, 5.0).unwrap(), 0.0);
        assert_eq!(store.get(1, 2).unwrap(), 5.0);
        assert!(store.get(2, 0).is_err());
        assert!(store.set(0, 3, 1.0).is_err());
        assert_eq!(store.into_rows(), vec![vec![0.0; 3], vec![0.0, 0.0, 5.0]]);
    }
}
