//! Index arithmetic shared by every view.
//!
//! A view never stores more than an `Axis` per dimension: its logical
//! length, the physical index its logical 0 maps to, and the step between
//! consecutive logical indices. Reads and writes go through
//! [`physical_index`], view creation goes through [`check_selection`].

use crate::error::{MatrixError, Result};

/// Map a logical index onto the storage the view wraps.
///
/// `logical` must already be checked against `len`.
#[inline]
pub fn physical_index(logical: usize, origin: usize, stride: isize, len: usize) -> usize {
    debug_assert!(logical < len, "logical index {} >= {}", logical, len);
    (origin as isize + logical as isize * stride) as usize
}

/// Validate a `from..to` selection stepping by `stride` over an extent of
/// `source_size`, returning the number of selected elements.
///
/// `to` is exclusive in the direction of travel, so `(1, 4, 2)` selects
/// `[1, 3]` and `(4, -1, -2)` selects `[4, 2, 0]`. Only the indices that are
/// actually visited must be in range; `to` may overshoot the extent.
pub fn check_selection(from: isize, to: isize, stride: isize, source_size: usize) -> Result<usize> {
    let invalid = || MatrixError::InvalidSelection {
        from,
        to,
        stride,
        size: source_size,
    };

    if stride == 0 || source_size == 0 {
        return Err(invalid());
    }

    // i128 so that extreme isize inputs cannot overflow
    let (from_w, to_w, stride_w) = (from as i128, to as i128, stride as i128);
    let span = to_w - from_w;
    if span == 0 || span.signum() != stride_w.signum() {
        return Err(invalid());
    }
    let numels = (span.abs() + stride_w.abs() - 1) / stride_w.abs();

    let last = from_w + (numels - 1) * stride_w;
    let extent = source_size as i128;
    if from_w < 0 || from_w >= extent || last < 0 || last >= extent {
        return Err(invalid());
    }

    Ok(numels as usize)
}

/// One dimension of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    len: usize,
    origin: usize,
    stride: isize,
}

impl Axis {
    /// The identity axis over freshly allocated storage.
    pub fn full(len: usize) -> Self {
        Self {
            len,
            origin: 0,
            stride: 1,
        }
    }

    /// Select `from..to` by `stride` out of an axis of `source_len` elements.
    pub fn select(from: isize, to: isize, stride: isize, source_len: usize) -> Result<Self> {
        let len = check_selection(from, to, stride, source_len)?;
        Ok(Self {
            len,
            origin: from as usize,
            stride,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Bounds-check `logical` and translate it.
    #[inline]
    pub fn translate(&self, logical: usize) -> Result<usize> {
        if logical >= self.len {
            return Err(MatrixError::IndexOutOfBounds {
                index: logical,
                len: self.len,
            });
        }
        Ok(physical_index(logical, self.origin, self.stride, self.len))
    }
}
