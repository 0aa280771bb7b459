use std::fmt;
use std::rc::Rc;

use log::{debug, trace};
use rand::Rng;

use crate::config::{DisplayConfig, Fill};
use crate::error::{MatrixError, Result};
use crate::math::capability::{Readable2, Writable2};
use crate::math::format::render_matrix;
use crate::math::index::Axis;
use crate::math::product::{self, Plan};
use crate::math::store::{MutableStore2, Store2};

fn same_elements<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: Readable2<f64> + ?Sized,
    B: Readable2<f64> + ?Sized,
{
    if lhs.shape() != rhs.shape() {
        return false;
    }
    (0..lhs.rows()).all(|r| {
        (0..lhs.cols()).all(|c| match (lhs.get(r, c), rhs.get(r, c)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        })
    })
}

fn copy_rows<M: Readable2<f64> + ?Sized>(matrix: &M) -> Result<Vec<Vec<f64>>> {
    (0..matrix.rows())
        .map(|r| (0..matrix.cols()).map(|c| matrix.get(r, c)).collect())
        .collect()
}

fn select(
    rows: (isize, isize, isize),
    cols: (isize, isize, isize),
    shape: (usize, usize),
) -> Result<(Axis, Axis)> {
    let row = Axis::select(rows.0, rows.1, rows.2, shape.0)?;
    let col = Axis::select(cols.0, cols.1, cols.2, shape.1)?;
    trace!(
        "matrix view rows {}..{} by {}, cols {}..{} by {} over {}×{} selects {}×{}",
        rows.0,
        rows.1,
        rows.2,
        cols.0,
        cols.1,
        cols.2,
        shape.0,
        shape.1,
        row.len(),
        col.len()
    );
    Ok((row, col))
}

/// A read-only dense matrix, or a strided sub-block view of one.
///
/// ```
/// use stridemat::math::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// let ab = a.times(&b).unwrap();
/// assert_eq!(ab.to_rows().unwrap(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
/// ```
#[derive(Clone)]
pub struct Matrix {
    backing: Rc<dyn Readable2<f64>>,
    row: Axis,
    col: Axis,
}

impl Matrix {
    fn from_store(store: Store2<f64>) -> Self {
        let (rows, cols) = store.shape();
        debug!("allocated {}×{} matrix", rows, cols);
        Self {
            backing: Rc::new(store),
            row: Axis::full(rows),
            col: Axis::full(cols),
        }
    }

    /// Allocate a `rows × cols` matrix, calling `fill` once per entry in
    /// row-major order.
    pub fn new<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Ok(Self::from_store(Store2::from_fn(rows, cols, fill)?))
    }

    pub(crate) fn try_new<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<f64>,
    {
        Ok(Self::from_store(Store2::try_from_fn(rows, cols, fill)?))
    }

    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::new(rows, cols, |_, _| value)
    }

    /// Take ownership of literal rows. They must be non-empty and rectangular.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self::from_store(Store2::from_rows(rows)?))
    }

    pub fn from_row_slices<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    /// A `rows × 1` column of zeros.
    pub fn column(rows: usize) -> Result<Self> {
        Self::zeros(rows, 1)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_store(Store2::zeros(rows, cols)?))
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Ones)
    }

    /// The `n × n` identity.
    pub fn eye(n: usize) -> Result<Self> {
        Ok(Self::from_store(Store2::eye(n)?))
    }

    pub fn from_fill(rows: usize, cols: usize, fill: Fill) -> Result<Self> {
        Self::from_fill_with(rows, cols, fill, &mut rand::thread_rng())
    }

    pub fn from_fill_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        fill: Fill,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(rows, cols, |r, c| fill.value_at(r, c, &mut *rng))
    }

    /// Uniform random entries in `[0, 1)`.
    pub fn rand(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Uniform)
    }

    pub fn rand_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(rows, cols, Fill::Uniform, rng)
    }

    /// Standard Gaussian random entries.
    pub fn randn(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Gaussian)
    }

    pub fn randn_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(rows, cols, Fill::Gaussian, rng)
    }

    pub fn rows(&self) -> usize {
        self.row.len()
    }

    pub fn cols(&self) -> usize {
        self.col.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn row_axis(&self) -> Axis {
        self.row
    }

    pub fn col_axis(&self) -> Axis {
        self.col
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let r = self.row.translate(row)?;
        let c = self.col.translate(col)?;
        self.backing.get(r, c)
    }

    /// A live view of rows `from_row..to_row` by `row_stride` and columns
    /// `from_col..to_col` by `col_stride`. Both upper bounds are exclusive.
    pub fn view(
        &self,
        from_row: isize,
        to_row: isize,
        row_stride: isize,
        from_col: isize,
        to_col: isize,
        col_stride: isize,
    ) -> Result<Self> {
        let (row, col) = select(
            (from_row, to_row, row_stride),
            (from_col, to_col, col_stride),
            self.shape(),
        )?;
        Ok(Self {
            backing: Rc::new(self.clone()),
            row,
            col,
        })
    }

    pub fn to_rows(&self) -> Result<Vec<Vec<f64>>> {
        copy_rows(self)
    }

    /// Copy the visible entries into fresh storage.
    pub fn copy(&self) -> Result<Self> {
        self.to_rows().and_then(Self::from_rows)
    }

    pub fn to_mutable(&self) -> Result<MutableMatrix> {
        self.to_rows().and_then(MutableMatrix::from_rows)
    }

    pub fn scale(&self, factor: f64) -> Result<Self> {
        Self::try_new(self.rows(), self.cols(), |r, c| Ok(self.get(r, c)? * factor))
    }

    /// Matrix product. A 1×1 operand on either side scales the other one.
    pub fn times<B>(&self, other: &B) -> Result<Self>
    where
        B: Readable2<f64> + ?Sized,
    {
        match product::plan(self, other)? {
            Plan::ScaleRhs(k) => {
                Self::try_new(other.rows(), other.cols(), |r, c| Ok(k * other.get(r, c)?))
            }
            Plan::ScaleLhs(k) => self.scale(k),
            Plan::Full { rows, cols } => {
                Self::try_new(rows, cols, |r, c| product::entry(self, other, r, c))
            }
        }
    }

    pub fn render(&self, config: &DisplayConfig) -> Result<String> {
        render_matrix(self, config)
    }
}

impl Readable2<f64> for Matrix {
    fn rows(&self) -> usize {
        Matrix::rows(self)
    }

    fn cols(&self) -> usize {
        Matrix::cols(self)
    }

    fn get(&self, row: usize, col: usize) -> Result<f64> {
        Matrix::get(self, row, col)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(value)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        same_elements(self, other)
    }
}

impl PartialEq<MutableMatrix> for Matrix {
    fn eq(&self, other: &MutableMatrix) -> bool {
        same_elements(self, other)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&DisplayConfig::default()).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("values", &self.to_rows().ok())
            .finish()
    }
}

/// A writable matrix, or a writable sub-block view of one.
#[derive(Clone)]
pub struct MutableMatrix {
    backing: Rc<dyn Writable2<f64>>,
    row: Axis,
    col: Axis,
}

impl MutableMatrix {
    fn from_store(store: MutableStore2<f64>) -> Self {
        let (rows, cols) = store.shape();
        debug!("allocated mutable {}×{} matrix", rows, cols);
        Self {
            backing: Rc::new(store),
            row: Axis::full(rows),
            col: Axis::full(cols),
        }
    }

    pub fn new<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Ok(Self::from_store(MutableStore2::from_fn(rows, cols, fill)?))
    }

    pub(crate) fn try_new<F>(rows: usize, cols: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<f64>,
    {
        Ok(Self::from_store(MutableStore2::try_from_fn(rows, cols, fill)?))
    }

    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::new(rows, cols, |_, _| value)
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self::from_store(MutableStore2::from_rows(rows)?))
    }

    pub fn from_row_slices<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    pub fn column(rows: usize) -> Result<Self> {
        Self::zeros(rows, 1)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_store(MutableStore2::zeros(rows, cols)?))
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Ones)
    }

    pub fn eye(n: usize) -> Result<Self> {
        Self::from_fill(n, n, Fill::Eye)
    }

    pub fn from_fill(rows: usize, cols: usize, fill: Fill) -> Result<Self> {
        Self::from_fill_with(rows, cols, fill, &mut rand::thread_rng())
    }

    pub fn from_fill_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        fill: Fill,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(rows, cols, |r, c| fill.value_at(r, c, &mut *rng))
    }

    pub fn rand(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Uniform)
    }

    pub fn rand_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(rows, cols, Fill::Uniform, rng)
    }

    pub fn randn(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fill(rows, cols, Fill::Gaussian)
    }

    pub fn randn_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(rows, cols, Fill::Gaussian, rng)
    }

    pub fn rows(&self) -> usize {
        self.row.len()
    }

    pub fn cols(&self) -> usize {
        self.col.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn row_axis(&self) -> Axis {
        self.row
    }

    pub fn col_axis(&self) -> Axis {
        self.col
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let r = self.row.translate(row)?;
        let c = self.col.translate(col)?;
        self.backing.get(r, c)
    }

    /// Write `value` at `(row, col)`, returning the previous value.
    pub fn set(&self, row: usize, col: usize, value: f64) -> Result<f64> {
        let r = self.row.translate(row)?;
        let c = self.col.translate(col)?;
        self.backing.set(r, c, value)
    }

    /// A live, writable sub-block view; see [`Matrix::view`].
    pub fn view(
        &self,
        from_row: isize,
        to_row: isize,
        row_stride: isize,
        from_col: isize,
        to_col: isize,
        col_stride: isize,
    ) -> Result<Self> {
        let (row, col) = select(
            (from_row, to_row, row_stride),
            (from_col, to_col, col_stride),
            self.shape(),
        )?;
        Ok(Self {
            backing: Rc::new(self.clone()),
            row,
            col,
        })
    }

    /// A read-only view of the whole matrix that still sees later writes.
    pub fn as_read_only(&self) -> Matrix {
        Matrix {
            backing: Rc::new(self.clone()),
            row: Axis::full(self.rows()),
            col: Axis::full(self.cols()),
        }
    }

    pub fn to_rows(&self) -> Result<Vec<Vec<f64>>> {
        copy_rows(self)
    }

    pub fn copy(&self) -> Result<Self> {
        self.to_rows().and_then(Self::from_rows)
    }

    pub fn to_matrix(&self) -> Result<Matrix> {
        self.to_rows().and_then(Matrix::from_rows)
    }

    pub fn scale(&self, factor: f64) -> Result<Self> {
        Self::try_new(self.rows(), self.cols(), |r, c| Ok(self.get(r, c)? * factor))
    }

    /// Set every visible entry to `value`.
    pub fn fill(&self, value: f64) -> Result<()> {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                self.set(r, c, value)?;
            }
        }
        Ok(())
    }

    /// Matrix product into fresh writable storage; see [`Matrix::times`].
    pub fn times<B>(&self, other: &B) -> Result<Self>
    where
        B: Readable2<f64> + ?Sized,
    {
        match product::plan(self, other)? {
            Plan::ScaleRhs(k) => {
                Self::try_new(other.rows(), other.cols(), |r, c| Ok(k * other.get(r, c)?))
            }
            Plan::ScaleLhs(k) => self.scale(k),
            Plan::Full { rows, cols } => {
                Self::try_new(rows, cols, |r, c| product::entry(self, other, r, c))
            }
        }
    }

    pub fn render(&self, config: &DisplayConfig) -> Result<String> {
        render_matrix(self, config)
    }
}

impl Readable2<f64> for MutableMatrix {
    fn rows(&self) -> usize {
        MutableMatrix::rows(self)
    }

    fn cols(&self) -> usize {
        MutableMatrix::cols(self)
    }

    fn get(&self, row: usize, col: usize) -> Result<f64> {
        MutableMatrix::get(self, row, col)
    }
}

impl Writable2<f64> for MutableMatrix {
    fn set(&self, row: usize, col: usize, value: f64) -> Result<f64> {
        MutableMatrix::set(self, row, col, value)
    }
}

impl TryFrom<Vec<Vec<f64>>> for MutableMatrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        MutableMatrix::from_rows(value)
    }
}

impl PartialEq for MutableMatrix {
    fn eq(&self, other: &Self) -> bool {
        same_elements(self, other)
    }
}

impl PartialEq<Matrix> for MutableMatrix {
    fn eq(&self, other: &Matrix) -> bool {
        same_elements(self, other)
    }
}

impl fmt::Display for MutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&DisplayConfig::default()).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl fmt::Debug for MutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableMatrix")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("values", &self.to_rows().ok())
            .finish()
    }
}
