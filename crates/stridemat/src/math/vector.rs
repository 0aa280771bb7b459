use std::fmt;
use std::rc::Rc;

use log::{debug, trace};
use rand::Rng;

use crate::config::{DisplayConfig, Fill};
use crate::error::{MatrixError, Result};
use crate::math::capability::{Readable1, Writable1};
use crate::math::format::render_vector;
use crate::math::index::Axis;
use crate::math::store::{MutableStore1, Store1};

fn same_elements<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: Readable1<f64> + ?Sized,
    B: Readable1<f64> + ?Sized,
{
    lhs.size() == rhs.size()
        && (0..lhs.size()).all(|i| match (lhs.get(i), rhs.get(i)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        })
}

/// A read-only vector, or a strided view of one.
///
/// Cloning a `Vector` clones the handle, not the data. Views share storage
/// with whatever they were taken from:
///
/// ```
/// use stridemat::math::Vector;
///
/// let v = Vector::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
/// let odd = v.view(1, 5, 2).unwrap();
/// assert_eq!(odd.to_vec().unwrap(), vec![1.0, 3.0]);
/// ```
#[derive(Clone)]
pub struct Vector {
    backing: Rc<dyn Readable1<f64>>,
    axis: Axis,
}

impl Vector {
    fn from_store(store: Store1<f64>) -> Self {
        debug!("allocated vector of {} elements", store.len());
        Self {
            axis: Axis::full(store.len()),
            backing: Rc::new(store),
        }
    }

    /// Allocate `len` elements, calling `fill` once per index in order.
    pub fn new<F: FnMut(usize) -> f64>(len: usize, fill: F) -> Result<Self> {
        Ok(Self::from_store(Store1::from_fn(len, fill)?))
    }

    pub(crate) fn try_new<F>(len: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<f64>,
    {
        Ok(Self::from_store(Store1::try_from_fn(len, fill)?))
    }

    pub fn from_elem(len: usize, value: f64) -> Result<Self> {
        Self::new(len, |_| value)
    }

    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        Ok(Self::from_store(Store1::from_vec(data)?))
    }

    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    pub fn zeros(len: usize) -> Result<Self> {
        Ok(Self::from_store(Store1::zeros(len)?))
    }

    pub fn ones(len: usize) -> Result<Self> {
        Ok(Self::from_store(Store1::ones(len)?))
    }

    pub fn from_fill(len: usize, fill: Fill) -> Result<Self> {
        Self::from_fill_with(len, fill, &mut rand::thread_rng())
    }

    pub fn from_fill_with<R: Rng + ?Sized>(len: usize, fill: Fill, rng: &mut R) -> Result<Self> {
        Self::new(len, |i| fill.value_at(i, 0, &mut *rng))
    }

    /// Uniform random entries in `[0, 1)`.
    pub fn rand(len: usize) -> Result<Self> {
        Self::from_fill(len, Fill::Uniform)
    }

    pub fn rand_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(len, Fill::Uniform, rng)
    }

    /// Standard Gaussian random entries.
    pub fn randn(len: usize) -> Result<Self> {
        Self::from_fill(len, Fill::Gaussian)
    }

    pub fn randn_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(len, Fill::Gaussian, rng)
    }

    pub fn size(&self) -> usize {
        self.axis.len()
    }

    /// This vector's placement within its backing.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.backing.get(self.axis.translate(index)?)
    }

    /// A live view of `from..to` stepping by `stride`; `to` is exclusive.
    pub fn view(&self, from: isize, to: isize, stride: isize) -> Result<Self> {
        let axis = Axis::select(from, to, stride, self.size())?;
        trace!(
            "vector view {}..{} by {} over {} elements selects {}",
            from,
            to,
            stride,
            self.size(),
            axis.len()
        );
        Ok(Self {
            backing: Rc::new(self.clone()),
            axis,
        })
    }

    pub fn to_vec(&self) -> Result<Vec<f64>> {
        (0..self.size()).map(|i| self.get(i)).collect()
    }

    /// Copy the visible elements into fresh storage.
    pub fn copy(&self) -> Result<Self> {
        Self::try_new(self.size(), |i| self.get(i))
    }

    pub fn to_mutable(&self) -> Result<MutableVector> {
        MutableVector::try_new(self.size(), |i| self.get(i))
    }

    pub fn scale(&self, factor: f64) -> Result<Self> {
        Self::try_new(self.size(), |i| Ok(self.get(i)? * factor))
    }

    pub fn render(&self, config: &DisplayConfig) -> Result<String> {
        render_vector(self, config)
    }
}

impl Readable1<f64> for Vector {
    fn size(&self) -> usize {
        Vector::size(self)
    }

    fn get(&self, index: usize) -> Result<f64> {
        Vector::get(self, index)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = MatrixError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector::from_vec(value)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        same_elements(self, other)
    }
}

impl PartialEq<MutableVector> for Vector {
    fn eq(&self, other: &MutableVector) -> bool {
        same_elements(self, other)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&DisplayConfig::default()).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("axis", &self.axis)
            .field("values", &self.to_vec().ok())
            .finish()
    }
}

/// A vector whose elements can be written, along with every view of it.
///
/// Writes land in the shared root storage, so they are visible through the
/// parent and through every view that covers the same element.
#[derive(Clone)]
pub struct MutableVector {
    backing: Rc<dyn Writable1<f64>>,
    axis: Axis,
}

impl MutableVector {
    fn from_store(store: MutableStore1<f64>) -> Self {
        debug!("allocated mutable vector of {} elements", store.len());
        Self {
            axis: Axis::full(store.len()),
            backing: Rc::new(store),
        }
    }

    pub fn new<F: FnMut(usize) -> f64>(len: usize, fill: F) -> Result<Self> {
        Ok(Self::from_store(MutableStore1::from_fn(len, fill)?))
    }

    pub(crate) fn try_new<F>(len: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<f64>,
    {
        Ok(Self::from_store(MutableStore1::try_from_fn(len, fill)?))
    }

    pub fn from_elem(len: usize, value: f64) -> Result<Self> {
        Self::new(len, |_| value)
    }

    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        Ok(Self::from_store(MutableStore1::from_vec(data)?))
    }

    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    pub fn zeros(len: usize) -> Result<Self> {
        Ok(Self::from_store(MutableStore1::zeros(len)?))
    }

    pub fn ones(len: usize) -> Result<Self> {
        Ok(Self::from_store(MutableStore1::ones(len)?))
    }

    pub fn from_fill(len: usize, fill: Fill) -> Result<Self> {
        Self::from_fill_with(len, fill, &mut rand::thread_rng())
    }

    pub fn from_fill_with<R: Rng + ?Sized>(len: usize, fill: Fill, rng: &mut R) -> Result<Self> {
        Self::new(len, |i| fill.value_at(i, 0, &mut *rng))
    }

    pub fn rand(len: usize) -> Result<Self> {
        Self::from_fill(len, Fill::Uniform)
    }

    pub fn rand_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(len, Fill::Uniform, rng)
    }

    pub fn randn(len: usize) -> Result<Self> {
        Self::from_fill(len, Fill::Gaussian)
    }

    pub fn randn_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fill_with(len, Fill::Gaussian, rng)
    }

    pub fn size(&self) -> usize {
        self.axis.len()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.backing.get(self.axis.translate(index)?)
    }

    /// Write `value` at `index`, returning the previous value.
    pub fn set(&self, index: usize, value: f64) -> Result<f64> {
        self.backing.set(self.axis.translate(index)?, value)
    }

    /// A live, writable view of `from..to` stepping by `stride`.
    pub fn view(&self, from: isize, to: isize, stride: isize) -> Result<Self> {
        let axis = Axis::select(from, to, stride, self.size())?;
        trace!(
            "mutable vector view {}..{} by {} over {} elements selects {}",
            from,
            to,
            stride,
            self.size(),
            axis.len()
        );
        Ok(Self {
            backing: Rc::new(self.clone()),
            axis,
        })
    }

    /// A read-only view of the whole vector that still sees later writes.
    pub fn as_read_only(&self) -> Vector {
        Vector {
            backing: Rc::new(self.clone()),
            axis: Axis::full(self.size()),
        }
    }

    pub fn to_vec(&self) -> Result<Vec<f64>> {
        (0..self.size()).map(|i| self.get(i)).collect()
    }

    pub fn copy(&self) -> Result<Self> {
        Self::try_new(self.size(), |i| self.get(i))
    }

    pub fn to_vector(&self) -> Result<Vector> {
        Vector::try_new(self.size(), |i| self.get(i))
    }

    pub fn scale(&self, factor: f64) -> Result<Self> {
        Self::try_new(self.size(), |i| Ok(self.get(i)? * factor))
    }

    /// Set every visible element to `value`.
    pub fn fill(&self, value: f64) -> Result<()> {
        for i in 0..self.size() {
            self.set(i, value)?;
        }
        Ok(())
    }

    pub fn render(&self, config: &DisplayConfig) -> Result<String> {
        render_vector(self, config)
    }
}

impl Readable1<f64> for MutableVector {
    fn size(&self) -> usize {
        MutableVector::size(self)
    }

    fn get(&self, index: usize) -> Result<f64> {
        MutableVector::get(self, index)
    }
}

impl Writable1<f64> for MutableVector {
    fn set(&self, index: usize, value: f64) -> Result<f64> {
        MutableVector::set(self, index, value)
    }
}

impl TryFrom<Vec<f64>> for MutableVector {
    type Error = MatrixError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        MutableVector::from_vec(value)
    }
}

impl PartialEq for MutableVector {
    fn eq(&self, other: &Self) -> bool {
        same_elements(self, other)
    }
}

impl PartialEq<Vector> for MutableVector {
    fn eq(&self, other: &Vector) -> bool {
        same_elements(self, other)
    }
}

impl fmt::Display for MutableVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&DisplayConfig::default()).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl fmt::Debug for MutableVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableVector")
            .field("axis", &self.axis)
            .field("values", &self.to_vec().ok())
            .finish()
    }
}
