//! What a backing store has to offer.
//!
//! A view only ever talks to its backing through these traits, which is
//! why a dense store and another view are interchangeable as backings:
//! `Vector` implements `Readable1` over itself, so a view of a view just
//! holds its parent as a `Rc<dyn Readable1<f64>>`.
//!
//! Writes take `&self`. Stores that accept them keep their cells behind
//! interior mutability so that many views can share one store.

use crate::error::Result;

pub trait Readable1<T> {
    /// Number of addressable elements.
    fn size(&self) -> usize;

    fn get(&self, index: usize) -> Result<T>;
}

pub trait Writable1<T>: Readable1<T> {
    /// Store `value` at `index`, returning what was there before.
    fn set(&self, index: usize, value: T) -> Result<T>;
}

pub trait Readable2<T> {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn get(&self, row: usize, col: usize) -> Result<T>;
}

pub trait Writable2<T>: Readable2<T> {
    /// Store `value` at `(row, col)`, returning what was there before.
    fn set(&self, row: usize, col: usize, value: T) -> Result<T>;
}
