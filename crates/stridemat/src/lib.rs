//! stridemat: dense vectors and matrices with zero-copy strided views.
//!
//! Selecting a sub-range, every n-th element or a sub-block of a vector or
//! matrix returns a new handle over the *same* storage. Writes through a
//! `MutableVector`/`MutableMatrix` view are seen by the parent and by every
//! overlapping view.
//!
//! Handles are reference counted and not thread safe; keep a view chain on
//! one thread.
pub mod config;
pub mod error;
pub mod math;

pub use error::{MatrixError, Result};
