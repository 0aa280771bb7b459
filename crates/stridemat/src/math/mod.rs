//! Dense vectors and matrices with zero-copy strided views.
//!
//! Every view chain bottoms out in one of the stores in [`store`]. Above
//! that, each `Vector`/`Matrix` holds an `Rc` to whatever it wraps (a store
//! for fresh entities, the parent entity for views) plus one
//! [`index::Axis`] per dimension.
pub mod capability;
pub mod format;
pub mod index;
pub mod matrix;
pub mod product;
pub mod store;
pub mod vector;

pub use capability::{Readable1, Readable2, Writable1, Writable2};
pub use index::{check_selection, physical_index, Axis};
pub use matrix::{Matrix, MutableMatrix};
pub use store::{MutableStore1, MutableStore2, Store1, Store2};
pub use vector::{MutableVector, Vector};
