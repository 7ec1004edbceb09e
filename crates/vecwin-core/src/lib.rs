//! Core types and traits for vecwin windows.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the backing-array seam ([`GrowableArray`]) that windows mutate through,
//! and the [`WindowError`] type returned by checked window operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::WindowError;
pub use traits::GrowableArray;
