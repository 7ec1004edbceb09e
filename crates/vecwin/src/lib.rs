//! Reallocation-safe windowed views over growable arrays.
//!
//! A window exposes a contiguous sub-range of a [`GrowableArray`] (a `Vec`,
//! a `SmallVec`, or anything else implementing the trait) and keeps that
//! sub-range correct while elements are inserted, removed, or the array's
//! storage is relocated by growth.
//!
//! # Types
//!
//! ```text
//! MutableWindow<'a, T, A>   exclusive borrow of A + (offset, len)
//! ├── as_read_only() ──────► ReadOnlyWindow<'_, T>  shared borrow, Copy
//! └── into_bounds() ───────► WindowBounds            no borrow, Copy
//!                             └── resolve(&[T]) ───► ReadOnlyWindow
//! ```
//!
//! The mutable window stores offsets, never addresses, between calls. Each
//! mutation is applied to the array directly and the window is then
//! re-derived from its recorded offset and new length.
//!
//! # Preconditions
//!
//! Out-of-range indices and ranges panic, like slice indexing. Every
//! panicking operation has a non-panicking counterpart (`get`, `last`,
//! `try_insert`, `try_remove`, `try_remove_range`, `try_with_range`) that
//! reports a [`WindowError`] instead.
//!
//! ```
//! use vecwin::MutableWindow;
//!
//! let mut array = vec![1, 2, 3, 4, 5];
//! let mut window = MutableWindow::with_range(&mut array, 1..4);
//! assert_eq!(window.remove(1), 3);
//! window.push(9);
//! assert_eq!(window.as_slice(), &[2, 4, 9]);
//! drop(window);
//! assert_eq!(array, [1, 2, 4, 9, 5]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod read;
pub mod write;

// Public re-exports for the primary API surface.
pub use bounds::WindowBounds;
pub use config::{ReservePolicy, WindowConfig};
pub use read::ReadOnlyWindow;
pub use vecwin_core::{GrowableArray, WindowError};
pub use write::MutableWindow;
