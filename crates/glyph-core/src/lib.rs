//! `glyph-core` — value domain and array operators for the glyph calculator.
//!
//! Provides the scalar tower (characters, machine and arbitrary-precision
//! integers, rationals, binary floats, complex numbers), a total order over
//! it, shaped nestable arrays, and the built-in unary array operators.
//! Parsing, evaluation and the REPL live in the embedding interpreter.
//!
//! # Design
//!
//! - Closed enums for scalar kinds with an explicit [`Rank`] table; binary
//!   operations promote, compute, then shrink back down.
//! - All interpreter state an operator may read (index origin, float
//!   precision, random generator) is passed explicitly as a [`Context`].
//! - Arrays share storage behind an `Arc` and copy on write, so operators
//!   never alter their inputs.

pub mod array;
pub mod context;
pub mod error;
pub mod order;
pub mod random;
pub mod scalar;

// Re-export key types at crate root for convenience.
pub use array::{Array, Value};
pub use context::{Config, Context};
pub use error::{CoreError, Result};
pub use order::ordered_compare;
pub use scalar::{BigFloat, Complex, Rank, Real, Scalar};

/// Items intended for glob-import: `use glyph_core::prelude::*;`
pub mod prelude {
    pub use crate::array::{Array, Value};
    pub use crate::context::{Config, Context};
    pub use crate::error::{CoreError, Result};
    pub use crate::order::{compare_values, ordered_compare};
    pub use crate::scalar::{BigFloat, Complex, Rank, Real, Scalar};
}
