//! # Glyph
//!
//! The numeric and array core of an arbitrary-precision, APL-style
//! calculator.
//!
//! One `use glyph::prelude::*;` gives you scalars, arrays, the evaluation
//! context and the total order; the operators themselves live under
//! [`core::array`] and [`core::random`].
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Scalar tower, arrays, array operators |

pub use glyph_core as core;

/// Glob-import convenience: `use glyph::prelude::*;`
pub mod prelude {
    pub use glyph_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_reaches_operators() {
        let ctx = Context::default();
        let v = crate::core::array::iota(&ctx, &Value::int(3)).unwrap();
        assert_eq!(v.to_string(), "1 2 3");
    }
}
