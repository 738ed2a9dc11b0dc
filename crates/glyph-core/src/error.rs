use core::fmt;

/// All errors returned by `glyph-core`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An operand has a kind the operator cannot act on.
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
    },

    /// A representation-level failure (zero denominator, division by zero).
    Arithmetic { reason: &'static str },

    /// Operand shapes are incompatible.
    ShapeMismatch {
        op: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// The operand kind is right but its value is outside the operator's domain.
    Domain {
        op: &'static str,
        reason: &'static str,
    },

    /// A shape specification does not match the data it describes.
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// A context directive could not be understood.
    Directive { line: String },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { op, expected } => {
                write!(f, "{op}: type mismatch, expected {expected}")
            }
            Self::Arithmetic { reason } => write!(f, "arithmetic error: {reason}"),
            Self::ShapeMismatch { op, left, right } => {
                write!(f, "{op}: shape mismatch {left:?} vs {right:?}")
            }
            Self::Domain { op, reason } => write!(f, "{op}: {reason}"),
            Self::InvalidShape { shape, reason } => {
                write!(f, "invalid shape {shape:?}: {reason}")
            }
            Self::Directive { line } => write!(f, "unknown directive: {line}"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Convenience alias used throughout `glyph-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CoreError::ShapeMismatch {
            op: "add",
            left: vec![2],
            right: vec![3],
        };
        assert_eq!(e.to_string(), "add: shape mismatch [2] vs [3]");

        let e = CoreError::Arithmetic {
            reason: "zero denominator",
        };
        assert_eq!(e.to_string(), "arithmetic error: zero denominator");

        let e = CoreError::Directive {
            line: ")frobnicate".into(),
        };
        assert_eq!(e.to_string(), "unknown directive: )frobnicate");
    }
}
