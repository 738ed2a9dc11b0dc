//! `Display` formatting for [`Value`] and [`Array`].
//!
//! Vectors print space-separated on one line, matrices one row per line,
//! and higher ranks as matrices separated by a blank line. A nested array
//! prints inline between parentheses. A top-level empty array prints as `#`.

use core::fmt;

use crate::scalar::Scalar;

use super::{Array, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Array(a) => write!(f, "{a}"),
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "#");
        }

        match self.ndim() {
            0 => write_element(f, &self.as_slice()[0]),
            1 => write_row(f, self.as_slice()),
            _ => {
                let cols = self.shape[self.ndim() - 1];
                let rows = self.shape[self.ndim() - 2];
                let plane = rows * cols;
                for (p, chunk) in self.as_slice().chunks(plane).enumerate() {
                    if p > 0 {
                        write!(f, "\n\n")?;
                    }
                    for (r, row) in chunk.chunks(cols).enumerate() {
                        if r > 0 {
                            writeln!(f)?;
                        }
                        write_row(f, row)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One row: a bare string when every element is a character, otherwise
/// space-separated elements.
fn write_row(f: &mut fmt::Formatter<'_>, row: &[Value]) -> fmt::Result {
    let is_text = row
        .iter()
        .all(|v| v.as_scalar().is_some_and(Scalar::is_char));
    for (i, v) in row.iter().enumerate() {
        if i > 0 && !is_text {
            write!(f, " ")?;
        }
        write_element(f, v)?;
    }
    Ok(())
}

fn write_element(f: &mut fmt::Formatter<'_>, v: &Value) -> fmt::Result {
    match v {
        Value::Scalar(s) => write!(f, "{s}"),
        Value::Array(a) => {
            write!(f, "(")?;
            write_row(f, a.as_slice())?;
            write!(f, ")")
        }
    }
}
