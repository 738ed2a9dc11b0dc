//! Pseudo-random number generation and the randomized operators.
//!
//! Provides a fast PRNG ([`Rng`]) based on the xoshiro256\*\* algorithm and
//! the `roll` / `deal` operators that draw from it.
//!
//! # Design
//!
//! - **Explicit state**: the generator lives in the [`Context`]; operators
//!   that draw from it take `&mut Context`. There is no global or
//!   thread-local state.
//! - Seeding uses `SplitMix64` to expand a single `u64` into the 4-word
//!   xoshiro256\*\* state (avoids the zero-state trap).

use std::collections::HashMap;

use crate::array::{Array, Value};
use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::scalar::Scalar;

// ---------------------------------------------------------------------------
// SplitMix64, used only for seeding
// ---------------------------------------------------------------------------

#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// ---------------------------------------------------------------------------
// Rng: xoshiro256**
// ---------------------------------------------------------------------------

/// A small, fast pseudo-random number generator.
///
/// ```
/// use glyph_core::random::Rng;
///
/// let mut rng = Rng::new(42);
/// assert!(rng.next_below(6) < 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    /// Create a new PRNG seeded from a single `u64`.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let s = [
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
        ];
        Self { s }
    }

    /// Re-seed the generator, discarding all previous state.
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Generate the next random `u64`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Uniform integer in `[0, n)` without modulo bias. `n` must be nonzero.
    pub fn next_below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0, "next_below requires n > 0");
        let threshold = n.wrapping_neg() % n;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return r % n;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Replace every integer `n` in `v` by a random integer in
/// `origin … origin+n-1`. Shape is preserved.
pub fn roll(ctx: &mut Context, v: &Value) -> Result<Value> {
    match v {
        Value::Scalar(s) => roll_one(ctx, s).map(Value::Scalar),
        Value::Array(a) => {
            let mut data = Vec::with_capacity(a.numel());
            for e in a.iter() {
                data.push(roll(ctx, e)?);
            }
            Array::from_vec(data, a.shape().to_vec()).map(Value::Array)
        }
    }
}

fn roll_one(ctx: &mut Context, s: &Scalar) -> Result<Scalar> {
    let n = positive_count("roll", s)?;
    let origin = ctx.origin();
    let r = ctx.rng_mut().next_below(n);
    Ok(Scalar::int(origin + r as i64))
}

/// `k` distinct random integers drawn from `origin … origin+n-1`.
pub fn deal(ctx: &mut Context, k: &Value, n: &Value) -> Result<Value> {
    let k = count_arg("deal", k)?;
    let n = count_arg("deal", n)?;
    if k > n {
        return Err(CoreError::Domain {
            op: "deal",
            reason: "cannot deal more values than the range holds",
        });
    }
    let origin = ctx.origin();
    let rng = ctx.rng_mut();

    // Partial Fisher-Yates over 0..n. Only displaced slots are stored, so
    // memory is O(k) however large the range.
    let mut displaced: HashMap<u64, u64> = HashMap::new();
    let mut data = Vec::new();
    for i in 0..k {
        let j = i + rng.next_below(n - i);
        let at_j = displaced.get(&j).copied().unwrap_or(j);
        let at_i = displaced.get(&i).copied().unwrap_or(i);
        displaced.insert(j, at_i);
        data.push(Value::int(origin + at_j as i64));
    }
    Ok(Value::Array(Array::vector(data)))
}

fn positive_count(op: &'static str, s: &Scalar) -> Result<u64> {
    let n = s
        .to_i64()
        .ok_or(CoreError::TypeMismatch {
            op,
            expected: "an integer",
        })?;
    if n < 1 {
        return Err(CoreError::Domain {
            op,
            reason: "argument must be positive",
        });
    }
    Ok(n as u64)
}

fn count_arg(op: &'static str, v: &Value) -> Result<u64> {
    let s = v.as_scalar().ok_or(CoreError::TypeMismatch {
        op,
        expected: "a scalar",
    })?;
    let n = s.to_i64().ok_or(CoreError::TypeMismatch {
        op,
        expected: "an integer",
    })?;
    u64::try_from(n).map_err(|_| CoreError::Domain {
        op,
        reason: "argument must not be negative",
    })
}

// ===========================================================================
// Tests
// ===========================================================================
