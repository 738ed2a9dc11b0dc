//! Pairwise promotion to a common representation.

use crate::context::Context;
use crate::error::Result;

use super::{Rank, Scalar};

/// Coerce both operands to the higher of their ranks.
///
/// Characters take part as integers; two characters promote to `Int`, since
/// promotion only happens ahead of arithmetic.
pub fn promote(ctx: &Context, a: &Scalar, b: &Scalar) -> Result<(Scalar, Scalar)> {
    let rank = a.rank().max(b.rank()).max(Rank::Int);
    let prec = ctx.float_prec();
    Ok((a.to_rank(rank, prec)?, b.to_rank(rank, prec)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Real;

    #[test]
    fn test_promote_int_bigint() {
        let ctx = Context::default();
        let (a, b) = promote(&ctx, &Scalar::int(1), &Scalar::bigint(2)).unwrap();
        assert_eq!(a, Scalar::bigint(1));
        assert_eq!(b, Scalar::bigint(2));
    }

    #[test]
    fn test_promote_rat_float() {
        let ctx = Context::default();
        let half = Scalar::rational(1, 2).unwrap();
        let f = Scalar::float(&ctx, 2.0).unwrap();
        let (a, b) = promote(&ctx, &half, &f).unwrap();
        assert_eq!(a.rank(), Rank::BigFloat);
        assert_eq!(a, Scalar::float(&ctx, 0.5).unwrap());
        assert_eq!(b, f);
    }

    #[test]
    fn test_promote_into_complex() {
        let ctx = Context::default();
        let z = Scalar::complex(Real::Int(0), Real::Int(1));
        let (a, b) = promote(&ctx, &Scalar::rational(1, 3).unwrap(), &z).unwrap();
        assert_eq!(a.rank(), Rank::Complex);
        assert_eq!(b, z);
    }

    #[test]
    fn test_promote_chars_are_ints() {
        let ctx = Context::default();
        let (a, b) = promote(&ctx, &Scalar::Char('a'), &Scalar::Char('b')).unwrap();
        assert_eq!(a, Scalar::int(97));
        assert_eq!(b, Scalar::int(98));
    }
}
