//! Execution context: index origin, float precision, and RNG state.
//!
//! The embedding interpreter owns a [`Context`] for the lifetime of a
//! session and passes it to every operator. Operators read the origin and
//! precision; only the randomized operators advance the RNG, and they take
//! `&mut Context` to do so.

use crate::error::{CoreError, Result};
use crate::random::Rng;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Index origin for index-generating operators; 0 or 1.
    pub origin: i64,

    /// Mantissa precision of floats, in bits.
    pub float_prec: u32,

    /// Initial RNG seed.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: 1,
            float_prec: 256,
            seed: 0,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_float_prec(mut self, bits: u32) -> Self {
        self.float_prec = bits;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Per-session evaluation state.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    rng: Rng,
}

impl Context {
    /// Validate `config` and seed the RNG from it.
    pub fn new(config: Config) -> Result<Self> {
        check_origin(config.origin)?;
        check_prec(config.float_prec)?;
        let rng = Rng::new(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn origin(&self) -> i64 {
        self.config.origin
    }

    #[inline]
    pub fn float_prec(&self) -> u32 {
        self.config.float_prec
    }

    pub fn set_origin(&mut self, origin: i64) -> Result<()> {
        check_origin(origin)?;
        self.config.origin = origin;
        Ok(())
    }

    pub fn set_float_prec(&mut self, bits: u32) -> Result<()> {
        check_prec(bits)?;
        self.config.float_prec = bits;
        Ok(())
    }

    /// Reseed the RNG, discarding its state.
    pub fn seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng.seed(seed);
    }

    pub fn rng_mut(&mut self) -> &mut Rng {
        &mut self.rng
    }

    /// Apply a `)`-directive line such as `)seed 7`, `)origin 0` or
    /// `)prec 512`.
    pub fn directive(&mut self, line: &str) -> Result<()> {
        let bad = || CoreError::Directive {
            line: line.to_string(),
        };
        let rest = line.trim().strip_prefix(')').ok_or_else(bad)?;
        let mut words = rest.split_whitespace();
        let (Some(name), Some(arg), None) = (words.next(), words.next(), words.next()) else {
            return Err(bad());
        };
        match name {
            "seed" => self.seed(arg.parse().map_err(|_| bad())?),
            "origin" => self.set_origin(arg.parse().map_err(|_| bad())?)?,
            "prec" => self.set_float_prec(arg.parse().map_err(|_| bad())?)?,
            _ => return Err(bad()),
        }
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        let config = Config::default();
        let rng = Rng::new(config.seed);
        Self { config, rng }
    }
}

fn check_origin(origin: i64) -> Result<()> {
    if origin == 0 || origin == 1 {
        Ok(())
    } else {
        Err(CoreError::Domain {
            op: "origin",
            reason: "origin must be 0 or 1",
        })
    }
}

fn check_prec(bits: u32) -> Result<()> {
    if bits == 0 {
        return Err(CoreError::Domain {
            op: "prec",
            reason: "float precision must be positive",
        });
    }
    Ok(())
}
