use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};
use std::fmt;

/// Exclusive upper bound of every channel; keeps lines away from white.
pub const CHANNEL_LIMIT: u8 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Random series colours, reproducible when seeded.
pub struct ColorGenerator {
    rng: StdRng,
}

impl ColorGenerator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded generator when `seed` is set, entropy-seeded otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform random colour with each channel in `0..CHANNEL_LIMIT`.
    pub fn next_color(&mut self) -> Rgb {
        Rgb {
            r: self.rng.random_range(0..CHANNEL_LIMIT),
            g: self.rng.random_range(0..CHANNEL_LIMIT),
            b: self.rng.random_range(0..CHANNEL_LIMIT),
        }
    }

    /// Next colour not already in `used`.
    pub fn next_distinct(&mut self, used: &[Rgb]) -> Rgb {
        loop {
            let color = self.next_color();
            if !used.contains(&color) {
                return color;
            }
        }
    }
}
