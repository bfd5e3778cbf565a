//! Six-sided dice, the only source of randomness in generation.
//!
//! Every generator takes `&mut impl RollDice` so callers decide where the
//! faces come from: a seeded [`Dice`] for reproducible sectors, an
//! entropy-seeded one for the CLI, or the fakes in [`testing`].

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Result of rolling a handful of dice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Individual faces, 1–6, in roll order.
    pub faces: Vec<u8>,
    /// Sum of the faces.
    pub total: u32,
}

impl Roll {
    pub fn from_faces(faces: Vec<u8>) -> Self {
        let total = faces.iter().map(|&f| u32::from(f)).sum();
        Self { faces, total }
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} = {}", self.faces, self.total)
    }
}

/// A source of d6 rolls.
pub trait RollDice {
    /// Roll `count` dice.
    fn roll(&mut self, count: usize) -> Roll;

    /// Roll `count` dice and return only the sum, signed for table arithmetic.
    fn total(&mut self, count: usize) -> i32 {
        self.roll(count).total as i32
    }

    /// 1D
    fn d6(&mut self) -> i32 {
        self.total(1)
    }

    /// 2D, the default throw for nearly every table.
    fn two_d6(&mut self) -> i32 {
        self.total(2)
    }
}

impl<T: RollDice + ?Sized> RollDice for &mut T {
    fn roll(&mut self, count: usize) -> Roll {
        (**self).roll(count)
    }
}

/// Dice backed by any `rand` generator. Remembers the last roll.
#[derive(Debug, Clone)]
pub struct Dice<R = ChaCha8Rng> {
    rng: R,
    last: Roll,
}

impl Dice<ChaCha8Rng> {
    /// Deterministic dice: the same seed always gives the same faces.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Dice<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            last: Roll::default(),
        }
    }

    /// The most recent roll (empty before the first one).
    pub fn last(&self) -> &Roll {
        &self.last
    }
}

impl<R: Rng> RollDice for Dice<R> {
    fn roll(&mut self, count: usize) -> Roll {
        let faces = (0..count).map(|_| self.rng.gen_range(1..=6u8)).collect();
        self.last = Roll::from_faces(faces);
        self.last.clone()
    }
}

impl<R> fmt::Display for Dice<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Last roll: {}", self.last)
    }
}

/// Deterministic fakes for tests and examples.
pub mod testing {
    use std::collections::VecDeque;

    use super::{Roll, RollDice};

    /// Every die shows the same face.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedDice(pub u8);

    impl RollDice for FixedDice {
        fn roll(&mut self, count: usize) -> Roll {
            Roll::from_faces(vec![self.0; count])
        }
    }

    /// Hands out pre-arranged faces in order and counts how many were used.
    ///
    /// Panics when the script runs out, which in a test means the code
    /// under test rolled more dice than expected.
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedDice {
        faces: VecDeque<u8>,
        rolled: usize,
    }

    impl ScriptedDice {
        pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
            Self {
                faces: faces.into_iter().collect(),
                rolled: 0,
            }
        }

        /// Script a sequence of 2D totals, each split into two faces.
        pub fn totals(totals: impl IntoIterator<Item = u8>) -> Self {
            Self::new(totals.into_iter().flat_map(|t| {
                let first = t.saturating_sub(1).clamp(1, 6);
                [first, t - first]
            }))
        }

        /// Faces consumed so far.
        pub fn rolled(&self) -> usize {
            self.rolled
        }

        /// Faces still waiting.
        pub fn remaining(&self) -> usize {
            self.faces.len()
        }
    }

    impl RollDice for ScriptedDice {
        fn roll(&mut self, count: usize) -> Roll {
            let faces = (0..count)
                .map(|_| {
                    let face = self.faces.pop_front();
                    let face = face
                        .unwrap_or_else(|| panic!("script exhausted after {} faces", self.rolled));
                    self.rolled += 1;
                    face
                })
                .collect();
            Roll::from_faces(faces)
        }
    }
}
