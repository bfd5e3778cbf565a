//! PBG: population modifier, planetoid belts and gas giants, written as
//! three pseudohex digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::{roll_population_modifier, Profile};
use crate::dice::RollDice;
use crate::error::{CodecError, WorldError};
use crate::pseudohex::{self, ALPHABET};

/// Serialized as its three-digit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pbg {
    population_modifier: u8,
    planetoid_belts: u8,
    gas_giants: u8,
}

impl Pbg {
    pub fn new(
        population_modifier: u8,
        planetoid_belts: u8,
        gas_giants: u8,
    ) -> Result<Self, CodecError> {
        for value in [population_modifier, planetoid_belts, gas_giants] {
            pseudohex::digit(value)?;
        }
        Ok(Self {
            population_modifier,
            planetoid_belts,
            gas_giants,
        })
    }

    pub fn population_modifier(&self) -> u8 {
        self.population_modifier
    }

    pub fn planetoid_belts(&self) -> u8 {
        self.planetoid_belts
    }

    pub fn gas_giants(&self) -> u8 {
        self.gas_giants
    }

    /// Rolls the three values for a world with the given profile.
    ///
    /// The population modifier is thrown again here even when the profile
    /// pipeline already rolled one; this roll is the one that is kept.
    pub fn generate(dice: &mut impl RollDice, profile: &Profile) -> Self {
        let population_modifier = roll_population_modifier(dice, profile.population());

        let mut planetoid_belts = 0;
        if dice.two_d6() >= 4 {
            planetoid_belts = (dice.d6() - 3).max(1) as u8;
        }
        if profile.world_size() == 0 {
            planetoid_belts = planetoid_belts.max(1);
        }

        let mut gas_giants = 0;
        if dice.two_d6() >= 5 {
            gas_giants = (dice.d6() - 2).max(1) as u8;
        }

        Self {
            population_modifier,
            planetoid_belts,
            gas_giants,
        }
    }

    pub fn encode(&self) -> String {
        [self.population_modifier, self.planetoid_belts, self.gas_giants]
            .iter()
            .map(|&v| ALPHABET[usize::from(v)])
            .collect()
    }

    /// Parses a three-digit PBG code. Digit errors are reported as-is.
    pub fn decode(code: &str) -> Result<Self, WorldError> {
        let chars: Vec<char> = code.chars().collect();
        let [p, b, g] = chars.as_slice() else {
            return Err(WorldError::MalformedPbg {
                code: code.to_string(),
            });
        };
        Ok(Self {
            population_modifier: pseudohex::decode(*p)?,
            planetoid_belts: pseudohex::decode(*b)?,
            gas_giants: pseudohex::decode(*g)?,
        })
    }
}

impl fmt::Display for Pbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl TryFrom<String> for Pbg {
    type Error = WorldError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::decode(&code)
    }
}

impl From<Pbg> for String {
    fn from(pbg: Pbg) -> Self {
        pbg.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::testing::{FixedDice, ScriptedDice};
    use crate::dice::Dice;

    fn profile(code: &str) -> Profile {
        Profile::decode(code).unwrap()
    }

    #[test]
    fn all_sixes() {
        // modifier 12 - 3, belts 6 - 3, giants 6 - 2
        let pbg = Pbg::generate(&mut FixedDice(6), &profile("A8889AA-E"));
        assert_eq!(pbg.encode(), "934");
    }

    #[test]
    fn failed_checks_leave_nothing() {
        // modifier roll, belt check 3, giant check 4
        let mut dice = ScriptedDice::totals([7, 3, 4]);
        let pbg = Pbg::generate(&mut dice, &profile("C766755-8"));
        assert_eq!(pbg, Pbg::new(4, 0, 0).unwrap());
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn size_zero_always_has_a_belt() {
        // uninhabited: no modifier roll
        let mut dice = ScriptedDice::totals([2, 2]);
        let pbg = Pbg::generate(&mut dice, &profile("X000000-0"));
        assert_eq!(pbg, Pbg::new(0, 1, 0).unwrap());
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn low_die_still_gives_one() {
        // belt check passes with 1D = 1, giant check passes with 1D = 1
        let mut dice = ScriptedDice::new([3, 4, 2, 2, 1, 4, 1, 1]);
        let pbg = Pbg::generate(&mut dice, &profile("C766755-8"));
        assert_eq!(pbg, Pbg::new(4, 1, 1).unwrap());
    }

    #[test]
    fn decode_examples() {
        let pbg = Pbg::decode("703").unwrap();
        assert_eq!(pbg.population_modifier(), 7);
        assert_eq!(pbg.planetoid_belts(), 0);
        assert_eq!(pbg.gas_giants(), 3);
        assert_eq!(Pbg::decode("a1b").unwrap(), Pbg::new(10, 1, 11).unwrap());
    }

    #[test]
    fn decode_errors() {
        for code in ["", "12", "1234"] {
            assert_eq!(
                Pbg::decode(code),
                Err(WorldError::MalformedPbg {
                    code: code.to_string()
                })
            );
        }
        assert_eq!(
            Pbg::decode("1O2"),
            Err(WorldError::Codec(CodecError::UnknownSymbol('O')))
        );
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Pbg::new(0, 34, 0), Err(CodecError::OutOfRange(34)));
    }

    #[test]
    fn generated_values_round_trip() {
        let mut dice = Dice::seeded(99);
        for _ in 0..300 {
            let p = crate::world::generate_profile(&mut dice).profile;
            let pbg = Pbg::generate(&mut dice, &p);
            assert!(pbg.population_modifier() <= 9);
            assert!(pbg.planetoid_belts() <= 3);
            assert!(pbg.gas_giants() <= 4);
            if p.world_size() == 0 {
                assert!(pbg.planetoid_belts() >= 1);
            }
            assert_eq!(Pbg::decode(&pbg.encode()).unwrap(), pbg);
        }
    }
}
