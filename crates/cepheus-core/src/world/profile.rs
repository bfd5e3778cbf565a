//! Universal World Profile: the eight core statistics and the pipeline
//! that rolls them.
//!
//! Each statistic depends on statistics rolled before it, so the order in
//! which dice are thrown is part of the rules. [`PROFILE_PIPELINE`] lists
//! the steps in that order and [`ProfileStep::inputs`] names what each one
//! reads.
//!
//! ```
//! use cepheus_core::world::Profile;
//!
//! let profile = Profile::decode("A788899-C").unwrap();
//! assert_eq!(profile.population(), 8);
//! assert_eq!(profile.technology_level(), 12);
//! assert_eq!(profile.encode(), "A788899-C");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::RollDice;
use crate::error::{ProfileDefect, WorldError};
use crate::pseudohex::{self, ALPHABET, MAX_VALUE};

// ============================================================================
// STARPORT
// ============================================================================

/// Starport class, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Starport {
    /// Excellent: refined fuel, shipyard for starships.
    A,
    /// Good: refined fuel, shipyard for non-starships.
    B,
    /// Routine: unrefined fuel, repair facilities.
    C,
    /// Poor: unrefined fuel, no repairs.
    D,
    /// Frontier: a marked landing spot.
    E,
    /// No starport.
    X,
}

/// Upper bound of each starport bucket, checked in order; anything above
/// the last bucket is class A.
const STARPORT_BUCKETS: [(i32, Starport); 5] = [
    (2, Starport::X),
    (4, Starport::E),
    (6, Starport::D),
    (8, Starport::C),
    (10, Starport::B),
];

impl Starport {
    pub const ALL: [Starport; 6] = [
        Starport::A,
        Starport::B,
        Starport::C,
        Starport::D,
        Starport::E,
        Starport::X,
    ];

    pub fn code(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::X => 'X',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Class for a modified starport roll (`2D - 7 + population`).
    pub fn from_roll(roll: i32) -> Self {
        STARPORT_BUCKETS
            .iter()
            .find(|(upper, _)| roll <= *upper)
            .map_or(Self::A, |&(_, class)| class)
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// PROFILE
// ============================================================================

/// The statistics carried by a UWP code.
///
/// Every numeric field is at most 33, so the profile always has a
/// pseudohex encoding. Serialized as its `SWAHPGL-T` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Profile {
    starport: Starport,
    world_size: u8,
    atmosphere: u8,
    hydrographics: u8,
    population: u8,
    government: u8,
    law_level: u8,
    technology_level: u8,
}

impl Profile {
    /// Builds a profile from explicit statistics.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        starport: Starport,
        world_size: u8,
        atmosphere: u8,
        hydrographics: u8,
        population: u8,
        government: u8,
        law_level: u8,
        technology_level: u8,
    ) -> Result<Self, crate::error::CodecError> {
        let digits = [
            world_size,
            atmosphere,
            hydrographics,
            population,
            government,
            law_level,
            technology_level,
        ];
        for value in digits {
            pseudohex::digit(value)?;
        }
        Ok(Self {
            starport,
            world_size,
            atmosphere,
            hydrographics,
            population,
            government,
            law_level,
            technology_level,
        })
    }

    pub fn starport(&self) -> Starport {
        self.starport
    }

    pub fn world_size(&self) -> u8 {
        self.world_size
    }

    pub fn atmosphere(&self) -> u8 {
        self.atmosphere
    }

    pub fn hydrographics(&self) -> u8 {
        self.hydrographics
    }

    pub fn population(&self) -> u8 {
        self.population
    }

    pub fn government(&self) -> u8 {
        self.government
    }

    pub fn law_level(&self) -> u8 {
        self.law_level
    }

    pub fn technology_level(&self) -> u8 {
        self.technology_level
    }

    /// Renders the profile as `SWAHPGL-T`.
    pub fn encode(&self) -> String {
        let d = |v: u8| ALPHABET[usize::from(v)];
        [
            self.starport.code(),
            d(self.world_size),
            d(self.atmosphere),
            d(self.hydrographics),
            d(self.population),
            d(self.government),
            d(self.law_level),
            '-',
            d(self.technology_level),
        ]
        .iter()
        .collect()
    }

    /// Parses a `SWAHPGL-T` code.
    ///
    /// Letters are read case-insensitively, the starport class included.
    pub fn decode(code: &str) -> Result<Self, WorldError> {
        let malformed = |defect: ProfileDefect| WorldError::MalformedProfile {
            code: code.to_string(),
            defect,
        };

        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 9 {
            return Err(malformed(ProfileDefect::Length(chars.len())));
        }
        if chars[7] != '-' {
            return Err(malformed(ProfileDefect::MissingDash));
        }
        let starport = Starport::from_code(chars[0].to_ascii_uppercase())
            .ok_or_else(|| malformed(ProfileDefect::Starport(chars[0])))?;

        let mut digits = [0u8; 7];
        for (slot, &c) in digits.iter_mut().zip(chars[1..7].iter().chain(&chars[8..])) {
            *slot = pseudohex::decode(c).map_err(|e| malformed(ProfileDefect::Digit(e)))?;
        }
        let [size, atm, hyd, pop, gov, law, tech] = digits;

        Ok(Self {
            starport,
            world_size: size,
            atmosphere: atm,
            hydrographics: hyd,
            population: pop,
            government: gov,
            law_level: law,
            technology_level: tech,
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl TryFrom<String> for Profile {
    type Error = WorldError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::decode(&code)
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.encode()
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// One derivation step of profile generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileStep {
    WorldSize,
    Atmosphere,
    Hydrographics,
    Population,
    PopulationModifier,
    Starport,
    Government,
    LawLevel,
    TechnologyLevel,
}

/// Steps in the order their dice are thrown.
pub const PROFILE_PIPELINE: [ProfileStep; 9] = [
    ProfileStep::WorldSize,
    ProfileStep::Atmosphere,
    ProfileStep::Hydrographics,
    ProfileStep::Population,
    ProfileStep::PopulationModifier,
    ProfileStep::Starport,
    ProfileStep::Government,
    ProfileStep::LawLevel,
    ProfileStep::TechnologyLevel,
];

impl ProfileStep {
    /// Statistics this step reads.
    pub const fn inputs(self) -> &'static [ProfileStep] {
        match self {
            Self::WorldSize => &[],
            Self::Atmosphere => &[Self::WorldSize],
            Self::Hydrographics => &[Self::WorldSize, Self::Atmosphere],
            Self::Population => &[Self::WorldSize, Self::Atmosphere, Self::Hydrographics],
            Self::PopulationModifier | Self::Starport | Self::Government => &[Self::Population],
            Self::LawLevel => &[Self::Government],
            Self::TechnologyLevel => &[
                Self::Starport,
                Self::WorldSize,
                Self::Atmosphere,
                Self::Hydrographics,
                Self::Population,
                Self::Government,
            ],
        }
    }
}

/// Output of the pipeline: the profile plus the population modifier rolled
/// along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolledProfile {
    pub profile: Profile,
    pub population_modifier: u8,
}

/// Runs every step of [`PROFILE_PIPELINE`].
pub fn generate_profile(dice: &mut impl RollDice) -> RolledProfile {
    let world_size = roll_world_size(dice);
    let atmosphere = roll_atmosphere(dice, world_size);
    let hydrographics = roll_hydrographics(dice, world_size, atmosphere);
    let population = roll_population(dice, world_size, atmosphere, hydrographics);
    let population_modifier = roll_population_modifier(dice, population);
    let starport = roll_starport(dice, population);
    let government = roll_government(dice, population);
    let law_level = roll_law_level(dice, government);
    let technology_level = roll_technology_level(
        dice,
        starport,
        world_size,
        atmosphere,
        hydrographics,
        population,
        government,
    );

    RolledProfile {
        profile: Profile {
            starport,
            world_size,
            atmosphere,
            hydrographics,
            population,
            government,
            law_level,
            technology_level,
        },
        population_modifier,
    }
}

fn stat(value: i32, max: u32) -> u8 {
    value.clamp(0, max as i32) as u8
}

/// `2D - 2`
pub fn roll_world_size(dice: &mut impl RollDice) -> u8 {
    stat(dice.two_d6() - 2, MAX_VALUE)
}

pub fn roll_atmosphere(dice: &mut impl RollDice, world_size: u8) -> u8 {
    if world_size == 0 {
        return 0;
    }
    stat(dice.two_d6() - 7 + i32::from(world_size), 15)
}

pub fn roll_hydrographics(dice: &mut impl RollDice, world_size: u8, atmosphere: u8) -> u8 {
    if world_size <= 1 {
        return 0;
    }
    let mut r = dice.two_d6() - 7 + i32::from(world_size);
    match atmosphere {
        0 | 1 | 10 | 11 | 12 => r -= 4,
        14 => r -= 2,
        _ => {}
    }
    stat(r, 10)
}

pub fn roll_population(
    dice: &mut impl RollDice,
    world_size: u8,
    atmosphere: u8,
    hydrographics: u8,
) -> u8 {
    let mut r = dice.two_d6() - 2;
    if world_size <= 2 {
        r -= 1;
    }
    if atmosphere >= 10 {
        r -= 2;
    } else if atmosphere == 6 {
        r += 3;
    } else if matches!(atmosphere, 5 | 8) {
        r += 1;
    } else if atmosphere < 3 && hydrographics == 0 {
        r -= 2;
    }
    stat(r, 10)
}

/// Leading digit of the population count.
pub fn roll_population_modifier(dice: &mut impl RollDice, population: u8) -> u8 {
    if population == 0 {
        return 0;
    }
    stat((dice.two_d6() - 3).max(1), MAX_VALUE)
}

pub fn roll_starport(dice: &mut impl RollDice, population: u8) -> Starport {
    Starport::from_roll(dice.two_d6() - 7 + i32::from(population))
}

pub fn roll_government(dice: &mut impl RollDice, population: u8) -> u8 {
    if population == 0 {
        return 0;
    }
    stat(dice.two_d6() - 7 + i32::from(population), 15)
}

pub fn roll_law_level(dice: &mut impl RollDice, government: u8) -> u8 {
    if government == 0 {
        return 0;
    }
    stat(dice.two_d6() - 7 + i32::from(government), MAX_VALUE)
}

/// `1D` plus the technology DMs, then the environmental minimums.
///
/// The result is never below zero. Older generators let a negative total
/// wrap around to the top of the alphabet (`X`, `Y`, `Z`); here it stops
/// at `0`. Trade codes never read the technology level.
pub fn roll_technology_level(
    dice: &mut impl RollDice,
    starport: Starport,
    world_size: u8,
    atmosphere: u8,
    hydrographics: u8,
    population: u8,
    government: u8,
) -> u8 {
    let r = dice.d6()
        + technology_dm(
            starport,
            world_size,
            atmosphere,
            hydrographics,
            population,
            government,
        );
    let r = match technology_minimum(atmosphere, hydrographics, population) {
        Some(floor) => r.max(floor),
        None => r,
    };
    stat(r, MAX_VALUE)
}

/// Sum of the technology level dice modifiers.
pub fn technology_dm(
    starport: Starport,
    world_size: u8,
    atmosphere: u8,
    hydrographics: u8,
    population: u8,
    government: u8,
) -> i32 {
    let starport_dm = match starport {
        Starport::A => 6,
        Starport::B => 4,
        Starport::C => 2,
        Starport::D | Starport::E => 0,
        Starport::X => -4,
    };
    let size_dm = match world_size {
        0 | 1 => 2,
        2..=4 => 1,
        _ => 0,
    };
    let atmosphere_dm = i32::from(atmosphere <= 3 || atmosphere >= 10);
    let hydrographics_dm = match hydrographics {
        0 | 9 => 1,
        10 => 2,
        _ => 0,
    };
    let government_dm = match government {
        0 | 5 => 1,
        7 => 2,
        13 | 14 => -2,
        _ => 0,
    };
    starport_dm
        + size_dm
        + atmosphere_dm
        + hydrographics_dm
        + population_technology_dm(population)
        + government_dm
}

// The high-population bracket reads "at most 10 and at least 12" in the
// rules and never matches.
#[allow(clippy::impossible_comparisons)]
fn population_technology_dm(population: u8) -> i32 {
    if matches!(population, 1..=5 | 9) {
        1
    } else if population <= 10 && population >= 12 {
        i32::from(population) - 8
    } else {
        0
    }
}

/// Minimum technology level a world needs to keep its population alive,
/// first matching rule wins.
// The third rule can never match (thin atmosphere and exotic atmosphere at
// once); it stays as printed.
#[allow(clippy::impossible_comparisons)]
pub fn technology_minimum(atmosphere: u8, hydrographics: u8, population: u8) -> Option<i32> {
    if matches!(hydrographics, 0 | 10) && population >= 6 {
        Some(4)
    } else if matches!(atmosphere, 4 | 7 | 9) {
        Some(5)
    } else if atmosphere <= 3 && matches!(atmosphere, 10..=12) {
        Some(7)
    } else if matches!(atmosphere, 13 | 14) && hydrographics == 10 {
        Some(7)
    } else {
        None
    }
}
