//! Naval, scout and pirate bases and their one-letter code.
//!
//! | Code | Bases |
//! |------|-------|
//! | `A` | naval + scout |
//! | `G` | scout + pirate |
//! | `N` | naval |
//! | `P` | pirate |
//! | `S` | scout |
//! | ` ` | none |

use serde::{Deserialize, Serialize};

use super::profile::Starport;
use crate::dice::RollDice;

/// Facilities present in a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bases {
    pub naval: bool,
    pub scout: bool,
    pub pirate: bool,
}

/// Code assigned to each combination, first match wins.
const ENCODING_RULES: [(char, fn(Bases) -> bool); 5] = [
    ('A', |b: Bases| b.naval && b.scout),
    ('G', |b: Bases| b.scout && b.pirate),
    ('N', |b: Bases| b.naval),
    ('P', |b: Bases| b.pirate),
    ('S', |b: Bases| b.scout),
];

/// Code for a world with no bases.
pub const NO_BASES: char = ' ';

impl Bases {
    pub const NONE: Bases = Bases::new(false, false, false);

    pub const fn new(naval: bool, scout: bool, pirate: bool) -> Self {
        Self {
            naval,
            scout,
            pirate,
        }
    }

    /// One-letter code. Naval and pirate bases never coexist in generated
    /// worlds; if they do, the naval base wins the code.
    pub fn code(self) -> char {
        ENCODING_RULES
            .iter()
            .find(|(_, rule)| rule(self))
            .map_or(NO_BASES, |&(code, _)| code)
    }

    /// Reads a base code. Anything unrecognised means no bases.
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => Self::new(true, true, false),
            "G" => Self::new(false, true, true),
            "N" => Self::new(true, false, false),
            "P" => Self::new(false, false, true),
            "S" => Self::new(false, true, false),
            _ => Self::NONE,
        }
    }

    /// Rolls for each base in turn. Checks that cannot succeed for the
    /// starport do not consume dice.
    pub fn generate(dice: &mut impl RollDice, starport: Starport) -> Self {
        let naval = matches!(starport, Starport::A | Starport::B) && dice.two_d6() >= 8;
        let scout = match scout_dm(starport) {
            Some(dm) => dice.two_d6() + dm >= 7,
            None => false,
        };
        let pirate = starport != Starport::A && !naval && dice.two_d6() >= 12;
        Self::new(naval, scout, pirate)
    }
}

/// Scout base DM by starport; `None` where no scout base is possible.
fn scout_dm(starport: Starport) -> Option<i32> {
    match starport {
        Starport::A => Some(-3),
        Starport::B => Some(-2),
        Starport::C => Some(-1),
        Starport::D => Some(0),
        Starport::E | Starport::X => None,
    }
}

pub fn generate_base_code(naval_base: bool, scout_base: bool, pirate_base: bool) -> char {
    Bases::new(naval_base, scout_base, pirate_base).code()
}

pub fn parse_bases(code: &str) -> (bool, bool, bool) {
    let b = Bases::from_code(code);
    (b.naval, b.scout, b.pirate)
}
