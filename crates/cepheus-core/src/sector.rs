//! Subsectors and sectors: a grid of hexes, some of which hold a world.
//!
//! A sector is 32 columns by 40 rows, split into sixteen 8×10 subsectors
//! lettered `A` to `P` in reading order:
//!
//! ```text
//!  A  B  C  D
//!  E  F  G  H
//!  I  J  K  L
//!  M  N  O  P
//! ```
//!
//! Each hex gets a world on a 1D roll of 4 or more.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::dice::RollDice;
use crate::error::SectorError;
use crate::world::{generate_world, World};

pub const SUBSECTOR_COLUMNS: u8 = 8;
pub const SUBSECTOR_ROWS: u8 = 10;
pub const SECTOR_COLUMNS: u8 = SUBSECTOR_COLUMNS * 4;
pub const SECTOR_ROWS: u8 = SUBSECTOR_ROWS * 4;

/// 1D result at or above which a hex is occupied.
const OCCUPIED_ON: i32 = 4;

// ============================================================================
// HEX ADDRESS
// ============================================================================

/// Column and row of a hex, both counted from 1. Rendered `CCRR`.
///
/// Ordering is by column, then row, which is also the order of the
/// rendered strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexAddress {
    pub column: u8,
    pub row: u8,
}

impl HexAddress {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.column, self.row)
    }
}

impl FromStr for HexAddress {
    type Err = SectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SectorError::MalformedHexAddress(s.to_string());
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let column = s[..2].parse().map_err(|_| malformed())?;
        let row = s[2..].parse().map_err(|_| malformed())?;
        Ok(Self { column, row })
    }
}

impl TryFrom<String> for HexAddress {
    type Error = SectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexAddress> for String {
    fn from(hex: HexAddress) -> Self {
        hex.to_string()
    }
}

// ============================================================================
// SUBSECTOR
// ============================================================================

/// One of the sixteen subsectors of a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubsectorId(u8);

/// Letter and top-left hex of each subsector.
const SUBSECTOR_ORIGINS: [(char, HexAddress); 16] = [
    ('A', HexAddress::new(1, 1)),
    ('B', HexAddress::new(9, 1)),
    ('C', HexAddress::new(17, 1)),
    ('D', HexAddress::new(25, 1)),
    ('E', HexAddress::new(1, 11)),
    ('F', HexAddress::new(9, 11)),
    ('G', HexAddress::new(17, 11)),
    ('H', HexAddress::new(25, 11)),
    ('I', HexAddress::new(1, 21)),
    ('J', HexAddress::new(9, 21)),
    ('K', HexAddress::new(17, 21)),
    ('L', HexAddress::new(25, 21)),
    ('M', HexAddress::new(1, 31)),
    ('N', HexAddress::new(9, 31)),
    ('O', HexAddress::new(17, 31)),
    ('P', HexAddress::new(25, 31)),
];

impl SubsectorId {
    pub const A: SubsectorId = SubsectorId(0);

    /// All sixteen, `A` to `P`.
    pub fn all() -> impl Iterator<Item = SubsectorId> {
        (0..SUBSECTOR_ORIGINS.len() as u8).map(SubsectorId)
    }

    /// Looks up a subsector by letter.
    ///
    /// Anything sorting after `P` (lowercase included) falls back to `A`;
    /// anything before `A` is an error.
    pub fn from_letter(letter: char) -> Result<Self, SectorError> {
        if letter < 'A' {
            return Err(SectorError::UnknownSubsector(letter));
        }
        match SUBSECTOR_ORIGINS.iter().position(|&(l, _)| l == letter) {
            Some(index) => Ok(SubsectorId(index as u8)),
            None => {
                log::warn!("no subsector '{}', using A", letter);
                Ok(Self::A)
            }
        }
    }

    pub fn letter(self) -> char {
        SUBSECTOR_ORIGINS[usize::from(self.0)].0
    }

    /// Top-left hex.
    pub fn origin(self) -> HexAddress {
        SUBSECTOR_ORIGINS[usize::from(self.0)].1
    }

    pub fn contains(self, hex: HexAddress) -> bool {
        let origin = self.origin();
        (origin.column..origin.column + SUBSECTOR_COLUMNS).contains(&hex.column)
            && (origin.row..origin.row + SUBSECTOR_ROWS).contains(&hex.row)
    }

    /// Subsector a hex falls in, if it is inside the sector at all.
    pub fn containing(hex: HexAddress) -> Option<Self> {
        Self::all().find(|id| id.contains(hex))
    }

    /// Every hex in the subsector, columns outer and rows inner.
    pub fn hexes(self) -> impl Iterator<Item = HexAddress> {
        let origin = self.origin();
        let rows = origin.row..origin.row + SUBSECTOR_ROWS;
        (origin.column..origin.column + SUBSECTOR_COLUMNS).flat_map(move |column| {
            rows.clone().map(move |row| HexAddress::new(column, row))
        })
    }
}

impl fmt::Display for SubsectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rolls occupancy for every hex of a subsector and generates a world in
/// each occupied one.
pub fn generate_subsector(
    id: SubsectorId,
    dice: &mut impl RollDice,
    config: &GeneratorConfig,
) -> BTreeMap<HexAddress, World> {
    let mut hexes = BTreeMap::new();
    for hex in id.hexes() {
        if dice.d6() >= OCCUPIED_ON {
            hexes.insert(hex, generate_world(dice, config));
        }
    }
    log::debug!("subsector {}: {} worlds", id, hexes.len());
    hexes
}

// ============================================================================
// SECTOR
// ============================================================================

/// How much of a sector to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorScope {
    Subsector(SubsectorId),
    Full,
}

impl SectorScope {
    /// `true` is subsector `A` alone, `false` the whole sector.
    pub fn from_flag(subsector_only: bool) -> Self {
        if subsector_only {
            Self::Subsector(SubsectorId::A)
        } else {
            Self::Full
        }
    }

    pub fn subsectors(self) -> Vec<SubsectorId> {
        match self {
            Self::Subsector(id) => vec![id],
            Self::Full => SubsectorId::all().collect(),
        }
    }
}

/// Occupied hexes of a sector, keyed by address.
///
/// Iteration runs column by column across the whole sector (`0101`..`0140`,
/// then `0201`), not subsector by subsector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sector {
    hexes: BTreeMap<HexAddress, World>,
}

impl Sector {
    /// Generates the subsectors in `scope`, `A` to `P`.
    pub fn generate(
        scope: SectorScope,
        dice: &mut impl RollDice,
        config: &GeneratorConfig,
    ) -> Self {
        let mut hexes = BTreeMap::new();
        for id in scope.subsectors() {
            hexes.extend(generate_subsector(id, dice, config));
        }
        log::info!("generated {} worlds in {:?}", hexes.len(), scope);
        Self { hexes }
    }

    /// Wraps worlds the caller already has.
    pub fn from_hexes(hexes: impl IntoIterator<Item = (HexAddress, World)>) -> Self {
        Self {
            hexes: hexes.into_iter().collect(),
        }
    }

    pub fn hexes(&self) -> &BTreeMap<HexAddress, World> {
        &self.hexes
    }

    pub fn get(&self, hex: HexAddress) -> Option<&World> {
        self.hexes.get(&hex)
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HexAddress, &World)> {
        self.hexes.iter()
    }
}
