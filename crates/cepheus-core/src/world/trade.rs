//! Trade classifications derived from a world's profile.
//!
//! Rules are grouped; inside a group the first code whose condition holds
//! is taken and the rest are skipped, while separate groups are checked
//! independently. Codes appear in [`TRADE_CODE_GROUPS`] order.

use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Two-letter trade classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeCode {
    Agricultural,
    NonAgricultural,
    Asteroid,
    Barren,
    Desert,
    FluidOceans,
    Garden,
    HighPopulation,
    LowPopulation,
    HighTechnology,
    LowTechnology,
    IceCapped,
    Industrial,
    NonIndustrial,
    Poor,
    Rich,
    WaterWorld,
    Vacuum,
}

/// Check order; within a group the first matching code wins.
pub const TRADE_CODE_GROUPS: &[&[TradeCode]] = &[
    &[TradeCode::Agricultural, TradeCode::NonAgricultural],
    &[TradeCode::Asteroid],
    &[TradeCode::Barren],
    &[TradeCode::Desert],
    &[TradeCode::FluidOceans],
    &[TradeCode::Garden],
    &[TradeCode::HighPopulation, TradeCode::LowPopulation],
    &[TradeCode::HighTechnology, TradeCode::LowTechnology],
    &[TradeCode::IceCapped],
    &[TradeCode::Industrial, TradeCode::NonIndustrial],
    &[TradeCode::Poor, TradeCode::Rich],
    &[TradeCode::WaterWorld],
    &[TradeCode::Vacuum],
];

impl TradeCode {
    pub fn code(self) -> &'static str {
        match self {
            Self::Agricultural => "Ag",
            Self::NonAgricultural => "Na",
            Self::Asteroid => "As",
            Self::Barren => "Ba",
            Self::Desert => "De",
            Self::FluidOceans => "Fl",
            Self::Garden => "Ga",
            Self::HighPopulation => "Hi",
            Self::LowPopulation => "Lo",
            Self::HighTechnology => "Ht",
            Self::LowTechnology => "Lt",
            Self::IceCapped => "Ic",
            Self::Industrial => "In",
            Self::NonIndustrial => "Ni",
            Self::Poor => "Po",
            Self::Rich => "Ri",
            Self::WaterWorld => "Wa",
            Self::Vacuum => "Va",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Agricultural => "Agricultural",
            Self::NonAgricultural => "Non-Agricultural",
            Self::Asteroid => "Asteroid",
            Self::Barren => "Barren",
            Self::Desert => "Desert",
            Self::FluidOceans => "Fluid Oceans",
            Self::Garden => "Garden",
            Self::HighPopulation => "High Population",
            Self::LowPopulation => "Low Population",
            Self::HighTechnology => "High Technology",
            Self::LowTechnology => "Low Technology",
            Self::IceCapped => "Ice-Capped",
            Self::Industrial => "Industrial",
            Self::NonIndustrial => "Non-Industrial",
            Self::Poor => "Poor",
            Self::Rich => "Rich",
            Self::WaterWorld => "Water World",
            Self::Vacuum => "Vacuum",
        }
    }

    /// Whether this code's condition holds, ignoring its group.
    pub fn applies(self, p: &Profile) -> bool {
        let (size, atm, hyd, pop) = (
            p.world_size(),
            p.atmosphere(),
            p.hydrographics(),
            p.population(),
        );
        match self {
            Self::Agricultural => {
                (4..=9).contains(&atm) && (4..=8).contains(&hyd) && (5..=7).contains(&pop)
            }
            Self::NonAgricultural => atm <= 3 && hyd <= 3 && pop >= 6,
            Self::Asteroid => size == 0 && atm == 0 && hyd == 0,
            Self::Barren => pop == 0 && p.government() == 0 && p.law_level() == 0,
            Self::Desert => atm >= 2 && hyd == 0,
            Self::FluidOceans => atm >= 10 && hyd >= 1,
            Self::Garden => {
                matches!(atm, 5 | 6 | 8) && (4..=9).contains(&hyd) && (4..=8).contains(&pop)
            }
            Self::HighPopulation => pop >= 9,
            Self::LowPopulation => (1..=3).contains(&pop),
            Self::HighTechnology => p.technology_level() >= 12,
            Self::LowTechnology => p.technology_level() <= 5,
            Self::IceCapped => atm <= 1 && hyd >= 1,
            Self::Industrial => matches!(atm, 0 | 1 | 2 | 4 | 7 | 9) && pop >= 9,
            Self::NonIndustrial => (4..=6).contains(&pop),
            Self::Poor => (2..=5).contains(&atm) && hyd <= 3,
            Self::Rich => matches!(atm, 6 | 8) && (6..=8).contains(&pop),
            Self::WaterWorld => hyd == 10,
            Self::Vacuum => atm == 0,
        }
    }
}

/// All trade codes for a profile, in check order.
pub fn trade_codes(p: &Profile) -> Vec<TradeCode> {
    TRADE_CODE_GROUPS
        .iter()
        .filter_map(|group| group.iter().copied().find(|code| code.applies(p)))
        .collect()
}
