//! Worlds: a profile plus bases, remarks, travel zone, PBG and allegiance.
//!
//! Two ways in:
//! - [`generate_world`] rolls everything;
//! - [`world_from_encoded`] takes whatever codes the caller already has and
//!   rolls only the missing parts, in the same order.
//!
//! Dice are thrown for the profile first, then the bases, then the PBG.
//! Trade codes and the travel zone are read off the profile and never roll.

mod bases;
mod pbg;
mod profile;
mod trade;

pub use bases::{generate_base_code, parse_bases, Bases, NO_BASES};
pub use pbg::Pbg;
pub use profile::{
    generate_profile, roll_atmosphere, roll_government, roll_hydrographics, roll_law_level,
    roll_population, roll_population_modifier, roll_starport, roll_technology_level,
    roll_world_size, technology_dm, technology_minimum, Profile, ProfileStep, RolledProfile,
    Starport, PROFILE_PIPELINE,
};
pub use trade::{trade_codes, TradeCode, TRADE_CODE_GROUPS};

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::dice::RollDice;
use crate::error::WorldError;

// ============================================================================
// TRAVEL ZONE
// ============================================================================

/// Travel advisory. Red zones are never assigned by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelZone {
    #[default]
    Green,
    Amber,
}

impl TravelZone {
    pub fn code(self) -> char {
        match self {
            Self::Green => ' ',
            Self::Amber => 'A',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            ' ' => Some(Self::Green),
            'A' => Some(Self::Amber),
            _ => None,
        }
    }

    /// Amber for exotic atmospheres, unstable governments and the extremes
    /// of law.
    pub fn for_profile(profile: &Profile) -> Self {
        let law = profile.law_level();
        if profile.atmosphere() >= 10
            || matches!(profile.government(), 0 | 7 | 10)
            || law == 0
            || law >= 9
        {
            Self::Amber
        } else {
            Self::Green
        }
    }
}

// ============================================================================
// WORLD
// ============================================================================

/// A fully resolved world. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    name: String,
    profile: Profile,
    bases: Bases,
    remarks: Vec<String>,
    travel_zone: TravelZone,
    pbg: Pbg,
    allegiance: String,
}

impl World {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn starport(&self) -> Starport {
        self.profile.starport()
    }

    pub fn world_size(&self) -> u8 {
        self.profile.world_size()
    }

    pub fn atmosphere(&self) -> u8 {
        self.profile.atmosphere()
    }

    pub fn hydrographics(&self) -> u8 {
        self.profile.hydrographics()
    }

    pub fn population(&self) -> u8 {
        self.profile.population()
    }

    pub fn government(&self) -> u8 {
        self.profile.government()
    }

    pub fn law_level(&self) -> u8 {
        self.profile.law_level()
    }

    pub fn technology_level(&self) -> u8 {
        self.profile.technology_level()
    }

    pub fn bases(&self) -> Bases {
        self.bases
    }

    pub fn naval_base(&self) -> bool {
        self.bases.naval
    }

    pub fn scout_base(&self) -> bool {
        self.bases.scout
    }

    pub fn pirate_base(&self) -> bool {
        self.bases.pirate
    }

    /// Trade codes for generated worlds, caller text otherwise.
    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    pub fn travel_zone(&self) -> TravelZone {
        self.travel_zone
    }

    pub fn pbg(&self) -> Pbg {
        self.pbg
    }

    pub fn population_modifier(&self) -> u8 {
        self.pbg.population_modifier()
    }

    pub fn planetoid_belts(&self) -> u8 {
        self.pbg.planetoid_belts()
    }

    pub fn gas_giants(&self) -> u8 {
        self.pbg.gas_giants()
    }

    pub fn allegiance(&self) -> &str {
        &self.allegiance
    }

    /// The `SWAHPGL-T` profile code.
    pub fn uwp(&self) -> String {
        self.profile.encode()
    }

    pub fn bases_code(&self) -> char {
        self.bases.code()
    }

    pub fn pbg_code(&self) -> String {
        self.pbg.encode()
    }

    /// Every part of the world in its encoded form. Rebuilding from this
    /// rolls no dice.
    pub fn encoded(&self) -> EncodedWorld {
        EncodedWorld {
            name: Some(self.name.clone()),
            uwp: Some(self.uwp()),
            bases: Some(self.bases_code().to_string()),
            remarks: Some(self.remarks.clone()),
            travel_zone: Some(self.travel_zone),
            pbg: Some(self.pbg_code()),
            allegiance: Some(self.allegiance.clone()),
        }
    }
}

/// Caller-supplied parts of a world; `None` means roll it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodedWorld {
    pub name: Option<String>,
    pub uwp: Option<String>,
    pub bases: Option<String>,
    pub remarks: Option<Vec<String>>,
    pub travel_zone: Option<TravelZone>,
    pub pbg: Option<String>,
    pub allegiance: Option<String>,
}

fn trade_remarks(profile: &Profile) -> Vec<String> {
    trade_codes(profile)
        .into_iter()
        .map(|code| code.code().to_string())
        .collect()
}

/// Rolls a complete world.
pub fn generate_world(dice: &mut impl RollDice, config: &GeneratorConfig) -> World {
    let profile = generate_profile(dice).profile;
    let bases = Bases::generate(dice, profile.starport());
    let pbg = Pbg::generate(dice, &profile);

    let world = World {
        name: config.world_name.clone(),
        profile,
        bases,
        remarks: trade_remarks(&profile),
        travel_zone: TravelZone::for_profile(&profile),
        pbg,
        allegiance: config.allegiance.clone(),
    };
    log::debug!("generated world {} {}", world.name, world.uwp());
    world
}

/// Builds a world from whichever codes are present, rolling the rest.
///
/// The profile code is checked before any dice are thrown; a bad PBG code
/// is only noticed after the bases have been rolled.
pub fn world_from_encoded(
    encoded: &EncodedWorld,
    dice: &mut impl RollDice,
    config: &GeneratorConfig,
) -> Result<World, WorldError> {
    let profile = match encoded.uwp.as_deref() {
        Some(code) => Profile::decode(code)?,
        None => generate_profile(dice).profile,
    };
    let bases = match encoded.bases.as_deref() {
        Some(code) => Bases::from_code(code),
        None => Bases::generate(dice, profile.starport()),
    };
    let remarks = encoded
        .remarks
        .clone()
        .unwrap_or_else(|| trade_remarks(&profile));
    let travel_zone = encoded
        .travel_zone
        .unwrap_or_else(|| TravelZone::for_profile(&profile));
    let pbg = match encoded.pbg.as_deref() {
        Some(code) => Pbg::decode(code)?,
        None => Pbg::generate(dice, &profile),
    };

    let world = World {
        name: encoded
            .name
            .clone()
            .unwrap_or_else(|| config.world_name.clone()),
        profile,
        bases,
        remarks,
        travel_zone,
        pbg,
        allegiance: encoded
            .allegiance
            .clone()
            .unwrap_or_else(|| config.allegiance.clone()),
    };
    log::debug!("rebuilt world {} {}", world.name, world.uwp());
    Ok(world)
}
