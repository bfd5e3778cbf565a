//! Cepheus Core - World and Sector Generation
//!
//! Rolls star systems by the Cepheus Engine rules and writes them in the
//! compact codes used on sector maps.
//!
//! # Architecture
//!
//! - **Dice**: every generator takes `&mut impl RollDice`; seed a [`Dice`]
//!   for repeatable output
//! - **World**: the ordered profile pipeline, bases, trade codes, travel
//!   zone and PBG, plus decoding from codes
//! - **Sector**: sixteen subsectors of 8×10 hexes, each hex occupied on a
//!   1D roll of 4+
//! - **Pseudohex**: the 34-digit alphabet every statistic is written in
//!
//! # Example
//!
//! ```rust
//! use cepheus_core::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let mut dice = Dice::seeded(1977);
//!
//! let sector = Sector::generate(SectorScope::from_flag(true), &mut dice, &config);
//! println!("{}", sector);
//!
//! let world = generate_world(&mut dice, &config);
//! assert_eq!(Profile::decode(&world.uwp()).unwrap(), *world.profile());
//! ```

pub mod config;
pub mod dice;
pub mod display;
pub mod error;
pub mod pseudohex;
pub mod sector;
pub mod world;

pub use dice::Dice;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::GeneratorConfig;
    pub use crate::dice::{Dice, Roll, RollDice};
    pub use crate::display::{sector_table_header, world_table_header};
    pub use crate::error::{CodecError, ConfigError, SectorError, WorldError};
    pub use crate::sector::{HexAddress, Sector, SectorScope, SubsectorId};
    pub use crate::world::{
        generate_world, world_from_encoded, Bases, EncodedWorld, Pbg, Profile, Starport,
        TradeCode, TravelZone, World,
    };
}
