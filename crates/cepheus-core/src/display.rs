//! Fixed-width text output in the legacy SEC column layout.
//!
//! World line (80 columns):
//!
//! | Field | Width |
//! |-------|-------|
//! | Name | 15 |
//! | UWP | 9 |
//! | Bases | 1 |
//! | Remarks | 43 |
//! | Travel zone | 1 |
//! | PBG | 3 |
//! | Allegiance | 2 |
//!
//! Sector rows add a four-digit hex after the name and narrow the remarks
//! to 38 columns.

use std::fmt;

use crate::sector::Sector;
use crate::world::World;

/// Column headings for a list of world lines.
pub fn world_table_header() -> String {
    format!("{:<15} {:<11} {}", "Name", "Statistics", "Remarks")
}

/// Column headings for a sector listing.
pub fn sector_table_header() -> String {
    format!("{:<15} {:<4} {:<11} {}", "Name", "Hex", "Statistics", "Remarks")
}

fn joined_remarks(world: &World) -> String {
    world.remarks().join(" ")
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} {} {} {:<43} {} {} {}",
            self.name(),
            self.uwp(),
            self.bases_code(),
            joined_remarks(self),
            self.travel_zone().code(),
            self.pbg_code(),
            self.allegiance()
        )
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", sector_table_header())?;
        for (i, (hex, world)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<15} {} {} {} {:<38} {} {} {}",
                world.name(),
                hex,
                world.uwp(),
                world.bases_code(),
                joined_remarks(world),
                world.travel_zone().code(),
                world.pbg_code(),
                world.allegiance()
            )?;
        }
        Ok(())
    }
}
