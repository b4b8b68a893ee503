//! Scale command implementation.
//!
//! Prints the growth projection scale applied to placed plants.

use anyhow::Result;
use grounded_core::{growth_scale, GrowthYear};

/// Print the scale for one year, or the whole range when `all` is set.
pub fn execute(year: GrowthYear, all: bool) -> Result<()> {
    if all {
        for y in GrowthYear::MIN..=GrowthYear::MAX {
            let y = GrowthYear::new(y as i64)?;
            println!("{:>7}  {:.3}", y.to_string(), growth_scale(y));
        }
    } else {
        println!("{}: scale {:.3}", year, growth_scale(year));
    }
    Ok(())
}
