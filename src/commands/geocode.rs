use crate::core::{
    command_init::CommandInit,
    error::Result,
    geocache::{CacheOutcome, LookupFetcher},
    output::coordinates_line,
};
use colored::*;

/// Resolve an address through the geocode cache
pub fn execute_geocode(address: &str) -> Result<()> {
    let context = CommandInit::initialize()?;
    let cache = context.geocode_cache()?;
    let geocoder = context.geocoder()?;

    let (coords, outcome) = cache.resolve(address, |key| geocoder.lookup(key))?;

    let source = match outcome {
        CacheOutcome::Hit => "cached",
        CacheOutcome::Computed => "looked up",
    };
    println!(
        "\n{} {}\n",
        coordinates_line(&coords).white(),
        format!("({source})").bright_black()
    );

    if cache.write_failures() > 0 {
        log::warn!("Coordinates for '{address}' were not cached");
    }
    Ok(())
}
