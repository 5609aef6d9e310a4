use crate::api::DummyApiClient;
use crate::core::{
    command_init::{CommandContext, CommandInit},
    detail::ProfileDetailLoader,
    error::{ProfileDirError, Result},
    output::{coordinates_line, print_field},
    print_section_header,
    record::ProfileDetail,
};
use colored::*;

/// Show one profile and, unless `no_map`, the coordinates of its address
pub fn execute_profile(id: &str, no_map: bool) -> Result<()> {
    let context = CommandInit::initialize_signed_in()?;
    let client = DummyApiClient::new(context.config.listing.clone())?;
    let mut loader = ProfileDetailLoader::new(client);

    let state = loader.load(id);
    let profile = match (&state.profile, &state.last_error) {
        (Some(profile), _) => profile.clone(),
        (None, Some(error)) => return Err(ProfileDirError::Reported(error.clone())),
        (None, None) => {
            return Err(ProfileDirError::bad_response(format!(
                "Profile {id} not found"
            )))
        }
    };

    print_section_header(&profile.display_name());
    print_field("Id", &profile.id);
    print_field("Gender", profile.gender.as_deref().unwrap_or_default());
    print_field("Email", profile.email.as_deref().unwrap_or_default());
    print_field("Born", profile.date_of_birth.as_deref().unwrap_or_default());
    print_field("Phone", profile.phone.as_deref().unwrap_or_default());
    print_field("Street", &profile.location.street);
    print_field("City", &profile.location.city);
    print_field("State", &profile.location.state);
    print_field("Country", &profile.location.country);
    print_field("Timezone", &profile.location.timezone);

    if !no_map {
        print_map(&context, &profile)?;
    }

    println!();
    Ok(())
}

fn print_map(context: &CommandContext, profile: &ProfileDetail) -> Result<()> {
    let address = profile.location.address(context.config.geocoding.precision);
    if address.is_empty() {
        println!("\n   {}", "Map not found".red());
        return Ok(());
    }

    let cache = context.geocode_cache()?;
    let geocoder = context.geocoder()?;

    match cache.get_or_lookup(&address, &geocoder) {
        Ok(coords) => {
            println!();
            print_field("Map", &coordinates_line(&coords));
        }
        Err(e) => {
            log::warn!("Geocoding '{address}' failed: {e}");
            println!("\n   {}", "Map not found".red());
        }
    }
    Ok(())
}
