use crate::api::DummyApiClient;
use crate::core::{
    command_init::CommandInit,
    error::{ProfileDirError, Result},
    loader::{CollectionState, PaginatedCollectionLoader},
    output::profile_row,
    print_info, print_section_header,
    record::Profile,
};
use colored::*;

/// List profiles, loading up to `pages` pages
pub fn execute_profiles(pages: usize) -> Result<()> {
    let context = CommandInit::initialize_signed_in()?;
    let client = DummyApiClient::new(context.config.listing.clone())?;
    let mut loader = PaginatedCollectionLoader::new(client);

    let state = load_pages(&mut loader, pages);

    if state.is_empty() {
        if let Some(error) = &state.last_error {
            return Err(ProfileDirError::Reported(error.clone()));
        }
        print_info("No profiles found.");
        return Ok(());
    }

    print_section_header("Profiles");
    for (index, profile) in state.items.iter().enumerate() {
        println!("{}", profile_row(index + 1, profile));
    }

    let summary = if state.has_more {
        format!(
            "{} profiles loaded, more available (use --pages {})",
            state.len(),
            state.next_cursor.page() + 1
        )
    } else {
        format!("{} profiles loaded, end of directory", state.len())
    };
    println!("\n   {}", summary.bright_black());

    println!();
    match state.last_error {
        Some(error) => Err(ProfileDirError::Reported(error)),
        None => Ok(()),
    }
}

/// Call `load_next` until `pages` pages arrived, the directory ends, or a page fails
fn load_pages(
    loader: &mut PaginatedCollectionLoader<DummyApiClient>,
    pages: usize,
) -> CollectionState<Profile> {
    for _ in 0..pages {
        let state = loader.load_next();
        if state.last_error.is_some() || !state.has_more {
            break;
        }
    }
    loader.state().clone()
}
