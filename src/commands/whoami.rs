use crate::core::{command_init::CommandInit, error::Result, print_info};

pub fn execute_whoami() -> Result<()> {
    let context = CommandInit::initialize()?;

    match &context.session.state().email {
        Some(email) if context.session.state().is_logged_in() => {
            print_info(&format!("Signed in as {email}"))
        }
        _ => print_info("Not signed in."),
    }
    Ok(())
}
