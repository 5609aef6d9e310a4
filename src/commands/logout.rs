use crate::core::{command_init::CommandInit, error::Result, print_info, print_success};

pub fn execute_logout() -> Result<()> {
    let mut context = CommandInit::initialize()?;

    if !context.session.state().is_logged_in() {
        print_info("Not signed in.");
        return Ok(());
    }

    context.session.logout()?;
    print_success("Signed out\n");
    Ok(())
}
