use crate::core::{command_init::CommandInit, error::Result, print_success};

pub fn execute_login(email: &str, password: &str) -> Result<()> {
    let mut context = CommandInit::initialize()?;

    if let Some(current) = &context.session.state().email {
        log::debug!("Replacing session of {current}");
    }

    context.session.login(email, password)?;
    print_success(&format!("Signed in as {email}\n"));
    Ok(())
}
