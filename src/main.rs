use clap::{Parser, Subcommand};
use profile_directory::commands::*;
use profile_directory::core::{error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "profile-directory")]
#[command(about = "Browse a remote profile directory from the terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Whoami,
    /// List profiles page by page
    Profiles {
        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,
    },
    /// Show one profile with its location
    Profile {
        /// Profile id as shown by `profiles`
        id: String,
        /// Skip geocoding the profile's address
        #[arg(long)]
        no_map: bool,
    },
    /// Resolve an address to coordinates (cached)
    Geocode {
        /// Address or place name; used verbatim as the cache key
        address: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag, unless RUST_LOG is already set
    if env::var_os("RUST_LOG").is_none() {
        let level = if cli.debug { "debug" } else { "warn" };
        env::set_var("RUST_LOG", level);
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => execute_login(&email, &password),
        Commands::Logout => execute_logout(),
        Commands::Whoami => execute_whoami(),
        Commands::Profiles { pages } => execute_profiles(pages as usize),
        Commands::Profile { id, no_map } => execute_profile(&id, no_map),
        Commands::Geocode { address } => execute_geocode(&address),
    }
}
