//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for names, bright_black for ids and hints
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Plain row builders**: [`profile_row`] and [`coordinates_line`] return strings so
//!   callers and tests can inspect them before printing

use crate::core::{geocache::Coordinates, record::Profile};
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
///
/// # Colors
/// - "✓" in green
/// - Message in white
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints an aligned `label: value` line, skipping empty values
pub fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("   {:<10} {}", format!("{label}:").bright_black(), value.white());
}

/// One numbered listing row, 1-based
///
/// # Format
/// ```text
///    [<n>] <title> <first> <last> (<id>)
/// ```
///
/// # Colors
/// - Brackets and id in bright_black
/// - Index in white
/// - Display name in blue
pub fn profile_row(index: usize, profile: &Profile) -> String {
    let mut buffer = itoa::Buffer::new();
    format!(
        "   {}{}{} {} {}",
        "[".bright_black(),
        buffer.format(index).white(),
        "]".bright_black(),
        profile.display_name().blue(),
        format!("({})", profile.id).bright_black()
    )
}

pub fn coordinates_line(coords: &Coordinates) -> String {
    format!("{:.4}, {:.4}", coords.lat, coords.lon)
}
