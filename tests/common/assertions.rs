//! Predicates for CLI output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_signed_in() -> impl Predicate<str> {
    predicates::str::contains("Not signed in")
}

pub fn signed_in_as(email: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Signed in as {email}"))
}

pub fn network_failure() -> impl Predicate<str> {
    predicates::str::contains("Network request failed")
}

pub fn lookup_failed(address: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Lookup failed for '{address}'"))
}
