//! Synthetic value generation
//!
//! Pseudonyms for name, email and phone columns come from a pluggable
//! [`SyntheticGenerator`]. Only the shape of the output is contractual
//! (e.g. the `###-###-####` phone format); the content is arbitrary.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::{Rng, RngCore};

/// Source of plausible replacement values
pub trait SyntheticGenerator: Send + Sync {
    /// A single first name
    fn first_name(&self, rng: &mut dyn RngCore) -> String;

    /// A "First Last" pair
    fn full_name(&self, rng: &mut dyn RngCore) -> String;

    /// An email address unrelated to any input
    fn email(&self, rng: &mut dyn RngCore) -> String;

    /// A phone number formatted `###-###-####`
    fn phone(&self, rng: &mut dyn RngCore) -> String;
}

/// Generator backed by the `fake` crate's English locale
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeGenerator;

impl FakeGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }
}

impl SyntheticGenerator for FakeGenerator {
    fn first_name(&self, rng: &mut dyn RngCore) -> String {
        single_token(FirstName().fake_with_rng(rng))
    }

    fn full_name(&self, rng: &mut dyn RngCore) -> String {
        let first = single_token(FirstName().fake_with_rng(rng));
        let last = single_token(LastName().fake_with_rng(rng));
        format!("{first} {last}")
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        SafeEmail().fake_with_rng(rng)
    }

    fn phone(&self, rng: &mut dyn RngCore) -> String {
        format!(
            "{:03}-{:03}-{:04}",
            rng.gen_range(200..1000),
            rng.gen_range(200..1000),
            rng.gen_range(0..10000)
        )
    }
}

/// Keep the token count of a name stable regardless of the word list
fn single_token(value: String) -> String {
    match value.split_whitespace().next() {
        Some(token) if token.len() != value.len() => token.to_string(),
        _ => value,
    }
}
