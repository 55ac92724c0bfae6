//! Consistent pseudonym mapping
//!
//! Within one run, every occurrence of the same original name, email or
//! phone maps to the same synthetic replacement.

use super::synthetic::SyntheticGenerator;
use rand::RngCore;
use std::collections::HashMap;

/// Per-run original -> pseudonym caches for names, emails and phones
#[derive(Debug, Default, Clone)]
pub struct ConsistentMapper {
    names: HashMap<String, String>,
    emails: HashMap<String, String>,
    phones: HashMap<String, String>,
}

impl ConsistentMapper {
    /// Create an empty mapper
    pub fn new() -> Self {
        Self::default()
    }

    /// Pseudonymize a name
    ///
    /// Two or more whitespace-separated tokens produce a "First Last" pair,
    /// a single token produces a first name.
    pub fn map_name(
        &mut self,
        original: &str,
        generator: &dyn SyntheticGenerator,
        rng: &mut dyn RngCore,
    ) -> String {
        resolve(&mut self.names, original, || {
            if original.split_whitespace().count() >= 2 {
                generator.full_name(rng)
            } else {
                generator.first_name(rng)
            }
        })
    }

    /// Pseudonymize an email address
    pub fn map_email(
        &mut self,
        original: &str,
        generator: &dyn SyntheticGenerator,
        rng: &mut dyn RngCore,
    ) -> String {
        resolve(&mut self.emails, original, || generator.email(rng))
    }

    /// Pseudonymize a phone number
    pub fn map_phone(
        &mut self,
        original: &str,
        generator: &dyn SyntheticGenerator,
        rng: &mut dyn RngCore,
    ) -> String {
        resolve(&mut self.phones, original, || generator.phone(rng))
    }

    /// Distinct names mapped so far
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Distinct emails mapped so far
    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    /// Distinct phones mapped so far
    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Drop all mappings
    pub fn clear(&mut self) {
        self.names.clear();
        self.emails.clear();
        self.phones.clear();
    }
}

fn resolve(
    cache: &mut HashMap<String, String>,
    original: &str,
    generate: impl FnOnce() -> String,
) -> String {
    if let Some(existing) = cache.get(original) {
        return existing.clone();
    }
    let anonymized = generate();
    cache.insert(original.to_string(), anonymized.clone());
    anonymized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::anonymizer::synthetic::FakeGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Generator producing numbered values so tests can count calls
    struct CountingGenerator {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self {
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }

        fn next(&self) -> usize {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1
        }
    }

    impl SyntheticGenerator for CountingGenerator {
        fn first_name(&self, _rng: &mut dyn RngCore) -> String {
            format!("First{}", self.next())
        }

        fn full_name(&self, _rng: &mut dyn RngCore) -> String {
            format!("First{} Last", self.next())
        }

        fn email(&self, _rng: &mut dyn RngCore) -> String {
            format!("user{}@example.org", self.next())
        }

        fn phone(&self, _rng: &mut dyn RngCore) -> String {
            format!("555-000-{:04}", self.next())
        }
    }

    #[test]
    fn test_same_name_maps_to_same_pseudonym() {
        let generator = CountingGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut mapper = ConsistentMapper::new();

        let a = mapper.map_name("John Smith", &generator, &mut rng);
        let b = mapper.map_name("Jane Doe", &generator, &mut rng);
        let c = mapper.map_name("John Smith", &generator, &mut rng);

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(mapper.name_count(), 2);
    }

    #[test]
    fn test_name_token_count() {
        let generator = FakeGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mut mapper = ConsistentMapper::new();

        let two = mapper.map_name("John Smith", &generator, &mut rng);
        let one = mapper.map_name("Madonna", &generator, &mut rng);

        assert_eq!(two.split_whitespace().count(), 2);
        assert_eq!(one.split_whitespace().count(), 1);
    }

    #[test]
    fn test_categories_are_independent() {
        let generator = CountingGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut mapper = ConsistentMapper::new();

        let email = mapper.map_email("same", &generator, &mut rng);
        let phone = mapper.map_phone("same", &generator, &mut rng);

        assert_eq!(email, "user1@example.org");
        assert_eq!(phone, "555-000-0002");
        assert_eq!(mapper.email_count(), 1);
        assert_eq!(mapper.phone_count(), 1);
    }

    #[test]
    fn test_clear() {
        let generator = CountingGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut mapper = ConsistentMapper::new();

        let first = mapper.map_email("a@b.co", &generator, &mut rng);
        mapper.clear();
        let second = mapper.map_email("a@b.co", &generator, &mut rng);

        assert_ne!(first, second);
    }
}
