//! Placeholder candidate identities.
//!
//! Resumes are never really parsed, so names, emails, experience and
//! education are mocked. Generators are injected into the session so that
//! runs are reproducible from a seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{CandidateIdentity, Education};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Source of identities for newly analyzed resumes.
pub trait IdentityGenerator {
    /// Identity for the candidate that will take 1-based position `ordinal`
    /// in the session.
    fn next_identity(&mut self, ordinal: usize) -> CandidateIdentity;
}

/// Sequential names with seeded random experience and education.
pub struct SeededIdentityGenerator {
    rng: StdRng,
}

impl SeededIdentityGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededIdentityGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl IdentityGenerator for SeededIdentityGenerator {
    fn next_identity(&mut self, ordinal: usize) -> CandidateIdentity {
        let years_experience = self.rng.gen_range(1..=9);
        let education = *Education::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Education::BTech);

        CandidateIdentity {
            display_name: format!("Candidate {ordinal}"),
            email: format!("candidate{ordinal}@example.com"),
            years_experience,
            education,
        }
    }
}

/// Hands out the same experience and education to everyone. Handy in tests.
#[derive(Debug, Clone)]
pub struct FixedIdentityGenerator {
    pub years_experience: u32,
    pub education: Education,
}

impl IdentityGenerator for FixedIdentityGenerator {
    fn next_identity(&mut self, ordinal: usize) -> CandidateIdentity {
        CandidateIdentity {
            display_name: format!("Candidate {ordinal}"),
            email: format!("candidate{ordinal}@example.com"),
            years_experience: self.years_experience,
            education: self.education,
        }
    }
}
