use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::domain::shared::value_objects::ProductId;

/// Source of randomness used to sample recommendation candidates.
///
/// Implementations must produce every permutation with equal probability.
pub trait CandidateShuffler: Send + Sync {
    fn shuffle(&self, candidates: &mut [ProductId]);
}

/// Shuffles with the thread-local generator. Used in production.
pub struct ThreadRngShuffler;

impl CandidateShuffler for ThreadRngShuffler {
    fn shuffle(&self, candidates: &mut [ProductId]) {
        candidates.shuffle(&mut rand::rng());
    }
}

/// Shuffles with a seeded generator so that a sequence of calls is reproducible.
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CandidateShuffler for SeededShuffler {
    fn shuffle(&self, candidates: &mut [ProductId]) {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        candidates.shuffle(&mut *rng);
    }
}
