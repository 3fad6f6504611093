//! Username and user id uniqueness
//!
//! Checks run against the user list already loaded in memory; the users
//! file is only persistence.

use rand::Rng;

use crate::error::{BudgetError, BudgetResult};
use crate::models::UserId;

/// Attempts made before id generation gives up
pub const MAX_ID_ATTEMPTS: u32 = 1000;

/// Source of candidate user ids
pub trait IdGenerator {
    /// Produce the next candidate id
    fn next_id(&mut self) -> UserId;
}

/// Draws ids uniformly from 000000..=999999
pub struct RandomIdGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomIdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIdGenerator<rand::rngs::ThreadRng> {
    /// Generator backed by the thread-local RNG
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> IdGenerator for RandomIdGenerator<R> {
    fn next_id(&mut self) -> UserId {
        UserId::wrapping(self.rng.gen_range(0..=999_999))
    }
}

/// Case-insensitive username check; a blank candidate is never taken
pub fn is_username_taken<'a, I>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted = candidate.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }
    existing
        .into_iter()
        .any(|name| name.trim().to_lowercase() == wanted)
}

/// Exact-match id check
pub fn is_id_taken<'a, I>(candidate: &UserId, existing: I) -> bool
where
    I: IntoIterator<Item = &'a UserId>,
{
    existing.into_iter().any(|id| id == candidate)
}

/// Draw ids until one is free, giving up after [`MAX_ID_ATTEMPTS`]
pub fn generate_unique_id<G: IdGenerator>(
    existing: &[UserId],
    generator: &mut G,
) -> BudgetResult<UserId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = generator.next_id();
        if !is_id_taken(&candidate, existing) {
            return Ok(candidate);
        }
    }
    Err(BudgetError::IdGeneration {
        attempts: MAX_ID_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn id(s: &str) -> UserId {
        UserId::parse(s).unwrap()
    }

    /// Replays a fixed list of ids, cycling forever
    struct Scripted {
        ids: Vec<UserId>,
        calls: usize,
    }

    impl IdGenerator for Scripted {
        fn next_id(&mut self) -> UserId {
            let next = self.ids[self.calls % self.ids.len()].clone();
            self.calls += 1;
            next
        }
    }

    #[test]
    fn test_username_taken_ignores_case() {
        let existing = ["Alice", "bob"];
        assert!(is_username_taken("alice", existing));
        assert!(is_username_taken("  BOB ", existing));
        assert!(!is_username_taken("carol", existing));
        assert!(!is_username_taken("   ", existing));
    }

    #[test]
    fn test_id_taken_exact() {
        let existing = vec![id("000001"), id("000002")];
        assert!(is_id_taken(&id("000001"), &existing));
        assert!(!is_id_taken(&id("000003"), &existing));
    }

    #[test]
    fn test_generate_skips_existing() {
        let existing = vec![id("000001"), id("000002")];
        let mut generator = Scripted {
            ids: vec![id("000001"), id("000002"), id("000003")],
            calls: 0,
        };

        let generated = generate_unique_id(&existing, &mut generator).unwrap();
        assert_eq!(generated, id("000003"));
        assert_eq!(generator.calls, 3);
    }

    #[test]
    fn test_generate_gives_up_when_always_colliding() {
        let existing = vec![id("000001"), id("000002")];
        let mut generator = Scripted {
            ids: vec![id("000001"), id("000002")],
            calls: 0,
        };

        let err = generate_unique_id(&existing, &mut generator).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::IdGeneration {
                attempts: MAX_ID_ATTEMPTS
            }
        ));
        assert_eq!(generator.calls, MAX_ID_ATTEMPTS as usize);
    }

    #[test]
    fn test_random_generator_never_returns_existing() {
        let existing = vec![id("000001"), id("000002")];
        let mut generator = RandomIdGenerator::new(StdRng::seed_from_u64(7));

        for _ in 0..200 {
            let generated = generate_unique_id(&existing, &mut generator).unwrap();
            assert!(!existing.contains(&generated));
            assert_eq!(generated.as_str().len(), 6);
        }
    }
}
