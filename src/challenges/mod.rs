//! Daily and weekly challenges: generation, progress tracking, claiming,
//! and expiry.

pub mod data;
pub mod engine;
pub mod types;

pub use data::{get_challenge_def, ALL_CHALLENGES};
pub use engine::{ClaimOutcome, ExpiryPolicy};
pub use types::{
    ActiveChallenges, ChallengeCondition, ChallengeDef, ChallengeId, ChallengeKind, ChallengeView,
    CompletionEvent, UserChallenge,
};
