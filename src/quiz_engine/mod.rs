//! Core quiz engine — question generation, distractors, and round scoring.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: problem families, answers, match configuration |
//! | `fraction`    | gcd / lowest-terms arithmetic backing the fraction levels |
//! | `generator`   | Level → family mapping and per-level question batches |
//! | `distractor`  | 3 plausible wrong options + correct answer, shuffled |
//! | `round`       | The match state machine: timers, scoring, level progression |
//! | `locale`      | The fraction-prompt instruction text per language tag |
//! | `leaderboard` | Collaborator seams and wire types for storage / leaderboard |
//! | `error`       | The engine error kinds |

pub mod distractor;
pub mod error;
pub mod fraction;
pub mod generator;
pub mod leaderboard;
pub mod locale;
pub mod models;
pub mod round;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_question` without reaching into sub-modules.
pub use distractor::answer_options;
pub use error::EngineError;
pub use fraction::{gcd, Fraction};
pub use generator::{family_for_level, generate_level_batch, generate_question};
pub use locale::Language;
pub use models::{AnswerValue, GameConfig, Problem, ProblemFamily};
pub use round::{
    format_total_time, Phase, RoundController, RoundEvent, RoundState, RoundSummary,
};
