//! # math_drill_gen
//!
//! The engine behind a 30-level arithmetic trainer: adaptive question
//! generation, plausible wrong-answer distractors, and time-sensitive
//! scoring with penalties.
//!
//! Levels are grouped into fixed bands — squares warm-up (level 1),
//! multiplication tables (2–10), division tables (11–20), harder squares
//! (21), and fraction reduction (22–30). Each level poses a batch of 5
//! questions with a no-repeat guarantee, every question ships with a
//! shuffled 4-option answer set, and a 15-second countdown plus a 5-second
//! wrong-answer penalty drive the game-over conditions.
//!
//! ## How it works
//!
//! 1. Create a [`RoundController`] with a [`GameConfig`] (or its defaults),
//!    a [`Language`] for the fraction-prompt instruction, and an optional
//!    RNG seed — the first question is live immediately.
//! 2. Drive it with two events: [`RoundController::tick`] with the seconds
//!    elapsed since the last call, and [`RoundController::submit_answer`]
//!    with the player's pick from [`RoundController::options`].
//! 3. React to the returned [`RoundEvent`]: show points on `Scored`, call
//!    [`RoundController::advance_level`] on `LevelComplete`, and read
//!    [`RoundController::summary`] on `MatchComplete` / `GameOver` for the
//!    final screen and leaderboard submission.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to replay the exact same
//!   questions and option orders — useful for tests and demos.
//! - **Wall-clock authority**: expiry is decided by accumulated elapsed
//!   seconds, never by how many ticks happened to fire, so display jitter
//!   cannot change an outcome.
//! - **No I/O**: persistence and the remote leaderboard are trait seams in
//!   [`quiz_engine::leaderboard`]; the engine only hands out structured
//!   results.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{GameConfig, Language, RoundController, RoundEvent};
//!
//! let mut round = RoundController::new(GameConfig::default(), Language::En, Some(42))
//!     .expect("level 1 batch");
//!
//! let problem = round.current_problem().unwrap().clone();
//! println!("Q: {}", problem.display_text);
//! for opt in round.options() {
//!     println!("  {}", opt);
//! }
//!
//! round.tick(0.8);
//! match round.submit_answer(&problem.correct_answer).unwrap() {
//!     RoundEvent::Scored { points, quick } => {
//!         println!("+{points} points (quick: {quick})");
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_drill_gen::RoundController`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    answer_options, family_for_level, format_total_time, gcd, generate_level_batch,
    generate_question, AnswerValue, EngineError, Fraction, GameConfig, Language, Phase,
    Problem, ProblemFamily, RoundController, RoundEvent, RoundState, RoundSummary,
};

#[cfg(test)]
mod tests;
