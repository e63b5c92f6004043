use thiserror::Error;

use crate::quiz_engine::models::ProblemFamily;

/// Everything that can go wrong inside the engine.
///
/// Collaborator failures (storage, network) are deliberately absent: those
/// live outside the core and must never corrupt round state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A level's parameter space cannot yield another unused question.
    /// Not fatal — the caller may run the level with a short batch.
    #[error("question domain exhausted for {family} at level {level}")]
    ExhaustedQuestionDomain { level: u32, family: ProblemFamily },

    /// The retry budget ran out while collecting 4 unique answer options.
    /// Fatal for the affected question; regenerate it instead of showing a
    /// broken option set.
    #[error("could not build 4 unique answer options for '{correct}' within {attempts} attempts")]
    DistractorGenerationStalled { correct: String, attempts: u32 },

    /// A zero denominator reached simplification. Generation constraints make
    /// this unreachable; seeing it means a programming error, not bad input.
    #[error("invalid fraction {numerator}/{denominator}: denominator is zero")]
    InvalidFraction { numerator: u32, denominator: u32 },

    /// A controller operation was called in a phase where it is not valid,
    /// e.g. `submit_answer` after game over or `advance_level` mid-level.
    #[error("operation '{operation}' is not valid in phase {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: &'static str,
    },
}
