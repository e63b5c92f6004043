use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::fraction::Fraction;

// ---------------------------------------------------------------------------
// Problem primitives
// ---------------------------------------------------------------------------

/// The four arithmetic families. Which one is active is a pure function of
/// the level number (see `generator::family_for_level`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemFamily {
    Square,
    Multiplication,
    Division,
    Fraction,
}

impl fmt::Display for ProblemFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemFamily::Square => write!(f, "Square"),
            ProblemFamily::Multiplication => write!(f, "Multiplication"),
            ProblemFamily::Division => write!(f, "Division"),
            ProblemFamily::Fraction => write!(f, "Fraction"),
        }
    }
}

/// A correct answer or a candidate option.
///
/// Numeric families answer with a number, the fraction family with an
/// irreducible numerator/denominator pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnswerValue {
    Number(f64),
    Fraction(Fraction),
}

impl AnswerValue {
    /// Equality as the round controller sees it: exact pair equality for
    /// fractions, epsilon tolerance for numbers to absorb float noise.
    pub fn matches(&self, other: &AnswerValue) -> bool {
        match (self, other) {
            (AnswerValue::Number(a), AnswerValue::Number(b)) => (a - b).abs() < 1e-3,
            (AnswerValue::Fraction(a), AnswerValue::Fraction(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Fraction(fr) => write!(f, "{}", fr),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<Fraction> for AnswerValue {
    fn from(fr: Fraction) -> Self {
        AnswerValue::Fraction(fr)
    }
}

/// One generated question. Immutable once produced; the controller consumes
/// it and throws it away after it has been answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub family: ProblemFamily,
    /// Prompt text shown to the player, e.g. `"7 × 8 = ?"`. Also the
    /// deduplication key within a level's batch.
    pub display_text: String,
    pub correct_answer: AnswerValue,
}

// ---------------------------------------------------------------------------
// Match configuration
// ---------------------------------------------------------------------------

/// Immutable tuning constants for one match, passed into the controller at
/// construction. Defaults mirror the shipped game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_levels: u32,
    pub questions_per_level: u32,
    /// Seconds on the per-question clock.
    pub time_per_question: f64,
    /// Seconds removed from the question clock on a wrong answer.
    pub wrong_answer_penalty: f64,
    /// Answering within this many seconds earns `quick_answer_points`.
    pub quick_answer_time: f64,
    pub quick_answer_points: u32,
    pub normal_points: u32,
    /// Awarded once, on top of the last question's points, for clearing the
    /// final level.
    pub completion_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            total_levels: 30,
            questions_per_level: 5,
            time_per_question: 15.0,
            wrong_answer_penalty: 5.0,
            quick_answer_time: 1.5,
            quick_answer_points: 25,
            normal_points: 10,
            completion_bonus: 1000,
        }
    }
}
