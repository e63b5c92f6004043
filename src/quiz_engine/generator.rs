//! Level → problem-family mapping and question generation.
//!
//! Levels are grouped into fixed bands: squares warm-up (1), multiplication
//! tables (2–10), division tables (11–20), harder squares (21), and fraction
//! reduction (22–30). Parameter choice inside a band is randomized, but the
//! produced prompt text must be absent from the level's used-question set.
//! Rejection loops are bounded; running out of fresh prompts signals
//! [`EngineError::ExhaustedQuestionDomain`] rather than spinning forever.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::quiz_engine::{
    error::EngineError,
    fraction::Fraction,
    locale::Language,
    models::{AnswerValue, Problem, ProblemFamily},
};

/// Second factors shared by the multiplication and division bands.
/// 1, 2, 5, and 10 are omitted as too easy.
const TABLE_FACTORS: [u32; 6] = [3, 4, 6, 7, 8, 9];

/// Level-1 squares, consumed in this order without reuse.
const WARMUP_SQUARES: [u32; 5] = [5, 6, 7, 8, 9];

/// Level-21 squares: 6–12 with 10 skipped (10² is too easy for this band).
const HARD_SQUARES: [u32; 6] = [6, 7, 8, 9, 11, 12];

/// Bound for every parameter-rejection loop. Generous on purpose: at level 22
/// the rarest fresh prompt has a raw-draw probability of 1/56, so the bound
/// must be large enough that a truly available prompt is essentially never
/// missed. Draws are cheap; hitting this cap means the domain is gone.
const MAX_DRAW_ATTEMPTS: u32 = 1000;

/// Which family a level poses. Total order is fixed; levels past 30 are the
/// caller's bug and map to the last band.
pub fn family_for_level(level: u32) -> ProblemFamily {
    match level {
        1 | 21 => ProblemFamily::Square,
        2..=10 => ProblemFamily::Multiplication,
        11..=20 => ProblemFamily::Division,
        _ => ProblemFamily::Fraction,
    }
}

/// Generate one question for `level` whose prompt is not in `used`.
pub fn generate_question<R: Rng>(
    level: u32,
    used: &HashSet<String>,
    language: Language,
    rng: &mut R,
) -> Result<Problem, EngineError> {
    match level {
        1 => warmup_square(used),
        2..=10 => multiplication(level, used, rng),
        11..=20 => division(level, used, rng),
        21 => hard_square(used, rng),
        _ => fraction_reduction(level, used, language, rng),
    }
}

/// Generate a full batch for one level, deduplicated via a fresh used set.
///
/// If the domain runs dry mid-batch the partial batch is returned (the level
/// simply runs short); an empty batch is an error.
pub fn generate_level_batch<R: Rng>(
    level: u32,
    language: Language,
    rng: &mut R,
    questions_per_level: u32,
) -> Result<Vec<Problem>, EngineError> {
    let mut used: HashSet<String> = HashSet::new();
    let mut batch = Vec::with_capacity(questions_per_level as usize);

    for _ in 0..questions_per_level {
        match generate_question(level, &used, language, rng) {
            Ok(problem) => {
                used.insert(problem.display_text.clone());
                batch.push(problem);
            }
            Err(err @ EngineError::ExhaustedQuestionDomain { .. }) => {
                if batch.is_empty() {
                    return Err(err);
                }
                warn!(
                    "level {} batch short: {} of {} questions ({})",
                    level,
                    batch.len(),
                    questions_per_level,
                    err
                );
                break;
            }
            Err(err) => return Err(err),
        }
    }

    debug!("generated batch of {} for level {}", batch.len(), level);
    Ok(batch)
}

/// Level 1: fixed increasing sequence 5²…9², no randomness. Predictable on
/// purpose — the opening questions double as a tutorial.
fn warmup_square(used: &HashSet<String>) -> Result<Problem, EngineError> {
    for n in WARMUP_SQUARES {
        let text = format!("{}² = ?", n);
        if !used.contains(&text) {
            return Ok(Problem {
                family: ProblemFamily::Square,
                display_text: text,
                correct_answer: AnswerValue::Number((n * n) as f64),
            });
        }
    }
    Err(EngineError::ExhaustedQuestionDomain {
        level: 1,
        family: ProblemFamily::Square,
    })
}

/// Levels 2–10: the (level+1) times table over [`TABLE_FACTORS`].
fn multiplication<R: Rng>(
    level: u32,
    used: &HashSet<String>,
    rng: &mut R,
) -> Result<Problem, EngineError> {
    let multiplier = level + 1;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let factor = TABLE_FACTORS[rng.gen_range(0..TABLE_FACTORS.len())];
        let text = format!("{} × {} = ?", multiplier, factor);
        if used.contains(&text) {
            continue;
        }
        return Ok(Problem {
            family: ProblemFamily::Multiplication,
            display_text: text,
            correct_answer: AnswerValue::Number((multiplier * factor) as f64),
        });
    }
    Err(EngineError::ExhaustedQuestionDomain {
        level,
        family: ProblemFamily::Multiplication,
    })
}

/// Levels 11–20: dividing by (level−9). The dividend is built from the drawn
/// quotient so the division is always exact.
fn division<R: Rng>(
    level: u32,
    used: &HashSet<String>,
    rng: &mut R,
) -> Result<Problem, EngineError> {
    let divisor = level - 9;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let quotient = TABLE_FACTORS[rng.gen_range(0..TABLE_FACTORS.len())];
        let dividend = divisor * quotient;
        let text = format!("{} ÷ {} = ?", dividend, divisor);
        if used.contains(&text) {
            continue;
        }
        return Ok(Problem {
            family: ProblemFamily::Division,
            display_text: text,
            correct_answer: AnswerValue::Number(quotient as f64),
        });
    }
    Err(EngineError::ExhaustedQuestionDomain {
        level,
        family: ProblemFamily::Division,
    })
}

/// Level 21: squares drawn uniformly from [`HARD_SQUARES`].
fn hard_square<R: Rng>(used: &HashSet<String>, rng: &mut R) -> Result<Problem, EngineError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let n = HARD_SQUARES[rng.gen_range(0..HARD_SQUARES.len())];
        let text = format!("{}² = ?", n);
        if used.contains(&text) {
            continue;
        }
        return Ok(Problem {
            family: ProblemFamily::Square,
            display_text: text,
            correct_answer: AnswerValue::Number((n * n) as f64),
        });
    }
    Err(EngineError::ExhaustedQuestionDomain {
        level: 21,
        family: ProblemFamily::Square,
    })
}

/// Levels 22–30: fraction reduction.
///
/// A raw fraction with denominator 2–9 is drawn and rejected unless it
/// actually needs reducing (gcd > 1). The reduced pair is the answer; the
/// prompt shows it scaled back up by a random multiplier in [2, level−20],
/// so the displayed fraction is never already in lowest terms. The range
/// starts degenerate at level 22 (only multiplier 2) and widens with level.
fn fraction_reduction<R: Rng>(
    level: u32,
    used: &HashSet<String>,
    language: Language,
    rng: &mut R,
) -> Result<Problem, EngineError> {
    let max_multiplier = level - 20;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let denominator = rng.gen_range(2..=9u32);
        let numerator = rng.gen_range(1..denominator);
        let raw = Fraction::new(numerator, denominator);
        if raw.is_reduced() {
            continue;
        }
        let answer = raw.simplified()?;

        let multiplier = rng.gen_range(2..=max_multiplier);
        let display = Fraction::new(answer.numerator * multiplier, answer.denominator * multiplier);
        let text = format!("{}: {}", language.fully_reduce(), display);
        if used.contains(&text) {
            continue;
        }
        return Ok(Problem {
            family: ProblemFamily::Fraction,
            display_text: text,
            correct_answer: AnswerValue::Fraction(answer),
        });
    }
    Err(EngineError::ExhaustedQuestionDomain {
        level,
        family: ProblemFamily::Fraction,
    })
}
