//! Wrong-answer generation: 3 plausible distractors per question, shuffled in
//! with the correct answer.
//!
//! Distractors are small perturbations of the correct value, so they look
//! credible next to it. Rejection sampling keeps the four options unique; the
//! loop is bounded and signals [`EngineError::DistractorGenerationStalled`]
//! instead of spinning on a pathological input.

use log::warn;
use rand::Rng;

use crate::quiz_engine::{error::EngineError, fraction::Fraction, models::AnswerValue};

/// Total candidate draws allowed before giving up. The perturbation domains
/// hold far more than 3 viable values, so a healthy input converges within a
/// few draws.
const MAX_OPTION_ATTEMPTS: u32 = 200;

/// Build the 4-option set for one question: the correct answer plus 3 unique
/// distractors, in random order.
pub fn answer_options<R: Rng>(
    correct: &AnswerValue,
    rng: &mut R,
) -> Result<Vec<AnswerValue>, EngineError> {
    let mut options = vec![*correct];
    let mut attempts = 0u32;

    while options.len() < 4 {
        attempts += 1;
        if attempts > MAX_OPTION_ATTEMPTS {
            warn!("distractor generation stalled for '{}'", correct);
            return Err(EngineError::DistractorGenerationStalled {
                correct: correct.to_string(),
                attempts: MAX_OPTION_ATTEMPTS,
            });
        }
        let candidate = match correct {
            AnswerValue::Number(n) => perturb_number(*n, rng),
            AnswerValue::Fraction(f) => perturb_fraction(*f, rng),
        };
        let candidate = match candidate {
            Some(c) => c,
            None => continue,
        };
        if options.iter().any(|o| o.matches(&candidate)) {
            continue;
        }
        options.push(candidate);
    }

    shuffle(&mut options, rng);
    Ok(options)
}

/// Offset the number by a uniform draw from [-5, 5]. A zero offset reproduces
/// the correct answer and is filtered by the duplicate check; non-positive
/// results are rejected outright.
fn perturb_number<R: Rng>(n: f64, rng: &mut R) -> Option<AnswerValue> {
    let offset = rng.gen_range(-5i32..=5);
    let candidate = n + offset as f64;
    if candidate <= 0.0 {
        return None;
    }
    Some(AnswerValue::Number(candidate))
}

/// Offset numerator and denominator independently by uniform draws from
/// [-2, 2], clamping to numerator ≥ 1 and denominator ≥ 2. The result is not
/// reduced — "4/6" next to a correct "2/3" is exactly the kind of trap the
/// drill wants.
fn perturb_fraction<R: Rng>(f: Fraction, rng: &mut R) -> Option<AnswerValue> {
    let num_offset = rng.gen_range(-2i32..=2);
    let den_offset = rng.gen_range(-2i32..=2);
    let numerator = (f.numerator as i32 + num_offset).max(1) as u32;
    let denominator = (f.denominator as i32 + den_offset).max(2) as u32;
    Some(AnswerValue::Fraction(Fraction::new(numerator, denominator)))
}

/// Fisher-Yates shuffle.
fn shuffle<R: Rng>(options: &mut [AnswerValue], rng: &mut R) {
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }
}
