//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batches, options, and controller runs |
//! | Structural | Batch uniqueness per level; 4 unique options containing the answer |
//! | Per-family | Family banding, answer formulas, parameter domains per level |
//! | Fractions | Answers in lowest terms; displayed fraction never pre-reduced |
//! | State machine | Scoring tiers, penalties, expiry, level advance, victory bonus |
//! | Collaborator seams | Summary fields, high-score check, time formatting |

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz_engine::{
    answer_options, family_for_level, format_total_time, generate_level_batch,
    generate_question, AnswerValue, EngineError, Fraction, GameConfig, Language, Phase,
    ProblemFamily, RoundController, RoundEvent,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh controller with default config, English prompts, and a fixed seed.
fn controller(seed: u64) -> RoundController {
    RoundController::new(GameConfig::default(), Language::En, Some(seed))
        .expect("level 1 batch must generate")
}

/// Submit the live question's own correct answer.
fn answer_correctly(round: &mut RoundController) -> RoundEvent {
    let answer = round.current_problem().expect("live question").correct_answer;
    round.submit_answer(&answer).expect("submit in AwaitingAnswer")
}

/// Submit a value guaranteed wrong for the live question.
fn answer_wrongly(round: &mut RoundController) -> RoundEvent {
    let wrong = AnswerValue::Number(-1.0);
    round.submit_answer(&wrong).expect("submit in AwaitingAnswer")
}

/// Pull the `n/d` tail out of a fraction prompt like "Fully Reduce: 4/6".
fn displayed_fraction(display_text: &str) -> Fraction {
    let tail = display_text.rsplit(": ").next().expect("prompt tail");
    let (n, d) = tail.split_once('/').expect("n/d tail");
    Fraction::new(n.parse().expect("numerator"), d.parse().expect("denominator"))
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batches() {
    for level in [1u32, 5, 14, 21, 26] {
        let a = generate_level_batch(level, Language::En, &mut rng(12345), 5).unwrap();
        let b = generate_level_batch(level, Language::En, &mut rng(12345), 5).unwrap();
        assert_eq!(a, b, "batch mismatch for level {level}");
    }
}

#[test]
fn same_seed_produces_identical_option_sets() {
    let a = answer_options(&AnswerValue::Number(56.0), &mut rng(9)).unwrap();
    let b = answer_options(&AnswerValue::Number(56.0), &mut rng(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn same_seed_controllers_stay_in_lockstep() {
    let mut a = controller(2024);
    let mut b = controller(2024);
    for _ in 0..4 {
        assert_eq!(a.current_problem(), b.current_problem());
        assert_eq!(a.options(), b.options());
        assert_eq!(answer_correctly(&mut a), answer_correctly(&mut b));
    }
}

#[test]
fn entropy_seed_produces_a_valid_round() {
    // Smoke test: rng_seed: None must not panic and must satisfy invariants.
    let round = RoundController::new(GameConfig::default(), Language::En, None).unwrap();
    assert_eq!(round.phase(), Phase::AwaitingAnswer);
    assert!(round.current_problem().is_some());
    assert_eq!(round.options().len(), 4);
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_level_batch_has_unique_prompts() {
    for level in 1..=30u32 {
        for seed in SEEDS {
            let batch = generate_level_batch(level, Language::En, &mut rng(seed), 5).unwrap();
            assert_eq!(batch.len(), 5, "short batch for level {level} seed={seed}");
            let mut seen = HashSet::new();
            for p in &batch {
                assert!(
                    seen.insert(p.display_text.clone()),
                    "duplicate prompt '{}' in level {level} seed={seed}",
                    p.display_text
                );
            }
        }
    }
}

#[test]
fn options_always_contain_the_correct_answer_once() {
    for level in 1..=30u32 {
        let batch = generate_level_batch(level, Language::En, &mut rng(77), 5).unwrap();
        for p in &batch {
            let options = answer_options(&p.correct_answer, &mut rng(level as u64)).unwrap();
            assert_eq!(options.len(), 4, "level {level}");
            let hits = options.iter().filter(|o| o.matches(&p.correct_answer)).count();
            assert_eq!(hits, 1, "level {level}: correct answer count {hits}");
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert!(!a.matches(b), "duplicate options at level {level}");
                }
            }
        }
    }
}

#[test]
fn generated_question_respects_used_set() {
    let mut r = rng(5);
    let mut used = HashSet::new();
    for _ in 0..5 {
        let p = generate_question(6, &used, Language::En, &mut r).unwrap();
        assert!(!used.contains(&p.display_text));
        used.insert(p.display_text);
    }
}

#[test]
fn exhausted_domain_is_signalled_not_looped() {
    // Level 1 has exactly five prompts; a full used set must error out.
    let used: HashSet<String> =
        [5u32, 6, 7, 8, 9].iter().map(|n| format!("{}² = ?", n)).collect();
    let err = generate_question(1, &used, Language::En, &mut rng(1)).unwrap_err();
    assert!(matches!(err, EngineError::ExhaustedQuestionDomain { level: 1, .. }));
}

#[test]
fn oversized_batch_request_runs_short_instead_of_failing() {
    // Asking level 1 for six questions drains its five-prompt domain.
    let batch = generate_level_batch(1, Language::En, &mut rng(1), 6).unwrap();
    assert_eq!(batch.len(), 5);
}

// ── per-family properties ─────────────────────────────────────────────────────

#[test]
fn family_banding_matches_levels() {
    assert_eq!(family_for_level(1), ProblemFamily::Square);
    for level in 2..=10 {
        assert_eq!(family_for_level(level), ProblemFamily::Multiplication, "level {level}");
    }
    for level in 11..=20 {
        assert_eq!(family_for_level(level), ProblemFamily::Division, "level {level}");
    }
    assert_eq!(family_for_level(21), ProblemFamily::Square);
    for level in 22..=30 {
        assert_eq!(family_for_level(level), ProblemFamily::Fraction, "level {level}");
    }
}

#[test]
fn level_1_poses_squares_in_fixed_increasing_order() {
    let batch = generate_level_batch(1, Language::En, &mut rng(55), 5).unwrap();
    let expected = [5u32, 6, 7, 8, 9];
    for (p, n) in batch.iter().zip(expected) {
        assert_eq!(p.display_text, format!("{}² = ?", n));
        assert!(p.correct_answer.matches(&AnswerValue::Number((n * n) as f64)));
    }
}

#[test]
fn multiplication_levels_use_level_plus_one_times_table() {
    let factors = [3u32, 4, 6, 7, 8, 9];
    for level in 2..=10u32 {
        for seed in SEEDS {
            let batch = generate_level_batch(level, Language::En, &mut rng(seed), 5).unwrap();
            for p in &batch {
                let answer = match p.correct_answer {
                    AnswerValue::Number(n) => n as u32,
                    _ => panic!("multiplication answered with a fraction"),
                };
                assert!(
                    factors.iter().any(|f| (level + 1) * f == answer),
                    "level {level}: answer {answer} is not (level+1) × factor"
                );
            }
        }
    }
}

#[test]
fn division_levels_divide_exactly_by_level_minus_nine() {
    for level in 11..=20u32 {
        let divisor = level - 9;
        let batch = generate_level_batch(level, Language::En, &mut rng(13), 5).unwrap();
        for p in &batch {
            let quotient = match p.correct_answer {
                AnswerValue::Number(n) => n as u32,
                _ => panic!("division answered with a fraction"),
            };
            let dividend = divisor * quotient;
            assert_eq!(p.display_text, format!("{} ÷ {} = ?", dividend, divisor));
        }
    }
}

#[test]
fn level_21_draws_squares_from_six_to_twelve_skipping_ten() {
    let allowed: HashSet<String> =
        [6u32, 7, 8, 9, 11, 12].iter().map(|n| format!("{}² = ?", n)).collect();
    for seed in SEEDS {
        let batch = generate_level_batch(21, Language::En, &mut rng(seed), 5).unwrap();
        for p in &batch {
            assert!(allowed.contains(&p.display_text), "unexpected prompt {}", p.display_text);
        }
    }
}

// ── fraction levels ──────────────────────────────────────────────────────────

#[test]
fn fraction_answers_are_always_in_lowest_terms() {
    for level in 22..=30u32 {
        for seed in SEEDS {
            let batch = generate_level_batch(level, Language::En, &mut rng(seed), 5).unwrap();
            for p in &batch {
                match p.correct_answer {
                    AnswerValue::Fraction(f) => {
                        assert!(f.is_reduced(), "level {level}: answer {f} not reduced")
                    }
                    _ => panic!("fraction level answered with a number"),
                }
            }
        }
    }
}

#[test]
fn displayed_fractions_always_need_reducing() {
    for level in 22..=30u32 {
        let batch = generate_level_batch(level, Language::En, &mut rng(404), 5).unwrap();
        for p in &batch {
            let shown = displayed_fraction(&p.display_text);
            assert!(
                !shown.is_reduced(),
                "level {level}: displayed fraction {shown} is already reduced"
            );
        }
    }
}

#[test]
fn displayed_fraction_scales_the_answer_within_level_bounds() {
    for level in 22..=30u32 {
        let batch = generate_level_batch(level, Language::En, &mut rng(31), 5).unwrap();
        for p in &batch {
            let answer = match p.correct_answer {
                AnswerValue::Fraction(f) => f,
                _ => unreachable!(),
            };
            let shown = displayed_fraction(&p.display_text);
            assert_eq!(shown.numerator % answer.numerator, 0);
            let multiplier = shown.numerator / answer.numerator;
            assert_eq!(shown.denominator, answer.denominator * multiplier);
            assert!(
                (2..=level - 20).contains(&multiplier),
                "level {level}: multiplier {multiplier} out of [2, {}]",
                level - 20
            );
        }
    }
}

#[test]
fn fraction_prompt_uses_the_requested_language() {
    let batch = generate_level_batch(25, Language::De, &mut rng(8), 5).unwrap();
    for p in &batch {
        assert!(
            p.display_text.starts_with("Kürze vollständig: "),
            "German prompt missing: {}",
            p.display_text
        );
    }
}

// ── answer comparison ────────────────────────────────────────────────────────

#[test]
fn numeric_comparison_absorbs_float_noise_only() {
    let correct = AnswerValue::Number(25.0);
    assert!(correct.matches(&AnswerValue::Number(25.0005)));
    assert!(!correct.matches(&AnswerValue::Number(25.01)));
    assert!(!correct.matches(&AnswerValue::Fraction(Fraction::new(25, 1))));
}

// ── state machine ────────────────────────────────────────────────────────────

#[test]
fn round_starts_at_level_1_question_0() {
    let round = controller(1);
    let state = round.state();
    assert_eq!(state.level, 1);
    assert_eq!(state.score, 0);
    assert_eq!(state.question_index_in_level, 0);
    assert_eq!(state.time_remaining_for_question, 15.0);
    assert_eq!(round.current_problem().unwrap().display_text, "5² = ?");
}

#[test]
fn quick_answer_awards_25_and_slow_answer_10() {
    let mut round = controller(3);

    round.tick(1.0);
    match answer_correctly(&mut round) {
        RoundEvent::Scored { points, quick } => {
            assert_eq!(points, 25);
            assert!(quick);
        }
        other => panic!("expected Scored, got {other:?}"),
    }

    round.tick(3.0);
    match answer_correctly(&mut round) {
        RoundEvent::Scored { points, quick } => {
            assert_eq!(points, 10);
            assert!(!quick);
        }
        other => panic!("expected Scored, got {other:?}"),
    }

    assert_eq!(round.score(), 35);
}

#[test]
fn scoring_resets_the_question_clock() {
    let mut round = controller(3);
    round.tick(4.0);
    answer_correctly(&mut round);
    assert_eq!(round.state().time_remaining_for_question, 15.0);
}

#[test]
fn wrong_answer_costs_time_not_points_and_keeps_the_question() {
    let mut round = controller(6);
    let before = round.current_problem().unwrap().clone();

    match answer_wrongly(&mut round) {
        RoundEvent::Penalized { time_left } => assert_eq!(time_left, 10.0),
        other => panic!("expected Penalized, got {other:?}"),
    }
    assert_eq!(round.phase(), Phase::AwaitingAnswer);
    assert_eq!(round.score(), 0);
    assert_eq!(round.current_problem(), Some(&before));

    // The player may retry and still score.
    match answer_correctly(&mut round) {
        RoundEvent::Scored { points, .. } => assert_eq!(points, 25),
        other => panic!("expected Scored, got {other:?}"),
    }
}

#[test]
fn repeated_penalties_drain_the_clock_into_game_over() {
    let mut round = controller(6);
    assert!(matches!(answer_wrongly(&mut round), RoundEvent::Penalized { .. }));
    assert!(matches!(answer_wrongly(&mut round), RoundEvent::Penalized { .. }));
    match answer_wrongly(&mut round) {
        RoundEvent::GameOver { final_score } => assert_eq!(final_score, 0),
        other => panic!("expected GameOver, got {other:?}"),
    }
    assert_eq!(round.phase(), Phase::GameOver);
}

#[test]
fn timer_expiry_ends_the_match_with_the_committed_score() {
    let mut round = controller(9);
    round.tick(0.5);
    answer_correctly(&mut round); // 25 points banked
    let ended = round.tick(15.0);
    match ended {
        Some(RoundEvent::GameOver { final_score }) => assert_eq!(final_score, 25),
        other => panic!("expected GameOver, got {other:?}"),
    }
    assert_eq!(round.phase(), Phase::GameOver);
}

#[test]
fn expiry_follows_accumulated_elapsed_time_not_tick_count() {
    // Many small ticks accumulate without expiring; one large tick that
    // crosses the 15s budget ends the match no matter how few ticks fired.
    let mut round = controller(14);
    for _ in 0..140 {
        assert!(round.tick(0.1).is_none());
    }
    assert!(matches!(round.tick(5.0), Some(RoundEvent::GameOver { .. })));
}

#[test]
fn level_completion_requires_explicit_advance() {
    let mut round = controller(18);
    for i in 0..4 {
        match answer_correctly(&mut round) {
            RoundEvent::Scored { .. } => {}
            other => panic!("question {i}: expected Scored, got {other:?}"),
        }
    }
    match answer_correctly(&mut round) {
        RoundEvent::LevelComplete { completed_level, points } => {
            assert_eq!(completed_level, 1);
            assert_eq!(points, 25);
        }
        other => panic!("expected LevelComplete, got {other:?}"),
    }
    assert_eq!(round.phase(), Phase::LevelComplete);
    assert!(round.current_problem().is_none());

    round.advance_level().unwrap();
    assert_eq!(round.level(), 2);
    assert_eq!(round.state().question_index_in_level, 0);
    assert_eq!(round.phase(), Phase::AwaitingAnswer);
}

#[test]
fn match_clock_pauses_between_levels_and_never_resets() {
    let mut round = controller(23);
    round.tick(2.0);
    for _ in 0..5 {
        answer_correctly(&mut round);
    }
    assert_eq!(round.phase(), Phase::LevelComplete);
    let paused = round.state().total_elapsed_time;
    assert_eq!(paused, 2.0);

    // Ticks during the transition are ignored.
    assert!(round.tick(60.0).is_none());
    assert_eq!(round.state().total_elapsed_time, paused);

    round.advance_level().unwrap();
    round.tick(1.5);
    assert_eq!(round.state().total_elapsed_time, 3.5);
}

#[test]
fn clearing_level_30_awards_the_completion_bonus() {
    let mut round = controller(30);
    let mut last = None;
    'outer: for _ in 0..30 {
        loop {
            match answer_correctly(&mut round) {
                RoundEvent::Scored { .. } => {}
                RoundEvent::LevelComplete { .. } => {
                    round.advance_level().unwrap();
                    break;
                }
                done @ RoundEvent::MatchComplete { .. } => {
                    last = Some(done);
                    break 'outer;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }
    // 150 instant answers at 25 points each, plus the 1000 bonus.
    match last {
        Some(RoundEvent::MatchComplete { final_score }) => assert_eq!(final_score, 4750),
        other => panic!("expected MatchComplete, got {other:?}"),
    }
    assert_eq!(round.phase(), Phase::MatchComplete);

    let summary = round.summary().expect("terminal summary");
    assert!(summary.victory);
    assert_eq!(summary.levels_cleared, 30);
    assert_eq!(summary.final_score, 4750);
}

#[test]
fn terminal_phases_reject_further_answers() {
    let mut round = controller(6);
    answer_wrongly(&mut round);
    answer_wrongly(&mut round);
    answer_wrongly(&mut round); // GameOver
    let err = round.submit_answer(&AnswerValue::Number(25.0)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidPhase { operation: "submit_answer", .. }));

    let err = round.advance_level().unwrap_err();
    assert!(matches!(err, EngineError::InvalidPhase { operation: "advance_level", .. }));
}

#[test]
fn start_match_resets_for_a_new_game() {
    let mut round = controller(6);
    round.tick(3.0);
    answer_wrongly(&mut round);
    answer_wrongly(&mut round);
    answer_wrongly(&mut round); // GameOver
    assert!(round.summary().is_some());

    round.start_match().unwrap();
    let state = round.state();
    assert_eq!(round.phase(), Phase::AwaitingAnswer);
    assert_eq!(state.level, 1);
    assert_eq!(state.score, 0);
    assert_eq!(state.total_elapsed_time, 0.0);
    assert!(round.summary().is_none());
}

#[test]
fn game_over_summary_reports_defeat() {
    let mut round = controller(40);
    for _ in 0..5 {
        answer_correctly(&mut round);
    }
    round.advance_level().unwrap();
    round.tick(20.0); // expire on level 2
    let summary = round.summary().expect("terminal summary");
    assert!(!summary.victory);
    assert_eq!(summary.levels_cleared, 1);
    assert_eq!(summary.final_score, 125);
}

// ── collaborator helpers ─────────────────────────────────────────────────────

#[test]
fn high_score_check_is_strictly_greater() {
    let mut round = controller(40);
    round.tick(0.5);
    answer_correctly(&mut round); // 25 points banked
    round.tick(20.0);
    let summary = round.summary().unwrap();
    assert!(summary.is_new_high_score(24));
    assert!(!summary.is_new_high_score(25)); // ties do not replace the record
    assert!(!summary.is_new_high_score(26));
}

#[test]
fn total_time_formats_as_minutes_and_seconds() {
    assert_eq!(format_total_time(0.0), "0:00");
    assert_eq!(format_total_time(65.4), "1:05");
    assert_eq!(format_total_time(600.0), "10:00");
}
