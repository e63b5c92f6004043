//! End-to-end match walkthrough.
//!
//! Run with: `cargo run --example demo`
//!
//! Drives a seeded [`RoundController`] through the opening levels the way a
//! UI would: show the prompt and its 4 options, tick the clock, submit the
//! answer, and react to the returned event. A wrong answer and its time
//! penalty are demonstrated on purpose, and the final section shows the
//! leaderboard wire payload the surrounding app would submit.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the whole match reproducible.
//! - `tick(elapsed_seconds)` is the only clock input; answering within 1.5s
//!   earns the quick bonus (25 instead of 10 points).
//! - `LevelComplete` hands control back to the caller, which decides when to
//!   `advance_level()`.

use math_drill_gen::{
    format_total_time, AnswerValue, GameConfig, Language, RoundController, RoundEvent,
};
use math_drill_gen::quiz_engine::leaderboard::submit_payload;

fn print_question(round: &RoundController) {
    let state = round.state();
    let problem = round.current_problem().expect("live question");
    println!(
        "  [level {}/{} · Q{} · {} pts · {:.1}s left]",
        state.level,
        30,
        state.question_index_in_level + 1,
        state.score,
        state.time_remaining_for_question
    );
    println!("  Q: {}", problem.display_text);
    for (i, opt) in round.options().iter().enumerate() {
        println!("     {}) {}", (b'A' + i as u8) as char, opt);
    }
}

fn report(event: &RoundEvent) {
    match event {
        RoundEvent::Scored { points, quick } => {
            let tag = if *quick { " (quick bonus)" } else { "" };
            println!("  → correct, +{points} points{tag}");
        }
        RoundEvent::LevelComplete { completed_level, points } => {
            println!("  → correct, +{points} points — level {completed_level} cleared!");
        }
        RoundEvent::MatchComplete { final_score } => {
            println!("  → match complete! final score {final_score}");
        }
        RoundEvent::Penalized { time_left } => {
            println!("  → wrong! 5s penalty, {time_left:.1}s left on this question");
        }
        RoundEvent::GameOver { final_score } => {
            println!("  → game over with {final_score} points");
        }
    }
    println!();
}

fn main() {
    let mut round = RoundController::new(GameConfig::default(), Language::En, Some(42))
        .expect("level 1 batch");

    println!();
    println!("══ Level 1: the squares warm-up, answered fast ══");
    println!();
    // Level 1 is a fixed 5²…9² sequence, so the answers are easy to follow.
    for _ in 0..5 {
        print_question(&round);
        round.tick(0.8);
        let answer = round.current_problem().unwrap().correct_answer;
        let event = round.submit_answer(&answer).unwrap();
        report(&event);
    }
    round.advance_level().unwrap();

    println!("══ Level 2: one slow answer, one deliberate mistake ══");
    println!();
    print_question(&round);
    round.tick(3.2); // past the 1.5s quick window
    let answer = round.current_problem().unwrap().correct_answer;
    report(&round.submit_answer(&answer).unwrap());

    print_question(&round);
    round.tick(1.0);
    report(&round.submit_answer(&AnswerValue::Number(-1.0)).unwrap());

    // Retry the same question correctly.
    print_question(&round);
    let answer = round.current_problem().unwrap().correct_answer;
    report(&round.submit_answer(&answer).unwrap());

    let state = round.state();
    println!("══ Status ══");
    println!();
    println!("  score: {}", state.score);
    println!("  match clock: {}", format_total_time(state.total_elapsed_time));
    println!();

    // What the surrounding app would POST after a terminal event.
    println!("══ Leaderboard payload (built by the app after game over) ══");
    println!();
    println!("  {}", submit_payload("demo_player", state.score));
    println!();
}
