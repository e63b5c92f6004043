//! One sample question per level, for all 30 levels.
//!
//! Run with: `cargo run --example levels`
//!
//! Shows how the level number maps to a problem family and how the
//! difficulty ramps inside each band: multiplication tables grow with the
//! level, division tables likewise, and the fraction band scales its
//! displayed fraction by a level-dependent multiplier. Fixed seed, so the
//! output is reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

use math_drill_gen::{answer_options, family_for_level, generate_level_batch, Language};

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);

    println!();
    println!("══ All 30 levels (seed 2024) ══");
    println!();

    let mut current_family = None;
    for level in 1..=30u32 {
        let family = family_for_level(level);
        if current_family != Some(family) {
            println!("── {} band ──", family);
            current_family = Some(family);
        }

        let batch = generate_level_batch(level, Language::En, &mut rng, 5)
            .expect("every level must yield a batch");
        let problem = &batch[0];
        let options = answer_options(&problem.correct_answer, &mut rng)
            .expect("options for a generated answer");

        let rendered: Vec<String> = options
            .iter()
            .map(|o| {
                if o.matches(&problem.correct_answer) {
                    format!("[{o}]")
                } else {
                    o.to_string()
                }
            })
            .collect();

        println!(
            "  level {:>2}: {:<28} options: {}",
            level,
            problem.display_text,
            rendered.join("  ")
        );
    }
    println!();
    println!("(the bracketed option is the correct answer)");
    println!();
}
