//! The round controller: a state machine over level, score, and the two
//! clocks (per-question countdown, total match time).
//!
//! The controller is single-threaded and event-driven. Two external events
//! exist: `tick(elapsed_seconds)` and `submit_answer(value)`, arriving
//! strictly serialized. Remaining question time is recomputed from
//! accumulated elapsed seconds — wall-clock time is the authority for
//! expiry, never the number of ticks that happened to fire. Starting a new
//! question resets the countdown in place, so two questions can never have
//! live timers at once.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    distractor::answer_options,
    error::EngineError,
    generator::generate_level_batch,
    locale::Language,
    models::{AnswerValue, GameConfig, Problem},
};

/// Expiry tolerance in seconds. A wrong-answer penalty that leaves less than
/// this on the clock is treated as reaching zero, matching the 100 ms display
/// tick the timers are sampled at.
const EXPIRY_EPSILON: f64 = 0.1;

/// Where the controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A question is live and its countdown is running.
    AwaitingAnswer,
    /// All questions of the current level answered; waiting for
    /// [`RoundController::advance_level`].
    LevelComplete,
    /// Terminal: final level cleared, completion bonus awarded.
    MatchComplete,
    /// Terminal: a timer ran out.
    GameOver,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::AwaitingAnswer => "AwaitingAnswer",
            Phase::LevelComplete => "LevelComplete",
            Phase::MatchComplete => "MatchComplete",
            Phase::GameOver => "GameOver",
        }
    }
}

/// What a player action or clock tick produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Correct answer mid-level; the next question is already live.
    Scored { points: u32, quick: bool },
    /// Correct answer on the level's last question (points included in the
    /// running score). Call `advance_level` to continue.
    LevelComplete { completed_level: u32, points: u32 },
    /// Correct answer on the final question of the final level.
    MatchComplete { final_score: u32 },
    /// Wrong answer: the question clock lost the penalty, play continues on
    /// the same question.
    Penalized { time_left: f64 },
    /// A clock reached zero (by expiry or by penalty).
    GameOver { final_score: u32 },
}

/// Serializable snapshot of the mutable round state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub level: u32,
    pub score: u32,
    pub question_index_in_level: u32,
    pub time_remaining_for_question: f64,
    pub total_elapsed_time: f64,
}

/// Produced once a terminal phase is reached; everything the surrounding
/// application needs for the game-over / victory screen and the leaderboard
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub final_score: u32,
    /// Levels fully cleared (equals `total_levels` on victory).
    pub levels_cleared: u32,
    pub total_time_seconds: f64,
    pub victory: bool,
}

impl RoundSummary {
    /// Pure high-score check; persisting the result is the caller's job.
    pub fn is_new_high_score(&self, previous_high: u32) -> bool {
        self.final_score > previous_high
    }
}

/// Format a total time as `m:ss` for the match clock display.
pub fn format_total_time(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// One match worth of state. Owns its RNG so a seeded controller replays the
/// exact same questions and options.
pub struct RoundController {
    config: GameConfig,
    language: Language,
    rng: StdRng,
    phase: Phase,
    level: u32,
    score: u32,
    question_index: usize,
    batch: Vec<Problem>,
    options: Vec<AnswerValue>,
    /// Seconds since the active question went live.
    question_elapsed: f64,
    /// Seconds left on the active question's clock (countdown minus
    /// penalties).
    time_left: f64,
    /// Match clock; accumulates only while a question is live, so level
    /// transitions pause it. Never reset until a new match starts.
    total_elapsed: f64,
}

impl RoundController {
    /// Build a controller with its first match already started: level 1,
    /// score 0, first question live.
    pub fn new(
        config: GameConfig,
        language: Language,
        rng_seed: Option<u64>,
    ) -> Result<Self, EngineError> {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut controller = RoundController {
            config,
            language,
            rng,
            phase: Phase::AwaitingAnswer,
            level: 1,
            score: 0,
            question_index: 0,
            batch: Vec::new(),
            options: Vec::new(),
            question_elapsed: 0.0,
            time_left: 0.0,
            total_elapsed: 0.0,
        };
        controller.start_match()?;
        Ok(controller)
    }

    /// Reset to a fresh match: level 1, score 0, clocks zeroed, first batch
    /// generated and its first question live. Valid in any phase — "play
    /// again" reuses the controller and its RNG stream.
    pub fn start_match(&mut self) -> Result<(), EngineError> {
        self.level = 1;
        self.score = 0;
        self.total_elapsed = 0.0;
        self.load_level_batch()?;
        self.phase = Phase::AwaitingAnswer;
        debug!("match started: {} levels", self.config.total_levels);
        Ok(())
    }

    /// Advance both clocks by `elapsed_seconds`. Returns the game-over event
    /// when the question clock runs out; otherwise `None`. Ignored outside
    /// `AwaitingAnswer` — the match clock pauses across level transitions.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Option<RoundEvent> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }
        self.total_elapsed += elapsed_seconds;
        self.question_elapsed += elapsed_seconds;
        self.time_left = (self.time_left - elapsed_seconds).max(0.0);
        if self.time_left <= 0.0 {
            self.phase = Phase::GameOver;
            debug!("question clock expired at level {}", self.level);
            return Some(RoundEvent::GameOver { final_score: self.score });
        }
        None
    }

    /// Handle a player answer against the live question.
    pub fn submit_answer(&mut self, selected: &AnswerValue) -> Result<RoundEvent, EngineError> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(EngineError::InvalidPhase {
                operation: "submit_answer",
                phase: self.phase.name(),
            });
        }
        let correct = self.batch[self.question_index]
            .correct_answer
            .matches(selected);

        if !correct {
            self.time_left = (self.time_left - self.config.wrong_answer_penalty).max(0.0);
            if self.time_left <= EXPIRY_EPSILON {
                self.phase = Phase::GameOver;
                debug!("penalty drained the clock at level {}", self.level);
                return Ok(RoundEvent::GameOver { final_score: self.score });
            }
            return Ok(RoundEvent::Penalized { time_left: self.time_left });
        }

        let quick = self.question_elapsed <= self.config.quick_answer_time;
        let points = if quick {
            self.config.quick_answer_points
        } else {
            self.config.normal_points
        };
        self.score += points;

        let last_in_level = self.question_index + 1 >= self.batch.len();
        if last_in_level {
            if self.level == self.config.total_levels {
                self.score += self.config.completion_bonus;
                self.phase = Phase::MatchComplete;
                debug!("match complete with score {}", self.score);
                return Ok(RoundEvent::MatchComplete { final_score: self.score });
            }
            self.phase = Phase::LevelComplete;
            debug!("level {} complete, score {}", self.level, self.score);
            return Ok(RoundEvent::LevelComplete {
                completed_level: self.level,
                points,
            });
        }

        self.question_index += 1;
        self.options = answer_options(&self.batch[self.question_index].correct_answer, &mut self.rng)?;
        self.reset_question_clock();
        Ok(RoundEvent::Scored { points, quick })
    }

    /// Move to the next level after [`RoundEvent::LevelComplete`]. Generates
    /// a fresh batch and puts its first question live; the match clock keeps
    /// its accumulated value.
    pub fn advance_level(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::LevelComplete {
            return Err(EngineError::InvalidPhase {
                operation: "advance_level",
                phase: self.phase.name(),
            });
        }
        self.level += 1;
        self.load_level_batch()?;
        self.phase = Phase::AwaitingAnswer;
        debug!("advanced to level {}", self.level);
        Ok(())
    }

    fn load_level_batch(&mut self) -> Result<(), EngineError> {
        self.batch = generate_level_batch(
            self.level,
            self.language,
            &mut self.rng,
            self.config.questions_per_level,
        )?;
        self.question_index = 0;
        self.options = answer_options(&self.batch[0].correct_answer, &mut self.rng)?;
        self.reset_question_clock();
        Ok(())
    }

    fn reset_question_clock(&mut self) {
        self.question_elapsed = 0.0;
        self.time_left = self.config.time_per_question;
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The live question, if a level is in progress.
    pub fn current_problem(&self) -> Option<&Problem> {
        if self.phase == Phase::AwaitingAnswer {
            self.batch.get(self.question_index)
        } else {
            None
        }
    }

    /// The shuffled 4-option set for the live question.
    pub fn options(&self) -> &[AnswerValue] {
        &self.options
    }

    pub fn state(&self) -> RoundState {
        RoundState {
            level: self.level,
            score: self.score,
            question_index_in_level: self.question_index as u32,
            time_remaining_for_question: self.time_left,
            total_elapsed_time: self.total_elapsed,
        }
    }

    /// Available once the match has ended, `None` before that.
    pub fn summary(&self) -> Option<RoundSummary> {
        match self.phase {
            Phase::MatchComplete => Some(RoundSummary {
                final_score: self.score,
                levels_cleared: self.config.total_levels,
                total_time_seconds: self.total_elapsed,
                victory: true,
            }),
            Phase::GameOver => Some(RoundSummary {
                final_score: self.score,
                levels_cleared: self.level.saturating_sub(1),
                total_time_seconds: self.total_elapsed,
                victory: false,
            }),
            _ => None,
        }
    }
}
