//! Quiz administration loop.
//!
//! A [`Session`] walks a small state machine once per question:
//!
//! ```text
//! AwaitingQuestion -> Presenting -> AwaitingResponse -> Scored -> AwaitingQuestion | Complete
//! ```
//!
//! All session state (asked indices, score, ordinal) lives in the `Session`
//! value and is dropped with it. Display and input go through [`QuizIo`].

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::distractor::build_question;
use crate::error::QuizError;
use crate::model::{DistractorSource, LabelStyle, Pool, QuestionInstance};
use crate::report::{AnswerRecord, SessionReport};
use crate::selector::select_indices;
use crate::statistics::ScoreSummary;

/// Configuration for the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Questions requested; the session asks `min(question_count, pool size)`.
    pub question_count: usize,
    pub label_style: LabelStyle,
    pub distractor_source: DistractorSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            question_count: crate::config::DEFAULT_QUESTION_COUNT,
            label_style: LabelStyle::default(),
            distractor_source: DistractorSource::default(),
        }
    }
}

impl From<&QuizConfig> for EngineConfig {
    fn from(config: &QuizConfig) -> Self {
        Self {
            question_count: config.question_count,
            label_style: config.label_style,
            distractor_source: config.distractor_source,
        }
    }
}

/// The output/input collaborator of a session.
pub trait QuizIo {
    /// Show a question and its labeled options.
    fn present(&mut self, ordinal: usize, target: usize, question: &QuestionInstance)
        -> Result<()>;

    /// Block for one response. `None` means the input source is closed.
    fn read_response(&mut self) -> Result<Option<String>>;

    /// The response did not name an offered option; the same question stays open.
    fn reject_response(&mut self, input: &str, question: &QuestionInstance) -> Result<()>;

    /// Report how a question was answered.
    fn feedback(&mut self, answer: &AnswerRecord) -> Result<()>;
}

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingQuestion,
    Presenting(QuestionInstance),
    AwaitingResponse(QuestionInstance),
    Scored(AnswerRecord),
    Complete,
}

/// One run of the administration loop.
#[derive(Debug)]
pub struct Session<'a> {
    id: Uuid,
    started_at: DateTime<Utc>,
    pool: &'a Pool,
    config: EngineConfig,
    target: usize,
    asked: BTreeSet<usize>,
    correct: usize,
    ordinal: usize,
    answers: Vec<AnswerRecord>,
    phase: Phase,
}

impl<'a> Session<'a> {
    pub fn new(pool: &'a Pool, config: EngineConfig) -> Self {
        let target = config.question_count.min(pool.len());
        let phase = if target == 0 {
            Phase::Complete
        } else {
            Phase::AwaitingQuestion
        };
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            pool,
            config,
            target,
            asked: BTreeSet::new(),
            correct: 0,
            ordinal: 1,
            answers: Vec::new(),
            phase,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Number of questions this session will ask.
    pub fn target(&self) -> usize {
        self.target
    }

    /// 1-based ordinal of the question currently being asked.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Record indices asked so far.
    pub fn asked(&self) -> &BTreeSet<usize> {
        &self.asked
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Advance the state machine by one transition.
    ///
    /// On error the session stays in the phase it was in, so a failed step
    /// can be retried and never reads as complete.
    pub fn step<R: Rng + ?Sized>(&mut self, io: &mut dyn QuizIo, rng: &mut R) -> Result<()> {
        let phase = std::mem::replace(&mut self.phase, Phase::Complete);
        self.phase = match phase {
            Phase::AwaitingQuestion => {
                if self.asked.len() >= self.target {
                    Phase::Complete
                } else {
                    match self.next_question(rng) {
                        Ok(question) => Phase::Presenting(question),
                        Err(e) => return self.restore(Phase::AwaitingQuestion, e),
                    }
                }
            }
            Phase::Presenting(question) => {
                if let Err(e) = io.present(self.ordinal, self.target, &question) {
                    return self.restore(Phase::Presenting(question), e);
                }
                Phase::AwaitingResponse(question)
            }
            Phase::AwaitingResponse(question) => {
                let input = match io.read_response() {
                    Ok(Some(input)) => input,
                    Ok(None) => {
                        let err = QuizError::InputClosed {
                            asked: self.asked.len(),
                            target: self.target,
                        };
                        return self.restore(Phase::AwaitingResponse(question), err.into());
                    }
                    Err(e) => return self.restore(Phase::AwaitingResponse(question), e),
                };
                let chosen = question.option_for(&input).map(|o| o.text.clone());
                match chosen {
                    Some(chosen) => Phase::Scored(AnswerRecord {
                        ordinal: self.ordinal,
                        index: question.index,
                        is_correct: question.is_correct(&chosen),
                        chosen,
                        question: question.question,
                        correct_answer: question.correct_answer,
                    }),
                    None => {
                        tracing::debug!(input = %input.trim(), "rejected response");
                        if let Err(e) = io.reject_response(&input, &question) {
                            return self.restore(Phase::AwaitingResponse(question), e);
                        }
                        Phase::AwaitingResponse(question)
                    }
                }
            }
            Phase::Scored(answer) => {
                if let Err(e) = io.feedback(&answer) {
                    return self.restore(Phase::Scored(answer), e);
                }
                if answer.is_correct {
                    self.correct += 1;
                }
                self.asked.insert(answer.index);
                self.ordinal += 1;
                self.answers.push(answer);
                if self.asked.len() >= self.target {
                    Phase::Complete
                } else {
                    Phase::AwaitingQuestion
                }
            }
            Phase::Complete => Phase::Complete,
        };
        Ok(())
    }

    fn restore(&mut self, phase: Phase, err: anyhow::Error) -> Result<()> {
        self.phase = phase;
        Err(err)
    }

    fn next_question<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuestionInstance> {
        let index = select_indices(self.pool.len(), &self.asked, 1, rng)?
            .first()
            .copied()
            .ok_or(QuizError::ExhaustedPool {
                pool_len: self.pool.len(),
            })?;

        let distractor_exclusions = match self.config.distractor_source {
            DistractorSource::WholePool => BTreeSet::new(),
            DistractorSource::UnaskedOnly => self.asked.clone(),
        };

        let question = build_question(
            self.pool,
            index,
            &distractor_exclusions,
            self.config.label_style,
            rng,
        )?;
        tracing::debug!(ordinal = self.ordinal, index, "built question");
        Ok(question)
    }

    /// Drive the session to completion and summarize it.
    pub fn run<R: Rng + ?Sized>(mut self, io: &mut dyn QuizIo, rng: &mut R) -> Result<SessionReport> {
        tracing::info!(
            session = %self.id,
            target = self.target,
            pool = self.pool.len(),
            "starting quiz session"
        );
        while !self.is_complete() {
            self.step(io, rng)?;
        }
        let report = self.into_report();
        tracing::info!(
            session = %report.id,
            correct = report.score.correct,
            total = report.score.total,
            "quiz session complete"
        );
        Ok(report)
    }

    /// Summarize the session as it stands.
    pub fn into_report(self) -> SessionReport {
        let score = ScoreSummary::new(self.correct, self.answers.len());
        SessionReport {
            id: self.id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            requested: self.config.question_count,
            pool_size: self.pool.len(),
            score,
            answers: self.answers,
        }
    }
}

/// Runs quiz sessions over one pool.
pub struct QuizEngine {
    pool: Pool,
    config: EngineConfig,
}

impl QuizEngine {
    pub fn new(pool: Pool, config: EngineConfig) -> Self {
        Self { pool, config }
    }

    /// Start a fresh session.
    pub fn session(&self) -> Session<'_> {
        Session::new(&self.pool, self.config.clone())
    }

    /// Run one complete session.
    pub fn run<R: Rng + ?Sized>(&self, io: &mut dyn QuizIo, rng: &mut R) -> Result<SessionReport> {
        self.session().run(io, rng)
    }
}
