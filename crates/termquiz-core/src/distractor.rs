//! Wrong-answer selection and option shuffling.
//!
//! Distractors are unique by *text*: two records with the same definition can
//! never both appear among one question's options, and neither can match the
//! correct answer.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{AnswerOption, LabelStyle, Pool, QuestionInstance, DISTRACTORS_PER_QUESTION};

/// Pick `DISTRACTORS_PER_QUESTION` distinct wrong-answer texts for the record
/// at `question_index`.
///
/// Candidates are every record except the question itself and anything in
/// `excluded`. Fails fast with [`QuizError::InsufficientDistractors`] when the
/// candidates do not hold enough distinct texts.
pub fn pick_distractors<R: Rng + ?Sized>(
    pool: &Pool,
    question_index: usize,
    excluded: &BTreeSet<usize>,
    rng: &mut R,
) -> Result<Vec<String>, QuizError> {
    let correct = pool
        .get(question_index)
        .ok_or(QuizError::IndexOutOfRange {
            index: question_index,
            pool_len: pool.len(),
        })?
        .definition
        .as_str();

    let mut eligible: Vec<usize> = (0..pool.len())
        .filter(|&i| i != question_index && !excluded.contains(&i))
        .collect();

    let distinct_texts: HashSet<&str> = eligible
        .iter()
        .filter_map(|&i| pool.get(i))
        .map(|r| r.definition.as_str())
        .filter(|text| *text != correct)
        .collect();
    if distinct_texts.len() < DISTRACTORS_PER_QUESTION {
        return Err(QuizError::InsufficientDistractors {
            index: question_index,
            needed: DISTRACTORS_PER_QUESTION,
            available: distinct_texts.len(),
        });
    }

    // Each draw removes a candidate, so the loop ends within `eligible.len()` draws.
    let mut chosen: Vec<String> = Vec::with_capacity(DISTRACTORS_PER_QUESTION);
    while chosen.len() < DISTRACTORS_PER_QUESTION {
        if eligible.is_empty() {
            return Err(QuizError::InsufficientDistractors {
                index: question_index,
                needed: DISTRACTORS_PER_QUESTION,
                available: chosen.len(),
            });
        }

        let candidate = eligible.swap_remove(rng.gen_range(0..eligible.len()));
        let Some(record) = pool.get(candidate) else {
            continue;
        };
        let text = record.definition.as_str();
        if text != correct && !chosen.iter().any(|c| c == text) {
            chosen.push(text.to_string());
        }
    }

    Ok(chosen)
}

/// Build a full question for the record at `question_index`: the correct
/// answer plus distractors, shuffled and labeled.
pub fn build_question<R: Rng + ?Sized>(
    pool: &Pool,
    question_index: usize,
    excluded: &BTreeSet<usize>,
    labels: LabelStyle,
    rng: &mut R,
) -> Result<QuestionInstance, QuizError> {
    let record = pool.get(question_index).ok_or(QuizError::IndexOutOfRange {
        index: question_index,
        pool_len: pool.len(),
    })?;

    let mut texts = pick_distractors(pool, question_index, excluded, rng)?;
    texts.push(record.definition.clone());
    texts.shuffle(rng);

    let options = texts
        .into_iter()
        .enumerate()
        .map(|(position, text)| AnswerOption {
            label: labels.label_for(position),
            text,
        })
        .collect();

    Ok(QuestionInstance {
        index: question_index,
        question: record.term.clone(),
        correct_answer: record.definition.clone(),
        options,
    })
}
