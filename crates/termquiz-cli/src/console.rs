//! Line-oriented terminal I/O for a quiz session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use termquiz_core::engine::QuizIo;
use termquiz_core::model::{LabelStyle, QuestionInstance};
use termquiz_core::report::AnswerRecord;

/// Reads answers from `input`, writes questions and feedback to `output`.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    labels: LabelStyle,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W, labels: LabelStyle) -> Self {
        Self {
            input,
            output,
            labels,
        }
    }

    fn prompt(&mut self) -> Result<()> {
        let noun = match self.labels {
            LabelStyle::Numeric => "number",
            LabelStyle::Alpha => "letter",
        };
        write!(self.output, "Enter the {noun} of your answer: ")?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> QuizIo for ConsoleIo<R, W> {
    fn present(&mut self, ordinal: usize, target: usize, question: &QuestionInstance) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {ordinal}/{target}: {}",
            question.question
        )?;
        for option in &question.options {
            writeln!(self.output, "{}. {}", option.label, option.text)?;
        }
        self.prompt()
    }

    fn read_response(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD, which matches no label.
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject_response(&mut self, input: &str, question: &QuestionInstance) -> Result<()> {
        let labels: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
        writeln!(
            self.output,
            "'{}' is not one of {}. Try again.",
            input.trim(),
            labels.join(", ")
        )?;
        self.prompt()
    }

    fn feedback(&mut self, answer: &AnswerRecord) -> Result<()> {
        if answer.is_correct {
            writeln!(self.output, "Correct!")?;
        } else {
            writeln!(
                self.output,
                "Wrong! The correct answer is: {}",
                answer.correct_answer
            )?;
        }
        Ok(())
    }
}
