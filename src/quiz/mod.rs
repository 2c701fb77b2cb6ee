use std::time::Instant;

use crate::input::{AnswerSource, Response};
use crate::output::{Message, QuizOutput};

pub mod definition;
pub mod settings;


use self::definition::QuizDefinition;
use self::settings::{Mode, Settings};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

pub struct Quiz<I: AnswerSource, O: QuizOutput> {
    problems: Vec<definition::Problem>,
    correct: usize,
    settings: Settings,
    input: I,
    output: O,
}

impl<I: AnswerSource, O: QuizOutput> Quiz<I, O> {
    pub fn new(definition: QuizDefinition, settings: Settings, input: I, output: O) -> Self {
        Quiz {
            problems: definition.into_problems(),
            correct: 0,
            settings,
            input,
            output,
        }
    }

    /// Runs the session to completion and returns the final score.
    ///
    /// In timed mode the countdown covers the whole session: it is armed
    /// once before the first problem and never reset. When it fires the
    /// session stops where it is and the score accumulated so far is
    /// reported against the full problem count.
    pub fn run(mut self) -> Score {
        let total = self.problems.len();
        let deadline = match self.settings.mode {
            Mode::Timed { limit } => Some(Instant::now() + limit),
            Mode::Untimed => None,
        };

        for (index, problem) in self.problems.iter().enumerate() {
            self.output.say(&Message::ProblemBegins(
                index + 1,
                problem.get_question().to_owned(),
            ));
            match self.input.wait_for_answer(deadline) {
                Response::Answer(submission) => {
                    let is_correct = problem.is_answer_correct(&submission);
                    if is_correct {
                        self.correct += 1;
                    }
                    if let Mode::Timed { .. } = self.settings.mode {
                        self.output.say(if is_correct {
                            &Message::AnswerCorrect
                        } else {
                            &Message::AnswerIncorrect
                        });
                    }
                }
                Response::TimeUp => {
                    log::debug!("Countdown fired on problem #{}", index + 1);
                    self.output.say(&Message::TimeUp);
                    break;
                }
                Response::Closed => {
                    // No answer will ever arrive for this problem; it is
                    // scored as incorrect and the session moves on.
                    log::debug!("Input ended on problem #{}", index + 1);
                }
            }
        }

        let score = Score {
            correct: self.correct,
            total,
        };
        self.output.say(&Message::FinalScore(score));
        score
    }
}
