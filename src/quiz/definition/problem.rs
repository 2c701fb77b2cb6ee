use serde::Deserialize;

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct RawProblem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    pub fn get_question(&self) -> &str {
        &self.question
    }

    /// Case-sensitive exact match, insensitive to surrounding whitespace on
    /// either side of the comparison.
    pub fn is_answer_correct(&self, submission: &str) -> bool {
        submission.trim() == self.answer
    }
}

impl From<RawProblem> for Problem {
    fn from(raw_problem: RawProblem) -> Self {
        Problem {
            question: raw_problem.question,
            answer: raw_problem.answer.trim().to_owned(),
        }
    }
}
