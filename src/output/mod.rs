use crate::quiz::Score;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ProblemBegins(usize, String),
    AnswerCorrect,
    AnswerIncorrect,
    TimeUp,
    FinalScore(Score),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
