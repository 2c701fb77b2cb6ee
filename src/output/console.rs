use std::io::Write;

use super::{Message, QuizOutput};

pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        match message {
            Message::ProblemBegins(number, question) => {
                // The prompt stays on the same line as the answer, so it
                // must be flushed before the read begins.
                print!("Problem #{}: {} = ", number, question);
                std::io::stdout().flush().ok();
            }
            Message::AnswerCorrect => println!("Correct! :-)"),
            Message::AnswerIncorrect => println!("Wrong :-("),
            // Terminates the prompt the countdown interrupted.
            Message::TimeUp => println!(),
            Message::FinalScore(score) => {
                println!("You scored {}/{}.", score.correct, score.total)
            }
        }
    }
}
