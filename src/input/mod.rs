use std::time::Instant;

pub mod console;
#[cfg(test)]
pub mod mock;

/// Outcome of one race between the next line of input and the deadline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Response {
    /// An answer arrived before the deadline.
    Answer(String),
    /// The deadline passed first.
    TimeUp,
    /// The input stream ended; no answer will ever arrive.
    Closed,
}

pub trait AnswerSource {
    /// Blocks until a line of input arrives or the deadline passes,
    /// whichever comes first. When both are ready, the deadline wins.
    fn wait_for_answer(&mut self, deadline: Option<Instant>) -> Response;
}
