use std::collections::VecDeque;
use std::time::Instant;

use super::{AnswerSource, Response};

/// Plays back a scripted sequence of responses. Once the script runs out,
/// every further wait reports a closed input stream.
pub struct MockAnswerSource {
    script: VecDeque<Response>,
}

impl MockAnswerSource {
    pub fn new(script: Vec<Response>) -> Self {
        MockAnswerSource {
            script: script.into_iter().collect(),
        }
    }
}

impl AnswerSource for MockAnswerSource {
    fn wait_for_answer(&mut self, _deadline: Option<Instant>) -> Response {
        self.script.pop_front().unwrap_or(Response::Closed)
    }
}
