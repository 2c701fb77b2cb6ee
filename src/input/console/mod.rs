use std::io::{BufRead, BufReader};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use super::{AnswerSource, Response};

#[cfg(test)]
mod tests;

/// Reads answers from standard input.
///
/// Lines are read on a detached background thread and handed over through a
/// channel. A read that loses the race against the deadline is simply never
/// consumed; the thread is never joined, so an in-flight read cannot block
/// program exit.
pub struct ConsoleInput {
    lines: Option<Receiver<String>>,
}

impl ConsoleInput {
    pub fn new() -> Self {
        ConsoleInput { lines: None }
    }

    #[cfg(test)]
    fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        ConsoleInput {
            lines: Some(Self::spawn_reader(reader)),
        }
    }

    fn spawn_reader<R: BufRead + Send + 'static>(reader: R) -> Receiver<String> {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                if sender.send(line).is_err() {
                    break;
                }
            }
            // Dropping the sender marks the end of input.
        });
        receiver
    }

    fn lines(&mut self) -> &Receiver<String> {
        self.lines
            .get_or_insert_with(|| Self::spawn_reader(BufReader::new(std::io::stdin())))
    }
}

impl AnswerSource for ConsoleInput {
    fn wait_for_answer(&mut self, deadline: Option<Instant>) -> Response {
        let lines = self.lines();
        match deadline {
            Some(deadline) => {
                let now = Instant::now();
                // A deadline in the past always wins, even over input that
                // is already buffered.
                if now >= deadline {
                    return Response::TimeUp;
                }
                match lines.recv_timeout(deadline - now) {
                    Ok(line) => Response::Answer(line),
                    Err(RecvTimeoutError::Timeout) => Response::TimeUp,
                    Err(RecvTimeoutError::Disconnected) => Response::Closed,
                }
            }
            None => match lines.recv() {
                Ok(line) => Response::Answer(line),
                Err(_) => Response::Closed,
            },
        }
    }
}
