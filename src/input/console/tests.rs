use std::io::{self, BufReader, Cursor, Read};
use std::thread;
use std::time::{Duration, Instant};

use super::*;

/// Blocks for a fixed delay before yielding its payload.
struct SlowReader {
    delay: Duration,
    payload: Cursor<Vec<u8>>,
    slept: bool,
}

impl SlowReader {
    fn new(delay: Duration, payload: &str) -> BufReader<Self> {
        BufReader::new(SlowReader {
            delay,
            payload: Cursor::new(payload.as_bytes().to_vec()),
            slept: false,
        })
    }
}

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.slept {
            thread::sleep(self.delay);
            self.slept = true;
        }
        self.payload.read(buf)
    }
}

#[test]
fn answer_wins_when_it_arrives_before_the_deadline() {
    let mut input = ConsoleInput::from_reader(SlowReader::new(Duration::from_millis(0), "42\n"));
    let deadline = Instant::now() + Duration::from_secs(5);
    assert_eq!(
        input.wait_for_answer(Some(deadline)),
        Response::Answer("42".to_owned())
    );
}

#[test]
fn countdown_wins_when_input_is_slow() {
    let mut input = ConsoleInput::from_reader(SlowReader::new(Duration::from_secs(5), "42\n"));
    let deadline = Instant::now() + Duration::from_millis(20);
    assert_eq!(input.wait_for_answer(Some(deadline)), Response::TimeUp);
}

#[test]
fn expired_deadline_wins_over_buffered_input() {
    let mut input = ConsoleInput::from_reader(SlowReader::new(Duration::from_millis(0), "42\n"));
    let deadline = Instant::now();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(input.wait_for_answer(Some(deadline)), Response::TimeUp);
}

#[test]
fn end_of_input_reports_closed() {
    let mut input = ConsoleInput::from_reader(SlowReader::new(Duration::from_millis(0), ""));
    let deadline = Instant::now() + Duration::from_secs(5);
    assert_eq!(input.wait_for_answer(Some(deadline)), Response::Closed);
}

#[test]
fn answers_are_read_in_order_without_a_deadline() {
    let mut input = ConsoleInput::from_reader(SlowReader::new(Duration::from_millis(0), "a\nb\n"));
    assert_eq!(input.wait_for_answer(None), Response::Answer("a".to_owned()));
    assert_eq!(input.wait_for_answer(None), Response::Answer("b".to_owned()));
    assert_eq!(input.wait_for_answer(None), Response::Closed);
}
