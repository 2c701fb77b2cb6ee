use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub enum Mode {
    /// One countdown for the whole session, with per-answer feedback.
    Timed { limit: Duration },
    /// No countdown and no per-answer feedback.
    Untimed,
}

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub mode: Mode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: Mode::Timed {
                limit: Duration::from_secs(30),
            },
        }
    }
}
