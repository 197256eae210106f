//! Keypad input: the entry buffer, tolerant commit parsing, and the
//! transient validation-error signal.
//!
//! The buffer accumulates plus-separated numeric tokens (`"85+90.5+77"`).
//! Keypresses are validated speculatively so an entry can never grow past
//! `max_score`; commits are parsed tolerantly, silently dropping malformed
//! or negative segments. The silent tolerance is deliberate: it is what
//! makes stray `+` runs (leading, trailing, doubled) harmless.

use std::time::{Duration, Instant};

/// How long a tripped validation error stays visible.
pub const ERROR_FLASH: Duration = Duration::from_millis(800);

/// Self-clearing validation-error flag.
///
/// A two-state machine (`Idle` / `Showing`) where the `Showing -> Idle`
/// transition happens on its own once the window elapses. The clock is a
/// deadline checked against `Instant::now()`, never a blocking sleep.
#[derive(Debug, Clone)]
pub struct ErrorSignal {
    window: Duration,
    tripped_at: Option<Instant>,
}

impl ErrorSignal {
    pub fn new() -> Self {
        Self::with_window(ERROR_FLASH)
    }

    /// A signal with a custom visibility window, mainly for tests.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            tripped_at: None,
        }
    }

    /// Enter the `Showing` state, restarting the window if already showing.
    pub fn trip(&mut self) {
        self.tripped_at = Some(Instant::now());
    }

    /// Return to `Idle` immediately.
    pub fn clear(&mut self) {
        self.tripped_at = None;
    }

    /// Whether the error is currently visible.
    pub fn is_showing(&self) -> bool {
        match self.tripped_at {
            Some(at) => at.elapsed() < self.window,
            None => false,
        }
    }
}

impl Default for ErrorSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a single keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Token appended to the buffer.
    Accepted,
    /// Token would push the current segment out of `[0, max_score]`;
    /// buffer unchanged.
    Rejected,
}

/// Outcome of committing the buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Nothing to commit: the buffer was empty, or no segment survived
    /// parsing. The buffer is left as-is.
    Nothing,
    /// All surviving values were in range; the buffer has been cleared.
    Committed(Vec<f64>),
    /// A surviving value exceeded `max_score`; the whole commit is refused
    /// and the buffer is untouched.
    Rejected,
}

/// Accumulator for one or more plus-separated pending entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryBuffer {
    value: String,
}

impl EntryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Handle one keypad token: a digit, `.`, or `+`.
    ///
    /// `+` is always accepted verbatim, even where it creates an ill-formed
    /// run; [`EntryBuffer::commit`] tolerates those. Digits and `.` are
    /// validated by speculatively extending the last `+`-segment: when the
    /// extended segment parses to a value outside `[0, max_score]` the key
    /// is rejected and the buffer stays unchanged. A segment that does not
    /// parse yet (e.g. a bare `.`) is accepted and left for commit to sort
    /// out.
    pub fn press(&mut self, key: char, max_score: f64) -> KeyOutcome {
        debug_assert!(
            key.is_ascii_digit() || key == '.' || key == '+',
            "keypad emits only digits, '.', and '+'"
        );

        if key != '+' {
            let last = self.value.rsplit('+').next().unwrap_or("");
            let mut candidate = last.to_string();
            candidate.push(key);
            if let Ok(parsed) = candidate.parse::<f64>() {
                if parsed > max_score || parsed < 0.0 {
                    tracing::debug!(segment = %candidate, max_score, "keypress out of range");
                    return KeyOutcome::Rejected;
                }
            }
        }

        self.value.push(key);
        KeyOutcome::Accepted
    }

    /// Replace the buffer with a whole pasted expression.
    ///
    /// Characters other than digits, `.`, and `+` are dropped. No per-key
    /// range check happens here; the expression arrives complete, so
    /// [`EntryBuffer::commit`] is the validation point.
    pub fn load(&mut self, expression: &str) {
        self.value = expression
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+')
            .collect();
    }

    /// Remove the last character, if any. Never validated.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Empty the buffer.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Parse the buffer into a batch of scores.
    ///
    /// Segments that fail to parse or are negative are discarded silently.
    /// If any surviving value exceeds `max_score` the entire commit is
    /// rejected with the buffer intact; otherwise the survivors are
    /// returned in buffer order and the buffer is cleared.
    pub fn commit(&mut self, max_score: f64) -> CommitOutcome {
        if self.value.is_empty() {
            return CommitOutcome::Nothing;
        }

        let survivors: Vec<f64> = self
            .value
            .split('+')
            .filter_map(|segment| match segment.parse::<f64>() {
                Ok(v) if v >= 0.0 => Some(v),
                Ok(_) | Err(_) => {
                    if !segment.is_empty() {
                        tracing::debug!(segment, "discarding unparseable entry segment");
                    }
                    None
                }
            })
            .collect();

        if survivors.is_empty() {
            return CommitOutcome::Nothing;
        }

        if survivors.iter().any(|&v| v > max_score) {
            return CommitOutcome::Rejected;
        }

        self.value.clear();
        CommitOutcome::Committed(survivors)
    }
}
