//! Type-ahead search buffer
//!
//! Buffers recently typed characters while the panel is open and relocates
//! focus to the first option whose display text starts with the buffer.
//! The buffer expires 1500 ms after the last keypress; every keypress
//! restarts the window rather than extending it. Expiry is observed against
//! the timestamp each key event carries, so no timer callback is needed;
//! destroying the widget drops the buffer, which cancels the pending reset.

/// Buffer lifetime after the last keypress, in milliseconds
pub const SEARCH_RESET_MS: u64 = 1_500;

/// Case-insensitive prefix search buffer
#[derive(Debug, Default)]
pub struct SearchBuffer {
    buffer: String,
    deadline_ms: Option<u64>,
}

impl SearchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character at the given time, resetting first when the
    /// previous window has expired. Returns the current buffer.
    pub fn push(&mut self, c: char, now_ms: u64) -> &str {
        if self.deadline_ms.is_some_and(|d| now_ms >= d) {
            self.buffer.clear();
        }
        self.deadline_ms = Some(now_ms + SEARCH_RESET_MS);
        self.buffer.extend(c.to_lowercase());
        &self.buffer
    }

    /// Current buffer contents (lowercase)
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Case-insensitive test: does `text` start with the buffer?
    /// An empty buffer matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        let mut hay = text.chars().flat_map(char::to_lowercase);
        self.buffer.chars().all(|c| hay.next() == Some(c))
    }
}
