//! Marker scanning for the template engine
//!
//! Provides O(n) marker detection using a state machine.

use crate::template::dialect::{is_name_byte, Dialect, MarkerForm};

/// A single recognized marker with its position in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker<'a> {
    /// Placeholder name (borrowed from the template)
    pub name: &'a str,
    /// Which syntax this occurrence uses
    pub form: MarkerForm,
    /// Absolute byte position of the opening `#`, `(` or `{`
    pub start: usize,
    /// Total length in bytes including delimiters
    pub length: usize,
}

impl Marker<'_> {
    /// Byte position just past the marker
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Scanner state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──#──> SeenHash ──word──> InHashName ──non-word/EOF──> [Yield] → Normal
///   │              │ (non-word)        │ (word)
///   │              └────> Normal       └──> InHashName
///   │
///   └──( or {──> InBracket ──word──> InBracket
///                    │ matching close, non-empty → [Yield] → Normal
///                    │ matching close, empty     → Normal
///                    └ anything else             → Normal (reprocess byte)
/// ```
///
/// Bytes that abandon a candidate are reprocessed once in `Normal`, so every
/// byte is visited at most twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Plain text
    Normal,

    /// Seen `#`, waiting for the first name byte
    SeenHash {
        /// Position of the `#`
        start: usize,
    },

    /// Inside a `#name` run
    InHashName {
        /// Position of the `#`
        start: usize,
        /// Position of the first name byte
        name_start: usize,
    },

    /// Inside `(...` or `{...`, waiting for the matching close
    InBracket {
        /// Position of the opening delimiter
        start: usize,
        /// `Paren` or `Brace`
        form: MarkerForm,
        /// Position of the first name byte
        name_start: usize,
    },
}

/// Iterator over the markers of one dialect in a template string
///
/// # Example
///
/// ```ignore
/// // Internal use only, not part of public API
/// let stream = MarkerStream::new("Hello #name", Dialect::Hash);
/// for marker in stream {
///     println!("{} at {}", marker.name, marker.start);
/// }
/// ```
pub(crate) struct MarkerStream<'a> {
    /// Template text (markers borrow their names from it)
    text: &'a str,
    /// Byte view of `text`
    bytes: &'a [u8],
    /// Which markers to recognize
    dialect: Dialect,
    /// Current byte position
    pos: usize,
    /// State machine state
    state: ScanState,
}

impl<'a> MarkerStream<'a> {
    /// Create a new MarkerStream over template text
    pub fn new(text: &'a str, dialect: Dialect) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            dialect,
            pos: 0,
            state: ScanState::Normal,
        }
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    /// Build a marker covering `start..end` with the name at `name_start..name_end`
    fn marker(
        &self,
        form: MarkerForm,
        start: usize,
        end: usize,
        name_start: usize,
        name_end: usize,
    ) -> Marker<'a> {
        // Name bytes and delimiters are ASCII, so these are char boundaries
        Marker {
            name: &self.text[name_start..name_end],
            form,
            start,
            length: end - start,
        }
    }

    /// Process Normal state: look for an opening byte of the active dialect
    fn process_normal(&mut self, byte: u8) {
        self.state = match (self.dialect, byte) {
            (Dialect::Hash, b'#') => ScanState::SeenHash { start: self.pos },
            (Dialect::Bracket, b'(') => ScanState::InBracket {
                start: self.pos,
                form: MarkerForm::Paren,
                name_start: self.pos + 1,
            },
            (Dialect::Bracket, b'{') => ScanState::InBracket {
                start: self.pos,
                form: MarkerForm::Brace,
                name_start: self.pos + 1,
            },
            _ => ScanState::Normal,
        };
        self.pos += 1;
    }

    /// Process SeenHash state
    ///
    /// Returns false if the byte must be reprocessed in Normal state
    fn process_seen_hash(&mut self, byte: u8, start: usize) -> bool {
        if is_name_byte(byte) {
            self.state = ScanState::InHashName {
                start,
                name_start: self.pos,
            };
            self.pos += 1;
            true
        } else {
            // `#` alone is text; the byte may open a new marker
            self.state = ScanState::Normal;
            false
        }
    }

    /// Process InHashName state
    ///
    /// Returns a finished marker when the name run ends. The terminating byte
    /// is left for Normal state.
    fn process_hash_name(&mut self, byte: u8, start: usize, name_start: usize) -> Option<Marker<'a>> {
        if is_name_byte(byte) {
            self.pos += 1;
            None
        } else {
            self.state = ScanState::Normal;
            Some(self.marker(MarkerForm::Hash, start, self.pos, name_start, self.pos))
        }
    }

    /// Process InBracket state
    ///
    /// Returns (Option<Marker>, advanced)
    fn process_in_bracket(
        &mut self,
        byte: u8,
        start: usize,
        form: MarkerForm,
        name_start: usize,
    ) -> (Option<Marker<'a>>, bool) {
        if is_name_byte(byte) {
            self.pos += 1;
            return (None, true);
        }

        self.state = ScanState::Normal;

        if Some(byte) == form.closing_byte() {
            self.pos += 1;
            if self.pos - 1 > name_start {
                let marker = self.marker(form, start, self.pos, name_start, self.pos - 1);
                return (Some(marker), true);
            }
            // `()` or `{}` is text
            return (None, true);
        }

        // Not a name: abandon the candidate and let Normal see this byte
        (None, false)
    }

    /// Flush a marker that runs to end of input
    fn finish(&mut self) -> Option<Marker<'a>> {
        let state = std::mem::replace(&mut self.state, ScanState::Normal);
        match state {
            ScanState::InHashName { start, name_start } => Some(self.marker(
                MarkerForm::Hash,
                start,
                self.bytes.len(),
                name_start,
                self.bytes.len(),
            )),
            // Unterminated brackets and a trailing `#` are text
            _ => None,
        }
    }
}

impl<'a> Iterator for MarkerStream<'a> {
    type Item = Marker<'a>;

    fn next(&mut self) -> Option<Marker<'a>> {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state {
                ScanState::Normal => self.process_normal(byte),
                ScanState::SeenHash { start } => {
                    if !self.process_seen_hash(byte, start) {
                        continue;
                    }
                }
                ScanState::InHashName { start, name_start } => {
                    if let Some(marker) = self.process_hash_name(byte, start, name_start) {
                        return Some(marker);
                    }
                }
                ScanState::InBracket {
                    start,
                    form,
                    name_start,
                } => {
                    let (marker, advanced) =
                        self.process_in_bracket(byte, start, form, name_start);
                    if let Some(marker) = marker {
                        return Some(marker);
                    }
                    if !advanced {
                        continue;
                    }
                }
            }
        }

        self.finish()
    }
}
