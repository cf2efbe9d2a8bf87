/// A read position over a decoded character sequence.
///
/// Offsets and lengths count characters, not bytes, so every offset is a
/// valid position and slicing can never split a code point. The offset is
/// kept in `0..=len()` by every operation.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    offset: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            offset: 0,
        }
    }

    /// Total number of characters in the input.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.input.len()
    }

    /// True if the input has no characters at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Current read offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Move to `offset`, clamped to the input length.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.input.len());
    }

    /// Move forward by `amount` characters, stopping at the end of input.
    pub fn advance(&mut self, amount: usize) {
        self.set_offset(self.offset.saturating_add(amount));
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Characters left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Character at an absolute index.
    pub(crate) fn char_at(&self, index: usize) -> Option<char> {
        self.input.get(index).copied()
    }

    /// Whether the unread input begins with `sequence`. Never moves the cursor.
    #[must_use]
    pub fn starts_with(&self, sequence: &str) -> bool {
        let mut unread = self.input[self.offset..].iter();
        sequence.chars().all(|c| unread.next() == Some(&c))
    }

    /// Read up to `amount` characters from the current offset.
    ///
    /// Returns fewer characters, or an empty string, when the input runs
    /// out. With `update_offset` the cursor moves past what was returned;
    /// without it this is a pure peek.
    pub fn read_chars(&mut self, amount: usize, update_offset: bool) -> String {
        let end = self.offset.saturating_add(amount).min(self.input.len());
        let result = self.input[self.offset..end].iter().collect();
        if update_offset {
            self.offset = end;
        }
        result
    }

    /// Absolute index of the next occurrence of `sequence` at or after the
    /// current offset.
    ///
    /// Each position is screened on the first character before the full
    /// sequence is compared. An empty sequence never matches.
    #[must_use]
    pub fn find_sequence(&self, sequence: &str) -> Option<usize> {
        let sequence: Vec<char> = sequence.chars().collect();
        let first = *sequence.first()?;
        (self.offset..self.input.len()).find(|&index| {
            self.input[index] == first && self.input[index..].starts_with(&sequence)
        })
    }

    /// Read every character before the next occurrence of `sequence`.
    ///
    /// The sequence itself is never part of the result. When found and
    /// `update_offset` is set, the cursor stops at the match, or just past
    /// it with `include_sequence_in_offset`. When the sequence never occurs
    /// the rest of the input is returned and the cursor moves to the end.
    pub fn read_chars_until(
        &mut self,
        sequence: &str,
        update_offset: bool,
        include_sequence_in_offset: bool,
    ) -> String {
        let found = self.find_sequence(sequence);
        let stop = found.unwrap_or(self.input.len());
        let result = self.input[self.offset..stop].iter().collect();

        if update_offset {
            self.offset = match found {
                Some(index) if include_sequence_in_offset => index + sequence.chars().count(),
                Some(index) => index,
                None => self.input.len(),
            };
        }

        result
    }
}
