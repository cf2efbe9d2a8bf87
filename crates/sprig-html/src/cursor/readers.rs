//! Readers for the pieces of an opening tag.
//!
//! Both readers stop *on* their terminating delimiter without consuming it,
//! so the caller can still inspect whether the tag ends in `/>`.

use sprig_dom::{AttributeValue, Attributes};

use super::core::Cursor;

impl Cursor {
    /// Read a tag name up to the next space, `/` or `>`.
    ///
    /// The cursor is left on the delimiter, or at the end of input if none
    /// follows.
    pub fn read_tag_name(&mut self) -> String {
        let mut tag_name = String::new();

        while let Some(c) = self.char_at(self.offset()) {
            if matches!(c, ' ' | '/' | '>') {
                return tag_name;
            }
            tag_name.push(c);
            self.advance(1);
        }

        tag_name
    }

    /// Read the attributes of an opening tag.
    ///
    /// Expects the cursor just after the tag name. Reading ends on the `/`
    /// or `>` that closes the tag (left unconsumed), or at the end of input.
    /// A pair still being read when the input runs out is discarded; pairs
    /// already ended by a space are kept.
    pub fn read_attributes(&mut self) -> Attributes {
        let mut reader = AttributeReader::default();

        while let Some(c) = self.char_at(self.offset()) {
            match c {
                '/' | '>' if !reader.in_quotes() => {
                    reader.flush();
                    return reader.attributes;
                }
                ' ' if !reader.in_quotes() => reader.start_name(),
                '=' if !reader.parsing_value => {
                    reader.parsing_name = false;
                    reader.parsing_value = true;
                    reader.quote = None;
                    if let Some(quote @ ('"' | '\'')) = self.char_at(self.offset() + 1) {
                        reader.quote = Some(quote);
                        self.advance(1);
                    }
                }
                c if reader.parsing_value && reader.quote == Some(c) => {
                    reader.parsing_name = false;
                    reader.parsing_value = false;
                }
                c => reader.push(c),
            }
            self.advance(1);
        }

        reader.attributes
    }
}

/// Scratch state for [`Cursor::read_attributes`].
#[derive(Debug, Default)]
struct AttributeReader {
    attributes: Attributes,
    name: String,
    value: String,
    parsing_name: bool,
    parsing_value: bool,
    /// Quote that opened the current value; `None` while unquoted.
    quote: Option<char>,
}

impl AttributeReader {
    const fn in_quotes(&self) -> bool {
        self.parsing_value && self.quote.is_some()
    }

    fn push(&mut self, c: char) {
        if self.parsing_name {
            self.name.push(c);
        } else {
            self.value.push(c);
        }
    }

    /// Record the pending pair. An empty name makes this a no-op.
    fn flush(&mut self) {
        let name = std::mem::take(&mut self.name);
        let value = std::mem::take(&mut self.value);
        let _replaced = self
            .attributes
            .insert(name, AttributeValue::from_raw(value));
    }

    fn start_name(&mut self) {
        self.flush();
        self.quote = None;
        self.parsing_name = true;
        self.parsing_value = false;
    }
}
