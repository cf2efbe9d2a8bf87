//! Records of input the parser had to work around.

use strum_macros::{Display, EnumIter};

use super::core::ParserState;

/// What kind of malformed input was tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ParseIssueKind {
    /// `</x>` with no open element left to close; the closer was ignored.
    #[strum(to_string = "closing tag without an open element was ignored")]
    UnmatchedClosingTag,
    /// `<!--` without `-->`; the comment took the rest of the input.
    #[strum(to_string = "unterminated comment consumed the rest of the input")]
    UnterminatedComment,
    /// A tag with no closing `>`; the tag took the rest of the input.
    #[strum(to_string = "unterminated tag consumed the rest of the input")]
    UnterminatedTag,
    /// A raw-text element with no closing tag; its text took the rest of
    /// the input.
    #[strum(to_string = "raw text element without closing tag consumed the rest of the input")]
    UnterminatedRawText,
    /// A leading `<!...>` construct other than a doctype or comment was
    /// skipped.
    #[strum(to_string = "leading markup declaration other than a doctype was skipped")]
    SkippedDeclaration,
}

/// A tolerated parse problem.
///
/// Issues never change the resulting tree; they only explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What was tolerated.
    pub kind: ParseIssueKind,
    /// State that noticed it.
    pub state: ParserState,
    /// Character offset where the offending construct starts.
    pub offset: usize,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} (offset {})", self.state, self.kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_kind_has_a_distinct_message() {
        let messages: Vec<String> = ParseIssueKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(messages.len(), 5);
        for (i, message) in messages.iter().enumerate() {
            assert!(!message.is_empty());
            assert!(!messages[i + 1..].contains(message), "{message}");
        }
    }

    #[test]
    fn test_issue_display() {
        let issue = ParseIssue {
            kind: ParseIssueKind::UnmatchedClosingTag,
            state: ParserState::ElementClose,
            offset: 4,
        };
        assert_eq!(
            issue.to_string(),
            "[ElementClose] closing tag without an open element was ignored (offset 4)"
        );
    }
}
