//! Parsing of the chooser's reply.

use std::path::PathBuf;

use super::ChooserReply;
use crate::{error::PickError, project::project::FIELD_SEPARATOR};

/// Key that plainly confirms a selection.
pub const CONFIRM_KEY: &str = "enter";

/// Key that confirms and also opens the selection in an editor.
pub const AUGMENTED_KEY: &str = "tab";

/// The user's decision: which key was pressed and which directory was picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// First output line, trimmed; empty when the chooser reports none
    pub key: String,

    /// Everything after the first tab of the selected record
    pub path: PathBuf,
}

impl Selection {
    /// Interpret a finished chooser session.
    ///
    /// # Errors
    ///
    /// - [`PickError::ChooserCancelled`] if the chooser failed or printed nothing
    /// - [`PickError::MalformedSelection`] if there is no record line or the
    ///   record has no tab
    pub fn parse(reply: &ChooserReply) -> Result<Self, PickError> {
        if !reply.success || reply.stdout.is_empty() {
            return Err(PickError::ChooserCancelled);
        }

        let (key, rest) = split_line(&reply.stdout);
        let record = rest
            .filter(|rest| !rest.is_empty())
            .map(|rest| split_line(rest).0)
            .ok_or_else(|| PickError::MalformedSelection(reply.stdout.clone()))?;

        let (_, path) = record
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| PickError::MalformedSelection(record.to_string()))?;

        Ok(Self {
            key: key.trim().to_string(),
            path: PathBuf::from(path),
        })
    }

    /// Whether the augmented-action key ended the session.
    #[must_use]
    pub fn is_augmented(&self) -> bool {
        self.key == AUGMENTED_KEY
    }
}

/// Line boundaries: newline, carriage return and the other ASCII and Unicode
/// line and record separators.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// First line of `text` and whatever follows its terminator (`\r\n` counts as one).
fn split_line(text: &str) -> (&str, Option<&str>) {
    let Some(at) = text.find(is_line_break) else {
        return (text, None);
    };

    let rest = &text[at..];
    let width = if rest.starts_with("\r\n") {
        2
    } else {
        rest.chars().next().map_or(0, char::len_utf8)
    };

    (&text[..at], Some(&rest[width..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(success: bool, stdout: &str) -> ChooserReply {
        ChooserReply {
            success,
            stdout: stdout.to_string(),
        }
    }

    #[test]
    fn test_confirm_on_root_project() {
        let selection = Selection::parse(&reply(true, "enter\n.\t/repo")).unwrap();

        assert_eq!(selection.key, CONFIRM_KEY);
        assert_eq!(selection.path, PathBuf::from("/repo"));
        assert!(!selection.is_augmented());
    }

    #[test]
    fn test_augmented_key() {
        let selection = Selection::parse(&reply(true, "tab\na\t/repo/a\n")).unwrap();

        assert!(selection.is_augmented());
        assert_eq!(selection.path, PathBuf::from("/repo/a"));
    }

    #[test]
    fn test_key_is_trimmed() {
        let selection = Selection::parse(&reply(true, "  tab \r\na\t/repo/a")).unwrap();
        assert_eq!(selection.key, "tab");
    }

    #[test]
    fn test_empty_key_line_is_allowed() {
        let selection = Selection::parse(&reply(true, "\nb\t/repo/b\n")).unwrap();

        assert_eq!(selection.key, "");
        assert!(!selection.is_augmented());
    }

    #[test]
    fn test_crlf_and_unicode_line_breaks() {
        let crlf = Selection::parse(&reply(true, "tab\r\na\t/repo/a\r\n")).unwrap();
        assert!(crlf.is_augmented());
        assert_eq!(crlf.path, PathBuf::from("/repo/a"));

        let separator = Selection::parse(&reply(true, "enter\u{2028}b\t/repo/b")).unwrap();
        assert_eq!(separator.key, CONFIRM_KEY);
        assert_eq!(separator.path, PathBuf::from("/repo/b"));
    }

    #[test]
    fn test_split_line_keeps_empty_first_line() {
        assert_eq!(split_line("\nrest"), ("", Some("rest")));
        assert_eq!(split_line("only"), ("only", None));
        assert_eq!(split_line("last\n"), ("last", Some("")));
    }

    #[test]
    fn test_path_keeps_everything_after_first_tab() {
        let selection = Selection::parse(&reply(true, "enter\nx\t/repo/odd\tname")).unwrap();
        assert_eq!(selection.path, PathBuf::from("/repo/odd\tname"));
    }

    #[test]
    fn test_non_zero_exit_is_cancellation() {
        assert!(matches!(
            Selection::parse(&reply(false, "enter\n.\t/repo")),
            Err(PickError::ChooserCancelled)
        ));
    }

    #[test]
    fn test_empty_output_is_cancellation() {
        assert!(matches!(
            Selection::parse(&reply(true, "")),
            Err(PickError::ChooserCancelled)
        ));
    }

    #[test]
    fn test_single_line_is_malformed() {
        assert!(matches!(
            Selection::parse(&reply(true, "enter\n")),
            Err(PickError::MalformedSelection(_))
        ));
    }

    #[test]
    fn test_record_without_tab_is_malformed() {
        assert!(matches!(
            Selection::parse(&reply(true, "enter\n/repo/a")),
            Err(PickError::MalformedSelection(_))
        ));
    }
}
