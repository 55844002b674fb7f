use thiserror::Error;

/// A fatal lexical error. Scanning cannot resume after one of these; the
/// driver is expected to report it and abort the pass.
///
/// The display form `LEXER_ERROR: [<line>,<column>] <description>` is a
/// compatibility surface and must not change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("LEXER_ERROR: [{line},{column}] {kind}")]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub line: u32,
    pub column: u32,
}

impl LexerError {
    pub(crate) fn new(kind: LexerErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

/// The ways a scan can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// A `!` not followed by `=`; MyPL spells logical negation `not`.
    #[error("expecting !=")]
    ExpectingNotEqual,

    /// End of line or end of input inside a string literal.
    #[error("non-terminated string")]
    NonTerminatedString,

    /// A backslash followed by anything other than `n`, `t`, `r`, `"`, `\`.
    #[error("Invalid escape sequence: \\{0}")]
    InvalidEscape(char),

    /// An integer literal such as `01`; `0` alone is fine.
    #[error("leading zero in number")]
    LeadingZero,

    /// A decimal point with no digit after it.
    #[error("missing digit after decimal")]
    MissingDecimalDigit,

    /// A character that cannot begin any token.
    #[error("unrecognized symbol '{0}'")]
    UnrecognizedSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_byte_exact() {
        let e = LexerError::new(LexerErrorKind::NonTerminatedString, 1, 8);
        assert_eq!("LEXER_ERROR: [1,8] non-terminated string", e.to_string());

        let e = LexerError::new(LexerErrorKind::UnrecognizedSymbol('?'), 1, 1);
        assert_eq!("LEXER_ERROR: [1,1] unrecognized symbol '?'", e.to_string());

        let e = LexerError::new(LexerErrorKind::InvalidEscape('q'), 2, 5);
        assert_eq!("LEXER_ERROR: [2,5] Invalid escape sequence: \\q", e.to_string());

        let e = LexerError::new(LexerErrorKind::ExpectingNotEqual, 1, 1);
        assert_eq!("LEXER_ERROR: [1,1] expecting !=", e.to_string());

        let e = LexerError::new(LexerErrorKind::LeadingZero, 1, 1);
        assert_eq!("LEXER_ERROR: [1,1] leading zero in number", e.to_string());

        let e = LexerError::new(LexerErrorKind::MissingDecimalDigit, 1, 4);
        assert_eq!("LEXER_ERROR: [1,4] missing digit after decimal", e.to_string());
    }
}
