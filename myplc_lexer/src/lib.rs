pub mod cursor;
pub mod error;
pub mod tokens;

use cursor::Cursor;
use error::{LexerError, LexerErrorKind};
use tokens::{keyword_kind, symbol_kind, Token, TokenKind};

/// Lexeme carried by the end-of-stream token.
const EOS_LEXEME: &str = "end-of-stream";

/// Scans `input` into a stream of tokens. The iterator yields every token
/// up to and including the single end-of-stream token, or yields one error
/// and then nothing further.
pub fn tokenize(input: &str) -> impl Iterator<Item = Result<Token, LexerError>> + '_ {
    let mut lexer = Lexer::new(input);
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let next = lexer.next_token();
        match &next {
            Ok(token) if token.kind == TokenKind::Eos => done = true,
            Err(_) => done = true,
            Ok(_) => {}
        }
        Some(next)
    })
}

/// Hand-written scanner for MyPL source text. One instance owns one source
/// unit and is driven by repeated `next_token` calls until the
/// end-of-stream token comes back.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Scans and returns the next token in the stream.
    ///
    /// After the end-of-stream token has been returned once, further calls
    /// keep returning it at the same position.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        // skip whitespace, counting line terminators
        let ch = loop {
            match self.cursor.read() {
                Some(c) if c.is_whitespace() => {
                    if self.cursor.is_eol(c) {
                        self.cursor.start_new_line();
                    }
                }
                other => break other,
            }
        };

        let line = self.cursor.line();
        let column = self.cursor.column();

        let Some(ch) = ch else {
            return Ok(Token::new(TokenKind::Eos, EOS_LEXEME, line, column));
        };

        match ch {
            '=' | '!' | '<' | '>' => self.comparator(ch, line, column),
            '#' => Ok(self.comment(line, column)),
            '"' => self.string(line, column),
            c if c.is_ascii_digit() => self.number(c, line, column),
            c if unicode_ident::is_xid_start(c) => Ok(self.ident(c, line, column)),
            c => match symbol_kind(c) {
                Some(kind) => Ok(Token::new(kind, c, line, column)),
                None => Err(LexerError::new(
                    LexerErrorKind::UnrecognizedSymbol(c),
                    line,
                    column,
                )),
            },
        }
    }

    /// Operators that need one character of lookahead: `==`, `!=`, `<=`,
    /// `>=` and their single-character forms. A bare `!` is an error since
    /// MyPL spells logical negation `not`.
    fn comparator(&mut self, first: char, line: u32, column: u32) -> Result<Token, LexerError> {
        let eq_follows = self.cursor.peek() == Some('=');
        if eq_follows {
            self.cursor.read();
        }
        let (kind, lexeme) = match (first, eq_follows) {
            ('=', true) => (TokenKind::Equal, "=="),
            ('=', false) => (TokenKind::Assign, "="),
            ('!', true) => (TokenKind::NotEqual, "!="),
            ('!', false) => {
                return Err(LexerError::new(
                    LexerErrorKind::ExpectingNotEqual,
                    line,
                    column,
                ))
            }
            ('<', true) => (TokenKind::LessEq, "<="),
            ('<', false) => (TokenKind::Less, "<"),
            ('>', true) => (TokenKind::GreaterEq, ">="),
            _ => (TokenKind::Greater, ">"),
        };
        Ok(Token::new(kind, lexeme, line, column))
    }

    /// Everything from `#` to the end of the line, terminator excluded and
    /// left unconsumed.
    fn comment(&mut self, line: u32, column: u32) -> Token {
        let mut lexeme = String::new();
        self.cursor
            .eat_while(&mut lexeme, |c| c != '\n' && c != '\r');
        Token::new(TokenKind::Comment, lexeme, line, column)
    }

    /// A double-quoted string literal with escapes decoded. Strings may not
    /// span lines.
    fn string(&mut self, line: u32, column: u32) -> Result<Token, LexerError> {
        let mut lexeme = String::new();
        loop {
            let Some(c) = self.cursor.read() else {
                return Err(LexerError::new(
                    LexerErrorKind::NonTerminatedString,
                    line,
                    column,
                ));
            };
            match c {
                '"' => break,
                '\\' => {
                    let Some(escape) = self.cursor.read() else {
                        return Err(LexerError::new(
                            LexerErrorKind::NonTerminatedString,
                            line,
                            column,
                        ));
                    };
                    match escape {
                        'n' => lexeme.push('\n'),
                        't' => lexeme.push('\t'),
                        'r' => lexeme.push('\r'),
                        '"' => lexeme.push('"'),
                        '\\' => lexeme.push('\\'),
                        other => {
                            return Err(LexerError::new(
                                LexerErrorKind::InvalidEscape(other),
                                line,
                                column,
                            ))
                        }
                    }
                }
                '\n' | '\r' => {
                    // reported at the terminator, not the opening quote
                    self.cursor.is_eol(c);
                    return Err(LexerError::new(
                        LexerErrorKind::NonTerminatedString,
                        self.cursor.line(),
                        self.cursor.column(),
                    ));
                }
                c => lexeme.push(c),
            }
        }
        Ok(Token::new(TokenKind::StringVal, lexeme, line, column))
    }

    /// An integer or double literal. The leading-zero check runs on the
    /// integer part alone, before any fractional part is consumed.
    fn number(&mut self, first: char, line: u32, column: u32) -> Result<Token, LexerError> {
        let mut lexeme = String::from(first);
        self.cursor.eat_while(&mut lexeme, |c| c.is_ascii_digit());

        if lexeme.len() > 1 && lexeme.starts_with('0') && self.cursor.peek() != Some('.') {
            return Err(LexerError::new(LexerErrorKind::LeadingZero, line, column));
        }

        if self.cursor.peek() != Some('.') {
            return Ok(Token::new(TokenKind::IntVal, lexeme, line, column));
        }
        self.cursor.read();
        lexeme.push('.');

        if !matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(LexerError::new(
                LexerErrorKind::MissingDecimalDigit,
                line,
                self.cursor.column() + 1,
            ));
        }
        self.cursor.eat_while(&mut lexeme, |c| c.is_ascii_digit());
        Ok(Token::new(TokenKind::DoubleVal, lexeme, line, column))
    }

    /// An identifier or reserved word. Identifiers start with a letter and
    /// continue with letters, digits, or underscores; a leading underscore
    /// never reaches here and falls through to the unrecognized-symbol
    /// path instead.
    fn ident(&mut self, first: char, line: u32, column: u32) -> Token {
        let mut lexeme = String::from(first);
        self.cursor
            .eat_while(&mut lexeme, unicode_ident::is_xid_continue);
        let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Id);
        Token::new(kind, lexeme, line, column)
    }
}
