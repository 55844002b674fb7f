use std::str::Chars;

/// Forward-only character source with one character of lookahead and
/// line/column bookkeeping. `line` is 1-based; `column` counts up from 0
/// and is advanced before each character is consumed, so the first
/// character on a line sits at column 1.
#[derive(Debug)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    line: u32,
    column: u32,
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            line: 1,
            column: 0,
            exhausted: false,
        }
    }

    /// Consumes and returns the next character, advancing the column.
    ///
    /// The read that first runs off the end still advances the column once,
    /// so the end-of-stream position is one past the last character. Reads
    /// after that leave the position untouched.
    pub fn read(&mut self) -> Option<char> {
        match self.chars.next() {
            Some(c) => {
                self.column += 1;
                Some(c)
            }
            None => {
                if !self.exhausted {
                    self.exhausted = true;
                    self.column += 1;
                }
                None
            }
        }
    }

    /// Looks ahead one character without consuming it or touching the
    /// position state.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether the already-consumed `ch` begins a line terminator. The LF
    /// of a CRLF pair is consumed here so the pair counts as a single
    /// terminator; a lone CR also terminates a line.
    pub fn is_eol(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return true;
        }
        if ch == '\r' {
            if self.peek() == Some('\n') {
                self.read();
            }
            return true;
        }
        false
    }

    /// Records a consumed line terminator: the next character starts a new
    /// line at column 1.
    pub fn start_new_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Consumes characters into `buf` while `predicate` holds for the
    /// lookahead character.
    pub fn eat_while(&mut self, buf: &mut String, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.read();
            buf.push(c);
        }
    }
}
