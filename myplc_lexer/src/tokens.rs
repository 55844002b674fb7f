use std::fmt::Display;

use phf::phf_map;

/// The smallest meaningful unit of a MyPL program: a kind, the lexeme as
/// scanned (escape-resolved for strings), and the 1-based position of the
/// token's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \"{}\" line {} column {}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// The available MyPL token kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // punctuation symbols
    Dot,
    Colon,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    // arithmetic operators
    Plus,
    Minus,
    Times,
    Divide,
    // assignment and comparator operators
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    // primitive values and identifiers
    StringVal,
    IntVal,
    DoubleVal,
    BoolVal,
    NullVal,
    Id,
    // boolean operators
    And,
    Or,
    Not,
    // data types (CharType is reserved; no keyword maps to it yet)
    IntType,
    DoubleType,
    CharType,
    StringType,
    BoolType,
    VoidType,
    // reserved words
    Struct,
    Var,
    While,
    For,
    From,
    To,
    If,
    Else,
    New,
    Return,
    // comment token and end-of-stream
    Comment,
    Eos,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEq => "LESS_EQ",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEq => "GREATER_EQ",
            TokenKind::StringVal => "STRING_VAL",
            TokenKind::IntVal => "INT_VAL",
            TokenKind::DoubleVal => "DOUBLE_VAL",
            TokenKind::BoolVal => "BOOL_VAL",
            TokenKind::NullVal => "NULL_VAL",
            TokenKind::Id => "ID",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::IntType => "INT_TYPE",
            TokenKind::DoubleType => "DOUBLE_TYPE",
            TokenKind::CharType => "CHAR_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::BoolType => "BOOL_TYPE",
            TokenKind::VoidType => "VOID_TYPE",
            TokenKind::Struct => "STRUCT",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::To => "TO",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::New => "NEW",
            TokenKind::Return => "RETURN",
            TokenKind::Comment => "COMMENT",
            TokenKind::Eos => "EOS",
        };
        write!(f, "{val}")
    }
}

/// Reserved-word table. `true`/`false` classify as boolean literals and
/// `null` as the null literal rather than as dedicated keywords.
pub const KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "or" => TokenKind::Or,
    "not" => TokenKind::Not,
    "struct" => TokenKind::Struct,
    "var" => TokenKind::Var,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "while" => TokenKind::While,
    "for" => TokenKind::For,
    "from" => TokenKind::From,
    "to" => TokenKind::To,
    "new" => TokenKind::New,
    "true" => TokenKind::BoolVal,
    "false" => TokenKind::BoolVal,
    "null" => TokenKind::NullVal,
    "void" => TokenKind::VoidType,
    "int" => TokenKind::IntType,
    "double" => TokenKind::DoubleType,
    "bool" => TokenKind::BoolType,
    "string" => TokenKind::StringType,
    "return" => TokenKind::Return,
};

/// Single-character punctuation and operator table. Characters that may
/// start a two-character operator are dispatched separately.
pub const SYMBOLS: phf::Map<char, TokenKind> = phf_map! {
    '.' => TokenKind::Dot,
    ':' => TokenKind::Colon,
    ',' => TokenKind::Comma,
    '(' => TokenKind::LParen,
    ')' => TokenKind::RParen,
    '[' => TokenKind::LBracket,
    ']' => TokenKind::RBracket,
    '{' => TokenKind::LBrace,
    '}' => TokenKind::RBrace,
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Times,
    '/' => TokenKind::Divide,
};

pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS.get(lexeme).copied()
}

pub fn symbol_kind(ch: char) -> Option<TokenKind> {
    SYMBOLS.get(&ch).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_token_creation() {
        let t = Token::new(TokenKind::IntType, "int", 0, 0);
        assert_eq!(TokenKind::IntType, t.kind);
        assert_eq!("int", t.lexeme);
        assert_eq!(0, t.line);
        assert_eq!(0, t.column);
        assert_eq!("INT_TYPE \"int\" line 0 column 0", t.to_string());
    }

    #[test]
    fn correct_line_column_token_creation() {
        let t = Token::new(TokenKind::Comma, ",", 10, 20);
        assert_eq!(TokenKind::Comma, t.kind);
        assert_eq!(",", t.lexeme);
        assert_eq!(10, t.line);
        assert_eq!(20, t.column);
        assert_eq!("COMMA \",\" line 10 column 20", t.to_string());
    }

    #[test]
    fn keyword_table_is_complete() {
        let expected = [
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("not", TokenKind::Not),
            ("struct", TokenKind::Struct),
            ("var", TokenKind::Var),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("for", TokenKind::For),
            ("from", TokenKind::From),
            ("to", TokenKind::To),
            ("new", TokenKind::New),
            ("true", TokenKind::BoolVal),
            ("false", TokenKind::BoolVal),
            ("null", TokenKind::NullVal),
            ("void", TokenKind::VoidType),
            ("int", TokenKind::IntType),
            ("double", TokenKind::DoubleType),
            ("bool", TokenKind::BoolType),
            ("string", TokenKind::StringType),
            ("return", TokenKind::Return),
        ];
        assert_eq!(expected.len(), KEYWORDS.len());
        for (lexeme, kind) in expected {
            assert_eq!(Some(kind), keyword_kind(lexeme), "keyword {lexeme}");
        }
    }

    #[test]
    fn keyword_table_never_yields_identifiers_or_char_type() {
        for kind in KEYWORDS.values() {
            assert_ne!(TokenKind::Id, *kind);
            assert_ne!(TokenKind::CharType, *kind);
        }
    }

    #[test]
    fn near_miss_keywords_are_not_in_the_table() {
        for lexeme in ["ifx", "fors", "And", "TRUE", "nulll", "char"] {
            assert_eq!(None, keyword_kind(lexeme));
        }
    }

    #[test]
    fn symbol_table_is_complete() {
        let expected = [
            ('.', TokenKind::Dot),
            (':', TokenKind::Colon),
            (',', TokenKind::Comma),
            ('(', TokenKind::LParen),
            (')', TokenKind::RParen),
            ('[', TokenKind::LBracket),
            (']', TokenKind::RBracket),
            ('{', TokenKind::LBrace),
            ('}', TokenKind::RBrace),
            ('+', TokenKind::Plus),
            ('-', TokenKind::Minus),
            ('*', TokenKind::Times),
            ('/', TokenKind::Divide),
        ];
        assert_eq!(expected.len(), SYMBOLS.len());
        for (ch, kind) in expected {
            assert_eq!(Some(kind), symbol_kind(ch), "symbol {ch}");
        }
        for ch in ['@', '$', '?', '_', ';', '=', '!', '<', '>'] {
            assert_eq!(None, symbol_kind(ch));
        }
    }
}
