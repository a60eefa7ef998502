use std::fmt::{Display, Formatter};

use crate::text::span::TextSpan;


#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    // literals
    Number(i32),

    // arithmetic operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Modulo,

    // logical operators
    DoubleAmpersand, // && for and
    DoubleBang,      // !! for or

    // relational operators
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    EqualsEquals,
    NotEquals,

    // keywords
    Skip,
    Read,
    Write,

    // separators
    Assign, // :=
    LeftParen,
    RightParen,
    SemiColon,

    // comments (handled by lexer, not tokenized)
    LineComment, // -- to end of line

    // other
    Whitespace,
    Identifier,
    Bad,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // literals
            TokenKind::Number(_) => write!(f, "Number"),

            // arithmetic operators
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Asterisk => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Modulo => write!(f, "%"),

            // logical operators
            TokenKind::DoubleAmpersand => write!(f, "&&"),
            TokenKind::DoubleBang => write!(f, "!!"),

            // relational operators
            TokenKind::LessThan => write!(f, "<"),
            TokenKind::GreaterThan => write!(f, ">"),
            TokenKind::LessThanOrEqual => write!(f, "<="),
            TokenKind::GreaterThanOrEqual => write!(f, ">="),
            TokenKind::EqualsEquals => write!(f, "=="),
            TokenKind::NotEquals => write!(f, "!="),

            // keywords
            TokenKind::Skip => write!(f, "Skip"),
            TokenKind::Read => write!(f, "Read"),
            TokenKind::Write => write!(f, "Write"),

            // separators
            TokenKind::Assign => write!(f, ":="),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::SemiColon => write!(f, "Semicolon"),

            // comments
            TokenKind::LineComment => write!(f, "LineComment"),

            // other
            TokenKind::Whitespace => write!(f, "Whitespace"),
            TokenKind::Identifier => write!(f, "Identifier"),
            TokenKind::Bad => write!(f, "Bad"),
            TokenKind::Eof => write!(f, "Eof"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, span: TextSpan) -> Self {
        Self { kind, span }
    }
}
