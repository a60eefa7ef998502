use graupel_common::text::span::TextSpan;
use graupel_common::token::{Token, TokenKind};

#[derive(Debug, PartialEq)]
enum NumberResult {
    Integer(i32),
    Malformed,
}

pub struct Lexer<'a> {
    input: &'a str,
    current_pos: usize,
}

impl <'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, current_pos: 0 }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        // To recognise end of token stream
        if self.current_pos == self.input.len() {
            let eof_char: char = '\0';

            self.current_pos += 1;

            return Some(Token::new(
                TokenKind::Eof,
                TextSpan::new(0, 0, eof_char.to_string())
            ));
        }

        let c = self.current_char();

        return c.map(|c| {
            let start: usize = self.current_pos;
            let kind;

            if Self::is_number_start(&c) {
                kind = match self.consume_number() {
                    NumberResult::Integer(number) => TokenKind::Number(number),
                    NumberResult::Malformed => TokenKind::Bad,
                };
            } else if Self::is_whitespace(&c) {
                self.consume();
                kind = TokenKind::Whitespace;
            } else if Self::is_identifier_start(&c) {
                let identifier = self.consume_identifier();

                kind = match identifier.as_str() {
                    "skip" => TokenKind::Skip,
                    "read" => TokenKind::Read,
                    "write" => TokenKind::Write,
                    _ => TokenKind::Identifier,
                }
            } else if c == '-' && self.peek_char() == Some('-') {
                self.consume_line_comment();
                kind = TokenKind::LineComment;
            } else {
                kind = self.consume_punctuation();
            }

            let end: usize = self.current_pos;
            let literal: String = self.input[start..end].to_string();
            let span = TextSpan::new(start, end, literal);

            Token::new(kind, span)
        });
    }

    fn consume_number(&mut self) -> NumberResult {
        let start_pos = self.current_pos;

        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                self.consume();
            } else {
                break;
            }
        }

        // Word-sized integers only; anything wider is malformed
        match self.input[start_pos..self.current_pos].parse::<i32>() {
            Ok(number) => NumberResult::Integer(number),
            Err(_) => NumberResult::Malformed,
        }
    }

    fn consume_identifier(&mut self) -> String {
        let start_pos = self.current_pos;

        while let Some(c) = self.current_char() {
            if Self::is_identifier_continuation(&c) {
                self.consume();
            } else {
                break;
            }
        }

        self.input[start_pos..self.current_pos].to_string()
    }

    fn consume_line_comment(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.consume();
        }
    }

    fn consume_punctuation(&mut self) -> TokenKind {
        let c = self.consume().unwrap();

        match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Modulo,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ';' => TokenKind::SemiColon,
            ':' => self.lex_potential_double_char_operator('=', TokenKind::Bad, TokenKind::Assign),
            '&' => self.lex_potential_double_char_operator('&', TokenKind::Bad, TokenKind::DoubleAmpersand),
            '!' => {
                match self.current_char() {
                    Some('!') => {
                        self.consume();
                        TokenKind::DoubleBang
                    }
                    Some('=') => {
                        self.consume();
                        TokenKind::NotEquals
                    }
                    _ => TokenKind::Bad,
                }
            }
            '=' => self.lex_potential_double_char_operator('=', TokenKind::Bad, TokenKind::EqualsEquals),
            '<' => self.lex_potential_double_char_operator('=', TokenKind::LessThan, TokenKind::LessThanOrEqual),
            '>' => self.lex_potential_double_char_operator('=', TokenKind::GreaterThan, TokenKind::GreaterThanOrEqual),
            _ => TokenKind::Bad,
        }
    }

    fn lex_potential_double_char_operator(&mut self, expected: char, single_kind: TokenKind, double_kind: TokenKind) -> TokenKind {
        if self.current_char() == Some(expected) {
            self.consume();
            double_kind
        } else {
            single_kind
        }
    }

    fn is_number_start(c: &char) -> bool {
        c.is_ascii_digit()
    }

    fn is_whitespace(c: &char) -> bool {
        c.is_whitespace()
    }

    fn is_identifier_start(c: &char) -> bool {
        c.is_alphabetic() || *c == '_'
    }

    fn is_identifier_continuation(c: &char) -> bool {
        c.is_alphanumeric() || *c == '_'
    }

    fn current_char(&self) -> Option<char> {
        self.input.chars().nth(self.current_pos)
    }

    fn peek_char(&self) -> Option<char> {
        self.input.chars().nth(self.current_pos + 1)
    }

    fn consume(&mut self) -> Option<char> {
        if self.current_pos >= self.input.len() {
            return None;
        }

        let c = self.current_char();
        self.current_pos += 1;

        c
    }
}
