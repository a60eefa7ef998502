use crate::ast::{Ast, BinaryOp, BinaryOpKind, ExprIndex, StmtIndex};
use graupel_common::diagnostics::DiagnosticsReportCell;
use graupel_common::token::{Token, TokenKind};
use std::cell::Cell;


#[derive(Debug, Clone)]
pub struct Counter {
    value: Cell<usize>
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: Cell::new(0)
        }
    }

    pub fn increment(&self) {
        let current_value = self.value.get();
        self.value.set(current_value + 1);
    }

    pub fn get_value(&self) -> usize {
        self.value.get()
    }
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    current: Counter,
    diagnostics_report: DiagnosticsReportCell,
    ast: &'a mut Ast,
}

impl <'a> Parser<'a> {
    pub fn new(
        tokens: Vec<Token>,
        diagnostics_report: DiagnosticsReportCell,
        ast: &'a mut Ast,
    ) -> Self {
        Self {
            tokens: tokens.iter()
                .filter(|token| {
                    token.kind != TokenKind::Whitespace &&
                    token.kind != TokenKind::LineComment &&
                    token.kind != TokenKind::Bad
                })
                .map(|token| token.clone()).collect(), // filter whitespaces, comments and bad tokens
            current: Counter::new(),
            diagnostics_report,
            ast,
        }
    }

    /// Parses the whole program: statements separated by semicolons, with
    /// an optional trailing semicolon.
    pub fn parse(&mut self) {
        while !self.is_at_end() {
            self.parse_statement();

            if self.current().kind == TokenKind::SemiColon {
                self.consume();
            } else if !self.is_at_end() {
                self.diagnostics_report.borrow_mut().report_unexpected_token(&TokenKind::SemiColon, self.current());
                self.consume();
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn current(&self) -> &Token {
        self.peek(0)
    }

    fn peek(&self, offset: isize) -> &Token {
        let mut index = (self.current.get_value() as isize + offset) as usize;

        if index >= self.tokens.len() {
            index = self.tokens.len() - 1;
        }

        self.tokens.get(index).unwrap()
    }

    fn consume(&self) -> &Token {
        self.current.increment();
        self.peek(-1)
    }

    fn consume_and_check(&mut self, kind: TokenKind) -> Token {
        let token = self.consume().clone();

        if token.kind != kind {
            self.diagnostics_report.borrow_mut().report_unexpected_token(&kind, &token);
        }

        token
    }

    fn parse_statement(&mut self) -> StmtIndex {
        match self.current().kind {
            TokenKind::Skip => {
                let keyword = self.consume().clone();
                self.ast.skip_statement(keyword).id
            }
            TokenKind::Read => {
                let keyword = self.consume().clone();
                self.consume_and_check(TokenKind::LeftParen);
                let identifier = self.consume_and_check(TokenKind::Identifier);
                self.consume_and_check(TokenKind::RightParen);

                self.ast.read_statement(keyword, identifier).id
            }
            TokenKind::Write => {
                let keyword = self.consume().clone();
                self.consume_and_check(TokenKind::LeftParen);
                let expr = self.parse_expression();
                self.consume_and_check(TokenKind::RightParen);

                self.ast.write_statement(keyword, expr).id
            }
            TokenKind::Identifier => {
                let identifier = self.consume().clone();
                self.consume_and_check(TokenKind::Assign);
                let expr = self.parse_expression();

                self.ast.assignment_statement(identifier, expr).id
            }
            _ => {
                // Recover on the next token so one stray token cannot stall the parse
                let bad = self.consume().clone();
                self.diagnostics_report.borrow_mut().report_expected_statement(&bad);

                self.ast.skip_statement(bad).id
            }
        }
    }

    fn parse_expression(&mut self) -> ExprIndex {
        self.parse_binary_expression()
    }

    fn parse_binary_expression(&mut self) -> ExprIndex {
        let left = self.parse_primary_expression();
        self.parse_binary_expression_recurse(left, 0)
    }

    fn parse_binary_expression_recurse(&mut self, mut left: ExprIndex, precedence: u8) -> ExprIndex {
        /*
         * parse pri exp, check if there are operators of higher precedence
         *  if no, return pri exp
         *  if yes, return another binary exp for higher precedence operation
         */
        while let Some(operator) = self.parse_binary_operator() { // try parsing bin operator
            let operator_precedence = operator.precedence();
            if operator_precedence < precedence { // precedence checks (w/ current)
                break;
            }

            self.consume();

            let mut right = self.parse_primary_expression();

            while let Some(inner_operator) = self.parse_binary_operator() {
                // every graupel operator is left-associative, so only a
                // strictly tighter operator claims the right operand
                if inner_operator.precedence() <= operator_precedence {
                    break;
                }

                right = self.parse_binary_expression_recurse(right, inner_operator.precedence());
            }

            left = self.ast.binary_expression(operator, left, right).id;
        }

        left
    }

    fn parse_binary_operator(&mut self) -> Option<BinaryOp> {
        let token = self.current();

        let kind = match token.kind {
            // arithmetic operators
            TokenKind::Plus => Some(BinaryOpKind::Plus),
            TokenKind::Minus => Some(BinaryOpKind::Minus),
            TokenKind::Asterisk => Some(BinaryOpKind::Multiply),
            TokenKind::Slash => Some(BinaryOpKind::Divide),
            TokenKind::Modulo => Some(BinaryOpKind::Modulo),

            // relational operators
            TokenKind::EqualsEquals => Some(BinaryOpKind::Equals),
            TokenKind::NotEquals => Some(BinaryOpKind::NotEquals),
            TokenKind::LessThan => Some(BinaryOpKind::LessThan),
            TokenKind::GreaterThan => Some(BinaryOpKind::GreaterThan),
            TokenKind::LessThanOrEqual => Some(BinaryOpKind::LessThanOrEqual),
            TokenKind::GreaterThanOrEqual => Some(BinaryOpKind::GreaterThanOrEqual),

            // logical operators
            TokenKind::DoubleAmpersand => Some(BinaryOpKind::And),
            TokenKind::DoubleBang => Some(BinaryOpKind::Or),
            _ => None,
        };

        return kind.map(|kind| BinaryOp::new(kind, token.clone()));
    }

    fn parse_primary_expression(&mut self) -> ExprIndex {
        match self.current().kind {
            TokenKind::Number(number) => {
                let token = self.consume().clone();
                self.ast.number_expression(token, number).id
            }
            TokenKind::LeftParen => {
                let left_paren = self.consume().clone();
                let expression = self.parse_expression();
                let right_paren = self.consume_and_check(TokenKind::RightParen);

                self.ast.parenthesised_expression(left_paren, expression, right_paren).id
            }
            TokenKind::Identifier => {
                let identifier = self.consume().clone();
                self.ast.variable_expression(identifier).id
            }
            _ => {
                let token = self.consume().clone();
                self.diagnostics_report.borrow_mut().report_expected_expression(&token);

                self.ast.error_expression(token.span).id
            }
        }
    }
}
