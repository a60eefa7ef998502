use termion::color;
use termion::color::{Fg, Reset};

use crate::ast::{
    AssignStatement, Ast, BinaryExpression, Expression, NumberExpression, ParenExpression,
    ReadStatement, Statement, VarExpression, WriteStatement};
use crate::ast::visitor::ASTVisitor;


pub struct ASTPrinter {
    pub result: String,
}

impl ASTPrinter {
    const NUMBER_COLOUR: color::Cyan = color::Cyan;
    const TEXT_COLOUR: color::LightWhite = color::LightWhite;
    const KEYWORD_COLOUR: color::Magenta = color::Magenta;
    const VARIABLE_COLOUR: color::Green = color::Green;

    pub fn new() -> Self {
        Self { result: String::new() }
    }

    fn add_whitespace(&mut self) {
        self.result.push_str(" ");
    }

    fn add_newline(&mut self) {
        self.result.push_str(&format!("{}\n", Fg(Reset)));
    }

    fn add_keyword(&mut self, keyword: &str) {
        self.result.push_str(&format!("{}{}", Self::KEYWORD_COLOUR.fg_str(), keyword));
    }

    fn add_text(&mut self, text: &str) {
        self.result.push_str(&format!("{}{}", Self::TEXT_COLOUR.fg_str(), text));
    }

    fn add_variable(&mut self, variable: &str) {
        self.result.push_str(&format!("{}{}", Self::VARIABLE_COLOUR.fg_str(), variable));
    }

    fn add_number(&mut self, number: i32) {
        self.result.push_str(&format!("{}{}", Self::NUMBER_COLOUR.fg_str(), number));
    }
}

impl ASTVisitor for ASTPrinter {
    fn visit_skip_statement(&mut self, _ast: &Ast, _statement: &Statement) {
        self.add_keyword("skip");
        self.add_newline();
    }

    fn visit_assignment_statement(&mut self, ast: &Ast, assignment: &AssignStatement, _statement: &Statement) {
        self.add_variable(assignment.identifier());
        self.add_whitespace();
        self.add_text(":=");
        self.add_whitespace();
        self.visit_expression(ast, assignment.expr);
        self.add_newline();
    }

    fn visit_read_statement(&mut self, _ast: &Ast, read: &ReadStatement, _statement: &Statement) {
        self.add_keyword("read");
        self.add_text("(");
        self.add_variable(read.identifier());
        self.add_text(")");
        self.add_newline();
    }

    fn visit_write_statement(&mut self, ast: &Ast, write: &WriteStatement, _statement: &Statement) {
        self.add_keyword("write");
        self.add_text("(");
        self.visit_expression(ast, write.expr);
        self.add_text(")");
        self.add_newline();
    }

    fn visit_number_expression(&mut self, _ast: &Ast, number: &NumberExpression, _expr: &Expression) {
        self.add_number(number.number);
    }

    fn visit_variable_expression(&mut self, _ast: &Ast, variable: &VarExpression, _expr: &Expression) {
        self.add_variable(variable.identifier());
    }

    fn visit_parenthesised_expression(&mut self, ast: &Ast, parenthesised: &ParenExpression, _expr: &Expression) {
        self.add_text("(");
        self.visit_expression(ast, parenthesised.expression);
        self.add_text(")");
    }

    fn visit_binary_expression(&mut self, ast: &Ast, binary: &BinaryExpression, _expr: &Expression) {
        self.visit_expression(ast, binary.left);
        self.add_whitespace();
        self.add_text(&binary.operator.kind.to_string());
        self.add_whitespace();
        self.visit_expression(ast, binary.right);
    }
}
