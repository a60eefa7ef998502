/*
 * This module contains the visitor pattern for AST traversal
 */

use crate::ast::{
    AssignStatement, Ast, BinaryExpression, ExprIndex, Expression, ExpressionKind, NumberExpression,
    ParenExpression, ReadStatement, Statement, StatementKind, StmtIndex, VarExpression, WriteStatement};
use graupel_common::text::span::TextSpan;


pub trait ASTVisitor {
    fn visit_statement(&mut self, ast: &Ast, statement: StmtIndex) {
        self.do_visit_statement(ast, statement);
    }

    fn do_visit_statement(&mut self, ast: &Ast, statement: StmtIndex) {
        let statement = ast.query_statement(statement).clone();

        match &statement.kind {
            StatementKind::Skip => {
                self.visit_skip_statement(ast, &statement);
            }
            StatementKind::Assignment(assignment) => {
                self.visit_assignment_statement(ast, &assignment, &statement);
            }
            StatementKind::Read(read) => {
                self.visit_read_statement(ast, &read, &statement);
            }
            StatementKind::Write(write) => {
                self.visit_write_statement(ast, &write, &statement);
            }
        }
    }

    fn visit_skip_statement(&mut self, _ast: &Ast, _statement: &Statement) {
        // nothing to walk
    }

    fn visit_assignment_statement(&mut self, ast: &Ast, assignment: &AssignStatement, _statement: &Statement) {
        self.visit_expression(ast, assignment.expr);
    }

    fn visit_read_statement(&mut self, ast: &Ast, read: &ReadStatement, statement: &Statement);

    fn visit_write_statement(&mut self, ast: &Ast, write: &WriteStatement, _statement: &Statement) {
        self.visit_expression(ast, write.expr);
    }

    fn visit_expression(&mut self, ast: &Ast, expression: ExprIndex) {
        self.do_visit_expression(ast, expression);
    }

    fn do_visit_expression(&mut self, ast: &Ast, expression: ExprIndex) {
        let expression = ast.query_expression(expression).clone();

        match &expression.kind {
            ExpressionKind::Number(number) => {
                self.visit_number_expression(ast, &number, &expression);
            }
            ExpressionKind::Variable(variable) => {
                self.visit_variable_expression(ast, &variable, &expression);
            }
            ExpressionKind::Parenthesised(parenthesised) => {
                self.visit_parenthesised_expression(ast, &parenthesised, &expression);
            }
            ExpressionKind::Binary(binary) => {
                self.visit_binary_expression(ast, &binary, &expression);
            }
            ExpressionKind::Error(span) => {
                self.visit_error(ast, &span);
            }
        }
    }

    fn visit_number_expression(&mut self, ast: &Ast, number: &NumberExpression, expr: &Expression);

    fn visit_variable_expression(&mut self, ast: &Ast, variable: &VarExpression, expr: &Expression);

    fn visit_parenthesised_expression(&mut self, ast: &Ast, parenthesised: &ParenExpression, _expr: &Expression) {
        self.visit_expression(ast, parenthesised.expression);
    }

    fn visit_binary_expression(&mut self, ast: &Ast, binary: &BinaryExpression, _expr: &Expression) {
        self.visit_expression(ast, binary.left);
        self.visit_expression(ast, binary.right);
    }

    fn visit_error(&mut self, _ast: &Ast, _span: &TextSpan) {
        // do nothing
    }
}
