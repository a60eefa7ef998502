use graupel_common::bug_report;
use graupel_common::text::span::TextSpan;
use graupel_front::ast::visitor::ASTVisitor;
use graupel_front::ast::{
    AssignStatement, Ast, BinaryExpression, Expression, NumberExpression, ReadStatement,
    Statement, VarExpression, WriteStatement};

use crate::ir::sm::{SmInstruction, SmProgram};


/// Lowers the AST into a stack-machine program: a straight tree walk that
/// leaves each expression's value on the implicit evaluation stack.
pub struct SMBuilder {
    program: SmProgram,
}

impl SMBuilder {
    pub fn new() -> Self {
        Self { program: SmProgram::new() }
    }

    pub fn build(mut self, ast: &Ast) -> SmProgram {
        ast.visit(&mut self);
        self.program
    }
}

impl ASTVisitor for SMBuilder {
    fn visit_assignment_statement(&mut self, ast: &Ast, assignment: &AssignStatement, _statement: &Statement) {
        tracing::debug!("Lowering assignment to '{}'", assignment.identifier());

        self.visit_expression(ast, assignment.expr);
        self.program.push(SmInstruction::Store(assignment.identifier().to_string()));
    }

    fn visit_read_statement(&mut self, _ast: &Ast, read: &ReadStatement, _statement: &Statement) {
        tracing::debug!("Lowering read into '{}'", read.identifier());

        self.program.push(SmInstruction::Read);
        self.program.push(SmInstruction::Store(read.identifier().to_string()));
    }

    fn visit_write_statement(&mut self, ast: &Ast, write: &WriteStatement, _statement: &Statement) {
        self.visit_expression(ast, write.expr);
        self.program.push(SmInstruction::Write);
    }

    fn visit_number_expression(&mut self, _ast: &Ast, number: &NumberExpression, _expr: &Expression) {
        self.program.push(SmInstruction::Const(number.number));
    }

    fn visit_variable_expression(&mut self, _ast: &Ast, variable: &VarExpression, _expr: &Expression) {
        self.program.push(SmInstruction::Load(variable.identifier().to_string()));
    }

    fn visit_binary_expression(&mut self, ast: &Ast, binary: &BinaryExpression, _expr: &Expression) {
        self.visit_expression(ast, binary.left);
        self.visit_expression(ast, binary.right);
        self.program.push(SmInstruction::Binary(binary.operator.kind));
    }

    fn visit_error(&mut self, _ast: &Ast, _span: &TextSpan) {
        bug_report!("Error expression reached lowering; compilation should have failed earlier");
    }
}
