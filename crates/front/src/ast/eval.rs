use crate::ast::{
    AssignStatement, Ast, BinaryExpression, Expression, NumberExpression,
    ReadStatement, Statement, VarExpression, WriteStatement};
use crate::ast::visitor::ASTVisitor;
use graupel_common::io::IoBuffer;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};


#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    InputExhausted,
    DivisionByZero,
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InputExhausted => write!(f, "read past the end of the input channel"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

pub struct ASTEvaluator {
    pub last_value: Option<i32>,
    pub variables: HashMap<String, i32>,
    pub io: IoBuffer,
    error: Option<EvalError>,
}

impl ASTEvaluator {
    pub fn new(io: IoBuffer) -> Self {
        Self { last_value: None, variables: HashMap::new(), io, error: None }
    }

    pub fn run(&mut self, ast: &Ast) -> Result<(), EvalError> {
        ast.visit(self);

        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn fail(&mut self, error: EvalError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn expect_last_value(&self) -> i32 {
        self.last_value.expect("Expected last value to be set")
    }

    /// Variables are zero-initialised words, exactly like the `.data`
    /// entries of the compiled form
    fn lookup(&self, name: &str) -> i32 {
        self.variables.get(name).copied().unwrap_or(0)
    }
}

impl ASTVisitor for ASTEvaluator {
    fn visit_assignment_statement(&mut self, ast: &Ast, assignment: &AssignStatement, _statement: &Statement) {
        self.visit_expression(ast, assignment.expr);

        if self.error.is_some() {
            return;
        }

        let value = self.expect_last_value();
        self.variables.insert(assignment.identifier().to_string(), value);
    }

    fn visit_read_statement(&mut self, _ast: &Ast, read: &ReadStatement, _statement: &Statement) {
        if self.error.is_some() {
            return;
        }

        match self.io.read() {
            Some(value) => {
                self.variables.insert(read.identifier().to_string(), value);
            }
            None => self.fail(EvalError::InputExhausted),
        }
    }

    fn visit_write_statement(&mut self, ast: &Ast, write: &WriteStatement, _statement: &Statement) {
        self.visit_expression(ast, write.expr);

        if self.error.is_some() {
            return;
        }

        let value = self.expect_last_value();
        self.io.write(value);
    }

    fn visit_number_expression(&mut self, _ast: &Ast, number: &NumberExpression, _expr: &Expression) {
        self.last_value = Some(number.number);
    }

    fn visit_variable_expression(&mut self, _ast: &Ast, variable: &VarExpression, _expr: &Expression) {
        self.last_value = Some(self.lookup(variable.identifier()));
    }

    fn visit_binary_expression(&mut self, ast: &Ast, binary: &BinaryExpression, _expr: &Expression) {
        self.visit_expression(ast, binary.left);
        if self.error.is_some() {
            return;
        }
        let left = self.expect_last_value();

        self.visit_expression(ast, binary.right);
        if self.error.is_some() {
            return;
        }
        let right = self.expect_last_value();

        match binary.operator.kind.apply(left, right) {
            Some(value) => self.last_value = Some(value),
            None => self.fail(EvalError::DivisionByZero),
        }
    }
}
