use std::fmt::{Display, Formatter};

use graupel_common::text::span::TextSpan;
use graupel_common::token::Token;
use graupel_common::{idx, Idx, IndexVec};
use self::visitor::ASTVisitor;

pub mod lexer;
pub mod parser;
pub mod eval;
pub mod visitor;
pub mod printer;


idx!(StmtIndex);
idx!(ExprIndex);

#[derive(Debug, Clone)]
pub struct Ast {
    pub statements: IndexVec<StmtIndex, Statement>,
    pub expressions: IndexVec<ExprIndex, Expression>,
}

impl Ast {
    pub fn new() -> Self {
        Self {
            statements: IndexVec::new(),
            expressions: IndexVec::new(),
        }
    }

    pub fn query_statement(&self, stmt_id: StmtIndex) -> &Statement {
        &self.statements[stmt_id]
    }

    pub fn query_expression(&self, expr_id: ExprIndex) -> &Expression {
        &self.expressions[expr_id]
    }

    /// Walks the whole program, statement by statement, in source order.
    /// The statement arena is only ever pushed to in parse order, so arena
    /// order is program order.
    pub fn visit(&self, visitor: &mut dyn ASTVisitor) {
        for statement_id in self.statements.indices() {
            visitor.visit_statement(self, statement_id);
        }
    }

    // Statement
    fn statement_from_kind(&mut self, kind: StatementKind, span: TextSpan) -> &Statement {
        let statement = Statement::new(kind, StmtIndex::new(0), span);
        let id = self.statements.push(statement);

        self.statements[id].id = id;

        &self.statements[id]
    }

    pub fn skip_statement(&mut self, keyword: Token) -> &Statement {
        let span = keyword.span.clone();
        self.statement_from_kind(StatementKind::Skip, span)
    }

    pub fn assignment_statement(&mut self, identifier: Token, expr: ExprIndex) -> &Statement {
        let expr_span = self.query_expression(expr).span.clone();
        let span = TextSpan::combine_refs(&[&identifier.span, &expr_span]);

        self.statement_from_kind(StatementKind::Assignment(AssignStatement { identifier, expr }), span)
    }

    pub fn read_statement(&mut self, keyword: Token, identifier: Token) -> &Statement {
        let span = TextSpan::combine_refs(&[&keyword.span, &identifier.span]);
        self.statement_from_kind(StatementKind::Read(ReadStatement { identifier }), span)
    }

    pub fn write_statement(&mut self, keyword: Token, expr: ExprIndex) -> &Statement {
        let expr_span = self.query_expression(expr).span.clone();
        let span = TextSpan::combine_refs(&[&keyword.span, &expr_span]);

        self.statement_from_kind(StatementKind::Write(WriteStatement { expr }), span)
    }

    // Expression
    fn expression_from_kind(&mut self, kind: ExpressionKind, span: TextSpan) -> &Expression {
        let expression = Expression::new(kind, ExprIndex::new(0), span);
        let id = self.expressions.push(expression);

        self.expressions[id].id = id;

        &self.expressions[id]
    }

    pub fn number_expression(&mut self, token: Token, number: i32) -> &Expression {
        let span = token.span.clone();
        self.expression_from_kind(ExpressionKind::Number(NumberExpression { number, token }), span)
    }

    pub fn variable_expression(&mut self, identifier: Token) -> &Expression {
        let span = identifier.span.clone();
        self.expression_from_kind(ExpressionKind::Variable(VarExpression { identifier }), span)
    }

    pub fn parenthesised_expression(&mut self, left_paren: Token, expression: ExprIndex, right_paren: Token) -> &Expression {
        let span = TextSpan::combine_refs(&[&left_paren.span, &right_paren.span]);
        self.expression_from_kind(ExpressionKind::Parenthesised(ParenExpression { expression }), span)
    }

    pub fn binary_expression(&mut self, operator: BinaryOp, left: ExprIndex, right: ExprIndex) -> &Expression {
        let left_span = self.query_expression(left).span.clone();
        let right_span = self.query_expression(right).span.clone();
        let span = TextSpan::combine_refs(&[&left_span, &right_span]);

        self.expression_from_kind(ExpressionKind::Binary(BinaryExpression { operator, left, right }), span)
    }

    pub fn error_expression(&mut self, span: TextSpan) -> &Expression {
        self.expression_from_kind(ExpressionKind::Error(span.clone()), span)
    }
}

#[derive(Debug, Clone)]
pub struct Statement {
    pub kind: StatementKind,
    pub id: StmtIndex,
    pub span: TextSpan,
}

impl Statement {
    pub fn new(kind: StatementKind, id: StmtIndex, span: TextSpan) -> Self {
        Self { kind, id, span }
    }
}

#[derive(Debug, Clone)]
pub enum StatementKind {
    Skip,
    Assignment(AssignStatement),
    Read(ReadStatement),
    Write(WriteStatement),
}

#[derive(Debug, Clone)]
pub struct AssignStatement {
    pub identifier: Token,
    pub expr: ExprIndex,
}

impl AssignStatement {
    pub fn identifier(&self) -> &str {
        &self.identifier.span.literal
    }
}

#[derive(Debug, Clone)]
pub struct ReadStatement {
    pub identifier: Token,
}

impl ReadStatement {
    pub fn identifier(&self) -> &str {
        &self.identifier.span.literal
    }
}

#[derive(Debug, Clone)]
pub struct WriteStatement {
    pub expr: ExprIndex,
}

#[derive(Debug, Clone)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub id: ExprIndex,
    pub span: TextSpan,
}

impl Expression {
    pub fn new(kind: ExpressionKind, id: ExprIndex, span: TextSpan) -> Self {
        Self { kind, id, span }
    }
}

#[derive(Debug, Clone)]
pub enum ExpressionKind {
    Number(NumberExpression),
    Variable(VarExpression),
    Parenthesised(ParenExpression),
    Binary(BinaryExpression),
    Error(TextSpan),
}

#[derive(Debug, Clone)]
pub struct NumberExpression {
    pub number: i32,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct VarExpression {
    pub identifier: Token,
}

impl VarExpression {
    pub fn identifier(&self) -> &str {
        &self.identifier.span.literal
    }
}

#[derive(Debug, Clone)]
pub struct ParenExpression {
    pub expression: ExprIndex,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub operator: BinaryOp,
    pub left: ExprIndex,
    pub right: ExprIndex,
}

#[derive(Debug, Clone)]
pub struct BinaryOp {
    pub kind: BinaryOpKind,
    pub token: Token,
}

impl BinaryOp {
    pub fn new(kind: BinaryOpKind, token: Token) -> Self {
        Self { kind, token }
    }

    /// Loosest binds lowest: `!!` < `&&` < comparisons < `+ -` < `* / %`.
    /// Every operator is left-associative.
    pub fn precedence(&self) -> u8 {
        match self.kind {
            BinaryOpKind::Or => 1,
            BinaryOpKind::And => 2,
            BinaryOpKind::LessThan
            | BinaryOpKind::LessThanOrEqual
            | BinaryOpKind::GreaterThan
            | BinaryOpKind::GreaterThanOrEqual
            | BinaryOpKind::Equals
            | BinaryOpKind::NotEquals => 3,
            BinaryOpKind::Plus | BinaryOpKind::Minus => 4,
            BinaryOpKind::Multiply | BinaryOpKind::Divide | BinaryOpKind::Modulo => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOpKind {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equals,
    NotEquals,
}

impl BinaryOpKind {
    /// The shared arithmetic of both reference interpreters: wrapping like
    /// the 32-bit target, bitwise `&&`/`!!`, 0/1 comparisons. `None` means
    /// division by zero.
    pub fn apply(self, left: i32, right: i32) -> Option<i32> {
        let value = match self {
            BinaryOpKind::Plus => left.wrapping_add(right),
            BinaryOpKind::Minus => left.wrapping_sub(right),
            BinaryOpKind::Multiply => left.wrapping_mul(right),
            BinaryOpKind::Divide => {
                if right == 0 {
                    return None;
                }
                left.wrapping_div(right)
            }
            BinaryOpKind::Modulo => {
                if right == 0 {
                    return None;
                }
                left.wrapping_rem(right)
            }
            BinaryOpKind::And => left & right,
            BinaryOpKind::Or => left | right,
            BinaryOpKind::LessThan => (left < right) as i32,
            BinaryOpKind::LessThanOrEqual => (left <= right) as i32,
            BinaryOpKind::GreaterThan => (left > right) as i32,
            BinaryOpKind::GreaterThanOrEqual => (left >= right) as i32,
            BinaryOpKind::Equals => (left == right) as i32,
            BinaryOpKind::NotEquals => (left != right) as i32,
        };

        Some(value)
    }
}

impl Display for BinaryOpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOpKind::Plus => write!(f, "+"),
            BinaryOpKind::Minus => write!(f, "-"),
            BinaryOpKind::Multiply => write!(f, "*"),
            BinaryOpKind::Divide => write!(f, "/"),
            BinaryOpKind::Modulo => write!(f, "%"),
            BinaryOpKind::And => write!(f, "&&"),
            BinaryOpKind::Or => write!(f, "!!"),
            BinaryOpKind::LessThan => write!(f, "<"),
            BinaryOpKind::LessThanOrEqual => write!(f, "<="),
            BinaryOpKind::GreaterThan => write!(f, ">"),
            BinaryOpKind::GreaterThanOrEqual => write!(f, ">="),
            BinaryOpKind::Equals => write!(f, "=="),
            BinaryOpKind::NotEquals => write!(f, "!="),
        }
    }
}
