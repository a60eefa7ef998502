#[cfg(test)]
mod tests {
    use graupel_common::io::IoBuffer;
    use graupel_front::ast::eval::{ASTEvaluator, EvalError};
    use graupel_front::ast::visitor::ASTVisitor;
    use graupel_front::ast::*;
    use graupel_front::compilation_unit::CompilationUnit;


    #[derive(Debug, PartialEq)]
    enum TestASTNode {
        Number(i32),
        Variable(String),
        Binary(BinaryOpKind),
        Parenthesised,
        Skip,
        Assignment(String),
        Read(String),
        Write,
    }

    struct ASTVerifier {
        expected: Vec<TestASTNode>,
        actual: Vec<TestASTNode>,
        ast: Ast,
    }

    impl ASTVerifier {
        pub fn new(input: &str, expected: Vec<TestASTNode>) -> Self {
            let compilation_unit = CompilationUnit::compile(input).expect("Failed to compile");

            let mut verifier = ASTVerifier { expected, actual: Vec::new(), ast: compilation_unit.ast };
            verifier.flatten_ast();

            verifier
        }

        fn flatten_ast(&mut self) {
            self.actual.clear();
            let ast = self.ast.clone();

            ast.visit(&mut *self);
        }

        pub fn verify(&self) {
            // ensure the expected and actual AST nodes match
            assert_eq!(self.expected.len(), self.actual.len(), "Expected {} nodes, but got {}.\nActual nodes: {:?}", self.expected.len(), self.actual.len(), self.actual);

            for (index, (expected, actual)) in self.expected.iter().zip(self.actual.iter()).enumerate() {
                assert_eq!(expected, actual, "Expected {:?} at index {}, but got {:?}", expected, index, actual);
            }
        }
    }

    impl ASTVisitor for ASTVerifier {
        fn visit_skip_statement(&mut self, _ast: &Ast, _statement: &Statement) {
            self.actual.push(TestASTNode::Skip);
        }

        fn visit_assignment_statement(&mut self, ast: &Ast, assignment: &AssignStatement, _statement: &Statement) {
            self.actual.push(TestASTNode::Assignment(assignment.identifier().to_string()));
            self.visit_expression(ast, assignment.expr);
        }

        fn visit_read_statement(&mut self, _ast: &Ast, read: &ReadStatement, _statement: &Statement) {
            self.actual.push(TestASTNode::Read(read.identifier().to_string()));
        }

        fn visit_write_statement(&mut self, ast: &Ast, write: &WriteStatement, _statement: &Statement) {
            self.actual.push(TestASTNode::Write);
            self.visit_expression(ast, write.expr);
        }

        fn visit_number_expression(&mut self, _ast: &Ast, number: &NumberExpression, _expr: &Expression) {
            self.actual.push(TestASTNode::Number(number.number));
        }

        fn visit_variable_expression(&mut self, _ast: &Ast, variable: &VarExpression, _expr: &Expression) {
            self.actual.push(TestASTNode::Variable(variable.identifier().to_string()));
        }

        fn visit_parenthesised_expression(&mut self, ast: &Ast, parenthesised: &ParenExpression, _expr: &Expression) {
            self.actual.push(TestASTNode::Parenthesised);
            self.visit_expression(ast, parenthesised.expression);
        }

        fn visit_binary_expression(&mut self, ast: &Ast, binary: &BinaryExpression, _expr: &Expression) {
            self.actual.push(TestASTNode::Binary(binary.operator.kind));
            self.visit_expression(ast, binary.left);
            self.visit_expression(ast, binary.right);
        }
    }

    fn assert_ast(input: &str, expected: Vec<TestASTNode>) {
        let verifier = ASTVerifier::new(input, expected);
        verifier.verify();
    }

    fn evaluate(input: &str, channel: Vec<i32>) -> Vec<i32> {
        let compilation_unit = CompilationUnit::compile(input).expect("Failed to compile");
        let mut evaluator = ASTEvaluator::new(IoBuffer::with_input(channel));

        evaluator.run(&compilation_unit.ast).expect("Evaluation failed");
        evaluator.io.output().to_vec()
    }

    fn evaluate_err(input: &str, channel: Vec<i32>) -> EvalError {
        let compilation_unit = CompilationUnit::compile(input).expect("Failed to compile");
        let mut evaluator = ASTEvaluator::new(IoBuffer::with_input(channel));

        evaluator.run(&compilation_unit.ast).expect_err("Evaluation should fail")
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_ast("x := 1 + 2 * 3", vec![
            TestASTNode::Assignment("x".to_string()),
            TestASTNode::Binary(BinaryOpKind::Plus),
            TestASTNode::Number(1),
            TestASTNode::Binary(BinaryOpKind::Multiply),
            TestASTNode::Number(2),
            TestASTNode::Number(3),
        ]);
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_ast("x := 1 - 2 - 3", vec![
            TestASTNode::Assignment("x".to_string()),
            TestASTNode::Binary(BinaryOpKind::Minus),
            TestASTNode::Binary(BinaryOpKind::Minus),
            TestASTNode::Number(1),
            TestASTNode::Number(2),
            TestASTNode::Number(3),
        ]);
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_ast("x := (1 + 2) * 3", vec![
            TestASTNode::Assignment("x".to_string()),
            TestASTNode::Binary(BinaryOpKind::Multiply),
            TestASTNode::Parenthesised,
            TestASTNode::Binary(BinaryOpKind::Plus),
            TestASTNode::Number(1),
            TestASTNode::Number(2),
            TestASTNode::Number(3),
        ]);
    }

    #[test]
    fn logical_and_binds_looser_than_comparisons() {
        assert_ast("x := 1 < 2 && 3 < 4", vec![
            TestASTNode::Assignment("x".to_string()),
            TestASTNode::Binary(BinaryOpKind::And),
            TestASTNode::Binary(BinaryOpKind::LessThan),
            TestASTNode::Number(1),
            TestASTNode::Number(2),
            TestASTNode::Binary(BinaryOpKind::LessThan),
            TestASTNode::Number(3),
            TestASTNode::Number(4),
        ]);
    }

    #[test]
    fn logical_or_binds_loosest() {
        assert_ast("x := 1 && 0 !! 1", vec![
            TestASTNode::Assignment("x".to_string()),
            TestASTNode::Binary(BinaryOpKind::Or),
            TestASTNode::Binary(BinaryOpKind::And),
            TestASTNode::Number(1),
            TestASTNode::Number(0),
            TestASTNode::Number(1),
        ]);
    }

    #[test]
    fn statements_sequence_in_source_order() {
        assert_ast("skip; read(n); write(n)", vec![
            TestASTNode::Skip,
            TestASTNode::Read("n".to_string()),
            TestASTNode::Write,
            TestASTNode::Variable("n".to_string()),
        ]);
    }

    #[test]
    fn line_comments_are_ignored() {
        assert_ast("read(n); -- the payload\nwrite(n)", vec![
            TestASTNode::Read("n".to_string()),
            TestASTNode::Write,
            TestASTNode::Variable("n".to_string()),
        ]);
    }

    #[test]
    fn evaluates_read_compute_write() {
        assert_eq!(evaluate("read(x); y := x * 2 + 1; write(y)", vec![20]), vec![41]);
    }

    #[test]
    fn unset_variables_read_as_zero() {
        assert_eq!(evaluate("write(z)", vec![]), vec![0]);
    }

    #[test]
    fn logical_operators_are_bitwise() {
        // 1 & 2 == 0 and 1 | 2 == 3: both interpreters agree with the
        // andl/orl the backend emits
        assert_eq!(evaluate("write(1 && 2); write(1 !! 2)", vec![]), vec![0, 3]);
    }

    #[test]
    fn comparisons_produce_zero_or_one() {
        assert_eq!(evaluate("write(2 > 1); write(2 < 1); write(2 == 2)", vec![]), vec![1, 0, 1]);
    }

    #[test]
    fn arithmetic_wraps_at_word_size() {
        assert_eq!(evaluate("write(2147483647 + 1)", vec![]), vec![-2147483648]);
    }

    #[test]
    fn division_by_zero_fails_the_run() {
        assert_eq!(evaluate_err("write(1 / 0)", vec![]), EvalError::DivisionByZero);
        assert_eq!(evaluate_err("write(1 % 0)", vec![]), EvalError::DivisionByZero);
    }

    #[test]
    fn reading_past_the_channel_fails_the_run() {
        assert_eq!(evaluate_err("read(x); read(y)", vec![1]), EvalError::InputExhausted);
    }
}
