#[cfg(test)]
mod tests {
    use graupel_common::io::IoBuffer;
    use graupel_front::ast::eval::ASTEvaluator;
    use graupel_front::ast::BinaryOpKind;
    use graupel_middle::ir::sm::eval::{SMEvaluator, SmEvalError};
    use graupel_middle::ir::sm::writer::SMWriter;
    use graupel_middle::ir::sm::SmInstruction;

    use crate::common::{compile, lower, program, run_sm};


    #[test]
    fn read_write_lowering() {
        let lowered = lower("read(x); write(x + 1)");

        assert_eq!(lowered.instructions, vec![
            SmInstruction::Read,
            SmInstruction::Store("x".to_string()),
            SmInstruction::Load("x".to_string()),
            SmInstruction::Const(1),
            SmInstruction::Binary(BinaryOpKind::Plus),
            SmInstruction::Write,
        ]);
    }

    #[test]
    fn assignment_lowering_leaves_the_store_last() {
        let lowered = lower("x := 1 + 2");

        assert_eq!(lowered.instructions, vec![
            SmInstruction::Const(1),
            SmInstruction::Const(2),
            SmInstruction::Binary(BinaryOpKind::Plus),
            SmInstruction::Store("x".to_string()),
        ]);
    }

    #[test]
    fn skip_lowers_to_nothing() {
        assert!(lower("skip").is_empty());
    }

    #[test]
    fn operands_lower_left_to_right() {
        let lowered = lower("write(1 - 2 - 3)");

        assert_eq!(lowered.instructions, vec![
            SmInstruction::Const(1),
            SmInstruction::Const(2),
            SmInstruction::Binary(BinaryOpKind::Minus),
            SmInstruction::Const(3),
            SmInstruction::Binary(BinaryOpKind::Minus),
            SmInstruction::Write,
        ]);
    }

    #[test]
    fn writer_renders_the_canonical_forms() {
        let program = lower("read(x); write(x + 1)");
        let mut output = String::new();

        SMWriter::write_program(&mut output, &program).expect("Failed to render");

        assert_eq!(output, "READ\nST x\nLD x\nCONST 1\nBINOP +\nWRITE\n");
    }

    #[test]
    fn evaluator_squares_its_input() {
        assert_eq!(run_sm(&lower("read(x); write(x * x)"), vec![7]), vec![49]);
    }

    #[test]
    fn evaluator_runs_raw_opcodes() {
        let squared = program(vec![
            SmInstruction::Const(5),
            SmInstruction::Store("a".to_string()),
            SmInstruction::Load("a".to_string()),
            SmInstruction::Load("a".to_string()),
            SmInstruction::Binary(BinaryOpKind::Multiply),
            SmInstruction::Write,
        ]);

        assert_eq!(run_sm(&squared, vec![]), vec![25]);
    }

    #[test]
    fn unset_variables_read_as_zero() {
        let load_only = program(vec![
            SmInstruction::Load("ghost".to_string()),
            SmInstruction::Write,
        ]);

        assert_eq!(run_sm(&load_only, vec![]), vec![0]);
    }

    #[test]
    fn write_on_an_empty_stack_underflows() {
        let mut evaluator = SMEvaluator::new(IoBuffer::new());
        let result = evaluator.run(&program(vec![SmInstruction::Write]));

        assert_eq!(result, Err(SmEvalError::StackUnderflow));
    }

    #[test]
    fn division_by_zero_fails_the_run() {
        let mut evaluator = SMEvaluator::new(IoBuffer::new());
        let result = evaluator.run(&program(vec![
            SmInstruction::Const(1),
            SmInstruction::Const(0),
            SmInstruction::Binary(BinaryOpKind::Divide),
        ]));

        assert_eq!(result, Err(SmEvalError::DivisionByZero));
    }

    #[test]
    fn reading_past_the_channel_fails_the_run() {
        let mut evaluator = SMEvaluator::new(IoBuffer::new());
        let result = evaluator.run(&program(vec![SmInstruction::Read]));

        assert_eq!(result, Err(SmEvalError::InputExhausted));
    }

    #[test]
    fn both_interpreters_agree() {
        let sources = [
            "read(x); write(x + 1)",
            "read(x); y := x % 3; write(y * 100 !! 1)",
            "write(1 && 2); write(3 < 4); write(10 / 3)",
        ];

        for source in sources {
            let compilation_unit = compile(source);
            let mut ast_evaluator = ASTEvaluator::new(IoBuffer::with_input(vec![5]));
            ast_evaluator.run(&compilation_unit.ast).expect("AST evaluation failed");

            let sm_output = run_sm(&lower(source), vec![5]);

            assert_eq!(ast_evaluator.io.output(), &sm_output[..], "interpreters disagree on: {}", source);
        }
    }
}
