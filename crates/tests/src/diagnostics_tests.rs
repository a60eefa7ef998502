use graupel_common::diagnostics::Diagnostic;
use graupel_common::text::span::TextSpan;


#[cfg(test)]
mod tests {
    use graupel_front::compilation_unit::CompilationUnit;

    use super::*;


    /// Expected diagnostics are marked in the input with `«` and `»`
    /// around the offending span, paired positionally with `messages`
    struct DiagnosticsVerifier {
        expected: Vec<Diagnostic>,
        actual: Vec<Diagnostic>,
    }

    impl DiagnosticsVerifier {
        pub fn new(input: &str, messages: Vec<&str>) -> Self {
            let msg_len = messages.len();
            let expected = Self::parse_input(input, messages);
            assert_eq!(expected.len(), msg_len);
            let actual = Self::compile(input);

            Self { expected, actual }
        }

        fn compile(input: &str) -> Vec<Diagnostic> {
            let raw_text = Self::get_raw_text(input);

            match CompilationUnit::compile(&raw_text) {
                Ok(compilation_unit) => compilation_unit.diagnostics_report.borrow().errors().cloned().collect(),
                Err(e) => e.borrow().errors().cloned().collect(),
            }
        }

        fn get_raw_text(input: &str) -> String {
            input.replace("«", "").replace("»", "")
        }

        fn parse_input(input: &str, messages: Vec<&str>) -> Vec<Diagnostic> {
            let raw_text = Self::get_raw_text(input);
            let mut start_index_stack = vec![];
            let mut current_position = 0;
            let mut diagnostics = vec![];

            for c in input.chars() {
                match c {
                    '«' => {
                        start_index_stack.push(current_position);
                    }
                    '»' => {
                        let start_index = start_index_stack.pop().unwrap();
                        let end_index = current_position;
                        let literal = &raw_text[start_index..end_index];
                        let span = TextSpan::new(start_index, end_index, literal.to_string());
                        let message = messages[diagnostics.len()].to_string();
                        diagnostics.push(Diagnostic::error(message, span));
                    }
                    _ => {
                        current_position += 1;
                    }
                };
            }

            diagnostics
        }

        pub fn verify(&self) {
            assert_eq!(
                self.expected.len(), self.actual.len(),
                "Expected {} diagnostics, but got {}.\nActual: {:?}",
                self.expected.len(), self.actual.len(), self.actual
            );

            for (expected, actual) in self.expected.iter().zip(self.actual.iter()) {
                assert_eq!(expected.message, actual.message);
                assert_eq!(expected.span.start, actual.span.start);
                assert_eq!(expected.span.end, actual.span.end);
                assert_eq!(expected.span.literal, actual.span.literal);
            }
        }
    }

    fn assert_diagnostics(input: &str, messages: Vec<&str>) {
        let verifier = DiagnosticsVerifier::new(input, messages);
        verifier.verify();
    }

    #[test]
    fn unrecognised_token() {
        assert_diagnostics("«?»", vec!["Unrecognised token '?'"]);
    }

    #[test]
    fn number_is_not_a_statement() {
        assert_diagnostics("skip; «5»", vec!["Expected a statement but found <Number>"]);
    }

    #[test]
    fn missing_right_parenthesis() {
        assert_diagnostics("write(5«;»", vec!["Expected <)> but found <Semicolon>"]);
    }

    #[test]
    fn missing_assignment_operator() {
        assert_diagnostics("x «5»«;»", vec![
            "Expected <:=> but found <Number>",
            "Expected an expression but found <Semicolon>",
        ]);
    }

    #[test]
    fn number_wider_than_a_word() {
        assert_diagnostics("x := «99999999999»«;»", vec![
            "Malformed integer literal '99999999999'",
            "Expected an expression but found <Semicolon>",
        ]);
    }

    #[test]
    fn program_without_write_warns() {
        let compilation_unit = CompilationUnit::compile("x := 1").expect("Failed to compile");
        let report = compilation_unit.diagnostics_report.borrow();

        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);

        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.message, "Program never writes; compiled output will be silent");
    }

    #[test]
    fn clean_programs_carry_no_diagnostics() {
        let compilation_unit = CompilationUnit::compile("read(n); write(n * n)").expect("Failed to compile");
        let report = compilation_unit.diagnostics_report.borrow();

        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 0);
    }
}
