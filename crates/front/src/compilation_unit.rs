use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::lexer::Lexer;
use crate::ast::parser::Parser;
use crate::ast::{Ast, StatementKind};
use graupel_common::diagnostics::printer::DiagnosticsPrinter;
use graupel_common::diagnostics::{Diagnostic, DiagnosticsReport, DiagnosticsReportCell};
use graupel_common::text::span::TextSpan;
use graupel_common::text::SourceText;
use graupel_common::token::TokenKind;


pub struct CompilationUnit {
    pub ast: Ast,
    pub diagnostics_report: DiagnosticsReportCell,
}

impl CompilationUnit {
    pub fn compile(input: &str) -> Result<CompilationUnit, DiagnosticsReportCell> {
        let diagnostics_report: DiagnosticsReportCell = Rc::new(RefCell::new(DiagnosticsReport::new()));

        // Lexing
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token() {
            tokens.push(token);
        }

        for token in &tokens {
            if token.kind == TokenKind::Bad {
                if token.span.literal.chars().all(|c| c.is_ascii_digit()) {
                    diagnostics_report.borrow_mut().report_malformed_number(token);
                } else {
                    diagnostics_report.borrow_mut().report_bad_token(token);
                }
            }
        }

        // Parsing
        let mut ast = Ast::new();
        let mut parser = Parser::new(tokens, Rc::clone(&diagnostics_report), &mut ast);
        parser.parse();

        if diagnostics_report.borrow().has_errors() {
            return Err(diagnostics_report);
        }

        Self::warn_when_silent(&ast, &diagnostics_report);

        Ok(CompilationUnit { ast, diagnostics_report })
    }

    /// A program with no `write` compiles to a translation unit that can
    /// never produce output; surface that as a warning rather than an error
    fn warn_when_silent(ast: &Ast, diagnostics_report: &DiagnosticsReportCell) {
        let writes = ast.statements.iter().any(|statement| matches!(statement.kind, StatementKind::Write(_)));

        if !writes {
            let span = ast.statements.iter().last()
                .map(|statement| statement.span.clone())
                .unwrap_or_else(|| TextSpan::new(0, 0, String::new()));

            diagnostics_report.borrow_mut().report_program_writes_nothing(span);
        }
    }

    pub fn output_diagnostics(text: &SourceText, diagnostics_report: &DiagnosticsReportCell) {
        let report = diagnostics_report.borrow();
        let errors: Vec<Diagnostic> = report.errors().cloned().collect();
        DiagnosticsPrinter::new(text, &errors).print();
    }

    pub fn output_warnings(text: &SourceText, diagnostics_report: &DiagnosticsReportCell) {
        let report = diagnostics_report.borrow();
        let warnings: Vec<Diagnostic> = report.warnings().cloned().collect();
        DiagnosticsPrinter::new(text, &warnings).print();
    }
}
