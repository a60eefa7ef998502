use std::{fs::File, io::Read, io::Write, process::ExitCode};
use termion::{
    color::{Fg, Red, Yellow, Reset},
    style::{Bold, Reset as StyleReset},
};

use graupel_codegen::backends::x86::X86Codegen;
use graupel_common::io::IoBuffer;
use graupel_common::text::SourceText;
use graupel_front::ast::eval::ASTEvaluator;
use graupel_front::ast::printer::ASTPrinter;
use graupel_front::compilation_unit::CompilationUnit;
use graupel_middle::ir::sm::builder::SMBuilder;
use graupel_middle::ir::sm::eval::SMEvaluator;
use graupel_middle::ir::sm::writer::SMWriter;

use anyhow::{anyhow, Result};

mod cli;
use cli::CliArgs;


fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse()?;
    let config = &args.output_config;

    // Read the input file
    let input = std::fs::read_to_string(&args.file_path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", args.file_path, e))?;

    // Compile the input code
    let source_text = SourceText::new(input.clone());
    let compilation_unit = CompilationUnit::compile(&input)
        .map_err(|err| {
            CompilationUnit::output_diagnostics(&source_text, &err);

            let error_count = err.borrow().error_count();
            if error_count == 1 {
                anyhow!(
                    "{}{}error{}{}: could not compile `{}` due to {} previous error",
                    Fg(Red), Bold, StyleReset, Fg(Reset),
                    args.file_path,
                    error_count
                )
            } else {
                anyhow!(
                    "{}{}error{}{}: could not compile `{}` due to {} previous errors",
                    Fg(Red), Bold, StyleReset, Fg(Reset),
                    args.file_path,
                    error_count
                )
            }
        })?;

    CompilationUnit::output_warnings(&source_text, &compilation_unit.diagnostics_report);
    let warning_count = compilation_unit.diagnostics_report.borrow().warning_count();
    if warning_count == 1 {
        println!(
            "{}{}warning{}{}: `{}` generated 1 warning\n",
            Fg(Yellow), Bold, StyleReset, Fg(Reset),
            args.file_path
        );
    } else if warning_count > 1 {
        println!(
            "{}{}warning{}{}: `{}` generated {} warnings\n",
            Fg(Yellow), Bold, StyleReset, Fg(Reset),
            args.file_path,
            warning_count
        );
    }

    if config.show_ast {
        println!("=== AST ===");
        let mut printer = ASTPrinter::new();
        compilation_unit.ast.visit(&mut printer);
        println!("{}", printer.result);
    }

    // Lower to the stack machine
    let sm_builder = SMBuilder::new();
    let sm_program = sm_builder.build(&compilation_unit.ast);

    if config.show_sm {
        println!("=== Stack machine ===");
        let mut sm_output = String::new();
        SMWriter::write_program(&mut sm_output, &sm_program)?;
        println!("{}", sm_output);
    }

    if config.eval_ast {
        let io = read_input_channel()?;
        let mut evaluator = ASTEvaluator::new(io);

        evaluator.run(&compilation_unit.ast)
            .map_err(|err| anyhow!("Evaluation failed: {}", err))?;

        for value in evaluator.io.output() {
            println!("{}", value);
        }

        return Ok(());
    }

    if config.eval_sm {
        let io = read_input_channel()?;
        let mut evaluator = SMEvaluator::new(io);

        evaluator.run(&sm_program)
            .map_err(|err| anyhow!("Evaluation failed: {}", err))?;

        for value in evaluator.io.output() {
            println!("{}", value);
        }

        return Ok(());
    }

    // Asm codegen
    if config.generate_assembly {
        let mut codegen = X86Codegen::new();
        codegen.generate(&sm_program)?;
        let asm_output = codegen.asm_output()?;

        let output_name = format!("{}.s", args.file_path.replace(".gr", ""));
        File::create(&output_name)?.write_all(asm_output.as_bytes())?;
        println!("Assembly written to: {}", output_name);
    }

    Ok(())
}

/// Reads whitespace-separated integers from stdin into the input channel
/// the interpreters consume
fn read_input_channel() -> Result<IoBuffer> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    let mut values = Vec::new();
    for word in raw.split_whitespace() {
        let value = word.parse::<i32>()
            .map_err(|_| anyhow!("Input channel expects integers, found '{}'", word))?;
        values.push(value);
    }

    Ok(IoBuffer::with_input(values))
}
