use anyhow::{anyhow, Result};
use std::env;


/// Configuration for what the driver shows and emits
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub show_ast: bool,
    pub show_sm: bool,
    pub eval_ast: bool,
    pub eval_sm: bool,
    pub generate_assembly: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_ast: false,
            show_sm: false,
            eval_ast: false,
            eval_sm: false,
            generate_assembly: true,
        }
    }
}

/// Parsed command line arguments
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub file_path: String,
    pub output_config: OutputConfig,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();

        if args.len() < 2 {
            Self::print_usage(&args[0]);
            return Err(anyhow!("Please provide a .gr file to compile"));
        }

        // Check for help first
        for arg in args.iter().skip(1) {
            if arg == "--help" || arg == "-h" {
                Self::print_usage(&args[0]);
                std::process::exit(0);
            }
        }

        let file_path = args[1].clone();

        // Check if the file has the correct extension
        if !file_path.ends_with(".gr") {
            return Err(anyhow!("File must have .gr extension"));
        }

        let mut output_config = OutputConfig::default();

        // Parse flags
        for arg in args.iter().skip(2) {
            match arg.as_str() {
                "--ast" => output_config.show_ast = true,
                "--sm" => output_config.show_sm = true,
                "--eval" => output_config.eval_ast = true,
                "--eval-sm" => output_config.eval_sm = true,
                "--no-asm" => output_config.generate_assembly = false,
                flag => {
                    eprintln!("Unknown flag: {}", flag);
                    Self::print_usage(&args[0]);
                    return Err(anyhow!("Unknown command line flag: {}", flag));
                }
            }
        }

        Ok(Self {
            file_path,
            output_config,
        })
    }

    /// Print usage information
    fn print_usage(program_name: &str) {
        eprintln!("Usage: {} <file.gr> [OPTIONS]", program_name);
        eprintln!();
        eprintln!("OPTIONS:");
        eprintln!("  --ast           Show the parsed AST");
        eprintln!("  --sm            Show the stack-machine program");
        eprintln!("  --eval          Interpret the AST (reads integers from stdin)");
        eprintln!("  --eval-sm       Interpret the stack-machine program");
        eprintln!("  --no-asm        Don't write the .s file (default: write)");
        eprintln!("  --help, -h      Show this help message");
        eprintln!();
        eprintln!("EXAMPLES:");
        eprintln!("  {} program.gr                # Compile to program.s", program_name);
        eprintln!("  {} program.gr --sm --no-asm  # Show the stack machine only", program_name);
        eprintln!("  {} program.gr --eval         # Run the program directly", program_name);
    }
}
