use colored::*;
use std::{
    fs,
    io::{self, Read},
    process,
};
use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

extern crate frontend;
extern crate runtime;

use frontend::parser::Parser;
use runtime::{
    interpreter::Interpreter,
    values::descriptor,
};


// --------
//   CLI
// --------

#[derive(ClapParser)]
#[command(version)]
#[command(about="Evaluates an ESTree program and prints its result descriptor")]
struct CLI {
    /// Program tree as JSON. Read from standard input if neither this nor --file is given
    program: Option<String>,

    #[arg(short, long, conflicts_with = "program")]
    /// Path to a file holding the program tree
    file: Option<String>,

    /// Fail on any noise before the program tree instead of skipping it
    #[arg(short, long)]
    strict: bool,

    /// Prints the AST tree on stderr
    #[arg(short, long)]
    ast_print: bool,

    /// Debug logs on stderr. RUST_LOG takes precedence when set
    #[arg(short, long)]
    verbose: bool,
}


fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Stdout is reserved to the result line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(cli: &CLI) -> Result<String, String> {
    if let Some(program) = &cli.program {
        return Ok(program.clone());
    }

    match &cli.file {
        Some(path) => {
            debug!(path = %path, "reading program file");
            fs::read_to_string(path).map_err(|e| format!("can't open program file {}: {e}", path.green()))
        }
        None => {
            let mut data = String::new();
            io::stdin()
                .read_to_string(&mut data)
                .map_err(|e| format!("can't read standard input: {e}"))?;

            Ok(data)
        }
    }
}

fn main() {
    // Manage command line args
    let cli = CLI::parse();

    init_logging(cli.verbose);

    let source = match read_source(&cli) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            process::exit(1);
        }
    };

    let parser = if cli.strict { Parser::strict() } else { Parser::default() };

    let program = match parser.build_ast(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if cli.ast_print {
        eprintln!("\n{}\n{:#?}", "Program tree:".cyan().bold(), program);
    }

    let interp = Interpreter {};
    let result = interp.execute_program(&program);

    if let Err(e) = &result {
        debug!(kind = ?e.kind(), error = %e, "program ended with an error");
    }

    println!("{}", descriptor::encode(&result));
}
