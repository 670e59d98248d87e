// ABOUTME: CLI and REPL driver for the Liz interpreter

mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod reader;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::{WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Environment;
use parser::Node;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use std::rc::Rc;
use value::Value;

/// Interpreter for the Liz Lisp dialect
#[derive(Parser, Debug)]
#[command(name = "liz")]
#[command(version = config::VERSION)]
#[command(about = "An interpreter for the Liz Lisp dialect")]
struct CliArgs {
    /// Source files to load and evaluate (starts a REPL when omitted)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

const HISTORY_FILE: &str = ".liz_history";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    if !args.files.is_empty() {
        for file in &args.files {
            let load_args = vec![Value::Str(file.display().to_string())];
            if let Err(e) = builtins::io::builtin_load(&env, load_args) {
                println!("Error: {}", e);
            }
        }
        return Ok(());
    }

    run_repl(&env)
}

/// Interactive read-eval-print loop; a line containing `;quit` ends it
fn run_repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let repl_config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(repl_config)
        .map_err(|e| format!("Failed to initialize REPL: {}", e))?;
    let _ = rl.load_history(HISTORY_FILE);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.contains(";quit") {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                match parser::parse(&line) {
                    Ok(root) => print_top_level(env, &root),
                    Err(e) => eprintln!("Parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}

/// Evaluate and print every top-level expression of a parsed line. An
/// error in one expression does not stop the rest.
fn print_top_level(env: &Rc<Environment>, root: &Node) {
    for result in reader::read_program(root) {
        match result.and_then(|expr| eval::eval(env, expr)) {
            Ok(value) => println!("{}", value),
            Err(e) => println!("Error: {}", e),
        }
    }
}
