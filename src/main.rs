use std::{fs, process};

use clap::Parser as _;
use quasi::{
    error::InterpreterError,
    evaluate_expanded, expand,
    interpreter::{
        environment::{Env, Environment},
        parser::core::Parser,
        value::core::Value,
    },
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// quasi is a small dynamic scripting language with C-like syntax and
/// quote/unquote macros.
///
/// Without a script or a file, an interactive prompt is started.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the script from this file.
    #[arg(short, long, value_name = "PATH", conflicts_with = "contents")]
    file: Option<String>,

    /// Prints the program after macro expansion.
    #[arg(short, long)]
    show_ast: bool,

    /// The script text.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let script = match (args.file, args.contents) {
        (Some(path), _) => fs::read_to_string(&path).unwrap_or_else(|e| {
                               eprintln!("Failed to read the input file '{path}': {e}");
                               process::exit(1);
                           }),
        (None, Some(contents)) => contents,
        (None, None) => {
            repl(args.show_ast);
            return;
        },
    };

    match execute(&script, &Environment::new_global(), args.show_ast) {
        Ok(value) => print_value(&value),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Parses, expands and evaluates `source` in `env`.
fn execute(source: &str, env: &Env, show_ast: bool) -> Result<Value, InterpreterError> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    let errors = parser.into_errors();
    if !errors.is_empty() {
        return Err(InterpreterError::Parse(errors));
    }

    let program = expand(program, env)?;
    if show_ast {
        println!("---- expanded program ----");
        println!("{program}");
        println!("---- end ----");
    }

    Ok(evaluate_expanded(&program, env))
}

fn print_value(value: &Value) {
    if !matches!(value, Value::Null) {
        println!("{value}");
    }
}

fn repl(show_ast: bool) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the prompt: {e}");
            process::exit(1);
        },
    };
    let env = Environment::new_global();

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match execute(&line, &env, show_ast) {
                    Ok(value) => print_value(&value),
                    Err(e) => println!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("prompt error: {e}");
                break;
            },
        }
    }
}
