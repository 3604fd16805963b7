use std::{env, fs::read_to_string, path::PathBuf, process, rc::Rc, time::Instant};

use dspc::{
    ast::types::TypeId, format_error, lexer::lexer::tokenize, parser::parser::parse,
    symbols::symbols::GlobalScope,
};
use log::info;

/// Host symbols every DSP function can use.
fn builtin_symbols() -> GlobalScope {
    let mut globals = GlobalScope::new();

    for function in ["sin", "cos", "tan", "abs", "sqrt", "exp", "pow", "min", "max", "fmod"] {
        globals.declare(function, TypeId::Float, true);
    }

    globals.declare("sampleRate", TypeId::Double, true);
    globals.declare("numChannels", TypeId::Integer, true);

    globals
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("dspc"));
        process::exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args[1].clone());

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &file_name, &file_contents));
            process::exit(1);
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let symbols = builtin_symbols();

    let functions = match parse(tokens, Rc::new(file_name.clone()), &symbols) {
        Ok(functions) => functions,
        Err(error) => {
            eprint!("{}", format_error(&error, &file_name, &file_contents));
            process::exit(1);
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    for function in functions {
        let parameters = function
            .parameters
            .iter()
            .map(|parameter| format!("{} {}", parameter.type_id, parameter.name))
            .collect::<Vec<_>>();

        println!(
            "{} {}({})",
            function.return_type,
            function.name.name,
            parameters.join(", ")
        );
        println!("{}", pretty_print(format!("{:?}", function.body.body)));
    }

    info!("Total time: {:?}", start.elapsed());
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
