use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use frontend::{
    config::TraceConfig, format_error, lexer::lexer::Lexer, parser::parser::Parser,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map_or("frontend", |a| a.as_str()));
        return ExitCode::from(2);
    }

    let file_path = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map_or_else(|| file_path.clone(), |name| name.to_string_lossy().into_owned());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::from(2);
        }
    };

    let config = TraceConfig::from_env();

    let start = Instant::now();
    let mut parser = Parser::with_config(Lexer::new(source.clone(), Some(file_name)), &config);
    let (program, errors) = parser.parse_program();

    println!("Parsed in {:?}", start.elapsed());

    println!("{}", program);

    if errors.is_empty() {
        return ExitCode::SUCCESS;
    }

    for error in &errors {
        print!("{}", format_error(error, &source));
    }
    println!("{} error(s) found", errors.len());

    ExitCode::from(1)
}
