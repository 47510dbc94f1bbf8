use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead},
    process,
};

use ember::{
    errors::errors::{Error, ErrorTip},
    get_char_column, get_line_at_position,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_lines(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("usage: {} [FILE]", args[0]);
            process::exit(2);
        }
    }
}

fn run_file(file_path: &str) {
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    if !run(&source, file_path) {
        process::exit(1);
    }
}

fn run_lines() {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                run(&line, "<stdin>");
            }
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                process::exit(1);
            }
        }
    }
}

/// Parses one chunk of source and prints either the program or its errors.
fn run(source: &str, file: &str) -> bool {
    let (program, errors) = parse(source);

    if errors.is_empty() {
        println!("{}", program);
        return true;
    }

    for error in errors {
        display_error(&error, source, file);
    }
    false
}

fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: expected next token to be =, but got INT
        -> main.em
          |
        1 | let x 5;
          | ------^
    */

    let span = error.get_span();
    let (line, line_text, line_pos) = get_line_at_position(source, span.start);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error);
    } else {
        println!("Error: {} ({})", error, error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    // Leading whitespace is ASCII, so its byte count is also its char count.
    let column = get_char_column(line_text, line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    // EOF has an empty span but still gets one caret.
    let width = if span.is_empty() {
        1
    } else {
        source
            .get(span.start..span.end)
            .map_or(span.len(), |text| text.chars().count())
    };

    println!(
        "{:>padding$} {:->arrows$}{}",
        "|",
        "^",
        "^".repeat(width.saturating_sub(1))
    );
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (trimmed, string.len() - trimmed.len())
}
