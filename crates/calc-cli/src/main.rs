use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

use calc_interpreter::{CalcError, Session};
use clap::Parser;

/// calc evaluates small arithmetic expressions with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a file of expressions, one per line.
    #[arg(short, long)]
    file: bool,

    /// Print results and diagnostics as JSON objects.
    #[arg(short, long)]
    json: bool,

    /// Expression to evaluate; reads a REPL from stdin when omitted.
    input: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut session = Session::new();

    let ok = match args.input {
        Some(input) if args.file => {
            let script = fs::read_to_string(&input).unwrap_or_else(|_| {
                eprintln!(
                    "Failed to read the input file '{input}'. Perhaps this file does not exist?"
                );
                std::process::exit(1);
            });
            run_script(&mut session, &script, args.json)
        }
        Some(input) => report(session.eval(&input), args.json),
        None => repl(&mut session, args.json),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Evaluate every non-empty line of a script in one session and print the
/// last value. Stops at the first error.
fn run_script(session: &mut Session, script: &str, json: bool) -> bool {
    let mut last = None;
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        match session.eval(line) {
            Ok(value) => last = Some(value),
            Err(err) => return report(Err(err), json),
        }
    }
    match last {
        Some(value) => report(Ok(value), json),
        None => true,
    }
}

/// Line-oriented REPL: one expression per line, results on stdout, errors
/// on stderr. The environment persists for the whole run, and an error in
/// one line does not end the session.
fn repl(session: &mut Session, json: bool) -> bool {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read line: {err}");
                return false;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        report(session.eval(&line), json);
    }
    true
}

/// Print one evaluation outcome. Returns `true` on success.
fn report(result: Result<f64, CalcError>, json: bool) -> bool {
    match result {
        Ok(value) => {
            if json {
                println!("{}", serde_json::json!({ "ok": value }));
            } else {
                println!("{value}");
            }
            true
        }
        Err(err) => {
            if json {
                let diag = err.to_diagnostic();
                let rendered = serde_json::to_string(&diag).unwrap_or_else(|_| err.to_string());
                eprintln!("{rendered}");
            } else {
                eprintln!("{err}");
            }
            false
        }
    }
}
