use std::{fs, io};

use clap::Parser;
use minilisp::{RunOptions, run};

/// minilisp interprets programs written in a small Lisp-like expression
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minilisp to read the program from the file named by `contents`.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last top-level
    /// expression of the program.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Stops at the first runtime error and exits with a failure status.
    #[arg(short, long)]
    strict: bool,

    /// The program text, or a path when `--file` is given. The program is
    /// read from standard input when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let script = match (args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(&path).unwrap_or_else(|_| {
                                                          eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                          std::process::exit(1);
                                                      }),
        (Some(script), false) => script,
        (None, _) => io::read_to_string(io::stdin()).unwrap_or_else(|e| {
                                                       eprintln!("Failed to read the program from standard input: {e}");
                                                       std::process::exit(1);
                                                   }),
    };

    let options = RunOptions { pipe_mode: args.pipe_mode,
                               strict:    args.strict, };

    if let Err(e) = run(&script,
                        &mut io::stdout().lock(),
                        &mut io::stderr().lock(),
                        &options)
    {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
