use std::io::{self, BufRead, Write};

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

mod command;

use command::{evaluate, tokenize, CommandError};

const INTRO_MSG: &str = "This is a big integer calculator.  Values are arbitrary-precision
signed integers implemented with two's-complement binary arithmetic.
Enter 'h' for help, 'q' to quit.";

const HELP_MSG: &str = "There are four arithmetic operations available: addition (+),
subtraction (-), multiplication (*), and factorial (!).
Other than the factorial, all the operations take 2 terms.
Factorial takes 1 term before the operator.
Factorial of zero or negative integers is explicitly defined as 1.
Spaces are ignored.";

const PROMPT: &str = "ENTER COMMAND> ";

#[derive(Parser, Debug)]
#[command(
    about = "Arbitrary-precision integer calculator",
    long_about = "Evaluates big-integer expressions given on the command line, or \
                  reads commands interactively from standard input when none are given."
)]
struct Cli {
    /// Expressions to evaluate instead of entering the interactive loop
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,
}

fn run_command(line: &str) -> Result<String, CommandError> {
    let terms = tokenize(line)?;
    event!(Level::DEBUG, "command tokenized as {:?}", &terms);
    evaluate(&terms).map(|value| value.to_string())
}

fn report_error<E: std::error::Error>(e: &E) {
    let choice = if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    // Failing to colour the message is not a reason to suppress it.
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(&mut stderr, "{e}");
    let _ = stderr.reset();
}

fn interaction_loop() -> Result<(), io::Error> {
    let interactive = atty::is(atty::Stream::Stdout);
    if interactive {
        println!("{INTRO_MSG}");
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        if interactive {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(()); // end of input
        }
        match line.trim() {
            "" => (),
            "q" | "Q" => {
                return Ok(());
            }
            "h" | "H" => {
                println!("{HELP_MSG}");
            }
            command => match run_command(command) {
                Ok(result) => {
                    println!("{result}");
                }
                Err(e) => {
                    report_error(&e);
                }
            },
        }
    }
}

fn run_calculator() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    if cli.expressions.is_empty() {
        interaction_loop()?;
        return Ok(());
    }

    for expression in &cli.expressions {
        match run_command(expression) {
            Ok(result) => {
                println!("{result}");
            }
            Err(e) => {
                report_error(&e);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            event!(Level::ERROR, "calculator stopped: {}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
