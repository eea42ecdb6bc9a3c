// rpntty: step-through infix to postfix converter

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rpntty::config::{Config, Mode, USAGE};
use rpntty::converter::{ConvertError, Converter};
use rpntty::eval::RoundTrip;
use rpntty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if config.mode == Mode::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let expressions = match config.load_expressions() {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match config.mode {
        Mode::Print => {
            let failures = print_conversions(&config, &expressions);
            if failures > 0 {
                process::exit(1);
            }
            Ok(())
        }
        _ => run_tui(&config, &expressions[0]),
    }
}

fn converter_for(config: &Config) -> Converter {
    match config.stack_capacity {
        Some(limit) => Converter::with_stack_capacity(limit),
        None => Converter::new(),
    }
}

/// Print one line per expression, returning how many failed
fn print_conversions(config: &Config, expressions: &[String]) -> usize {
    let mut converter = converter_for(config);
    let mut failures = 0;

    for infix in expressions {
        match converter.convert(infix) {
            Ok(postfix) => {
                if config.evaluate {
                    let round_trip = RoundTrip::check(infix, &postfix, &config.bindings);
                    if !round_trip.is_consistent() {
                        failures += 1;
                    }
                    println!("{} -> {}    [{}]", infix, postfix, round_trip);
                } else {
                    println!("{} -> {}", infix, postfix);
                }
            }
            Err(e) => {
                failures += 1;
                println!("{} -> error: {}", infix, e);
            }
        }
    }

    eprintln!(
        "Converted {} of {} expression(s).",
        expressions.len() - failures,
        expressions.len()
    );
    failures
}

fn run_tui(config: &Config, infix: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut converter = converter_for(config).with_trace();

    eprintln!("Converting {}...", infix);
    let outcome = converter.convert(infix);
    match &outcome {
        Ok(postfix) => eprintln!("Converted successfully: {}", postfix),
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            eprintln!("Entering TUI with partial conversion history...");
        }
    }

    let Some(trace) = converter.take_trace() else {
        return Err("conversion trace was not recorded".into());
    };
    eprintln!("Total steps: {}", trace.len());

    let evaluation = match (&outcome, config.evaluate) {
        (Ok(postfix), true) => {
            Some(RoundTrip::check(infix, postfix, &config.bindings).to_string())
        }
        _ => None,
    };

    let mut app = App::new(trace, outcome.map_err(|e: ConvertError| e.to_string()))
        .with_stack_limit(config.stack_capacity);
    if let Some(evaluation) = evaluation {
        app = app.with_evaluation(evaluation);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
