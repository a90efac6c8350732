//! Keypad REPL
//!
//! This demo drives the engine from standard input, the way a keyboard
//! listener would drive it from key events.
//!
//! Key concepts:
//! - Every whitespace-separated word is one key name (`7`, `x`, `Enter`, ...)
//! - Unknown keys are ignored, exactly as the engine ignores them
//! - Set `RUST_LOG=keypad=debug` to watch each transition
//!
//! Run with: cargo run --example keypad_repl

use keypad::{Engine, StepResult};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== Keypad REPL ===");
    println!("Type keys separated by spaces, e.g. `1 2 + 7 x 3 Enter`. Ctrl-D quits.\n");

    let mut engine = Engine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        for key in line?.split_whitespace() {
            match engine.press_key(key) {
                Some(StepResult::Ignored(reasons)) => {
                    for reason in reasons {
                        println!("  ({key} ignored: {reason})");
                    }
                }
                Some(StepResult::Evaluated(Err(err))) => println!("  ({err})"),
                Some(_) => {}
                None => println!("  ({key} is not a keypad key)"),
            }
        }

        println!("{:>24}", engine.history());
        println!("{:>24}", engine.current());
        stdout.flush()?;
    }

    if let Some(value) = engine.tape().last_value() {
        println!("\nLast result: {value}");
    }
    println!("\n=== Session Complete ===");
    Ok(())
}
