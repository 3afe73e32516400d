//! Command line temporal memory.
//!
//! Streaming next-step predictor: each input SDR advances the internal
//! state and the predicted next input is printed (an empty line when there
//! is no prediction). An empty input line flushes the sequence state.

use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::repl::{self, Line};
use sdmemory::{Sdr, TemporalMemory};

fn print_help() {
    println!("temporalmemory {}", repl::version_string());
    println!();
    println!("Processes a stream of sparse binary hypervectors, predicting the next input");
    println!("at each step. An empty input line terminates a sequence.");
    println!();
    println!("Command line arguments: temporalmemory n p");
    println!("n is the hypervector dimension    (typical value 1000)");
    println!("p is the target sparse population (typical value 10 to 20)");
    println!();
    println!("Input an SDR (the response is the prediction, or an empty line):");
    println!("99 175 180 222 337 408 416 417 430 525 584 597 617 637 643 685 733 876 917 980");
    println!();
    println!("Further commands: random, help, version, quit");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (n, p) = match args.len() {
        3 => match (args[1].parse::<usize>(), args[2].parse::<usize>()) {
            (Ok(n), Ok(p)) if n > 0 && p > 0 && p <= n => (n, p),
            _ => {
                print_help();
                exit(1);
            }
        },
        _ => {
            print_help();
            exit(1);
        }
    };

    let mut memory = TemporalMemory::new(n, p);
    let mut scratch = Sdr::new(n);
    let mut rng = StdRng::from_entropy();

    let stdin = io::stdin();
    let mut out = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        };

        match repl::parse_line(&line, n, n) {
            Ok(Line::Quit) => exit(0),
            Ok(Line::Version) => println!("{}", repl::version_string()),
            Ok(Line::Help) => print_help(),
            Ok(Line::Random) => {
                scratch.randomize(p, &mut rng);
                emit(&mut out, &scratch);
            }
            Ok(Line::Query(inp)) => {
                let prediction = memory.predict(&inp);
                emit(&mut out, prediction);
            }
            Ok(_) => {
                eprintln!("unexpected input: {}", line);
                exit(5);
            }
            Err(e) => {
                eprintln!("{}", e);
                exit(e.exit_code());
            }
        }
    }
}

fn emit(out: &mut io::Stdout, s: &Sdr) {
    if let Err(e) = repl::print_sdr(out, s) {
        eprintln!("{}", e);
        exit(1);
    }
}
