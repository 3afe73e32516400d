//! Command line monadic memory.
//!
//! Auto-associative clean-up memory: an input SDR is mapped to its stored
//! canonical form, or admitted as a new item.

use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::repl::{self, Line};
use sdmemory::{MonadicMemory, Sdr};

fn print_help() {
    println!("monadicmemory {}", repl::version_string());
    println!();
    println!("Stores autoassociations of sparse binary hypervectors; can be used as a");
    println!("clean-up memory or as a clustering/pooling algorithm.");
    println!();
    println!("Command line arguments: monadicmemory n p");
    println!("n is the hypervector dimension    (typical value 1000)");
    println!("p is the target sparse population (typical value 10 to 20)");
    println!();
    println!("Input an SDR:");
    println!("29 129 238 356 451 457 589 620 657 758");
    println!();
    println!("Further commands: random, help, version, quit");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (n, p) = match args.len() {
        3 => match (args[1].parse::<usize>(), args[2].parse::<usize>()) {
            (Ok(n), Ok(p)) if n >= 2 && p > 0 && p <= n => (n, p),
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

    let mut memory = MonadicMemory::new(n, p);
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
                let canonical = memory.recall(&inp).clone();
                emit(&mut out, &canonical);
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
