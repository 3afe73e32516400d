//! Command line sparse associative memory.
//!
//! Hetero-associative memory for hypervector dimensions up to 20,000. The
//! target population of recalled values is the running average of the
//! stored value populations.

use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::repl::{self, Line};
use sdmemory::{Sdr, SparseAssociativeMemory, NMAX};

fn print_help() {
    println!("sparseassociativememory {}", repl::version_string());
    println!();
    println!("Stores heteroassociations x->y of sparse binary hypervectors and recalls y");
    println!("for a given x. The target population of recalled values is the running");
    println!("average of the stored value populations.");
    println!();
    println!("Command line arguments:");
    println!();
    println!("sparseassociativememory       dynamic SDR dimension   (n <= {})", NMAX);
    println!("sparseassociativememory <n>   fixed SDR dimension n   (n <= {})", NMAX);
    println!();
    println!("Store x->y:");
    println!("1 20 195 355 371 471 603 814 911 999, 13 29 41 182 590 711 714 773 925 967");
    println!();
    println!("Recall y:");
    println!("1 20 195 355 371 471 603 814");
    println!();
    println!("Further commands: random, help, version, quit");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let n = match args.len() {
        1 => NMAX,
        2 => match args[1].parse::<usize>() {
            Ok(n) if n >= 2 => n,
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

    if n > NMAX {
        eprintln!("vector dimension {} exceeds maximum value {}", n, NMAX);
        exit(20);
    }

    let mut memory = SparseAssociativeMemory::new(n);
    let mut result = Sdr::new(n);
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
                result.randomize(memory.target_population(), &mut rng);
                emit(&mut out, &result);
            }
            Ok(Line::Query(x)) => {
                memory.read(&x, &mut result);
                emit(&mut out, &result);
            }
            Ok(Line::Store(x, y)) => memory.write(&x, &y),
            Ok(_) => {
                eprintln!("invalid input");
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
