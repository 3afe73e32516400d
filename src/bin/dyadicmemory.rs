//! Command line dyadic memory.
//!
//! Stores associations `x -> y` of sparse binary hypervectors and recalls
//! `y` for a given `x`. See `help` for the line protocol.

use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::repl::{self, Line};
use sdmemory::{DyadicStore, Sdr};

fn print_help() {
    println!("dyadicmemory {}", repl::version_string());
    println!();
    println!("Sparse distributed memory for storing associations x->y of sparse binary hypervectors.");
    println!("A hypervector of dimension n is given by an ordered set of p integers from 1 to n which represent its \"1\" bits.");
    println!();
    println!("Command line arguments:");
    println!();
    println!("dyadicmemory n p       (n is the dimension of x and y, p is the target sparse population of y)");
    println!("dyadicmemory nx ny p   (nx and ny are the dimensions of x and y, p is the target sparse population of y)");
    println!();
    println!("Store x->y:");
    println!("1 20 195 355 371 471 603 814 911 999, 13 29 41 182 590 711 714 773 925 967");
    println!();
    println!("Recall y for a given x:");
    println!("1 20 195 355 371 471 603 814 911 999");
    println!();
    println!("Delete x->y from memory:");
    println!("- 1 20 195 355 371 471 603 814 911 999, 13 29 41 182 590 711 714 773 925 967");
    println!();
    println!("Further commands: random, help, version, quit");
}

fn parse_dim(arg: &str) -> Option<usize> {
    arg.parse().ok().filter(|&v| v > 0)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (nx, ny, p) = match args.len() {
        3 => match (parse_dim(&args[1]), parse_dim(&args[2])) {
            (Some(n), Some(p)) if n >= 2 && p <= n => (n, n, p),
            _ => {
                print_help();
                exit(1);
            }
        },
        4 => match (
            parse_dim(&args[1]),
            parse_dim(&args[2]),
            parse_dim(&args[3]),
        ) {
            (Some(nx), Some(ny), Some(p)) if nx >= 2 && p <= ny => (nx, ny, p),
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

    let mut memory = DyadicStore::with_shape(nx, ny, p);
    let mut result = Sdr::new(ny);
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

        match repl::parse_line(&line, nx, ny) {
            Ok(Line::Quit) => exit(0),
            Ok(Line::Version) => println!("{}", repl::version_string()),
            Ok(Line::Help) => print_help(),
            Ok(Line::Random) => {
                result.randomize(p, &mut rng);
                emit(&mut out, &result);
            }
            Ok(Line::Query(x)) => {
                memory.read(&x, &mut result);
                emit(&mut out, &result);
            }
            Ok(Line::Store(x, y)) => memory.write(&x, &y),
            Ok(Line::Delete(x, y)) => memory.delete(&x, &y),
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
