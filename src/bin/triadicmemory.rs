//! Command line triadic memory.
//!
//! Stores triples `{x, y, z}` of sparse binary hypervectors and recalls one
//! part of a triple from the other two: `{x,y,_}` recalls the third part,
//! `{x,_,z}` the second, `{_,y,z}` the first.

use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::repl::{self, Axis, Line};
use sdmemory::{Sdr, TriadicStore};

fn print_help() {
    println!("triadicmemory {}", repl::version_string());
    println!();
    println!("Stores triples {{x,y,z}} of sparse binary hypervectors and recalls one part");
    println!("of a triple by specifying the other two parts.");
    println!();
    println!("Command line arguments: triadicmemory n p");
    println!("n is the hypervector dimension, typically 1000");
    println!("p is the target sparse population, typically 10");
    println!();
    println!("Store {{x,y,z}}:");
    println!("{{37 195 355 371 471 603 747 914 943 963, 73 252 418 439 461 469 620 625 902 922, 60 91 94 128 249 517 703 906 962 980}}");
    println!();
    println!("Recall z:   {{x, y, _}}");
    println!("Recall y:   {{x, _, z}}");
    println!("Recall x:   {{_, y, z}}");
    println!();
    println!("Delete {{x,y,z}}:");
    println!("-{{37 195 355 371 471 603 747 914 943 963, 73 252 418 439 461 469 620 625 902 922, 60 91 94 128 249 517 703 906 962 980}}");
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

    let mut memory = TriadicStore::new(n, p);
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
                result.randomize(p, &mut rng);
                emit(&mut out, &result);
            }
            Ok(Line::TripleStore(x, y, z)) => memory.write(&x, &y, &z),
            Ok(Line::TripleDelete(x, y, z)) => memory.delete(&x, &y, &z),
            Ok(Line::TripleQuery(axis, a, b)) => {
                match axis {
                    Axis::X => memory.read_x(&mut result, &a, &b),
                    Axis::Y => memory.read_y(&a, &mut result, &b),
                    Axis::Z => memory.read_z(&a, &b, &mut result),
                }
                emit(&mut out, &result);
            }
            Ok(_) => {
                eprintln!("expecting triple of the form {{x,y,z}}, found {}", line);
                exit(4);
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
