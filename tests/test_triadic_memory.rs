//! Integration tests for the triadic memory.
//!
//! Covers three-axis recall symmetry at a realistic dimension, the
//! bracketed reference scenario, deletes, and both cell representations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sdmemory::{CellKind, Sdr, TriadicStore};

fn random_sdr(n: usize, p: usize, rng: &mut StdRng) -> Sdr {
    let mut s = Sdr::new(n);
    s.randomize(p, rng);
    s
}

#[test]
fn test_reference_triple_recall() {
    // wire positions 1..30 are internal indices 0..29; bit cells keep the
    // 1000-dimensional tensor at an eighth of the counter footprint
    let mut memory = TriadicStore::new_bit(1000, 10);

    let x = Sdr::from_indices(1000, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let y = Sdr::from_indices(1000, &[10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
    let z = Sdr::from_indices(1000, &[20, 21, 22, 23, 24, 25, 26, 27, 28, 29]);

    memory.write(&x, &y, &z);

    let mut recalled = Sdr::new(1000);
    memory.read_x(&mut recalled, &y, &z);
    assert_eq!(recalled, x);
    assert_eq!(recalled.to_string(), "1 2 3 4 5 6 7 8 9 10");
}

#[test]
fn test_recall_symmetry_all_axes() {
    let mut rng = StdRng::seed_from_u64(70);
    let mut memory = TriadicStore::new(200, 10);

    let x = random_sdr(200, 10, &mut rng);
    let y = random_sdr(200, 10, &mut rng);
    let z = random_sdr(200, 10, &mut rng);
    memory.write(&x, &y, &z);

    let mut out = Sdr::new(200);
    memory.read_x(&mut out, &y, &z);
    assert_eq!(out, x);
    memory.read_y(&x, &mut out, &z);
    assert_eq!(out, y);
    memory.read_z(&x, &y, &mut out);
    assert_eq!(out, z);
}

#[test]
fn test_many_triples_with_shared_components() {
    let mut rng = StdRng::seed_from_u64(71);
    let mut memory = TriadicStore::new(150, 8);

    // several triples share the same x; y disambiguates
    let x = random_sdr(150, 8, &mut rng);
    let pairs: Vec<(Sdr, Sdr)> = (0..10)
        .map(|_| (random_sdr(150, 8, &mut rng), random_sdr(150, 8, &mut rng)))
        .collect();

    for (y, z) in &pairs {
        memory.write(&x, y, z);
    }

    let mut out = Sdr::new(150);
    for (y, z) in &pairs {
        memory.read_z(&x, y, &mut out);
        assert_eq!(out.distance(z), 0);
    }
}

#[test]
fn test_delete_then_empty() {
    let mut rng = StdRng::seed_from_u64(72);
    let mut memory = TriadicStore::new(100, 6);

    let x = random_sdr(100, 6, &mut rng);
    let y = random_sdr(100, 6, &mut rng);
    let z = random_sdr(100, 6, &mut rng);

    memory.write(&x, &y, &z);
    memory.delete(&x, &y, &z);

    let mut out = Sdr::new(100);
    memory.read_z(&x, &y, &mut out);
    assert!(out.is_empty());
}

#[test]
fn test_counter_and_bit_agree_on_single_triple() {
    let mut rng = StdRng::seed_from_u64(73);
    let mut counters = TriadicStore::with_shape(100, 100, 100, 5, 5, 5, CellKind::Counter);
    let mut bits = TriadicStore::with_shape(100, 100, 100, 5, 5, 5, CellKind::Bit);

    let x = random_sdr(100, 5, &mut rng);
    let y = random_sdr(100, 5, &mut rng);
    let z = random_sdr(100, 5, &mut rng);

    counters.write(&x, &y, &z);
    bits.write(&x, &y, &z);

    let mut from_counters = Sdr::new(100);
    let mut from_bits = Sdr::new(100);
    counters.read_y(&x, &mut from_counters, &z);
    bits.read_y(&x, &mut from_bits, &z);
    assert_eq!(from_counters, from_bits);
}

#[test]
fn test_per_axis_populations() {
    let mut rng = StdRng::seed_from_u64(74);
    let mut memory = TriadicStore::with_shape(60, 80, 100, 4, 6, 8, CellKind::Counter);

    let mut x = Sdr::new(60);
    let mut y = Sdr::new(80);
    let mut z = Sdr::new(100);
    x.randomize(4, &mut rng);
    y.randomize(6, &mut rng);
    z.randomize(8, &mut rng);

    memory.write(&x, &y, &z);

    let mut rx = Sdr::new(60);
    memory.read_x(&mut rx, &y, &z);
    assert_eq!(rx, x);

    let mut rz = Sdr::new(100);
    memory.read_z(&x, &y, &mut rz);
    assert_eq!(rz, z);
}
