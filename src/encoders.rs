//! Scalar encoders - map real and integer values to sliding-window SDRs.
//!
//! A value in `[lo, hi]` is encoded as `p` consecutive active positions
//! whose window start moves linearly with the value, so nearby values share
//! most of their active bits. The inverse recovers the value from the mean
//! of the active positions, rounded to the native quantum
//! `1 / (n - p - ((n - p) mod 2))` of the encoding.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{encoders, Sdr};
//!
//! let mut s = Sdr::new(1000);
//! encoders::real_to_sdr(&mut s, 0.25, 10, 0.0, 1.0);
//! assert_eq!(s.population(), 10);
//!
//! let recovered = encoders::sdr_to_real(&s, 10, 0.0, 1.0);
//! assert!((recovered - 0.25).abs() < 1.0 / 990.0);
//! ```

use crate::sdr::Sdr;

/// Round `x` to the nearest multiple of `quantum`, halves up.
fn round_to_quantum(x: f64, quantum: f64) -> f64 {
    let units = x / quantum;
    if units - units.floor() < 0.5 {
        units.floor() * quantum
    } else {
        units.ceil() * quantum
    }
}

/// Encode a real value in `[lo, hi]` as a window of `p` consecutive active
/// positions of `s`.
///
/// The value is clamped into the range; `lo` maps to the window starting at
/// position 0 and `hi` to the window ending at position `n - 1`.
///
/// # Panics
///
/// Panics if `hi <= lo` or `p >= s.dimension()`.
pub fn real_to_sdr(s: &mut Sdr, x: f64, p: usize, lo: f64, hi: f64) {
    let n = s.dimension();
    assert!(hi > lo, "hi must be greater than lo");
    assert!(p < n, "window population must be below the dimension");

    let clamped = x.clamp(lo, hi);
    let m = ((clamped - lo) / (hi - lo) * ((n - p) as f64)).floor() as usize;
    let window: Vec<usize> = (m..m + p).collect();
    *s = Sdr::from_indices(n, &window);
}

/// Decode a sliding-window SDR back to the real value it encodes.
///
/// The mean of the active 1-based positions locates the window; the result
/// is rounded to the native quantum of the encoding. An empty SDR decodes
/// to 0.
pub fn sdr_to_real(s: &Sdr, p: usize, lo: f64, hi: f64) -> f64 {
    let n = s.dimension();
    assert!(hi > lo, "hi must be greater than lo");
    assert!(p < n, "window population must be below the dimension");

    if s.is_empty() {
        return 0.0;
    }

    let sum: usize = s.active().iter().map(|&a| a + 1).sum();
    let mean = sum as f64 / s.population() as f64;

    let span = (n - p) as f64;
    let quantum = 1.0 / (span - ((n - p) % 2) as f64);
    let normalized = round_to_quantum((mean - (p as f64 + 1.0) / 2.0) / span, quantum);
    normalized * (hi - lo) + lo
}

/// Encode an integer value in `[lo, hi]` as a window of `p` consecutive
/// active positions of `s`.
pub fn int_to_sdr(s: &mut Sdr, v: i64, p: usize, lo: i64, hi: i64) {
    real_to_sdr(s, v as f64, p, lo as f64, hi as f64);
}

/// Decode a sliding-window SDR back to the integer value it encodes.
pub fn sdr_to_int(s: &Sdr, p: usize, lo: i64, hi: i64) -> i64 {
    sdr_to_real(s, p, lo as f64, hi as f64).round() as i64
}
