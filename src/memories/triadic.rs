//! TriadicStore - Ternary associative memory over a 3-D cell tensor.
//!
//! Stores triples `{x, y, z}` and recalls any one component from the other
//! two. A write touches every cell of the product `x × y × z`; a read
//! collapses the tensor over the two given axes, accumulating evidence per
//! position of the recalled axis, and keeps the top positions for that
//! axis's target population.
//!
//! # Storage representations
//!
//! Two cell representations are supported, chosen per instance:
//!
//! - [`CellKind::Counter`] - one saturating `u8` per cell (the default).
//!   Writes increment, `delete` decrements with a floor of zero, and the
//!   optional random-forgetting policy can decay the tensor.
//! - [`CellKind::Bit`] - one bit per cell via `bitvec`. Writes are
//!   idempotent and the tensor needs an eighth of the memory; `delete` and
//!   forgetting do not apply.
//!
//! Memory is `Θ(nx·ny·nz)` cells either way; callers pick dimensions with
//! that budget in mind (a 1000³ counter cube is a gigabyte).
//!
//! # Examples
//!
//! ```
//! use sdmemory::{Sdr, TriadicStore};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut store = TriadicStore::new(100, 5);
//!
//! let mut x = Sdr::new(100);
//! let mut y = Sdr::new(100);
//! let mut z = Sdr::new(100);
//! x.randomize(5, &mut rng);
//! y.randomize(5, &mut rng);
//! z.randomize(5, &mut rng);
//!
//! store.write(&x, &y, &z);
//!
//! let mut recalled = Sdr::new(100);
//! store.read_z(&x, &y, &mut recalled);
//! assert_eq!(recalled, z);
//! ```

use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::binarize::binarize_into;
use crate::sdr::Sdr;

/// Cell representation of a [`TriadicStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Saturating `u8` counters; supports `delete` and forgetting.
    Counter,
    /// Packed bits; idempotent writes, one eighth the memory.
    Bit,
}

enum Cells {
    Counters(Vec<u8>),
    Bits(BitVec<u64, Lsb0>),
}

/// Linear address of the cell `(i, j, k)` in a tensor of shape
/// `(_, ny, nz)`.
#[inline(always)]
fn cell_addr(ny: usize, nz: usize, i: usize, j: usize, k: usize) -> usize {
    (i * ny + j) * nz + k
}

/// Ternary associative memory over a dense `nx × ny × nz` tensor.
pub struct TriadicStore {
    nx: usize,
    ny: usize,
    nz: usize,
    px: usize,
    py: usize,
    pz: usize,
    cells: Cells,
    forgetting: bool,
    rng: StdRng,
}

impl TriadicStore {
    /// Create a cubic counter store of dimension `n` with target
    /// population `p` on every axis.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or `p == 0`.
    pub fn new(n: usize, p: usize) -> Self {
        Self::with_shape(n, n, n, p, p, p, CellKind::Counter)
    }

    /// Create a cubic store with packed-bit cells.
    pub fn new_bit(n: usize, p: usize) -> Self {
        Self::with_shape(n, n, n, p, p, p, CellKind::Bit)
    }

    /// Create a store with per-axis dimensions and target populations.
    ///
    /// # Panics
    ///
    /// Panics if any dimension or target population is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn with_shape(
        nx: usize,
        ny: usize,
        nz: usize,
        px: usize,
        py: usize,
        pz: usize,
        kind: CellKind,
    ) -> Self {
        assert!(nx > 0 && ny > 0 && nz > 0, "dimensions must be > 0");
        assert!(px > 0 && py > 0 && pz > 0, "target populations must be > 0");

        let volume = nx * ny * nz;
        let cells = match kind {
            CellKind::Counter => Cells::Counters(vec![0u8; volume]),
            CellKind::Bit => Cells::Bits(bitvec![u64, Lsb0; 0; volume]),
        };

        Self {
            nx,
            ny,
            nz,
            px,
            py,
            pz,
            cells,
            forgetting: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Enable or disable random forgetting (counter cells only).
    ///
    /// When enabled, every write is followed by `|x|·|y|·|z|` random
    /// decrements anywhere in the tensor, clamped at zero. Disabled by
    /// default.
    pub fn set_forgetting(&mut self, enabled: bool) {
        self.forgetting = enabled;
    }

    /// Reseed the internal generator used by the forgetting policy.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Dimension of the `x` axis.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Dimension of the `y` axis.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Dimension of the `z` axis.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Target population of a recalled `x`.
    pub fn px(&self) -> usize {
        self.px
    }

    /// Target population of a recalled `y`.
    pub fn py(&self) -> usize {
        self.py
    }

    /// Target population of a recalled `z`.
    pub fn pz(&self) -> usize {
        self.pz
    }

    /// Cell representation of this instance.
    pub fn cell_kind(&self) -> CellKind {
        match self.cells {
            Cells::Counters(_) => CellKind::Counter,
            Cells::Bits(_) => CellKind::Bit,
        }
    }

    fn check_dims(&self, x: &Sdr, y: &Sdr, z: &Sdr) {
        debug_assert_eq!(x.dimension(), self.nx);
        debug_assert_eq!(y.dimension(), self.ny);
        debug_assert_eq!(z.dimension(), self.nz);
    }

    /// Store the triple `{x, y, z}`.
    ///
    /// Counter cells increment with upper-bound saturation; bit cells are
    /// set idempotently. Any empty component makes the product empty and
    /// the call a no-op.
    pub fn write(&mut self, x: &Sdr, y: &Sdr, z: &Sdr) {
        self.check_dims(x, y, z);

        match &mut self.cells {
            Cells::Counters(m) => {
                for &i in x.active() {
                    for &j in y.active() {
                        let base = cell_addr(self.ny, self.nz, i, j, 0);
                        for &k in z.active() {
                            m[base + k] = m[base + k].saturating_add(1);
                        }
                    }
                }
            }
            Cells::Bits(b) => {
                for &i in x.active() {
                    for &j in y.active() {
                        let base = cell_addr(self.ny, self.nz, i, j, 0);
                        for &k in z.active() {
                            b.set(base + k, true);
                        }
                    }
                }
            }
        }

        if self.forgetting {
            self.forget(x.population() * y.population() * z.population());
        }
    }

    /// Remove one stored trace of the triple `{x, y, z}`.
    ///
    /// Counter cells decrement with a floor of zero. Bit cells carry no
    /// multiplicity and are left untouched.
    pub fn delete(&mut self, x: &Sdr, y: &Sdr, z: &Sdr) {
        self.check_dims(x, y, z);

        if let Cells::Counters(m) = &mut self.cells {
            for &i in x.active() {
                for &j in y.active() {
                    let base = cell_addr(self.ny, self.nz, i, j, 0);
                    for &k in z.active() {
                        m[base + k] = m[base + k].saturating_sub(1);
                    }
                }
            }
        }
    }

    /// Perform `count` random single-cell decrements, clamped at zero.
    fn forget(&mut self, count: usize) {
        if let Cells::Counters(m) = &mut self.cells {
            for _ in 0..count {
                let idx = self.rng.gen_range(0..m.len());
                m[idx] = m[idx].saturating_sub(1);
            }
        }
    }

    /// Recall the `x` component of a stored triple from `y` and `z`,
    /// storing the result in `x`.
    ///
    /// The argument order mirrors the axis order of the tensor.
    pub fn read_x(&self, x: &mut Sdr, y: &Sdr, z: &Sdr) {
        self.check_dims(x, y, z);

        let mut acc = vec![0u32; self.nx];
        for &j in y.active() {
            for &k in z.active() {
                match &self.cells {
                    Cells::Counters(m) => {
                        for (i, a) in acc.iter_mut().enumerate() {
                            *a += m[cell_addr(self.ny, self.nz, i, j, k)] as u32;
                        }
                    }
                    Cells::Bits(b) => {
                        for (i, a) in acc.iter_mut().enumerate() {
                            *a += b[cell_addr(self.ny, self.nz, i, j, k)] as u32;
                        }
                    }
                }
            }
        }
        binarize_into(&acc, self.px, x);
    }

    /// Recall the `y` component of a stored triple from `x` and `z`,
    /// storing the result in `y`.
    pub fn read_y(&self, x: &Sdr, y: &mut Sdr, z: &Sdr) {
        self.check_dims(x, y, z);

        let mut acc = vec![0u32; self.ny];
        for &i in x.active() {
            for &k in z.active() {
                match &self.cells {
                    Cells::Counters(m) => {
                        for (j, a) in acc.iter_mut().enumerate() {
                            *a += m[cell_addr(self.ny, self.nz, i, j, k)] as u32;
                        }
                    }
                    Cells::Bits(b) => {
                        for (j, a) in acc.iter_mut().enumerate() {
                            *a += b[cell_addr(self.ny, self.nz, i, j, k)] as u32;
                        }
                    }
                }
            }
        }
        binarize_into(&acc, self.py, y);
    }

    /// Recall the `z` component of a stored triple from `x` and `y`,
    /// storing the result in `z`.
    ///
    /// This is the cheapest axis: the collapsed cells of one `(i, j)` pair
    /// are contiguous in memory.
    pub fn read_z(&self, x: &Sdr, y: &Sdr, z: &mut Sdr) {
        self.check_dims(x, y, z);

        let mut acc = vec![0u32; self.nz];
        for &i in x.active() {
            for &j in y.active() {
                let base = cell_addr(self.ny, self.nz, i, j, 0);
                match &self.cells {
                    Cells::Counters(m) => {
                        for (a, &c) in acc.iter_mut().zip(m[base..base + self.nz].iter()) {
                            *a += c as u32;
                        }
                    }
                    Cells::Bits(b) => {
                        for k in b[base..base + self.nz].iter_ones() {
                            acc[k] += 1;
                        }
                    }
                }
            }
        }
        binarize_into(&acc, self.pz, z);
    }
}
