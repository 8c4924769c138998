//! Quad geometry validator.
//!
//! A quad is an aligned square block of grid cells treated as one
//! transferable unit: `(size, x, y)` with `size` drawn from the allowed set,
//! `x`/`y` multiples of `size`, and the whole block inside the grid.
//!
//! Everything here is pure: the ledgers and tunnels call into this module
//! before touching any storage so that a rejected batch leaves no trace.

use cosmwasm_schema::cw_serde;
use thiserror::Error;

/// Quad side lengths accepted by the ledger.
pub const ALLOWED_SIZES: [u64; 5] = [1, 3, 6, 12, 24];

/// Fixed per-quad overhead in the destination-cost model.
pub const QUAD_GAS_BASE: u64 = 32;

/// Per-cell cost in the destination-cost model.
pub const GAS_PER_CELL: u64 = 1;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("invalid quad size: {size}")]
    InvalidSize { size: u64 },

    #[error("quad at ({x}, {y}) is not aligned to size {size}")]
    Misaligned { size: u64, x: u64, y: u64 },

    #[error("quad of size {size} at ({x}, {y}) exceeds grid size {grid_size}")]
    OutOfBounds {
        size: u64,
        x: u64,
        y: u64,
        grid_size: u64,
    },

    #[error("quads at indices {first} and {second} overlap")]
    OverlappingQuads { first: usize, second: usize },

    #[error("array length mismatch: {sizes} sizes, {xs} xs, {ys} ys")]
    ArityMismatch {
        sizes: usize,
        xs: usize,
        ys: usize,
    },
}

/// An aligned square block of grid cells with corner `(x, y)`.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct Quad {
    pub size: u64,
    pub x: u64,
    pub y: u64,
}

impl Quad {
    pub fn new(size: u64, x: u64, y: u64) -> Self {
        Quad { size, x, y }
    }

    /// Number of cells covered by this quad.
    ///
    /// Saturating: callers may hold a not-yet-validated quad with a hostile
    /// size, and the ceiling checks only need "too big", not the exact count.
    pub fn cell_count(&self) -> u64 {
        self.size.saturating_mul(self.size)
    }

    /// Check that this quad is a legal unit on a grid of side `grid_size`.
    pub fn validate(&self, grid_size: u64) -> Result<(), GeometryError> {
        if !ALLOWED_SIZES.contains(&self.size) {
            return Err(GeometryError::InvalidSize { size: self.size });
        }
        if self.x % self.size != 0 || self.y % self.size != 0 {
            return Err(GeometryError::Misaligned {
                size: self.size,
                x: self.x,
                y: self.y,
            });
        }
        // Subtraction form: `x + size` could overflow for hostile coordinates
        if self.x > grid_size.saturating_sub(self.size)
            || self.y > grid_size.saturating_sub(self.size)
        {
            return Err(GeometryError::OutOfBounds {
                size: self.size,
                x: self.x,
                y: self.y,
                grid_size,
            });
        }
        Ok(())
    }

    /// Iterate the constituent cells in row-major order.
    ///
    /// Lazy and finite; call again for a fresh pass.
    pub fn cells(&self) -> impl Iterator<Item = (u64, u64)> {
        let Quad { size, x, y } = *self;
        (0..size).flat_map(move |row| (0..size).map(move |col| (x + col, y + row)))
    }

    /// Whether two quads share at least one cell.
    pub fn overlaps(&self, other: &Quad) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }
}

/// Validate every quad in a batch and check pairwise non-overlap.
///
/// Must pass before any ledger mutation; a batch that fails here is
/// permanently rejected (correcting the inputs yields a different batch).
pub fn validate_batch(quads: &[Quad], grid_size: u64) -> Result<(), GeometryError> {
    for quad in quads {
        quad.validate(grid_size)?;
    }
    for (i, a) in quads.iter().enumerate() {
        for (j, b) in quads.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                return Err(GeometryError::OverlappingQuads { first: i, second: j });
            }
        }
    }
    Ok(())
}

/// Convert the flat-array batch shape into a structured quad list.
///
/// The three arrays must have equal length; no geometry is checked here.
pub fn quads_from_arrays(sizes: &[u64], xs: &[u64], ys: &[u64]) -> Result<Vec<Quad>, GeometryError> {
    if sizes.len() != xs.len() || xs.len() != ys.len() {
        return Err(GeometryError::ArityMismatch {
            sizes: sizes.len(),
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(sizes
        .iter()
        .zip(xs)
        .zip(ys)
        .map(|((&size, &x), &y)| Quad { size, x, y })
        .collect())
}

/// Convert a structured quad list back to the flat-array batch shape.
pub fn quads_to_arrays(quads: &[Quad]) -> (Vec<u64>, Vec<u64>, Vec<u64>) {
    let sizes = quads.iter().map(|q| q.size).collect();
    let xs = quads.iter().map(|q| q.x).collect();
    let ys = quads.iter().map(|q| q.y).collect();
    (sizes, xs, ys)
}

/// Estimated cost of applying a batch on the destination ledger.
///
/// Monotonic in quad count and size; compared against the tunnel's
/// configured ceiling before a batch is accepted.
pub fn estimate_receive_gas(quads: &[Quad]) -> u64 {
    quads.iter().fold(0u64, |total, q| {
        let per_quad = QUAD_GAS_BASE.saturating_add(q.cell_count().saturating_mul(GAS_PER_CELL));
        total.saturating_add(per_quad)
    })
}
