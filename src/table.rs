//! Correction table: per-code normalization scale factors
//!
//! Decoding reconstructs a lattice point on the projection plane, not on the
//! unit sphere. The table stores, for each of the 8192 possible magnitude
//! indices, the factor that scales that point back to length 1. It is pure
//! data derived from the index alone - built once, read-only afterwards, and
//! safe to share across threads.

use crate::{BOTTOM_MASK, SIGN_MASK, TABLE_SIZE};
use std::sync::LazyLock;

/// Scale factors for every 13-bit magnitude index.
///
/// Build one with [`CorrectionTable::build`] and pass it to
/// [`crate::unpack`], or use the process-wide [`shared_table`].
pub struct CorrectionTable([f32; TABLE_SIZE]);

impl CorrectionTable {
    /// Build the table.
    ///
    /// Deterministic - building twice yields bit-identical contents. The
    /// build runs the same fold as decoding, so the entry under any index
    /// matches the lattice point decoding will produce for it.
    ///
    /// # Panics
    /// If a computed scale factor is not finite. No index can produce the
    /// zero lattice point, so this only fires on an internal bug.
    pub fn build() -> Self {
        let mut table = [0.0_f32; TABLE_SIZE];
        for (idx, entry) in table.iter_mut().enumerate() {
            let mut xbits = (idx >> 7) as i32;
            let mut ybits = (idx & BOTTOM_MASK as usize) as i32;

            // Map back to the triangle (0,0)-(0,127)-(127,0)
            if xbits + ybits >= 127 {
                xbits = 127 - xbits;
                ybits = 127 - ybits;
            }

            let x = xbits as f32;
            let y = ybits as f32;
            let z = (126 - xbits - ybits) as f32;

            let scale = 1.0 / (y * y + z * z + x * x).sqrt();
            assert!(scale.is_finite(), "non-finite scale at index {}", idx);
            *entry = scale;
        }
        Self(table)
    }

    /// Scale factor for a code (sign bits are ignored).
    #[inline]
    pub fn scale(&self, code: u16) -> f32 {
        self.0[(code & !SIGN_MASK) as usize]
    }
}

/// Process-wide correction table, built on first use.
///
/// Initialization is race-free and happens-before every lookup; calling this
/// any number of times returns the same table.
pub fn shared_table() -> &'static CorrectionTable {
    static TABLE: LazyLock<CorrectionTable> = LazyLock::new(CorrectionTable::build);
    &TABLE
}
