//! Decoder: 16-bit code to approximate unit vector
//!
//! A straight inverse transform would land on the projection plane through
//! (1,0,0), (0,1,0), (0,0,1); the per-code scale factor from the
//! [`CorrectionTable`] moves the point onto the unit sphere, so decoding is
//! one lookup and three multiplies.

use crate::{BOTTOM_MASK, CorrectionTable, TOP_MASK, XSIGN_MASK, YSIGN_MASK, ZSIGN_MASK};

/// Unpack a 16-bit code into an approximate unit vector.
///
/// Every u16 value is a valid code; the result always has length 1 up to
/// floating-point rounding.
///
/// # Arguments
/// * `code` - the packed direction
/// * `table` - correction table, see [`CorrectionTable::build`] or
///   [`crate::shared_table`]
pub fn unpack(code: u16, table: &CorrectionTable) -> [f32; 3] {
    let mut xbits = ((code & TOP_MASK) >> 7) as i32;
    let mut ybits = (code & BOTTOM_MASK) as i32;

    // Undo the rectangle fold, back to the triangle (0,0)-(0,126)-(126,0)
    if xbits + ybits >= 127 {
        xbits = 127 - xbits;
        ybits = 127 - ybits;
    }

    let scale = table.scale(code);
    let mut x = scale * xbits as f32;
    let mut y = scale * ybits as f32;
    let mut z = scale * (126 - xbits - ybits) as f32;

    if code & XSIGN_MASK != 0 {
        x = -x;
    }
    if code & YSIGN_MASK != 0 {
        y = -y;
    }
    if code & ZSIGN_MASK != 0 {
        z = -z;
    }

    [x, y, z]
}
