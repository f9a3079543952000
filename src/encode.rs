//! Encoder: direction vector to 16-bit code
//!
//! The input does not have to be unit length - packing projects onto the
//! plane through (1,0,0), (0,1,0), (0,0,1), which only depends on the
//! direction. The zero vector has no direction and is undefined input for
//! [`pack`]; [`try_pack`] rejects it explicitly.

use crate::{UvecError, XSIGN_MASK, YSIGN_MASK, ZSIGN_MASK};

/// Pack a direction into a 16-bit code.
///
/// Records the three sign bits, projects the absolute components onto the
/// unit-simplex plane scaled to 126 steps, then reflects the triangle into
/// the rectangular 6+7 bit layout.
///
/// The casts truncate deliberately; rounding instead would break the
/// pack/unpack fold symmetry.
///
/// # Arguments
/// * `x`, `y`, `z` - direction components, any length, not all zero
///
/// # Returns
/// The 16-bit code (see crate docs for the bit layout)
pub fn pack(mut x: f32, mut y: f32, mut z: f32) -> u16 {
    let mut res: u16 = 0;
    if x < 0.0 {
        res |= XSIGN_MASK;
        x = -x;
    }
    if y < 0.0 {
        res |= YSIGN_MASK;
        y = -y;
    }
    if z < 0.0 {
        res |= ZSIGN_MASK;
        z = -z;
    }

    // Projective coordinates: (1,0,0) -> (126,0), (0,1,0) -> (0,126),
    // (0,0,1) -> (0,0). Now 0 <= xbits + ybits <= 126.
    let w = 126.0 / (x + y + z);
    let mut xbits = (x * w) as i32;
    let mut ybits = (y * w) as i32;

    // Reflect the triangle into a rectangle so xbits fits 6 bits
    if xbits >= 64 {
        xbits = 127 - xbits;
        ybits = 127 - ybits;
    }

    res |= (xbits << 7) as u16;
    res |= ybits as u16;

    res
}

/// Pack a direction, rejecting degenerate input.
///
/// Returns [`UvecError::DegenerateInput`] when the absolute component sum is
/// zero or non-finite, i.e. when [`pack`] would produce a meaningless code.
pub fn try_pack(x: f32, y: f32, z: f32) -> Result<u16, UvecError> {
    let l1 = x.abs() + y.abs() + z.abs();
    if l1 == 0.0 || !l1.is_finite() {
        return Err(UvecError::DegenerateInput);
    }
    Ok(pack(x, y, z))
}
