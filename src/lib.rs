//! Nether-UVec: Compressed 16-bit unit vector codec for Nethercore
//!
//! Packs a 3D direction (three f32 components) into a single u16 and unpacks
//! it back to an approximate unit vector. Intended for normals and other
//! per-vertex directions in asset/ROM storage, where 12 bytes per direction
//! is wasteful and a small bounded angular error is acceptable.
//!
//! **This is a pure codec** - it handles only the compression/decompression
//! of a single direction. Batching, file layout and streaming are the
//! caller's concern.
//!
//! # Comparison with octahedral u32 packing
//!
//! | Feature | Octahedral u32 | Nether-UVec u16 |
//! |---------|----------------|-----------------|
//! | Size | 4 bytes | 2 bytes |
//! | Max angular error | ~0.01° | ~1° |
//! | Decode | arithmetic only | one table lookup |
//! | Use case | GPU vertex streams | asset/ROM storage |
//!
//! # Code Layout
//!
//! ```text
//! bit 15: sign of x (1 = negative)
//! bit 14: sign of y
//! bit 13: sign of z
//! bits 12-7: xbits (6-bit magnitude field)
//! bits  6-0: ybits (7-bit magnitude field)
//! ```
//!
//! The magnitudes are projective coordinates on the plane through (1,0,0),
//! (0,1,0) and (0,0,1): the absolute input is projected so that
//! xbits + ybits <= 126, then the triangle is reflected into a rectangle so
//! the pair fits a 6+7 bit split. Decoding reverses the fold and multiplies
//! by a precomputed scale factor that puts the lattice point back on the
//! unit sphere. The 8192-entry scale table is built once and shared.
//!
//! # Usage
//!
//! ```
//! use nether_uvec::{pack, unpack, shared_table};
//!
//! let code = pack(0.0, 1.0, 0.0);
//! let [x, y, z] = unpack(code, shared_table());
//! assert_eq!([x, y, z], [0.0, 1.0, 0.0]);
//! ```
//!
//! Or through the wrapper type:
//!
//! ```
//! use nether_uvec::PackedDir;
//! use glam::Vec3;
//!
//! let dir = PackedDir::pack(Vec3::Y);
//! assert_eq!(dir.vec(), Vec3::Y);
//! assert_eq!(dir.bits(), 126);
//! ```
//!
//! The zero vector has no direction and is undefined input for [`pack`];
//! use [`try_pack`] to get an explicit error instead.

mod decode;
mod encode;
mod packed_dir;
mod table;

pub use decode::unpack;
pub use encode::{pack, try_pack};
pub use packed_dir::PackedDir;
pub use table::{CorrectionTable, shared_table};

// =============================================================================
// Constants
// =============================================================================

/// All three sign bits
pub const SIGN_MASK: u16 = 0xE000;

/// Sign bit of the x component (bit 15)
pub const XSIGN_MASK: u16 = 0x8000;

/// Sign bit of the y component (bit 14)
pub const YSIGN_MASK: u16 = 0x4000;

/// Sign bit of the z component (bit 13)
pub const ZSIGN_MASK: u16 = 0x2000;

/// The 6-bit xbits magnitude field (bits 12-7)
pub const TOP_MASK: u16 = 0x1F80;

/// The 7-bit ybits magnitude field (bits 6-0)
pub const BOTTOM_MASK: u16 = 0x007F;

/// Correction table entries, one per 13-bit magnitude index
pub const TABLE_SIZE: usize = 0x2000;

// =============================================================================
// Error Type
// =============================================================================

/// Errors from checked packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UvecError {
    /// Input has no usable direction (|x|+|y|+|z| is zero or non-finite)
    #[error("degenerate direction: |x|+|y|+|z| is zero or non-finite")]
    DegenerateInput,
}

// =============================================================================
// Tests
// =============================================================================
