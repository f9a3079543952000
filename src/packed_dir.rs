//! High-level wrapper around the raw pack/unpack functions
//!
//! [`PackedDir`] is a transparent u16 newtype, so slices of packed
//! directions can be cast straight into vertex byte streams with bytemuck.

use crate::{UvecError, decode, encode, table};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A direction compressed to two bytes.
///
/// Decoding goes through the process-wide correction table
/// ([`crate::shared_table`]), so no setup is needed before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PackedDir(u16);

impl PackedDir {
    /// Pack a direction. The zero vector is undefined input, as for
    /// [`crate::pack`].
    #[inline]
    pub fn pack(dir: Vec3) -> Self {
        Self(encode::pack(dir.x, dir.y, dir.z))
    }

    /// Pack a direction, rejecting degenerate input.
    #[inline]
    pub fn try_pack(dir: Vec3) -> Result<Self, UvecError> {
        encode::try_pack(dir.x, dir.y, dir.z).map(Self)
    }

    /// Wrap an already-packed code. Every u16 value is valid.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw 16-bit code.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Unpack to an approximate unit vector.
    #[inline]
    pub fn vec(self) -> Vec3 {
        let [x, y, z] = decode::unpack(self.0, table::shared_table());
        Vec3::new(x, y, z)
    }
}

impl From<u16> for PackedDir {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<PackedDir> for u16 {
    fn from(dir: PackedDir) -> u16 {
        dir.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_axes() {
        assert_eq!(PackedDir::pack(Vec3::X).vec(), Vec3::X);
        assert_eq!(PackedDir::pack(Vec3::Y).vec(), Vec3::Y);
        assert_eq!(PackedDir::pack(Vec3::Z).vec(), Vec3::Z);
        assert_eq!(PackedDir::pack(Vec3::NEG_X).vec(), Vec3::NEG_X);
    }

    #[test]
    fn test_bits_roundtrip() {
        let dir = PackedDir::pack(Vec3::X);
        assert_eq!(dir.bits(), 255);
        assert_eq!(PackedDir::from_bits(255), dir);
        assert_eq!(u16::from(dir), 255);
        assert_eq!(PackedDir::from(255u16), dir);
    }

    #[test]
    fn test_try_pack_zero() {
        assert_eq!(
            PackedDir::try_pack(Vec3::ZERO),
            Err(UvecError::DegenerateInput)
        );
    }

    #[test]
    fn test_roundtrip_error_bound() {
        let dirs = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-0.2, 0.7, 0.4),
            Vec3::new(0.577, -0.577, 0.577),
            Vec3::new(12.0, 3.0, -4.0),
        ];
        for dir in dirs {
            let normalized = dir.normalize();
            let decoded = PackedDir::pack(dir).vec();
            assert!(
                (decoded - normalized).length() < 0.02,
                "roundtrip failed for {:?}",
                normalized
            );
        }
    }

    #[test]
    fn test_cast_to_bytes() {
        let dirs = [PackedDir::pack(Vec3::X), PackedDir::pack(Vec3::Y)];
        let bytes: &[u8] = bytemuck::cast_slice(&dirs);
        assert_eq!(bytes.len(), 4);
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 255);
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 126);
    }
}
