//! RGBA8 output buffer and normal encoding.

use normbake_math::Vec3;
use normbake_types::constants::{ENCODE_ZERO_SNAP, NEUTRAL_TEXEL};

/// Maps a unit vector component range `[-1, 1]` onto `[0, 255]`.
///
/// Out-of-range values clamp; halves round to even, so `0.0` encodes to 128.
/// Components within [`ENCODE_ZERO_SNAP`] of zero are treated as zero.
#[inline]
pub fn encode_normal(v: Vec3) -> [u8; 3] {
    let encode = |c: f32| {
        let c = if c.abs() < ENCODE_ZERO_SNAP { 0.0 } else { c };
        ((c * 0.5 + 0.5) * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
    };
    [encode(v.x), encode(v.y), encode(v.z)]
}

/// Inverse of [`encode_normal`], up to quantization.
#[inline]
pub fn decode_normal(rgb: [u8; 3]) -> Vec3 {
    let decode = |c: u8| c as f32 / 255.0 * 2.0 - 1.0;
    Vec3::new(decode(rgb[0]), decode(rgb[1]), decode(rgb[2]))
}

/// Square RGBA8 normal map, row-major. Row 0 holds UV `v = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMapBuffer {
    size: u32,
    data: Vec<u8>,
}

impl NormalMapBuffer {
    /// Creates a `size × size` buffer filled with the neutral texel.
    pub fn new(size: u32) -> Self {
        let texels = size as usize * size as usize;
        Self {
            size,
            data: NEUTRAL_TEXEL.repeat(texels),
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes, `size * size * 4` of them.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, col: u32, row: u32) -> usize {
        (row as usize * self.size as usize + col as usize) * 4
    }

    /// Writes an opaque texel addressed in UV space: `y = 0` is `v = 0`,
    /// the bottom row of the image.
    #[inline]
    pub fn write(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.offset(x, self.size - 1 - y);
        self.data[offset..offset + 4].copy_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }

    /// Reads the texel at image column `col`, row `row` (row 0 on top).
    #[inline]
    pub fn texel(&self, col: u32, row: u32) -> [u8; 4] {
        let offset = self.offset(col, row);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    /// Decoded tangent-space direction stored at a texel.
    pub fn decode(&self, col: u32, row: u32) -> Vec3 {
        let [r, g, b, _] = self.texel(col, row);
        decode_normal([r, g, b])
    }

    /// Number of texels that differ from the neutral texel.
    pub fn non_neutral_count(&self) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|texel| *texel != &NEUTRAL_TEXEL[..])
            .count()
    }
}
