//! Numeric constants and engine defaults.

/// Quantization factor used to weld coincident vertices (1e-4 units).
pub const WELD_PRECISION: f32 = 10_000.0;

/// Default wall-clock budget of a single scheduling tick (milliseconds).
pub const DEFAULT_TICK_BUDGET_MS: u64 = 15;

/// Smallest cage distance accepted for `max_front` / `max_rear`.
/// Smaller positive values are clamped up to this.
pub const MIN_CAGE_DISTANCE: f32 = 1.0e-4;

/// Below this absolute UV-space determinant a triangle is skipped by the rasterizer.
pub const DEGENERATE_UV_DETERMINANT: f32 = 1.0e-8;

/// Ray/triangle determinant threshold, relative to the product of the two
/// edge lengths (the sine of the ray's angle to the triangle plane).
pub const RAY_TRIANGLE_EPSILON: f32 = 1.0e-7;

/// Squared-length threshold under which a vector is treated as zero.
pub const DEGENERATE_LENGTH_SQ: f32 = 1.0e-20;

/// Tangent-space components smaller than this encode as exactly zero (128).
/// Zero sits on a rounding tie, so float noise would otherwise pick 127.
pub const ENCODE_ZERO_SNAP: f32 = 1.0e-4;

/// Neutral tangent-space texel: direction (0, 0, 1), opaque.
pub const NEUTRAL_TEXEL: [u8; 4] = [128, 128, 255, 255];

/// Largest texture edge the engine accepts.
pub const MAX_TEXTURE_SIZE: u32 = 16_384;
