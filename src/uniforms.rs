use glam::{Vec2, Vec4};

/// Number of whole vec4 groups that fit in `bin_count` bytes. Trailing bytes
/// that do not fill a group are dropped.
#[inline]
pub const fn packed_len(bin_count: usize) -> usize {
    bin_count / 4
}

/// Pack consecutive groups of four magnitudes into `out`.
///
/// Writes `min(out.len(), packed_len(bins.len()))` vectors and leaves the rest
/// of `out` untouched.
pub fn pack_frequency_data(bins: &[u8], out: &mut [Vec4]) {
    for (dst, chunk) in out.iter_mut().zip(bins.chunks_exact(4)) {
        *dst = Vec4::new(
            chunk[0] as f32,
            chunk[1] as f32,
            chunk[2] as f32,
            chunk[3] as f32,
        );
    }
}

/// A collapsed or hidden canvas reports zero (or garbage) sizes; those must
/// not reach the shader or the camera.
#[inline]
pub fn is_drawable_size(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Host-side copy of the values the plane shader reads (`u_size`,
/// `u_FrequencyData`).
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderUniforms {
    size: Vec2,
    frequency_data: Vec<Vec4>,
}

impl ShaderUniforms {
    pub fn new(bin_count: usize, width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            frequency_data: vec![Vec4::ZERO; packed_len(bin_count)],
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn frequency_data(&self) -> &[Vec4] {
        &self.frequency_data
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Apply a viewport size only when both sides are positive and finite.
    /// Returns whether the size was taken.
    pub fn try_set_size(&mut self, width: f32, height: f32) -> bool {
        if !is_drawable_size(width, height) {
            return false;
        }
        self.set_size(width, height);
        true
    }

    /// Repack the latest magnitudes in place.
    pub fn set_frequency_data(&mut self, bins: &[u8]) {
        pack_frequency_data(bins, &mut self.frequency_data);
    }
}
