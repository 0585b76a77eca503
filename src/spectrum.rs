/// Byte-scaled frequency magnitudes for one analysis pass.
///
/// The buffer is sized once from the analyser's bin count and refreshed in
/// place every frame; its length never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySample {
    bins: Vec<u8>,
}

impl FrequencySample {
    pub fn new(bin_count: usize) -> Self {
        Self {
            bins: vec![0; bin_count],
        }
    }

    /// Sample sized for an analyser with the given FFT window.
    pub fn for_window(fft_size: usize) -> Self {
        Self::new(fft_size / 2)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[inline]
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    /// Mutable view for the analyser to write into. Slices keep the length fixed.
    #[inline]
    pub fn bins_mut(&mut self) -> &mut [u8] {
        &mut self.bins
    }

    /// Mean magnitude across all bins, in `0.0..=255.0`. Empty samples read as silence.
    pub fn average(&self) -> f32 {
        if self.bins.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.bins.iter().map(|&b| b as u32).sum();
        sum as f32 / self.bins.len() as f32
    }
}
