/// Overlay lifecycle: the picker is shown until either entry action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Selecting,
    Ready,
}

/// One-way `Selecting -> Ready` latch shared by the file picker and the Play
/// button.
#[derive(Debug, Default)]
pub struct Gate {
    state: OverlayState,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == OverlayState::Ready
    }

    /// Returns `true` only for the call that performs the transition; every
    /// later call is a no-op returning `false`.
    pub fn ready(&mut self) -> bool {
        match self.state {
            OverlayState::Selecting => {
                self.state = OverlayState::Ready;
                true
            }
            OverlayState::Ready => false,
        }
    }
}
