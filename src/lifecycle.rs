/// Bookkeeping for the gain -> destination connection.
///
/// `release` reports `true` only for the call that must actually disconnect;
/// once released, the output can never be connected again.
#[derive(Debug, Default)]
pub struct OutputLatch {
    connected: bool,
    released: bool,
}

impl OutputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the connection. `false` when already connected or released.
    pub fn connect(&mut self) -> bool {
        if self.connected || self.released {
            return false;
        }
        self.connected = true;
        true
    }

    /// Undo a claimed connection whose JS call failed.
    pub fn connect_failed(&mut self) {
        self.connected = false;
    }

    /// Mark released. `true` only when this call must disconnect.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        std::mem::replace(&mut self.connected, false)
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// One-shot guard for unmounting a started instance.
#[derive(Debug, Default)]
pub struct TeardownLatch {
    done: bool,
}

impl TeardownLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` for the first call only; later stops are no-ops.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.done, true)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}
