use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};

/// A keyboard that the key processing and pointing tasks can both call into.
///
/// # Example
///
/// ```rust
/// use embassy_sync::blocking_mutex::raw::NoopRawMutex;
/// use splitball_firmware::shared::SharedKeyboard;
///
/// let shared: SharedKeyboard<NoopRawMutex, u16> = SharedKeyboard::new(400);
/// shared.with(|cpi| *cpi += 200);
/// assert_eq!(shared.with(|cpi| *cpi), 600);
/// ```
pub struct SharedKeyboard<M: RawMutex, K>(Mutex<M, RefCell<K>>);

impl<M: RawMutex, K> SharedKeyboard<M, K> {
    pub const fn new(keyboard: K) -> Self {
        Self(Mutex::new(RefCell::new(keyboard)))
    }

    /// Run `f` with exclusive access to the keyboard.
    ///
    /// # Panics
    ///
    /// If called again from within `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut K) -> R) -> R {
        self.0.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn into_inner(self) -> K {
        self.0.into_inner().into_inner()
    }
}

#[cfg(test)]
#[path = "shared_test.rs"]
mod test;
