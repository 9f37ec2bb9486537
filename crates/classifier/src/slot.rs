use std::sync::{Condvar, Mutex, MutexGuard};

struct SlotState<T> {
    value: Option<T>,
    closed: bool,
}

/// A single-slot mailbox between a producer and one worker.
///
/// Holds at most one waiting value. Putting into a full slot replaces the
/// waiting value, so the worker always picks up the latest one.
pub struct FrameSlot<T> {
    state: Mutex<SlotState<T>>,
    ready: Condvar,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                value: None,
                closed: false,
            }),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store `value`, returning the value it displaced.
    ///
    /// Returns `Err(value)` once the slot is closed.
    pub fn put(&self, value: T) -> Result<Option<T>, T> {
        let mut state = self.lock();
        if state.closed {
            return Err(value);
        }
        let displaced = state.value.replace(value);
        drop(state);
        self.ready.notify_one();
        Ok(displaced)
    }

    /// Block until a value is available. Returns `None` when the slot is
    /// closed and empty.
    pub fn take(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if let Some(value) = state.value.take() {
                return Some(value);
            }
            if state.closed {
                return None;
            }
            state = self.ready.wait(state).unwrap_or_else(|e| e.into_inner());
        }
    }

    pub fn try_take(&self) -> Option<T> {
        self.lock().value.take()
    }

    /// Refuse further values and wake the worker. A waiting value is still
    /// handed out by the next `take`.
    pub fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn is_empty(&self) -> bool {
        self.lock().value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_replaces_waiting_value() {
        let slot = FrameSlot::new();
        assert_eq!(slot.put(1), Ok(None));
        assert_eq!(slot.put(2), Ok(Some(1)));
        assert_eq!(slot.try_take(), Some(2));
        assert_eq!(slot.try_take(), None);
    }

    #[test]
    fn test_closed_slot_rejects_and_drains() {
        let slot = FrameSlot::new();
        slot.put("pending").unwrap();
        slot.close();
        assert_eq!(slot.put("late"), Err("late"));
        assert_eq!(slot.take(), Some("pending"));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_take_wakes_on_put() {
        let slot = Arc::new(FrameSlot::new());
        let worker = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.take())
        };
        slot.put(7).unwrap();
        assert_eq!(worker.join().unwrap(), Some(7));
    }

    #[test]
    fn test_take_wakes_on_close() {
        let slot = Arc::new(FrameSlot::<u32>::new());
        let worker = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.take())
        };
        slot.close();
        assert_eq!(worker.join().unwrap(), None);
    }
}
