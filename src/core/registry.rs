use crate::domain::model::{SerialNumber, SerialStatus};
use crate::domain::ports::SerialStore;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Serials treated as already registered when a session starts.
pub const SEED_SERIALS: [&str; 20] = [
    "A1B2C3D4E5", "F6G7H8I9J0", "K1L2M3N4O5", "P6Q7R8S9T0",
    "U1V2W3X4Y5", "Z6A7B8C9D0", "E1F2G3H4I5", "J6K7L8M9N0",
    "O1P2Q3R4S5", "T6U7V8W9X0", "Y1Z2A3B4C5", "D6E7F8G9H0",
    "I1J2K3L4M5", "N6O7P8Q9R0", "S1T2U3V4W5", "X6Y7Z8A9B0",
    "C1D2E3F4G5", "H6I7J8K9L0", "M1N2O3P4Q5", "R6S7T8U9V0",
];

/// In-memory serial registry for one session.
///
/// Grows monotonically; nothing is ever removed. The set sits behind a mutex
/// so check-and-insert happens under a single lock.
#[derive(Debug)]
pub struct SerialRegistry {
    serials: Mutex<HashSet<SerialNumber>>,
}

impl SerialRegistry {
    /// A registry pre-loaded with [`SEED_SERIALS`].
    pub fn seeded() -> Self {
        let serials = SEED_SERIALS
            .iter()
            .map(|s| SerialNumber::new_unchecked((*s).to_string()))
            .collect();
        Self {
            serials: Mutex::new(serials),
        }
    }

    pub fn empty() -> Self {
        Self {
            serials: Mutex::new(HashSet::new()),
        }
    }

    pub fn is_seeded(serial: &SerialNumber) -> bool {
        SEED_SERIALS.contains(&serial.as_str())
    }

    // A poisoned lock still holds a consistent set: inserts are the only writes.
    fn lock(&self) -> MutexGuard<'_, HashSet<SerialNumber>> {
        self.serials.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SerialRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SerialStore for SerialRegistry {
    fn check_and_register(&self, serial: &SerialNumber) -> SerialStatus {
        let mut serials = self.lock();
        // insert returns false when the serial was already present
        if serials.insert(serial.clone()) {
            tracing::info!(serial = %serial, "serial accepted, no match in registry");
            SerialStatus::Accepted
        } else {
            tracing::warn!(
                serial = %serial,
                seeded = Self::is_seeded(serial),
                "serial already registered, possible fake note"
            );
            SerialStatus::FakeOrRegistered
        }
    }

    fn contains(&self, serial: &SerialNumber) -> bool {
        self.lock().contains(serial)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
