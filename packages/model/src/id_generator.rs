use crc32fast::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ComponentId;

/// Generate a session seed from a label using CRC32
pub fn get_session_id(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

static SESSIONS: AtomicU64 = AtomicU64::new(0);

/// Sequential ID generator for components created in one editing session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Session ID (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: get_session_id(label),
            count: 0,
        }
    }

    /// Generator salted with the wall clock (where the platform has one)
    /// and a process-wide counter, so two sessions in the same process
    /// never hand out the same ids.
    pub fn fresh(label: &str) -> Self {
        let session = SESSIONS.fetch_add(1, Ordering::Relaxed);
        Self::new(&salted_label(label, clock_salt(), session))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> ComponentId {
        self.count += 1;
        ComponentId::new(format!("{}-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}

fn salted_label(label: &str, clock: u128, session: u64) -> String {
    format!("{}@{}#{}", label, clock, session)
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_salt() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

// wasm32-unknown-unknown has no system clock; the session counter alone salts
#[cfg(target_arch = "wasm32")]
fn clock_salt() -> u128 {
    0
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::fresh("pagecraft")
    }
}
