//! Striped per-id locks.

use tokio::sync::{Mutex, MutexGuard};

/// Default number of lock stripes.
pub const DEFAULT_STRIPES: usize = 64;

/// A fixed set of async mutexes indexed by record id.
///
/// Id `n` always maps to stripe `n.rem_euclid(len)`, so two tasks working on
/// the same id contend on the same mutex. Distinct ids may share a stripe;
/// that only costs some parallelism. A task holds at most one stripe at a
/// time.
#[derive(Debug)]
pub struct KeyLocks {
    stripes: Vec<Mutex<()>>,
}

impl Default for KeyLocks {
    fn default() -> Self {
        Self::new(DEFAULT_STRIPES)
    }
}

impl KeyLocks {
    /// Creates a lock set with `stripes` mutexes (at least one).
    pub fn new(stripes: usize) -> Self {
        let stripes = stripes.max(1);
        Self {
            stripes: (0..stripes).map(|_| Mutex::new(())).collect(),
        }
    }

    fn stripe_index(&self, id: i64) -> usize {
        // `len` fits in i64 for any realistic stripe count.
        id.rem_euclid(self.stripes.len() as i64) as usize
    }

    /// Waits for and acquires the stripe guarding `id`.
    pub async fn lock(&self, id: i64) -> MutexGuard<'_, ()> {
        self.stripes[self.stripe_index(id)].lock().await
    }
}
