//! Per-session critical sections.
//!
//! Recording a submission (insert, count, progress write) and closing a
//! session (read submissions, draw, write result) must not interleave for the
//! same session. Operations on different sessions never contend.
//!
//! Entries exist only while a guard is held or awaited; the last guard to
//! drop removes its session's entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

type LockTable = Arc<Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>>;

/// Table of one async mutex per session currently in use.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: LockTable,
}

/// Exclusive access to one session; released on drop.
#[derive(Debug)]
pub struct SessionGuard {
    guard: Option<OwnedMutexGuard<()>>,
    id: SessionId,
    locks: LockTable,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `id`.
    pub async fn lock(&self, id: SessionId) -> SessionGuard {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Arc::clone(locks.entry(id).or_default())
        };
        SessionGuard {
            guard: Some(lock.lock_owned().await),
            id,
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of sessions with a held or awaited lock.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        // Release the mutex first so its Arc count reflects only the table
        // and any waiters.
        drop(self.guard.take());

        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let idle = locks
            .get(&self.id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            locks.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_session_is_exclusive() {
        let locks = Arc::new(SessionLocks::new());
        let id = SessionId::from_store(1);

        let guard = locks.lock(id).await;
        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock(id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn different_sessions_do_not_contend() {
        let locks = SessionLocks::new();
        let _first = locks.lock(SessionId::from_store(1)).await;
        let second = tokio::time::timeout(
            Duration::from_millis(100),
            locks.lock(SessionId::from_store(2)),
        )
        .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn entry_is_removed_when_last_guard_drops() {
        let locks = SessionLocks::new();
        let guard = locks.lock(SessionId::from_store(3)).await;
        assert_eq!(locks.len(), 1);

        drop(guard);
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn entry_survives_while_a_waiter_is_queued() {
        let locks = Arc::new(SessionLocks::new());
        let id = SessionId::from_store(4);

        let guard = locks.lock(id).await;
        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock(id).await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.len(), 1);

        waiter.await.unwrap();
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn many_sessions_leave_no_entries_behind() {
        let locks = SessionLocks::new();
        for raw in 1..=500 {
            let _guard = locks.lock(SessionId::from_store(raw)).await;
        }
        assert!(locks.is_empty());
    }
}
