//! Concurrency-safe in-memory user store.
//!
//! A `BTreeMap` behind an `RwLock` keeps records ordered by ID so listing
//! needs no extra sort, and an atomic counter hands out IDs. IDs are never
//! reused: the counter only increments, even across deletions.

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

use crate::domain::user::{User, UserPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user with ID {0} not found")]
    NotFound(u64),
    #[error("user with ID {0} already exists")]
    Conflict(u64),
}

/// Thread-safe holder of all user records.
///
/// Multiple readers proceed in parallel; writes are serialized by the lock.
/// Concurrent updates to the same ID are last-writer-wins.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in ascending ID order.
    pub fn list(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    /// Inserts a record and returns the stored copy.
    ///
    /// An ID of `0` means "assign the next one"; the counter is incremented
    /// before assignment, so concurrent inserts never share an ID. A caller
    /// may pre-assign a free ID (the seed path does not, but the contract
    /// allows it), in which case the counter is bumped past it; a
    /// pre-assigned ID that already exists fails with [`StoreError::Conflict`].
    pub fn insert(&self, mut user: User) -> Result<User, StoreError> {
        if user.id == 0 {
            user.id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        } else {
            self.next_id.fetch_max(user.id, Ordering::Relaxed);
        }

        let mut users = self.users.write();
        if users.contains_key(&user.id) {
            return Err(StoreError::Conflict(user.id));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Applies a partial update and returns the updated copy.
    ///
    /// Field semantics live in [`UserPatch::apply`]; the store stamps
    /// `updated_at`.
    pub fn update(&self, id: u64, patch: UserPatch) -> Result<User, StoreError> {
        let mut users = self.users.write();
        let user = users.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        patch.apply(user);
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    /// Removes a record. The freed ID is never handed out again.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.users
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Pre-populates the store with two deterministic users.
    ///
    /// Runs through the normal insert path so the ID counter covers seeded
    /// records too. Timestamps are backdated relative to startup so seeded
    /// users don't all look freshly created.
    pub fn seed(&self) {
        let seeds = [
            (
                User::new(
                    "Alice",
                    "Johnson",
                    "alice.johnson@techhive.io",
                    Some("Engineering"),
                    Some("Lead Developer"),
                    true,
                ),
                Duration::days(30),
            ),
            (
                User::new(
                    "Bob",
                    "Smith",
                    "bob.smith@techhive.io",
                    Some("Marketing"),
                    Some("Content Strategist"),
                    true,
                ),
                Duration::days(10),
            ),
        ];

        for (mut user, age) in seeds {
            user.created_at -= age;
            user.updated_at = user.created_at;
            if let Err(e) = self.insert(user) {
                // Seeding an already-populated store is a programming error.
                tracing::error!(error = %e, "Failed to seed user store");
            }
        }
    }
}
