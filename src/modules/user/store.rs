use chrono::Utc;
use log::info;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};
use uuid::Uuid;

use crate::modules::user::{model::User, service::UserService};

/// Process-local user records. A new store holds no users, so every lookup
/// yields `User::default()` until something is inserted.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        info!("InMemoryUserStore initialized");
        Self::default()
    }

    /// Stores `user`, assigning an id and creation time when it has none.
    pub fn insert(&self, mut user: User) -> String {
        if user.id.is_empty() {
            user.id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string();
            user.created_at = Utc::now();
        }
        let id = user.id.clone();
        self.users.write().unwrap_or_else(PoisonError::into_inner).insert(id.clone(), user);
        id
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserService for InMemoryUserStore {
    fn find_by_id(&self, id: &str) -> User {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .unwrap_or_default()
    }
}
