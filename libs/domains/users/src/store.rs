//! In-memory user store behind a connect/disconnect gate.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewUser, User, UserPatch};

/// Store trait for User persistence.
///
/// Data operations require a prior `connect()`; implementations must fail
/// them with `StoreError::NotConnected` otherwise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Open the store for data operations
    async fn connect(&self) -> StoreResult<()>;

    /// Close the store; subsequent data operations fail
    async fn disconnect(&self) -> StoreResult<()>;

    /// All records in insertion order
    async fn list_all(&self) -> StoreResult<Vec<User>>;

    /// Record by id, `None` when absent
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Record by exact email match, `None` when absent
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a new record with a fresh id and timestamps
    async fn create(&self, data: NewUser) -> StoreResult<User>;

    /// Merge `patch` over an existing record and refresh `updated_at`
    async fn update(&self, id: Uuid, patch: UserPatch) -> StoreResult<User>;

    /// Remove a record
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// Remove all records
    async fn clear(&self) -> StoreResult<()>;
}

#[derive(Debug)]
struct Inner {
    connected: bool,
    users: HashMap<Uuid, User>,
    // Listing order; ids are pushed on insert and dropped on removal
    order: Vec<Uuid>,
}

impl Inner {
    fn guard(&self) -> StoreResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(StoreError::NotConnected)
        }
    }

    fn insert(&mut self, user: User) {
        self.order.push(user.id);
        self.users.insert(user.id, user);
    }
}

/// In-memory implementation of `UserStore`.
///
/// Cloning shares the backing map. Two sample records are present from
/// construction and become visible once `connect()` succeeds.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        let mut inner = Inner {
            connected: false,
            users: HashMap::new(),
            order: Vec::new(),
        };

        inner.insert(seed_user("John Doe", "john@example.com", 30));
        inner.insert(seed_user("Jane Smith", "jane@example.com", 25));

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_user(name: &str, email: &str, age: i64) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        name: name.to_string(),
        email: email.to_string(),
        age,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn connect(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.connected = true;

        tracing::info!("User store connected");
        Ok(())
    }

    async fn disconnect(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.connected = false;

        tracing::info!("User store disconnected");
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().await;
        inner.guard()?;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.users.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        inner.guard()?;

        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        inner.guard()?;

        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        inner.guard()?;

        if inner.users.values().any(|u| u.email == data.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: data.name,
            email: data.email,
            age: data.age,
            created_at: now,
            updated_at: now,
        };

        inner.insert(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        inner.guard()?;

        let current_email = match inner.users.get(&id) {
            Some(user) => user.email.clone(),
            None => return Err(StoreError::NotFound),
        };

        // A changed email must not collide with any other record
        if let Some(ref email) = patch.email {
            let collides = inner.users.values().any(|u| u.id != id && u.email == *email);
            if *email != current_email && collides {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let Some(user) = inner.users.get_mut(&id) else {
            return Err(StoreError::NotFound);
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }
        user.updated_at = Utc::now();

        let updated = user.clone();
        tracing::info!(user_id = %updated.id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.guard()?;

        if inner.users.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.order.retain(|entry| *entry != id);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.guard()?;

        inner.users.clear();
        inner.order.clear();

        tracing::info!("Cleared user store");
        Ok(())
    }
}
