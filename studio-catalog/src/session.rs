use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A scheduled class instance with a fixed attendee capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub capacity: u32,
}

/// In-memory class catalog, seeded once at startup and immutable afterwards
pub struct ClassCatalog {
    sessions: HashMap<i64, ClassSession>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Add a session to the catalog
    pub fn insert(&mut self, session: ClassSession) -> Result<(), CatalogError> {
        if self.sessions.contains_key(&session.id) {
            return Err(CatalogError::DuplicateSession(session.id));
        }
        self.sessions.insert(session.id, session);
        Ok(())
    }

    /// Get a session by id
    pub fn get(&self, id: i64) -> Option<&ClassSession> {
        self.sessions.get(&id)
    }

    /// All sessions, ordered by start time
    pub fn sessions_by_start(&self) -> Vec<&ClassSession> {
        let mut sessions: Vec<&ClassSession> = self.sessions.values().collect();
        sessions.sort_by_key(|s| (s.start_time, s.id));
        sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Session already in catalog: {0}")]
    DuplicateSession(i64),
}
