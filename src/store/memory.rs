use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NoteStore, StoreError, StoreResult, UserStore};
use crate::model::{NewNote, Note, User};

/// In-process store with the same owner scoping as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user and, like the foreign key cascade, every note they own.
    pub async fn remove_user(&self, id: Uuid) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.id != id);
        let removed = users.len() != before;
        if removed {
            self.notes.write().await.retain(|note| note.user_id != id);
        }
        removed
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.username == username) {
            return Err(StoreError::UniqueViolation);
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            password: password_hash.to_owned(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert_note(&self, note: NewNote) -> StoreResult<Note> {
        let users = self.users.read().await;
        if !users.iter().any(|user| user.id == note.user_id) {
            return Err(StoreError::ForeignKeyViolation);
        }
        let note = Note {
            id: Uuid::new_v4(),
            title: note.title,
            description: note.description,
            date: Utc::now(),
            user_id: note.user_id,
            category: note.category,
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn notes_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|note| note.user_id == owner)
            .cloned()
            .collect())
    }

    async fn update_note(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<u64> {
        let mut notes = self.notes.write().await;
        let mut affected = 0;
        for note in notes
            .iter_mut()
            .filter(|note| note.id == id && note.user_id == owner)
        {
            note.title = title.to_owned();
            note.description = description.to_owned();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_note(&self, owner: Uuid, id: Uuid) -> StoreResult<u64> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|note| !(note.id == id && note.user_id == owner));
        Ok((before - notes.len()) as u64)
    }
}
