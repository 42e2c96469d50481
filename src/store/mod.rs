//! Persistence behind the account and note operations.
//!
//! Every note query is scoped by its owner id: there is no method that reads
//! or writes a note without one.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{NewNote, Note, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("referenced row does not exist")]
    ForeignKeyViolation,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user; an already taken username yields `UniqueViolation`.
    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fails with `ForeignKeyViolation` when the owner is not a stored user.
    async fn insert_note(&self, note: NewNote) -> StoreResult<Note>;

    /// All notes owned by `owner`, in storage order.
    async fn notes_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>>;

    /// Returns the number of rows changed; zero when the note is missing or
    /// belongs to someone else.
    async fn update_note(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<u64>;

    /// Returns the number of rows removed, with the same owner scoping as
    /// `update_note`.
    async fn delete_note(&self, owner: Uuid, id: Uuid) -> StoreResult<u64>;
}

pub trait Store: UserStore + NoteStore {}

impl<T: UserStore + NoteStore> Store for T {}
