use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::{NoteStore, StoreError, StoreResult, UserStore};
use crate::model::{NewNote, Note, User};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(20) UNIQUE NOT NULL,
    password TEXT NOT NULL
)"#;

const CREATE_NOTES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title VARCHAR(20) NOT NULL,
    description VARCHAR(100) NOT NULL,
    date TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    category VARCHAR(20) NOT NULL DEFAULT 'Personal'
)"#;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct PgStore {
    db: Pool<Postgres>,
}

impl PgStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        PgStore { db }
    }

    /// Creates the users and notes tables when they do not exist yet.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_USERS).execute(&self.db).await?;
        tracing::info!("users table ready");
        sqlx::query(CREATE_NOTES).execute(&self.db).await?;
        tracing::info!("notes table ready");
        Ok(())
    }
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    let code = match &err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    };
    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => StoreError::UniqueViolation,
        Some(FOREIGN_KEY_VIOLATION) => StoreError::ForeignKeyViolation,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id, username, password",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn insert_note(&self, note: NewNote) -> StoreResult<Note> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, description, user_id, category) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, description, date, user_id, category",
        )
        .bind(note.title)
        .bind(note.description)
        .bind(note.user_id)
        .bind(note.category)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;
        Ok(note)
    }

    async fn notes_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, description, date, user_id, category FROM notes WHERE user_id = $1",
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;
        Ok(notes)
    }

    async fn update_note(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE notes SET title = $1, description = $2 WHERE id = $3 AND user_id = $4",
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .bind(owner)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_note(&self, owner: Uuid, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }
}
