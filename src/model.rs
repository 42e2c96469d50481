use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CATEGORY: &str = "Personal";

pub const MAX_USERNAME_LEN: usize = 20;
pub const MAX_TITLE_LEN: usize = 20;
pub const MAX_DESCRIPTION_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 20;

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
    pub category: String,
}

/// A validated note waiting to be persisted.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
}
