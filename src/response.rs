use chrono::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::model::Note;

#[derive(Serialize, Debug)]
pub struct FilteredNote {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub category: String,
}

impl From<&Note> for FilteredNote {
    fn from(note: &Note) -> Self {
        FilteredNote {
            id: note.id,
            title: note.title.to_owned(),
            description: note.description.to_owned(),
            date: note.date,
            category: note.category.to_owned(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn success(message: &'static str) -> Self {
        MessageResponse {
            status: "success",
            message,
        }
    }
}
