//! Owner-scoped note operations. The owner id always comes from a verified
//! token, never from the request body.

use uuid::Uuid;

use crate::{
    error::AppError,
    model::{
        NewNote, Note, DEFAULT_CATEGORY, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
    },
    store::NoteStore,
};

fn check_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

fn validate_content(title: &str, description: &str) -> Result<(), AppError> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(AppError::Validation(
            "Title and description are required".to_owned(),
        ));
    }
    check_len("Title", title, MAX_TITLE_LEN)?;
    check_len("Description", description, MAX_DESCRIPTION_LEN)
}

pub async fn create<S>(
    store: &S,
    owner: Uuid,
    title: &str,
    description: &str,
    category: Option<&str>,
) -> Result<Note, AppError>
where
    S: NoteStore + ?Sized,
{
    validate_content(title, description)?;
    let category = match category.map(str::trim) {
        Some(category) if !category.is_empty() => category,
        _ => DEFAULT_CATEGORY,
    };
    check_len("Category", category, MAX_CATEGORY_LEN)?;

    let note = store
        .insert_note(NewNote {
            user_id: owner,
            title: title.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
        })
        .await?;
    tracing::debug!(note_id = %note.id, user_id = %owner, "note created");
    Ok(note)
}

pub async fn list<S>(store: &S, owner: Uuid) -> Result<Vec<Note>, AppError>
where
    S: NoteStore + ?Sized,
{
    Ok(store.notes_by_owner(owner).await?)
}

/// Returns how many notes changed: zero when `id` is unknown or not owned by
/// `owner`.
pub async fn update<S>(
    store: &S,
    owner: Uuid,
    id: Uuid,
    title: &str,
    description: &str,
) -> Result<u64, AppError>
where
    S: NoteStore + ?Sized,
{
    validate_content(title, description)?;
    let affected = store.update_note(owner, id, title, description).await?;
    if affected == 0 {
        tracing::debug!(note_id = %id, user_id = %owner, "update matched no owned note");
    }
    Ok(affected)
}

pub async fn delete<S>(store: &S, owner: Uuid, id: Uuid) -> Result<u64, AppError>
where
    S: NoteStore + ?Sized,
{
    let affected = store.delete_note(owner, id).await?;
    if affected == 0 {
        tracing::debug!(note_id = %id, user_id = %owner, "delete matched no owned note");
    }
    Ok(affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, UserStore};

    async fn user(store: &MemoryStore, username: &str) -> Uuid {
        store.insert_user(username, "hash").await.unwrap().id
    }

    #[tokio::test]
    async fn created_note_round_trips_through_list() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;

        let created = create(&store, owner, "Groceries", "milk, eggs", None)
            .await
            .unwrap();
        let notes = list(&store, owner).await.unwrap();

        assert_eq!(notes, vec![created]);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].description, "milk, eggs");
        assert_eq!(notes[0].category, "Personal");
    }

    #[tokio::test]
    async fn explicit_category_is_kept() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;
        let note = create(&store, owner, "Standup", "9am", Some("Work"))
            .await
            .unwrap();
        assert_eq!(note.category, "Work");

        let note = create(&store, owner, "Standup", "9am", Some("  "))
            .await
            .unwrap();
        assert_eq!(note.category, "Personal");
    }

    #[tokio::test]
    async fn missing_or_oversized_fields_are_rejected() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;

        for (title, description) in [("", "body"), ("title", ""), ("  ", "body")] {
            assert!(matches!(
                create(&store, owner, title, description, None).await,
                Err(AppError::Validation(_))
            ));
        }
        let long_title = "t".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            create(&store, owner, &long_title, "body", None).await,
            Err(AppError::Validation(_))
        ));
        let long_description = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(matches!(
            create(&store, owner, "title", &long_description, None).await,
            Err(AppError::Validation(_))
        ));
        assert!(list(&store, owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_owners_cannot_touch_a_note() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        let bob = user(&store, "bob").await;
        let note = create(&store, alice, "Secret", "alice only", None)
            .await
            .unwrap();

        assert!(list(&store, bob).await.unwrap().is_empty());
        assert_eq!(
            update(&store, bob, note.id, "Mine", "now").await.unwrap(),
            0
        );
        assert_eq!(delete(&store, bob, note.id).await.unwrap(), 0);
        assert_eq!(list(&store, alice).await.unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn owner_can_update_and_delete() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;
        let note = create(&store, owner, "Draft", "v1", Some("Work"))
            .await
            .unwrap();

        assert_eq!(
            update(&store, owner, note.id, "Final", "v2").await.unwrap(),
            1
        );
        let notes = list(&store, owner).await.unwrap();
        assert_eq!(notes[0].title, "Final");
        assert_eq!(notes[0].description, "v2");
        assert_eq!(notes[0].category, "Work");

        assert_eq!(delete(&store, owner, note.id).await.unwrap(), 1);
        assert!(list(&store, owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_note_changes_nothing() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;
        let note = create(&store, owner, "Keep", "as is", None).await.unwrap();

        assert_eq!(
            update(&store, owner, Uuid::new_v4(), "New", "text")
                .await
                .unwrap(),
            0
        );
        assert_eq!(list(&store, owner).await.unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn note_for_a_removed_user_is_forbidden() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;
        store.remove_user(owner).await;

        assert!(matches!(
            create(&store, owner, "Late", "after removal", None).await,
            Err(AppError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_store() {
        let store = MemoryStore::new();
        let owner = user(&store, "alice").await;
        let note = create(&store, owner, "Keep", "as is", None).await.unwrap();

        assert!(matches!(
            update(&store, owner, note.id, "", "text").await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(list(&store, owner).await.unwrap(), vec![note]);
    }
}
