use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handler::{
        delete_note_handler, show_notes_handler, signin_handler, signup_handler,
        submit_note_handler, update_note_handler,
    },
    jwt_auth::auth,
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let notes = Router::new()
        .route("/submit", post(submit_note_handler))
        .route("/showNotes", get(show_notes_handler))
        .route("/update/:id", put(update_note_handler))
        .route("/delete/:id", delete(delete_note_handler))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth));

    Router::new()
        .route("/signup", post(signup_handler))
        .route("/signin", post(signin_handler))
        .merge(notes)
        .with_state(app_state)
}
