use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::{
    account,
    error::AppError,
    extract::{ValidJson, ValidPath},
    jwt_auth::TokenClaims,
    notes,
    request::*,
    response::*,
    AppState,
};

pub async fn signup_handler(
    State(data): State<Arc<AppState>>,
    ValidJson(body): ValidJson<SignupUser>,
) -> Result<impl IntoResponse, AppError> {
    account::register(
        &*data.store,
        body.username.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success("User registered successfully")),
    ))
}

pub async fn signin_handler(
    State(data): State<Arc<AppState>>,
    ValidJson(body): ValidJson<SigninUser>,
) -> Result<impl IntoResponse, AppError> {
    let token = account::authenticate(
        &*data.store,
        body.username.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
        &data.config.jwt_secret,
        data.config.jwt_expires_in_days,
    )
    .await?;
    Ok(Json(TokenResponse { token }))
}

pub async fn submit_note_handler(
    State(data): State<Arc<AppState>>,
    Extension(token): Extension<TokenClaims>,
    ValidJson(body): ValidJson<PostNote>,
) -> Result<impl IntoResponse, AppError> {
    let note = notes::create(
        &*data.store,
        token.sub,
        body.title.as_deref().unwrap_or_default(),
        body.description.as_deref().unwrap_or_default(),
        body.category.as_deref(),
    )
    .await?;
    Ok(Json(FilteredNote::from(&note)))
}

pub async fn show_notes_handler(
    State(data): State<Arc<AppState>>,
    Extension(token): Extension<TokenClaims>,
) -> Result<impl IntoResponse, AppError> {
    let notes = notes::list(&*data.store, token.sub).await?;
    let response: Vec<FilteredNote> = notes.iter().map(FilteredNote::from).collect();
    Ok(Json(response))
}

pub async fn update_note_handler(
    State(data): State<Arc<AppState>>,
    Extension(token): Extension<TokenClaims>,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(body): ValidJson<UpdateNote>,
) -> Result<impl IntoResponse, AppError> {
    notes::update(
        &*data.store,
        token.sub,
        id,
        body.title.as_deref().unwrap_or_default(),
        body.description.as_deref().unwrap_or_default(),
    )
    .await?;
    Ok(Json(MessageResponse::success("Note updated successfully")))
}

pub async fn delete_note_handler(
    State(data): State<Arc<AppState>>,
    Extension(token): Extension<TokenClaims>,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    notes::delete(&*data.store, token.sub, id).await?;
    Ok(Json(MessageResponse::success("Note deleted successfully")))
}
