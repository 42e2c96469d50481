//! Registration and sign-in.
//!
//! Passwords only ever leave this module as Argon2 PHC strings.

use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use once_cell::sync::Lazy;
use rand_core::OsRng;

use crate::{
    error::AppError,
    jwt_auth,
    model::{User, MAX_USERNAME_LEN},
    store::UserStore,
};

// Checked against when the username is unknown so that a miss costs the same
// Argon2 work as a wrong password.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("not-a-real-password").ok());

fn require_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_owned(),
        ));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Error while hashing password: {}", e)))
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

pub async fn register<S>(store: &S, username: &str, password: &str) -> Result<User, AppError>
where
    S: UserStore + ?Sized,
{
    require_credentials(username, password)?;
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }

    if store.find_user_by_username(username).await?.is_some() {
        return Err(AppError::Conflict);
    }

    let hashed_password = hash_password(password)?;
    // The unique index still catches a concurrent registration of the same name.
    let user = store.insert_user(username, &hashed_password).await?;
    tracing::info!(user_id = %user.id, "user registered");
    Ok(user)
}

/// Checks the credentials and issues a bearer token for the user.
pub async fn authenticate<S>(
    store: &S,
    username: &str,
    password: &str,
    secret: &str,
    expires_in_days: i64,
) -> Result<String, AppError>
where
    S: UserStore + ?Sized,
{
    require_credentials(username, password)?;

    let user = match store.find_user_by_username(username).await? {
        Some(user) => user,
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(password, dummy);
            }
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(password, &user.password) {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt_auth::issue_token(&user, secret, expires_in_days)?;
    tracing::info!(user_id = %user.id, "user signed in");
    Ok(token)
}
