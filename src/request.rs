use serde::Deserialize;

// Fields are optional so that absent and `null` values both reach the
// services as missing input.

#[derive(Debug, Deserialize)]
pub struct SignupUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SigninUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
}
