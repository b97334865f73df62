/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use roster_core::{NewUser, User, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/users`
///
/// Missing or non-string fields become empty strings and are then rejected
/// by validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: UserId,
    pub message: String,
}

impl CreateUserRequest {
    /// Parse a raw request body
    ///
    /// An empty body or a JSON `null` is treated as `{}`. Anything that is
    /// not a JSON object is a bad request.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {}", e)))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {}", e))),
            _ => Err(ServerError::BadRequest(
                "invalid JSON body: expected an object".to_string(),
            )),
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// GET /api/users
/// List all users, newest first
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list_users().await?;
    Ok(Json(users))
}

/// POST /api/users
/// Create a user from a name and email
pub async fn create_user(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let req = CreateUserRequest::from_body(&body)?;

    // Validation happens before any connection is opened
    let user = NewUser::new(&req.name, &req.email)
        .map_err(|e| ServerError::Validation(e.to_string()))?;

    let id = app_state.users.create_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id,
            message: "User created".to_string(),
        }),
    ))
}
