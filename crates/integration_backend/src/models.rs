//! Backend request and response bodies

use serde::{Deserialize, Deserializer, Serialize};

use domain::Role;

/// Body of `POST /auth/login`
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

/// Successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub token: String,
    /// Greeting to show the user
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful ride request
#[derive(Debug, Clone, Deserialize)]
pub struct RideBooked {
    /// Identifier of the new ride
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Confirmation to show the user
    #[serde(default)]
    pub message: Option<String>,
}

/// Fields the backend adds to failure bodies
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
