use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportInfo {
    pub url: String,
    pub text: String,
}

/// Body of `GET /api/users/{id}`.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub data: UserRecord,
    pub support: SupportInfo,
}

/// Body of `POST /api/users`, `PUT` and `PATCH /api/users/{id}`.
///
/// Missing fields read as empty strings; nothing here is validated.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdatePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub job: String,
    pub name: String,
    pub id: u16,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct UpdatedUser {
    pub job: String,
    pub name: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
