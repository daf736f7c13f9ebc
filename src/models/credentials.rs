use serde::{Deserialize, Serialize};

/// Login and registration input. `null` and absent fields both end up as
/// `None` and are treated the same as an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterBody {
    pub id: u64,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub token: String,
}
