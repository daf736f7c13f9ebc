use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use tracing::instrument;

use crate::errors::ApiError;
use crate::models::user::{CreatedUser, UpdatedUser, UserEnvelope, UserUpdatePayload};
use crate::store::UserStore;

pub const MIN_CREATED_ID: u16 = 1;
pub const MAX_CREATED_ID: u16 = 999;

/// `2024-05-01T09:30:12.345Z`: UTC, millisecond precision, literal `Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn random_user_id() -> u16 {
    rand::thread_rng().gen_range(MIN_CREATED_ID..=MAX_CREATED_ID)
}

#[derive(Clone, Debug)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    #[instrument(name = "UserService: Lookup", skip(self))]
    pub fn find(&self, id: u64) -> Result<UserEnvelope, ApiError> {
        let Some(user) = self.store.find_by_id(id) else {
            tracing::warn!("User not found");
            return Err(ApiError::NotFound);
        };

        Ok(UserEnvelope {
            data: user.clone(),
            support: self.store.support().clone(),
        })
    }

    /// Echoes the payload with a fresh id. Nothing is stored.
    #[instrument(name = "UserService: Create", skip(self, payload))]
    pub fn create(&self, payload: UserUpdatePayload) -> CreatedUser {
        let created = CreatedUser {
            job: payload.job,
            name: payload.name,
            id: random_user_id(),
            updated_at: current_timestamp(),
        };
        tracing::info!(user_id = created.id, "User created");
        created
    }

    /// Shared by PUT and PATCH; the target id is not consulted.
    #[instrument(name = "UserService: Update", skip(self, payload))]
    pub fn update(&self, payload: UserUpdatePayload) -> UpdatedUser {
        UpdatedUser {
            job: payload.job,
            name: payload.name,
            updated_at: current_timestamp(),
        }
    }
}
