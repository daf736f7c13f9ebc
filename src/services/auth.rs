use std::sync::Arc;

use tracing::instrument;

use crate::errors::RequestError;
use crate::models::credentials::{Credentials, LoginBody, RegisterBody};
use crate::store::UserStore;

/// Credentials that passed the presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

fn is_missing(field: Option<&str>) -> bool {
    field.is_none_or(str::is_empty)
}

/// Presence checks shared by register and login.
///
/// Order matters: a missing email is reported as such even when the password
/// is missing too, and the message never mentions the password in that case.
pub fn validate_credentials(
    credentials: &Credentials,
) -> Result<ValidCredentials<'_>, RequestError> {
    let email = credentials.email.as_deref();
    let password = credentials.password.as_deref();

    match (is_missing(email), is_missing(password)) {
        (true, true) => Err(RequestError::MissingEmail),
        (true, false) => Err(RequestError::MissingEmail),
        (false, true) => Err(RequestError::MissingPassword),
        (false, false) => Ok(ValidCredentials {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }),
    }
}

#[derive(Clone, Debug)]
pub struct AuthService {
    store: Arc<UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    #[instrument(name = "AuthService: Register attempt", skip(self, credentials))]
    pub fn register(&self, credentials: &Credentials) -> Result<RegisterBody, RequestError> {
        let valid = validate_credentials(credentials)?;

        if !self.store.is_registered(valid.email) {
            tracing::warn!(user_email = %valid.email, "Registration refused: not a defined user");
            return Err(RequestError::RegistrationRejected);
        }

        tracing::info!(user_email = %valid.email, "User registered");
        Ok(RegisterBody {
            id: self.store.registration_id(),
            token: self.store.token().to_owned(),
        })
    }

    /// Only membership of the email is checked; the password is never compared.
    #[instrument(name = "AuthService: Login attempt", skip(self, credentials))]
    pub fn login(&self, credentials: &Credentials) -> Result<LoginBody, RequestError> {
        let valid = validate_credentials(credentials)?;

        if !self.store.is_registered(valid.email) {
            tracing::warn!(user_email = %valid.email, "Login failed: User not found");
            return Err(RequestError::UnknownUser);
        }

        tracing::info!(user_email = %valid.email, "User authenticated successfully");
        Ok(LoginBody {
            token: self.store.token().to_owned(),
        })
    }
}
