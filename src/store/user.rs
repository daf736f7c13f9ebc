use std::collections::{HashMap, HashSet};

use crate::configuration::SeedSettings;
use crate::models::user::{SupportInfo, UserRecord};

/// Read-only seed tables. Built once at startup and shared behind an `Arc`.
#[derive(Debug)]
pub struct UserStore {
    users: HashMap<u64, UserRecord>,
    registered_emails: HashSet<String>,
    support: SupportInfo,
    token: String,
    registration_id: u64,
}

impl UserStore {
    pub fn new(seed: SeedSettings) -> Self {
        let users = seed
            .users
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Self {
            users,
            registered_emails: seed.registered_emails.into_iter().collect(),
            support: seed.support,
            token: seed.token,
            registration_id: seed.registration_id,
        }
    }

    pub fn find_by_id(&self, id: u64) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.registered_emails.contains(email)
    }

    pub fn support(&self) -> &SupportInfo {
        &self.support
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn registration_id(&self) -> u64 {
        self.registration_id
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(SeedSettings::default())
    }
}
