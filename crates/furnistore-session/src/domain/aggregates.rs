//! Aggregate root for the admin session.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::credentials::VerifiedAdmin;
use super::stats::DashboardStats;

/// Message stored on the session when sign-in fails.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular administrator.
    Admin,
    /// Administrator over other administrators.
    SuperAdmin,
    /// Store manager.
    Manager,
}

/// A signed-in admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Granted permission identifiers.
    pub permissions: BTreeSet<String>,
    /// When this admin last signed in.
    pub last_login: DateTime<Utc>,
}

impl AdminUser {
    /// Builds the user record for a verified account signing in at `now`.
    #[must_use]
    pub fn signed_in(admin: VerifiedAdmin, now: DateTime<Utc>) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            role: admin.role,
            permissions: admin.permissions,
            last_login: now,
        }
    }
}

/// Store-wide settings editable by admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// ISO 4217 currency code prices are shown in.
    pub currency: String,
    /// Store display name.
    #[serde(default = "default_store_name")]
    pub store_name: String,
}

fn default_store_name() -> String {
    "FurniStore".to_owned()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            currency: "USD".to_owned(),
            store_name: default_store_name(),
        }
    }
}

/// Persisted shape of the session slot: the user merged with settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// The signed-in user.
    #[serde(flatten)]
    pub user: AdminUser,
    /// Settings at the time of the write.
    pub settings: StoreSettings,
}

/// Lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Persisted state not read yet.
    Uninitialized,
    /// Nobody is signed in.
    Anonymous,
    /// An admin is signed in.
    Authenticated,
}

/// The aggregate root for the admin session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: Option<AdminUser>,
    stats: Option<DashboardStats>,
    settings: StoreSettings,
    is_loading: bool,
    error: Option<String>,
}

impl Session {
    /// Creates a session that has not read its persisted state yet.
    #[must_use]
    pub fn uninitialized(settings: StoreSettings) -> Self {
        Self {
            user: None,
            stats: None,
            settings,
            is_loading: true,
            error: None,
        }
    }

    /// Finishes loading. With a restored user the session becomes
    /// authenticated; without one it becomes anonymous.
    pub fn restore(&mut self, restored: Option<(PersistedSession, DashboardStats)>) {
        if let Some((persisted, stats)) = restored {
            self.user = Some(persisted.user);
            self.settings = persisted.settings;
            self.stats = Some(stats);
        } else {
            self.user = None;
            self.stats = None;
        }
        self.is_loading = false;
    }

    /// Replaces the whole session with a signed-in `user`.
    pub fn sign_in(&mut self, user: AdminUser, stats: DashboardStats) {
        self.user = Some(user);
        self.stats = Some(stats);
        self.error = None;
        self.is_loading = false;
    }

    /// Records a failed sign-in. Whoever was signed in stays signed in.
    pub fn reject_sign_in(&mut self) {
        self.error = Some(INVALID_CREDENTIALS_MESSAGE.to_owned());
        self.is_loading = false;
    }

    /// Drops the signed-in user and everything derived from it.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.stats = None;
        self.error = None;
        self.is_loading = false;
    }

    /// Replaces settings without touching the user.
    pub fn set_settings(&mut self, settings: StoreSettings) {
        self.settings = settings;
    }

    /// Replaces the dashboard figures of a signed-in session.
    pub fn set_stats(&mut self, stats: DashboardStats) {
        if self.user.is_some() {
            self.stats = Some(stats);
        }
    }

    /// Clears the last error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Returns true iff an admin is signed in and holds `permission`.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.permissions.contains(permission))
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.is_loading {
            SessionStatus::Uninitialized
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// The signed-in admin, if any.
    #[must_use]
    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    /// Dashboard figures, present only while signed in.
    #[must_use]
    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    /// Current store settings.
    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Last sign-in error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true until persisted state has been read.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Persisted shape of a signed-in session.
    #[must_use]
    pub fn to_persisted(&self) -> Option<PersistedSession> {
        self.user.as_ref().map(|user| PersistedSession {
            user: user.clone(),
            settings: self.settings.clone(),
        })
    }
}
