//! User profile and application settings singletons.
//!
//! # Responsibility
//! - Define the two singleton records and their shallow-merge patch types.
//!
//! # Invariants
//! - `AppSettings::secure_session` gates all durable writes; the flag
//!   itself is only persisted while it is `false`.

use serde::{Deserialize, Serialize};

/// First day of the week for calendar presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    Monday,
    Sunday,
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

/// Singleton user profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "Aman".to_string(),
            last_name: "Jha".to_string(),
            email: "amanjha@example.com".to_string(),
            avatar: "https://picsum.photos/seed/user123/200/200".to_string(),
        }
    }
}

/// Singleton application settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub daily_reminders: bool,
    pub weekly_reports: bool,
    pub achievement_notifications: bool,
    pub start_week_on: WeekStart,
    pub theme: Theme,
    /// Free-form IANA zone name or the `"Auto-detect"` sentinel.
    pub timezone: String,
    /// When true, mutations apply in memory only and nothing is written
    /// durably for the rest of the session.
    pub secure_session: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            weekly_reports: true,
            achievement_notifications: true,
            start_week_on: WeekStart::Monday,
            theme: Theme::Light,
            timezone: "Auto-detect".to_string(),
            secure_session: false,
        }
    }
}

/// Shallow-merge patch for [`UserProfile`]; `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl ProfilePatch {
    /// Applies every set field onto `profile`.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(first_name) = self.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            profile.last_name = last_name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
    }
}

/// Shallow-merge patch for [`AppSettings`]; `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub daily_reminders: Option<bool>,
    pub weekly_reports: Option<bool>,
    pub achievement_notifications: Option<bool>,
    pub start_week_on: Option<WeekStart>,
    pub theme: Option<Theme>,
    pub timezone: Option<String>,
    pub secure_session: Option<bool>,
}

impl SettingsPatch {
    /// Applies every set field onto `settings`.
    pub fn apply_to(self, settings: &mut AppSettings) {
        if let Some(daily_reminders) = self.daily_reminders {
            settings.daily_reminders = daily_reminders;
        }
        if let Some(weekly_reports) = self.weekly_reports {
            settings.weekly_reports = weekly_reports;
        }
        if let Some(achievement_notifications) = self.achievement_notifications {
            settings.achievement_notifications = achievement_notifications;
        }
        if let Some(start_week_on) = self.start_week_on {
            settings.start_week_on = start_week_on;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(timezone) = self.timezone {
            settings.timezone = timezone;
        }
        if let Some(secure_session) = self.secure_session {
            settings.secure_session = secure_session;
        }
    }
}
