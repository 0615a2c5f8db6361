use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Primary key of the only row the `admin_settings` table may hold.
pub const ADMIN_SETTINGS_ID: i32 = 1;

/// Diesel model representing the singleton `admin_settings` row.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::admin_settings)]
pub struct AdminSettings {
    pub id: i32,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AdminSettings {
    pub fn new(password_hash: &str, now: NaiveDateTime) -> Self {
        Self {
            id: ADMIN_SETTINGS_ID,
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
