use chrono::Utc;
use diesel::prelude::*;

use crate::domain::types::PasswordHash;
use crate::models::credential::{ADMIN_SETTINGS_ID, AdminSettings};
use crate::repository::{CredentialReader, CredentialWriter, DieselRepository, RepositoryResult};

impl CredentialReader for DieselRepository {
    fn get_password_hash(&self) -> RepositoryResult<Option<PasswordHash>> {
        use crate::schema::admin_settings;

        let mut conn = self.conn()?;

        let hash = admin_settings::table
            .find(ADMIN_SETTINGS_ID)
            .select(admin_settings::password_hash)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(hash.map(PasswordHash::new).transpose()?)
    }
}

impl CredentialWriter for DieselRepository {
    fn set_password_hash(&self, hash: &PasswordHash) -> RepositoryResult<bool> {
        use crate::schema::admin_settings;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::insert_into(admin_settings::table)
            .values(&AdminSettings::new(hash.as_str(), now))
            .on_conflict(admin_settings::id)
            .do_update()
            .set((
                admin_settings::password_hash.eq(hash.as_str()),
                admin_settings::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }

    fn bootstrap_password_hash(&self, hash: &PasswordHash) -> RepositoryResult<bool> {
        use crate::schema::admin_settings;

        let mut conn = self.conn()?;

        let inserted = diesel::insert_into(admin_settings::table)
            .values(&AdminSettings::new(hash.as_str(), Utc::now().naive_utc()))
            .on_conflict_do_nothing()
            .execute(&mut conn)?;

        Ok(inserted == 1)
    }
}
