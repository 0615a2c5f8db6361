//! Shared-password gate in front of every catalog mutation.
//!
//! The first create request against an empty credential store establishes the
//! admin password. Update and delete never do; they require the password to
//! exist already.

use crate::domain::types::PasswordHash;
use crate::password::ClearTextPassword;
use crate::repository::{CredentialReader, CredentialWriter};

use super::{ServiceError, ServiceResult};

pub struct AdminGate<'a, R> {
    repo: &'a R,
}

impl<'a, R> AdminGate<'a, R>
where
    R: CredentialReader,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Gate for update and delete operations.
    pub fn authorize_existing(&self, password: &ClearTextPassword) -> ServiceResult<()> {
        match self.stored_hash()? {
            Some(hash) => check(password, &hash),
            None => {
                log::warn!("Mutation rejected: no admin password configured");
                Err(ServiceError::PasswordNotConfigured)
            }
        }
    }

    fn stored_hash(&self) -> ServiceResult<Option<PasswordHash>> {
        self.repo.get_password_hash().map_err(|e| {
            log::error!("Failed to read admin password hash: {e}");
            ServiceError::Internal
        })
    }
}

impl<R> AdminGate<'_, R>
where
    R: CredentialReader + CredentialWriter,
{
    /// Gate for create operations. Bootstraps the credential when none is
    /// stored yet.
    pub fn authorize_create(&self, password: &ClearTextPassword) -> ServiceResult<()> {
        if let Some(hash) = self.stored_hash()? {
            return check(password, &hash);
        }

        let hash = password.hash().map_err(|e| {
            log::error!("Failed to hash admin password: {e}");
            ServiceError::Internal
        })?;

        match self.repo.bootstrap_password_hash(&hash) {
            Ok(true) => {
                log::warn!("Admin password bootstrapped from the first create request");
                Ok(())
            }
            // Another request bootstrapped first; its password is the one to match.
            Ok(false) => match self.stored_hash()? {
                Some(winner) => check(password, &winner),
                None => {
                    log::error!("Admin password missing right after a lost bootstrap");
                    Err(ServiceError::Internal)
                }
            },
            Err(e) => {
                log::error!("Failed to bootstrap admin password: {e}");
                Err(ServiceError::Internal)
            }
        }
    }
}

fn check(password: &ClearTextPassword, hash: &PasswordHash) -> ServiceResult<()> {
    if password.verify(hash) {
        Ok(())
    } else {
        log::warn!("Mutation rejected: incorrect admin password");
        Err(ServiceError::IncorrectPassword)
    }
}
