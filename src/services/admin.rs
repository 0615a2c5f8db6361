use crate::dto::SuccessDto;
use crate::forms::admin::SetPasswordFormPayload;
use crate::repository::CredentialWriter;

use super::{ServiceError, ServiceResult};

/// Replace the admin password.
///
/// Callers are not authenticated; anyone reaching this endpoint may overwrite
/// the credential. A storage failure is reported as `success: false`.
pub fn set_password<R>(payload: SetPasswordFormPayload, repo: &R) -> ServiceResult<SuccessDto>
where
    R: CredentialWriter,
{
    let hash = payload.password.hash().map_err(|e| {
        log::error!("Failed to hash admin password: {e}");
        ServiceError::Internal
    })?;

    match repo.set_password_hash(&hash) {
        Ok(success) => {
            log::warn!("Admin password replaced");
            Ok(success.into())
        }
        Err(e) => {
            log::error!("Failed to store admin password: {e}");
            Ok(false.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::ClearTextPassword;
    use crate::repository::test::TestRepository;

    fn payload(raw: &str) -> SetPasswordFormPayload {
        SetPasswordFormPayload {
            password: ClearTextPassword::new(raw.to_string()),
        }
    }

    #[test]
    fn overwrites_existing_password() {
        let old = ClearTextPassword::new("abc123".into()).hash().unwrap();
        let repo = TestRepository::default().with_password_hash(old);

        let result = set_password(payload("nuevo123"), &repo).unwrap();

        assert!(result.success);
        let stored = repo.stored_hash().unwrap();
        assert!(ClearTextPassword::new("nuevo123".into()).verify(&stored));
        assert!(!ClearTextPassword::new("abc123".into()).verify(&stored));
    }

    #[test]
    fn storage_failure_reports_unsuccessful() {
        let repo = TestRepository::default();
        repo.fail_storage();

        let result = set_password(payload("nuevo123"), &repo).unwrap();
        assert!(!result.success);
    }
}
