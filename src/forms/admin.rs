use serde::Deserialize;
use validator::Validate;

use crate::password::{ClearTextPassword, MIN_ADMIN_PASSWORD_LENGTH};

#[derive(Deserialize, Validate)]
pub struct SetPasswordForm {
    #[validate(length(min = MIN_ADMIN_PASSWORD_LENGTH))]
    pub password: String,
}

#[derive(Debug)]
pub struct SetPasswordFormPayload {
    pub password: ClearTextPassword,
}

form_error!(
    SetPasswordFormError,
    "Password must be at least 6 characters long: {0}",
    "Password contains invalid data: {0}"
);

impl TryFrom<SetPasswordForm> for SetPasswordFormPayload {
    type Error = SetPasswordFormError;

    fn try_from(value: SetPasswordForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            password: value.password.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_of_length(len: u64) -> SetPasswordForm {
        SetPasswordForm {
            password: "a".repeat(len as usize),
        }
    }

    #[test]
    fn accepts_minimum_length() {
        let form = form_of_length(MIN_ADMIN_PASSWORD_LENGTH);
        assert!(SetPasswordFormPayload::try_from(form).is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let form = form_of_length(MIN_ADMIN_PASSWORD_LENGTH - 1);
        let err = SetPasswordFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, SetPasswordFormError::Validation(_)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(
            SetPasswordFormPayload::try_from(SetPasswordForm {
                password: "ñandú1".to_string(),
            })
            .is_ok()
        );
    }
}
