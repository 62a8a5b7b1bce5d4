use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    repositories::users::UserRepository, value_objects::login_form::RawLoginForm,
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Something went wrong.";

/// Identity attached to a session once credentials check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Result of a credential check. Account-miss and password-mismatch are
/// deliberately indistinguishable to the caller; lookup failures are a
/// separate kind so operators can tell an outage from a bad password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(SessionUser),
    InvalidCredentials,
    LookupFailed,
}

impl AuthOutcome {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            AuthOutcome::Authenticated(_) => None,
            AuthOutcome::InvalidCredentials => Some(INVALID_CREDENTIALS_MESSAGE),
            AuthOutcome::LookupFailed => Some(LOOKUP_FAILED_MESSAGE),
        }
    }
}

pub struct AuthenticationUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<U>,
}

impl<U> AuthenticationUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    pub async fn authenticate(&self, raw_form: RawLoginForm) -> AuthOutcome {
        let (email, password) = match Self::well_formed(&raw_form) {
            Some(credentials) => credentials,
            None => {
                info!("authentication: malformed credentials submission");
                return AuthOutcome::InvalidCredentials;
            }
        };

        let user = match self.user_repository.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!("authentication: no account for submitted email");
                return AuthOutcome::InvalidCredentials;
            }
            Err(err) => {
                error!(db_error = ?err, "authentication: user lookup failed");
                return AuthOutcome::LookupFailed;
            }
        };

        if Self::password_matches(password, &user.password_hash) {
            info!(user_id = %user.id, "authentication: credentials accepted");
            AuthOutcome::Authenticated(SessionUser {
                id: user.id,
                name: user.name,
                email: user.email,
            })
        } else {
            info!(user_id = %user.id, "authentication: password mismatch");
            AuthOutcome::InvalidCredentials
        }
    }

    // Shape check before any storage round-trip; the thresholds mirror the
    // login form's own constraints.
    fn well_formed(raw_form: &RawLoginForm) -> Option<(&str, &str)> {
        let email = raw_form.email.as_deref()?.trim();
        let password = raw_form.password.as_deref()?;

        if email.contains('@') && password.len() >= 6 {
            Some((email, password))
        } else {
            None
        }
    }

    fn password_matches(password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(err) => {
                error!(hash_error = %err, "authentication: stored password hash is malformed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use argon2::{PasswordHasher, password_hash::SaltString};
    use rand::rngs::OsRng;

    use crate::domain::{
        entities::users::UserEntity, repositories::users::MockUserRepository,
    };

    fn hash(password: &str) -> String {
        Argon2::default()
            .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
            .unwrap()
            .to_string()
    }

    fn sample_user(email: &str, password: &str) -> UserEntity {
        UserEntity {
            id: Uuid::new_v4(),
            name: "User".to_string(),
            email: email.to_string(),
            password_hash: hash(password),
        }
    }

    fn login(email: &str, password: &str) -> RawLoginForm {
        RawLoginForm {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn accepts_valid_credentials() {
        let user = sample_user("amy@example.com", "hunter2boogaloo");
        let user_id = user.id;

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .withf(|email| email == "amy@example.com")
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });

        let usecase = AuthenticationUseCase::new(Arc::new(user_repo));
        let outcome = usecase
            .authenticate(login("amy@example.com", "hunter2boogaloo"))
            .await;

        let AuthOutcome::Authenticated(session_user) = outcome else {
            panic!("expected authentication to succeed");
        };
        assert_eq!(session_user.id, user_id);
        assert_eq!(session_user.email, "amy@example.com");
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .withf(|email| email == "ghost@example.com")
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repo
            .expect_find_by_email()
            .withf(|email| email == "amy@example.com")
            .returning(|_| {
                Box::pin(async {
                    Ok(Some(UserEntity {
                        id: Uuid::new_v4(),
                        name: "Amy".to_string(),
                        email: "amy@example.com".to_string(),
                        password_hash: hash("correct-password"),
                    }))
                })
            });

        let usecase = AuthenticationUseCase::new(Arc::new(user_repo));

        let missing_account = usecase
            .authenticate(login("ghost@example.com", "whatever-password"))
            .await;
        let wrong_password = usecase
            .authenticate(login("amy@example.com", "not-the-password"))
            .await;

        assert_eq!(missing_account, AuthOutcome::InvalidCredentials);
        assert_eq!(missing_account, wrong_password);
        assert_eq!(
            missing_account.error_message(),
            Some(INVALID_CREDENTIALS_MESSAGE)
        );
    }

    #[tokio::test]
    async fn lookup_failure_is_a_distinct_outcome_with_generic_message() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Err(anyhow!("connection refused")) }));

        let usecase = AuthenticationUseCase::new(Arc::new(user_repo));
        let outcome = usecase
            .authenticate(login("amy@example.com", "hunter2boogaloo"))
            .await;

        assert_eq!(outcome, AuthOutcome::LookupFailed);
        assert_eq!(outcome.error_message(), Some(LOOKUP_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn malformed_submissions_fail_without_touching_storage() {
        // No expectation on the repository: a lookup would panic.
        let usecase = AuthenticationUseCase::new(Arc::new(MockUserRepository::new()));

        let missing_email = usecase
            .authenticate(RawLoginForm {
                email: None,
                password: Some("hunter2boogaloo".to_string()),
            })
            .await;
        let not_an_email = usecase.authenticate(login("not-an-email", "hunter2boogaloo")).await;
        let short_password = usecase.authenticate(login("amy@example.com", "tiny")).await;

        assert_eq!(missing_email, AuthOutcome::InvalidCredentials);
        assert_eq!(not_an_email, AuthOutcome::InvalidCredentials);
        assert_eq!(short_password, AuthOutcome::InvalidCredentials);
    }
}
