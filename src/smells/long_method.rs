//! Long method: one registration function doing nine jobs.
//!
//! The before variant validates, checks for duplicates, hashes the
//! password, writes the user, the profile and the default settings, sends
//! the verification email, posts a welcome notification and logs, all
//! inline in one function body. The after variant keeps the same
//! observable behavior but extracts each concern behind a seam so the
//! orchestrator reads as a table of contents.
//!
//! The database, the mailer and the notifier are simulated; their only
//! observable effect is a `tracing` line and an entry in the in-memory
//! store, which is what the equivalence tests compare.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Registration input shared by both variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Minimal email shape check shared by both variants: one `@` with a dot
/// somewhere after it, non-empty local part.
fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Stand-in for a password hash; stable across variants so stored rows
/// compare equal.
fn hash_password(password: &str) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in password.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    format!("{hash:016x}")
}

/// Everything inline.
pub mod before {
    use tracing::info;

    use super::{email_looks_valid, hash_password, Registration};
    use crate::error::{Result, SmellbookError};

    /// A stored user row (simulated persistence).
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StoredUser {
        pub id: u64,
        pub email: String,
        pub password_hash: String,
        pub phone: String,
        pub theme: String,
        pub welcomed: bool,
    }

    #[derive(Debug, Default)]
    pub struct UserManager {
        users: Vec<StoredUser>,
    }

    impl UserManager {
        /// Register a user. Validation, persistence, email, notification
        /// and logging all live here.
        pub fn register_user(&mut self, data: &Registration) -> Result<u64> {
            // Validate input data
            if data.email.is_empty() {
                return Err(SmellbookError::validation("email is required"));
            }
            if data.password.is_empty() {
                return Err(SmellbookError::validation("password is required"));
            }
            if data.password.len() < 8 {
                return Err(SmellbookError::validation(
                    "password must be at least 8 characters",
                ));
            }
            if !email_looks_valid(&data.email) {
                return Err(SmellbookError::validation("invalid email format"));
            }

            // Check if user already exists
            if self.users.iter().any(|u| u.email == data.email) {
                return Err(SmellbookError::validation("user already exists"));
            }

            // Hash password
            let password_hash = hash_password(&data.password);

            // Insert user, profile and default settings
            let id = self.users.len() as u64 + 1;
            self.users.push(StoredUser {
                id,
                email: data.email.clone(),
                password_hash,
                phone: data.phone.clone(),
                theme: "light".to_string(),
                welcomed: false,
            });

            // Send verification email (simulated)
            info!(to = %data.email, "sending verification email");

            // Send welcome notification (simulated)
            if let Some(user) = self.users.last_mut() {
                user.welcomed = true;
            }

            // Log registration
            info!(email = %data.email, id, "user registered");

            Ok(id)
        }

        #[must_use]
        pub fn stored(&self) -> &[StoredUser] {
            &self.users
        }
    }
}

/// The same flow, one seam per concern.
pub mod after {
    use tracing::info;

    use super::{email_looks_valid, hash_password, Registration};
    use crate::error::{Result, SmellbookError};

    pub use super::before::StoredUser;

    /// Validates registration input.
    pub trait RegistrationValidator {
        fn validate(&self, data: &Registration) -> Result<()>;
    }

    /// Persists users, profiles and settings.
    pub trait UserRepository {
        fn exists(&self, email: &str) -> bool;
        fn create(&mut self, data: &Registration, password_hash: &str) -> u64;
        fn mark_welcomed(&mut self, id: u64);
        fn stored(&self) -> &[StoredUser];
    }

    /// Sends the verification email.
    pub trait Mailer {
        fn send_verification(&self, email: &str);
    }

    /// Default validator with the same rules as the inline version.
    #[derive(Debug, Default)]
    pub struct BasicValidator;

    impl RegistrationValidator for BasicValidator {
        fn validate(&self, data: &Registration) -> Result<()> {
            if data.email.is_empty() {
                return Err(SmellbookError::validation("email is required"));
            }
            if data.password.is_empty() {
                return Err(SmellbookError::validation("password is required"));
            }
            if data.password.len() < 8 {
                return Err(SmellbookError::validation(
                    "password must be at least 8 characters",
                ));
            }
            if !email_looks_valid(&data.email) {
                return Err(SmellbookError::validation("invalid email format"));
            }
            Ok(())
        }
    }

    /// In-memory repository matching the before variant's storage.
    #[derive(Debug, Default)]
    pub struct InMemoryUsers {
        users: Vec<StoredUser>,
    }

    impl UserRepository for InMemoryUsers {
        fn exists(&self, email: &str) -> bool {
            self.users.iter().any(|u| u.email == email)
        }

        fn create(&mut self, data: &Registration, password_hash: &str) -> u64 {
            let id = self.users.len() as u64 + 1;
            self.users.push(StoredUser {
                id,
                email: data.email.clone(),
                password_hash: password_hash.to_string(),
                phone: data.phone.clone(),
                theme: "light".to_string(),
                welcomed: false,
            });
            id
        }

        fn mark_welcomed(&mut self, id: u64) {
            if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                user.welcomed = true;
            }
        }

        fn stored(&self) -> &[StoredUser] {
            &self.users
        }
    }

    /// Mailer that only logs, like the simulation it replaces.
    #[derive(Debug, Default)]
    pub struct LoggingMailer;

    impl Mailer for LoggingMailer {
        fn send_verification(&self, email: &str) {
            info!(to = %email, "sending verification email");
        }
    }

    /// Orchestrates registration; each step is one call.
    pub struct UserManager<V, R, M> {
        validator: V,
        repository: R,
        mailer: M,
    }

    impl Default for UserManager<BasicValidator, InMemoryUsers, LoggingMailer> {
        fn default() -> Self {
            Self::new(BasicValidator, InMemoryUsers::default(), LoggingMailer)
        }
    }

    impl<V, R, M> UserManager<V, R, M>
    where
        V: RegistrationValidator,
        R: UserRepository,
        M: Mailer,
    {
        pub fn new(validator: V, repository: R, mailer: M) -> Self {
            Self {
                validator,
                repository,
                mailer,
            }
        }

        pub fn register_user(&mut self, data: &Registration) -> Result<u64> {
            self.validator.validate(data)?;

            if self.repository.exists(&data.email) {
                return Err(SmellbookError::validation("user already exists"));
            }

            let password_hash = hash_password(&data.password);
            let id = self.repository.create(data, &password_hash);

            self.mailer.send_verification(&data.email);
            self.repository.mark_welcomed(id);
            info!(email = %data.email, id, "user registered");

            Ok(id)
        }

        #[must_use]
        pub fn stored(&self) -> &[StoredUser] {
            self.repository.stored()
        }
    }
}

/// Run the same registration against both variants and return both outcomes.
pub fn register_in_both(
    data: &Registration,
) -> (Result<u64>, Result<u64>) {
    let mut smelly = before::UserManager::default();
    let mut clean = after::UserManager::default();
    (smelly.register_user(data), clean.register_user(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmellbookError;

    fn valid_registration() -> Registration {
        Registration {
            email: "jo@example.com".into(),
            password: "password123".into(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            phone: "555-1234".into(),
        }
    }

    #[test]
    fn test_successful_registration_matches() {
        let data = valid_registration();
        let mut smelly = before::UserManager::default();
        let mut clean = after::UserManager::default();

        let id_before = smelly.register_user(&data).unwrap();
        let id_after = clean.register_user(&data).unwrap();

        assert_eq!(id_before, id_after);
        assert_eq!(smelly.stored(), clean.stored());
        assert!(smelly.stored()[0].welcomed);
    }

    #[test]
    fn test_validation_errors_match() {
        let cases = [
            Registration {
                email: String::new(),
                ..valid_registration()
            },
            Registration {
                password: "short".into(),
                ..valid_registration()
            },
            Registration {
                email: "not-an-email".into(),
                ..valid_registration()
            },
        ];

        for data in &cases {
            let (got_before, got_after) = register_in_both(data);
            assert_eq!(got_before, got_after, "divergence for {:?}", data.email);
            assert!(got_before.is_err());
        }
    }

    #[test]
    fn test_duplicate_registration_rejected_in_both() {
        let data = valid_registration();
        let mut smelly = before::UserManager::default();
        let mut clean = after::UserManager::default();

        smelly.register_user(&data).unwrap();
        clean.register_user(&data).unwrap();

        let err_before = smelly.register_user(&data).unwrap_err();
        let err_after = clean.register_user(&data).unwrap_err();
        assert_eq!(err_before, err_after);
        assert_eq!(
            err_before,
            SmellbookError::validation("user already exists")
        );
    }

    #[test]
    fn test_password_hash_is_stable() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }

    #[test]
    fn test_email_shape_check() {
        assert!(email_looks_valid("a@b.co"));
        assert!(!email_looks_valid("a@b"));
        assert!(!email_looks_valid("@b.co"));
        assert!(!email_looks_valid("plain"));
    }
}
