//! Data class: a struct that is nothing but fields and accessors.
//!
//! The before variant's `User` holds id, name, email and age with no
//! behavior; every caller re-implements the same age checks and display
//! formatting. Move Method pulls that behavior onto the struct, and the
//! setters gain the validation the callers used to skip.
//!
//! Age categories: child under 13, teenager under 20, adult under 65,
//! senior from 65. Voting and adulthood both start at 18.

/// Bare data with pass-through accessors.
pub mod before {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct User {
        id: u64,
        name: String,
        email: String,
        age: u8,
    }

    impl User {
        #[must_use]
        pub fn new(id: u64, name: &str, email: &str, age: u8) -> Self {
            Self {
                id,
                name: name.to_string(),
                email: email.to_string(),
                age,
            }
        }

        #[must_use]
        pub fn id(&self) -> u64 {
            self.id
        }

        #[must_use]
        pub fn name(&self) -> &str {
            &self.name
        }

        #[must_use]
        pub fn email(&self) -> &str {
            &self.email
        }

        pub fn set_email(&mut self, email: &str) {
            self.email = email.to_string();
        }

        #[must_use]
        pub fn age(&self) -> u8 {
            self.age
        }

        pub fn set_age(&mut self, age: u8) {
            self.age = age;
        }
    }

    /// The behavior the struct should own, stranded at the call sites.
    #[must_use]
    pub fn display_name(user: &User) -> String {
        format!("{} ({} years old)", user.name(), user.age())
    }

    #[must_use]
    pub fn can_vote(user: &User) -> bool {
        user.age() >= 18
    }

    #[must_use]
    pub fn age_category(user: &User) -> &'static str {
        let age = user.age();
        if age < 13 {
            "child"
        } else if age < 20 {
            "teenager"
        } else if age < 65 {
            "adult"
        } else {
            "senior"
        }
    }
}

/// The data class grows up: validation in the setters, behavior on the type.
pub mod after {
    use crate::error::{Result, SmellbookError};

    fn email_looks_valid(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct User {
        id: u64,
        name: String,
        email: String,
        age: u8,
    }

    impl User {
        pub fn new(id: u64, name: &str, email: &str, age: u8) -> Result<Self> {
            let mut user = Self {
                id,
                name: name.to_string(),
                email: String::new(),
                age: 0,
            };
            user.set_email(email)?;
            user.set_age(age)?;
            Ok(user)
        }

        #[must_use]
        pub fn id(&self) -> u64 {
            self.id
        }

        #[must_use]
        pub fn name(&self) -> &str {
            &self.name
        }

        #[must_use]
        pub fn email(&self) -> &str {
            &self.email
        }

        pub fn set_email(&mut self, email: &str) -> Result<()> {
            if !email_looks_valid(email) {
                return Err(SmellbookError::validation("invalid email address"));
            }
            self.email = email.to_string();
            Ok(())
        }

        #[must_use]
        pub fn age(&self) -> u8 {
            self.age
        }

        pub fn set_age(&mut self, age: u8) -> Result<()> {
            if age > 150 {
                return Err(SmellbookError::validation("age must be between 0 and 150"));
            }
            self.age = age;
            Ok(())
        }

        #[must_use]
        pub fn display_name(&self) -> String {
            format!("{} ({} years old)", self.name, self.age)
        }

        #[must_use]
        pub fn can_vote(&self) -> bool {
            self.age >= 18
        }

        #[must_use]
        pub fn is_adult(&self) -> bool {
            self.age >= 18
        }

        #[must_use]
        pub fn age_category(&self) -> &'static str {
            if self.age < 13 {
                "child"
            } else if self.age < 20 {
                "teenager"
            } else if self.age < 65 {
                "adult"
            } else {
                "senior"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_matches_after_moving_onto_the_type() {
        let anemic = before::User::new(1, "John Doe", "john@example.com", 30);
        let rich = after::User::new(1, "John Doe", "john@example.com", 30).unwrap();

        assert_eq!(before::display_name(&anemic), rich.display_name());
        assert_eq!(before::can_vote(&anemic), rich.can_vote());
        assert_eq!(before::age_category(&anemic), rich.age_category());
        assert_eq!(rich.display_name(), "John Doe (30 years old)");
    }

    #[test]
    fn test_age_categories_match_across_boundaries() {
        for age in [0, 12, 13, 19, 20, 64, 65, 90] {
            let anemic = before::User::new(1, "x", "x@y.co", age);
            let rich = after::User::new(1, "x", "x@y.co", age).unwrap();
            assert_eq!(
                before::age_category(&anemic),
                rich.age_category(),
                "category diverges at {age}"
            );
            assert_eq!(before::can_vote(&anemic), rich.can_vote());
        }
    }

    #[test]
    fn test_voting_threshold() {
        let minor = after::User::new(1, "x", "x@y.co", 17).unwrap();
        let adult = after::User::new(2, "x", "x@y.co", 18).unwrap();
        assert!(!minor.can_vote());
        assert!(adult.can_vote());
        assert!(adult.is_adult());
    }

    #[test]
    fn test_setters_now_validate() {
        let mut user = after::User::new(1, "x", "x@y.co", 30).unwrap();
        assert!(user.set_email("invalid-email").is_err());
        assert_eq!(user.email(), "x@y.co");
        assert!(user.set_age(200).is_err());
        assert_eq!(user.age(), 30);

        // The anemic variant happily accepts garbage.
        let mut anemic = before::User::new(1, "x", "x@y.co", 30);
        anemic.set_email("invalid-email");
        assert_eq!(anemic.email(), "invalid-email");
    }
}
