//! Data clumps: street/city/state/zip traveling as loose parameters.
//!
//! Five methods on the before variant's customer service take some subset
//! of the same address and name fields positionally. The after variant
//! consolidates each clump into a value object ([`after::Address`],
//! [`after::FullName`]) that owns its own validation and formatting.
//!
//! Validity rules are identical in both variants: names non-empty, email
//! must look like an email, every address part non-empty and the zip code
//! exactly five characters.

fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Loose positional parameters everywhere.
pub mod before {
    use tracing::debug;

    use super::email_looks_valid;
    use crate::error::{Result, SmellbookError};

    #[derive(Debug, Default)]
    pub struct CustomerService;

    impl CustomerService {
        /// Nine positional strings; the clumps are invisible in the
        /// signature.
        #[allow(clippy::too_many_arguments)]
        pub fn create_customer(
            &self,
            first_name: &str,
            last_name: &str,
            email: &str,
            street: &str,
            city: &str,
            state: &str,
            zip_code: &str,
            phone: &str,
            date_of_birth: &str,
        ) -> Result<Vec<(String, String)>> {
            if first_name.is_empty() || last_name.is_empty() {
                return Err(SmellbookError::validation("name is required"));
            }
            if !email_looks_valid(email) {
                return Err(SmellbookError::validation("invalid email"));
            }

            debug!(email, "saving customer (simulated)");
            Ok(vec![
                ("first_name".into(), first_name.into()),
                ("last_name".into(), last_name.into()),
                ("email".into(), email.into()),
                ("street".into(), street.into()),
                ("city".into(), city.into()),
                ("state".into(), state.into()),
                ("zip_code".into(), zip_code.into()),
                ("phone".into(), phone.into()),
                ("date_of_birth".into(), date_of_birth.into()),
            ])
        }

        pub fn is_valid_shipping_address(
            &self,
            street: &str,
            city: &str,
            state: &str,
            zip_code: &str,
        ) -> bool {
            if street.is_empty() || city.is_empty() || state.is_empty() || zip_code.is_empty() {
                return false;
            }
            zip_code.len() == 5
        }

        pub fn format_address_label(
            &self,
            first_name: &str,
            last_name: &str,
            street: &str,
            city: &str,
            state: &str,
            zip_code: &str,
        ) -> String {
            format!("{first_name} {last_name}\n{street}\n{city}, {state} {zip_code}")
        }

        pub fn welcome_message(
            &self,
            first_name: &str,
            last_name: &str,
            street: &str,
            city: &str,
            state: &str,
            zip_code: &str,
        ) -> String {
            format!(
                "Welcome {first_name} {last_name}!\n\nYour address: {street}, {city}, {state} {zip_code}\n"
            )
        }
    }
}

/// The clumps become value objects.
pub mod after {
    use serde::{Deserialize, Serialize};
    use tracing::debug;

    use super::email_looks_valid;
    use crate::error::{Result, SmellbookError};

    /// A postal address that knows when it is deliverable.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Address {
        pub street: String,
        pub city: String,
        pub state: String,
        pub zip_code: String,
    }

    impl Address {
        #[must_use]
        pub fn new(street: &str, city: &str, state: &str, zip_code: &str) -> Self {
            Self {
                street: street.into(),
                city: city.into(),
                state: state.into(),
                zip_code: zip_code.into(),
            }
        }

        /// Same rule as the loose version: every part present, five-digit
        /// zip.
        #[must_use]
        pub fn is_valid(&self) -> bool {
            if self.street.is_empty()
                || self.city.is_empty()
                || self.state.is_empty()
                || self.zip_code.is_empty()
            {
                return false;
            }
            self.zip_code.len() == 5
        }

        #[must_use]
        pub fn single_line(&self) -> String {
            format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip_code)
        }

        #[must_use]
        pub fn label_lines(&self) -> String {
            format!("{}\n{}, {} {}", self.street, self.city, self.state, self.zip_code)
        }
    }

    /// First and last name as one value.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FullName {
        pub first: String,
        pub last: String,
    }

    impl FullName {
        #[must_use]
        pub fn new(first: &str, last: &str) -> Self {
            Self {
                first: first.into(),
                last: last.into(),
            }
        }

        #[must_use]
        pub fn is_complete(&self) -> bool {
            !self.first.is_empty() && !self.last.is_empty()
        }
    }

    impl std::fmt::Display for FullName {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} {}", self.first, self.last)
        }
    }

    #[derive(Debug, Default)]
    pub struct CustomerService;

    impl CustomerService {
        pub fn create_customer(
            &self,
            name: &FullName,
            email: &str,
            address: &Address,
            phone: &str,
            date_of_birth: &str,
        ) -> Result<Vec<(String, String)>> {
            if !name.is_complete() {
                return Err(SmellbookError::validation("name is required"));
            }
            if !email_looks_valid(email) {
                return Err(SmellbookError::validation("invalid email"));
            }

            debug!(email, "saving customer (simulated)");
            Ok(vec![
                ("first_name".into(), name.first.clone()),
                ("last_name".into(), name.last.clone()),
                ("email".into(), email.into()),
                ("street".into(), address.street.clone()),
                ("city".into(), address.city.clone()),
                ("state".into(), address.state.clone()),
                ("zip_code".into(), address.zip_code.clone()),
                ("phone".into(), phone.into()),
                ("date_of_birth".into(), date_of_birth.into()),
            ])
        }

        pub fn is_valid_shipping_address(&self, address: &Address) -> bool {
            address.is_valid()
        }

        pub fn format_address_label(&self, name: &FullName, address: &Address) -> String {
            format!("{name}\n{}", address.label_lines())
        }

        pub fn welcome_message(&self, name: &FullName, address: &Address) -> String {
            format!("Welcome {name}!\n\nYour address: {}\n", address.single_line())
        }
    }
}

/// Validate one address through both variants.
pub fn validate_in_both(street: &str, city: &str, state: &str, zip: &str) -> (bool, bool) {
    let loose = before::CustomerService
        .is_valid_shipping_address(street, city, state, zip);
    let object = after::CustomerService
        .is_valid_shipping_address(&after::Address::new(street, city, state, zip));
    (loose, object)
}
