use thiserror::Error;

/// Reasons a contact submission is rejected before the simulated send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `local@domain.tld` with no whitespace, which is all the browser's `type=email` check asks for.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl ContactForm {
    /// Checks fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactFormError::MissingName)
        );

        let mut form = filled();
        form.email = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));

        let mut form = filled();
        form.message = "\n\t".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "a b@example.com",
            "ada@@example.com",
        ] {
            let mut form = filled();
            form.email = email.to_string();
            assert_eq!(
                form.validate(),
                Err(ContactFormError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_on_email_is_tolerated() {
        let mut form = filled();
        form.email = "  ada@mail.example.org ".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
