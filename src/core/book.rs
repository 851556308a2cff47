use crate::core::browser::ContactBrowser;
use crate::domain::model::Contact;
use crate::domain::ports::ContactSource;
use crate::utils::error::{ContactBookError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

impl Validate for Contact {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)
    }
}

impl Validate for [Contact] {
    fn validate(&self) -> Result<()> {
        for (index, contact) in self.iter().enumerate() {
            contact
                .validate()
                .map_err(|e| ContactBookError::ValidationError {
                    message: format!("contact #{} ({:?}): {}", index + 1, contact.number, e),
                })?;
        }
        Ok(())
    }
}

pub struct ContactBook<S: ContactSource> {
    source: S,
}

impl<S: ContactSource> ContactBook<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<ContactBrowser> {
        tracing::info!("Loading contacts from {}", self.source.name());

        let contacts = self.source.load().await?;
        contacts.as_slice().validate()?;

        let browser = ContactBrowser::new(contacts);
        tracing::info!(
            "Loaded {} contacts in {} groups",
            browser.contacts().len(),
            browser.sections().len()
        );

        Ok(browser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource(Vec<Contact>);

    #[async_trait]
    impl ContactSource for FixedSource {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        async fn load(&self) -> Result<Vec<Contact>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_load_builds_browser() {
        let book = ContactBook::new(FixedSource(vec![
            Contact::new("Ahmed", "03001234567", "Family"),
            Contact::new("Bilal", "03219876543", "Friends"),
        ]));

        let browser = book.load().await.unwrap();
        assert_eq!(browser.visible_count(), 2);
        assert_eq!(browser.sections().len(), 2);
    }

    #[tokio::test]
    async fn test_load_rejects_blank_names() {
        let book = ContactBook::new(FixedSource(vec![
            Contact::new("Ahmed", "03001234567", "Family"),
            Contact::new("  ", "03219876543", "Friends"),
        ]));

        let err = book.load().await.unwrap_err();
        assert!(matches!(err, ContactBookError::ValidationError { .. }));
        assert!(err.to_string().contains("contact #2"));
    }

    #[test]
    fn test_empty_number_and_group_are_allowed() {
        assert!(Contact::new("Ahmed", "", "").validate().is_ok());
    }
}
