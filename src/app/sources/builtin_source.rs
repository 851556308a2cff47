use crate::core::{Contact, ContactSource, Result};
use async_trait::async_trait;

const SAMPLE_CONTACTS: [(&str, &str, &str); 10] = [
    ("Ahmed", "03001234567", "Family"),
    ("Bilal", "03219876543", "Friends"),
    ("Usman", "03455566677", "Work"),
    ("Hassan", "03144455566", "Family"),
    ("Rizwan", "03011122233", "Friends"),
    ("Zubair", "03399988877", "Work"),
    ("Faisal", "03166677788", "Family"),
    ("Tariq", "03222233344", "Friends"),
    ("Kamran", "03433344455", "Work"),
    ("Imran", "03077788899", "Family"),
];

/// The sample list shown when no contact file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn contacts() -> Vec<Contact> {
        SAMPLE_CONTACTS
            .iter()
            .map(|(name, number, group)| Contact::new(*name, *number, *group))
            .collect()
    }
}

#[async_trait]
impl ContactSource for BuiltinSource {
    fn name(&self) -> String {
        "built-in sample".to_string()
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        Ok(Self::contacts())
    }
}
