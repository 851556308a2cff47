use crate::config::toml_config::BookConfig;
use crate::config::CONTACT_FILE_EXTENSIONS;
use crate::core::{Contact, ContactSource, Result, Storage};
use crate::utils::error::ContactBookError;
use crate::utils::validation::validate_file_extension;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFileFormat {
    Csv,
    Json,
    Toml,
}

impl ContactFileFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        validate_file_extension("contacts", path, &CONTACT_FILE_EXTENSIONS)?;

        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ContactBookError::InvalidConfigValueError {
                field: "contacts".to_string(),
                value: path.to_string(),
                reason: "Unsupported contact file".to_string(),
            }),
        }
    }

    pub fn parse(self, data: &[u8]) -> Result<Vec<Contact>> {
        match self {
            Self::Csv => parse_csv(data),
            Self::Json => Ok(serde_json::from_slice(data)?),
            Self::Toml => {
                let content =
                    std::str::from_utf8(data).map_err(|e| ContactBookError::ConfigValidationError {
                        field: "contacts".to_string(),
                        message: format!("TOML file is not valid UTF-8: {}", e),
                    })?;
                Ok(BookConfig::from_toml_str(content)?.contacts)
            }
        }
    }
}

// Columns are matched by header name; every field is read as a string so
// leading zeros in numbers survive.
fn parse_csv(data: &[u8]) -> Result<Vec<Contact>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(data);

    let mut contacts = Vec::new();
    for row in reader.deserialize() {
        let contact: Contact = row?;
        contacts.push(contact);
    }
    Ok(contacts)
}

/// Contacts read from a `.csv`, `.json` or `.toml` file through a [`Storage`].
pub struct FileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> ContactSource for FileSource<S> {
    fn name(&self) -> String {
        self.path.clone()
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        let format = ContactFileFormat::from_path(&self.path)?;
        tracing::debug!("Reading {:?} contacts from {}", format, self.path);

        let data = self.storage.read_file(&self.path).await?;
        let contacts = format.parse(&data)?;

        tracing::debug!("Parsed {} contacts from {}", contacts.len(), self.path);
        Ok(contacts)
    }
}
