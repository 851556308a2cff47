use crate::core::{Contact, ContactSource, Storage};
use crate::utils::error::{ContactBookError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A contact book stored as TOML: metadata, display defaults and the contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    pub book: BookInfo,
    pub display: Option<DisplayConfig>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
    pub initial_query: Option<String>,
}

impl BookConfig {
    /// 透過 Storage 讀取 TOML 檔案並解析
    pub async fn from_storage<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let data = storage.read_file(path).await?;
        let content =
            std::str::from_utf8(&data).map_err(|e| ContactBookError::ConfigValidationError {
                field: path.to_string(),
                message: format!("TOML file is not valid UTF-8: {}", e),
            })?;
        Self::from_toml_str(content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContactBookError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OWNER_NUMBER})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactBookError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("book.name", &self.book.name)?;

        if let Some(format) = self.display.as_ref().and_then(|d| d.format.as_deref()) {
            validate_one_of("display.format", format, &super::OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn initial_query(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.initial_query.as_deref())
            .unwrap_or("")
    }

    pub fn output_format(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.format.as_deref())
            .unwrap_or("text")
    }
}

// 聯絡人內嵌於檔案中，解析一次即可直接作為來源
#[async_trait]
impl ContactSource for BookConfig {
    fn name(&self) -> String {
        format!("contact book '{}'", self.book.name)
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}

impl Validate for BookConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_parse_book() {
        let toml_content = r#"
[book]
name = "Phone book"

[display]
format = "json"
initial_query = "fam"

[[contacts]]
name = "Ahmed"
number = "03001234567"
group = "Family"

[[contacts]]
name = "Bilal"
number = "03219876543"
group = "Friends"
"#;

        let config = BookConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.book.name, "Phone book");
        assert_eq!(config.contacts.len(), 2);
        assert_eq!(config.contacts[0].number, "03001234567");
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.initial_query(), "fam");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_defaults() {
        let config = BookConfig::from_toml_str("[book]\nname = \"empty\"\n").unwrap();
        assert!(config.contacts.is_empty());
        assert_eq!(config.output_format(), "text");
        assert_eq!(config.initial_query(), "");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTACT_BOOK_TEST_NUMBER", "03110000000");

        let toml_content = r#"
[book]
name = "env"

[[contacts]]
name = "Owner"
number = "${CONTACT_BOOK_TEST_NUMBER}"
group = "Me"

[[contacts]]
name = "Unset"
number = "${CONTACT_BOOK_TEST_UNSET}"
group = "Me"
"#;

        let config = BookConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.contacts[0].number, "03110000000");
        assert_eq!(config.contacts[1].number, "${CONTACT_BOOK_TEST_UNSET}");

        std::env::remove_var("CONTACT_BOOK_TEST_NUMBER");
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        let toml_content = r#"
[book]
name = "bad"

[display]
format = "xml"
"#;
        let config = BookConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = BookConfig::from_toml_str("[book\nname = 1").unwrap_err();
        assert!(matches!(err, ContactBookError::ConfigValidationError { .. }));
    }

    #[tokio::test]
    async fn test_from_storage_doubles_as_contact_source() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        storage
            .write_file(
                "book.toml",
                b"[book]\nname = \"file-test\"\n\n[[contacts]]\nname = \"Faisal\"\nnumber = \"03166677788\"\ngroup = \"Family\"\n",
            )
            .await
            .unwrap();

        let config = BookConfig::from_storage(&storage, "book.toml").await.unwrap();
        assert_eq!(config.book.name, "file-test");
        assert_eq!(config.name(), "contact book 'file-test'");

        let contacts = config.load().await.unwrap();
        assert_eq!(contacts, vec![Contact::new("Faisal", "03166677788", "Family")]);
    }

    #[tokio::test]
    async fn test_from_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = BookConfig::from_storage(&storage, "absent.toml").await.unwrap_err();
        assert!(matches!(err, ContactBookError::IoError(_)));
    }
}
