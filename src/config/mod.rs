pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_one_of, validate_path, validate_positive_number, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const CONTACT_FILE_EXTENSIONS: [&str; 3] = ["csv", "json", "toml"];
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "contact-book")]
#[command(about = "Browse a contact list grouped by label, with live search")]
pub struct CliConfig {
    /// Contact file (.csv, .json or .toml); the built-in sample list is used when omitted
    #[arg(long)]
    pub contacts: Option<String>,

    /// Search by name or number
    #[arg(short, long)]
    pub query: Option<String>,

    /// Open the detail view for the Nth contact in the filtered list
    #[arg(long)]
    pub open: Option<usize>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Also write the rendered view to this file
    #[arg(long)]
    pub output: Option<String>,

    /// Read queries and commands from stdin, re-rendering after each line
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn contacts_path(&self) -> Option<&str> {
        self.contacts.as_deref()
    }

    fn initial_query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.contacts {
            validate_path("contacts", path)?;
            validate_file_extension("contacts", path, &CONTACT_FILE_EXTENSIONS)?;
        }

        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }

        if let Some(position) = self.open {
            validate_positive_number("open", position, 1)?;
        }

        if let Some(format) = &self.format {
            validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }
}
