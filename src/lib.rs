pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::render::OutputFormat;
pub use app::session::Session;
pub use app::sources::{BuiltinSource, FileSource};
pub use config::{cli::LocalStorage, toml_config::BookConfig};
pub use core::{book::ContactBook, browser::ContactBrowser, index::ContactIndex};
pub use domain::model::{Contact, DetailView, GroupSection};
pub use utils::error::{ContactBookError, Result};
