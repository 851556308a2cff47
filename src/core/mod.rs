pub mod book;
pub mod browser;
pub mod index;

pub use crate::domain::model::{Contact, DetailView, GroupSection};
pub use crate::domain::ports::{ConfigProvider, ContactSource, Storage};
pub use crate::utils::error::Result;
