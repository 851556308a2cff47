pub mod builtin_source;
pub mod file_source;

pub use builtin_source::BuiltinSource;
pub use file_source::{ContactFileFormat, FileSource};
