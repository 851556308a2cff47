pub mod render;
pub mod session;
pub mod sources;
