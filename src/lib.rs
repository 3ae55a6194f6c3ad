pub mod app;
pub mod config;
pub mod error;
pub mod imaging;
pub mod processing;

pub use error::ShellError;
