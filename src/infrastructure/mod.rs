//! Infrastructure Layer
//!
//! Concrete implementations of domain ports:
//! - `http` - `ServerClient` (deploy transport + image listing over reqwest)
//! - `prompt` - `DialoguerPrompter` (terminal prompts)

pub mod http;
pub mod prompt;

pub use http::ServerClient;
pub use prompt::DialoguerPrompter;
