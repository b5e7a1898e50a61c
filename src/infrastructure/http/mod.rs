//! HTTP adapters for the server API.
//!
//! `ServerClient` implements both `DeployTransport` and `ImageSource`.

mod client;
mod deploy;
mod images;

pub use client::{ServerClient, TOKEN_HEADER};
pub use deploy::DEPLOY_PATH;
pub use images::IMAGES_PATH;
