//! Image selection

use log::debug;

use crate::domain::ports::{ImageSource, PromptSpec, Prompter};
use crate::error::{ExoError, ExoResult};

pub const IMAGE_PROMPT: &str = "Choose image to deploy:";

/// Pick the image to deploy.
///
/// A non-empty `cli_image` wins as-is (it is not checked against the server).
/// Otherwise the server's images are listed and the operator chooses one.
pub fn select_image(
    cli_image: Option<&str>,
    images: &dyn ImageSource,
    prompter: &dyn Prompter,
) -> ExoResult<String> {
    if let Some(image) = cli_image.filter(|s| !s.is_empty()) {
        return Ok(image.to_string());
    }

    let candidates = images.list_images().map_err(ExoError::ImageListing)?;
    debug!("server offered {} image(s)", candidates.len());
    if candidates.is_empty() {
        return Err(ExoError::NoImages);
    }

    prompter.ask(&PromptSpec::select("image", IMAGE_PROMPT, candidates))
}
