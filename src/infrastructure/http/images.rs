//! `GET /api/images`

use serde::Deserialize;

use crate::domain::ports::ImageSource;
use crate::error::TransportError;

use super::client::ServerClient;

pub const IMAGES_PATH: &str = "/api/images";

/// Placeholder Docker uses for dangling images.
const UNTAGGED: &str = "<none>:<none>";

/// The part of a Docker image summary we care about.
#[derive(Debug, Deserialize)]
struct ImageSummary {
    #[serde(rename = "RepoTags", default)]
    repo_tags: Option<Vec<String>>,
}

impl ImageSource for ServerClient {
    fn list_images(&self) -> Result<Vec<String>, TransportError> {
        let images: Vec<ImageSummary> = self.get_json(IMAGES_PATH)?.unwrap_or_default();
        Ok(image_names(images))
    }
}

fn image_names(images: Vec<ImageSummary>) -> Vec<String> {
    images
        .into_iter()
        .flat_map(|image| image.repo_tags.unwrap_or_default())
        .filter(|tag| tag != UNTAGGED)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_names_flattens_tags_in_order() {
        let images: Vec<ImageSummary> = serde_json::from_str(
            r#"[
                {"Id": "sha256:1", "RepoTags": ["web:latest", "web:1.0"]},
                {"Id": "sha256:2", "RepoTags": null},
                {"Id": "sha256:3"},
                {"Id": "sha256:4", "RepoTags": ["<none>:<none>"]},
                {"Id": "sha256:5", "RepoTags": ["api:2"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(image_names(images), vec!["web:latest", "web:1.0", "api:2"]);
    }
}
