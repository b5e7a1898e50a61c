use exoframe::DeployResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    image: &str,
    endpoint: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} on {}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        ColoredText::plain("Deploying:").bold().render(supports_color),
        ColoredText::info(image).bold().render(supports_color),
        ColoredText::dim(endpoint).render(supports_color),
    )
}

pub fn render_deploy_success(
    result: &DeployResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Successfully deployed!")
            .bold()
            .render(supports_color),
    );

    for (i, id) in result.container_ids().into_iter().enumerate() {
        out.push_str(&format!(
            "{} Container with ID: {}\n",
            ColoredText::plain(format!("{})", i + 1))
                .bold()
                .render(supports_color),
            id,
        ));
    }

    out
}

pub fn render_deploy_failure(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error deploying!")
            .bold()
            .render(supports_color),
    )
}
