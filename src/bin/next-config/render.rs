use std::path;

use crate::args;
use next_config::error::*;
use next_config::template;

/// Render a liquid template with `config`, `theme` and `next_version` in scope
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct RenderArgs {
    /// Template to render; may use `{% next_config %}`
    #[arg(value_name = "TEMPLATE")]
    pub(crate) template: path::PathBuf,

    #[command(flatten)]
    pub(crate) output: args::OutputArgs,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl RenderArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let project = self.config.load_config()?;

        let source = std::fs::read_to_string(&self.template).map_err(|e| {
            anyhow::format_err!("Failed to read `{}`: {e}", self.template.display())
        })?;
        let liquid = template::Liquid::new()?;
        let template = liquid.parse(&source).map_err(|e| {
            e.context(format!("Failed to parse `{}`", self.template.display()))
        })?;
        let globals = template::page_globals(
            &project.site,
            &project.theme,
            project.theme_version.as_deref(),
        )?;
        let page = template.render(&globals)?;
        log::debug!("Rendered `{}`", self.template.display());

        self.output.write(&page)
    }
}
