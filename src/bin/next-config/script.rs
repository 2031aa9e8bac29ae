use crate::args;
use next_config::error::*;

/// Print the `<script>` fragment exposing the config as `CONFIG`
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ScriptArgs {
    #[command(flatten)]
    pub(crate) output: args::OutputArgs,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ScriptArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let project = self.config.load_config()?;
        let script = next_config::render_config_script(
            &project.site,
            &project.theme,
            project.theme_version.as_deref(),
        );
        self.output.write(&format!("{script}\n"))
    }
}
