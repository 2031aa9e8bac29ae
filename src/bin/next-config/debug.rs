use crate::args;
use next_config::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded site and theme config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the exported `CONFIG` object
    Export {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let project = config.load_config()?;
                let dump = serde_yaml::to_string(&serde_json::json!({
                    "root": project.root.display().to_string(),
                    "theme_version": project.theme_version,
                    "site": project.site,
                    "theme": project.theme,
                }))?;
                print!("{dump}");
            }
            Self::Export { config } => {
                let project = config.load_config()?;
                let record = next_config::ExportRecord::new(
                    &project.site,
                    &project.theme,
                    project.theme_version.as_deref(),
                );
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }

        Ok(())
    }
}
