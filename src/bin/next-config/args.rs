use std::io::Write;
use std::path;

use next_config::error::*;
use next_config::model;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Site config file to use [default: _config.yml]
    #[arg(long, value_name = "FILE")]
    pub(crate) site: Option<path::PathBuf>,

    /// Theme config file to use [default: _config.next.yml, themes/next/_config.yml]
    #[arg(long, value_name = "FILE")]
    pub(crate) theme: Option<path::PathBuf>,

    /// Theme version exposed to scripts [default: themes/next/package.json]
    #[arg(long, value_name = "VERSION")]
    pub(crate) theme_version: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<model::Project> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| path::PathBuf::from("."));
        let mut project = model::Project::load(model::ProjectPaths {
            cwd,
            site: self.site.clone(),
            theme: self.theme.clone(),
        })?;
        if let Some(version) = &self.theme_version {
            project.theme_version = Some(version.clone());
        }
        if project.theme_version.is_none() {
            log::info!("No theme version known, `CONFIG.version` will be left out");
        }
        Ok(project)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct OutputArgs {
    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,
}

impl OutputArgs {
    pub(crate) fn write(&self, content: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, content)
                    .map_err(|e| anyhow::format_err!("Failed to write `{}`: {e}", path.display()))?;
                log::info!("Wrote `{}`", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

pub(crate) fn init_logging(level: log::LevelFilter) {
    let write_style = match colorchoice::ColorChoice::global() {
        colorchoice::ColorChoice::Auto => env_logger::WriteStyle::Auto,
        colorchoice::ColorChoice::AlwaysAnsi | colorchoice::ColorChoice::Always => {
            env_logger::WriteStyle::Always
        }
        colorchoice::ColorChoice::Never => env_logger::WriteStyle::Never,
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(write_style);
    builder.filter(None, level);
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.init();
}
