#![warn(clippy::print_stderr)]

mod args;
mod debug;
mod render;
mod script;

use clap::Parser;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    args::init_logging(cli.verbose.log_level_filter());

    match cli.command {
        Command::Script(cmd) => cmd.run(),
        Command::Render(cmd) => cmd.run(),
        Command::Debug(cmd) => cmd.run(),
    }
    .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

/// Export NexT theme configuration to client-side script
#[derive(Debug, Parser)]
#[command(name = "next-config", version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    Script(script::ScriptArgs),
    Render(render::RenderArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
