use clap::Parser;

use crate::prelude::*;

mod prelude;
mod scan;
mod tally;
mod wrapped;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract food-diary entries from a scanned PDF, tally them, and render Wrapped-style summary cards"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(
        long,
        env = "FOODWRAPPED_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Tally food entries and write the counts and ranked-report artifacts
    Tally(crate::tally::TallyOptions),

    /// Render Wrapped-style cards for the top foods
    Wrapped(crate::wrapped::WrappedOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Tally(options) => crate::tally::run(options, app.global),
        SubCommands::Wrapped(options) => crate::wrapped::run(options, app.global),
    }
}
