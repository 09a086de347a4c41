use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod respond;
mod vacancies;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "CLI tools for browsing job vacancies from the HeadHunter API"
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
    #[clap(long, env = "HHTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Job vacancy operations (list, read, feed)
    Vacancies(crate::vacancies::App),

    /// Compose and validate a contact message
    Respond(crate::respond::Options),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Vacancies(sub_app) => crate::vacancies::run(sub_app, app.global).await,
        SubCommands::Respond(options) => crate::respond::run(options, app.global),
    }
}
