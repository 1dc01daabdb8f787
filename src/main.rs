//! `open-in-editor` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigAction, open::OpenArgs};
use open_in_editor::logging;

#[derive(Parser)]
#[command(
    name = "open-in-editor",
    about = "Open a file at a line and column in an installed code editor"
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open FILE[:LINE[:COLUMN]] in the configured or detected editor
    Open(OpenArgs),

    /// Detect installed editors
    Detect {
        /// Editor identifier; all editors when omitted
        #[arg(value_name = "EDITOR")]
        editor: Option<String>,
    },

    /// List supported editor identifiers
    Editors,

    /// Manage open-in-editor configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("{}", format!("{e:#}").trim_end());
        std::process::exit(2);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Open(args) => commands::open::cmd_open(args).await?,
        Commands::Detect { editor } => commands::detect::cmd_detect(editor.as_deref()).await?,
        Commands::Editors => commands::detect::cmd_editors(),
        Commands::Config { action } => commands::config::cmd_config(action)?,
    }
    Ok(())
}
