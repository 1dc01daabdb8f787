use anyhow::Result;
use clap::Args;
use open_in_editor::{configure, editors, Config, Environment, Options};

#[derive(Args)]
pub struct OpenArgs {
    /// File to open, optionally suffixed with :LINE or :LINE:COLUMN
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Editor identifier (see `open-in-editor editors`)
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Raw command to launch instead of a detected editor, e.g. "code --wait"
    #[arg(short, long)]
    pub cmd: Option<String>,

    /// Number the incoming FILE line starts from
    #[arg(long, value_name = "N")]
    pub line: Option<u32>,

    /// Number the incoming FILE column starts from
    #[arg(long, value_name = "N")]
    pub column: Option<u32>,

    /// Argument pattern for --cmd, e.g. "+{line} {filename}"
    #[arg(long)]
    pub pattern: Option<String>,

    /// Print the command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

impl OpenArgs {
    /// CLI flags override the config file; an explicit editor or command
    /// replaces both configured ones.
    fn options(&self, config: &Config) -> Options {
        let mut options = config.to_options();
        if self.editor.is_some() || self.cmd.is_some() {
            options.editor.clone_from(&self.editor);
            options.cmd.clone_from(&self.cmd);
        }
        if self.line.is_some() {
            options.line = self.line;
        }
        if self.column.is_some() {
            options.column = self.column;
        }
        if self.pattern.is_some() {
            options.pattern.clone_from(&self.pattern);
        }
        options
    }
}

pub async fn cmd_open(args: OpenArgs) -> Result<()> {
    let config = Config::load()?;
    let options = args.options(&config);
    let opener = configure(&options, &Environment::capture(), editors::registry())?;

    if args.dry_run {
        println!("{}", opener.command_line(&args.file).await?);
        return Ok(());
    }

    let command = opener.open(&args.file).await?;
    eprintln!("Opened {} with: {command}", args.file);
    Ok(())
}
