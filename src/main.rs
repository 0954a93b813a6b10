use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tracescan::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print requests and responses, with passwords and tokens masked
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in to the traceability service
    Login(LoginOptions),

    /// Forget the stored session token
    Logout,

    /// Show session and configuration status
    Status,

    /// Parse a label without sending it
    Parse(ParseOptions),

    /// Scan labels and report them as received
    Scan(ScanOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Account email; prompted for when omitted
    #[clap(long)]
    pub email: Option<String>,

    /// Account password; prompted for when omitted
    #[clap(long, env = "TRACESCAN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseOptions {
    /// Raw label text, e.g. A123B456C789
    pub text: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanOptions {
    /// Submit this label instead of reading from the scanner
    #[clap(long)]
    pub text: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(opt.email, opt.password, cli.verbose).await,
        Command::Logout => cli::logout().await,
        Command::Status => cli::status().await,
        Command::Parse(opt) => cli::parse(opt.text),
        Command::Scan(opt) => cli::scan(opt.text, cli.verbose).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
