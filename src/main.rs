use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use genremix::{cli, config, error, utils};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API and show the logged in account
    Auth(AuthOptions),

    /// Create a playlist sampled from the selected genres
    Generate(GenerateOptions),

    /// List the genres that can be selected
    Genres,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Capture the redirect with a local server instead of pasting it
    #[clap(long)]
    pub callback: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Genre to sample from; can be repeated
    #[clap(
        long = "genre",
        required = true,
        value_parser = utils::parse_genre,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub genres: Vec<String>,

    /// Total number of tracks (20-200, step 10)
    #[clap(long, default_value = "100", value_parser = utils::parse_track_count)]
    pub tracks: u32,

    /// Name of the new playlist
    #[clap(long, default_value = "My Custom Genre Mix")]
    pub name: String,

    /// Capture the redirect with a local server instead of pasting it
    #[clap(long)]
    pub callback: bool,

    /// Pause between two genres in milliseconds
    #[clap(long, default_value_t = 200)]
    pub delay_ms: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Command::Genres = &cli.command {
        cli::genres();
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}\nSee {}", e, config::env_path().display()),
    };

    let result = match cli.command {
        Command::Auth(opt) => cli::auth(&config, opt.callback).await,
        Command::Generate(opt) => {
            cli::generate(
                &config,
                opt.genres,
                opt.tracks,
                opt.name,
                opt.callback,
                opt.delay_ms,
            )
            .await
        }
        Command::Genres | Command::Completions(_) => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
