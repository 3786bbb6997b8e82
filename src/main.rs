use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use songcli::{cli, config, error, remote::SongClient, types::SongField};

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
    /// List all songs
    List(ListOptions),

    /// Show the details of a song
    Show(IdOption),

    /// Add a new song
    Add(SongOptions),

    /// Update fields of an existing song
    Update(UpdateOptions),

    /// Delete a song
    Delete(IdOption),

    /// Browse and edit songs interactively
    Session,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show songs whose title or artist contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Song id as assigned by the song API
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct SongOptions {
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub artist: Option<String>,
    #[clap(long)]
    pub year: Option<String>,
    /// Cover image url
    #[clap(long)]
    pub img_url: Option<String>,
    /// Audio file url
    #[clap(long)]
    pub url: Option<String>,
}

impl SongOptions {
    fn into_fields(self) -> Vec<(SongField, String)> {
        [
            (SongField::Title, self.title),
            (SongField::Artist, self.artist),
            (SongField::Year, self.year),
            (SongField::ImageUrl, self.img_url),
            (SongField::AudioUrl, self.url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateOptions {
    /// Song id as assigned by the song API
    pub id: String,

    #[command(flatten)]
    pub song: SongOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn client() -> SongClient {
    match SongClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot create song API client. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::List(opt) => cli::list_songs(client(), opt.search).await,
        Command::Show(opt) => cli::show_song(client(), opt.id).await,
        Command::Add(opt) => cli::add_song(client(), opt.into_fields()).await,
        Command::Update(opt) => cli::update_song(client(), opt.id, opt.song.into_fields()).await,
        Command::Delete(opt) => cli::delete_song(client(), opt.id).await,
        Command::Session => cli::session(client()).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
