use clap::{Parser, Subcommand};
use log::info;
use spotify_search_decoder::{
    errors::Result,
    search::{SAMPLE_RESPONSE, SearchResponse, decode_search_response},
};

use crate::config::{self, View};

#[derive(Parser)]
#[command(name = "spotify-search-decoder")]
#[command(version, about = "Decode Spotify artist search responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a search response and print part of it
    Decode {
        /// JSON file to read, `-` for stdin
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long, value_enum, default_value_t)]
        show: View,
    },
    /// Print the bundled sample response
    Sample {},
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Decode { input, show } => {
            let output = decode(input.as_deref(), *show)?;
            println!("{output}");
        }
        Commands::Sample {} => {
            print!("{SAMPLE_RESPONSE}");
        }
    }
    Ok(())
}

fn decode(input: Option<&str>, show: View) -> Result<String> {
    info!("Building config ...");
    let config = config::ConfigBuilder::new().input(input).view(show).build()?;
    let bytes = config.input.read()?;
    let response = decode_search_response(&bytes)?;
    info!(
        "Decoded {} of {} artists from {:?}",
        response.artists.len(),
        response.total,
        config.input
    );
    Ok(render(&response, config.view))
}

fn render(response: &SearchResponse, view: View) -> String {
    match view {
        View::Genres => {
            let genres = response
                .first_artist()
                .map(|artist| artist.genres.as_slice())
                .unwrap_or_default();
            format!("{genres:?}")
        }
        View::Artists => response
            .artists
            .iter()
            .map(|artist| {
                format!(
                    "{}\t{}\tfollowers={}\tpopularity={}\tgenres={}",
                    artist.name,
                    artist.spotify_id,
                    artist.followers,
                    artist.popularity,
                    artist.genres.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        View::Pagination => format!(
            "href: {}\nlimit: {}\noffset: {}\ntotal: {}\nnext: {}\nprevious: {}",
            response.href,
            response.limit,
            response.offset,
            response.total,
            response.next.as_deref().unwrap_or("-"),
            response.previous.as_deref().unwrap_or("-"),
        ),
    }
}
