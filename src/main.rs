use std::process::ExitCode;

use futures_util::StreamExt;

use art_finder::config::{Config, ConfigPathChoice, ConfigRetrievalError};
use art_finder::query::ArtistName;
use art_finder::{AlbumQuery, ArtFinder, ArtStream, ArtistQuery, MusicInfoService, RemoteImage, TrackQuery};
use util::ferror;

mod cli;
mod debugging;
mod util;

#[tokio::main]
async fn main() -> ExitCode {
    let args = <cli::Cli as clap::Parser>::parse();
    let _debugging = debugging::DebuggingSession::new(&args);
    let path = ConfigPathChoice::new(args.config_file_path.as_deref());
    let config = Config::get(&path).await;

    if let cli::Command::Configure { action } = &args.command {
        use cli::ConfigurationAction;

        match action {
            ConfigurationAction::Where { show_reason, escape } => {
                let path_str = path.to_string_lossy();
                let path_str = if !escape { path_str } else {
                    String::from(path_str)
                        .replace(' ', "\\ ")
                        .into()
                };

                use std::io::IsTerminal;
                let show_reason = match show_reason {
                    Some(show) => *show,
                    None => std::io::stdout().is_terminal()
                };

                println!("{path_str}");
                if show_reason {
                    eprint!("This path is used because it is {}", path.describe_for_choice_reasoning_suffix());
                    match &config {
                        Err(err) => {
                            use std::borrow::Cow;
                            eprintln!(", but {}", match err {
                                ConfigRetrievalError::DeserializationFailure { .. } => Cow::Borrowed("it couldn't be successfully deserialized"),
                                ConfigRetrievalError::NotFound { .. } => Cow::Borrowed("it couldn't be found"),
                                ConfigRetrievalError::PermissionDenied(_) => Cow::Borrowed("the required permissions to read it are not available"),
                                ConfigRetrievalError::UnknownFs { inner, .. } => Cow::Owned(format!("an unknown error occurred trying to read it ({inner})"))
                            });
                        }
                        Ok(_) if path.was_auto() && !path.as_path().exists() => eprintln!(", but it currently doesn't exist."),
                        Ok(_) => eprintln!("."),
                    }
                }
            }
        }
        return ExitCode::SUCCESS;
    }

    let config = match config {
        Ok(config) => config,
        Err(error) => ferror!("could not read config: {error}"),
    };
    let service = match MusicInfoService::new(&config) {
        Ok(service) => service,
        Err(error) => ferror!("could not create network client: {error}"),
    };

    let finder = service.art_finder();
    let task = async {
        match &args.command {
            cli::Command::Album { artist, album, release_group, release, output } => print_images(
                finder.find_album_art(
                    &AlbumQuery::new(artist.as_str(), album.as_str())
                        .with_release_group(*release_group)
                        .with_release(*release),
                ),
                output.json,
            ).await,
            cli::Command::Artist { artist, artist_id, output } => print_images(
                finder.find_artist_art(&ArtistQuery::new(artist.as_str()).with_artist_id(*artist_id)),
                output.json,
            ).await,
            cli::Command::Track { artist, title, track_id, output } => print_images(
                finder.find_track_art(&TrackQuery::new(artist.as_str(), title.as_str()).with_track(*track_id)),
                output.json,
            ).await,
            cli::Command::Summary { artist, artist_id } => summarize(&service, &ArtistName::new(artist.as_str()), *artist_id).await,
            cli::Command::Configure { .. } => ExitCode::SUCCESS,
        }
    };

    tokio::select! {
        code = task => code,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            ExitCode::from(130)
        }
    }
}

/// Print images as they arrive, one per line. Finding nothing is not a failure.
async fn print_images(mut stream: ArtStream, json: bool) -> ExitCode {
    let mut found = 0usize;
    while let Some(image) = stream.next().await {
        found += 1;
        if json {
            match serde_json::to_string(&image) {
                Ok(line) => println!("{line}"),
                Err(error) => tracing::error!(%error, location = image.location(), "could not serialize image"),
            }
        } else {
            println!("{}", describe(&image));
        }
    }
    tracing::info!(found, "done");
    ExitCode::SUCCESS
}

fn describe(image: &RemoteImage) -> String {
    let types = image.types().iter().map(ToString::to_string).collect::<Vec<_>>();
    let types = if types.is_empty() { "-".to_owned() } else { types.join(",") };
    format!("{}\t{}\t{}\t{}", image.size_bucket(), image.source().provider, types, image.location())
}

async fn summarize(service: &MusicInfoService, artist: &ArtistName, artist_id: Option<art_finder::query::ArtistMbid>) -> ExitCode {
    match service.article_summary(artist, artist_id).await {
        Ok(summary) => {
            println!("{}", summary.title);
            if let Some(description) = &summary.description {
                println!("{description}");
            }
            println!();
            println!("{}", summary.extract);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("no summary for {artist}: {message}");
            ExitCode::FAILURE
        }
    }
}
