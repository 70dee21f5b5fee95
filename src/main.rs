mod cli;

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use releasekit_engine::{
    detect_episode_info, extract_movie_title_from_filename, generate_release_name, ContentType,
    MediaAttributes, ReleaseNameRequest,
};

use cli::{Cli, Commands, NameArgs};
use releasekit::{mediainfo, rename};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise derive the filter from the
    // verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "releasekit=trace,releasekit_engine=trace".to_string()
        } else {
            "releasekit=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { name, json } => inspect(&name, json),
        Commands::Name { file, options } => {
            let release_name = build_release_name(&file, &options)?;
            println!("{release_name}");
            Ok(())
        }
        Commands::Rename {
            file,
            options,
            dry_run,
        } => {
            let release_name = build_release_name(&file, &options)?;
            let plan = rename::rename(&file, &release_name, dry_run)?;
            if dry_run {
                println!("Would rename: {} -> {}", plan.old_name, plan.new_name);
            } else {
                println!("Renamed: {} -> {}", plan.old_name, plan.new_name);
            }
            Ok(())
        }
        Commands::CheckTools => check_tools(),
    }
}

fn inspect(name: &str, json: bool) -> Result<()> {
    let file_name = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());

    let title = extract_movie_title_from_filename(&file_name);
    let episode = detect_episode_info(&file_name);

    if json {
        let payload = serde_json::json!({
            "extracted_title": title,
            "episode_info": episode,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Title: {title}");
        if episode.is_series {
            match (episode.season, episode.episode) {
                (Some(season), Some(ep)) => println!("Episode: S{season:02}E{ep:02}"),
                (Some(season), None) if episode.is_complete_season => {
                    println!("Episode: S{season:02} (complete season)")
                }
                _ => println!("Episode: series marker found"),
            }
        } else {
            println!("Episode: none (movie)");
        }
    }
    Ok(())
}

/// Resolve media attributes and assemble the release name for a file.
fn build_release_name(file: &Path, options: &NameArgs) -> Result<String> {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let media = match &options.media_json {
        Some(report_path) => {
            let report = fs::read_to_string(report_path)?;
            mediainfo::parse_report(&report, &file_name)?
        }
        None => mediainfo::scan(file)?,
    };

    Ok(generate_release_name(&build_request(
        &file_name, media, options,
    )))
}

fn build_request(file_name: &str, media: MediaAttributes, options: &NameArgs) -> ReleaseNameRequest {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| extract_movie_title_from_filename(file_name));

    let mut request = ReleaseNameRequest::new(title, media);
    request.year = options.year.clone();
    request.source = options.source.clone();
    request.group = options.group.clone();
    request.content_type = options.content_type;
    request.season = options.season;
    request.episode = options.episode;
    request.is_complete_season = options.complete_season;
    request.is_complete_series = options.complete_series;
    request.is_final_episode = options.final_episode;
    request.episode_only = options.episode_only;
    request.edition = options.edition.clone();
    request.info = options.info.clone();
    request.language = options.language.clone();

    // For series without explicit numbers, fall back to what the file
    // name says.
    if request.content_type == ContentType::Tv
        && request.season.is_none()
        && request.episode.is_none()
        && !request.is_complete_series
    {
        let detected = detect_episode_info(file_name);
        if detected.is_series {
            request.season = detected.season;
            request.episode = detected.episode;
            request.is_complete_season = detected.is_complete_season;
        }
    }

    request
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    match which::which("mediainfo") {
        Ok(path) => {
            println!("✓ mediainfo - {}", path.display());
            Ok(())
        }
        Err(_) => {
            println!("✗ mediainfo");
            anyhow::bail!("mediainfo not found on PATH")
        }
    }
}
