/// Glass Player - headless terminal shell
use clap::{Parser, Subcommand};
use glass_player::{parse_line, Flow, Shell, ShellConfig};
use glass_playback::group_by_artwork;
use std::{io::Write, path::PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "glass-player")]
#[command(about = "Glass Player controller driven from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the configured playlist, reading commands from stdin
    Run {
        /// Configuration file path (default: glass.toml)
        #[arg(short, long, env = "GLASS_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List the playlist grouped into albums
    Albums {
        /// Configuration file path (default: glass.toml)
        #[arg(short, long, env = "GLASS_CONFIG")]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and print it resolved
    Check {
        /// Configuration file path (default: glass.toml)
        #[arg(short, long, env = "GLASS_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the rendered player
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glass_player=info,glass_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            run(config).await?;
        }
        Commands::Albums { config, json } => {
            albums(config, json)?;
        }
        Commands::Check { config } => {
            check(config)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ShellConfig> {
    let config = ShellConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut shell = Shell::new(&config)?;

    tracing::info!("Loaded {} tracks", config.tracks.len());
    tracing::info!("Simulation tick: {}ms", config.simulation.tick_ms);

    let player_config = shell.controller().config();
    tracing::info!(
        "Grace periods: seek {}ms, volume {}ms",
        player_config.seek_grace_ms,
        player_config.volume_grace_ms
    );

    let mut stdout = std::io::stdout();
    write!(stdout, "{}", shell.render())?;
    stdout.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(config.simulation.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = tokio::time::Instant::now();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let command = match parse_line(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!("{}", e);
                        continue;
                    }
                };

                match shell.execute(command, &mut stdout) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => tracing::warn!("{}", e),
                }
                stdout.flush()?;
            }
            _ = ticker.tick() => {
                let now = tokio::time::Instant::now();
                shell.advance(now - last_tick);
                last_tick = now;
            }
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

fn albums(config_path: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let albums = group_by_artwork(&config.playlist()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&albums)?);
        return Ok(());
    }

    for album in albums {
        println!("{} ({})", album.artist, album.song_count_label());
        for song in album.songs {
            println!("  {:>2}. {} - {}", song.index + 1, song.title, song.artist);
        }
    }

    Ok(())
}

fn check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Configuration is valid");
    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
