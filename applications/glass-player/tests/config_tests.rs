/// Shell configuration tests
/// Tests file loading, defaults, validation, and playlist/primitive construction
mod common;

use common::{sample_config, write_config, SAMPLE_CONFIG};
use glass_player::{AppError, ShellConfig};
use glass_playback::{PlaybackError, PlaybackPrimitive};
use std::path::Path;
use std::time::Duration;

/// Test loading an explicit config file
#[test]
fn test_load_from_file() {
    let (_dir, path) = write_config(SAMPLE_CONFIG);

    let config = ShellConfig::load(Some(&path)).unwrap();

    assert_eq!(config.player.initial_volume, 60);
    assert_eq!(config.player.volume_step, 5);
    assert_eq!(config.simulation.tick(), Duration::from_secs(1));
    assert_eq!(config.tracks.len(), 3);
    assert_eq!(config.tracks[0].duration_secs, Some(200.0));
    assert_eq!(config.tracks[2].duration_secs, None);
    assert!(config.validate().is_ok());
}

/// Test that a missing explicit file is an error rather than an empty config
#[test]
fn test_missing_explicit_file() {
    let result = ShellConfig::load(Some(Path::new("/nonexistent/glass.toml")));
    assert!(matches!(result, Err(AppError::Config(_))));
}

/// Test defaults for omitted sections and fields
#[test]
fn test_defaults() {
    let config = ShellConfig::from_toml(
        r#"
        [[tracks]]
        title = "Only"
        artist = "Someone"
        album_art_path = "songs/only.jpg"
        audio_src = "songs/only.mp3"
        "#,
    )
    .unwrap();

    assert_eq!(config.player.initial_volume, 80);
    assert_eq!(config.player.unmute_fallback_volume, 80);
    assert_eq!(config.player.volume_step, 10);
    assert_eq!(config.player.seek_grace_ms, 1000);
    assert_eq!(config.simulation.tick_ms, 250);
    assert_eq!(config.simulation.fallback_duration_secs, 180.0);
    assert!(!config.simulation.reject_play);
    assert_eq!(config.tracks[0].background_color_start, "#1e3c72");
    assert!(config.validate().is_ok());
}

/// Test that a config without tracks does not validate
#[test]
fn test_empty_playlist_rejected() {
    let config = ShellConfig::from_toml("[player]\ninitial_volume = 50\n").unwrap();

    assert!(config.tracks.is_empty());
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    assert!(matches!(
        config.playlist(),
        Err(AppError::Playlist(PlaybackError::EmptyPlaylist))
    ));
}

/// Test that player settings are validated by the controller's rules
#[test]
fn test_invalid_player_settings() {
    let mut config = sample_config();
    config.player.volume_step = 0;

    assert!(matches!(
        config.validate(),
        Err(AppError::Playlist(PlaybackError::InvalidConfig(_)))
    ));
}

/// Test that non-positive durations are rejected
#[test]
fn test_invalid_durations() {
    let mut config = sample_config();
    config.tracks[1].duration_secs = Some(0.0);
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = sample_config();
    config.simulation.fallback_duration_secs = f64::NAN;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = sample_config();
    config.simulation.tick_ms = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test playlist construction keeps order and display fields
#[test]
fn test_playlist_from_tracks() {
    let playlist = sample_config().playlist().unwrap();

    assert_eq!(playlist.len(), 3);
    let first = playlist.get(0).unwrap();
    assert_eq!(first.title, "Rebel Saab");
    assert_eq!(
        first.background_gradient(),
        "linear-gradient(135deg, #0f2027, #2c5364)"
    );
    assert_eq!(playlist.get(2).unwrap().audio_src, "songs/dheema.mp3");
}

/// Test the simulated primitive reports configured and fallback durations
#[test]
fn test_primitive_durations() {
    let mut primitive = sample_config().primitive();

    primitive.set_source("songs/pattuma.mp3");
    primitive.load();
    primitive.finish_loading();
    assert_eq!(primitive.duration(), 3.0);

    primitive.set_source("songs/dheema.mp3");
    primitive.load();
    primitive.finish_loading();
    assert_eq!(primitive.duration(), 120.0);
}

/// Test the reject_play switch reaches the primitive
#[test]
fn test_reject_play_setting() {
    let mut config = sample_config();
    config.simulation.reject_play = true;

    let mut primitive = config.primitive();
    primitive.set_source("songs/pattuma.mp3");

    assert!(matches!(
        primitive.play(),
        Err(PlaybackError::PlayRejected(_))
    ));
}

/// Test that the resolved config prints as TOML and reads back
#[test]
fn test_resolved_config_is_valid_toml() {
    let printed = toml::to_string_pretty(&sample_config()).unwrap();
    let reparsed = ShellConfig::from_toml(&printed).unwrap();

    assert_eq!(reparsed.tracks.len(), 3);
    assert_eq!(reparsed.player, sample_config().player);
    assert!(reparsed.validate().is_ok());
}
