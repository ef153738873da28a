//! Show command handler

use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use anime_presenter::player::{
    ClockVideo, Player, PlayerSettings, TerminalEvents, TerminalGuard,
};
use anime_presenter::{Config, Markup, Navigator, PresentationIndex};

/// Run the terminal preview player for a markup file.
#[cfg(not(tarpaulin_include))]
pub fn handle(markup_file: &Path, config: &Config) -> Result<()> {
    let markup = Markup::from_yaml(markup_file)?;
    let index = Arc::new(PresentationIndex::from_markup(&markup)?);

    if !io::stdout().is_terminal() {
        bail!("The player needs an interactive terminal");
    }

    tracing::info!(
        title = %markup.title,
        slides = index.len(),
        sections = index.section_count(),
        mute_audio = markup.settings.mute_audio,
        "opening presentation"
    );

    let (cols, rows) = crossterm::terminal::size().context("Failed to query terminal size")?;
    let _guard = TerminalGuard::enter()?;

    let video = ClockVideo::new(io::stdout(), config.player.preview_fps, cols, rows);
    let mut player = Player::new(
        video,
        Navigator::new(index),
        markup.title.clone(),
        PlayerSettings::from(&config.player),
    );

    player.open()?;
    player.run(&mut TerminalEvents)
}
