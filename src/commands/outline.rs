//! Outline command handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use anime_presenter::presentation::render_outline;
use anime_presenter::{Markup, PresentationIndex, Slide};

#[derive(Serialize)]
struct OutlineJson<'a> {
    title: &'a str,
    src: &'a Path,
    mute_audio: bool,
    slides: &'a [Slide],
}

/// Print every slide of a markup file in offset order.
pub fn handle(markup_file: &Path, json: bool) -> Result<()> {
    let markup = Markup::from_yaml(markup_file)?;
    let index = PresentationIndex::from_markup(&markup)?;

    if json {
        let outline = OutlineJson {
            title: &markup.title,
            src: &markup.src,
            mute_audio: markup.settings.mute_audio,
            slides: index.all_slides(),
        };
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        print!("{}", render_outline(&markup.title, &index));
    }
    Ok(())
}
