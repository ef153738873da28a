//! Video backend abstraction.

use anyhow::Result;

use crate::player::render::Caption;

/// The video surface driven by the player loop.
///
/// Frame numbers are the same unit as slide offsets.
pub trait VideoBackend {
    /// Frame currently being shown.
    fn frame(&self) -> u64;

    fn is_paused(&self) -> bool;

    fn pause(&mut self);

    fn resume(&mut self);

    fn seek_frame(&mut self, frame: u64);

    /// Advance internal clocks/decoders by one render pass.
    fn update(&mut self) -> Result<()>;

    /// Draw the current frame together with the slide caption.
    fn present(&mut self, caption: &Caption) -> Result<()>;

    /// Output surface was resized.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}
