//! Terminal preview backend.
//!
//! `ClockVideo` does not decode anything: it keeps a frame counter that
//! advances with wall-clock time at a fixed frame rate and draws the slide
//! caption into the terminal. This is enough to rehearse a talk's slide
//! timing or to drive a presenter view next to the real video.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use crate::player::backend::VideoBackend;
use crate::player::render::{render_screen, Caption};

/// Wall-clock driven frame counter that renders captions to a terminal.
#[derive(Debug)]
pub struct ClockVideo<W: Write> {
    out: W,
    fps: f64,
    paused: bool,
    /// Frame at `anchor_time`
    anchor_frame: u64,
    anchor_time: Instant,
    cols: u16,
    rows: u16,
}

impl<W: Write> ClockVideo<W> {
    /// Create a playing clock at frame 0.
    pub fn new(out: W, fps: f64, cols: u16, rows: u16) -> Self {
        Self {
            out,
            fps,
            paused: false,
            anchor_frame: 0,
            anchor_time: Instant::now(),
            cols,
            rows,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    fn elapsed_frames(&self) -> u64 {
        (self.anchor_time.elapsed().as_secs_f64() * self.fps) as u64
    }
}

impl<W: Write> VideoBackend for ClockVideo<W> {
    fn frame(&self) -> u64 {
        if self.paused {
            self.anchor_frame
        } else {
            self.anchor_frame.saturating_add(self.elapsed_frames())
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn pause(&mut self) {
        if !self.paused {
            self.anchor_frame = self.frame();
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        if self.paused {
            self.anchor_time = Instant::now();
            self.paused = false;
        }
    }

    fn seek_frame(&mut self, frame: u64) {
        self.anchor_frame = frame;
        self.anchor_time = Instant::now();
    }

    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, caption: &Caption) -> Result<()> {
        render_screen(&mut self.out, caption, self.cols, self.rows)
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }
}
