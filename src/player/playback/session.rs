//! The player loop: keeps the video in sync with the navigation state.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::PlayerConfig;
use crate::navigation::{Command, Navigator};
use crate::player::backend::VideoBackend;
use crate::player::input::{map_event, EventSource};
use crate::player::render::Caption;
use crate::player::state::{Action, InputResult};

/// Loop timing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSettings {
    /// Render passes after a seek before pausing again
    pub redraw_passes: u32,
    /// Sleep after each render pass
    pub frame_wait: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::from(&PlayerConfig::default())
    }
}

impl From<&PlayerConfig> for PlayerSettings {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            redraw_passes: config.redraw_passes,
            frame_wait: config.frame_wait(),
        }
    }
}

/// Drives a video backend from navigation commands.
pub struct Player<B: VideoBackend> {
    video: B,
    navigator: Navigator,
    title: String,
    settings: PlayerSettings,
    running: bool,
}

impl<B: VideoBackend> Player<B> {
    pub fn new(
        video: B,
        navigator: Navigator,
        title: impl Into<String>,
        settings: PlayerSettings,
    ) -> Self {
        Self {
            video,
            navigator,
            title: title.into(),
            settings,
            running: false,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn video(&self) -> &B {
        &self.video
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start a fresh session: navigation back to the initial state and
    /// the video playing from its first frame.
    pub fn open(&mut self) -> Result<()> {
        self.navigator.reset();
        self.video.seek_frame(0);
        self.video.resume();
        self.render()
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Pause on the next slide boundary once playback reaches it.
    ///
    /// Returns true if playback was paused.
    pub fn stop_on_slide(&mut self) -> bool {
        if self.video.is_paused() || !self.navigator.should_stop_at(self.video.frame()) {
            return false;
        }

        self.video.pause();
        self.navigator.apply(Command::AdvanceSlide);
        tracing::debug!(frame = self.video.frame(), "stopped on slide boundary");
        true
    }

    /// Perform a single action.
    pub fn handle_action(&mut self, action: Action) -> Result<InputResult> {
        match action {
            Action::Quit => return Ok(InputResult::Quit),
            Action::Resume => {
                // Nothing left to stop at after the last slide
                if self.navigator.next_slide().is_some() {
                    self.video.resume();
                }
            }
            Action::Restart => {
                self.navigator.reset();
                self.move_to_frame(Some(0))?;
            }
            Action::Resize(cols, rows) => {
                self.video.resize(cols, rows);
                self.render()?;
            }
            Action::Navigate(command) => {
                let mut frame = self.navigator.apply(command);
                if frame.is_none() && action.seeks_to_start_when_absent() {
                    frame = Some(0);
                }
                self.move_to_frame(frame)?;
            }
        }
        Ok(InputResult::Continue)
    }

    /// Seek and show the target frame, leaving playback paused.
    fn move_to_frame(&mut self, frame: Option<u64>) -> Result<()> {
        let Some(frame) = frame else {
            return Ok(());
        };

        self.video.seek_frame(frame);

        // The backend needs a few render passes after seek + pause before
        // the new frame actually shows up.
        self.video.resume();
        for _ in 0..self.settings.redraw_passes {
            self.render()?;
        }
        self.video.pause();
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.video.update()?;
        let caption = Caption::new(
            &self.title,
            &self.navigator,
            self.video.frame(),
            self.video.is_paused(),
        );
        self.video.present(&caption)?;

        if !self.settings.frame_wait.is_zero() {
            thread::sleep(self.settings.frame_wait);
        }
        Ok(())
    }

    /// Run until the presenter quits.
    pub fn run<E: EventSource>(&mut self, events: &mut E) -> Result<()> {
        self.running = true;
        while self.running {
            while let Some(event) = events.poll_event()? {
                let Some(action) = map_event(&event) else {
                    continue;
                };
                if self.handle_action(action)? == InputResult::Quit {
                    self.stop();
                    break;
                }
            }
            if !self.running {
                break;
            }

            self.stop_on_slide();
            self.render()?;
        }
        Ok(())
    }
}
