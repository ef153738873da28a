//! Integration tests for the player loop

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use anime_presenter::player::render::Caption;
use anime_presenter::player::{EventSource, Player, PlayerSettings, VideoBackend};
use anime_presenter::{Markup, Navigator, PresentationIndex, SlideId};

use crate::helpers::temp_fixture;

/// Backend whose clock advances a fixed number of frames per render pass.
#[derive(Debug, Default)]
struct FakeVideo {
    frame: u64,
    paused: bool,
    step: u64,
    seeks: Vec<u64>,
    captions: Vec<Caption>,
}

impl VideoBackend for FakeVideo {
    fn frame(&self) -> u64 {
        self.frame
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn seek_frame(&mut self, frame: u64) {
        self.frame = frame;
        self.seeks.push(frame);
    }

    fn update(&mut self) -> Result<()> {
        if !self.paused {
            self.frame += self.step;
        }
        Ok(())
    }

    fn present(&mut self, caption: &Caption) -> Result<()> {
        self.captions.push(caption.clone());
        Ok(())
    }
}

/// Replays a fixed list of per-iteration event batches.
///
/// Each inner vector is delivered during one loop iteration; an empty batch
/// lets the loop render once without input.
struct Script {
    batches: VecDeque<Vec<Event>>,
    current: VecDeque<Event>,
    exhausted_batch: bool,
}

impl Script {
    fn new(batches: Vec<Vec<Event>>) -> Self {
        Self {
            batches: batches.into(),
            current: VecDeque::new(),
            exhausted_batch: true,
        }
    }
}

impl EventSource for Script {
    fn poll_event(&mut self) -> Result<Option<Event>> {
        if self.exhausted_batch {
            self.current = self.batches.pop_front().unwrap_or_else(|| vec![key('q')]).into();
            self.exhausted_batch = false;
        }
        match self.current.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                self.exhausted_batch = true;
                Ok(None)
            }
        }
    }
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn code(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn player(step: u64) -> Player<FakeVideo> {
    let (_dir, path) = temp_fixture("positive_case.yaml");
    let markup = Markup::from_yaml(&path).unwrap();
    let index = Arc::new(PresentationIndex::from_markup(&markup).unwrap());

    let video = FakeVideo {
        step,
        ..Default::default()
    };
    let settings = PlayerSettings {
        redraw_passes: 3,
        frame_wait: Duration::ZERO,
    };
    Player::new(video, Navigator::new(index), markup.title, settings)
}

#[test]
fn playback_pauses_on_each_boundary() {
    let mut player = player(40);
    player.open().unwrap();

    // 40 frames per pass: stop on 1/1, resume, then stop again on 1/2 at frame 120.
    let batches = vec![vec![], vec![key(' ')], vec![], vec![], vec![], vec![key('q')]];
    player.run(&mut Script::new(batches)).unwrap();

    assert!(!player.is_running());
    assert_eq!(
        player.navigator().state().current(),
        Some(SlideId::new(1, 2))
    );
    assert!(player.video().is_paused());
    assert!(player.video().frame() >= 100);
}

#[test]
fn manual_navigation_seeks_and_pauses() {
    let mut player = player(0);
    player.open().unwrap();

    let batches = vec![
        vec![code(KeyCode::Right, KeyModifiers::SHIFT)],
        vec![code(KeyCode::Right, KeyModifiers::NONE)],
        vec![code(KeyCode::Left, KeyModifiers::SHIFT)],
        vec![key('e')],
        vec![key('q')],
    ];
    player.run(&mut Script::new(batches)).unwrap();

    assert_eq!(player.video().seeks, vec![0, 200, 300, 0, 450]);
    assert!(player.video().is_paused());
    assert_eq!(
        player.navigator().state().current(),
        Some(SlideId::new(2, 3))
    );
    assert_eq!(player.navigator().state().next(), None);
}

#[test]
fn captions_follow_navigation() {
    let mut player = player(0);
    player.open().unwrap();

    let batches = vec![vec![code(KeyCode::End, KeyModifiers::NONE)], vec![key('q')]];
    player.run(&mut Script::new(batches)).unwrap();

    let first = player.video().captions.first().unwrap();
    assert_eq!(first.heading, player.title());
    assert_eq!(player.title(), "My Awesome Presentation");

    let last = player.video().captions.last().unwrap();
    assert_eq!(last.heading, "2/3 | Section 2.");
    assert_eq!(last.title, "Slide 3. End");
    assert!(last.at_end);
}

#[test]
fn restart_returns_to_initial_state() {
    let mut player = player(0);
    player.open().unwrap();

    let batches = vec![vec![key('e')], vec![key('r')], vec![key('q')]];
    player.run(&mut Script::new(batches)).unwrap();

    assert_eq!(player.navigator().state().current(), None);
    assert_eq!(player.video().seeks, vec![0, 450, 0]);
}

#[test]
fn left_at_start_rewinds_to_frame_zero() {
    let mut player = player(0);
    player.open().unwrap();

    let batches = vec![vec![code(KeyCode::Left, KeyModifiers::NONE)], vec![key('q')]];
    player.run(&mut Script::new(batches)).unwrap();

    assert_eq!(player.video().seeks, vec![0, 0]);
}
