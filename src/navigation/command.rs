//! Navigation commands as pure state transitions.

use std::fmt;

use crate::navigation::state::NavState;
use crate::presentation::{PresentationIndex, Slide, SlideId};

/// A named navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AdvanceSlide,
    RetreatSlide,
    AdvanceSection,
    RetreatSection,
    ToFirst,
    ToLast,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::AdvanceSlide,
        Command::RetreatSlide,
        Command::AdvanceSection,
        Command::RetreatSection,
        Command::ToFirst,
        Command::ToLast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::AdvanceSlide => "advance_slide",
            Command::RetreatSlide => "retreat_slide",
            Command::AdvanceSection => "advance_section",
            Command::RetreatSection => "retreat_section",
            Command::ToFirst => "to_first",
            Command::ToLast => "to_last",
        }
    }

    /// Compute the next state and the frame to seek to.
    ///
    /// Never fails: commands that cannot move (deck boundaries, ids the index
    /// does not know) return the state unchanged and `None`. For
    /// `RetreatSlide` a `None` seek with a changed state means "before the
    /// first slide", i.e. the very start of the video.
    pub fn apply(self, state: NavState, index: &PresentationIndex) -> (NavState, Option<u64>) {
        let moved = match self {
            Command::AdvanceSlide => advance_slide(state, index),
            Command::RetreatSlide => retreat_slide(state, index),
            Command::AdvanceSection => advance_section(state, index),
            Command::RetreatSection => retreat_section(state, index),
            Command::ToFirst => Some(show_slide(index.first(), index)),
            Command::ToLast => Some((
                NavState::AtEnd {
                    current: index.last().id(),
                },
                Some(index.last().offset),
            )),
        };

        moved.unwrap_or((state, None))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Transition = Option<(NavState, Option<u64>)>;

/// Make `slide` current and stop at whatever follows it.
fn show_slide(slide: &Slide, index: &PresentationIndex) -> (NavState, Option<u64>) {
    let next = index.next_slide(slide.id()).map(Slide::id);
    (NavState::showing(slide.id(), next), Some(slide.offset))
}

fn advance_slide(state: NavState, index: &PresentationIndex) -> Transition {
    let next = index.by_full_id(state.next()?)?;
    Some(show_slide(next, index))
}

fn retreat_slide(state: NavState, index: &PresentationIndex) -> Transition {
    let current: SlideId = state.current()?;
    index.by_full_id(current)?;

    let new_current = index.prev_slide(current);
    Some((
        NavState::heading_to(new_current.map(Slide::id), current),
        new_current.map(|s| s.offset),
    ))
}

fn advance_section(state: NavState, index: &PresentationIndex) -> Transition {
    let next = state.next()?;
    let start = index.next_section_start(next.section)?;
    Some(show_slide(start, index))
}

fn retreat_section(state: NavState, index: &PresentationIndex) -> Transition {
    let current = state.current()?;
    let start = index.prev_section_start(current.section)?;
    Some(show_slide(start, index))
}
