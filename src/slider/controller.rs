use log::{debug, warn};

use crate::config;

/// Display state of a single slide. Exactly one slide is `Active` once the
/// slider is initialized; any number may be `Leaving` during rapid navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideMark {
    #[default]
    Inactive,
    Active,
    Leaving,
}

impl SlideMark {
    pub fn class(self) -> Option<&'static str> {
        match self {
            SlideMark::Inactive => None,
            SlideMark::Active => Some("active"),
            SlideMark::Leaving => Some("prev"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKey {
    Left,
    Right,
}

impl SlideKey {
    /// Maps a `KeyboardEvent.key` identifier. Every other key is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SlideKey::Left),
            "ArrowRight" => Some(SlideKey::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderMsg {
    AutoAdvance,
    /// Slide index and the leave generation that scheduled the clear.
    ClearLeaving(usize, u64),
    Indicator(usize),
    Key(SlideKey),
    PointerEnter,
    PointerLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderTiming {
    pub slide_duration_ms: u32,
    pub leave_transition_ms: u32,
}

impl Default for SliderTiming {
    fn default() -> Self {
        Self {
            slide_duration_ms: config::SLIDE_DURATION_MS,
            leave_transition_ms: config::LEAVE_TRANSITION_MS,
        }
    }
}

/// Delivers slider messages back to the controller at a later time.
///
/// Both kinds of deferred work re-enter the same single-threaded queue, so
/// the controller never runs two operations at once.
pub trait Scheduler {
    /// Cancels the repeating timer when dropped.
    type Handle;

    fn repeat(&self, period_ms: u32, msg: SliderMsg) -> Self::Handle;

    /// One-shot, not cancellable.
    fn defer(&self, delay_ms: u32, msg: SliderMsg);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    pub current_index: Option<usize>,
    pub timer_active: bool,
}

pub struct SliderController<S: Scheduler> {
    scheduler: S,
    timing: SliderTiming,
    marks: Vec<SlideMark>,
    leave_generations: Vec<u64>,
    indicator_count: usize,
    current: Option<usize>,
    auto: Option<S::Handle>,
}

impl<S: Scheduler> SliderController<S> {
    pub fn new(scheduler: S, timing: SliderTiming) -> Self {
        Self {
            scheduler,
            timing,
            marks: Vec::new(),
            leave_generations: Vec::new(),
            indicator_count: 0,
            current: None,
            auto: None,
        }
    }

    /// Activates the first slide and starts the automatic timer.
    /// Returns `false` and leaves everything untouched when there are no slides.
    pub fn initialize(&mut self, slide_count: usize, indicator_count: usize) -> bool {
        if slide_count == 0 {
            debug!("hero slider: no slides, staying idle");
            return false;
        }
        if indicator_count != 0 && indicator_count != slide_count {
            warn!(
                "hero slider: {} indicators for {} slides, extra indicators stay inactive",
                indicator_count, slide_count
            );
        }

        self.marks = vec![SlideMark::Inactive; slide_count];
        self.marks[0] = SlideMark::Active;
        self.leave_generations = vec![0; slide_count];
        self.indicator_count = indicator_count;
        self.current = Some(0);
        self.start_auto();
        debug!("hero slider: initialized with {} slides", slide_count);
        true
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_index: self.current,
            timer_active: self.auto.is_some(),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.marks.len()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    pub fn slide_mark(&self, index: usize) -> SlideMark {
        self.marks.get(index).copied().unwrap_or_default()
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        index < self.indicator_count && self.current == Some(index)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if index == current {
            return false;
        }
        if index >= self.marks.len() {
            warn!(
                "hero slider: slide {} out of range (have {})",
                index,
                self.marks.len()
            );
            return false;
        }

        self.marks[current] = SlideMark::Leaving;
        self.leave_generations[current] += 1;
        self.scheduler.defer(
            self.timing.leave_transition_ms,
            SliderMsg::ClearLeaving(current, self.leave_generations[current]),
        );
        self.marks[index] = SlideMark::Active;
        self.current = Some(index);
        debug!("hero slider: {} -> {}", current, index);
        true
    }

    pub fn next(&mut self) -> bool {
        match self.current {
            Some(current) => self.go_to((current + 1) % self.marks.len()),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.current {
            Some(0) => self.go_to(self.marks.len() - 1),
            Some(current) => self.go_to(current - 1),
            None => false,
        }
    }

    pub fn start_auto(&mut self) {
        self.pause_auto();
        if self.current.is_none() {
            return;
        }
        self.auto = Some(
            self.scheduler
                .repeat(self.timing.slide_duration_ms, SliderMsg::AutoAdvance),
        );
    }

    pub fn pause_auto(&mut self) {
        // dropping the handle cancels the timer
        self.auto = None;
    }

    pub fn reset_auto(&mut self) {
        self.pause_auto();
        self.start_auto();
    }

    /// Single entry point for timers and user input. Returns whether any
    /// visible mark changed.
    pub fn handle(&mut self, msg: SliderMsg) -> bool {
        if self.current.is_none() {
            return false;
        }
        match msg {
            SliderMsg::AutoAdvance => self.next(),
            SliderMsg::ClearLeaving(index, generation) => self.clear_leaving(index, generation),
            SliderMsg::Indicator(index) => {
                let changed = self.go_to(index);
                self.reset_auto();
                changed
            }
            SliderMsg::Key(SlideKey::Left) => {
                let changed = self.previous();
                self.reset_auto();
                changed
            }
            SliderMsg::Key(SlideKey::Right) => {
                let changed = self.next();
                self.reset_auto();
                changed
            }
            SliderMsg::PointerEnter => {
                self.pause_auto();
                false
            }
            SliderMsg::PointerLeave => {
                self.start_auto();
                false
            }
        }
    }

    // A slide that became active again before its clear fired keeps its mark,
    // and a clear from an older transition leaves a newer leaving mark alone.
    fn clear_leaving(&mut self, index: usize, generation: u64) -> bool {
        if self.leave_generations.get(index) != Some(&generation) {
            return false;
        }
        match self.marks.get_mut(index) {
            Some(mark) if *mark == SlideMark::Leaving => {
                *mark = SlideMark::Inactive;
                true
            }
            _ => false,
        }
    }
}
