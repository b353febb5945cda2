use crate::config::{CURSOR_BLINK_MS, DELETE_INTERVAL_MS, FULL_PHRASE_PAUSE_MS, TYPE_INTERVAL_MS};
use crate::utils::scheduler::{Scheduler, TimerHandle};
use leptos::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const SEARCH_PHRASES: [&str; 2] = [
    "What job are you looking for?",
    "Who are you looking to hire?",
];

pub const CURSOR_GLYPH: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMode {
    Typing,
    Deleting,
}

/// Typing/deleting cycle over a fixed phrase list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    index: usize,
    cursor: usize,
    mode: TypeMode,
    // Full phrase shown, waiting out the pause before deleting starts.
    holding: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            index: 0,
            cursor: 0,
            mode: TypeMode::Typing,
            holding: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> TypeMode {
        self.mode
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|phrase| phrase[..self.cursor].iter().collect())
            .unwrap_or_default()
    }

    /// Performs one transition and returns the delay before the next one.
    /// `None` means there is nothing to animate.
    pub fn step(&mut self) -> Option<u32> {
        let len = self.phrases.get(self.index)?.len();
        let delay = match self.mode {
            TypeMode::Typing if self.cursor < len => {
                self.cursor += 1;
                TYPE_INTERVAL_MS
            }
            TypeMode::Typing if !self.holding => {
                self.holding = true;
                FULL_PHRASE_PAUSE_MS
            }
            TypeMode::Typing => {
                self.holding = false;
                self.mode = TypeMode::Deleting;
                DELETE_INTERVAL_MS
            }
            TypeMode::Deleting if self.cursor > 0 => {
                self.cursor -= 1;
                DELETE_INTERVAL_MS
            }
            TypeMode::Deleting => {
                self.mode = TypeMode::Typing;
                self.index = (self.index + 1) % self.phrases.len();
                TYPE_INTERVAL_MS
            }
        };
        Some(delay)
    }
}

pub fn render_placeholder(text: &str, cursor_visible: bool) -> String {
    if cursor_visible {
        format!("{}{}", text, CURSOR_GLYPH)
    } else {
        text.to_string()
    }
}

struct DriverShared {
    machine: RefCell<Typewriter>,
    text: RwSignal<String>,
    cursor_visible: RwSignal<bool>,
    scheduler: Rc<dyn Scheduler>,
    step_timer: RefCell<Option<TimerHandle>>,
    blink_timer: RefCell<Option<TimerHandle>>,
}

/// Runs a [`Typewriter`] and the cursor blink on a scheduler.
#[derive(Clone)]
pub struct TypewriterDriver {
    shared: Rc<DriverShared>,
}

impl TypewriterDriver {
    pub fn start(machine: Typewriter, scheduler: Rc<dyn Scheduler>) -> Self {
        let shared = Rc::new(DriverShared {
            text: create_rw_signal(machine.text()),
            machine: RefCell::new(machine),
            cursor_visible: create_rw_signal(true),
            scheduler,
            step_timer: RefCell::new(None),
            blink_timer: RefCell::new(None),
        });

        if !shared.machine.borrow().phrases.is_empty() {
            schedule_step(&shared, TYPE_INTERVAL_MS);
        }

        let cursor_visible = shared.cursor_visible;
        let blink = shared.scheduler.schedule_interval(
            CURSOR_BLINK_MS,
            Box::new(move || cursor_visible.update(|visible| *visible = !*visible)),
        );
        *shared.blink_timer.borrow_mut() = Some(blink);

        Self { shared }
    }

    pub fn text(&self) -> ReadSignal<String> {
        self.shared.text.read_only()
    }

    pub fn cursor_visible(&self) -> ReadSignal<bool> {
        self.shared.cursor_visible.read_only()
    }

    pub fn placeholder(&self) -> Signal<String> {
        let text = self.shared.text;
        let cursor_visible = self.shared.cursor_visible;
        Signal::derive(move || text.with(|t| render_placeholder(t, cursor_visible.get())))
    }

    pub fn snapshot(&self) -> Typewriter {
        self.shared.machine.borrow().clone()
    }

    pub fn stop(&self) {
        self.shared.step_timer.borrow_mut().take();
        self.shared.blink_timer.borrow_mut().take();
    }
}

fn schedule_step(shared: &Rc<DriverShared>, delay: u32) {
    let weak: Weak<DriverShared> = Rc::downgrade(shared);
    let handle = shared.scheduler.schedule(
        delay,
        Box::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let next = shared.machine.borrow_mut().step();
            let text = shared.machine.borrow().text();
            shared.text.set(text);
            if let Some(delay) = next {
                schedule_step(&shared, delay);
            }
        }),
    );
    // Replacing the previous handle cancels it.
    *shared.step_timer.borrow_mut() = Some(handle);
}
