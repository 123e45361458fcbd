use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::card::PostCard;
use super::notice::Notice;
use super::render::{Confirm, FeedRenderer};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Clear,
    Append(Vec<i64>),
    Loading(bool),
    Form(bool),
    Notice(String),
}

impl RenderEvent {
    pub fn appended_ids(&self) -> Option<Vec<i64>> {
        match self {
            RenderEvent::Append(ids) => Some(ids.clone()),
            _ => None,
        }
    }
}

/// Records every draw call in order.
#[derive(Default)]
pub struct RecordingRenderer {
    events: RefCell<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// Ids of every appended card, across clears.
    pub fn appended(&self) -> Vec<i64> {
        self.events.borrow().iter().filter_map(RenderEvent::appended_ids).flatten().collect()
    }

    pub fn loading_flips(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e { RenderEvent::Loading(v) => Some(*v), _ => None })
            .collect()
    }

    pub fn last_form_visibility(&self) -> Option<bool> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e { RenderEvent::Form(v) => Some(*v), _ => None })
    }
}

impl FeedRenderer for RecordingRenderer {
    fn clear(&self) {
        self.events.borrow_mut().push(RenderEvent::Clear);
    }

    fn append_posts(&self, cards: &[PostCard]) {
        self.events.borrow_mut().push(RenderEvent::Append(cards.iter().map(|c| c.id).collect()));
    }

    fn set_loading(&self, loading: bool) {
        self.events.borrow_mut().push(RenderEvent::Loading(loading));
    }

    fn set_form_visible(&self, visible: bool) {
        self.events.borrow_mut().push(RenderEvent::Form(visible));
    }

    fn show_notice(&self, notice: &Notice) {
        self.events.borrow_mut().push(RenderEvent::Notice(notice.message.clone()));
    }
}

/// Always gives the same answer; counts how often it was asked.
pub struct FixedConfirm {
    answer: bool,
    asked: Cell<usize>,
    last_message: RefCell<Option<String>>,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer, asked: Cell::new(0), last_message: RefCell::new(None) }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Confirm for FixedConfirm {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        *self.last_message.borrow_mut() = Some(message.to_string());
        self.answer
    }
}
