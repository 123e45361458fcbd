use std::cell::Cell;

use crate::feed::{FeedRenderer, Notice, PostCard};

/// Prints the feed to stdout. A "clear" prints a separator rather than
/// wiping the scrollback.
#[derive(Default)]
pub struct TerminalRenderer {
    shown: Cell<usize>,
}

pub fn print_card(card: &PostCard) {
    println!("#{:<5} {}", card.id, card.title);
    println!("       {}", card.excerpt.replace('\n', " "));
    println!("       🖼  {}", card.image);
}

impl FeedRenderer for TerminalRenderer {
    fn clear(&self) {
        self.shown.set(0);
        println!("──────── feed ────────");
    }

    fn append_posts(&self, cards: &[PostCard]) {
        for card in cards {
            print_card(card);
        }
        self.shown.set(self.shown.get() + cards.len());
        if cards.is_empty() && self.shown.get() == 0 {
            println!("(no posts)");
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("⏳ loading…");
        }
    }

    fn set_form_visible(&self, visible: bool) {
        if visible {
            println!("📝 New post (leave the title empty to cancel)");
        }
    }

    fn show_notice(&self, notice: &Notice) {
        eprintln!("⚠️  {}", notice.message);
    }
}
