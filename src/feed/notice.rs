use std::time::Duration;

use tokio::time::Instant;

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Notices {
    ttl: Duration,
    items: Vec<Notice>,
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, items: Vec::new() }
    }

    pub fn push(&mut self, message: impl Into<String>) -> Notice {
        let now = Instant::now();
        self.prune(now);
        let notice = Notice { message: message.into(), expires_at: now + self.ttl };
        self.items.push(notice.clone());
        notice
    }

    /// Unexpired notices, oldest first. Expired ones are dropped.
    pub fn active(&mut self) -> Vec<Notice> {
        self.prune(Instant::now());
        self.items.clone()
    }

    fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notices_expire_after_ttl() {
        let mut notices = Notices::new(Duration::from_secs(5));
        notices.push("first");
        tokio::time::advance(Duration::from_secs(2)).await;
        notices.push("second");
        assert_eq!(notices.active().len(), 2);

        tokio::time::advance(Duration::from_secs(3)).await;
        let left = notices.active();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].message, "second");

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(notices.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn push_drops_expired_notices() {
        let mut notices = Notices::new(Duration::from_secs(5));
        for _ in 0..3 {
            notices.push("Failed to load posts. Please try again later.");
            tokio::time::advance(Duration::from_secs(6)).await;
        }
        notices.push("latest");
        assert_eq!(notices.items.len(), 1);
        assert_eq!(notices.items[0].message, "latest");
    }
}
