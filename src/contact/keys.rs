use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

pub const KEY_PREFIX: &str = "contact-";

/// Issues `contact-<unix millis>` keys.
///
/// Keys handed out by one generator are strictly increasing: if the clock has
/// not moved past the last issued millisecond (or went backwards), the next
/// millisecond after it is used instead.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    last: AtomicI64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&self, now_millis: i64) -> String {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("{KEY_PREFIX}{candidate}"),
                Err(current) => last = current,
            }
        }
    }
}
