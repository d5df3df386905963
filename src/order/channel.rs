//! Order Channels

use crate::order::OrderLink;

/// Where finished orders are handed off, e.g. a browser opening the messaging link.
///
/// Fire-and-forget: nothing is awaited and no result is reported back.
pub trait OrderChannel {
    /// Open `link`.
    fn open(&mut self, link: &OrderLink);
}

/// Channel that keeps every opened link.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    sent: Vec<OrderLink>,
}

impl Outbox {
    /// Create an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links opened so far, oldest first.
    pub fn sent(&self) -> &[OrderLink] {
        &self.sent
    }
}

impl OrderChannel for Outbox {
    fn open(&mut self, link: &OrderLink) {
        self.sent.push(link.clone());
    }
}

impl<C: OrderChannel + ?Sized> OrderChannel for &mut C {
    fn open(&mut self, link: &OrderLink) {
        (**self).open(link);
    }
}
