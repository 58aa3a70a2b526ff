// Observer Pattern - back-in-stock alerts
//
// A product keeps its subscribers by id. Subscribers are notified only when
// the product goes from out of stock to in stock.

use crate::messaging::{Narrator, NotificationCategory};

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Something that wants to hear about restocks
pub trait Observer {
    fn update(&mut self, product: &str, narrator: &mut Narrator);
}

/// Shopper waiting for a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    inbox: Vec<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            inbox: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Products this user was alerted about, oldest first
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Observer for User {
    fn update(&mut self, product: &str, narrator: &mut Narrator) {
        self.inbox.push(product.to_string());
        narrator.info(format!(
            "Notification to {}: '{}' is back in stock!",
            self.username, product
        ));
    }
}

/// Subject tracking stock status and its subscribers
pub struct Product<O: Observer = User> {
    name: String,
    in_stock: bool,
    subscribers: Vec<(SubscriberId, O)>,
    next_id: u64,
    narrator: Narrator,
}

impl<O: Observer> Product<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_narrator(name, Narrator::new(NotificationCategory::Observer))
    }

    pub fn with_narrator(name: impl Into<String>, narrator: Narrator) -> Self {
        Self {
            name: name.into(),
            in_stock: false,
            subscribers: Vec::new(),
            next_id: 0,
            narrator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn subscribe(&mut self, observer: O) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer));
        id
    }

    /// Remove a subscriber and hand it back; unknown ids return `None`
    pub fn unsubscribe(&mut self, id: SubscriberId) -> Option<O> {
        let pos = self.subscribers.iter().position(|(sid, _)| *sid == id)?;
        Some(self.subscribers.remove(pos).1)
    }

    pub fn subscriber(&self, id: SubscriberId) -> Option<&O> {
        self.subscribers
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, observer)| observer)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Update stock status; returns how many subscribers were notified
    pub fn set_stock(&mut self, in_stock: bool) -> usize {
        let restocked = !self.in_stock && in_stock;
        self.in_stock = in_stock;

        if in_stock {
            self.narrator
                .info(format!("Product '{}' is now in stock.", self.name));
        } else {
            self.narrator
                .info(format!("Product '{}' is out of stock.", self.name));
        }

        if restocked { self.notify_observers() } else { 0 }
    }

    fn notify_observers(&mut self) -> usize {
        tracing::debug!(product = %self.name, subscribers = self.subscribers.len(), "notifying");
        for (_, observer) in &mut self.subscribers {
            observer.update(&self.name, &mut self.narrator);
        }
        self.subscribers.len()
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::with_narrator(
            "iPhone 15 Pro Max",
            Narrator::silent(NotificationCategory::Observer),
        )
    }

    #[test]
    fn test_restock_notifies_every_subscriber() {
        let mut product = product();
        let alice = product.subscribe(User::new("Alice"));
        let bob = product.subscribe(User::new("Bob"));

        assert_eq!(product.set_stock(true), 2);
        assert_eq!(
            product.narrator().messages(),
            vec![
                "Product 'iPhone 15 Pro Max' is now in stock.",
                "Notification to Alice: 'iPhone 15 Pro Max' is back in stock!",
                "Notification to Bob: 'iPhone 15 Pro Max' is back in stock!",
            ]
        );
        assert_eq!(product.subscriber(alice).map(|u| u.inbox().len()), Some(1));
        assert_eq!(product.subscriber(bob).map(|u| u.inbox().len()), Some(1));
    }

    #[test]
    fn test_unsubscribed_user_is_not_notified() {
        let mut product = product();
        let alice = product.subscribe(User::new("Alice"));
        let bob = product.subscribe(User::new("Bob"));

        product.set_stock(true);
        let bob = product.unsubscribe(bob).unwrap();
        product.set_stock(false);
        product.set_stock(true);

        assert_eq!(bob.inbox().len(), 1);
        assert_eq!(product.subscriber(alice).map(|u| u.inbox().len()), Some(2));
        assert_eq!(product.subscriber_count(), 1);
    }

    #[test]
    fn test_staying_in_stock_does_not_renotify() {
        let mut product = product();
        product.subscribe(User::new("Alice"));

        assert_eq!(product.set_stock(true), 1);
        assert_eq!(product.set_stock(true), 0);
        assert!(product.is_in_stock());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut product = product();
        let alice = product.subscribe(User::new("Alice"));
        product.unsubscribe(alice);

        assert!(product.unsubscribe(alice).is_none());
        assert!(product.subscriber(alice).is_none());
    }
}
