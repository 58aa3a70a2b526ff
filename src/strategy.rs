// Strategy Pattern - interchangeable payment methods behind one processor
//
// The processor owns exactly one strategy at a time and can swap it between
// checkouts without the caller knowing which method runs.

use crate::messaging::{Narrator, NotificationCategory};

/// A way of paying an amount
pub trait PaymentStrategy: Send {
    /// Human-readable receipt for paying `amount`
    fn pay(&self, amount: f64) -> String;

    /// Short method name used in logs
    fn method(&self) -> &'static str;
}

/// Last `n` characters of `s` (all of it if shorter)
fn tail(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// First `n` characters of `s` (all of it if shorter)
fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub struct CreditCardPayment {
    card_number: String,
    expiry: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>, expiry: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            expiry: expiry.into(),
        }
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Paid ${:.2} using Credit Card ending in {}.",
            amount,
            tail(&self.card_number, 4)
        )
    }

    fn method(&self) -> &'static str {
        "credit-card"
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64) -> String {
        format!("Paid ${:.2} using PayPal account: {}.", amount, self.email)
    }

    fn method(&self) -> &'static str {
        "paypal"
    }
}

pub struct BitcoinPayment {
    wallet_address: String,
}

impl BitcoinPayment {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }
}

impl PaymentStrategy for BitcoinPayment {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Paid ${:.2} using Bitcoin wallet: {}...",
            amount,
            head(&self.wallet_address, 6)
        )
    }

    fn method(&self) -> &'static str {
        "bitcoin"
    }
}

/// Checkout context holding the current payment strategy
pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
    checkouts: usize,
    narrator: Narrator,
}

impl PaymentProcessor {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self::with_narrator(strategy, Narrator::new(NotificationCategory::Strategy))
    }

    pub fn with_narrator(strategy: Box<dyn PaymentStrategy>, narrator: Narrator) -> Self {
        Self {
            strategy,
            checkouts: 0,
            narrator,
        }
    }

    /// Swap the payment method, returning the previous one
    pub fn set_strategy(
        &mut self,
        strategy: Box<dyn PaymentStrategy>,
    ) -> Box<dyn PaymentStrategy> {
        tracing::debug!(
            from = self.strategy.method(),
            to = strategy.method(),
            "strategy swapped"
        );
        std::mem::replace(&mut self.strategy, strategy)
    }

    pub fn method(&self) -> &'static str {
        self.strategy.method()
    }

    pub fn checkout(&mut self, amount: f64) -> String {
        let receipt = self.strategy.pay(amount);
        self.checkouts += 1;
        self.narrator.info(receipt.clone());
        receipt
    }

    pub fn checkout_count(&self) -> usize {
        self.checkouts
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

    fn processor(strategy: Box<dyn PaymentStrategy>) -> PaymentProcessor {
        PaymentProcessor::with_narrator(strategy, Narrator::silent(NotificationCategory::Strategy))
    }

    #[test]
    fn test_credit_card_masks_number() {
        let card = CreditCardPayment::new("1234567890123456", "12/25");
        assert_eq!(
            card.pay(49.99),
            "Paid $49.99 using Credit Card ending in 3456."
        );
        assert_eq!(card.expiry(), "12/25");
    }

    #[test]
    fn test_swapping_strategy_changes_receipt() {
        let mut processor = processor(Box::new(PayPalPayment::new("user@example.com")));
        processor.checkout(10.0);

        let previous = processor.set_strategy(Box::new(BitcoinPayment::new(
            "1FfmbHfnpaZjKFvyi1okTjJJusN455paPH",
        )));
        assert_eq!(previous.method(), "paypal");
        processor.checkout(10.0);

        assert_eq!(
            processor.narrator().messages(),
            vec![
                "Paid $10.00 using PayPal account: user@example.com.",
                "Paid $10.00 using Bitcoin wallet: 1FfmbH...",
            ]
        );
        assert_eq!(processor.checkout_count(), 2);
        assert_eq!(processor.method(), "bitcoin");
    }

    #[test]
    fn test_short_identifiers_are_not_sliced_past_the_end() {
        let card = CreditCardPayment::new("12", "01/30");
        assert_eq!(card.pay(1.0), "Paid $1.00 using Credit Card ending in 12.");

        let wallet = BitcoinPayment::new("abc");
        assert_eq!(wallet.pay(1.0), "Paid $1.00 using Bitcoin wallet: abc...");
    }
}
