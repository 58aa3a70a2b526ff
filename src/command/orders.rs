// OrderService - the receiver that order commands act upon
//
// The service is the single source of truth for order status. Commands only
// snapshot the one status they need to reverse themselves.

use crate::messaging::{Narrator, NotificationCategory};
use chrono::Local;
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Placed,
    Shipped,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Result of asking the service to change an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Applied,
    /// The order was not in a status that allows the action
    Rejected { status: Option<OrderStatus> },
}

impl OrderOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, OrderOutcome::Applied)
    }
}

fn status_label(status: Option<OrderStatus>) -> String {
    status.map_or_else(|| "NONE".to_string(), |s| s.to_string())
}

/// Order book keyed by order id
pub struct OrderService {
    orders: BTreeMap<String, OrderStatus>,
    narrator: Narrator,
}

impl OrderService {
    pub fn new() -> Self {
        Self::with_narrator(Narrator::new(NotificationCategory::Command))
    }

    pub fn with_narrator(narrator: Narrator) -> Self {
        Self {
            orders: BTreeMap::new(),
            narrator,
        }
    }

    fn now() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    /// Place (or re-place) an order. Always succeeds.
    pub fn place_order(&mut self, order_id: &str) -> OrderOutcome {
        self.orders.insert(order_id.to_string(), OrderStatus::Placed);
        self.narrator
            .info(format!("Order {} placed at {}", order_id, Self::now()));
        OrderOutcome::Applied
    }

    /// Cancel an order; only a placed order can be cancelled
    pub fn cancel_order(&mut self, order_id: &str) -> OrderOutcome {
        self.transition_from_placed(order_id, OrderStatus::Cancelled, "cancel", "cancelled")
    }

    /// Ship an order; only a placed order can be shipped
    pub fn ship_order(&mut self, order_id: &str) -> OrderOutcome {
        self.transition_from_placed(order_id, OrderStatus::Shipped, "ship", "shipped")
    }

    fn transition_from_placed(
        &mut self,
        order_id: &str,
        target: OrderStatus,
        verb: &str,
        past: &str,
    ) -> OrderOutcome {
        let current = self.status(order_id);
        if current == Some(OrderStatus::Placed) {
            self.orders.insert(order_id.to_string(), target);
            self.narrator
                .info(format!("Order {} {} at {}", order_id, past, Self::now()));
            OrderOutcome::Applied
        } else {
            self.narrator.warning(format!(
                "Cannot {} order {} (status: {})",
                verb,
                order_id,
                status_label(current)
            ));
            OrderOutcome::Rejected { status: current }
        }
    }

    /// Put an order back to a previously captured status (`None` removes it)
    pub fn restore(&mut self, order_id: &str, status: Option<OrderStatus>) {
        match status {
            Some(status) => {
                self.orders.insert(order_id.to_string(), status);
            }
            None => {
                self.orders.remove(order_id);
            }
        }
        self.narrator.info(format!(
            "Order {} restored to {}",
            order_id,
            status_label(status)
        ));
    }

    pub fn status(&self, order_id: &str) -> Option<OrderStatus> {
        self.orders.get(order_id).copied()
    }

    pub fn orders(&self) -> &BTreeMap<String, OrderStatus> {
        &self.orders
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> OrderService {
        OrderService::with_narrator(Narrator::silent(NotificationCategory::Command))
    }

    #[test]
    fn test_ship_requires_placed() {
        let mut svc = service();

        assert_eq!(
            svc.ship_order("ORD-1"),
            OrderOutcome::Rejected { status: None }
        );
        assert_eq!(
            svc.narrator().last_message(),
            Some("Cannot ship order ORD-1 (status: NONE)")
        );

        svc.place_order("ORD-1");
        assert!(svc.ship_order("ORD-1").is_applied());
        assert_eq!(svc.status("ORD-1"), Some(OrderStatus::Shipped));
    }

    #[test]
    fn test_cancel_shipped_is_rejected() {
        let mut svc = service();
        svc.place_order("ORD-2");
        svc.ship_order("ORD-2");

        let outcome = svc.cancel_order("ORD-2");
        assert_eq!(
            outcome,
            OrderOutcome::Rejected {
                status: Some(OrderStatus::Shipped)
            }
        );
        assert_eq!(svc.status("ORD-2"), Some(OrderStatus::Shipped));
    }

    #[test]
    fn test_restore_none_removes_order() {
        let mut svc = service();
        svc.place_order("ORD-3");
        svc.restore("ORD-3", None);

        assert!(svc.orders().is_empty());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::Placed.to_string(), "PLACED");
        assert_eq!(OrderStatus::Shipped.to_string(), "SHIPPED");
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }
}
