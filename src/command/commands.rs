// Concrete order commands
//
// Every command follows the same policy: capture the order's prior status
// unconditionally, then attempt the action. Undo restores the captured status
// only when the action actually took effect.

use crate::command::orders::{OrderOutcome, OrderService, OrderStatus};
use crate::command::trait_def::{CommandError, CommandResult, Reversal, UndoableCommand};

/// What a command captured during `execute()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    prev_status: Option<OrderStatus>,
    applied: bool,
}

fn capture(
    service: &mut OrderService,
    order_id: &str,
    action: impl FnOnce(&mut OrderService, &str) -> OrderOutcome,
) -> Snapshot {
    let prev_status = service.status(order_id);
    let outcome = action(service, order_id);
    Snapshot {
        prev_status,
        applied: outcome.is_applied(),
    }
}

fn reverse(
    snapshot: Option<Snapshot>,
    service: &mut OrderService,
    order_id: &str,
    verb: &str,
) -> CommandResult<Reversal> {
    let snapshot = snapshot.ok_or_else(|| {
        CommandError::InvalidState(format!(
            "Cannot undo {} for order {} before it was executed",
            verb, order_id
        ))
    })?;

    if snapshot.applied {
        service.restore(order_id, snapshot.prev_status);
        Ok(Reversal::Reverted)
    } else {
        let message = format!("Cannot undo {} for order {}", verb, order_id);
        service.narrator_mut().warning(message.clone());
        Ok(Reversal::NotReversible(message))
    }
}

/// Command to place an order
pub struct PlaceOrderCommand {
    order_id: String,
    snapshot: Option<Snapshot>,
}

impl PlaceOrderCommand {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            snapshot: None,
        }
    }
}

impl UndoableCommand<OrderService> for PlaceOrderCommand {
    fn execute(&mut self, service: &mut OrderService) -> CommandResult<()> {
        self.snapshot = Some(capture(service, &self.order_id, OrderService::place_order));
        Ok(())
    }

    fn undo(&mut self, service: &mut OrderService) -> CommandResult<Reversal> {
        reverse(self.snapshot.take(), service, &self.order_id, "placement")
    }

    fn description(&self) -> String {
        format!("Place order {}", self.order_id)
    }
}

/// Command to ship an order
///
/// Shipping an order that is not `PLACED` is rejected by the service but the
/// command is still recorded; its undo then reports that nothing can be undone.
pub struct ShipOrderCommand {
    order_id: String,
    snapshot: Option<Snapshot>,
}

impl ShipOrderCommand {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            snapshot: None,
        }
    }
}

impl UndoableCommand<OrderService> for ShipOrderCommand {
    fn execute(&mut self, service: &mut OrderService) -> CommandResult<()> {
        self.snapshot = Some(capture(service, &self.order_id, OrderService::ship_order));
        Ok(())
    }

    fn undo(&mut self, service: &mut OrderService) -> CommandResult<Reversal> {
        reverse(self.snapshot.take(), service, &self.order_id, "shipping")
    }

    fn description(&self) -> String {
        format!("Ship order {}", self.order_id)
    }
}

/// Command to cancel an order
pub struct CancelOrderCommand {
    order_id: String,
    snapshot: Option<Snapshot>,
}

impl CancelOrderCommand {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            snapshot: None,
        }
    }
}

impl UndoableCommand<OrderService> for CancelOrderCommand {
    fn execute(&mut self, service: &mut OrderService) -> CommandResult<()> {
        self.snapshot = Some(capture(service, &self.order_id, OrderService::cancel_order));
        Ok(())
    }

    fn undo(&mut self, service: &mut OrderService) -> CommandResult<Reversal> {
        reverse(self.snapshot.take(), service, &self.order_id, "cancel")
    }

    fn description(&self) -> String {
        format!("Cancel order {}", self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::{Narrator, NotificationCategory};

    fn service() -> OrderService {
        OrderService::with_narrator(Narrator::silent(NotificationCategory::Command))
    }

    #[test]
    fn test_place_undo_removes_new_order() {
        let mut svc = service();
        let mut place = PlaceOrderCommand::new("ORD-1");

        place.execute(&mut svc).unwrap();
        assert_eq!(svc.status("ORD-1"), Some(OrderStatus::Placed));

        assert_eq!(place.undo(&mut svc).unwrap(), Reversal::Reverted);
        assert_eq!(svc.status("ORD-1"), None);
    }

    #[test]
    fn test_ship_undo_restores_placed() {
        let mut svc = service();
        svc.place_order("ORD-2");
        let mut ship = ShipOrderCommand::new("ORD-2");

        ship.execute(&mut svc).unwrap();
        assert_eq!(svc.status("ORD-2"), Some(OrderStatus::Shipped));

        assert!(ship.undo(&mut svc).unwrap().is_reverted());
        assert_eq!(svc.status("ORD-2"), Some(OrderStatus::Placed));
    }

    #[test]
    fn test_rejected_cancel_undo_is_not_reversible() {
        let mut svc = service();
        svc.place_order("ORD-3");
        svc.ship_order("ORD-3");
        let mut cancel = CancelOrderCommand::new("ORD-3");

        cancel.execute(&mut svc).unwrap();
        let reversal = cancel.undo(&mut svc).unwrap();

        assert_eq!(
            reversal,
            Reversal::NotReversible("Cannot undo cancel for order ORD-3".into())
        );
        assert_eq!(svc.status("ORD-3"), Some(OrderStatus::Shipped));
    }

    #[test]
    fn test_undo_before_execute_is_invalid_state() {
        let mut svc = service();
        let mut cancel = CancelOrderCommand::new("ORD-4");

        let err = cancel.undo(&mut svc).unwrap_err();
        assert!(matches!(err, CommandError::InvalidState(_)));
    }

    #[test]
    fn test_undo_twice_is_invalid_state() {
        let mut svc = service();
        let mut place = PlaceOrderCommand::new("ORD-5");
        place.execute(&mut svc).unwrap();
        place.undo(&mut svc).unwrap();

        assert!(matches!(
            place.undo(&mut svc),
            Err(CommandError::InvalidState(_))
        ));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PlaceOrderCommand::new("A").description(), "Place order A");
        assert_eq!(ShipOrderCommand::new("A").description(), "Ship order A");
        assert_eq!(CancelOrderCommand::new("A").description(), "Cancel order A");
    }
}
