// Integration tests for the order command history
// Covers the documented order scenario and the undo-restores-state property

use pattern_lab::command::{
    CancelOrderCommand, PlaceOrderCommand, ShipOrderCommand, UndoOutcome,
};
use pattern_lab::{
    CommandManager, Narrator, NotificationCategory, OrderService, OrderStatus, Reversal,
    UndoableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn setup() -> (OrderService, CommandManager<OrderService>) {
    (
        OrderService::with_narrator(Narrator::silent(NotificationCategory::Command)),
        CommandManager::with_narrator(100, Narrator::silent(NotificationCategory::Command)),
    )
}

#[test]
fn test_undo_of_rejected_cancel_keeps_order_shipped() {
    let (mut service, mut manager) = setup();

    manager
        .execute_command(Box::new(PlaceOrderCommand::new("ORD-1001")), &mut service)
        .unwrap();
    manager
        .execute_command(Box::new(ShipOrderCommand::new("ORD-1001")), &mut service)
        .unwrap();
    manager
        .execute_command(Box::new(CancelOrderCommand::new("ORD-1001")), &mut service)
        .unwrap();

    // The rejected cancel is still recorded
    assert_eq!(manager.undo_count(), 3);
    assert_eq!(
        service.narrator().last_message(),
        Some("Cannot cancel order ORD-1001 (status: SHIPPED)")
    );

    let outcome = manager.undo_last(&mut service).unwrap();
    assert_eq!(
        outcome,
        UndoOutcome::Undone {
            description: "Cancel order ORD-1001".into(),
            reversal: Reversal::NotReversible("Cannot undo cancel for order ORD-1001".into()),
        }
    );
    assert_eq!(service.status("ORD-1001"), Some(OrderStatus::Shipped));
}

#[test]
fn test_undo_on_empty_history_leaves_receiver_alone() {
    let (mut service, mut manager) = setup();
    service.place_order("ORD-7");

    assert_eq!(
        manager.undo_last(&mut service).unwrap(),
        UndoOutcome::NothingToUndo
    );
    assert_eq!(service.status("ORD-7"), Some(OrderStatus::Placed));
    assert_eq!(
        manager.narrator().last_message(),
        Some("No commands to undo")
    );
}

#[test]
fn test_full_unwind_then_redo() {
    let (mut service, mut manager) = setup();

    manager
        .execute_command(Box::new(PlaceOrderCommand::new("A")), &mut service)
        .unwrap();
    manager
        .execute_command(Box::new(ShipOrderCommand::new("A")), &mut service)
        .unwrap();

    manager.undo_last(&mut service).unwrap();
    assert_eq!(service.status("A"), Some(OrderStatus::Placed));
    manager.undo_last(&mut service).unwrap();
    assert_eq!(service.status("A"), None);

    manager.redo(&mut service).unwrap();
    manager.redo(&mut service).unwrap();
    assert_eq!(service.status("A"), Some(OrderStatus::Shipped));
    assert_eq!(manager.undo_description().as_deref(), Some("Ship order A"));
}

fn random_command(rng: &mut StdRng) -> Box<dyn UndoableCommand<OrderService>> {
    let id = format!("ORD-{}", rng.gen_range(0..3));
    match rng.gen_range(0..3) {
        0 => Box::new(PlaceOrderCommand::new(id)),
        1 => Box::new(ShipOrderCommand::new(id)),
        _ => Box::new(CancelOrderCommand::new(id)),
    }
}

#[test]
fn test_n_undos_restore_state_before_n_executions() {
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (mut service, mut manager) = setup();

        // Arbitrary starting book
        for _ in 0..rng.gen_range(0..4) {
            let mut cmd = random_command(&mut rng);
            cmd.execute(&mut service).unwrap();
        }
        let before = service.orders().clone();

        let n = rng.gen_range(1..12);
        for _ in 0..n {
            manager
                .execute_command(random_command(&mut rng), &mut service)
                .unwrap();
        }
        for _ in 0..n {
            let outcome = manager.undo_last(&mut service).unwrap();
            assert!(matches!(outcome, UndoOutcome::Undone { .. }));
        }

        assert_eq!(service.orders(), &before, "seed {}", seed);
        assert!(!manager.can_undo());
    }
}
