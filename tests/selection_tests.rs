use std::sync::Arc;

use relais::{
    catalog::Catalog,
    estimate::Config,
    selection::{Controller, SelectionMode},
};

fn controller() -> Controller {
    Controller::seeded(Arc::new(Catalog::yaounde()), 17)
}

#[test]
fn starts_empty_in_origin_mode() {
    let controller = controller();
    assert_eq!(controller.mode(), SelectionMode::PickingOrigin);
    assert!(controller.selection().origin.is_none());
    assert!(controller.selection().destination.is_none());
    assert!(controller.estimate().is_none());
}

#[test]
fn pick_fills_slot_of_current_mode() {
    let mut controller = controller();
    assert!(controller.pick("relay1"));
    assert_eq!(controller.selection().origin.as_deref(), Some("relay1"));
    assert!(controller.estimate().is_none());

    assert_eq!(controller.toggle_mode(), SelectionMode::PickingDestination);
    assert!(controller.pick("relay2"));
    assert_eq!(controller.selection().destination.as_deref(), Some("relay2"));
    assert!(controller.selection().is_complete());

    let estimate = controller.estimate().unwrap();
    assert_eq!(estimate.duration().as_minutes(), 4);
    assert_eq!(estimate.waypoints.len(), 3);
}

#[test]
fn pick_overwrites_previous_value() {
    let mut controller = controller();
    controller.pick("relay1");
    controller.set_mode(SelectionMode::PickingDestination);
    controller.pick("relay2");
    let first = controller.estimate().unwrap().distance;

    controller.pick("relay4");
    assert_eq!(controller.selection().destination.as_deref(), Some("relay4"));
    let second = controller.estimate().unwrap().distance;
    assert!(second > first);
    assert_eq!(controller.destination_point().map(|p| &*p.name), Some("Épicerie du Quartier"));
}

#[test]
fn unknown_id_is_ignored() {
    let mut controller = controller();
    controller.pick("relay1");
    assert!(!controller.pick("relay99"));
    assert_eq!(controller.selection().origin.as_deref(), Some("relay1"));
}

#[test]
fn same_point_for_both_slots_has_no_route() {
    let mut controller = controller();
    assert!(controller.select_origin("relay3"));
    assert!(controller.select_destination("relay3"));
    assert!(controller.selection().is_complete());
    assert!(controller.estimate().is_none());

    controller.select_destination("relay5");
    assert!(controller.estimate().is_some());
    controller.select_origin("relay5");
    assert!(controller.estimate().is_none());
}

#[test]
fn clearing_a_slot_drops_the_route() {
    let mut controller = controller();
    controller.select_origin("relay1");
    controller.select_destination("relay2");
    assert!(controller.estimate().is_some());

    controller.clear_origin();
    assert!(controller.estimate().is_none());
    assert_eq!(controller.selection().destination.as_deref(), Some("relay2"));

    controller.select_origin("relay1");
    assert!(controller.estimate().is_some());
    controller.clear_destination();
    assert!(controller.estimate().is_none());
}

#[test]
fn reset_returns_to_initial_state() {
    let mut controller = controller();
    controller.select_origin("relay1");
    controller.select_destination("relay2");
    controller.set_mode(SelectionMode::PickingDestination);

    controller.reset();
    assert_eq!(controller.mode(), SelectionMode::PickingOrigin);
    assert!(controller.origin_point().is_none());
    assert!(controller.destination_point().is_none());
    assert!(controller.estimate().is_none());
}

#[test]
fn toggling_twice_is_a_no_op() {
    let mut controller = controller();
    controller.toggle_mode();
    controller.toggle_mode();
    assert_eq!(controller.mode(), SelectionMode::PickingOrigin);
}

#[test]
fn same_seed_same_route() {
    let mut a = controller();
    let mut b = controller();
    for session in [&mut a, &mut b] {
        session.select_origin("relay4");
        session.select_destination("relay3");
    }
    assert_eq!(a.estimate(), b.estimate());
}

#[test]
fn config_applies_to_current_selection() {
    let mut controller = controller();
    controller.select_origin("relay1");
    controller.select_destination("relay2");
    let controller = controller.with_config(Config {
        waypoints: 8,
        speed_kmh: 15.0,
    });
    let estimate = controller.estimate().unwrap();
    assert_eq!(estimate.waypoints.len(), 8);
    assert_eq!(estimate.duration().as_minutes(), 7);
}
