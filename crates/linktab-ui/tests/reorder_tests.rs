//! Reorder behavior tests against fixed geometry.

use linktab_core::config::ReorderConfig;
use linktab_test_utils::{LayoutCall, MockLayout};
use linktab_ui::{
    DragItemData, DragPhase, DragSession, LayoutHost, ListenerRegistry, NodeId, ReorderBehavior,
    TabReorderEvent,
};

/// Host is `nodes[1]` at offset 80. The other offsets are as seen once the
/// host has left the flow, so its siblings sit at 0, 80, 160 and 240.
fn strip() -> (MockLayout, Vec<NodeId>) {
    MockLayout::row(&[0.0, 80.0, 80.0, 160.0, 240.0], 80.0)
}

fn attach(
    layout: &mut MockLayout,
    registry: &mut ListenerRegistry,
    host: NodeId,
) -> ReorderBehavior<&'static str, &'static str> {
    let mut behavior = ReorderBehavior::new(
        host,
        DragItemData::new("tab-b", "/links"),
        ReorderConfig::default(),
        registry,
    );
    behavior.initialize(layout).unwrap();
    behavior
}

fn has_visual_writes(layout: &MockLayout) -> bool {
    layout.calls().iter().any(|call| {
        matches!(
            call,
            LayoutCall::SetLeft { .. } | LayoutCall::SetMarginRight { .. }
        )
    })
}

#[test]
fn test_drag_to_third_slot() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    assert!(behavior.on_press(&mut layout, 100.0));
    assert_eq!(behavior.session().offset_x, -20.0);
    assert_eq!(behavior.session().min_left_offset, 80.0);

    // Center 200 is equidistant from 160 and 240; the first wins.
    assert_eq!(behavior.on_move(&mut layout, 180.0), Some(2));
    assert_eq!(layout.left(nodes[1]), Some(160.0));
    assert_eq!(layout.gapped_nodes(), vec![nodes[2]]);

    // Center 210 is nearest to 240.
    assert_eq!(behavior.on_move(&mut layout, 190.0), Some(3));
    assert_eq!(layout.left(nodes[1]), Some(170.0));
    assert_eq!(layout.gapped_nodes(), vec![nodes[3]]);
    assert_eq!(layout.margin_right(nodes[3]), 80.0);

    let event = behavior.on_release(&mut layout, 190.0);
    assert_eq!(
        event,
        Some(TabReorderEvent {
            movable_item_id: "tab-b",
            target_item_position: 3,
            path: "/links",
        })
    );
    assert_eq!(layout.left(nodes[1]), None);
    assert!(layout.gapped_nodes().is_empty());
    assert!(!layout.has_class(nodes[1], "movable"));
    assert!(layout.has_class(nodes[1], "active-tab"));

    behavior.teardown(&mut registry);
}

#[test]
fn test_release_in_place_emits_nothing() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    assert!(behavior.on_press(&mut layout, 100.0));
    assert_eq!(behavior.on_release(&mut layout, 100.0), None);
    assert_eq!(behavior.phase(), DragPhase::Idle);
    assert!(!has_visual_writes(&layout));
    assert!(!layout.has_class(nodes[1], "movable"));

    // A later move is not a drag.
    assert_eq!(behavior.on_move(&mut layout, 300.0), None);
    assert!(!has_visual_writes(&layout));

    behavior.teardown(&mut registry);
}

#[test]
fn test_no_effect_before_press() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    assert_eq!(behavior.on_move(&mut layout, 150.0), None);
    assert_eq!(behavior.on_release(&mut layout, 150.0), None);
    assert_eq!(behavior.on_move(&mut layout, 250.0), None);
    assert!(layout.calls().is_empty());
    assert_eq!(behavior.session(), &DragSession::default());

    behavior.teardown(&mut registry);
}

#[test]
fn test_slot_never_below_one() {
    let rows: [&[f32]; 4] = [
        &[0.0, 80.0, 80.0, 160.0, 240.0],
        &[0.0, 300.0, 10.0, 20.0, 30.0],
        &[0.0, 40.0, 0.0, 0.0],
        &[0.0, 500.0, 400.0, 300.0, 200.0, 100.0],
    ];

    for offsets in rows {
        for width in [10.0, 80.0, 250.0] {
            let (mut layout, nodes) = MockLayout::row(offsets, width);
            // No leading clamp, so the pointer can reach the far left.
            layout.set_width(nodes[0], 0.0);
            let mut registry = ListenerRegistry::new();
            let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

            behavior.on_press(&mut layout, offsets[1]);
            for x in (-1000..=1000).step_by(25) {
                let slot = behavior.on_move(&mut layout, x as f32).unwrap();
                assert!(slot >= 1, "slot {slot} at x {x} for {offsets:?}");
            }
            let event = behavior.on_release(&mut layout, 0.0).unwrap();
            assert!(event.target_item_position >= 1);

            behavior.teardown(&mut registry);
        }
    }
}

#[test]
fn test_min_target_slot_is_configurable() {
    let (mut layout, nodes) = MockLayout::row(&[0.0, 80.0, 80.0, 160.0], 80.0);
    layout.set_width(nodes[0], 0.0);
    let mut registry = ListenerRegistry::new();
    let mut behavior = ReorderBehavior::new(
        nodes[1],
        DragItemData::new(1u32, ()),
        ReorderConfig::new().min_target_slot(0),
        &mut registry,
    );

    behavior.on_press(&mut layout, 80.0);
    assert_eq!(behavior.on_move(&mut layout, -500.0), Some(0));
    // Slot 0 has no sibling before it to hold a gap.
    assert!(layout.gapped_nodes().is_empty());
    assert_eq!(
        behavior.on_release(&mut layout, -500.0).map(|e| e.target_item_position),
        Some(0)
    );

    behavior.teardown(&mut registry);
}

#[test]
fn test_custom_classes() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = ReorderBehavior::new(
        nodes[1],
        DragItemData::new("tab-b", ()),
        ReorderConfig::new()
            .active_class("selected")
            .dragging_class("lifted"),
        &mut registry,
    );
    layout.add_class(nodes[3], "selected");

    behavior.on_press(&mut layout, 100.0);
    assert!(layout.has_class(nodes[1], "selected"));
    assert!(!layout.has_class(nodes[3], "selected"));

    behavior.on_move(&mut layout, 150.0);
    assert!(layout.has_class(nodes[1], "lifted"));
    behavior.on_release(&mut layout, 150.0);
    assert!(!layout.has_class(nodes[1], "lifted"));

    behavior.teardown(&mut registry);
}

#[test]
fn test_teardown_is_idempotent() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);
    let mut other = attach(&mut layout, &mut registry, nodes[2]);
    assert_eq!(registry.len(), 4);

    assert!(behavior.teardown(&mut registry));
    assert!(!behavior.teardown(&mut registry));
    // The second teardown must not touch the other behavior's listeners.
    assert_eq!(registry.len(), 2);
    assert!(other.has_listeners());

    other.teardown(&mut registry);
    assert!(registry.is_empty());
}

#[test]
fn test_teardown_mid_drag_drops_session() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    behavior.on_press(&mut layout, 100.0);
    behavior.on_move(&mut layout, 190.0);
    behavior.teardown(&mut registry);

    assert_eq!(behavior.phase(), DragPhase::Idle);
    assert_eq!(behavior.on_release(&mut layout, 190.0), None);
}

#[test]
fn test_sessions_are_independent() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    behavior.on_press(&mut layout, 100.0);
    behavior.on_move(&mut layout, 190.0);
    assert!(behavior.on_release(&mut layout, 190.0).is_some());
    assert_eq!(behavior.session(), &DragSession::default());

    // Second session: grabbed 60px into the tab, dragged right.
    layout.clear_calls();
    assert!(behavior.on_press(&mut layout, 140.0));
    assert_eq!(behavior.session().offset_x, -60.0);
    assert_eq!(behavior.session().destination_index, 0);

    assert_eq!(behavior.on_move(&mut layout, 330.0), Some(4));
    let event = behavior.on_release(&mut layout, 330.0).unwrap();
    assert_eq!(event.target_item_position, 4);
    assert!(layout.gapped_nodes().is_empty());

    behavior.teardown(&mut registry);
}

#[test]
fn test_not_draggable_never_writes() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = ReorderBehavior::new(
        nodes[1],
        DragItemData::new("pinned", "/links").draggable(false),
        ReorderConfig::default(),
        &mut registry,
    );

    assert!(!behavior.on_press(&mut layout, 100.0));
    assert_eq!(behavior.on_move(&mut layout, 190.0), None);
    assert_eq!(behavior.on_release(&mut layout, 190.0), None);
    assert!(layout.calls().is_empty());

    behavior.teardown(&mut registry);
}

#[test]
fn test_cancel_mid_drag_restores_layout() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    behavior.on_press(&mut layout, 100.0);
    behavior.on_move(&mut layout, 190.0);
    assert_eq!(layout.gapped_nodes(), vec![nodes[3]]);

    assert!(behavior.cancel(&mut layout));
    assert_eq!(behavior.session(), &DragSession::default());
    assert_eq!(layout.left(nodes[1]), None);
    assert!(layout.gapped_nodes().is_empty());
    assert!(!layout.has_class(nodes[1], "movable"));

    // Nothing is left for a late release to report.
    assert_eq!(behavior.on_release(&mut layout, 190.0), None);
    behavior.teardown(&mut registry);
}

#[test]
fn test_cancel_without_drag_writes_nothing() {
    let (mut layout, nodes) = strip();
    let mut registry = ListenerRegistry::new();
    let mut behavior = attach(&mut layout, &mut registry, nodes[1]);

    assert!(!behavior.cancel(&mut layout));
    assert!(layout.calls().is_empty());

    behavior.on_press(&mut layout, 100.0);
    layout.clear_calls();
    assert!(behavior.cancel(&mut layout));
    assert_eq!(behavior.phase(), DragPhase::Idle);
    assert!(!has_visual_writes(&layout));

    behavior.teardown(&mut registry);
}
