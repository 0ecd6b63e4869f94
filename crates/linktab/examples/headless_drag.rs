//! Headless drag demo.
//!
//! Builds a strip of link tabs, replays a few scripted pointer gestures
//! through the reorder system and prints the tab order after each one.
//!
//! Run with: RUST_LOG=debug cargo run -p linktab --example headless_drag

use linktab::core::profiling::{ProfilingBackend, init_profiling, new_frame};
use linktab::prelude::*;
use linktab::ui::DEFAULT_STRIP_HEIGHT;

const TAB_WIDTH: f32 = 96.0;
const LINKS: [&str; 5] = ["inbox", "calendar", "docs", "wiki", "status"];

fn gesture(from: f32, to: f32) -> EventBatch {
    let mut queue = EventQueue::new();
    queue.push(Event::MouseMoved(Vec2::new(from, 12.0)));
    queue.push(Event::MouseButtonDown(MouseButton::Left));
    // Intermediate moves collapse to the last one within a frame.
    if from != to {
        let steps = 8;
        for step in 1..=steps {
            let x = from + (to - from) * step as f32 / steps as f32;
            queue.push(Event::MouseMoved(Vec2::new(x, 12.0)));
        }
    }
    queue.push(Event::MouseButtonUp(MouseButton::Left));
    queue.drain()
}

fn print_order(label: &str, order: &TabOrder<&str>) {
    let names: Vec<&str> = order.iter().copied().collect();
    println!("{label:>24}: {}", names.join(" | "));
}

fn main() -> ReorderResult<()> {
    linktab::logging::init();

    init_profiling(ProfilingBackend::PuffinHttp);

    let mut tree = UiTree::new();
    let strip = tree.tab_strip(800.0, DEFAULT_STRIP_HEIGHT)?;
    tree.add_tab(strip, TAB_WIDTH)?;

    let mut system = ReorderSystem::new();
    let mut order: TabOrder<&str> = std::iter::once("search").collect();
    for name in LINKS {
        let tab = tree.add_tab(strip, TAB_WIDTH)?;
        system.attach(tab, DragItemData::new(name, "/links"), &mut tree)?;
        order.push(name);
    }
    print_order("initial", &order);

    let gestures = [
        ("drag inbox right", TAB_WIDTH + 20.0, TAB_WIDTH * 4.0 + 20.0),
        ("drag status left", TAB_WIDTH * 5.0 + 10.0, 0.0),
        ("click calendar", TAB_WIDTH * 2.0 + 10.0, TAB_WIDTH * 2.0 + 10.0),
    ];

    for (label, from, to) in gestures {
        new_frame();
        let mut batch = gesture(from, to);
        for event in system.handle_events(&mut batch, &mut tree) {
            let position = order.apply(&event)?;
            tracing::info!(id = event.movable_item_id, position, "{label}");
            let children = tree_order(&tree, strip, &order, &system);
            tree.set_children(strip, &children)?;
        }
        print_order(label, &order);
    }

    system.detach_all(&mut tree);
    Ok(())
}

/// Children of `strip` rearranged to follow `order`.
fn tree_order(
    tree: &UiTree,
    strip: NodeId,
    order: &TabOrder<&str>,
    system: &ReorderSystem<&'static str, &'static str>,
) -> Vec<NodeId> {
    let children = tree.children(strip);
    let mut nodes: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&node| system.behavior(node).is_none())
        .collect();
    for id in order.iter() {
        if let Some(&node) = children
            .iter()
            .find(|&&node| system.behavior(node).is_some_and(|b| b.data().id == *id))
        {
            nodes.push(node);
        }
    }
    nodes
}
