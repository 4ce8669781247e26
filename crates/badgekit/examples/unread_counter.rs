//! Walkthrough: an unread-count bubble over an inbox icon.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p badgekit --example unread_counter
//! ```

use std::time::Duration;

use badgekit::prelude::*;
use badgekit_host::{DisplayMetrics, ViewId};

fn main() {
    tracing_subscriber::fmt::init();

    // A toolbar with an inbox icon, on a 2x density display.
    let mut scene = Scene::with_metrics(DisplayMetrics::new(2.0));
    let toolbar = scene.create_container();
    let inbox_icon = scene.create_view();
    scene.add_child(toolbar, inbox_icon).unwrap();

    // Wrap the icon so the badge floats over its top-right corner.
    let mut badge = BadgeOverlay::new();
    badge.attach(&mut scene, inbox_icon).unwrap();
    badge.set_bold(true);

    // Three messages arrive.
    for _ in 0..3 {
        badge.increment(1);
    }
    badge.show_animated(&mut scene).unwrap();
    report(&scene, badge.view().unwrap(), "after show");

    // Let the fade-in play out.
    while scene.advance(Duration::from_millis(16)) > 0 {}
    report(&scene, badge.view().unwrap(), "after fade-in");

    // The user reads everything; the badge fades away.
    badge.decrement(3);
    badge.hide_animated(&mut scene).unwrap();
    while scene.advance(Duration::from_millis(16)) > 0 {}
    report(&scene, badge.view().unwrap(), "after fade-out");
}

fn report(scene: &Scene, view: ViewId, label: &str) {
    println!(
        "{label}: text={:?} visible={} alpha={:.2}",
        scene.text(view).unwrap(),
        scene.is_visible(view).unwrap(),
        scene.alpha(view).unwrap(),
    );
}
