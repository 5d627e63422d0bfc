//! Sample items for demos and manual testing.

use crate::item::Status;
use crate::store::ItemStore;

/// Seeds the store with a few realistic items.
///
/// Goes through the store's own operations so listeners fire and invariants
/// hold; one item ends up in the Finished bucket.
pub fn seed_demo(store: &ItemStore) {
    store.add_item(
        "Design the onboarding flow",
        "Sketch the first-run experience and review it with the team",
        2,
    );
    store.add_item(
        "Fix the flaky import test",
        "The CSV importer test fails roughly once in twenty runs",
        1,
    );
    store.add_item(
        "Prepare the quarterly review",
        "Collect metrics and draft slides for the planning meeting",
        3,
    );
    let done = store.add_item(
        "Upgrade the build image",
        "Move CI to the new base image and verify caching still works",
        1,
    );
    store.move_item(done, Status::Finished);
}
