//! Placement store integration tests.
//!
//! These tests drive the store through the public API the drag surface,
//! recall control and renderer use.

use placement_board::core::{BoardConfig, BucketConfig, BucketId, ItemId};
use placement_board::zones::{DropTarget, PlacementStore};

fn ids(items: &[&str]) -> Vec<ItemId> {
    items.iter().map(|s| ItemId::new(*s)).collect()
}

fn three_bucket_store(items: usize) -> (PlacementStore, BucketId, BucketId, BucketId) {
    let config = BoardConfig::new(BucketConfig::named("pool"))
        .with_zone(BucketConfig::named("zoneA"))
        .with_zone(BucketConfig::named("zoneB"))
        .with_numbered_items(items);
    let store = PlacementStore::new(&config).unwrap();
    let layout = store.layout();
    let (pool, a, b) = (
        layout.pool(),
        layout.resolve("zoneA").unwrap(),
        layout.resolve("zoneB").unwrap(),
    );
    (store, pool, a, b)
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

/// Three buckets, no trash: move into a zone, across zones, then reset.
#[test]
fn test_three_bucket_scenario() {
    let (mut store, pool, zone_a, zone_b) = three_bucket_store(3);
    assert_eq!(store.query(pool), ids(&["1", "2", "3"]));

    store.move_item(&ItemId::new("2"), DropTarget::Bucket(zone_a));
    assert_eq!(store.query(pool), ids(&["1", "3"]));
    assert_eq!(store.query(zone_a), ids(&["2"]));

    store.move_item(&ItemId::new("2"), DropTarget::Bucket(zone_b));
    assert!(store.query(zone_a).is_empty());
    assert_eq!(store.query(zone_b), ids(&["2"]));

    store.reset();
    assert_eq!(store.query(pool), ids(&["1", "2", "3"]));
    assert!(store.query(zone_a).is_empty());
    assert!(store.query(zone_b).is_empty());
}

/// One item with trash: once trashed, a move into a zone is ignored.
#[test]
fn test_trash_scenario() {
    let config = BoardConfig::new(BucketConfig::named("pool"))
        .with_zone(BucketConfig::named("zoneA"))
        .with_trash(BucketConfig::named("trash"))
        .with_items(["1"]);
    let mut store = PlacementStore::new(&config).unwrap();
    let trash = store.layout().trash().unwrap();
    let zone_a = store.layout().resolve("zoneA").unwrap();

    store.move_item(&ItemId::new("1"), DropTarget::Bucket(trash));
    assert_eq!(store.query(trash), ids(&["1"]));

    store.move_item(&ItemId::new("1"), DropTarget::Bucket(zone_a));
    assert_eq!(store.query(trash), ids(&["1"]));
    assert!(store.query(zone_a).is_empty());

    store.reset();
    assert_eq!(store.query_named("pool"), ids(&["1"]));
    assert!(store.query(trash).is_empty());
}

// =============================================================================
// Placement Order
// =============================================================================

/// Items appear in the order they were moved in.
#[test]
fn test_last_moved_in_is_last() {
    let (mut store, _, zone_a, _) = three_bucket_store(4);

    for item in ["3", "1", "4"] {
        store.move_item(&ItemId::new(item), DropTarget::Bucket(zone_a));
    }
    assert_eq!(store.query(zone_a), ids(&["3", "1", "4"]));

    // Re-dropping onto the same zone does not move it to the end
    store.move_item(&ItemId::new("3"), DropTarget::Bucket(zone_a));
    assert_eq!(store.query(zone_a), ids(&["3", "1", "4"]));
}

/// Dropping on the pool bucket is a real move back.
#[test]
fn test_drop_back_on_pool() {
    let (mut store, pool, zone_a, _) = three_bucket_store(3);
    store.move_to_named(&ItemId::new("1"), Some("zoneA"));
    store.move_to_named(&ItemId::new("1"), Some("pool"));

    assert_eq!(store.query(pool), ids(&["2", "3", "1"]));
    assert!(store.query(zone_a).is_empty());
}

// =============================================================================
// Tolerated Inputs
// =============================================================================

/// Released outside any zone: item stays where it was.
#[test]
fn test_outside_keeps_item_in_zone() {
    let (mut store, _, zone_a, _) = three_bucket_store(2);
    store.move_item(&ItemId::new("1"), DropTarget::Bucket(zone_a));

    let before = store.snapshot();
    let after = store.move_item(&ItemId::new("1"), DropTarget::Outside);

    assert_eq!(before, after);
    assert_eq!(store.bucket_of(&ItemId::new("1")), Some(zone_a));
}

/// Unknown names and ids degrade to no-ops.
#[test]
fn test_unknown_inputs_are_noops() {
    let (mut store, _, _, _) = three_bucket_store(2);
    let before = store.snapshot();

    store.move_to_named(&ItemId::new("1"), Some("trash"));
    store.move_to_named(&ItemId::new("1"), Some(""));
    store.move_to_named(&ItemId::new("404"), Some("zoneA"));
    store.move_item(&ItemId::new("1"), DropTarget::Bucket(BucketId::new(1000)));

    assert_eq!(store.snapshot(), before);
    assert!(store.query(BucketId::new(1000)).is_empty());
}

/// An empty universe is a valid board.
#[test]
fn test_empty_universe() {
    let (mut store, pool, zone_a, _) = three_bucket_store(0);
    assert!(store.query(pool).is_empty());

    store.move_item(&ItemId::new("1"), DropTarget::Bucket(zone_a));
    let snapshot = store.reset();
    assert_eq!(snapshot.total_items(), 0);
}

// =============================================================================
// Snapshots
// =============================================================================

/// Each operation returns a snapshot frozen at that point.
#[test]
fn test_snapshots_are_frozen() {
    let (mut store, pool, zone_a, zone_b) = three_bucket_store(2);

    let first = store.move_item(&ItemId::new("1"), DropTarget::Bucket(zone_a));
    let second = store.move_item(&ItemId::new("2"), DropTarget::Bucket(zone_b));
    let third = store.reset();

    assert_eq!(first.query(zone_a), ids(&["1"]));
    assert!(first.query(zone_b).is_empty());
    assert_eq!(second.query(zone_b), ids(&["2"]));
    assert_eq!(third.query(pool), ids(&["1", "2"]));
}

/// Snapshots serialize for host-side debugging.
#[test]
fn test_snapshot_serialization() {
    let (mut store, _, zone_a, _) = three_bucket_store(2);
    let snapshot = store.move_item(&ItemId::new("2"), DropTarget::Bucket(zone_a));

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: placement_board::Assignment = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
