#![cfg(feature = "serde")]

//! Integration tests for serde support in fingertree.
//!
//! Finger trees serialize as plain sequences, so any tree can be restored with
//! a `Default` measure regardless of the shape it had when it was written.

use fingertree::persistent::{FingerTree, Maximum, Size};
use fingertree::typeclass::{Max, Sum};
use rstest::rstest;

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_finger_tree_json_roundtrip() {
    let tree: FingerTree<i32, Size> = (1..=10).collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: FingerTree<i32, Size> = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, restored);
    assert_eq!(restored.measure(), Sum(10));
}

#[rstest]
fn test_finger_tree_serializes_as_array() {
    let tree = FingerTree::new(Size).snoc("b").cons("a");
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"["a","b"]"#);
}

#[rstest]
fn test_empty_finger_tree_roundtrip() {
    let tree: FingerTree<String, Size> = FingerTree::default();
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[]");
    let restored: FingerTree<String, Size> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialized_tree_is_remeasured() {
    let queue: FingerTree<u16, Maximum> = serde_json::from_str("[3, 12, 7]").unwrap();
    assert_eq!(queue.measure(), Max(12));
    assert_eq!(queue.max_element(), Some(&12));
}

#[rstest]
fn test_split_parts_serialize_independently() {
    let tree: FingerTree<i32, Size> = (0..200).collect();
    let (left, right) = tree.split_at(150);
    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();
    let left_restored: FingerTree<i32, Size> = serde_json::from_str(&left_json).unwrap();
    let right_restored: FingerTree<i32, Size> = serde_json::from_str(&right_json).unwrap();
    assert_eq!(left_restored.append(&right_restored), tree);
}

#[rstest]
fn test_invalid_input_is_rejected() {
    let result: Result<FingerTree<i32, Size>, _> =
        serde_json::from_str(r#"{"not": "a sequence"}"#);
    assert!(result.is_err());
}
