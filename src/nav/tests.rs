// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{BlockCursor, NavConfig, NavError, Workspace};
use crate::host::fixture::{bid, pid, FixtureDocument};
use crate::host::DocumentHost;

fn workspace(doc: FixtureDocument) -> Workspace<FixtureDocument> {
    let config = NavConfig {
        fold_settle_delay_ms: 1,
        ..NavConfig::default()
    };
    let mut workspace = Workspace::new(doc, config);
    workspace.refresh_panels();
    workspace
}

/// One panel, `count` flat blocks `b0..`, 24px each in a 240px viewport.
fn flat_panel(count: usize) -> Workspace<FixtureDocument> {
    let mut doc = FixtureDocument::new();
    doc.push_panel("main");
    for idx in 0..count {
        doc.push_block("main", None, &format!("b{idx}"));
    }
    workspace(doc)
}

fn nested_outline() -> Workspace<FixtureDocument> {
    let doc = FixtureDocument::from_json(
        r#"{
            "panels": [
                {
                    "id": "main",
                    "blocks": [
                        {"id": "p", "children": [{"id": "c1"}, {"id": "c2"}]},
                        {"id": "f", "folded": true, "children": [{"id": "f1"}, {"id": "f2"}]},
                        {"id": "leaf"}
                    ]
                }
            ]
        }"#,
    )
    .expect("outline");
    workspace(doc)
}

// ---------- block cursor ----------

#[test]
fn cursor_prefers_a_live_identity_over_the_hint() {
    let blocks = vec![bid("a"), bid("b"), bid("c")];
    let mut cursor = BlockCursor::default();
    cursor.set(bid("c"), &blocks);
    assert_eq!(cursor.index_hint(), 2);

    // Hint says 2, identity says "c"; reordering must follow the identity.
    let reordered = vec![bid("c"), bid("a"), bid("b")];
    assert_eq!(cursor.resolve(&reordered), Some(bid("c")));
    assert_eq!(cursor.index_hint(), 0);
}

#[test]
fn cursor_falls_back_to_the_clamped_hint() {
    let blocks = vec![bid("a"), bid("b"), bid("c")];
    let mut cursor = BlockCursor::default();
    cursor.set(bid("c"), &blocks);

    let shrunk = vec![bid("a"), bid("b")];
    assert_eq!(cursor.resolve(&shrunk), Some(bid("b")));
    assert_eq!(cursor.selected(), Some(&bid("b")));
}

#[test]
fn cursor_yields_nothing_for_an_empty_list() {
    let mut cursor = BlockCursor::default();
    assert_eq!(cursor.resolve(&[]), None);
}

// ---------- selection resolution ----------

#[test]
fn current_selection_is_a_member_of_the_live_list() {
    let mut workspace = flat_panel(6);
    let main = pid("main");

    let current = workspace.current_block(&main).expect("selection");
    assert!(workspace.host().panel_blocks(&main).contains(&current));

    workspace.host_mut().remove_block(current.as_str());
    let recovered = workspace.current_block(&main).expect("selection");
    assert!(workspace.host().panel_blocks(&main).contains(&recovered));
}

#[test]
fn stale_identity_recovers_through_the_index_hint() {
    let mut workspace = flat_panel(6);
    let main = pid("main");

    workspace.select_block(&main, bid("b3"));
    workspace.host_mut().remove_block("b3");

    // Hint 3 now points at b4 in [b0, b1, b2, b4, b5].
    assert_eq!(workspace.current_block(&main), Some(bid("b4")));
}

#[test]
fn hint_clamps_when_the_tail_disappears() {
    let mut workspace = flat_panel(6);
    let main = pid("main");

    workspace.select_block(&main, bid("b5"));
    workspace.host_mut().remove_block("b4");
    workspace.host_mut().remove_block("b5");

    assert_eq!(workspace.current_block(&main), Some(bid("b3")));
}

#[test]
fn empty_panel_has_no_selection_and_motion_faults() {
    let mut doc = FixtureDocument::new();
    doc.push_panel("main");
    let mut workspace = workspace(doc);
    let main = pid("main");

    assert_eq!(workspace.current_block(&main), None);
    assert_eq!(
        workspace.select_relative(&main, 1),
        Err(NavError::EmptyPanel {
            panel: main.clone()
        })
    );
    assert_eq!(
        workspace.select_first(&main),
        Err(NavError::EmptyPanel {
            panel: main.clone()
        })
    );
}

// ---------- relative motion ----------

#[test]
fn plus_one_reaches_the_last_block_in_n_minus_one_steps() {
    let mut workspace = flat_panel(6);
    let main = pid("main");
    workspace.select_first(&main).expect("first");

    for _ in 0..5 {
        workspace.select_relative(&main, 1).expect("step");
    }
    assert_eq!(workspace.current_block(&main), Some(bid("b5")));

    // Idempotent at the boundary.
    workspace.select_relative(&main, 1).expect("step");
    assert_eq!(workspace.current_block(&main), Some(bid("b5")));
}

#[rstest]
#[case(-100, "b0")]
#[case(-1, "b1")]
#[case(0, "b2")]
#[case(2, "b4")]
#[case(100, "b5")]
fn relative_motion_clamps_without_wraparound(#[case] delta: i64, #[case] expected: &str) {
    let mut workspace = flat_panel(6);
    let main = pid("main");
    workspace.select_block(&main, bid("b2"));

    let selected = workspace.select_relative(&main, delta).expect("motion");
    assert_eq!(selected, bid(expected));
}

#[test]
fn two_down_from_the_first_of_four_lands_on_the_third() {
    let doc = FixtureDocument::from_json(
        r#"{"panels": [{"id": "main", "blocks": [
            {"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}
        ]}]}"#,
    )
    .expect("outline");
    let mut workspace = workspace(doc);
    let main = pid("main");

    workspace.select_block(&main, bid("a"));
    assert_eq!(workspace.select_relative(&main, 2), Ok(bid("c")));
}

// ---------- boundary jumps and visibility ----------

#[test]
fn select_first_resets_the_scroll_position() {
    let mut workspace = flat_panel(20);
    let main = pid("main");
    workspace.host_mut().scroll_by_px("main", 200.0);

    assert_eq!(workspace.select_first(&main), Ok(bid("b0")));
    assert_eq!(workspace.host().scroll_top("main"), 0.0);
}

#[test]
fn select_last_scrolls_the_block_into_view() {
    let mut workspace = flat_panel(20);
    let main = pid("main");

    assert_eq!(workspace.select_last(&main), Ok(bid("b19")));
    // 20 blocks * 24px - 240px viewport.
    assert_eq!(workspace.host().scroll_top("main"), 240.0);
}

#[test]
fn visible_boundary_scan_honors_the_padding() {
    let mut workspace = flat_panel(20);
    let main = pid("main");

    // b0 sits flush with the panel top, inside the padding; b9 ends flush
    // with the bottom.
    assert_eq!(workspace.select_first_visible(&main), Ok(bid("b1")));
    workspace.host_mut().scroll_to_top(&main);
    assert_eq!(workspace.select_last_visible(&main), Ok(bid("b8")));
}

#[test]
fn no_visible_block_is_a_hard_fault() {
    let mut workspace = flat_panel(20);
    let main = pid("main");
    workspace.host_mut().set_viewport_px("main", 30.0);

    assert_eq!(
        workspace.select_first_visible(&main),
        Err(NavError::NoVisibleBlock {
            panel: main.clone()
        })
    );
}

// ---------- scroll-and-reselect ----------

#[test]
fn scrolling_down_reanchors_to_the_first_visible_block() {
    let mut workspace = flat_panel(20);
    let main = pid("main");
    workspace.select_block(&main, bid("b2"));

    workspace.scroll_and_reselect(&main, 96.0).expect("scroll");
    assert_eq!(workspace.current_block(&main), Some(bid("b5")));
}

#[test]
fn scrolling_up_reanchors_to_the_last_visible_block() {
    let mut workspace = flat_panel(20);
    let main = pid("main");
    // Selecting b13 scrolls the panel down to 96px.
    workspace.select_block(&main, bid("b13"));
    assert_eq!(workspace.host().scroll_top("main"), 96.0);

    workspace.scroll_and_reselect(&main, -96.0).expect("scroll");
    assert_eq!(workspace.current_block(&main), Some(bid("b8")));
}

#[test]
fn a_still_visible_selection_is_left_alone() {
    let mut workspace = flat_panel(20);
    let main = pid("main");
    workspace.select_block(&main, bid("b5"));

    workspace.scroll_and_reselect(&main, 24.0).expect("scroll");
    assert_eq!(workspace.current_block(&main), Some(bid("b5")));
}

// ---------- structural traversal ----------

#[tokio::test]
async fn parent_then_first_child_round_trips_for_a_first_child() {
    let mut workspace = nested_outline();
    let main = pid("main");
    workspace.select_block(&main, bid("c1"));

    assert_eq!(workspace.select_parent(&main), Ok(true));
    assert_eq!(workspace.current_block(&main), Some(bid("p")));

    assert_eq!(workspace.select_first_child(&main).await, Ok(true));
    assert_eq!(workspace.current_block(&main), Some(bid("c1")));
}

#[test]
fn select_parent_at_the_root_is_a_no_op() {
    let mut workspace = nested_outline();
    let main = pid("main");
    workspace.select_block(&main, bid("p"));

    assert_eq!(workspace.select_parent(&main), Ok(false));
    assert_eq!(workspace.current_block(&main), Some(bid("p")));
}

#[tokio::test]
async fn descending_into_a_folded_block_expands_it_first() {
    let mut workspace = nested_outline();
    let main = pid("main");
    workspace.select_block(&main, bid("f"));
    assert!(!workspace.host().panel_blocks(&main).contains(&bid("f1")));

    assert_eq!(workspace.select_first_child(&main).await, Ok(true));
    assert_eq!(workspace.current_block(&main), Some(bid("f1")));
    assert_eq!(workspace.host().fold_requests(), [bid("f")]);
}

#[tokio::test]
async fn a_childless_block_reports_no_child() {
    let mut workspace = nested_outline();
    let main = pid("main");
    workspace.select_block(&main, bid("leaf"));

    assert_eq!(workspace.select_first_child(&main).await, Ok(false));
    assert_eq!(workspace.current_block(&main), Some(bid("leaf")));
    assert!(workspace.host().fold_requests().is_empty());
}

// ---------- panel registry ----------

fn two_panels() -> Workspace<FixtureDocument> {
    let mut doc = FixtureDocument::new();
    doc.push_panel("main");
    doc.push_block("main", None, "m0");
    doc.push_block("main", None, "m1");
    doc.push_panel("side");
    doc.push_block("side", None, "s0");
    workspace(doc)
}

#[test]
fn an_empty_registry_is_a_hard_fault() {
    let workspace = workspace(FixtureDocument::new());
    assert_eq!(workspace.focused_panel(), Err(NavError::NoPanels));
    assert_eq!(workspace.primary_panel(), Err(NavError::NoPanels));
}

#[test]
fn panel_motion_clamps_at_both_ends() {
    let mut workspace = two_panels();

    assert_eq!(workspace.focused_panel(), Ok(pid("main")));
    assert_eq!(workspace.previous_panel(), Ok(pid("main")));
    assert_eq!(workspace.next_panel(), Ok(pid("side")));

    workspace.focus_panel(&pid("side"));
    assert_eq!(workspace.focused_panel(), Ok(pid("side")));
    assert_eq!(workspace.next_panel(), Ok(pid("side")));
    assert_eq!(workspace.previous_panel(), Ok(pid("main")));
}

#[test]
fn focus_requests_an_animated_panel_scroll() {
    let mut workspace = two_panels();
    workspace.focus_panel(&pid("side"));
    assert_eq!(workspace.host().panel_view_requests(), [pid("side")]);

    // An unregistered panel neither panics nor moves focus.
    workspace.focus_panel(&pid("ghost"));
    assert_eq!(workspace.focused_panel(), Ok(pid("side")));
}

#[test]
fn refresh_preserves_surviving_cursors_and_drops_vanished_ones() {
    let mut workspace = two_panels();
    workspace.select_block(&pid("main"), bid("m1"));
    workspace.select_block(&pid("side"), bid("s0"));
    workspace.focus_panel(&pid("side"));

    workspace.host_mut().remove_panel("side");
    workspace.refresh_panels();

    assert_eq!(workspace.panel_count(), 1);
    // Focus clamps back onto the only remaining panel.
    assert_eq!(workspace.focused_panel(), Ok(pid("main")));
    assert_eq!(workspace.current_block(&pid("main")), Some(bid("m1")));

    // A returning panel starts with a fresh cursor.
    workspace.host_mut().push_panel("side");
    workspace.host_mut().push_block("side", None, "s0");
    workspace.refresh_panels();
    let cursor = workspace.registry().cursor(&pid("side")).expect("cursor");
    assert_eq!(cursor.selected(), None);
}

#[test]
fn panel_at_clamps_indices_into_range() {
    let workspace = two_panels();
    assert_eq!(workspace.panel_at(-5), Ok(pid("main")));
    assert_eq!(workspace.panel_at(5), Ok(pid("side")));
}
