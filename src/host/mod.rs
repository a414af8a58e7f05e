// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Contracts for the host outliner application.
//!
//! The host owns rendering, editing, folding, and the document structure;
//! this crate only queries and steers it. Structural parent/child
//! relationships come from these abstract queries rather than from concrete
//! markup, and callers must treat every answer as a snapshot of a document
//! the host may rewrite at any time.

pub mod fixture;

use crate::geometry::Bounds;
use crate::model::{BlockId, PanelId};

/// The host outliner document, as seen by the navigation engine.
///
/// Identity-over-handle: blocks and panels are referred to by stable id and
/// re-resolved on every query. Block lists must never be cached across an
/// `await`, because the host may re-render between suspension points.
#[allow(async_fn_in_trait)]
pub trait DocumentHost {
    /// All qualifying scrollable regions, in document order. Tagging regions
    /// as panels idempotently is the host's concern; this is called on every
    /// registry refresh.
    fn scan_panels(&mut self) -> Vec<PanelId>;

    /// Flattened list of the panel's currently rendered blocks, in document
    /// order. Settled and in-edit representations of a block count as the
    /// same logical unit. Blocks hidden inside a folded ancestor are not
    /// rendered and do not appear.
    fn panel_blocks(&self, panel: &PanelId) -> Vec<BlockId>;

    fn block_exists(&self, block: &BlockId) -> bool;

    fn enclosing_panel(&self, block: &BlockId) -> Option<PanelId>;

    /// Structural parent by containment; `None` at the root level.
    fn parent_block(&self, block: &BlockId) -> Option<BlockId>;

    /// First structural child currently rendered; `None` when the block has
    /// no children or is folded.
    fn first_child_block(&self, block: &BlockId) -> Option<BlockId>;

    fn is_folded(&self, block: &BlockId) -> bool;

    /// Bounding box in viewport coordinates, `None` when not rendered.
    fn block_bounds(&self, block: &BlockId) -> Option<Bounds>;

    /// The block's layout (offset) width, before any transform scaling.
    fn block_layout_width(&self, block: &BlockId) -> f64;

    fn panel_bounds(&self, panel: &PanelId) -> Option<Bounds>;

    fn scroll_by(&mut self, panel: &PanelId, delta_px: f64);

    fn scroll_to_top(&mut self, panel: &PanelId);

    /// Immediate scroll with nearest-edge semantics.
    fn scroll_block_into_view(&mut self, block: &BlockId);

    /// Possibly animated scroll bringing the whole panel into view.
    fn scroll_panel_into_view(&mut self, panel: &PanelId);

    /// Request edit mode on the block. Edit-focus state is only coherent
    /// after the returned future resolves.
    async fn activate_block(&mut self, block: &BlockId);

    /// Request a fold toggle. The structural change is not synchronously
    /// observable; re-query children only after the configured settle delay.
    async fn toggle_fold_block(&mut self, block: &BlockId);
}

/// Read-only probes the mode resolver consumes, plus the single mutation it
/// is allowed: retiring stale search highlights.
pub trait ModeSignals {
    /// A search session is in progress.
    fn search_session_active(&self) -> bool;

    /// A hint-overlay session is in progress.
    fn hint_session_active(&self) -> bool;

    /// An editable element currently has input focus.
    fn edit_target_focused(&self) -> bool;

    /// A command-bar overlay is open.
    fn command_bar_open(&self) -> bool;

    /// A highlighted/selected region exists in the document.
    fn visual_selection_present(&self) -> bool;

    /// Search-match highlights from a finished search are still shown.
    fn search_highlights_visible(&self) -> bool;

    fn clear_search_highlights(&mut self);
}
