// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel registry, block cursor, and the navigation engine.
//!
//! Out-of-range motion clamps (boundary commands are no-ops at the edges,
//! not failures) and a stale selection recovers through its index hint; the
//! only hard faults are the NotFound conditions in [`NavError`], which the
//! dispatcher is expected to swallow as a no-op for the triggering command.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::geometry::{block_is_visible, scroll_overflow};
use crate::host::DocumentHost;
use crate::model::{BlockId, PanelId};

/// Tunables for the navigation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Padding kept between a block and its panel edge when judging
    /// visibility, in layout pixels.
    pub scroll_padding_px: f64,
    /// Wait between requesting a fold expansion and re-querying the
    /// structure. The host gives no acknowledgment signal, so this is a
    /// heuristic, not a guarantee.
    pub fold_settle_delay_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_padding_px: 10.0,
            fold_settle_delay_ms: 50,
        }
    }
}

impl NavConfig {
    pub fn fold_settle(&self) -> Duration {
        Duration::from_millis(self.fold_settle_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No panels are registered; the caller must ensure at least the primary
    /// panel exists before navigating.
    NoPanels,
    /// A motion command needs a selection but the panel has no blocks.
    EmptyPanel { panel: PanelId },
    /// No rendered block is inside the padded viewport. Defensive: should
    /// not happen for a panel that is itself on screen.
    NoVisibleBlock { panel: PanelId },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPanels => f.write_str("no panels registered"),
            Self::EmptyPanel { panel } => write!(f, "panel has no blocks (panel={panel})"),
            Self::NoVisibleBlock { panel } => {
                write!(f, "no visible block in panel (panel={panel})")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Per-panel selection state: a remembered block identity plus a best-effort
/// index hint used to recover when the identity no longer resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockCursor {
    selected: Option<BlockId>,
    index_hint: usize,
}

impl BlockCursor {
    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn index_hint(&self) -> usize {
        self.index_hint
    }

    /// Resolve against the live block list. A remembered identity that is
    /// still in the list wins; otherwise the clamped index hint picks a
    /// replacement, which becomes the new selection. `None` only when the
    /// list is empty.
    pub fn resolve(&mut self, blocks: &[BlockId]) -> Option<BlockId> {
        if let Some(selected) = &self.selected {
            if let Some(index) = blocks.iter().position(|block| block == selected) {
                self.index_hint = index;
                return Some(selected.clone());
            }
        }
        if blocks.is_empty() {
            return None;
        }
        let index = self.index_hint.min(blocks.len() - 1);
        self.index_hint = index;
        self.selected = Some(blocks[index].clone());
        self.selected.clone()
    }

    pub fn set(&mut self, block: BlockId, blocks: &[BlockId]) {
        self.index_hint = blocks
            .iter()
            .position(|candidate| candidate == &block)
            .unwrap_or(0);
        self.selected = Some(block);
    }
}

/// Directory of the currently visible panels.
///
/// The ordering is rebuilt wholesale on [`PanelRegistry::refresh`]; cursor
/// entries are reused by identity so selections on unaffected panels survive
/// a refresh, and entries for vanished panels are dropped. The focused index
/// is clamped into `[0, count - 1]` on every read.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    order: Vec<PanelId>,
    cursors: HashMap<PanelId, BlockCursor>,
    focused: usize,
}

impl PanelRegistry {
    pub fn refresh(&mut self, host: &mut impl DocumentHost) {
        let order = host.scan_panels();
        let mut cursors = HashMap::with_capacity(order.len());
        for id in &order {
            let cursor = self.cursors.remove(id).unwrap_or_default();
            cursors.insert(id.clone(), cursor);
        }
        self.order = order;
        self.cursors = cursors;
    }

    pub fn panel_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn panel_ids(&self) -> &[PanelId] {
        &self.order
    }

    /// Panel at the clamped index. The only error is an empty registry.
    pub fn panel_at(&self, index: isize) -> Result<&PanelId, NavError> {
        if self.order.is_empty() {
            return Err(NavError::NoPanels);
        }
        let max = (self.order.len() - 1) as isize;
        Ok(&self.order[index.clamp(0, max) as usize])
    }

    pub fn focused_index(&self) -> usize {
        self.focused.min(self.order.len().saturating_sub(1))
    }

    pub fn focused(&self) -> Result<&PanelId, NavError> {
        self.panel_at(self.focused_index() as isize)
    }

    pub fn primary(&self) -> Result<&PanelId, NavError> {
        self.panel_at(0)
    }

    /// Panel before the focused one; stays on the first (no wraparound).
    pub fn previous(&self) -> Result<&PanelId, NavError> {
        self.panel_at(self.focused_index() as isize - 1)
    }

    /// Panel after the focused one; stays on the last (no wraparound).
    pub fn next(&self) -> Result<&PanelId, NavError> {
        self.panel_at(self.focused_index() as isize + 1)
    }

    /// Move focus to the panel's position in the current ordering. A panel
    /// that is not registered leaves focus untouched (the index is never
    /// allowed to go negative).
    pub fn focus(&mut self, panel: &PanelId) -> bool {
        match self.order.iter().position(|candidate| candidate == panel) {
            Some(position) => {
                self.focused = position;
                true
            }
            None => false,
        }
    }

    /// Cursor for the panel, lazily created and memoized by identity.
    pub fn cursor_mut(&mut self, panel: &PanelId) -> &mut BlockCursor {
        self.cursors.entry(panel.clone()).or_default()
    }

    pub fn cursor(&self, panel: &PanelId) -> Option<&BlockCursor> {
        self.cursors.get(panel)
    }
}

/// Explicit navigation context: the host handle, the panel registry, and the
/// engine tunables.
///
/// Constructed once and handed to the command dispatcher. Every operation
/// re-queries the live document instead of caching block lists, because a
/// host re-render between two queries (or across an `await`) invalidates any
/// snapshot.
pub struct Workspace<H> {
    host: H,
    registry: PanelRegistry,
    config: NavConfig,
}

impl<H> Workspace<H> {
    pub fn new(host: H, config: NavConfig) -> Self {
        Self {
            host,
            registry: PanelRegistry::default(),
            config,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }
}

// Navigation operations, extracted to keep this module focused on state.
include!("engine.rs");

#[cfg(test)]
mod tests;
