// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Navigation operations over the live document. Block lists are re-queried
/// inside every operation and never held across an `await`.
impl<H: DocumentHost> Workspace<H> {
    /// Rescan the host for panels and rebuild the registry wholesale.
    pub fn refresh_panels(&mut self) {
        self.registry.refresh(&mut self.host);
    }

    pub fn panel_count(&self) -> usize {
        self.registry.panel_count()
    }

    pub fn panel_at(&self, index: isize) -> Result<PanelId, NavError> {
        self.registry.panel_at(index).cloned()
    }

    pub fn focused_panel(&self) -> Result<PanelId, NavError> {
        self.registry.focused().cloned()
    }

    pub fn primary_panel(&self) -> Result<PanelId, NavError> {
        self.registry.primary().cloned()
    }

    pub fn previous_panel(&self) -> Result<PanelId, NavError> {
        self.registry.previous().cloned()
    }

    pub fn next_panel(&self) -> Result<PanelId, NavError> {
        self.registry.next().cloned()
    }

    /// Focus the panel and request an animated scroll to bring it fully into
    /// view. Unregistered panels are ignored.
    pub fn focus_panel(&mut self, panel: &PanelId) {
        if self.registry.focus(panel) {
            self.host.scroll_panel_into_view(panel);
        }
    }

    pub fn panel_of_block(&self, block: &BlockId) -> Option<PanelId> {
        self.host.enclosing_panel(block)
    }

    /// The panel's current selection, re-resolved against the live block
    /// list. A stale identity falls back to the cursor's index hint, which
    /// behaves like an explicit selection (including the immediate
    /// scroll-into-view). `None` only when the panel has no blocks.
    pub fn current_block(&mut self, panel: &PanelId) -> Option<BlockId> {
        let blocks = self.host.panel_blocks(panel);
        let cursor = self.registry.cursor_mut(panel);
        let still_live = cursor
            .selected()
            .is_some_and(|selected| blocks.contains(selected));
        let resolved = cursor.resolve(&blocks)?;
        if !still_live {
            self.host.scroll_block_into_view(&resolved);
        }
        Some(resolved)
    }

    /// Select by identity and scroll the block into view (instant, nearest
    /// edge).
    pub fn select_block(&mut self, panel: &PanelId, block: BlockId) {
        let blocks = self.host.panel_blocks(panel);
        self.registry.cursor_mut(panel).set(block.clone(), &blocks);
        self.host.scroll_block_into_view(&block);
    }

    /// The core relative-motion primitive: move the selection `delta` blocks
    /// through the flattened list, clamping at both ends (no wraparound).
    pub fn select_relative(&mut self, panel: &PanelId, delta: i64) -> Result<BlockId, NavError> {
        let blocks = self.host.panel_blocks(panel);
        let current = self
            .registry
            .cursor_mut(panel)
            .resolve(&blocks)
            .ok_or_else(|| NavError::EmptyPanel {
                panel: panel.clone(),
            })?;
        let index = blocks
            .iter()
            .position(|block| block == &current)
            .unwrap_or(0);
        let target = clamp_index(index as i64 + delta, blocks.len());
        let block = blocks[target].clone();
        self.select_block(panel, block.clone());
        Ok(block)
    }

    /// Jump to the first block, resetting the panel scroll to the very top
    /// so the block is unambiguously visible, not just first in document
    /// order.
    pub fn select_first(&mut self, panel: &PanelId) -> Result<BlockId, NavError> {
        self.host.scroll_to_top(panel);
        let blocks = self.host.panel_blocks(panel);
        let first = blocks.first().cloned().ok_or_else(|| NavError::EmptyPanel {
            panel: panel.clone(),
        })?;
        self.select_block(panel, first.clone());
        Ok(first)
    }

    pub fn select_last(&mut self, panel: &PanelId) -> Result<BlockId, NavError> {
        let blocks = self.host.panel_blocks(panel);
        let last = blocks.last().cloned().ok_or_else(|| NavError::EmptyPanel {
            panel: panel.clone(),
        })?;
        self.select_block(panel, last.clone());
        Ok(last)
    }

    pub fn select_first_visible(&mut self, panel: &PanelId) -> Result<BlockId, NavError> {
        let blocks = self.host.panel_blocks(panel);
        let padding = self.config.scroll_padding_px;
        let block = blocks
            .iter()
            .find(|block| block_is_visible(&self.host, block, padding))
            .cloned()
            .ok_or_else(|| NavError::NoVisibleBlock {
                panel: panel.clone(),
            })?;
        self.select_block(panel, block.clone());
        Ok(block)
    }

    pub fn select_last_visible(&mut self, panel: &PanelId) -> Result<BlockId, NavError> {
        let blocks = self.host.panel_blocks(panel);
        let padding = self.config.scroll_padding_px;
        let block = blocks
            .iter()
            .rev()
            .find(|block| block_is_visible(&self.host, block, padding))
            .cloned()
            .ok_or_else(|| NavError::NoVisibleBlock {
                panel: panel.clone(),
            })?;
        self.select_block(panel, block.clone());
        Ok(block)
    }

    /// Adjust the panel scroll by `delta_px`, then re-anchor the selection
    /// if the scroll pushed it out of the padded viewport: above → first
    /// visible block, below → last visible block, still visible → unchanged.
    pub fn scroll_and_reselect(&mut self, panel: &PanelId, delta_px: f64) -> Result<(), NavError> {
        self.host.scroll_by(panel, delta_px);
        let current = self
            .current_block(panel)
            .ok_or_else(|| NavError::EmptyPanel {
                panel: panel.clone(),
            })?;
        let overflow = scroll_overflow(&self.host, &current, self.config.scroll_padding_px);
        if overflow < 0.0 {
            self.select_first_visible(panel)?;
        } else if overflow > 0.0 {
            self.select_last_visible(panel)?;
        }
        Ok(())
    }

    /// Ascend one structural level. `false` (with no side effects) at the
    /// root level.
    pub fn select_parent(&mut self, panel: &PanelId) -> Result<bool, NavError> {
        let current = self
            .current_block(panel)
            .ok_or_else(|| NavError::EmptyPanel {
                panel: panel.clone(),
            })?;
        match self.host.parent_block(&current) {
            Some(parent) => {
                self.select_block(panel, parent);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Descend to the first structural child, expanding a folded block if
    /// necessary: request the fold toggle, wait the configured settle delay
    /// for the host's structural update to materialize, then retry the
    /// lookup once. `false` when no child is found even after the retry.
    pub async fn select_first_child(&mut self, panel: &PanelId) -> Result<bool, NavError> {
        let current = self
            .current_block(panel)
            .ok_or_else(|| NavError::EmptyPanel {
                panel: panel.clone(),
            })?;
        let mut child = self.host.first_child_block(&current);
        if child.is_none() && self.host.is_folded(&current) {
            self.host.toggle_fold_block(&current).await;
            sleep(self.config.fold_settle()).await;
            child = self.host.first_child_block(&current);
        }
        match child {
            Some(child) => {
                self.select_block(panel, child);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Request edit mode on the block; await before reading edit-focus
    /// state.
    pub async fn activate(&mut self, block: &BlockId) {
        self.host.activate_block(block).await;
    }

    /// Request a fold toggle; re-query fold/children state only after the
    /// settle delay.
    pub async fn toggle_fold(&mut self, block: &BlockId) {
        self.host.toggle_fold_block(block).await;
    }
}

fn clamp_index(target: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    target.clamp(0, len as i64 - 1) as usize
}
