// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory host document for tests and benches.
//!
//! Blocks have uniform height and panels independent scroll offsets, which
//! keeps every geometry assertion a small integer. A real host applies fold
//! toggles asynchronously; the fixture applies them immediately and records
//! the request, so engine tests exercise the settle wait with a short
//! configured delay instead of racing a renderer.

use serde::Deserialize;

use super::{DocumentHost, ModeSignals};
use crate::geometry::Bounds;
use crate::model::{BlockId, PanelId};

const BLOCK_LAYOUT_WIDTH_PX: f64 = 600.0;
const DEFAULT_BLOCK_HEIGHT_PX: f64 = 24.0;
const DEFAULT_VIEWPORT_PX: f64 = 240.0;

pub fn bid(value: &str) -> BlockId {
    BlockId::new(value).expect("block id")
}

pub fn pid(value: &str) -> PanelId {
    PanelId::new(value).expect("panel id")
}

#[derive(Debug, Clone)]
struct FixtureBlock {
    id: BlockId,
    folded: bool,
    children: Vec<FixtureBlock>,
}

#[derive(Debug, Clone)]
struct FixturePanel {
    id: PanelId,
    viewport_px: f64,
    scroll_top: f64,
    roots: Vec<FixtureBlock>,
}

#[derive(Debug, Clone, Deserialize)]
struct OutlineSpec {
    panels: Vec<PanelSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct PanelSpec {
    id: String,
    #[serde(default)]
    blocks: Vec<BlockSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct BlockSpec {
    id: String,
    #[serde(default)]
    folded: bool,
    #[serde(default)]
    children: Vec<BlockSpec>,
}

/// Scriptable outline document implementing [`DocumentHost`].
#[derive(Debug, Clone)]
pub struct FixtureDocument {
    panels: Vec<FixturePanel>,
    detached: Vec<BlockId>,
    block_height_px: f64,
    content_scale: f64,
    activations: Vec<BlockId>,
    fold_requests: Vec<BlockId>,
    panel_view_requests: Vec<PanelId>,
}

impl Default for FixtureDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureDocument {
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            detached: Vec::new(),
            block_height_px: DEFAULT_BLOCK_HEIGHT_PX,
            content_scale: 1.0,
            activations: Vec::new(),
            fold_requests: Vec::new(),
            panel_view_requests: Vec::new(),
        }
    }

    /// Build a document from a JSON outline:
    /// `{"panels": [{"id": "main", "blocks": [{"id": "a", "folded": false,
    /// "children": [...]}]}]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let spec: OutlineSpec = serde_json::from_str(json)?;
        let mut doc = Self::new();
        for panel in spec.panels {
            doc.panels.push(FixturePanel {
                id: pid(&panel.id),
                viewport_px: DEFAULT_VIEWPORT_PX,
                scroll_top: 0.0,
                roots: panel.blocks.iter().map(block_from_spec).collect(),
            });
        }
        Ok(doc)
    }

    pub fn push_panel(&mut self, panel: &str) {
        self.panels.push(FixturePanel {
            id: pid(panel),
            viewport_px: DEFAULT_VIEWPORT_PX,
            scroll_top: 0.0,
            roots: Vec::new(),
        });
    }

    /// Append a block under `parent` (root level when `None`). The parent is
    /// looked up in the panel's full tree, folded subtrees included.
    pub fn push_block(&mut self, panel: &str, parent: Option<&str>, block: &str) {
        let block = FixtureBlock {
            id: bid(block),
            folded: false,
            children: Vec::new(),
        };
        let panel = self.panel_mut(panel);
        match parent {
            Some(parent) => {
                let parent_id = bid(parent);
                let parent = find_in_mut(&mut panel.roots, &parent_id)
                    .expect("unknown fixture parent block");
                parent.children.push(block);
            }
            None => panel.roots.push(block),
        }
    }

    /// A rendered block with no enclosing panel (e.g. a popover).
    pub fn push_detached_block(&mut self, block: &str) {
        self.detached.push(bid(block));
    }

    pub fn set_folded(&mut self, block: &str, folded: bool) {
        let id = bid(block);
        for panel in &mut self.panels {
            if let Some(node) = find_in_mut(&mut panel.roots, &id) {
                node.folded = folded;
                return;
            }
        }
        panic!("unknown fixture block");
    }

    pub fn remove_block(&mut self, block: &str) -> bool {
        let id = bid(block);
        self.panels
            .iter_mut()
            .any(|panel| remove_in(&mut panel.roots, &id))
    }

    pub fn remove_panel(&mut self, panel: &str) -> bool {
        let before = self.panels.len();
        self.panels.retain(|entry| entry.id.as_str() != panel);
        self.panels.len() != before
    }

    pub fn set_viewport_px(&mut self, panel: &str, viewport_px: f64) {
        self.panel_mut(panel).viewport_px = viewport_px;
    }

    pub fn set_block_height_px(&mut self, height_px: f64) {
        self.block_height_px = height_px;
    }

    /// Rendered-vs-layout width ratio of the content area (transform scale).
    pub fn set_content_scale(&mut self, scale: f64) {
        self.content_scale = scale;
    }

    pub fn scroll_by_px(&mut self, panel: &str, delta_px: f64) {
        let id = pid(panel);
        self.scroll_by(&id, delta_px);
    }

    pub fn scroll_top(&self, panel: &str) -> f64 {
        self.panel(panel).scroll_top
    }

    /// Blocks the host was asked to enter edit mode on, in request order.
    pub fn activations(&self) -> &[BlockId] {
        &self.activations
    }

    /// Blocks the host was asked to fold/unfold, in request order.
    pub fn fold_requests(&self) -> &[BlockId] {
        &self.fold_requests
    }

    /// Panels the host was asked to scroll fully into view.
    pub fn panel_view_requests(&self) -> &[PanelId] {
        &self.panel_view_requests
    }

    fn panel(&self, panel: &str) -> &FixturePanel {
        self.panels
            .iter()
            .find(|entry| entry.id.as_str() == panel)
            .expect("unknown fixture panel")
    }

    fn panel_mut(&mut self, panel: &str) -> &mut FixturePanel {
        self.panels
            .iter_mut()
            .find(|entry| entry.id.as_str() == panel)
            .expect("unknown fixture panel")
    }

    fn panel_by_id(&self, panel: &PanelId) -> Option<&FixturePanel> {
        self.panels.iter().find(|entry| &entry.id == panel)
    }

    fn panel_by_id_mut(&mut self, panel: &PanelId) -> Option<&mut FixturePanel> {
        self.panels.iter_mut().find(|entry| &entry.id == panel)
    }

    /// Panel index and flattened rendered position of a block.
    fn rendered_position(&self, block: &BlockId) -> Option<(usize, usize)> {
        for (panel_index, panel) in self.panels.iter().enumerate() {
            let position = panel
                .visible_ids()
                .iter()
                .position(|candidate| candidate == block);
            if let Some(position) = position {
                return Some((panel_index, position));
            }
        }
        None
    }

    fn clamp_scroll(&mut self, panel_index: usize) {
        let content_px =
            self.panels[panel_index].visible_ids().len() as f64 * self.block_height_px;
        let panel = &mut self.panels[panel_index];
        let max_scroll = (content_px - panel.viewport_px).max(0.0);
        panel.scroll_top = panel.scroll_top.clamp(0.0, max_scroll);
    }
}

impl FixturePanel {
    fn visible_ids(&self) -> Vec<BlockId> {
        let mut out = Vec::new();
        flatten_visible(&self.roots, &mut out);
        out
    }
}

fn block_from_spec(spec: &BlockSpec) -> FixtureBlock {
    FixtureBlock {
        id: bid(&spec.id),
        folded: spec.folded,
        children: spec.children.iter().map(block_from_spec).collect(),
    }
}

fn flatten_visible(nodes: &[FixtureBlock], out: &mut Vec<BlockId>) {
    for node in nodes {
        out.push(node.id.clone());
        if !node.folded {
            flatten_visible(&node.children, out);
        }
    }
}

/// Full-tree lookup, folded subtrees included.
fn find_in_mut<'a>(nodes: &'a mut [FixtureBlock], id: &BlockId) -> Option<&'a mut FixtureBlock> {
    for node in nodes {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_in(nodes: &mut Vec<FixtureBlock>, id: &BlockId) -> bool {
    if let Some(index) = nodes.iter().position(|node| &node.id == id) {
        nodes.remove(index);
        return true;
    }
    nodes
        .iter_mut()
        .any(|node| remove_in(&mut node.children, id))
}

/// Rendered-tree lookup: descends only into unfolded subtrees.
fn rendered<'a>(nodes: &'a [FixtureBlock], id: &BlockId) -> Option<&'a FixtureBlock> {
    for node in nodes {
        if &node.id == id {
            return Some(node);
        }
        if !node.folded {
            if let Some(found) = rendered(&node.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn rendered_parent(
    nodes: &[FixtureBlock],
    id: &BlockId,
    parent: Option<&FixtureBlock>,
) -> Option<Option<BlockId>> {
    for node in nodes {
        if &node.id == id {
            return Some(parent.map(|parent| parent.id.clone()));
        }
        if !node.folded {
            if let Some(found) = rendered_parent(&node.children, id, Some(node)) {
                return Some(found);
            }
        }
    }
    None
}

impl DocumentHost for FixtureDocument {
    fn scan_panels(&mut self) -> Vec<PanelId> {
        self.panels.iter().map(|panel| panel.id.clone()).collect()
    }

    fn panel_blocks(&self, panel: &PanelId) -> Vec<BlockId> {
        self.panel_by_id(panel)
            .map(|panel| panel.visible_ids())
            .unwrap_or_default()
    }

    fn block_exists(&self, block: &BlockId) -> bool {
        self.detached.contains(block)
            || self
                .panels
                .iter()
                .any(|panel| rendered(&panel.roots, block).is_some())
    }

    fn enclosing_panel(&self, block: &BlockId) -> Option<PanelId> {
        self.panels
            .iter()
            .find(|panel| rendered(&panel.roots, block).is_some())
            .map(|panel| panel.id.clone())
    }

    fn parent_block(&self, block: &BlockId) -> Option<BlockId> {
        self.panels
            .iter()
            .find_map(|panel| rendered_parent(&panel.roots, block, None))
            .flatten()
    }

    fn first_child_block(&self, block: &BlockId) -> Option<BlockId> {
        let node = self
            .panels
            .iter()
            .find_map(|panel| rendered(&panel.roots, block))?;
        if node.folded {
            return None;
        }
        node.children.first().map(|child| child.id.clone())
    }

    fn is_folded(&self, block: &BlockId) -> bool {
        self.panels
            .iter()
            .find_map(|panel| rendered(&panel.roots, block))
            .map(|node| node.folded)
            .unwrap_or(false)
    }

    fn block_bounds(&self, block: &BlockId) -> Option<Bounds> {
        let width = BLOCK_LAYOUT_WIDTH_PX * self.content_scale;
        if self.detached.contains(block) {
            return Some(Bounds {
                top: 0.0,
                height: self.block_height_px,
                width,
            });
        }
        let (panel_index, position) = self.rendered_position(block)?;
        let panel = &self.panels[panel_index];
        Some(Bounds {
            top: position as f64 * self.block_height_px - panel.scroll_top,
            height: self.block_height_px,
            width,
        })
    }

    fn block_layout_width(&self, _block: &BlockId) -> f64 {
        BLOCK_LAYOUT_WIDTH_PX
    }

    fn panel_bounds(&self, panel: &PanelId) -> Option<Bounds> {
        self.panel_by_id(panel).map(|panel| Bounds {
            top: 0.0,
            height: panel.viewport_px,
            width: BLOCK_LAYOUT_WIDTH_PX * self.content_scale,
        })
    }

    fn scroll_by(&mut self, panel: &PanelId, delta_px: f64) {
        let Some(index) = self.panels.iter().position(|entry| &entry.id == panel) else {
            return;
        };
        self.panels[index].scroll_top += delta_px;
        self.clamp_scroll(index);
    }

    fn scroll_to_top(&mut self, panel: &PanelId) {
        if let Some(panel) = self.panel_by_id_mut(panel) {
            panel.scroll_top = 0.0;
        }
    }

    fn scroll_block_into_view(&mut self, block: &BlockId) {
        let Some((panel_index, position)) = self.rendered_position(block) else {
            return;
        };
        let panel = &self.panels[panel_index];
        let top = position as f64 * self.block_height_px - panel.scroll_top;
        let bottom = top + self.block_height_px;
        let delta = if top < 0.0 {
            top
        } else if bottom > panel.viewport_px {
            bottom - panel.viewport_px
        } else {
            0.0
        };
        self.panels[panel_index].scroll_top += delta;
        self.clamp_scroll(panel_index);
    }

    fn scroll_panel_into_view(&mut self, panel: &PanelId) {
        self.panel_view_requests.push(panel.clone());
    }

    async fn activate_block(&mut self, block: &BlockId) {
        self.activations.push(block.clone());
    }

    async fn toggle_fold_block(&mut self, block: &BlockId) {
        for panel in &mut self.panels {
            if let Some(node) = find_in_mut(&mut panel.roots, block) {
                node.folded = !node.folded;
                break;
            }
        }
        self.fold_requests.push(block.clone());
    }
}

/// Scriptable mode signals implementing [`ModeSignals`].
#[derive(Debug, Clone, Default)]
pub struct FixtureSignals {
    pub search_active: bool,
    pub hint_active: bool,
    pub edit_focused: bool,
    pub command_bar: bool,
    pub visual_selection: bool,
    pub highlights_visible: bool,
    pub highlights_cleared: usize,
}

impl ModeSignals for FixtureSignals {
    fn search_session_active(&self) -> bool {
        self.search_active
    }

    fn hint_session_active(&self) -> bool {
        self.hint_active
    }

    fn edit_target_focused(&self) -> bool {
        self.edit_focused
    }

    fn command_bar_open(&self) -> bool {
        self.command_bar
    }

    fn visual_selection_present(&self) -> bool {
        self.visual_selection
    }

    fn search_highlights_visible(&self) -> bool {
        self.highlights_visible
    }

    fn clear_search_highlights(&mut self) {
        self.highlights_visible = false;
        self.highlights_cleared += 1;
    }
}
