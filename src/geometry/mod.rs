// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewport visibility math.
//!
//! Scroll-into-view alone cannot answer "is the currently selected block
//! still visible after an arbitrary scroll", which is what lets the engine
//! re-anchor the selection without issuing a redundant scroll. The overflow
//! here is the signed distance a block extends beyond its panel's padded
//! viewport; zero means fully visible.

use crate::host::DocumentHost;
use crate::model::BlockId;

/// Bounding box in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
    pub width: f64,
}

impl Bounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Signed overflow of `block` against its enclosing panel's padded viewport.
///
/// Negative: the block extends that many pixels above the padded top.
/// Positive: that many pixels below the padded bottom. Zero: fully visible.
/// A block without bounds or without an enclosing panel is treated as
/// visible.
///
/// The padding is specified against the block's layout width; when the host
/// scales the content area with a transform, the rendered width differs and
/// the padding scales with it.
pub fn scroll_overflow(host: &impl DocumentHost, block: &BlockId, padding_px: f64) -> f64 {
    let Some(bounds) = host.block_bounds(block) else {
        return 0.0;
    };

    let layout_width = host.block_layout_width(block);
    let scaled_padding = if layout_width > 0.0 {
        bounds.width / layout_width * padding_px
    } else {
        padding_px
    };

    let Some(panel) = host.enclosing_panel(block) else {
        return 0.0;
    };
    let Some(panel_bounds) = host.panel_bounds(&panel) else {
        return 0.0;
    };

    let overflow_top = panel_bounds.top - bounds.top + scaled_padding;
    if overflow_top > 0.0 {
        return -overflow_top;
    }

    let overflow_bottom = bounds.bottom() - panel_bounds.bottom() + scaled_padding;
    if overflow_bottom > 0.0 {
        return overflow_bottom;
    }

    0.0
}

pub fn block_is_visible(host: &impl DocumentHost, block: &BlockId, padding_px: f64) -> bool {
    scroll_overflow(host, block, padding_px) == 0.0
}
