// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mode resolution.
//!
//! The active mode is a decision table over live host signals, evaluated in
//! fixed priority order with the first match winning. Deriving it on every
//! query (instead of storing it) rules out the whole class of "mode got
//! stuck" bugs where a stored field drifts from the document.

use crate::host::ModeSignals;
use crate::model::Mode;

/// Compute the active mode: SEARCH > HINT > INSERT > VISUAL > NORMAL.
///
/// INSERT requires an edit target *and* no command-bar overlay; the command
/// bar grabs input focus, but keystrokes there are commands, not text.
///
/// One deliberate side effect: a still-visible search-highlight overlay is
/// cleared when the resolved mode is INSERT, VISUAL, or HINT. NORMAL keeps
/// the highlights so match-to-match motion keeps working after a search
/// ends; any switch away from NORMAL retires them.
pub fn resolve_mode(signals: &mut impl ModeSignals) -> Mode {
    let mode = if signals.search_session_active() {
        Mode::Search
    } else if signals.hint_session_active() {
        Mode::Hint
    } else if signals.edit_target_focused() && !signals.command_bar_open() {
        Mode::Insert
    } else if signals.visual_selection_present() {
        Mode::Visual
    } else {
        Mode::Normal
    };

    if signals.search_highlights_visible()
        && matches!(mode, Mode::Insert | Mode::Visual | Mode::Hint)
    {
        signals.clear_search_highlights();
    }

    mode
}
