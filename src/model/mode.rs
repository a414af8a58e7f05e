// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single globally active interaction interpretation.
///
/// A mode is never stored: it is recomputed from live host signals on every
/// query (see [`crate::mode::resolve_mode`]), so it cannot drift out of sync
/// with the document. Serialized as upper-case strings (`"NORMAL"`, ...) for
/// status-line and dispatcher integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Insert,
    Visual,
    Normal,
    Hint,
    Search,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
            Mode::Normal => "NORMAL",
            Mode::Hint => "HINT",
            Mode::Search => "SEARCH",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
