// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core identity and mode types.
//!
//! Everything here is value-like: ids refer into the live host document and
//! carry no handles, and modes are derived on demand rather than stored.

pub mod ids;
pub mod mode;

pub use ids::{BlockId, BlockIdTag, Id, IdError, PanelId, PanelIdTag};
pub use mode::Mode;
