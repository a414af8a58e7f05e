// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — modal navigation core for multi-panel outliner documents.
//!
//! The host application renders and edits an outline of blocks spread over
//! scrollable panels; Triton decides which interaction mode is active and
//! moves a per-panel block selection through the live document. The host
//! sits behind [`host::DocumentHost`] and [`host::ModeSignals`]; a command
//! dispatcher drives [`nav::Workspace`] and [`mode::resolve_mode`].

pub mod geometry;
pub mod host;
pub mod mode;
pub mod model;
pub mod nav;
