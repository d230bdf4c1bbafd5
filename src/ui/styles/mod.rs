// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the landing page widgets.

pub mod button;
pub mod container;
pub mod overlay;
