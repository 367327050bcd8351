// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual constants.

pub mod container;
pub mod design_tokens;
