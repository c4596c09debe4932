// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their validation rules.
//! It has no dependencies on external crates (except `std`) so the observer
//! and motion code can lean on it without pulling in the GUI toolkit.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`LogCapacity`](diagnostics::LogCapacity))
//! - [`ui`]: UI value objects ([`Threshold`](ui::newtypes::Threshold),
//!   [`ParallaxDivisor`](ui::newtypes::ParallaxDivisor),
//!   [`PixelOffset`](ui::newtypes::PixelOffset))

pub mod diagnostics;
pub mod ui;
