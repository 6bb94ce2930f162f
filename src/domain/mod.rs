// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`MaxVisible`](ui::newtypes::MaxVisible))

pub mod ui;
