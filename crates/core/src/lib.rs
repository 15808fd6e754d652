// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lp-core: Shared library for the linepulse live-status client
//!
//! This crate provides the train domain model, the wire format of the
//! upstream snapshot feed, and primitives shared by the lp-client crate
//! and the linepulse binary.

pub mod error;
pub mod snapshot;
pub mod status;
pub mod train;

pub use error::{Error, Result};
pub use snapshot::{parse_snapshot, TrainSnapshot};
pub use status::ConnectionStatus;
pub use train::{format_eta, Location, TrainRecord};
