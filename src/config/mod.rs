//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

//! The configuration of an application cluster entrypoint
//!
//! The raw input ([`NotValidatedApplicationClusterConfiguration`]) is produced by whoever parses the
//! process arguments. Calling `validate()` on it yields the immutable
//! [`ApplicationClusterConfiguration`] that the cluster bootstrap reads.

mod application;
pub use application::*;

mod entrypoint;
pub use entrypoint::*;

mod error;
pub use error::*;

mod not_validated;
pub use not_validated::*;

mod util;
pub use util::*;
