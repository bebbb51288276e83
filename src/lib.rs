//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

//! Startup configuration of a standalone application cluster entrypoint
//!
//! An application cluster starts the cluster runtime and exactly one, already compiled job
//! together. Before it can do so, the entrypoint needs to know where the cluster configuration
//! lives, whether the job is restored from a savepoint and how the job is found. This crate holds
//! that knowledge in [`config::ApplicationClusterConfiguration`].

pub mod config;
pub mod job;
pub mod savepoint;
