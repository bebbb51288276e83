//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

use std::collections::BTreeMap;
use std::path::PathBuf;

use getset::CopyGetters;
use getset::Getters;

/// The rest port value meaning "not configured, use what the cluster configuration says"
pub const DEFAULT_REST_PORT: i32 = -1;

/// Settings every cluster entrypoint needs, independent of what it runs
#[derive(Clone, Debug, Eq, PartialEq, Getters, CopyGetters)]
pub struct EntrypointClusterConfiguration {
    /// Directory containing the base cluster configuration
    #[getset(get = "pub")]
    config_dir: PathBuf,

    /// Overrides supplied at launch, layered over the base configuration
    #[getset(get = "pub")]
    dynamic_properties: BTreeMap<String, String>,

    /// Arguments left over after parsing, passed on untouched
    #[getset(get = "pub")]
    args: Vec<String>,

    #[getset(get = "pub")]
    hostname: Option<String>,

    #[getset(get_copy = "pub")]
    rest_port: i32,
}

impl EntrypointClusterConfiguration {
    pub fn new(
        config_dir: PathBuf,
        dynamic_properties: BTreeMap<String, String>,
        args: Vec<String>,
        hostname: Option<String>,
        rest_port: i32,
    ) -> Self {
        EntrypointClusterConfiguration {
            config_dir,
            dynamic_properties,
            args,
            hostname,
            rest_port,
        }
    }

    /// The rest port to apply on top of the cluster configuration, if any
    ///
    /// Negative values mean "not configured". `0` is kept, it asks for an ephemeral port.
    pub fn rest_port_override(&self) -> Option<u16> {
        u16::try_from(self.rest_port).ok()
    }
}
