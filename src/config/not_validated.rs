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
use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::config::ApplicationClusterConfiguration;
use crate::config::ConfigurationError;
use crate::config::EntrypointClusterConfiguration;
use crate::config::DEFAULT_REST_PORT;
use crate::job::JobId;
use crate::savepoint::SavepointRestoreSettings;

/// Application cluster settings as handed over by the argument parser
///
/// Every setter of the builder is optional, so that required settings which were not given show up
/// as an error from [`NotValidatedApplicationClusterConfiguration::validate`].
#[derive(Clone, Debug, Getters, CopyGetters, Deserialize, TypedBuilder)]
#[serde(deny_unknown_fields)]
pub struct NotValidatedApplicationClusterConfiguration {
    #[getset(get = "pub")]
    #[builder(default, setter(into, strip_option))]
    config_dir: Option<PathBuf>,

    #[getset(get = "pub")]
    #[builder(default, setter(strip_option))]
    dynamic_properties: Option<BTreeMap<String, String>>,

    #[getset(get = "pub")]
    #[builder(default, setter(strip_option))]
    args: Option<Vec<String>>,

    #[getset(get = "pub")]
    #[builder(default, setter(into, strip_option))]
    hostname: Option<String>,

    #[serde(default = "default_rest_port")]
    #[getset(get_copy = "pub")]
    #[builder(default = DEFAULT_REST_PORT)]
    rest_port: i32,

    #[getset(get = "pub")]
    #[builder(default, setter(strip_option))]
    savepoint_restore_settings: Option<SavepointRestoreSettings>,

    #[getset(get_copy = "pub")]
    #[builder(default, setter(strip_option))]
    job_id: Option<JobId>,

    #[getset(get = "pub")]
    #[builder(default, setter(into, strip_option))]
    job_class_name: Option<String>,

    #[getset(get = "pub")]
    #[builder(default, setter(strip_option))]
    jars: Option<Vec<String>>,
}

impl NotValidatedApplicationClusterConfiguration {
    /// Check that every required setting is present
    ///
    /// Settings are checked in the order `config_dir`, `dynamic_properties`, `args`,
    /// `savepoint_restore_settings` and the first missing one is reported.
    pub fn validate(self) -> Result<ApplicationClusterConfiguration, ConfigurationError> {
        let config_dir = self.config_dir.ok_or_else(|| ConfigurationError::missing("config_dir"))?;
        let dynamic_properties = self
            .dynamic_properties
            .ok_or_else(|| ConfigurationError::missing("dynamic_properties"))?;
        let args = self.args.ok_or_else(|| ConfigurationError::missing("args"))?;

        let base = EntrypointClusterConfiguration::new(
            config_dir,
            dynamic_properties,
            args,
            self.hostname,
            self.rest_port,
        );

        ApplicationClusterConfiguration::new(
            base,
            self.savepoint_restore_settings,
            self.job_id,
            self.job_class_name,
            self.jars,
        )
    }
}

fn default_rest_port() -> i32 {
    DEFAULT_REST_PORT
}
