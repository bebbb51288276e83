//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

use std::ops::Deref;

use getset::CopyGetters;
use getset::Getters;
use itertools::Itertools;
use tracing::debug;
use tracing::info;

use crate::config::displayable_value;
use crate::config::ConfigurationError;
use crate::config::EntrypointClusterConfiguration;
use crate::job::JobId;
use crate::savepoint::SavepointRestoreSettings;

const NOT_SET: &str = "not set";

/// The validated configuration of an application cluster entrypoint
///
/// Besides the entrypoint settings (reachable through `Deref`), it describes the single job the
/// cluster runs: how to restore it and how to find it. Which of `job_id`, `job_class_name` and
/// `jars` are present is not checked here, deciding how to submit the job from that is up to the
/// bootstrap.
#[derive(Clone, Debug, Eq, PartialEq, Getters, CopyGetters)]
pub struct ApplicationClusterConfiguration {
    base: EntrypointClusterConfiguration,

    #[getset(get = "pub")]
    savepoint_restore_settings: SavepointRestoreSettings,

    /// The id the job is submitted with, if it is pinned
    #[getset(get_copy = "pub")]
    job_id: Option<JobId>,

    job_class_name: Option<String>,

    jars: Option<Vec<String>>,
}

impl Deref for ApplicationClusterConfiguration {
    type Target = EntrypointClusterConfiguration;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl ApplicationClusterConfiguration {
    pub fn new(
        base: EntrypointClusterConfiguration,
        savepoint_restore_settings: Option<SavepointRestoreSettings>,
        job_id: Option<JobId>,
        job_class_name: Option<String>,
        jars: Option<Vec<String>>,
    ) -> Result<Self, ConfigurationError> {
        let savepoint_restore_settings = savepoint_restore_settings
            .ok_or_else(|| ConfigurationError::missing("savepoint_restore_settings"))?;

        Ok(ApplicationClusterConfiguration {
            base,
            savepoint_restore_settings,
            job_id,
            job_class_name,
            jars,
        })
    }

    /// Fully qualified name of the class the job is started from
    pub fn job_class_name(&self) -> Option<&str> {
        self.job_class_name.as_deref()
    }

    /// Locations of the jars the job needs on its classpath
    pub fn jars(&self) -> Option<&[String]> {
        self.jars.as_deref()
    }

    pub fn has_jars(&self) -> bool {
        self.jars.as_ref().map(|jars| !jars.is_empty()).unwrap_or(false)
    }

    /// Human readable (label, value) pairs describing this configuration
    ///
    /// Values of sensitive dynamic properties are masked.
    pub fn summary(&self) -> Vec<(String, String)> {
        let mut lines = vec![
            (String::from("Configuration directory"), self.config_dir().display().to_string()),
            (String::from("Hostname"), self.hostname().clone().unwrap_or_else(|| String::from(NOT_SET))),
            (
                String::from("Rest port"),
                self.rest_port_override()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| String::from(NOT_SET)),
            ),
        ];

        lines.extend(self.dynamic_properties().iter().map(|(key, value)| {
            (format!("Dynamic property {}", key), displayable_value(key, value).to_string())
        }));

        lines.push((String::from("Savepoint restore"), self.savepoint_restore_settings.to_string()));
        lines.push((
            String::from("Job id"),
            self.job_id.map(|id| id.to_string()).unwrap_or_else(|| String::from(NOT_SET)),
        ));
        lines.push((
            String::from("Job class name"),
            self.job_class_name().unwrap_or(NOT_SET).to_string(),
        ));
        lines.push((
            String::from("Classpath jars"),
            if self.has_jars() {
                self.jars.iter().flatten().join(", ")
            } else {
                String::from(NOT_SET)
            },
        ));

        lines
    }

    /// Log the configuration, for the bootstrap to call once it starts up
    pub fn log_summary(&self) {
        info!("Application cluster configuration:");
        for (label, value) in self.summary() {
            info!("    {}: {}", label, value);
        }
        debug!("Program arguments: {:?}", self.args());
    }
}
