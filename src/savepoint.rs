//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

//! Settings describing whether (and how) a job is restored from a savepoint

use std::collections::BTreeMap;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

pub const SAVEPOINT_PATH_KEY: &str = "execution.savepoint.path";
pub const SAVEPOINT_IGNORE_UNCLAIMED_STATE_KEY: &str = "execution.savepoint.ignore-unclaimed-state";
pub const SAVEPOINT_RESTORE_MODE_KEY: &str = "execution.savepoint-restore-mode";

/// Who owns the snapshot files after a restore
#[derive(
    parse_display::Display,
    parse_display::FromStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
)]
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestoreMode {
    /// The job takes ownership of the savepoint and may delete it
    Claim,

    /// The savepoint is never touched, the first checkpoint after the restore is a full one
    #[default]
    NoClaim,

    Legacy,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(from = "SavepointRestoreInput")]
pub struct SavepointRestoreSettings {
    restore_path: Option<String>,
    allow_non_restored_state: bool,
    restore_mode: RestoreMode,
}

impl SavepointRestoreSettings {
    /// Do not restore from any savepoint
    pub fn none() -> Self {
        SavepointRestoreSettings {
            restore_path: None,
            allow_non_restored_state: false,
            restore_mode: RestoreMode::default(),
        }
    }

    pub fn for_path<P: Into<String>>(path: P, allow_non_restored_state: bool) -> Self {
        Self::for_path_with_mode(path, allow_non_restored_state, RestoreMode::default())
    }

    pub fn for_path_with_mode<P: Into<String>>(
        path: P,
        allow_non_restored_state: bool,
        restore_mode: RestoreMode,
    ) -> Self {
        SavepointRestoreSettings {
            restore_path: Some(path.into()),
            allow_non_restored_state,
            restore_mode,
        }
    }

    pub fn restore_savepoint(&self) -> bool {
        self.restore_path.is_some()
    }

    pub fn restore_path(&self) -> Option<&str> {
        self.restore_path.as_deref()
    }

    /// Whether state that cannot be mapped to the new job may be skipped during the restore
    pub fn allow_non_restored_state(&self) -> bool {
        self.allow_non_restored_state
    }

    pub fn restore_mode(&self) -> RestoreMode {
        self.restore_mode
    }

    /// Read the settings from a set of dynamic properties
    ///
    /// Without a savepoint path, the result is [`SavepointRestoreSettings::none`], whatever the
    /// other keys say.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Result<Self> {
        let path = match properties.get(SAVEPOINT_PATH_KEY) {
            Some(path) => path,
            None => return Ok(Self::none()),
        };

        let allow_non_restored_state = properties
            .get(SAVEPOINT_IGNORE_UNCLAIMED_STATE_KEY)
            .map(|v| v.trim().to_lowercase().parse::<bool>())
            .transpose()
            .with_context(|| anyhow!("Parsing '{}'", SAVEPOINT_IGNORE_UNCLAIMED_STATE_KEY))?
            .unwrap_or(false);

        let restore_mode = properties
            .get(SAVEPOINT_RESTORE_MODE_KEY)
            .map(|v| v.trim().parse::<RestoreMode>())
            .transpose()
            .with_context(|| {
                anyhow!(
                    "Parsing '{}', expected one of CLAIM, NO_CLAIM, LEGACY",
                    SAVEPOINT_RESTORE_MODE_KEY
                )
            })?
            .unwrap_or_default();

        Ok(Self::for_path_with_mode(path.clone(), allow_non_restored_state, restore_mode))
    }

    /// Render the settings as dynamic properties, empty if nothing is restored
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        if let Some(path) = self.restore_path.as_ref() {
            properties.insert(SAVEPOINT_PATH_KEY.to_string(), path.clone());
            properties.insert(
                SAVEPOINT_IGNORE_UNCLAIMED_STATE_KEY.to_string(),
                self.allow_non_restored_state.to_string(),
            );
            properties.insert(SAVEPOINT_RESTORE_MODE_KEY.to_string(), self.restore_mode.to_string());
        }
        properties
    }
}

impl std::fmt::Display for SavepointRestoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.restore_path.as_ref() {
            None => write!(f, "none"),
            Some(path) => write!(
                f,
                "{} (allow non-restored state: {}, mode: {})",
                path, self.allow_non_restored_state, self.restore_mode
            ),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SavepointRestoreInput {
    path: Option<String>,

    #[serde(default)]
    allow_non_restored_state: bool,

    #[serde(default)]
    restore_mode: RestoreMode,
}

impl From<SavepointRestoreInput> for SavepointRestoreSettings {
    fn from(input: SavepointRestoreInput) -> Self {
        match input.path {
            Some(path) => Self::for_path_with_mode(path, input.allow_non_restored_state, input.restore_mode),
            None => Self::none(),
        }
    }
}
