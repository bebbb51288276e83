//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The globally unique identifier of the job an application cluster runs
///
/// Rendered as 32 lowercase hex digits, e.g. `fd72014d4c864993a2e5a9287b4a9c5d`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(u128);

impl JobId {
    const HEX_LEN: usize = 32;

    /// Generate a new, random job id
    pub fn generate() -> Self {
        JobId(Uuid::new_v4().as_u128())
    }

    pub fn from_parts(upper: u64, lower: u64) -> Self {
        JobId(((upper as u128) << 64) | lower as u128)
    }

    pub fn upper_part(&self) -> u64 {
        (self.0 >> 64) as u64
    }

    pub fn lower_part(&self) -> u64 {
        self.0 as u64
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        JobId(u128::from_be_bytes(bytes))
    }

    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl TryFrom<&str> for JobId {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        // u128::from_str_radix() would also accept a leading '+'
        if s.len() != Self::HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(anyhow!(
                "The expected format is [0-9a-fA-F]{{{}}}, e.g. fd72014d4c864993a2e5a9287b4a9c5d",
                Self::HEX_LEN
            )
            .context(format!("Cannot parse job id from \"{}\"", s)));
        }

        u128::from_str_radix(s, 16)
            .map(JobId)
            .with_context(|| anyhow!("Cannot parse job id from \"{}\"", s))
    }
}

impl TryFrom<String> for JobId {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        Self::try_from(&s as &str)
    }
}

impl FromStr for JobId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.to_string()
    }
}
