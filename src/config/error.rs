//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigurationError {
    #[error("Missing required configuration field: {field}")]
    MissingRequiredField { field: &'static str },
}

impl ConfigurationError {
    pub fn missing(field: &'static str) -> Self {
        ConfigurationError::MissingRequiredField { field }
    }

    pub fn missing_field(&self) -> &'static str {
        match self {
            ConfigurationError::MissingRequiredField { field } => *field,
        }
    }
}
