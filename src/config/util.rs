//
// Copyright (c) 2020-2022 science+computing ag and other contributors
//
// This program and the accompanying materials are made
// available under the terms of the Eclipse Public License 2.0
// which is available at https://www.eclipse.org/legal/epl-2.0/
//
// SPDX-License-Identifier: EPL-2.0
//

/// Replacement for the values of sensitive dynamic properties
pub const HIDDEN_CONTENT: &str = "******";

const SENSITIVE_KEY_FRAGMENTS: &[&str] = &[
    "password",
    "secret",
    "fs.azure.account.key",
    "apikey",
    "auth-params",
    "service-key",
    "token",
    "basic-auth",
    "jaas.config",
    "http-headers",
];

/// Whether the value of a dynamic property must not end up in logs
pub fn is_sensitive(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEY_FRAGMENTS.iter().any(|fragment| key.contains(fragment))
}

/// The value of a dynamic property as it may be shown to humans
pub fn displayable_value<'a>(key: &str, value: &'a str) -> &'a str {
    if is_sensitive(key) {
        HIDDEN_CONTENT
    } else {
        value
    }
}
