// Tomlet - a TOML-style configuration document engine
//
// Copyright (c) 2026 Tomlet contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Security limits for Tomlet parsing.

/// Configurable limits for parser security.
///
/// These bound the resources a parse may consume, so adversarial input is
/// capped by configuration rather than by the caller pre-measuring it.
/// Exceeding a limit fails the parse with the fatal error code.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum source size in bytes (default: 1GB).
    pub max_source_size: usize,
    /// Maximum array nesting depth (default: 128).
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_source_size: 1024 * 1024 * 1024, // 1GB
            max_nesting_depth: 128,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_source_size: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_source_size() {
        let limits = Limits::default();
        assert_eq!(limits.max_source_size, 1024 * 1024 * 1024); // 1GB
    }

    #[test]
    fn test_default_max_nesting_depth() {
        let limits = Limits::default();
        assert_eq!(limits.max_nesting_depth, 128);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_source_size, usize::MAX);
        assert_eq!(limits.max_nesting_depth, usize::MAX);
    }

    // ==================== Custom limits tests ====================

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_source_size: 100,
            max_nesting_depth: 4,
        };
        assert_eq!(limits.max_source_size, 100);
        assert_eq!(limits.max_nesting_depth, 4);
    }

    #[test]
    fn test_limits_clone() {
        let original = Limits::default();
        let cloned = original.clone();
        assert_eq!(original.max_source_size, cloned.max_source_size);
        assert_eq!(original.max_nesting_depth, cloned.max_nesting_depth);
    }

    #[test]
    fn test_limits_debug() {
        let debug = format!("{:?}", Limits::default());
        assert!(debug.contains("max_source_size"));
        assert!(debug.contains("max_nesting_depth"));
    }
}
