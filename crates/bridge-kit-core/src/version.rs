//! Version detection for the scaffolded app's toolchain prerequisites.
//!
//! After `bridge-kit new`, the CLI checks that `node` and `npm` exist and are
//! recent enough for the template's dependencies. Detection is advisory: if a
//! tool is missing, doesn't support `--version`, or prints something
//! unexpected, this silently returns `None` and the CLI warns instead of
//! failing.

use std::fmt;
use std::process::Command;

/// Minimum Node.js major version the template's dependencies support.
pub const MIN_NODE_MAJOR: u32 = 18;

/// A semver-like version with major.minor.patch components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Parse the first `X.Y.Z` pattern found in a string.
    ///
    /// Handles the common formats: `"10.2.4"`, `"v20.11.1"`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                if let Some(ver) = Self::parse_at(s, i) {
                    return Some(ver);
                }
            }
            i += 1;
        }
        None
    }

    fn parse_at(s: &str, start: usize) -> Option<Self> {
        let rest = &s[start..];
        let mut parts = rest.splitn(4, '.');
        let major: u32 = parts.next()?.parse().ok()?;
        let minor: u32 = parts.next()?.parse().ok()?;
        // The patch component may carry trailing non-digits ("1-rc2").
        let patch_str: String = parts
            .next()?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if patch_str.is_empty() {
            return None;
        }
        let patch: u32 = patch_str.parse().ok()?;
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Run `tool --version` and parse the output.
pub fn detect_version(tool: &str) -> Option<Version> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(v) = Version::parse(&stdout) {
        return Some(v);
    }
    // Some tools print their version to stderr.
    let stderr = String::from_utf8_lossy(&output.stderr);
    Version::parse(&stderr)
}

/// True when `tool` is resolvable on `PATH`.
pub fn tool_available(tool: &str) -> bool {
    which::which(tool).is_ok()
}
