//! Release check against crates.io, run once before the session starts.
//! Any failure is silently ignored; the check never blocks the session.

use std::time::Duration;

use ureq::Agent;

pub enum UpdateCheckResult {
    UpdateAvailable { current: String, latest: String },
    UpToDate,
    Failed(String),
}

/// Check for a newer release on crates.io (3-second timeout).
pub fn check_for_updates() -> UpdateCheckResult {
    let current_version = env!("CARGO_PKG_VERSION");

    let config = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(3)))
        .build();
    let agent: Agent = config.into();

    let response = match agent.get("https://crates.io/api/v1/crates/stashly").call() {
        Ok(resp) => resp,
        Err(e) => return UpdateCheckResult::Failed(format!("Network error: {e}")),
    };

    let body: serde_json::Value = match response.into_body().read_json() {
        Ok(json) => json,
        Err(e) => return UpdateCheckResult::Failed(format!("Failed to parse response: {e}")),
    };

    let latest_version = match body
        .get("crate")
        .and_then(|c| c.get("max_version"))
        .and_then(|v| v.as_str())
    {
        Some(v) => v.to_string(),
        None => return UpdateCheckResult::Failed("Could not find version info".to_string()),
    };

    if is_newer_version(current_version, &latest_version) {
        UpdateCheckResult::UpdateAvailable {
            current: current_version.to_string(),
            latest: latest_version,
        }
    } else {
        UpdateCheckResult::UpToDate
    }
}

/// Simple semver comparison (major.minor.patch).
/// Returns true if latest is newer than current.
fn is_newer_version(current: &str, latest: &str) -> bool {
    let parse_version = |s: &str| -> Option<(u32, u32, u32)> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() >= 3 {
            Some((
                parts[0].parse().ok()?,
                parts[1].parse().ok()?,
                parts[2].parse().ok()?,
            ))
        } else if parts.len() == 2 {
            Some((parts[0].parse().ok()?, parts[1].parse().ok()?, 0))
        } else {
            None
        }
    };

    let Some(current) = parse_version(current) else {
        return false;
    };
    let Some(latest) = parse_version(latest) else {
        return false;
    };

    latest > current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_versions_are_detected() {
        assert!(is_newer_version("1.3.0", "1.4.0"));
        assert!(is_newer_version("1.3.0", "2.0.0"));
        assert!(is_newer_version("1.3.0", "1.3.1"));
    }

    #[test]
    fn same_or_older_versions_are_not_newer() {
        assert!(!is_newer_version("1.3.0", "1.3.0"));
        assert!(!is_newer_version("1.4.0", "1.3.9"));
        assert!(!is_newer_version("2.0.0", "1.9.9"));
    }

    #[test]
    fn two_part_versions_parse_with_zero_patch() {
        assert!(is_newer_version("1.3", "1.3.1"));
        assert!(!is_newer_version("1.3", "1.3"));
    }

    #[test]
    fn garbage_versions_never_report_newer() {
        assert!(!is_newer_version("abc", "1.0.0"));
        assert!(!is_newer_version("1.0.0", "latest"));
    }
}
