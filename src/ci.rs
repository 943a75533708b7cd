//! CI environment detection

use std::env;

/// Environment variables whose presence marks a CI run.
///
/// Presence alone counts; the value is ignored, empty string included.
pub const CI_MARKER_VARS: &[&str] = &["CI", "BUILD_NUMBER"];

/// Check whether the current process is running on a CI system.
pub fn running_on_ci() -> bool {
    ci_marker_present(|name| env::var_os(name).is_some())
}

/// Pure form of [`running_on_ci`]: `is_set` answers whether a variable is
/// present in the environment under inspection.
pub fn ci_marker_present(is_set: impl Fn(&str) -> bool) -> bool {
    CI_MARKER_VARS.iter().any(|name| is_set(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_markers_means_not_ci() {
        assert!(!ci_marker_present(|_| false));
    }

    #[test]
    fn test_either_marker_counts() {
        assert!(ci_marker_present(|name| name == "CI"));
        assert!(ci_marker_present(|name| name == "BUILD_NUMBER"));
    }

    #[test]
    fn test_presence_counts_even_with_empty_value() {
        let env: HashMap<&str, &str> = HashMap::from([("CI", "")]);
        assert!(ci_marker_present(|name| env.contains_key(name)));
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let env: HashMap<&str, &str> =
            HashMap::from([("HOME", "/home/user"), ("JENKINS_URL", "http://ci.local")]);
        assert!(!ci_marker_present(|name| env.contains_key(name)));
    }
}
