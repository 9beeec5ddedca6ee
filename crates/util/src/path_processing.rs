use dirs_next::home_dir;
use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// Reads a path from an environment variable, ignoring blank values.
pub fn path_from_env(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(|value| expand_tilde(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_trimmed_only() {
        assert_eq!(expand_tilde("  /tmp/rating.yaml "), PathBuf::from("/tmp/rating.yaml"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        temp_env::with_var("STARLING_TEST_PATH", Some("   "), || {
            assert_eq!(path_from_env("STARLING_TEST_PATH"), None);
        });
        temp_env::with_var("STARLING_TEST_PATH", Some("/etc/starling.json"), || {
            assert_eq!(path_from_env("STARLING_TEST_PATH"), Some(PathBuf::from("/etc/starling.json")));
        });
    }
}
