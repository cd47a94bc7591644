use std::path::PathBuf;

/// Environment variable that overrides the provider file location.
pub const PROVIDER_FILE_ENV: &str = "CLAUDE_PROVIDER_FILE";

/// Returns the user's home directory, or `.` when it cannot be determined.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the path to ~/.config/claude-code/
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("claude-code")
}

/// Returns the path to ~/.config/claude-code/provider.zsh
pub fn default_provider_file() -> PathBuf {
    config_dir().join("provider.zsh")
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        return home_dir();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(raw),
    }
}

/// Pick the provider file: an explicit override (flag or env) wins over the default.
pub fn resolve_provider_file(override_path: Option<&str>) -> PathBuf {
    match override_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => expand_tilde(raw),
        None => default_provider_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_provider_zsh() {
        let path = default_provider_file();
        assert!(path.ends_with(".config/claude-code/provider.zsh"));
        assert!(path.starts_with(home_dir()));
    }

    #[test]
    fn tilde_expands_to_home() {
        assert_eq!(expand_tilde("~"), home_dir());
        assert_eq!(expand_tilde("~/x/provider.zsh"), home_dir().join("x/provider.zsh"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("/tmp/~/a"), PathBuf::from("/tmp/~/a"));
        assert_eq!(expand_tilde("~user/a"), PathBuf::from("~user/a"));
    }

    #[test]
    fn override_wins_over_default() {
        assert_eq!(
            resolve_provider_file(Some("/tmp/custom.zsh")),
            PathBuf::from("/tmp/custom.zsh")
        );
    }

    #[test]
    fn blank_override_uses_default() {
        assert_eq!(resolve_provider_file(Some("  ")), default_provider_file());
        assert_eq!(resolve_provider_file(None), default_provider_file());
    }
}
