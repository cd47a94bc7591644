use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Program plus arguments that show `file` (or its folder) in the desktop file browser.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

pub fn reveal_command(file: &Path, file_exists: bool) -> RevealCommand {
    let dir = file
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if cfg!(target_os = "macos") {
        if file_exists {
            RevealCommand {
                program: "open",
                args: vec!["-R".into(), file.into()],
            }
        } else {
            RevealCommand {
                program: "open",
                args: vec![dir.into()],
            }
        }
    } else if cfg!(target_os = "windows") {
        if file_exists {
            let mut select = OsString::from("/select,");
            select.push(file);
            RevealCommand {
                program: "explorer",
                args: vec![select],
            }
        } else {
            RevealCommand {
                program: "explorer",
                args: vec![dir.into()],
            }
        }
    } else {
        // xdg-open has no way to pre-select a file.
        RevealCommand {
            program: "xdg-open",
            args: vec![dir.into()],
        }
    }
}

/// Open the file browser at the provider file. Failures are logged and ignored.
pub fn reveal(file: &Path) {
    let cmd = reveal_command(file, file.is_file());
    debug!(program = cmd.program, args = ?cmd.args, "revealing provider file");

    match Command::new(cmd.program).args(&cmd.args).spawn() {
        Ok(_) => {}
        Err(e) => warn!(program = cmd.program, error = %e, "could not open file browser"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[cfg(target_os = "macos")]
    #[test]
    fn selects_existing_file() {
        let file = PathBuf::from("/Users/me/.config/claude-code/provider.zsh");
        let cmd = reveal_command(&file, true);
        assert_eq!(cmd.program, "open");
        assert_eq!(cmd.args, vec![OsString::from("-R"), file.into_os_string()]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn opens_directory_when_missing() {
        let file = PathBuf::from("/Users/me/.config/claude-code/provider.zsh");
        let cmd = reveal_command(&file, false);
        assert_eq!(cmd.args, vec![OsString::from("/Users/me/.config/claude-code")]);
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn xdg_open_gets_parent_directory() {
        let file = PathBuf::from("/home/me/.config/claude-code/provider.zsh");
        for exists in [true, false] {
            let cmd = reveal_command(&file, exists);
            assert_eq!(cmd.program, "xdg-open");
            assert_eq!(cmd.args, vec![OsString::from("/home/me/.config/claude-code")]);
        }
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let cmd = reveal_command(&PathBuf::from("provider.zsh"), false);
        assert_eq!(cmd.args.last(), Some(&OsString::from(".")));
    }
}
