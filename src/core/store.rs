use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::template::{self, API_KEY_PREFIX, OPENROUTER_MARKER};
use super::ProviderMode;

static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^export OPENROUTER_API_KEY="(.*)"$"#).unwrap());

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not create directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("could not replace {}", path.display())]
    Replace { path: PathBuf, source: io::Error },
}

/// The provider snippet on disk. Every call goes back to the file; nothing is cached.
#[derive(Debug, Clone)]
pub struct ProviderStore {
    path: PathBuf,
}

impl ProviderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Missing or unreadable files count as subscription mode.
    pub fn detect_mode(&self) -> ProviderMode {
        match self.read() {
            Some(content) if content.contains(OPENROUTER_MARKER) => ProviderMode::OpenRouter,
            _ => ProviderMode::Subscription,
        }
    }

    /// Key from the first `export OPENROUTER_API_KEY="..."` line, whatever mode
    /// the rest of the file declares. Callers should only trust it in OpenRouter mode.
    pub fn load_secret(&self) -> Option<String> {
        self.read().and_then(|content| parse_api_key(&content))
    }

    /// Regenerate the whole file for `mode`. The key is written verbatim,
    /// including when it is empty.
    pub fn write_config(&self, mode: ProviderMode, api_key: Option<&str>) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = template::render(mode, api_key);
        write_atomically(&self.path, &content, |from, to| fs::rename(from, to))?;

        info!(path = %self.path.display(), mode = mode.id(), "provider file written");
        Ok(())
    }

    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "provider file not readable");
                None
            }
        }
    }
}

/// Extract the key from provider file content.
pub fn parse_api_key(content: &str) -> Option<String> {
    let line = content.split('\n').find(|line| line.starts_with(API_KEY_PREFIX))?;

    if let Some(cap) = API_KEY_RE.captures(line) {
        return Some(cap[1].to_string());
    }

    // No closing quote: drop the last character anyway, like the quoted form.
    let rest = &line[API_KEY_PREFIX.len()..];
    let end = rest.char_indices().last().map(|(i, _)| i).unwrap_or(0);
    Some(rest[..end].to_string())
}

/// Write `content` to a sibling temp file, then hand it to `replace` to move
/// it over `path`. The temp file is removed if any step fails.
fn write_atomically<F>(path: &Path, content: &str, replace: F) -> Result<(), StoreError>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    let temp_path = temp_path_for(path);

    if let Err(source) = write_synced(&temp_path, content) {
        discard_temp(&temp_path);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    if let Err(source) = replace(&temp_path, path) {
        discard_temp(&temp_path);
        return Err(StoreError::Replace {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// The temp file is created private, before any key bytes reach it.
fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "provider.zsh".to_string());
    path.with_file_name(format!("{}.tmp.{}.{}", name, std::process::id(), nanos))
}

fn discard_temp(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "failed to remove temp file");
        }
    }
}
