//! Sound playback
//!
//! Resolves catalog sound names to bundled audio files and plays them once
//! through the platform's command-line player. Playback never blocks the
//! caller and never reports failure upward; problems are only logged.

use crate::config::{AVAILABLE_SOUNDS, NO_SOUND};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Selectable sound names, sentinel first
pub fn available_sounds() -> Vec<String> {
    AVAILABLE_SOUNDS.iter().map(|s| s.to_string()).collect()
}

pub fn is_valid_sound(name: &str) -> bool {
    AVAILABLE_SOUNDS.contains(&name)
}

/// Fire-and-forget audio output
pub trait SoundPlayer: Send + Sync {
    fn play_sound(&self, name: &str);
}

/// Plays bundled sound files with the OS player
#[derive(Debug, Clone)]
pub struct SoundManager {
    search_dirs: Vec<PathBuf>,
}

impl SoundManager {
    /// `search_dirs` are tried in order when resolving a sound name
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Find the file for `name`, or None for the sentinel and unknown files
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name == NO_SOUND || name.is_empty() {
            return None;
        }

        // Names are bare file names; anything path-like is rejected.
        if name.contains(['/', '\\']) || name.contains("..") {
            tracing::warn!("Rejected sound name with path components: {:?}", name);
            return None;
        }

        self.search_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
    }

    fn player_command(path: &Path) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("afplay");
            cmd.arg(path);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let escaped = path.display().to_string().replace('\'', "''");
            let mut cmd = Command::new("powershell");
            cmd.arg("-NoProfile").arg("-Command").arg(format!(
                "(New-Object Media.SoundPlayer '{}').PlaySync();",
                escaped
            ));
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            // The path is passed as $0 so it is never parsed as shell syntax.
            let mut cmd = Command::new("sh");
            cmd.arg("-c")
                .arg(r#"paplay "$0" 2>/dev/null || aplay -q "$0" 2>/dev/null"#)
                .arg(path);
            cmd
        }
    }
}

impl SoundPlayer for SoundManager {
    fn play_sound(&self, name: &str) {
        if name == NO_SOUND {
            return;
        }

        let Some(path) = self.resolve(name) else {
            tracing::warn!("Sound file not found: {}", name);
            return;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime available, skipping sound {}", name);
            return;
        };

        let mut command = Self::player_command(&path);
        command
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null());

        let name = name.to_string();
        runtime.spawn(async move {
            match command.status().await {
                Ok(status) if status.success() => {
                    tracing::debug!("Finished playing sound {}", name);
                }
                Ok(status) => {
                    tracing::warn!("Sound player exited with {} for {}", status, name);
                }
                Err(e) => {
                    tracing::warn!("Failed to launch sound player for {}: {}", name, e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_starts_with_sentinel() {
        let sounds = available_sounds();
        assert_eq!(sounds[0], NO_SOUND);
        assert!(sounds.contains(&"Nature Sounds.mp3".to_string()));
    }

    #[test]
    fn test_is_valid_sound() {
        assert!(is_valid_sound(NO_SOUND));
        assert!(is_valid_sound("Chirping Bird Sound.mp3"));
        assert!(!is_valid_sound("Chirping Bird Sound"));
        assert!(!is_valid_sound("../../etc/passwd"));
    }

    #[test]
    fn test_resolve_searches_dirs_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(second.path().join("Nature Sounds.mp3"), b"mp3").unwrap();

        let manager = SoundManager::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(
            manager.resolve("Nature Sounds.mp3"),
            Some(second.path().join("Nature Sounds.mp3"))
        );

        std::fs::write(first.path().join("Nature Sounds.mp3"), b"mp3").unwrap();
        assert_eq!(
            manager.resolve("Nature Sounds.mp3"),
            Some(first.path().join("Nature Sounds.mp3"))
        );
    }

    #[test]
    fn test_resolve_rejects_sentinel_missing_and_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(NO_SOUND), b"").unwrap();
        let manager = SoundManager::new(vec![dir.path().to_path_buf()]);

        assert!(manager.resolve(NO_SOUND).is_none());
        assert!(manager.resolve("Missing.mp3").is_none());
        assert!(manager.resolve("../settings.json").is_none());
        assert!(manager.resolve("sub/file.mp3").is_none());
    }

    #[test]
    fn test_play_unknown_sound_is_swallowed() {
        let manager = SoundManager::new(vec![]);
        // No runtime and no file: both paths must return quietly.
        manager.play_sound("Nature Sounds.mp3");
        manager.play_sound(NO_SOUND);
    }
}
