use crate::core::{AppResult, ToolError, ValidationError};
use std::path::Path;
use std::process::Command;

pub struct VideoPlayer;

impl VideoPlayer {
    /// Opens `video_path` in the player through the system shell and waits for
    /// the shell to return. The player's own exit status is not checked.
    pub fn play(player: &str, video_path: &Path) -> AppResult<()> {
        if !video_path.exists() {
            log::warn!("Cannot play {}: file does not exist", video_path.display());
            return Err(ValidationError::NoVideo {
                path: video_path.to_path_buf(),
            }
            .into());
        }

        let player = player.trim();
        if player.is_empty() {
            return Err(ValidationError::MissingPlayerPath.into());
        }

        let line = Self::command_line(player, video_path);
        log::info!("Launching player: {}", line);

        let status = shell_command(&line).status().map_err(|source| ToolError::Spawn {
            tool: "shell".to_string(),
            source,
        })?;
        log::debug!("Player command finished with {}", status);

        Ok(())
    }

    /// Player path quoted, video path left as-is.
    pub fn command_line(player: &str, video_path: &Path) -> String {
        format!("\"{}\" {}", player, video_path.display())
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}
