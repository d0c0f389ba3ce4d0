use crate::core::ToolError;
use std::path::Path;
use std::process::{Command, Output};

const STDERR_TAIL_LINES: usize = 12;

/// Display name for an executable, used in logs and error messages.
pub fn tool_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs `command` to completion, turning a spawn failure or a non-zero exit
/// into a [`ToolError`].
pub fn execute_tool(mut command: Command, tool: &str) -> Result<Output, ToolError> {
    log::debug!("Executing {}: {:?}", tool, command);

    let output = command.output().map_err(|source| {
        log::error!("Failed to start {}: {}", tool, source);
        ToolError::Spawn {
            tool: tool.to_string(),
            source,
        }
    })?;

    if !output.status.success() {
        let stderr = stderr_tail(&output.stderr);
        log::error!("{} failed with {}: {}", tool, output.status, stderr);
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr,
        });
    }

    log::debug!("{} completed successfully", tool);
    Ok(output)
}

/// Last few lines of a tool's stderr; ffmpeg prints its banner and stream
/// info first and the actual error last.
pub fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
