use crate::core::{list_images, AppConfig, AppResult, CaptionConfig, ToolError, ValidationError};
use crate::video::tool_runner::{execute_tool, tool_name};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything needed for one encoder run, resolved from the UI fields and config.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub encoder: PathBuf,
    pub player: PathBuf,
    pub image_folder: PathBuf,
    pub output_path: PathBuf,
    pub fps: u32,
    pub codec: String,
    pub caption: CaptionConfig,
}

impl VideoJob {
    /// Checks that a folder was picked and both executable paths are filled in.
    pub fn new(
        image_folder: Option<&Path>,
        encoder: &str,
        player: &str,
        config: &AppConfig,
    ) -> AppResult<Self> {
        let image_folder = image_folder.ok_or(ValidationError::NoFolderSelected)?;

        let encoder = encoder.trim();
        let player = player.trim();
        if encoder.is_empty() || player.is_empty() {
            return Err(ValidationError::MissingToolPaths.into());
        }

        Ok(Self {
            encoder: PathBuf::from(encoder),
            player: PathBuf::from(player),
            image_folder: image_folder.to_path_buf(),
            output_path: config.output_path.clone(),
            fps: config.fps.max(1),
            codec: config.codec.clone(),
            caption: config.caption.clone(),
        })
    }
}

pub struct VideoBuilder;

impl VideoBuilder {
    /// Encodes the folder's images into `job.output_path` with the caption
    /// drawn over every frame. Any previous output is overwritten.
    pub fn build(job: &VideoJob) -> AppResult<PathBuf> {
        let images = list_images(&absolute_path(&job.image_folder))?;
        if images.is_empty() {
            log::warn!("No images found in {}", job.image_folder.display());
            return Err(ValidationError::NoImages {
                folder: job.image_folder.clone(),
            }
            .into());
        }

        log::info!(
            "Building video from {} images in {} -> {}",
            images.len(),
            job.image_folder.display(),
            job.output_path.display()
        );

        let script_path = Self::script_path(&job.output_path);
        std::fs::write(&script_path, Self::concat_script(&images, job.fps)).map_err(|source| {
            ToolError::WriteScript {
                path: script_path.clone(),
                source,
            }
        })?;

        let command = Self::encoder_command(job, &script_path);
        let result = execute_tool(command, &tool_name(&job.encoder));

        if let Err(e) = std::fs::remove_file(&script_path) {
            log::warn!("Failed to remove frame list {}: {}", script_path.display(), e);
        }

        result?;
        log::info!("Video saved as {}", job.output_path.display());
        Ok(job.output_path.clone())
    }

    /// ffconcat script showing each image for `1 / fps` seconds, in order.
    pub fn concat_script(images: &[PathBuf], fps: u32) -> String {
        let duration = 1.0 / f64::from(fps.max(1));
        let mut script = String::from("ffconcat version 1.0\n");

        for image in images {
            script.push_str(&format!("file '{}'\n", escape_concat_path(image)));
            script.push_str(&format!("duration {}\n", duration));
        }

        // The demuxer ignores the duration of the final entry unless it is repeated
        if let Some(last) = images.last() {
            script.push_str(&format!("file '{}'\n", escape_concat_path(last)));
        }

        script
    }

    /// Video filter that evens out the frame size and draws the caption centred
    /// on a background box.
    pub fn caption_filter(caption: &CaptionConfig) -> String {
        format!(
            "scale=trunc(iw/2)*2:trunc(ih/2)*2,drawtext=fontfile={}:text={}:fontsize={}:fontcolor={}:box=1:boxcolor={}:x=(w-text_w)/2:y=(h-text_h)/2:expansion=none",
            escape_filter_value(&caption.font_file.to_string_lossy()),
            escape_filter_value(&caption.text),
            caption.font_size,
            escape_filter_value(&caption.color),
            escape_filter_value(&caption.background_color),
        )
    }

    pub fn encoder_command(job: &VideoJob, script_path: &Path) -> Command {
        let mut cmd = Command::new(&job.encoder);
        cmd.arg("-hide_banner")
            .arg("-y") // Overwrite output file
            .arg("-f")
            .arg("concat")
            .arg("-safe")
            .arg("0")
            .arg("-i")
            .arg(script_path)
            .arg("-vf")
            .arg(Self::caption_filter(&job.caption))
            .arg("-r")
            .arg(job.fps.to_string())
            .arg("-c:v")
            .arg(&job.codec)
            .arg("-pix_fmt")
            .arg("yuv420p")
            .arg(&job.output_path);

        // Visible to the encoder only, the rest of the process is untouched
        cmd.env("FFMPEG_BINARY", &job.encoder)
            .env("FFPLAY_BINARY", &job.player);
        cmd
    }

    fn script_path(output_path: &Path) -> PathBuf {
        let mut name = OsString::from(output_path.as_os_str());
        name.push(".frames.txt");
        PathBuf::from(name)
    }
}

/// The concat demuxer resolves relative entries against the script's own
/// directory, so frame paths are made absolute up front.
fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn escape_concat_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', "'\\''")
}

/// Escapes a value for a filter option, then for the filtergraph around it.
pub fn escape_filter_value(value: &str) -> String {
    let mut option = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | ':') {
            option.push('\\');
        }
        option.push(c);
    }

    let mut graph = String::with_capacity(option.len());
    for c in option.chars() {
        if matches!(c, '\\' | '\'' | '[' | ']' | ',' | ';') {
            graph.push('\\');
        }
        graph.push(c);
    }
    graph
}
