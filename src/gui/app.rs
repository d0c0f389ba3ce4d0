use eframe::egui;
use crate::core::{AppConfig, AppError, Severity};
use crate::gui::dialogs::{Dialogs, Feedback, NativeDialogs};
use crate::video::{VideoBuilder, VideoJob, VideoPlayer};
use std::path::PathBuf;

/// Everything a button in the window can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    SelectFolder,
    SelectEncoder,
    SelectPlayer,
    Generate,
    Play,
}

pub struct ImageClipsApp {
    pub config: AppConfig,
    /// Where picked tool paths are persisted; `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
    pub image_folder: Option<PathBuf>,
    pub ffmpeg_path_input: String,
    pub ffplay_path_input: String,
    pub status_message: String,
    pub dialogs: Box<dyn Dialogs>,
}

impl ImageClipsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let (config, config_path) = Self::load_config(&AppConfig::config_path());

        let mut app = Self::with_dialogs(config, Box::new(NativeDialogs));
        app.config_path = config_path;
        Ok(app)
    }

    /// Loads the saved config, falling back to defaults held in memory only
    /// when the file can't be read or written.
    pub fn load_config(config_path: &std::path::Path) -> (AppConfig, Option<PathBuf>) {
        match AppConfig::load_from(config_path) {
            Ok(config) => (config, Some(config_path.to_path_buf())),
            Err(e) => {
                log::warn!("Using default config, settings will not be saved: {}", e);
                (AppConfig::default(), None)
            }
        }
    }

    pub fn with_dialogs(config: AppConfig, dialogs: Box<dyn Dialogs>) -> Self {
        let path_text = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        Self {
            ffmpeg_path_input: path_text(&config.ffmpeg_path),
            ffplay_path_input: path_text(&config.ffplay_path),
            config,
            config_path: None,
            image_folder: None,
            status_message: String::new(),
            dialogs,
        }
    }

    pub fn output_path(&self) -> &std::path::Path {
        &self.config.output_path
    }

    pub fn folder_label(&self) -> String {
        match self.image_folder {
            Some(ref folder) => format!("Selected Folder: {}", folder.display()),
            None => "Select Images Folder:".to_string(),
        }
    }

    pub fn dispatch(&mut self, action: UserAction) {
        log::debug!("Handling {:?}", action);
        match action {
            UserAction::SelectFolder => self.select_image_folder(),
            UserAction::SelectEncoder => self.select_ffmpeg_path(),
            UserAction::SelectPlayer => self.select_ffplay_path(),
            UserAction::Generate => self.generate_video(),
            UserAction::Play => self.play_video(),
        }
    }

    fn select_image_folder(&mut self) {
        if let Some(folder) = self.dialogs.pick_folder("Select Images Folder") {
            log::info!("Selected image folder: {}", folder.display());
            self.status_message = format!("Selected folder: {}", folder.display());
            self.image_folder = Some(folder);
        }
    }

    fn select_ffmpeg_path(&mut self) {
        if let Some(path) = self.dialogs.pick_executable("Select FFmpeg Executable") {
            log::info!("Selected FFmpeg executable: {}", path.display());
            self.ffmpeg_path_input = path.display().to_string();
            self.remember_tool_paths();
        }
    }

    fn select_ffplay_path(&mut self) {
        if let Some(path) = self.dialogs.pick_executable("Select FFplay Executable") {
            log::info!("Selected FFplay executable: {}", path.display());
            self.ffplay_path_input = path.display().to_string();
            self.remember_tool_paths();
        }
    }

    fn generate_video(&mut self) {
        let result = VideoJob::new(
            self.image_folder.as_deref(),
            &self.ffmpeg_path_input,
            &self.ffplay_path_input,
            &self.config,
        )
        .and_then(|job| VideoBuilder::build(&job));

        match result {
            Ok(path) => {
                self.remember_tool_paths();
                let message = format!("Video saved as {}", path.display());
                self.status_message = message.clone();
                self.dialogs.notify(Feedback::Information, "Success", &message);
            }
            Err(e) => self.report(e, "An error occurred"),
        }
    }

    fn play_video(&mut self) {
        let output_path = self.config.output_path.clone();
        match VideoPlayer::play(&self.ffplay_path_input, &output_path) {
            Ok(()) => {
                self.status_message = format!("Played {}", output_path.display());
            }
            Err(e) => self.report(e, "An error occurred while playing the video"),
        }
    }

    /// Validation failures become warnings; tool failures become critical
    /// dialogs prefixed with `context`.
    fn report(&mut self, error: AppError, context: &str) {
        let (feedback, message) = match error.severity() {
            Severity::Warning => {
                log::warn!("{}", error);
                (Feedback::Warning, error.to_string())
            }
            Severity::Critical => {
                log::error!("{}: {}", context, error);
                (Feedback::Critical, format!("{}: {}", context, error))
            }
        };
        self.status_message = message.clone();
        self.dialogs.notify(feedback, "Error", &message);
    }

    fn remember_tool_paths(&mut self) {
        let as_path = |text: &str| {
            let text = text.trim();
            (!text.is_empty()).then(|| PathBuf::from(text))
        };
        self.config.ffmpeg_path = as_path(&self.ffmpeg_path_input);
        self.config.ffplay_path = as_path(&self.ffplay_path_input);

        if let Some(ref config_path) = self.config_path {
            if let Err(e) = self.config.save_to(config_path) {
                log::warn!("Failed to save config to {}: {}", config_path.display(), e);
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> Option<UserAction> {
        let mut action = None;

        ui.label(self.folder_label());
        if ui.button("Browse").clicked() {
            action = Some(UserAction::SelectFolder);
        }
        ui.add_space(8.0);

        ui.label("FFmpeg Path:");
        ui.add(egui::TextEdit::singleline(&mut self.ffmpeg_path_input).desired_width(f32::INFINITY));
        if ui.button("Browse").clicked() {
            action = Some(UserAction::SelectEncoder);
        }
        ui.add_space(8.0);

        ui.label("FFplay Path:");
        ui.add(egui::TextEdit::singleline(&mut self.ffplay_path_input).desired_width(f32::INFINITY));
        if ui.button("Browse").clicked() {
            action = Some(UserAction::SelectPlayer);
        }
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Generate Video").clicked() {
                action = Some(UserAction::Generate);
            }
            if ui.button("Play Video").clicked() {
                action = Some(UserAction::Play);
            }
        });

        action
    }
}

impl eframe::App for ImageClipsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if self.status_message.is_empty() {
                ui.label(format!("Output: {}", self.output_path().display()));
            } else {
                ui.label(&self.status_message);
            }
        });

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_form(ui))
            .inner;

        // Runs outside the panel so dialogs and encoding don't hold the ui borrow
        if let Some(action) = action {
            self.dispatch(action);
        }
    }
}
