#[cfg(test)]
mod tests {

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use crate::core::AppConfig;
    use crate::gui::app::{ImageClipsApp, UserAction};
    use crate::gui::dialogs::{Dialogs, Feedback};

    #[derive(Default)]
    struct DialogLog {
        picks: VecDeque<Option<PathBuf>>,
        messages: Vec<(Feedback, String)>,
    }

    // Answers pickers from a queue and records every message box
    struct RecordingDialogs(Rc<RefCell<DialogLog>>);

    impl Dialogs for RecordingDialogs {
        fn pick_folder(&mut self, _title: &str) -> Option<PathBuf> {
            self.0.borrow_mut().picks.pop_front().flatten()
        }

        fn pick_executable(&mut self, _title: &str) -> Option<PathBuf> {
            self.0.borrow_mut().picks.pop_front().flatten()
        }

        fn notify(&mut self, feedback: Feedback, _title: &str, message: &str) {
            self.0.borrow_mut().messages.push((feedback, message.to_string()));
        }
    }

    fn create_test_app(output: &Path) -> (ImageClipsApp, Rc<RefCell<DialogLog>>) {
        let log = Rc::new(RefCell::new(DialogLog::default()));
        let mut config = AppConfig::default();
        config.output_path = output.to_path_buf();
        let app = ImageClipsApp::with_dialogs(config, Box::new(RecordingDialogs(log.clone())));
        (app, log)
    }

    fn last_message(log: &Rc<RefCell<DialogLog>>) -> (Feedback, String) {
        log.borrow().messages.last().cloned().expect("a dialog should have been shown")
    }

    #[test]
    fn test_app_initialization() {
        let dir = tempfile::tempdir().unwrap();
        let (app, log) = create_test_app(&dir.path().join("out.mp4"));

        assert!(app.image_folder.is_none());
        assert!(app.ffmpeg_path_input.is_empty());
        assert!(app.ffplay_path_input.is_empty());
        assert!(app.config_path.is_none());
        assert_eq!(app.folder_label(), "Select Images Folder:");
        assert!(log.borrow().messages.is_empty());
    }

    #[test]
    fn test_tool_paths_prefilled_from_config() {
        let mut config = AppConfig::default();
        config.ffmpeg_path = Some(PathBuf::from("/usr/bin/ffmpeg"));
        config.ffplay_path = Some(PathBuf::from("/usr/bin/ffplay"));
        let log = Rc::new(RefCell::new(DialogLog::default()));
        let app = ImageClipsApp::with_dialogs(config, Box::new(RecordingDialogs(log)));

        assert_eq!(app.ffmpeg_path_input, "/usr/bin/ffmpeg");
        assert_eq!(app.ffplay_path_input, "/usr/bin/ffplay");
    }

    #[test]
    fn test_select_folder_updates_label() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));

        log.borrow_mut().picks.push_back(Some(PathBuf::from("/photos/trip")));
        app.dispatch(UserAction::SelectFolder);
        assert_eq!(app.image_folder, Some(PathBuf::from("/photos/trip")));
        assert_eq!(app.folder_label(), format!("Selected Folder: {}", Path::new("/photos/trip").display()));

        // Cancelling keeps the previous choice
        log.borrow_mut().picks.push_back(None);
        app.dispatch(UserAction::SelectFolder);
        assert_eq!(app.image_folder, Some(PathBuf::from("/photos/trip")));
    }

    #[test]
    fn test_select_executables_fill_fields() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));

        log.borrow_mut().picks.push_back(Some(PathBuf::from("/tools/ffmpeg")));
        log.borrow_mut().picks.push_back(Some(PathBuf::from("/tools/ffplay")));
        app.dispatch(UserAction::SelectEncoder);
        app.dispatch(UserAction::SelectPlayer);

        assert_eq!(app.ffmpeg_path_input, "/tools/ffmpeg");
        assert_eq!(app.ffplay_path_input, "/tools/ffplay");
        assert_eq!(app.config.ffmpeg_path, Some(PathBuf::from("/tools/ffmpeg")));
        assert_eq!(app.config.ffplay_path, Some(PathBuf::from("/tools/ffplay")));
    }

    #[test]
    fn test_generate_without_folder_warns() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));
        app.ffmpeg_path_input = "ffmpeg".to_string();
        app.ffplay_path_input = "ffplay".to_string();

        app.dispatch(UserAction::Generate);

        assert_eq!(last_message(&log), (Feedback::Warning, "Please select an images folder.".to_string()));
    }

    #[test]
    fn test_generate_with_empty_tool_path_warns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        let output = dir.path().join("out.mp4");
        let (mut app, log) = create_test_app(&output);
        app.image_folder = Some(dir.path().to_path_buf());
        app.ffmpeg_path_input = "   ".to_string();
        // Would fail with a critical dialog if it were ever run
        app.ffplay_path_input = "/definitely/not/here/ffplay".to_string();

        app.dispatch(UserAction::Generate);

        assert_eq!(
            last_message(&log),
            (Feedback::Warning, "Please provide paths for FFmpeg and FFplay.".to_string())
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_with_no_images_warns_and_keeps_output() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir(&images).unwrap();
        std::fs::write(images.join("notes.txt"), b"x").unwrap();
        let output = dir.path().join("out.mp4");
        std::fs::write(&output, b"previous").unwrap();

        let (mut app, log) = create_test_app(&output);
        app.image_folder = Some(images);
        app.ffmpeg_path_input = "ffmpeg".to_string();
        app.ffplay_path_input = "ffplay".to_string();

        app.dispatch(UserAction::Generate);

        assert_eq!(
            last_message(&log),
            (Feedback::Warning, "No images found in the selected folder.".to_string())
        );
        assert_eq!(std::fs::read(&output).unwrap(), b"previous");
    }

    #[test]
    fn test_encoder_failure_is_critical_and_app_stays_usable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));
        app.image_folder = Some(dir.path().to_path_buf());
        app.ffmpeg_path_input = "/definitely/not/here/ffmpeg".to_string();
        app.ffplay_path_input = "ffplay".to_string();

        app.dispatch(UserAction::Generate);

        let (feedback, message) = last_message(&log);
        assert_eq!(feedback, Feedback::Critical);
        assert!(message.starts_with("An error occurred: Failed to start ffmpeg"));
        assert_eq!(app.status_message, message);

        // Another action still goes through afterwards
        app.dispatch(UserAction::Play);
        assert_eq!(log.borrow().messages.len(), 2);
    }

    #[test]
    fn test_play_before_generate_warns() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));
        app.ffplay_path_input = "ffplay".to_string();

        app.dispatch(UserAction::Play);

        assert_eq!(
            last_message(&log),
            (Feedback::Warning, "No video found. Please generate a video first.".to_string())
        );
    }

    #[test]
    fn test_play_without_player_path_warns() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.mp4");
        std::fs::write(&output, b"x").unwrap();
        let (mut app, log) = create_test_app(&output);

        app.dispatch(UserAction::Play);

        assert_eq!(
            last_message(&log),
            (Feedback::Warning, "Please provide the path to FFplay.".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_always_targets_configured_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.mp4");
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        for folder in [&first, &second] {
            std::fs::create_dir(folder).unwrap();
            std::fs::write(folder.join("001.png"), b"x").unwrap();
        }

        let (mut app, log) = create_test_app(&output);
        app.ffmpeg_path_input = "true".to_string();
        app.ffplay_path_input = "true".to_string();

        for folder in [first, second] {
            app.image_folder = Some(folder);
            app.dispatch(UserAction::Generate);
            assert_eq!(
                last_message(&log),
                (Feedback::Information, format!("Video saved as {}", output.display()))
            );
        }
    }

    #[test]
    fn test_tool_paths_persisted_when_config_path_set() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        let (mut app, log) = create_test_app(&dir.path().join("out.mp4"));
        app.config_path = Some(config_path.clone());

        log.borrow_mut().picks.push_back(Some(PathBuf::from("/tools/ffmpeg")));
        app.dispatch(UserAction::SelectEncoder);

        let saved = AppConfig::load_from(&config_path).unwrap();
        assert_eq!(saved.ffmpeg_path, Some(PathBuf::from("/tools/ffmpeg")));
        assert!(saved.ffplay_path.is_none());
    }

    #[test]
    fn test_unwritable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be
        let blocker = dir.path().join("image-clips");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let (config, config_path) = ImageClipsApp::load_config(&blocker.join("config.json"));
        assert!(config_path.is_none());
        assert_eq!(config.output_path, PathBuf::from("output_video.mp4"));
        assert!(config.ffmpeg_path.is_none());

        let log = Rc::new(RefCell::new(DialogLog::default()));
        let mut app = ImageClipsApp::with_dialogs(config, Box::new(RecordingDialogs(log.clone())));
        app.config_path = config_path;

        // Picking a tool still works, it just isn't saved
        log.borrow_mut().picks.push_back(Some(PathBuf::from("/tools/ffmpeg")));
        app.dispatch(UserAction::SelectEncoder);
        assert_eq!(app.ffmpeg_path_input, "/tools/ffmpeg");
        assert!(blocker.is_file());
    }

    #[test]
    fn test_load_config_keeps_path_when_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image-clips").join("config.json");

        let (config, config_path) = ImageClipsApp::load_config(&path);
        assert_eq!(config_path, Some(path.clone()));
        assert_eq!(config.fps, 1);
        assert!(path.exists());
    }

}
