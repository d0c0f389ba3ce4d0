use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Information,
    Warning,
    Critical,
}

/// Native pickers and modal message boxes used by the app.
pub trait Dialogs {
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf>;
    fn pick_executable(&mut self, title: &str) -> Option<PathBuf>;
    fn notify(&mut self, feedback: Feedback, title: &str, message: &str);
}

/// Blocking `rfd` dialogs on the UI thread.
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_folder()
    }

    fn pick_executable(&mut self, title: &str) -> Option<PathBuf> {
        let dialog = rfd::FileDialog::new().set_title(title);
        #[cfg(windows)]
        let dialog = dialog.add_filter("Executable Files", &["exe"]);
        dialog.pick_file()
    }

    fn notify(&mut self, feedback: Feedback, title: &str, message: &str) {
        let level = match feedback {
            Feedback::Information => rfd::MessageLevel::Info,
            Feedback::Warning => rfd::MessageLevel::Warning,
            Feedback::Critical => rfd::MessageLevel::Error,
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
