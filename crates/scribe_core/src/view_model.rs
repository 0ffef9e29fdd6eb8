use crate::{CopyButtonState, OutlineButtonState, PanelVisibility};

/// Render-ready snapshot of [`crate::AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub input_hint: Option<&'static str>,
    pub panels: PanelVisibility,
    pub error_message: Option<String>,
    /// Only populated while the result panel is visible.
    pub result_text: Option<String>,
    pub submit_enabled: bool,
    /// Bumped each time a submit is turned away by the in-flight guard.
    pub ignored_submissions: u32,
    pub outline_button: OutlineButtonState,
    pub outline_enabled: bool,
    pub copy_button: CopyButtonState,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn outline_label(&self) -> &'static str {
        self.outline_button.label()
    }

    pub fn copy_label(&self) -> &'static str {
        self.copy_button.label()
    }
}
