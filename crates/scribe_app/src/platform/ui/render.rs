use scribe_core::AppViewModel;

const RULE: &str = "------------------------------------------------------------";

/// Lines to print for the transition from `prev` to `next`.
///
/// The panel section is only reprinted when it changed, so a button label
/// flipping back does not dump the whole transcript again.
pub fn render_changes(prev: Option<&AppViewModel>, next: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let hint_changed = prev.is_none_or(|p| p.input_hint != next.input_hint || p.input != next.input);
    if hint_changed {
        if let Some(hint) = next.input_hint {
            lines.push(format!("! {hint}"));
        }
    }

    let panels_changed = prev.is_none_or(|p| {
        p.panels != next.panels
            || p.error_message != next.error_message
            || p.result_text != next.result_text
    });
    if panels_changed {
        lines.extend(render_panels(next));
    }

    let buttons_changed = prev.is_none_or(|p| {
        p.outline_button != next.outline_button
            || p.copy_button != next.copy_button
            || p.submit_enabled != next.submit_enabled
            || p.ignored_submissions != next.ignored_submissions
    });
    if buttons_changed || panels_changed {
        lines.push(render_buttons(next));
    }

    lines
}

fn render_panels(view: &AppViewModel) -> Vec<String> {
    if view.panels.loading {
        return vec!["... working".to_string()];
    }
    if view.panels.error {
        let message = view.error_message.as_deref().unwrap_or_default();
        return vec![format!("[error] {message}")];
    }
    if let Some(text) = view.result_text.as_deref() {
        let mut lines = Vec::with_capacity(text.lines().count() + 2);
        lines.push(RULE.to_string());
        lines.extend(text.lines().map(ToOwned::to_owned));
        lines.push(RULE.to_string());
        return lines;
    }
    Vec::new()
}

fn render_buttons(view: &AppViewModel) -> String {
    let outline = if view.outline_enabled {
        format!("[{}]", view.outline_label())
    } else {
        format!("({})", view.outline_label())
    };
    let submit = if view.submit_enabled {
        "[Extract]"
    } else {
        "(Extracting...)"
    };
    format!("{submit} {outline} [{}]", view.copy_label())
}

#[cfg(test)]
mod tests {
    use scribe_core::{CopyButtonState, OutlineButtonState, PanelVisibility, INVALID_URL_HINT};

    use super::*;

    fn result_view(text: &str) -> AppViewModel {
        AppViewModel {
            panels: PanelVisibility {
                result: true,
                ..PanelVisibility::default()
            },
            result_text: Some(text.to_string()),
            submit_enabled: true,
            outline_enabled: true,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn first_render_shows_result_between_rules() {
        let lines = render_changes(None, &result_view("line one\nline two"));
        assert_eq!(
            lines,
            vec![
                RULE.to_string(),
                "line one".to_string(),
                "line two".to_string(),
                RULE.to_string(),
                "[Extract] [Generate Outline] [Copy]".to_string(),
            ]
        );
    }

    #[test]
    fn label_change_does_not_reprint_result() {
        let before = result_view("T");
        let after = AppViewModel {
            copy_button: CopyButtonState::Confirmed,
            ..before.clone()
        };
        assert_eq!(
            render_changes(Some(&before), &after),
            vec!["[Extract] [Generate Outline] [Copied!]".to_string()]
        );
    }

    #[test]
    fn busy_outline_and_error_rendering() {
        let loading = AppViewModel {
            panels: PanelVisibility {
                loading: true,
                ..PanelVisibility::default()
            },
            submit_enabled: true,
            outline_button: OutlineButtonState::Busy,
            outline_enabled: false,
            ..AppViewModel::default()
        };
        assert_eq!(
            render_changes(None, &loading),
            vec![
                "... working".to_string(),
                "[Extract] (Generating Outline...) [Copy]".to_string(),
            ]
        );

        let error = AppViewModel {
            panels: PanelVisibility {
                error: true,
                ..PanelVisibility::default()
            },
            error_message: Some("E".to_string()),
            input: "bad".to_string(),
            input_hint: Some(INVALID_URL_HINT),
            ..loading.clone()
        };
        let lines = render_changes(Some(&loading), &error);
        assert_eq!(lines[0], format!("! {INVALID_URL_HINT}"));
        assert_eq!(lines[1], "[error] E");
    }

    #[test]
    fn ignored_submit_reprints_button_row() {
        let extracting = AppViewModel {
            panels: PanelVisibility {
                loading: true,
                ..PanelVisibility::default()
            },
            submit_enabled: false,
            outline_enabled: true,
            ..AppViewModel::default()
        };
        let after = AppViewModel {
            ignored_submissions: 1,
            ..extracting.clone()
        };
        assert_eq!(
            render_changes(Some(&extracting), &after),
            vec!["(Extracting...) [Generate Outline] [Copy]".to_string()]
        );
    }
}
