//! Log-based rendering of UI transitions.

use chrono::Local;
use ehr_application::UiUpdate;
use ehr_domain::format_timestamp;
use tokio::sync::broadcast::{self, error::RecvError};

/// Writes every update to the log until the coordinator goes away.
pub async fn run(mut updates: broadcast::Receiver<UiUpdate>) {
    loop {
        match updates.recv().await {
            Ok(update) => tracing::info!(target: "ehr::ui", "{}", describe(&update)),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Renderer fell behind; some updates were dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// One-line description of an update.
pub fn describe(update: &UiUpdate) -> String {
    match update {
        UiUpdate::ToastShown { toast } => format!(
            "{} {} ({})",
            toast.severity.icon(),
            toast.message,
            format_timestamp(&toast.created_at.with_timezone(&Local))
        ),
        UiUpdate::ToastFading { id } => format!("toast {id} fading"),
        UiUpdate::ToastRemoved { id } => format!("toast {id} removed"),
        UiUpdate::OverlayShown { message } => format!("[loading] {message}"),
        UiUpdate::OverlayHidden => "[loading] done".to_string(),
        UiUpdate::ApiStatusChanged { status } => {
            format!("API {} [{}]", status.label(), status.badge_class())
        }
        UiUpdate::ThemeApplied { theme } => format!("theme: {}", theme.mode_label()),
        UiUpdate::SidebarChanged { open } => {
            format!("sidebar {}", if *open { "open" } else { "closed" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehr_domain::{ApiStatus, Severity, ThemePreference, ToastEntry};
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_status_and_theme() {
        assert_eq!(
            describe(&UiUpdate::ApiStatusChanged {
                status: ApiStatus::Offline
            }),
            "API ● Offline [badge-error]"
        );
        assert_eq!(
            describe(&UiUpdate::ThemeApplied {
                theme: ThemePreference::Light
            }),
            "theme: Day Mode"
        );
        assert_eq!(
            describe(&UiUpdate::OverlayShown {
                message: "Enhancing image...".to_string()
            }),
            "[loading] Enhancing image..."
        );
    }

    #[test]
    fn toast_line_carries_icon_and_message() {
        let now = chrono::Utc::now();
        let toast = ToastEntry::new("Clinical note generated", Severity::Success, now);
        let line = describe(&UiUpdate::ToastShown { toast });
        assert!(line.starts_with(Severity::Success.icon()));
        assert!(line.contains("Clinical note generated"));
    }
}
