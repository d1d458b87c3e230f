use crate::apply::ApplyReport;

pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname("colortheme")
        .summary("Color theme")
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}

/// Message naming every destination that could not be updated, if any.
pub fn failure_message(report: &ApplyReport) -> Option<String> {
    if report.is_success() {
        return None;
    }
    let names: Vec<&str> = report.failures.iter().map(|f| f.kind.name()).collect();
    Some(format!(
        "Theme \"{}\" could not be saved for: {}",
        report.theme,
        names.join(", ")
    ))
}
