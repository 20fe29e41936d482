//! Rendering generated batches for export and clipboard.

use chrono::Local;

use super::generate::GeneratedPassword;

/// One numbered export line: `"{index}. {password} ({length} chars)\n"`.
/// Indexing is 1-based.
pub fn export_line(index: usize, password: &str) -> String {
    format!(
        "{}. {} ({} chars)\n",
        index + 1,
        password,
        password.chars().count()
    )
}

/// Full plain-text export: a timestamped header followed by one numbered
/// line per password.
pub fn render_export(batch: &[GeneratedPassword]) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut out = String::new();
    out.push_str(&format!("Password Export - {timestamp}\n"));
    out.push_str(&format!("Total Passwords: {}\n\n", batch.len()));

    for (index, item) in batch.iter().enumerate() {
        out.push_str(&export_line(index, &item.value));
    }
    out
}

/// Newline-joined passwords for clipboard transfer.
pub fn clipboard_text(batch: &[GeneratedPassword]) -> String {
    batch
        .iter()
        .map(|p| p.value.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
