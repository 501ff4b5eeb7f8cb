use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

use crate::render::RenderError;

/// Append the failure detail to the server log for operator diagnosis
/// and mirror it to stderr. The HTTP client only ever sees the generic
/// error body.
pub fn log_render_failure(error: &RenderError) {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let log_entry = format!("{} | render failure | {}\n", timestamp, error);

    eprintln!("Error rendering SSR: {}", error);

    // Use /app/server.log in Docker, ./server.log locally
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./server.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}
