use chrono::Utc;
use uuid::Uuid;

/// Extension after the last dot, or `None` when the name has no dot.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Collision-resistant stored name: `{prefix}{base}_{millis}_{suffix}.{ext}`.
///
/// The suffix is the first 8 hex chars of a v4 uuid; uploads of the same
/// original name in the same millisecond still diverge.
pub fn stored_file_name(prefix: &str, original_file_name: &str) -> String {
    let (base, ext) = original_file_name
        .rsplit_once('.')
        .unwrap_or((original_file_name, ""));

    let timestamp = Utc::now().timestamp_millis();
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = &uuid[..8];

    format!("{prefix}{base}_{timestamp}_{suffix}.{ext}")
}

/// Human-readable size using base-1024 units, at most one decimal place.
pub fn format_file_size(size_in_bytes: i64) -> String {
    if size_in_bytes <= 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = size_in_bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{} {}", rounded.trunc() as i64, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}
