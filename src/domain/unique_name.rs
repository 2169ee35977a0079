use chrono::{DateTime, Utc};

/// Derives the name decoded bytes are stored under: the client-supplied name
/// with the Unix timestamp (second resolution) appended.
///
/// Two uploads with the same original name within the same second produce
/// the same name; callers accept that window. Client names may carry path
/// separators, so only the final component is kept.
pub fn unique_file_name(original: &str, at: DateTime<Utc>) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("upload");
    format!("{}{}", base, at.timestamp())
}
