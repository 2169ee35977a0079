use std::fmt;

/// Location of an object in blob storage, independent of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Staging area for raw uploads awaiting decoding.
    pub fn temp(token: &str) -> Self {
        Self(format!("files/temp/{}", token))
    }

    /// Permanent home of decoded audio bytes.
    pub fn audio(file_name: &str) -> Self {
        Self(format!("files/audio/{}", file_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
