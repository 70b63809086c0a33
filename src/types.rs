use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Credential for the device directory.
///
/// The key is carried as-is; an empty key is representable since the
/// directory, not this crate, decides whether a credential is acceptable.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for ApiKey {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Keep the credential out of debug output
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ApiKey> for String {
    fn from(value: ApiKey) -> Self {
        value.0
    }
}
