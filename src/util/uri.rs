use http::uri::{InvalidUri, InvalidUriParts, PathAndQuery, Uri};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UriError {
    #[error(transparent)]
    InvalidUri(#[from] InvalidUri),

    #[error(transparent)]
    InvalidUriParts(#[from] InvalidUriParts),
}

/// Join a base URI with a request path, replacing anything after the
/// authority.
pub fn make_uri(base_uri: Uri, path: &str) -> Result<Uri, UriError> {
    let mut parts = base_uri.into_parts();
    parts.path_and_query = Some(PathAndQuery::from_str(path)?);
    Uri::from_parts(parts).map_err(|err| err.into())
}
