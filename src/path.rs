//! Ping URL composition.

use url::Url;

use crate::error::{Error, Result};

/// Joins `segments` onto `base`, preserving any path prefix the base URL
/// already carries.
///
/// Segments may contain `/` separators of their own (a check path parsed
/// from a full URL, a suffix like "/start"); each piece between separators
/// becomes one percent-encoded path segment and empty pieces are dropped.
pub(crate) fn compose(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut parts = url.path_segments_mut().map_err(|_| Error::InvalidUrl {
            url: base.as_str().to_owned(),
            reason: "URL cannot carry path segments".to_owned(),
        })?;
        parts.pop_if_empty();
        for piece in segments
            .iter()
            .flat_map(|segment| segment.split('/'))
            .filter(|piece| !piece.is_empty())
        {
            parts.push(piece);
        }
    }
    Ok(url)
}
