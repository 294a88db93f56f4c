//! Graft query extraction.
//!
//! A graft visit is signalled by a reserved query key whose value is a
//! dotted path into the page (`/posts?bzq=data.comments`). Only the presence
//! of a non-empty value matters to the classifier.

/// Decoded value of the first `key` in `url`'s query string.
///
/// Works on relative and absolute URLs alike. The fragment is ignored and
/// the query is decoded as `application/x-www-form-urlencoded`.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment.split_once('?')?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// The graft path carried by `url`, if `param` is present with a value.
pub fn graft_path(url: &str, param: &str) -> Option<String> {
    query_param(url, param).filter(|path| !path.is_empty())
}
