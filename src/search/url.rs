/// Build a keyword search URL under `base_url`.
///
/// The search term is percent-encoded and `refresh=true` is appended as a
/// cache-buster so repeated searches are not served stale results.
pub fn keyword_search_url(base_url: &str, path: &str, term: &str) -> String {
    format!(
        "{}/{}?keywords={}&refresh=true",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/'),
        urlencoding::encode(term)
    )
}

/// Strip tracking query parameters from a profile URL.
///
/// Everything from the first `?` onward goes; profile links carry `trk=`
/// and similar parameters that make otherwise-identical URLs differ.
pub fn normalize_profile_url(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => url.to_string(),
    }
}
