/// Reduces an image URL to its identifying form: the first `id=` query
/// parameter is kept verbatim, every other parameter is dropped.
pub fn canonicalize(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    match query.split('&').find(|param| param.starts_with("id=")) {
        Some(id) => format!("{base}?{id}"),
        None => base.to_string(),
    }
}
