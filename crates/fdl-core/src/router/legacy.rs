//! Legacy `scheme://<client>/<pluginId>/<payload>` decomposition.

/// Splits a legacy deep link into its decoded components.
///
/// The URI must look like `scheme://<authority>/<segment>[/]<rest>`, where
/// `<authority>` contains no `/`, `<segment>` contains neither `/` nor `?`,
/// and `<rest>` is everything that follows (query included) on a single line.
/// Each of the three parts is percent-decoded and empty parts are dropped, so
/// the result has between zero and three entries.
///
/// Returns an empty vec when the URI does not have that shape or a part does
/// not decode to valid UTF-8.
pub fn decompose_path(scheme: &str, uri: &str) -> Vec<String> {
    match split_legacy(scheme, uri) {
        Some(parts) => decode_parts(parts),
        None => Vec::new(),
    }
}

fn split_legacy<'a>(scheme: &str, uri: &'a str) -> Option<[&'a str; 3]> {
    let rest = uri.strip_prefix(scheme)?.strip_prefix("://")?;
    let (authority, after) = rest.split_once('/')?;
    let segment_end = after.find(|c: char| c == '/' || c == '?').unwrap_or(after.len());
    let (segment, tail) = after.split_at(segment_end);
    let tail = tail.strip_prefix('/').unwrap_or(tail);
    if tail.contains(is_line_terminator) {
        return None;
    }
    Some([authority, segment, tail])
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn decode_parts(parts: [&str; 3]) -> Vec<String> {
    let mut out = Vec::with_capacity(parts.len());
    for part in parts {
        match urlencoding::decode(part) {
            Ok(decoded) if !decoded.is_empty() => out.push(decoded.into_owned()),
            Ok(_) => {}
            Err(_) => return Vec::new(),
        }
    }
    out
}
