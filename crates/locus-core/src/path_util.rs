//! Path string helpers
//!
//! Locations are opaque strings with `/` as separator and an optional
//! `scheme://authority` head. Nothing here touches a filesystem.

/// Strip trailing `/` characters
///
/// The `//` of a `scheme://` terminator is preserved, so `"s3://"` stays as is.
pub fn strip_trailing_slash(path: &str) -> &str {
    let mut end = path.len();
    while end > 0 && path[..end].ends_with('/') && !path[..end].ends_with("://") {
        end -= 1;
    }
    &path[..end]
}

/// Split a location into its `scheme://authority` head and path part
fn split_head(path: &str) -> (&str, &str) {
    match path.find("://") {
        Some(idx) => {
            let after = idx + 3;
            let end = path[after..]
                .find('/')
                .map(|offset| after + offset)
                .unwrap_or(path.len());
            path.split_at(end)
        }
        None => ("", path),
    }
}

/// Normalize a location
///
/// Keeps the `scheme://authority` head verbatim, collapses runs of `/` in the
/// path part and drops a trailing `/` unless the path part is the root.
///
/// ```
/// use locus_core::path_util::normalize;
///
/// assert_eq!(normalize("s3://bucket//db///table/"), "s3://bucket/db/table");
/// assert_eq!(normalize("s3://bucket/"), "s3://bucket/");
/// ```
pub fn normalize(path: &str) -> String {
    let (head, rest) = split_head(path);
    let mut out = String::with_capacity(path.len());
    out.push_str(head);

    let mut prev_slash = false;
    for ch in rest.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }

    if out.len() > head.len() + 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Final segment of a location, `""` for an empty or root path part
pub fn name(path: &str) -> String {
    let normalized = normalize(path);
    let (_, rest) = split_head(&normalized);
    rest.rsplit('/').next().unwrap_or_default().to_string()
}

/// Location with the final segment removed
///
/// `None` when the path part is empty, the root, or a single bare segment.
pub fn parent(path: &str) -> Option<String> {
    let normalized = normalize(path);
    let (head, rest) = split_head(&normalized);
    if rest.is_empty() || rest == "/" {
        return None;
    }

    match rest.rfind('/') {
        None => None,
        Some(0) => Some(format!("{}/", head)),
        Some(idx) => Some(format!("{}{}", head, &rest[..idx])),
    }
}
