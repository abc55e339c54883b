/// Canonicalizes a slash separated path into `.` or `./seg1/seg2/...` form.
///
/// Trims whitespace, collapses repeated `/`, strips the edge slashes and
/// prepends the `./` prefix when missing. Degenerate inputs (``, `/`,
/// whitespace-only) all normalize to `.`, so a cleaned path never contains an
/// empty name segment. Idempotent.
pub fn clean_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.split_first() {
        None => String::from("."),
        Some((&".", rest)) if rest.is_empty() => String::from("."),
        Some((&".", rest)) => format!("./{}", rest.join("/")),
        Some(_) => format!("./{}", segments.join("/")),
    }
}
