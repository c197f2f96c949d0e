#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Quiz,
    Admin,
}

/// Pick the view for a URL-like route such as `/quiz/admin/` or `#/admin`.
///
/// The path part is compared case-insensitively after collapsing repeated
/// slashes and dropping a trailing one; a bare `admin` counts as `/admin`.
pub fn resolve(route: &str) -> View {
    let (path, hash) = match route.find('#') {
        Some(pos) => (&route[..pos], &route[pos..]),
        None => (route, ""),
    };

    let mut clean = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        clean.push('/');
    }
    for c in path.chars() {
        if c == '/' && clean.ends_with('/') {
            continue;
        }
        clean.push(c);
    }
    let clean = clean.trim_end_matches('/').to_lowercase();

    if clean.ends_with("/admin") || hash.to_lowercase() == "#/admin" {
        View::Admin
    } else {
        View::Quiz
    }
}
