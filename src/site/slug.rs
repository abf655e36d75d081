/// Derives an in-page anchor id from a menu label.
///
/// The label is lowercased and stripped of `&`, then every run of characters
/// outside `[a-z0-9]` becomes a single `-`, and one hyphen is trimmed from
/// each end. Never fails; `""` maps to `""`.
///
/// - "About Us" -> "about-us"
/// - "Duration & Fees" -> "duration-fees"
pub fn slugify(label: &str) -> String {
    let lowercase = label.to_lowercase();
    let mut slug = String::with_capacity(lowercase.len());
    let mut in_run = false;

    for c in lowercase.chars().filter(|&c| c != '&') {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }

    // Runs are already collapsed, so at most one hyphen sits on either edge.
    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_owned()
}
