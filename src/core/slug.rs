/// Convert a display name into a URL-friendly slug
///
/// Example: "GitHub Copilot" -> "github-copilot"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        }
        // anything else is dropped without breaking the current word
    }

    slug
}

/// Append `-2`, `-3`, ... until the slug no longer collides
pub fn unique_slug(base: &str, existing: &[String]) -> String {
    let mut slug = base.to_string();
    let mut counter = 2;

    while existing.iter().any(|s| s == &slug) {
        slug = format!("{}-{}", base, counter);
        counter += 1;
    }

    slug
}
