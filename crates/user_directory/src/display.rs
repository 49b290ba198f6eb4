//! Values derived from a user record for its card: the initials badge and the
//! link targets for email and website.

/// Link target used when a user has no website.
pub const WEBSITE_PLACEHOLDER: &str = "#";
/// Text shown in place of an empty field.
pub const MISSING_VALUE: &str = "N/A";

/// Builds the initials badge from the first character of each of the first two
/// space-separated tokens of `name`, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ')
        .take(2)
        .filter_map(|token| token.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// Normalizes a raw website value into a link target. Values that already
/// carry an `http://` or `https://` scheme are kept as-is, anything else is
/// assumed to be a bare host and gets `http://` prepended.
#[must_use]
pub fn website_href(website: &str) -> String {
    if website.is_empty() {
        WEBSITE_PLACEHOLDER.to_string()
    } else if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("http://{website}")
    }
}

#[must_use]
pub fn website_label(website: &str) -> &str {
    if website.is_empty() {
        MISSING_VALUE
    } else {
        website
    }
}
