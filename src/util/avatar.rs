//! Avatar URL normalization and the inline styles applied to nav avatars.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Styles every nav avatar gets, whether or not a profile image loaded.
pub const AVATAR_FRAME_STYLE: &[(&str, &str)] = &[
    ("width", "32px"),
    ("height", "32px"),
    ("min-width", "32px"),
    ("min-height", "32px"),
    ("border-radius", "50%"),
    ("cursor", "pointer"),
];

/// Extra styles for `<img>` avatars once `src` is set.
pub const AVATAR_IMAGE_STYLE: &[(&str, &str)] = &[("object-fit", "cover"), ("display", "block")];

/// Normalize a stored profile image path into something usable as a URL.
///
/// Absolute `http(s)` URLs and root-relative paths pass through; bare
/// relative paths gain a single leading slash; blank input stays empty.
pub fn normalize_avatar_url(path: &str) -> String {
    let value = path.trim();
    if value.is_empty() {
        return String::new();
    }
    if value.starts_with("http://") || value.starts_with("https://") || value.starts_with('/') {
        return value.to_owned();
    }
    format!("/{value}")
}

/// Cover-background styles for non-image avatar elements.
pub fn background_style(url: &str) -> [(&'static str, String); 3] {
    [
        ("background-image", format!("url('{}')", url.replace('\'', "%27"))),
        ("background-size", "cover".to_owned()),
        ("background-position", "center".to_owned()),
    ]
}
