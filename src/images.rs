//! Image URL helpers

/// Build an image URL: `{base}/{format}/{path}`, `format` defaults to `original`.
/// An empty path gives an empty string.
pub fn make_image_path(base: &str, path: &str, format: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return String::new();
    }
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        format.unwrap_or("original"),
        path
    )
}

/// CSS `background-image` value for an image URL, optionally under a dark gradient
pub fn background_image(url: &str, dimmed: bool) -> String {
    match (url.is_empty(), dimmed) {
        (true, true) => "background-image: linear-gradient(rgba(0,0,0,0.5),rgba(0,0,0,0.5));".to_string(),
        (true, false) => String::new(),
        (false, true) => format!(
            "background-image: linear-gradient(rgba(0,0,0,0.5),rgba(0,0,0,0.5)), url(\"{}\");",
            url
        ),
        (false, false) => format!("background-image: url(\"{}\");", url),
    }
}
