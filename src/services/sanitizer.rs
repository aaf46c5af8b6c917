//! HTML clean-up for user-generated rich text.

use std::sync::LazyLock;

use ammonia::Builder;

static POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.link_rel(Some("nofollow noopener noreferrer"));
    builder
});

/// Keeps structural and formatting markup; drops scripts, styles, event handlers and
/// any other tag or attribute outside the allow-list.
pub fn sanitize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    POLICY.clean(html).to_string()
}

/// Sanitizes in place.
pub fn sanitize_in_place(html: &mut String) {
    *html = sanitize(html);
}
