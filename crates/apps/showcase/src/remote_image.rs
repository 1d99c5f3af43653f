//! Remote image rendering restricted to known asset hosts.

use leptos::*;

/// Allowed source for remote images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemotePattern {
    /// URL scheme without `://`.
    pub protocol: &'static str,
    /// Exact host name; ports and credentials are never allowed.
    pub hostname: &'static str,
    /// Path glob. A trailing `/**` matches any path below the prefix.
    pub pathname: &'static str,
}

/// Hosts the showcase may load images from.
pub const REMOTE_IMAGE_PATTERNS: &[RemotePattern] = &[RemotePattern {
    protocol: "https",
    hostname: "mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com",
    pathname: "/**",
}];

impl RemotePattern {
    /// Whether `url` is served by this pattern.
    pub fn matches(&self, url: &str) -> bool {
        let Some(rest) = url
            .strip_prefix(self.protocol)
            .and_then(|rest| rest.strip_prefix("://"))
        else {
            return false;
        };
        let (host, path) = match rest.find(['/', '?', '#']) {
            Some(idx) => rest.split_at(idx),
            None => (rest, "/"),
        };
        if host != self.hostname {
            return false;
        }
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };

        match self.pathname.strip_suffix("/**") {
            Some(prefix) => path == prefix || path.starts_with(&format!("{prefix}/")),
            None => path == self.pathname,
        }
    }
}

/// Whether any configured pattern allows `url`.
pub fn is_allowed_remote_image(url: &str) -> bool {
    REMOTE_IMAGE_PATTERNS
        .iter()
        .any(|pattern| pattern.matches(url))
}

#[component]
/// `<img>` for an allow-listed remote URL; otherwise the alt text.
pub fn RemoteImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    if !is_allowed_remote_image(&src) {
        logging::warn!("remote image blocked, host not allow-listed: {src}");
        return view! { <span class=layout_class data-ui-kind="remote-image-fallback">{alt}</span> }
            .into_view();
    }

    view! {
        <img
            src=src
            alt=alt
            width=width
            height=height
            class=layout_class
            loading="eager"
            data-ui-kind="remote-image"
        />
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_host_is_allowed() {
        assert!(is_allowed_remote_image(
            "https://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com/mw_horizontal.png"
        ));
        assert!(is_allowed_remote_image(
            "https://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com/brand/logo.svg?v=2"
        ));
    }

    #[test]
    fn other_hosts_and_schemes_are_rejected() {
        assert!(!is_allowed_remote_image("https://example.com/mw_horizontal.png"));
        assert!(!is_allowed_remote_image(
            "http://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com/mw_horizontal.png"
        ));
        assert!(!is_allowed_remote_image(
            "https://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com.evil.test/logo.png"
        ));
        assert!(!is_allowed_remote_image(
            "https://user@mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com/logo.png"
        ));
        assert!(!is_allowed_remote_image(
            "https://mwi-ecommerce-inventory.s3.us-east-2.amazonaws.com:8443/logo.png"
        ));
    }

    #[test]
    fn exact_path_patterns() {
        let pattern = RemotePattern {
            protocol: "https",
            hostname: "cdn.test",
            pathname: "/assets/**",
        };
        assert!(pattern.matches("https://cdn.test/assets/a.png"));
        assert!(pattern.matches("https://cdn.test/assets"));
        assert!(!pattern.matches("https://cdn.test/assets-old/a.png"));
        assert!(!pattern.matches("https://cdn.test/"));

        let exact = RemotePattern {
            pathname: "/logo.png",
            ..pattern
        };
        assert!(exact.matches("https://cdn.test/logo.png"));
        assert!(!exact.matches("https://cdn.test/logo.png/x"));
    }
}
