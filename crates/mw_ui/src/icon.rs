//! Centralized inline-SVG icon set.

use leptos::*;
use style_resolver::{ClassList, VariantAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to components and pages.
pub enum IconName {
    /// Magnifier.
    Search,
    /// Envelope.
    Mail,
    /// Padlock.
    Lock,
    /// Person silhouette.
    User,
    /// Eye (reveal).
    Eye,
    /// Circled exclamation mark.
    AlertCircle,
    /// Warning triangle.
    AlertTriangle,
    /// Circled `i`.
    Info,
    /// Circled check mark.
    CheckCircle,
    /// Plus sign.
    Plus,
    /// Downward arrow into tray.
    Download,
}

impl IconName {
    /// Stable kebab-case icon name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Mail => "mail",
            Self::Lock => "lock",
            Self::User => "user",
            Self::Eye => "eye",
            Self::AlertCircle => "alert-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::Info => "info",
            Self::CheckCircle => "check-circle",
            Self::Plus => "plus",
            Self::Download => "download",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        const CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z";
        match self {
            Self::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            Self::Mail => &["M4 5h16a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1z", "M3 7l9 6 9-6"],
            Self::Lock => &["M5 11h14v10H5z", "M8 11V7a4 4 0 0 1 8 0v4"],
            Self::User => &["M20 21a8 8 0 0 0-16 0", "M12 13a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
            Self::Eye => &[
                "M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z",
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::AlertCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
            Self::AlertTriangle => &[
                "M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::Info => &[CIRCLE, "M12 16v-4", "M12 8h.01"],
            Self::CheckCircle => &[CIRCLE, "M9 12l2 2 4-4"],
            Self::Plus => &["M12 5v14", "M5 12h14"],
            Self::Download => &["M12 3v12", "M7 10l5 5 5-5", "M5 21h14"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon box sizes.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for IconSize {
    const AXIS: &'static str = "icon size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
            Self::Lg => "h-6 w-6",
        }
    }
}

pub(crate) const ICON_BASE: &str = "inline-block shrink-0";

/// Resolves the class list for an [`Icon`].
pub fn icon_classes(size: IconSize, class_override: Option<&str>) -> String {
    ClassList::new(ICON_BASE)
        .variant(size)
        .class_override(class_override)
        .resolve()
}

#[component]
/// Decorative stroke icon. Hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] class_override: Option<String>,
    /// Inline CSS color, for tints that must not depend on the utility stylesheet.
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    view! {
        <svg
            class=icon_classes(size, class_override.as_deref())
            style=color.map(|color| format!("color: {color}"))
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon
                .paths()
                .iter()
                .copied()
                .map(|data| view! { <path d=data></path> })
                .collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_override_replaces_box() {
        assert_eq!(icon_classes(IconSize::Md, None), "inline-block shrink-0 h-5 w-5");
        assert_eq!(
            icon_classes(IconSize::Sm, Some("h-3 text-[#999]")),
            "inline-block shrink-0 w-4 h-3 text-[#999]"
        );
    }

    #[test]
    fn every_icon_has_paths() {
        for icon in [
            IconName::Search,
            IconName::Mail,
            IconName::Lock,
            IconName::User,
            IconName::Eye,
            IconName::AlertCircle,
            IconName::AlertTriangle,
            IconName::Info,
            IconName::CheckCircle,
            IconName::Plus,
            IconName::Download,
        ] {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.token());
        }
    }
}
