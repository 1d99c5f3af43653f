use super::*;

pub(crate) const BADGE_BASE: &str =
    "inline-flex items-center gap-1 rounded-full px-3 py-1 text-xs font-semibold";
pub(crate) const ALERT_BASE: &str = "relative w-full rounded-lg border p-4";
pub(crate) const ALERT_TITLE_BASE: &str = "mb-1 font-semibold leading-none tracking-tight";
pub(crate) const ALERT_DESCRIPTION_BASE: &str = "text-sm leading-relaxed";
pub(crate) const CARD_BASE: &str = "mw-card p-6";
pub(crate) const CARD_HEADER_BASE: &str =
    "flex items-start justify-between gap-4 border-b border-mw-light-grey/40 pb-4";
pub(crate) const CARD_CONTENT_BASE: &str = "pt-4 space-y-4";
pub(crate) const CARD_TITLE_BASE: &str = "text-lg font-semibold text-mw-black";
pub(crate) const CARD_FOOTER_BASE: &str =
    "flex items-center justify-end gap-3 border-t border-mw-light-grey/40 pt-4";
pub(crate) const AVATAR_BASE: &str =
    "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full";
pub(crate) const AVATAR_IMAGE_BASE: &str = "aspect-square h-full w-full object-cover";
pub(crate) const AVATAR_FALLBACK_BASE: &str = "flex h-full w-full items-center justify-center rounded-full bg-mw-panel-grey text-sm font-semibold text-mw-grey";

/// Resolves the class list for a [`Badge`].
pub fn badge_classes(tone: BadgeTone, class_override: Option<&str>) -> String {
    ClassList::new(BADGE_BASE)
        .variant(tone)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for an [`Alert`].
pub fn alert_classes(variant: AlertVariant, class_override: Option<&str>) -> String {
    ClassList::new(ALERT_BASE)
        .variant(variant)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for a [`Card`].
pub fn card_classes(class_override: Option<&str>) -> String {
    ClassList::new(CARD_BASE)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for an [`Avatar`].
pub fn avatar_classes(class_override: Option<&str>) -> String {
    ClassList::new(AVATAR_BASE)
        .class_override(class_override)
        .resolve()
}

fn part_classes(base: &'static str, class_override: Option<&str>) -> String {
    ClassList::new(base).class_override(class_override).resolve()
}

#[component]
/// Compact status pill.
pub fn Badge(
    #[prop(default = BadgeTone::Neutral)] tone: BadgeTone,
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=badge_classes(tone, class_override.as_deref())
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Inline notice banner announced to assistive technology.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="alert"
            class=alert_classes(variant, class_override.as_deref())
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Heading line of an [`Alert`].
pub fn AlertTitle(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h5 class=part_classes(ALERT_TITLE_BASE, class_override.as_deref()) data-ui-slot="alert-title">
            {children()}
        </h5>
    }
}

#[component]
/// Body copy of an [`Alert`].
pub fn AlertDescription(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=part_classes(ALERT_DESCRIPTION_BASE, class_override.as_deref())
            data-ui-slot="alert-description"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bordered content panel.
pub fn Card(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=card_classes(class_override.as_deref())
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </div>
    }
}

#[component]
/// Card heading row: title, extra children, description and a trailing action.
pub fn CardHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<View>,
    #[prop(optional, into)] class_override: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=part_classes(CARD_HEADER_BASE, class_override.as_deref())
            data-ui-slot="card-header"
        >
            <div class="space-y-1.5">
                {title.map(|title| view! { <h2 class="text-xl font-semibold">{title}</h2> })}
                {children.map(|children| children())}
                {description
                    .map(|description| view! { <p class="text-sm text-mw-grey">{description}</p> })}
            </div>
            {action}
        </div>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=part_classes(CARD_CONTENT_BASE, class_override.as_deref()) data-ui-slot="card-content">
            {children()}
        </div>
    }
}

#[component]
/// Secondary heading inside a card body.
pub fn CardTitle(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=part_classes(CARD_TITLE_BASE, class_override.as_deref()) data-ui-slot="card-title">
            {children()}
        </h3>
    }
}

#[component]
/// Right-aligned action row closing a card.
pub fn CardFooter(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=part_classes(CARD_FOOTER_BASE, class_override.as_deref()) data-ui-slot="card-footer">
            {children()}
        </div>
    }
}

#[component]
/// Circular user image frame.
pub fn Avatar(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=avatar_classes(class_override.as_deref())
            data-ui-primitive="true"
            data-ui-kind="avatar"
        >
            {children()}
        </span>
    }
}

#[component]
/// Image filling an [`Avatar`].
pub fn AvatarImage(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] class_override: Option<String>,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt.unwrap_or_default()
            class=part_classes(AVATAR_IMAGE_BASE, class_override.as_deref())
            data-ui-slot="avatar-image"
        />
    }
}

#[component]
/// Initials shown when an [`Avatar`] has no image.
pub fn AvatarFallback(
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=part_classes(AVATAR_FALLBACK_BASE, class_override.as_deref())
            data-ui-slot="avatar-fallback"
        >
            {children()}
        </span>
    }
}
