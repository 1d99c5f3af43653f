//! Property-family grouping for utility classes.
//!
//! Two utilities conflict when they write the same CSS property under the same
//! modifier scope. [`classify`] maps a utility (modifiers already stripped) to
//! the [`StyleFamily`] it writes; [`StyleFamily::subsumes`] lists the narrower
//! families a broad utility overrides (`p-4` overrides `px-2`, never the
//! reverse).

/// Box side addressed by spacing, inset and border utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Every side.
    All,
    /// Left and right.
    X,
    /// Top and bottom.
    Y,
    /// Top side.
    Top,
    /// Right side.
    Right,
    /// Bottom side.
    Bottom,
    /// Left side.
    Left,
    /// Inline start.
    Start,
    /// Inline end.
    End,
}

impl Side {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "x" => Self::X,
            "y" => Self::Y,
            "t" => Self::Top,
            "r" => Self::Right,
            "b" => Self::Bottom,
            "l" => Self::Left,
            "s" => Self::Start,
            "e" => Self::End,
            _ => return None,
        })
    }

    fn subsumes(self) -> &'static [Side] {
        match self {
            Self::All => &[
                Self::X,
                Self::Y,
                Self::Top,
                Self::Right,
                Self::Bottom,
                Self::Left,
                Self::Start,
                Self::End,
            ],
            Self::X => &[Self::Right, Self::Left],
            Self::Y => &[Self::Top, Self::Bottom],
            _ => &[],
        }
    }
}

/// Corner group addressed by `rounded-*` utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Every corner.
    All,
    /// Top-left and top-right.
    Top,
    /// Top-right and bottom-right.
    Right,
    /// Bottom-right and bottom-left.
    Bottom,
    /// Top-left and bottom-left.
    Left,
    /// Start-start and end-start.
    Start,
    /// Start-end and end-end.
    End,
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-right.
    BottomRight,
    /// Bottom-left.
    BottomLeft,
    /// Start-start.
    StartStart,
    /// Start-end.
    StartEnd,
    /// End-end.
    EndEnd,
    /// End-start.
    EndStart,
}

impl Corner {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "t" => Self::Top,
            "r" => Self::Right,
            "b" => Self::Bottom,
            "l" => Self::Left,
            "s" => Self::Start,
            "e" => Self::End,
            "tl" => Self::TopLeft,
            "tr" => Self::TopRight,
            "br" => Self::BottomRight,
            "bl" => Self::BottomLeft,
            "ss" => Self::StartStart,
            "se" => Self::StartEnd,
            "ee" => Self::EndEnd,
            "es" => Self::EndStart,
            _ => return None,
        })
    }

    fn subsumes(self) -> &'static [Corner] {
        match self {
            Self::All => &[
                Self::Top,
                Self::Right,
                Self::Bottom,
                Self::Left,
                Self::Start,
                Self::End,
                Self::TopLeft,
                Self::TopRight,
                Self::BottomRight,
                Self::BottomLeft,
                Self::StartStart,
                Self::StartEnd,
                Self::EndEnd,
                Self::EndStart,
            ],
            Self::Top => &[Self::TopLeft, Self::TopRight],
            Self::Right => &[Self::TopRight, Self::BottomRight],
            Self::Bottom => &[Self::BottomRight, Self::BottomLeft],
            Self::Left => &[Self::TopLeft, Self::BottomLeft],
            Self::Start => &[Self::StartStart, Self::EndStart],
            Self::End => &[Self::StartEnd, Self::EndEnd],
            _ => &[],
        }
    }
}

/// CSS property family written by a utility class.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    // Layout
    Display,
    Position,
    Visibility,
    Inset(Side),
    Z,
    BoxSizing,
    Overflow,
    OverflowX,
    OverflowY,
    ObjectFit,
    ObjectPosition,
    Aspect,
    ScreenReader,
    // Flexbox and grid
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    Basis,
    Order,
    GridCols,
    GridRows,
    GridFlow,
    ColSpan,
    ColStart,
    ColEnd,
    RowSpan,
    RowStart,
    RowEnd,
    Gap(Side),
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignItems,
    AlignSelf,
    AlignContent,
    PlaceContent,
    PlaceItems,
    PlaceSelf,
    // Spacing
    Padding(Side),
    Margin(Side),
    SpaceX,
    SpaceY,
    SpaceXReverse,
    SpaceYReverse,
    // Sizing
    Width,
    Height,
    Size,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    // Typography
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextColor,
    TextDecoration,
    TextTransform,
    TextOverflow,
    TextWrap,
    Whitespace,
    WordBreak,
    VerticalAlign,
    Content,
    // Backgrounds
    BgAttachment,
    BgClip,
    BgOrigin,
    BgPosition,
    BgRepeat,
    BgSize,
    BgImage,
    BgColor,
    // Borders
    Radius(Corner),
    BorderWidth(Side),
    BorderColor(Side),
    BorderStyle,
    BorderCollapse,
    OutlineStyle,
    OutlineWidth,
    OutlineOffset,
    OutlineColor,
    RingWidth,
    RingInset,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    // Effects
    Shadow,
    ShadowColor,
    Opacity,
    // Interactivity
    Cursor,
    PointerEvents,
    UserSelect,
    Resize,
    // Transitions and transforms
    Transition,
    Duration,
    Ease,
    Delay,
    Animate,
    TranslateX,
    TranslateY,
    Rotate,
    Scale,
    ScaleX,
    ScaleY,
    // SVG
    Fill,
    StrokeColor,
    StrokeWidth,
}

impl StyleFamily {
    /// Narrower families overridden when a utility of this family wins.
    pub fn subsumes(self) -> Vec<StyleFamily> {
        match self {
            Self::Inset(side) => side.subsumes().iter().copied().map(Self::Inset).collect(),
            Self::Padding(side) => side.subsumes().iter().copied().map(Self::Padding).collect(),
            Self::Margin(side) => side.subsumes().iter().copied().map(Self::Margin).collect(),
            Self::BorderWidth(side) => side
                .subsumes()
                .iter()
                .copied()
                .map(Self::BorderWidth)
                .collect(),
            Self::BorderColor(side) => side
                .subsumes()
                .iter()
                .copied()
                .map(Self::BorderColor)
                .collect(),
            Self::Gap(Side::All) => vec![Self::Gap(Side::X), Self::Gap(Side::Y)],
            Self::Radius(corner) => corner.subsumes().iter().copied().map(Self::Radius).collect(),
            Self::Size => vec![Self::Width, Self::Height],
            Self::FontSize => vec![Self::LineHeight],
            Self::Overflow => vec![Self::OverflowX, Self::OverflowY],
            Self::Scale => vec![Self::ScaleX, Self::ScaleY],
            _ => Vec::new(),
        }
    }

    /// Whether the family holds a color value (theme token or literal).
    pub fn is_color(self) -> bool {
        matches!(
            self,
            Self::TextColor
                | Self::BgColor
                | Self::BorderColor(_)
                | Self::OutlineColor
                | Self::RingColor
                | Self::RingOffsetColor
                | Self::ShadowColor
                | Self::Fill
                | Self::StrokeColor
        )
    }
}

/// Maps a bare utility to the family it writes and its value portion.
///
/// Returns `None` for classes that are not recognized utilities; those are
/// never treated as conflicting with anything.
pub fn classify(utility: &str) -> Option<(StyleFamily, &str)> {
    use StyleFamily as F;

    if utility.is_empty() {
        return None;
    }

    if let Some(family) = keyword_family(utility) {
        return Some((family, ""));
    }

    if let Some(value) = suffix(utility, "text") {
        let head = value.split('/').next().unwrap_or(value);
        let family = match value {
            "left" | "center" | "right" | "justify" | "start" | "end" => F::TextAlign,
            "wrap" | "nowrap" | "balance" | "pretty" => F::TextWrap,
            "ellipsis" | "clip" => F::TextOverflow,
            _ if head == "base" || is_tshirt(head) || is_arbitrary_length(value) => F::FontSize,
            _ => F::TextColor,
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "font") {
        let family = match value {
            "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
            | "extrabold" | "black" => F::FontWeight,
            _ if is_number(value) || is_arbitrary_number(value) => F::FontWeight,
            _ => F::FontFamily,
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "bg") {
        let family = match value {
            "fixed" | "local" | "scroll" => F::BgAttachment,
            "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right"
            | "right-bottom" | "right-top" | "top" => F::BgPosition,
            "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
                F::BgRepeat
            }
            "auto" | "cover" | "contain" => F::BgSize,
            "none" => F::BgImage,
            _ if value.starts_with("gradient-to-") => F::BgImage,
            _ if value.starts_with("clip-") => F::BgClip,
            _ if value.starts_with("origin-") => F::BgOrigin,
            _ if value.starts_with("blend-") => return None,
            _ => F::BgColor,
        };
        return Some((family, value));
    }

    if utility == "border" {
        return Some((F::BorderWidth(Side::All), ""));
    }
    if let Some(value) = suffix(utility, "border") {
        return classify_border(value).map(|family| (family, value));
    }

    if utility == "rounded" {
        return Some((F::Radius(Corner::All), ""));
    }
    if let Some(value) = suffix(utility, "rounded") {
        let head = value.split_once('-').map(|(head, _)| head).unwrap_or(value);
        let corner = Corner::from_token(head).unwrap_or(Corner::All);
        return Some((F::Radius(corner), value));
    }

    if let Some(found) = spacing(utility) {
        return Some(found);
    }

    if utility == "shadow" {
        return Some((F::Shadow, ""));
    }
    if let Some(value) = suffix(utility, "shadow") {
        let family = match value {
            "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => F::Shadow,
            _ if is_arbitrary(value) && !is_arbitrary_color(value) => F::Shadow,
            _ => F::ShadowColor,
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "ring-offset") {
        let family = if is_width(value) {
            F::RingOffsetWidth
        } else {
            F::RingOffsetColor
        };
        return Some((family, value));
    }
    if utility == "ring" {
        return Some((F::RingWidth, ""));
    }
    if utility == "ring-inset" {
        return Some((F::RingInset, ""));
    }
    if let Some(value) = suffix(utility, "ring") {
        let family = if is_width(value) {
            F::RingWidth
        } else {
            F::RingColor
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "outline-offset") {
        return Some((F::OutlineOffset, value));
    }
    if utility == "outline" {
        return Some((F::OutlineStyle, ""));
    }
    if let Some(value) = suffix(utility, "outline") {
        let family = match value {
            "none" | "solid" | "dashed" | "dotted" | "double" | "hidden" => F::OutlineStyle,
            _ if is_width(value) => F::OutlineWidth,
            _ => F::OutlineColor,
        };
        return Some((family, value));
    }

    if utility == "transition" {
        return Some((F::Transition, ""));
    }
    if utility == "resize" {
        return Some((F::Resize, ""));
    }
    if utility == "grow" || utility == "flex-grow" {
        return Some((F::Grow, ""));
    }
    if utility == "shrink" || utility == "flex-shrink" {
        return Some((F::Shrink, ""));
    }
    if let Some(value) = suffix(utility, "flex-grow") {
        return Some((F::Grow, value));
    }
    if let Some(value) = suffix(utility, "flex-shrink") {
        return Some((F::Shrink, value));
    }

    if utility.starts_with("break-before")
        || utility.starts_with("break-after")
        || utility.starts_with("break-inside")
    {
        return None;
    }

    if let Some(value) = suffix(utility, "object") {
        let family = match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => F::ObjectFit,
            _ => F::ObjectPosition,
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "content") {
        let family = match value {
            "normal" | "center" | "start" | "end" | "between" | "around" | "evenly"
            | "baseline" | "stretch" => F::AlignContent,
            _ => F::Content,
        };
        return Some((family, value));
    }

    if let Some(value) = suffix(utility, "stroke") {
        let family = if is_width(value) {
            F::StrokeWidth
        } else {
            F::StrokeColor
        };
        return Some((family, value));
    }

    // Longest prefixes first so `grid-cols-` is not read as `grid-`.
    const PREFIXED: &[(&str, StyleFamily)] = &[
        ("pointer-events", StyleFamily::PointerEvents),
        ("justify-items", StyleFamily::JustifyItems),
        ("justify-self", StyleFamily::JustifySelf),
        ("place-content", StyleFamily::PlaceContent),
        ("place-items", StyleFamily::PlaceItems),
        ("place-self", StyleFamily::PlaceSelf),
        ("translate-x", StyleFamily::TranslateX),
        ("translate-y", StyleFamily::TranslateY),
        ("overflow-x", StyleFamily::OverflowX),
        ("overflow-y", StyleFamily::OverflowY),
        ("whitespace", StyleFamily::Whitespace),
        ("grid-cols", StyleFamily::GridCols),
        ("grid-rows", StyleFamily::GridRows),
        ("grid-flow", StyleFamily::GridFlow),
        ("col-start", StyleFamily::ColStart),
        ("row-start", StyleFamily::RowStart),
        ("col-span", StyleFamily::ColSpan),
        ("row-span", StyleFamily::RowSpan),
        ("transition", StyleFamily::Transition),
        ("duration", StyleFamily::Duration),
        ("tracking", StyleFamily::LetterSpacing),
        ("col-end", StyleFamily::ColEnd),
        ("row-end", StyleFamily::RowEnd),
        ("overflow", StyleFamily::Overflow),
        ("justify", StyleFamily::JustifyContent),
        ("leading", StyleFamily::LineHeight),
        ("opacity", StyleFamily::Opacity),
        ("scale-x", StyleFamily::ScaleX),
        ("scale-y", StyleFamily::ScaleY),
        ("animate", StyleFamily::Animate),
        ("min-w", StyleFamily::MinWidth),
        ("min-h", StyleFamily::MinHeight),
        ("max-w", StyleFamily::MaxWidth),
        ("max-h", StyleFamily::MaxHeight),
        ("cursor", StyleFamily::Cursor),
        ("select", StyleFamily::UserSelect),
        ("resize", StyleFamily::Resize),
        ("rotate", StyleFamily::Rotate),
        ("aspect", StyleFamily::Aspect),
        ("shrink", StyleFamily::Shrink),
        ("items", StyleFamily::AlignItems),
        ("basis", StyleFamily::Basis),
        ("order", StyleFamily::Order),
        ("delay", StyleFamily::Delay),
        ("scale", StyleFamily::Scale),
        ("break", StyleFamily::WordBreak),
        ("align", StyleFamily::VerticalAlign),
        ("flex", StyleFamily::Flex),
        ("self", StyleFamily::AlignSelf),
        ("grow", StyleFamily::Grow),
        ("size", StyleFamily::Size),
        ("ease", StyleFamily::Ease),
        ("fill", StyleFamily::Fill),
        ("col", StyleFamily::ColSpan),
        ("row", StyleFamily::RowSpan),
        ("w", StyleFamily::Width),
        ("h", StyleFamily::Height),
        ("z", StyleFamily::Z),
    ];

    PREFIXED
        .iter()
        .find_map(|(prefix, family)| suffix(utility, prefix).map(|value| (*family, value)))
}

fn keyword_family(utility: &str) -> Option<StyleFamily> {
    use StyleFamily as F;

    Some(match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table" | "inline-table"
        | "table-caption" | "table-cell" | "table-column" | "table-column-group"
        | "table-footer-group" | "table-header-group" | "table-row-group" | "table-row"
        | "flow-root" | "grid" | "inline-grid" | "contents" | "list-item" | "hidden" => F::Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => F::Position,
        "visible" | "invisible" | "collapse" => F::Visibility,
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => F::FlexDirection,
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => F::FlexWrap,
        "italic" | "not-italic" => F::FontStyle,
        "underline" | "overline" | "line-through" | "no-underline" => F::TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => F::TextTransform,
        "truncate" => F::TextOverflow,
        "sr-only" | "not-sr-only" => F::ScreenReader,
        "box-border" | "box-content" => F::BoxSizing,
        "space-x-reverse" => F::SpaceXReverse,
        "space-y-reverse" => F::SpaceYReverse,
        _ => return None,
    })
}

fn classify_border(value: &str) -> Option<StyleFamily> {
    use StyleFamily as F;

    if value.starts_with("spacing") {
        return None;
    }

    Some(match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => F::BorderStyle,
        "collapse" | "separate" => F::BorderCollapse,
        _ if is_width(value) => F::BorderWidth(Side::All),
        _ => {
            let (head, rest) = match value.split_once('-') {
                Some((head, rest)) => (head, Some(rest)),
                None => (value, None),
            };
            match (Side::from_token(head), rest) {
                (Some(side), None) => F::BorderWidth(side),
                (Some(side), Some(rest)) if is_width(rest) => F::BorderWidth(side),
                (Some(side), Some(_)) => F::BorderColor(side),
                (None, _) => F::BorderColor(Side::All),
            }
        }
    })
}

fn spacing(utility: &str) -> Option<(StyleFamily, &str)> {
    use StyleFamily as F;

    const SIDED: &[(&str, Side)] = &[
        ("", Side::All),
        ("x", Side::X),
        ("y", Side::Y),
        ("t", Side::Top),
        ("r", Side::Right),
        ("b", Side::Bottom),
        ("l", Side::Left),
        ("s", Side::Start),
        ("e", Side::End),
    ];

    for (letter, make) in [("p", F::Padding as fn(Side) -> StyleFamily), ("m", F::Margin)] {
        for (side_token, side) in SIDED {
            let prefix = format!("{letter}{side_token}");
            if let Some(value) = suffix(utility, &prefix) {
                return Some((make(*side), value));
            }
        }
    }

    if let Some(value) = suffix(utility, "inset-x") {
        return Some((F::Inset(Side::X), value));
    }
    if let Some(value) = suffix(utility, "inset-y") {
        return Some((F::Inset(Side::Y), value));
    }
    for (prefix, side) in [
        ("inset", Side::All),
        ("top", Side::Top),
        ("right", Side::Right),
        ("bottom", Side::Bottom),
        ("left", Side::Left),
        ("start", Side::Start),
        ("end", Side::End),
    ] {
        if let Some(value) = suffix(utility, prefix) {
            return Some((F::Inset(side), value));
        }
    }

    for (prefix, side) in [("gap-x", Side::X), ("gap-y", Side::Y), ("gap", Side::All)] {
        if let Some(value) = suffix(utility, prefix) {
            return Some((F::Gap(side), value));
        }
    }
    if let Some(value) = suffix(utility, "space-x") {
        return Some((F::SpaceX, value));
    }
    if let Some(value) = suffix(utility, "space-y") {
        return Some((F::SpaceY, value));
    }

    None
}

fn suffix<'a>(utility: &'a str, prefix: &str) -> Option<&'a str> {
    utility
        .strip_prefix(prefix)?
        .strip_prefix('-')
        .filter(|value| !value.is_empty())
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && value.chars().any(|ch| ch.is_ascii_digit())
}

fn is_tshirt(value: &str) -> bool {
    match value {
        "xs" | "sm" | "md" | "lg" | "xl" => true,
        _ => value
            .strip_suffix("xl")
            .map(|count| count.len() == 1 && is_number(count))
            .unwrap_or(false),
    }
}

fn is_arbitrary(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('[') && value.ends_with(']')
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    is_arbitrary(value).then(|| &value[1..value.len() - 1])
}

fn is_arbitrary_length(value: &str) -> bool {
    const UNITS: &[&str] = &[
        "px", "rem", "em", "%", "vh", "vw", "svh", "dvh", "lvh", "vmin", "vmax", "ch", "ex", "lh",
        "cm", "mm", "in", "pt", "pc", "fr",
    ];

    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if inner.starts_with("length:") || inner.starts_with("calc(") {
        return true;
    }
    if inner == "0" {
        return true;
    }
    UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .map(|number| is_number(number.trim_start_matches('-')))
            .unwrap_or(false)
    })
}

/// `[1.5]` or `[number:var(--w)]`.
fn is_arbitrary_number(value: &str) -> bool {
    arbitrary_inner(value).is_some_and(|inner| is_number(inner) || inner.starts_with("number:"))
}

fn is_arbitrary_color(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    ["#", "rgb(", "rgba(", "hsl(", "hsla(", "color:"]
        .iter()
        .any(|prefix| inner.starts_with(prefix))
}

fn is_width(value: &str) -> bool {
    is_number(value) || is_arbitrary_length(value) || is_arbitrary_number(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn family(utility: &str) -> Option<StyleFamily> {
        classify(utility).map(|(family, _)| family)
    }

    #[test]
    fn text_prefix_splits_size_color_and_alignment() {
        assert_eq!(family("text-sm"), Some(StyleFamily::FontSize));
        assert_eq!(family("text-base"), Some(StyleFamily::FontSize));
        assert_eq!(family("text-2xl"), Some(StyleFamily::FontSize));
        assert_eq!(family("text-sm/6"), Some(StyleFamily::FontSize));
        assert_eq!(family("text-[14px]"), Some(StyleFamily::FontSize));
        assert_eq!(family("text-mw-grey"), Some(StyleFamily::TextColor));
        assert_eq!(family("text-[#999]"), Some(StyleFamily::TextColor));
        assert_eq!(family("text-white"), Some(StyleFamily::TextColor));
        assert_eq!(family("text-right"), Some(StyleFamily::TextAlign));
    }

    #[test]
    fn font_prefix_splits_weight_and_family() {
        assert_eq!(family("font-semibold"), Some(StyleFamily::FontWeight));
        assert_eq!(family("font-heading"), Some(StyleFamily::FontFamily));
        assert_eq!(family("font-[600]"), Some(StyleFamily::FontWeight));
        assert_eq!(family("font-[number:var(--w)]"), Some(StyleFamily::FontWeight));
    }

    #[test]
    fn stroke_splits_width_and_color() {
        assert_eq!(family("stroke-2"), Some(StyleFamily::StrokeWidth));
        assert_eq!(family("stroke-[1.5]"), Some(StyleFamily::StrokeWidth));
        assert_eq!(family("stroke-[2px]"), Some(StyleFamily::StrokeWidth));
        assert_eq!(family("stroke-mw-blue"), Some(StyleFamily::StrokeColor));
        assert_eq!(family("stroke-[#00A8B5]"), Some(StyleFamily::StrokeColor));
    }

    #[test]
    fn legacy_flex_grow_and_shrink_names() {
        assert_eq!(family("flex-grow"), Some(StyleFamily::Grow));
        assert_eq!(family("flex-grow-0"), Some(StyleFamily::Grow));
        assert_eq!(family("flex-shrink"), Some(StyleFamily::Shrink));
        assert_eq!(family("flex-shrink-0"), Some(StyleFamily::Shrink));
        assert_eq!(family("flex-1"), Some(StyleFamily::Flex));
    }

    #[test]
    fn background_keywords_do_not_read_as_colors() {
        assert_eq!(family("bg-mw-blue/15"), Some(StyleFamily::BgColor));
        assert_eq!(family("bg-transparent"), Some(StyleFamily::BgColor));
        assert_eq!(family("bg-cover"), Some(StyleFamily::BgSize));
        assert_eq!(family("bg-no-repeat"), Some(StyleFamily::BgRepeat));
        assert_eq!(family("bg-gradient-to-r"), Some(StyleFamily::BgImage));
    }

    #[test]
    fn border_width_style_and_color_are_separate() {
        assert_eq!(family("border"), Some(StyleFamily::BorderWidth(Side::All)));
        assert_eq!(family("border-2"), Some(StyleFamily::BorderWidth(Side::All)));
        assert_eq!(family("border-b"), Some(StyleFamily::BorderWidth(Side::Bottom)));
        assert_eq!(family("border-t-4"), Some(StyleFamily::BorderWidth(Side::Top)));
        assert_eq!(family("border-dashed"), Some(StyleFamily::BorderStyle));
        assert_eq!(
            family("border-mw-light-grey/40"),
            Some(StyleFamily::BorderColor(Side::All))
        );
        assert_eq!(
            family("border-l-mw-blue"),
            Some(StyleFamily::BorderColor(Side::Left))
        );
    }

    #[test]
    fn rounded_reads_corner_groups() {
        assert_eq!(family("rounded"), Some(StyleFamily::Radius(Corner::All)));
        assert_eq!(family("rounded-full"), Some(StyleFamily::Radius(Corner::All)));
        assert_eq!(family("rounded-lg"), Some(StyleFamily::Radius(Corner::All)));
        assert_eq!(family("rounded-t-lg"), Some(StyleFamily::Radius(Corner::Top)));
        assert_eq!(family("rounded-tl"), Some(StyleFamily::Radius(Corner::TopLeft)));
    }

    #[test]
    fn spacing_prefixes_do_not_capture_other_utilities() {
        assert_eq!(family("px-4"), Some(StyleFamily::Padding(Side::X)));
        assert_eq!(family("py-2.5"), Some(StyleFamily::Padding(Side::Y)));
        assert_eq!(family("pl-10"), Some(StyleFamily::Padding(Side::Left)));
        assert_eq!(family("mx-auto"), Some(StyleFamily::Margin(Side::X)));
        assert_eq!(family("max-w-md"), Some(StyleFamily::MaxWidth));
        assert_eq!(family("pointer-events-none"), Some(StyleFamily::PointerEvents));
        assert_eq!(family("place-items-center"), Some(StyleFamily::PlaceItems));
        assert_eq!(family("top-1/2"), Some(StyleFamily::Inset(Side::Top)));
        assert_eq!(family("left-3"), Some(StyleFamily::Inset(Side::Left)));
    }

    #[test]
    fn ring_and_outline_split_width_and_color() {
        assert_eq!(family("ring"), Some(StyleFamily::RingWidth));
        assert_eq!(family("ring-2"), Some(StyleFamily::RingWidth));
        assert_eq!(family("ring-mw-blue/40"), Some(StyleFamily::RingColor));
        assert_eq!(family("ring-offset-2"), Some(StyleFamily::RingOffsetWidth));
        assert_eq!(family("ring-offset-white"), Some(StyleFamily::RingOffsetColor));
        assert_eq!(family("outline-none"), Some(StyleFamily::OutlineStyle));
        assert_eq!(family("outline-2"), Some(StyleFamily::OutlineWidth));
    }

    #[test]
    fn layout_keywords_and_prefixes() {
        assert_eq!(family("inline-flex"), Some(StyleFamily::Display));
        assert_eq!(family("hidden"), Some(StyleFamily::Display));
        assert_eq!(family("flex-col"), Some(StyleFamily::FlexDirection));
        assert_eq!(family("flex-1"), Some(StyleFamily::Flex));
        assert_eq!(family("grid-cols-4"), Some(StyleFamily::GridCols));
        assert_eq!(family("col-span-2"), Some(StyleFamily::ColSpan));
        assert_eq!(family("justify-between"), Some(StyleFamily::JustifyContent));
        assert_eq!(family("justify-items-center"), Some(StyleFamily::JustifyItems));
        assert_eq!(family("items-center"), Some(StyleFamily::AlignItems));
        assert_eq!(family("shrink-0"), Some(StyleFamily::Shrink));
        assert_eq!(family("translate-y-1/2"), Some(StyleFamily::TranslateY));
        assert_eq!(family("shadow-sm"), Some(StyleFamily::Shadow));
        assert_eq!(family("transition-colors"), Some(StyleFamily::Transition));
    }

    #[test]
    fn unknown_classes_are_unclassified() {
        assert_eq!(family("mw-card"), None);
        assert_eq!(family("group"), None);
        assert_eq!(family("bg-blend-multiply"), None);
    }

    #[test]
    fn broad_families_subsume_narrow_ones() {
        let padding = StyleFamily::Padding(Side::All).subsumes();
        assert!(padding.contains(&StyleFamily::Padding(Side::Left)));
        assert!(StyleFamily::Padding(Side::Left).subsumes().is_empty());
        assert!(StyleFamily::Padding(Side::X)
            .subsumes()
            .contains(&StyleFamily::Padding(Side::Right)));
        assert!(StyleFamily::FontSize
            .subsumes()
            .contains(&StyleFamily::LineHeight));
        assert!(StyleFamily::Radius(Corner::All)
            .subsumes()
            .contains(&StyleFamily::Radius(Corner::BottomLeft)));
    }

    #[test]
    fn color_families_are_flagged() {
        assert!(StyleFamily::BgColor.is_color());
        assert!(StyleFamily::BorderColor(Side::Top).is_color());
        assert!(!StyleFamily::FontSize.is_color());
    }
}
