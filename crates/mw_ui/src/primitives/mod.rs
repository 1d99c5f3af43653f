//! Form controls and data-display primitives plus their variant axes.

use std::str::FromStr;

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;
use style_resolver::{ClassList, VariantAxis, VariantError};

use crate::{theme, Icon, IconName, IconSize};

mod controls;
mod data_display;

pub use controls::{
    button_classes, error_text_classes, form_field_decorations, input_classes, label_classes,
    textarea_classes, Button, FieldDecorations, FormField, IconSlot, Input, Label, Textarea,
};
pub use data_display::{
    alert_classes, avatar_classes, badge_classes, card_classes, Alert, AlertDescription,
    AlertTitle, Avatar, AvatarFallback, AvatarImage, Badge, Card, CardContent, CardFooter,
    CardHeader, CardTitle,
};

macro_rules! impl_from_str {
    ($($axis:ty),+ $(,)?) => {
        $(
            impl FromStr for $axis {
                type Err = VariantError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    <$axis as VariantAxis>::parse(raw)
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual button variants.
pub enum ButtonVariant {
    /// Brand yellow call to action.
    Primary,
    /// White with blue outline.
    Secondary,
    /// Transparent until hovered.
    Ghost,
    /// Destructive action.
    Danger,
    /// Solid brand blue.
    Mw,
    /// Outline alias of [`ButtonVariant::Secondary`].
    Outline,
    /// Plain blue button (`"default"`).
    Standard,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl VariantAxis for ButtonVariant {
    const AXIS: &'static str = "button variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Ghost,
        Self::Danger,
        Self::Mw,
        Self::Outline,
        Self::Standard,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Mw => "mw",
            Self::Outline => "outline",
            Self::Standard => "default",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-mw-yellow text-mw-black shadow-sm hover:bg-mw-dark-yellow",
            Self::Secondary | Self::Outline => {
                "bg-white text-mw-blue border border-mw-blue hover:bg-mw-blue/10"
            }
            Self::Ghost => "bg-transparent text-mw-light-grey hover:bg-mw-blue/10",
            Self::Danger => "bg-mw-red text-white hover:bg-mw-dark-red",
            Self::Mw => "bg-mw-blue text-mw-white shadow-sm hover:bg-mw-dark-blue",
            Self::Standard => "bg-mw-blue text-white hover:bg-mw-dark-blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button padding and type scale.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for ButtonSize {
    const AXIS: &'static str = "button size";
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "px-2 py-1 text-xs",
            Self::Sm => "px-3 py-2 text-sm",
            Self::Md => "px-4 py-2.5 text-base",
            Self::Lg => "px-5 py-3 text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic badge tones.
///
/// The set is closed; a tone outside it is a compile error:
///
/// ```compile_fail
/// let tone = mw_ui::BadgeTone::Urgent;
/// ```
pub enum BadgeTone {
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Failure or cancellation.
    Danger,
    /// No semantic emphasis.
    Neutral,
}

impl Default for BadgeTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl VariantAxis for BadgeTone {
    const AXIS: &'static str = "badge tone";
    const ALL: &'static [Self] = &[
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Neutral,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Info => "bg-mw-blue/15 text-mw-dark-blue",
            Self::Success => "bg-mw-green/20 text-mw-dark-green",
            Self::Warning => "bg-mw-orange/20 text-mw-dark-grey",
            Self::Danger => "bg-mw-red/20 text-mw-dark-red",
            Self::Neutral => "bg-mw-light-grey/30 text-mw-grey",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert banner variants.
pub enum AlertVariant {
    /// Informational notice.
    Info,
    /// Confirmation.
    Success,
    /// Cautionary notice.
    Warning,
    /// Failure notice.
    Error,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl VariantAxis for AlertVariant {
    const AXIS: &'static str = "alert variant";
    const ALL: &'static [Self] = &[Self::Info, Self::Success, Self::Warning, Self::Error];

    fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Info => "border-mw-blue/40 bg-mw-blue/10 text-mw-dark-blue",
            Self::Success => "border-mw-green/60 bg-mw-green/15 text-mw-dark-green",
            Self::Warning => "border-mw-orange/60 bg-mw-orange/10 text-mw-dark-grey",
            Self::Error => "border-mw-red/50 bg-mw-red/10 text-mw-dark-red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validation message severity for form fields.
pub enum ErrorSeverity {
    /// Blocking error.
    Error,
    /// Non-blocking warning.
    Warning,
    /// Hint.
    Info,
}

impl Default for ErrorSeverity {
    fn default() -> Self {
        Self::Error
    }
}

impl VariantAxis for ErrorSeverity {
    const AXIS: &'static str = "error severity";
    const ALL: &'static [Self] = &[Self::Error, Self::Warning, Self::Info];

    fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Error => "text-validation-error",
            Self::Warning => "text-validation-warning",
            Self::Info => "text-validation-info",
        }
    }
}

impl ErrorSeverity {
    /// Theme color token for the severity (`validation-error`).
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Error => "validation-error",
            Self::Warning => "validation-warning",
            Self::Info => "validation-info",
        }
    }

    /// Literal icon tint resolved from the theme catalog.
    pub fn icon_color(self) -> &'static str {
        theme::color(self.color_token()).unwrap_or("currentColor")
    }
}

impl_from_str!(ButtonVariant, ButtonSize, BadgeTone, AlertVariant, ErrorSeverity);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of a [`Button`].
pub enum ButtonType {
    /// Plain button; never submits a form.
    Button,
    /// Form submit.
    Submit,
    /// Form reset.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of an [`Input`].
pub enum InputType {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Search query.
    Search,
    /// Numeric value.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Search => "search",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
