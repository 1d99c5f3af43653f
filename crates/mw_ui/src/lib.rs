//! MW design-system components for Leptos.
//!
//! Every component resolves its `class` attribute from three ordered sources:
//! always-applied base rules, the style-table entries of its selected variant
//! axes, and an optional caller `class_override`. Resolution goes through
//! [`style_resolver`], so a caller rule replaces the conflicting base or
//! variant rule instead of merely appending to it. The pure `*_classes`
//! functions expose that resolution without a DOM.
//!
//! Components also emit a stable `data-ui-*` attribute contract (`kind`,
//! `variant`, `size`) for tests and page-level styling hooks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod theme;

pub use icon::{icon_classes, Icon, IconName, IconSize};
pub use primitives::{
    alert_classes, avatar_classes, badge_classes, button_classes, card_classes,
    error_text_classes, form_field_decorations, input_classes, label_classes, textarea_classes,
    Alert, AlertDescription, AlertTitle, AlertVariant, Avatar, AvatarFallback, AvatarImage, Badge,
    BadgeTone, Button, ButtonSize, ButtonType, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, ErrorSeverity, FieldDecorations, FormField, IconSlot, Input, InputType,
    Label, Textarea,
};
pub use style_resolver::{deserialize_variant, ClassList, VariantAxis, VariantError};
pub use theme::ThemeStyle;

/// Convenience imports for pages composing the component set.
pub mod prelude {
    pub use crate::{
        Alert, AlertDescription, AlertTitle, AlertVariant, Avatar, AvatarFallback, AvatarImage,
        Badge, BadgeTone, Button, ButtonSize, ButtonType, ButtonVariant, Card, CardContent,
        CardFooter, CardHeader, CardTitle, ErrorSeverity, FormField, Icon, IconName, IconSize,
        Input, InputType, Label, Textarea, ThemeStyle, VariantAxis,
    };
}
