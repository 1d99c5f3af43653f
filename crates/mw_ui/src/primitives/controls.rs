use super::*;

pub(crate) const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-semibold transition-colors focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-mw-blue disabled:cursor-not-allowed disabled:opacity-60";
pub(crate) const INPUT_BASE: &str = "block w-full rounded-md border border-mw-light-grey bg-white px-3 py-2 text-sm text-mw-black shadow-sm focus:border-mw-blue focus:outline-none focus:ring-2 focus:ring-mw-blue/40 disabled:cursor-not-allowed disabled:bg-mw-light-grey/40 disabled:text-mw-grey";
pub(crate) const TEXTAREA_BASE: &str = "block w-full resize-y rounded-md border border-mw-light-grey bg-white px-3 py-2 text-sm text-mw-black shadow-sm focus:border-mw-blue focus:outline-none focus:ring-2 focus:ring-mw-blue/40 disabled:cursor-not-allowed disabled:bg-mw-light-grey/40 disabled:text-mw-grey";
pub(crate) const LABEL_BASE: &str = "text-sm font-medium text-mw-grey";
const ERROR_TEXT_BASE: &str = "mt-0 text-xs";
const ICON_WELL_BASE: &str = "absolute top-1/2 -translate-y-1/2 pointer-events-none";
const DECORATIVE_ICON_CLASS: &str = "text-[#999]";
const FIELD_LABEL_OVERRIDE: &str = "mb-0";

/// `aria-invalid` value; the attribute is omitted on valid fields.
fn aria_invalid(invalid: bool) -> Option<&'static str> {
    invalid.then_some("true")
}

/// Resolves the class list for a [`Button`].
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    class_override: Option<&str>,
) -> String {
    ClassList::new(BUTTON_BASE)
        .variant(variant)
        .variant(size)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for an [`Input`].
pub fn input_classes(class_override: Option<&str>) -> String {
    ClassList::new(INPUT_BASE)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for a [`Textarea`].
pub fn textarea_classes(class_override: Option<&str>) -> String {
    ClassList::new(TEXTAREA_BASE)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for a [`Label`].
pub fn label_classes(class_override: Option<&str>) -> String {
    ClassList::new(LABEL_BASE)
        .class_override(class_override)
        .resolve()
}

/// Resolves the class list for a form field's validation message.
pub fn error_text_classes(severity: ErrorSeverity) -> String {
    ClassList::new(ERROR_TEXT_BASE).variant(severity).resolve()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Content of one icon well inside a [`FormField`].
pub enum IconSlot {
    /// Nothing rendered.
    #[default]
    Empty,
    /// Neutral grey icon.
    Decorative(IconName),
    /// Validation icon tinted by severity.
    Severity {
        /// Icon to render.
        icon: IconName,
        /// Severity that picks the tint.
        severity: ErrorSeverity,
    },
}

impl IconSlot {
    /// Whether the slot renders anything.
    pub fn is_filled(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Icon wells and input classes derived from a [`FormField`]'s props.
pub struct FieldDecorations {
    /// Left icon well.
    pub leading: IconSlot,
    /// Right icon well.
    pub trailing: IconSlot,
    /// Final class list of the wrapped input.
    pub input_class: String,
}

/// Decides which icons a form field shows and how the input is padded around them.
///
/// An invalid field with an error icon shows that icon, tinted by severity, in
/// place of the left icon. The input gains `pl-10`/`pr-10` for occupied wells
/// before the caller override is applied.
pub fn form_field_decorations(
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    error_icon: Option<IconName>,
    invalid: bool,
    severity: ErrorSeverity,
    class_override: Option<&str>,
) -> FieldDecorations {
    let leading = match (error_icon, left_icon) {
        (Some(icon), _) if invalid => IconSlot::Severity { icon, severity },
        (_, Some(icon)) => IconSlot::Decorative(icon),
        _ => IconSlot::Empty,
    };
    let trailing = right_icon.map(IconSlot::Decorative).unwrap_or_default();
    let input_class = ClassList::new(INPUT_BASE)
        .when(leading.is_filled(), "pl-10")
        .when(trailing.is_filled(), "pr-10")
        .class_override(class_override)
        .resolve();

    FieldDecorations {
        leading,
        trailing,
        input_class,
    }
}

#[component]
/// Brand button with variant and size axes.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] class_override: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.token()
            class=button_classes(variant, size, class_override.as_deref())
            id=id
            title=title
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm class_override="mr-2" /> })}
            {children()}
        </button>
    }
}

/// Native attributes shared by [`Input`] and the input wrapped by [`FormField`].
#[derive(Clone, Default)]
struct InputAttrs {
    id: Option<String>,
    name: Option<String>,
    input_type: InputType,
    placeholder: Option<String>,
    value: MaybeSignal<String>,
    autocomplete: Option<&'static str>,
    required: bool,
    readonly: bool,
    disabled: MaybeSignal<bool>,
    invalid: MaybeSignal<bool>,
    described_by: Option<String>,
    on_input: Option<Callback<web_sys::Event>>,
    on_blur: Option<Callback<FocusEvent>>,
}

fn render_input(attrs: InputAttrs, class: String) -> impl IntoView {
    let InputAttrs {
        id,
        name,
        input_type,
        placeholder,
        value,
        autocomplete,
        required,
        readonly,
        disabled,
        invalid,
        described_by,
        on_input,
        on_blur,
    } = attrs;

    view! {
        <input
            class=class
            id=id
            name=name
            type=input_type.token()
            placeholder=placeholder
            autocomplete=autocomplete
            required=required
            readonly=readonly
            prop:value=move || value.get()
            disabled=move || disabled.get()
            aria-invalid=move || aria_invalid(invalid.get())
            aria-describedby=described_by
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        />
    }
}

#[component]
/// Single-line text input.
pub fn Input(
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] class_override: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let class = input_classes(class_override.as_deref());
    render_input(
        InputAttrs {
            id,
            name,
            input_type,
            placeholder,
            value,
            autocomplete,
            required,
            readonly,
            disabled,
            invalid,
            described_by: None,
            on_input,
            on_blur,
        },
        class,
    )
}

#[component]
/// Multi-line text input; four rows unless told otherwise.
pub fn Textarea(
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] class_override: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class=textarea_classes(class_override.as_deref())
            rows=rows
            id=id
            name=name
            placeholder=placeholder
            required=required
            readonly=readonly
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        ></textarea>
    }
}

#[component]
/// Form label.
pub fn Label(
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(optional, into)] class_override: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            for=html_for
            class=label_classes(class_override.as_deref())
            data-ui-primitive="true"
            data-ui-kind="label"
        >
            {children()}
        </label>
    }
}

fn render_icon_slot(slot: IconSlot, edge: &'static str) -> Option<impl IntoView> {
    let icon = match slot {
        IconSlot::Empty => return None,
        IconSlot::Decorative(icon) => view! {
            <Icon icon size=IconSize::Sm class_override=DECORATIVE_ICON_CLASS />
        }
        .into_view(),
        IconSlot::Severity { icon, severity } => view! {
            <Icon
                icon
                size=IconSize::Sm
                class_override=severity.classes()
                color=severity.icon_color()
            />
        }
        .into_view(),
    };

    Some(view! {
        <div class=format!("{ICON_WELL_BASE} {edge}") data-ui-slot="field-icon">
            {icon}
        </div>
    })
}

#[component]
/// Labelled input with optional icon wells and a severity-styled validation message.
///
/// A blank `error` renders no message.
pub fn FormField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = true)] show_label: bool,
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] class_override: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] error_icon: Option<IconName>,
    #[prop(optional)] invalid: bool,
    #[prop(optional, into)] error: Option<String>,
    #[prop(default = ErrorSeverity::Error)] error_severity: ErrorSeverity,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let decorations = form_field_decorations(
        left_icon,
        right_icon,
        error_icon,
        invalid,
        error_severity,
        class_override.as_deref(),
    );
    let error = error.filter(|error| !error.trim().is_empty());
    let error_id = match (&id, &error) {
        (Some(id), Some(_)) => Some(format!("{id}-error")),
        _ => None,
    };
    let label = label.filter(|_| show_label);
    let label_for = id.clone();

    let input = render_input(
        InputAttrs {
            id,
            name,
            input_type,
            placeholder,
            value,
            autocomplete,
            required,
            readonly: false,
            disabled,
            invalid: MaybeSignal::Static(invalid),
            described_by: error_id.clone(),
            on_input,
            on_blur,
        },
        decorations.input_class,
    );

    view! {
        <div
            class="w-full"
            data-ui-primitive="true"
            data-ui-kind="form-field"
            data-ui-invalid=bool_token(invalid)
            data-ui-severity=error_severity.token()
        >
            {label.map(move |label| match label_for {
                Some(html_for) => view! {
                    <Label html_for class_override=FIELD_LABEL_OVERRIDE>{label}</Label>
                }
                .into_view(),
                None => view! {
                    <Label class_override=FIELD_LABEL_OVERRIDE>{label}</Label>
                }
                .into_view(),
            })}
            <div class="relative">
                {render_icon_slot(decorations.leading, "left-3")}
                {input}
                {render_icon_slot(decorations.trailing, "right-3")}
            </div>
            {error.map(|error| view! {
                <p id=error_id class=error_text_classes(error_severity) data-ui-slot="field-error">
                    {error}
                </p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use style_resolver::{style_table, ClassToken, StyleFamily};

    use super::*;

    fn rules_in_families(classes: &str, families: &[StyleFamily]) -> Vec<String> {
        classes
            .split_whitespace()
            .filter(|raw| {
                ClassToken::parse(raw)
                    .family()
                    .is_some_and(|family| families.contains(&family))
            })
            .map(str::to_string)
            .collect()
    }

    fn families_of(classes: &str) -> Vec<StyleFamily> {
        classes
            .split_whitespace()
            .filter_map(|raw| ClassToken::parse(raw).family())
            .collect()
    }

    #[test]
    fn aria_invalid_is_only_set_on_invalid_fields() {
        assert_eq!(aria_invalid(true), Some("true"));
        assert_eq!(aria_invalid(false), None);
    }

    #[test]
    fn field_label_keeps_label_primitive_rules() {
        assert_eq!(
            label_classes(Some(FIELD_LABEL_OVERRIDE)),
            "text-sm font-medium text-mw-grey mb-0"
        );
    }

    #[test]
    fn every_variant_and_size_rule_survives_resolution() {
        for (variant, variant_rules) in style_table::<ButtonVariant>() {
            for (size, size_rules) in style_table::<ButtonSize>() {
                let classes = button_classes(variant, size, None);
                let resolved: Vec<_> = classes.split_whitespace().collect();
                for rule in variant_rules.split_whitespace().chain(size_rules.split_whitespace()) {
                    assert!(
                        resolved.contains(&rule),
                        "{}/{} lost `{rule}`: {classes}",
                        variant.token(),
                        size.token()
                    );
                }
            }
        }
    }

    #[test]
    fn size_rules_win_regardless_of_variant() {
        for (size, size_rules) in style_table::<ButtonSize>() {
            let families = families_of(size_rules);
            let expected: Vec<_> = size_rules.split_whitespace().map(str::to_string).collect();
            for (variant, _) in style_table::<ButtonVariant>() {
                assert_eq!(
                    rules_in_families(&button_classes(variant, size, None), &families),
                    expected,
                    "{}/{}",
                    variant.token(),
                    size.token()
                );
            }
        }
    }

    #[test]
    fn primary_medium_button_has_single_background() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Md, None);
        let backgrounds: Vec<_> = classes
            .split_whitespace()
            .filter(|class| class.starts_with("bg-"))
            .collect();
        assert_eq!(backgrounds, vec!["bg-mw-yellow"]);
        assert!(classes.contains("px-4 py-2.5 text-base"));
    }

    #[test]
    fn button_override_replaces_justification() {
        let classes = button_classes(
            ButtonVariant::Ghost,
            ButtonSize::Sm,
            Some("w-full justify-start"),
        );
        assert!(!classes.contains("justify-center"));
        assert!(classes.ends_with("w-full justify-start"));
    }

    #[test]
    fn button_size_does_not_disturb_variant_colors() {
        let small = button_classes(ButtonVariant::Danger, ButtonSize::Xs, None);
        let large = button_classes(ButtonVariant::Danger, ButtonSize::Lg, None);
        for class in ["bg-mw-red", "text-white", "hover:bg-mw-dark-red"] {
            assert!(small.contains(class) && large.contains(class), "{class}");
        }
        assert!(small.contains("text-xs"));
        assert!(large.contains("text-lg"));
    }

    #[test]
    fn input_override_drops_conflicting_base_rules() {
        assert_eq!(
            input_classes(Some("rounded-none bg-mw-panel-grey")),
            "block w-full border border-mw-light-grey px-3 py-2 text-sm text-mw-black shadow-sm focus:border-mw-blue focus:outline-none focus:ring-2 focus:ring-mw-blue/40 disabled:cursor-not-allowed disabled:bg-mw-light-grey/40 disabled:text-mw-grey rounded-none bg-mw-panel-grey"
        );
    }

    #[test]
    fn label_margin_override_appends() {
        assert_eq!(label_classes(Some("mb-0")), "text-sm font-medium text-mw-grey mb-0");
    }

    #[test]
    fn error_text_tracks_severity() {
        assert_eq!(error_text_classes(ErrorSeverity::Error), "mt-0 text-xs text-validation-error");
        assert_eq!(
            error_text_classes(ErrorSeverity::Info),
            "mt-0 text-xs text-validation-info"
        );
    }

    #[test]
    fn field_without_icons_keeps_base_padding() {
        let decorations =
            form_field_decorations(None, None, None, false, ErrorSeverity::Error, None);
        assert_eq!(decorations.leading, IconSlot::Empty);
        assert_eq!(decorations.trailing, IconSlot::Empty);
        assert_eq!(decorations.input_class, input_classes(None));
    }

    #[test]
    fn left_icon_pads_input() {
        let decorations = form_field_decorations(
            Some(IconName::Mail),
            None,
            None,
            false,
            ErrorSeverity::Error,
            None,
        );
        assert_eq!(decorations.leading, IconSlot::Decorative(IconName::Mail));
        assert!(decorations.input_class.ends_with("px-3 py-2 text-sm text-mw-black shadow-sm focus:border-mw-blue focus:outline-none focus:ring-2 focus:ring-mw-blue/40 disabled:cursor-not-allowed disabled:bg-mw-light-grey/40 disabled:text-mw-grey pl-10"));
    }

    #[test]
    fn invalid_field_swaps_in_error_icon() {
        let decorations = form_field_decorations(
            Some(IconName::Mail),
            Some(IconName::Eye),
            Some(IconName::AlertCircle),
            true,
            ErrorSeverity::Warning,
            None,
        );
        assert_eq!(
            decorations.leading,
            IconSlot::Severity {
                icon: IconName::AlertCircle,
                severity: ErrorSeverity::Warning,
            }
        );
        assert_eq!(decorations.trailing, IconSlot::Decorative(IconName::Eye));
        assert!(decorations.input_class.contains("pl-10"));
        assert!(decorations.input_class.contains("pr-10"));
    }

    #[test]
    fn error_icon_without_left_icon_still_reserves_space() {
        let decorations = form_field_decorations(
            None,
            None,
            Some(IconName::AlertCircle),
            true,
            ErrorSeverity::Error,
            None,
        );
        assert!(decorations.leading.is_filled());
        assert!(decorations.input_class.contains("pl-10"));
    }

    #[test]
    fn error_icon_is_ignored_while_valid() {
        let decorations = form_field_decorations(
            None,
            None,
            Some(IconName::AlertCircle),
            false,
            ErrorSeverity::Error,
            None,
        );
        assert_eq!(decorations.leading, IconSlot::Empty);
        assert!(!decorations.input_class.contains("pl-10"));
    }

    #[test]
    fn caller_override_beats_icon_padding() {
        let decorations = form_field_decorations(
            Some(IconName::Search),
            None,
            None,
            false,
            ErrorSeverity::Error,
            Some("pl-12"),
        );
        assert!(!decorations.input_class.contains("pl-10"));
        assert!(decorations.input_class.ends_with("pl-12"));
    }
}
