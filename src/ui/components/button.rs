//! Button and link-button components with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Outline => "bg-transparent border border-panelBorder text-textPrimary hover:bg-panel",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-10 w-10",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    format!("{BASE_CLASSES} {} {} {extra}", variant.classes(), size.classes())
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary button_type="submit">
///         "Send"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    view! {
        <button type=button_type class=button_classes(variant, size, class)>
            {children()}
        </button>
    }
}

/// Anchor styled as a button, for navigation targets outside this app
/// (the auth provider's login endpoint, the home page).
#[component]
pub fn LinkButton(
    /// Link target.
    #[prop(into)]
    href: String,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Element id.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Link content.
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href id=id class=button_classes(variant, size, "")>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_combine_variant_and_size() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Sm, "shrink-0");
        assert!(classes.starts_with("inline-flex"));
        assert!(classes.contains("border-panelBorder"));
        assert!(classes.contains("h-8 px-3"));
        assert!(classes.ends_with("shrink-0"));
    }

    #[test]
    fn link_button_renders_anchor_with_id() {
        let html = Owner::new().with(|| {
            view! {
                <LinkButton href="/.auth/login/aad" id="login-button">"Login"</LinkButton>
            }
            .to_html()
        });
        assert!(html.contains(r#"href="/.auth/login/aad""#));
        assert!(html.contains(r#"id="login-button""#));
        assert!(html.contains("Login"));
    }
}
