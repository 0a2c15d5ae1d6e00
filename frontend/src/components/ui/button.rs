use yew::prelude::*;

pub const BUTTON_BASE_CLASS: &str = "btn";

const BASE_DECLARATIONS: &str = "display: inline-flex; align-items: center; justify-content: center; \
    gap: 8px; white-space: nowrap; border: 1px solid transparent; border-radius: var(--radius-xl); \
    font-family: inherit; font-size: 14px; line-height: 20px; font-weight: 500; cursor: pointer; \
    text-decoration: none; transition: color 150ms, background-color 150ms, border-color 150ms;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Default,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
        }
    }

    /// (resting, hover) declarations.
    fn declarations(self) -> (&'static str, &'static str) {
        match self {
            ButtonVariant::Default => (
                "background-color: var(--brand-primary); color: #FFFFFF;",
                "background-color: var(--brand-secondary);",
            ),
            ButtonVariant::Outline => (
                "border-color: var(--stroke); background-color: transparent; color: var(--brand-primary);",
                "background-color: color-mix(in srgb, var(--brand-primary) 5%, transparent);",
            ),
            ButtonVariant::Secondary => (
                "background-color: var(--brand-secondary); color: #FFFFFF;",
                "background-color: color-mix(in srgb, var(--brand-secondary) 80%, transparent);",
            ),
            ButtonVariant::Ghost => (
                "background-color: transparent; color: var(--text-main);",
                "background-color: var(--surface-bg);",
            ),
            ButtonVariant::Link => (
                "background-color: transparent; color: var(--brand-primary); text-underline-offset: 4px;",
                "text-decoration: underline;",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Default,
        ButtonSize::Sm,
        ButtonSize::Lg,
        ButtonSize::Icon,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-size-default",
            ButtonSize::Sm => "btn-size-sm",
            ButtonSize::Lg => "btn-size-lg",
            ButtonSize::Icon => "btn-size-icon",
        }
    }

    fn declarations(self) -> &'static str {
        match self {
            ButtonSize::Default => "height: 40px; padding: 8px 16px;",
            ButtonSize::Sm => "height: 36px; padding: 0 12px; border-radius: var(--radius-lg);",
            ButtonSize::Lg => "height: 44px; padding: 0 32px; border-radius: var(--radius-xl);",
            ButtonSize::Icon => "height: 40px; width: 40px; padding: 0;",
        }
    }
}

/// Compose the classes of a button: base, variant, size, then the caller's
/// own classes.
///
/// Every rule in [`button_stylesheet`] sits inside `:where(...)` and has zero
/// specificity, so any caller class wins where it sets the same property.
pub fn button_variants(variant: ButtonVariant, size: ButtonSize, overrides: &Classes) -> Classes {
    let mut classes = Classes::from(BUTTON_BASE_CLASS);
    classes.push(variant.class());
    classes.push(size.class());
    classes.push(overrides.clone());
    classes
}

pub fn button_stylesheet() -> String {
    let mut css = format!(
        ":where(.{base}) {{ {decl} }}\n\
         :where(.{base}:focus-visible) {{ outline: none; box-shadow: 0 0 0 2px #FFFFFF, 0 0 0 4px var(--brand-primary); }}\n\
         :where(.{base}:disabled) {{ pointer-events: none; opacity: 0.5; }}\n",
        base = BUTTON_BASE_CLASS,
        decl = BASE_DECLARATIONS,
    );
    for variant in ButtonVariant::ALL {
        let (rest, hover) = variant.declarations();
        css.push_str(&format!(
            ":where(.{class}) {{ {rest} }}\n:where(.{class}:hover) {{ {hover} }}\n",
            class = variant.class(),
        ));
    }
    for size in ButtonSize::ALL {
        css.push_str(&format!(
            ":where(.{}) {{ {} }}\n",
            size.class(),
            size.declarations()
        ));
    }
    css
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_variants(props.variant, props.size, &props.class);

    html! {
        <button
            type="button"
            class={class}
            onclick={props.onclick.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_resolve_to_primary() {
        let classes = button_variants(ButtonVariant::default(), ButtonSize::default(), &Classes::new());
        assert_eq!(classes.to_string(), "btn btn-default btn-size-default");
    }

    #[test]
    fn overrides_come_last() {
        let overrides = classes!("hero-cta", "shadow-xl");
        let classes = button_variants(ButtonVariant::Outline, ButtonSize::Lg, &overrides);
        assert_eq!(classes.to_string(), "btn btn-outline btn-size-lg hero-cta shadow-xl");
    }

    #[test]
    fn resolution_is_deterministic() {
        let overrides = classes!("demo-request");
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let first = button_variants(variant, size, &overrides).to_string();
                let second = button_variants(variant, size, &overrides).to_string();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn every_pairing_is_distinct() {
        let mut seen = HashSet::new();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                assert!(seen.insert(button_variants(variant, size, &Classes::new()).to_string()));
            }
        }
        assert_eq!(seen.len(), 20);

        let variant_styles: HashSet<_> = ButtonVariant::ALL.iter().map(|v| v.declarations()).collect();
        assert_eq!(variant_styles.len(), ButtonVariant::ALL.len());
        let size_styles: HashSet<_> = ButtonSize::ALL.iter().map(|s| s.declarations()).collect();
        assert_eq!(size_styles.len(), ButtonSize::ALL.len());
    }

    #[test]
    fn stylesheet_has_zero_specificity_rules_for_every_class() {
        let css = button_stylesheet();
        assert!(css.starts_with(":where(.btn) {"));
        for variant in ButtonVariant::ALL {
            assert!(css.contains(&format!(":where(.{}) {{", variant.class())));
            assert!(css.contains(&format!(":where(.{}:hover) {{", variant.class())));
        }
        for size in ButtonSize::ALL {
            assert!(css.contains(&format!(":where(.{}) {{", size.class())));
        }
        assert!(!css.contains("\n.btn"));
    }

    #[test]
    fn state_selectors_stay_inside_where() {
        let css = button_stylesheet();
        for line in css.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let selector = line.split(" {").next().unwrap_or_default();
            assert!(
                selector.starts_with(":where(") && selector.ends_with(')'),
                "selector carries specificity: {}",
                selector
            );
        }
        assert!(css.contains(":where(.btn:focus-visible) {"));
        assert!(css.contains(":where(.btn:disabled) {"));
    }
}
