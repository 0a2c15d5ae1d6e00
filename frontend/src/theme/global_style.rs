use yew::prelude::*;

use super::tokens::{FONT_DISPLAY, FONT_SANS, PALETTE, RADII, SPACING_SCALE, TYPE_SCALE};
use crate::components::ui::button::button_stylesheet;
use crate::components::{header, icons, scroll_top, ui};

/// `:root` custom properties for every token.
pub fn root_custom_properties() -> String {
    let mut css = String::from(":root {\n");
    for token in PALETTE.iter() {
        css.push_str(&format!("    {}: {};\n", token.css_property(), token.hex));
    }
    for radius in RADII.iter() {
        css.push_str(&format!("    --radius-{}: {}px;\n", radius.name, radius.px));
    }
    for px in SPACING_SCALE {
        css.push_str(&format!("    --space-{}: {}px;\n", px, px));
    }
    css.push_str(&format!("    --font-sans: {};\n", FONT_SANS));
    css.push_str(&format!("    --font-display: {};\n", FONT_DISPLAY));
    css.push_str("}\n");
    css
}

/// `.text-44` style classes carrying size, line height and weight together.
pub fn type_scale_classes() -> String {
    TYPE_SCALE
        .iter()
        .map(|entry| {
            format!(
                ".{} {{ font-size: {}px; line-height: {}px; font-weight: {}; }}\n",
                entry.class_name(),
                entry.size_px,
                entry.line_height_px,
                entry.weight.value()
            )
        })
        .collect()
}

const BASE: &str = r#"
    *, *::before, *::after { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        font-family: var(--font-sans);
        background-color: var(--surface-bg);
        color: var(--text-main);
        -webkit-font-smoothing: antialiased;
        -moz-osx-font-smoothing: grayscale;
    }
    h1, h2, h3, h4, h5 { font-family: var(--font-display); }
    img { display: block; max-width: 100%; }
    .text-muted { color: var(--text-muted); }
    .text-brand { color: var(--brand-primary); }
    .text-accent { color: var(--brand-accent); }
"#;

pub fn stylesheet() -> String {
    [
        root_custom_properties(),
        BASE.to_string(),
        type_scale_classes(),
        button_stylesheet(),
        ui::badge::STYLES.to_string(),
        ui::card::STYLES.to_string(),
        ui::layout::STYLES.to_string(),
        ui::blocks::STYLES.to_string(),
        icons::STYLES.to_string(),
        header::STYLES.to_string(),
        scroll_top::STYLES.to_string(),
    ]
    .concat()
}

/// Mounted once by the application shell.
#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    let css = use_memo(|_| stylesheet(), ());

    html! {
        <style>{ (*css).clone() }</style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tokens::ColorName;

    #[test]
    fn root_defines_every_color() {
        let css = root_custom_properties();
        for name in ColorName::ALL {
            let token = name.token();
            assert!(css.contains(&format!("{}: {};", token.css_property(), token.hex)));
        }
        assert!(css.contains("--radius-2xl: 20px;"));
        assert!(css.contains("--space-64: 64px;"));
    }

    #[test]
    fn type_scale_classes_carry_all_three_values() {
        let css = type_scale_classes();
        assert!(css.contains(".text-44 { font-size: 44px; line-height: 56px; font-weight: 800; }"));
        assert!(css.contains(".text-14 { font-size: 14px; line-height: 22px; font-weight: 400; }"));
        assert_eq!(css.lines().count(), TYPE_SCALE.len());
    }

    #[test]
    fn button_rules_follow_tokens() {
        let css = stylesheet();
        let root = css.find(":root").unwrap();
        let buttons = css.find(":where(.btn)").unwrap();
        assert!(root < buttons);
    }
}
