use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Info,
    Success,
    /// For use on dark imagery.
    Light,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Info => "badge-info",
            BadgeTone::Success => "badge-success",
            BadgeTone::Light => "badge-light",
        }
    }
}

pub const STYLES: &str = r#"
    .badge {
        display: inline-flex;
        align-items: center;
        border-radius: 9999px;
        padding: 4px 12px;
        font-size: 12px;
        line-height: 16px;
        font-weight: 500;
        border: 1px solid color-mix(in srgb, currentColor 10%, transparent);
    }
    .badge-info {
        background-color: color-mix(in srgb, var(--brand-info) 10%, transparent);
        color: var(--brand-info);
    }
    .badge-success {
        background-color: color-mix(in srgb, var(--brand-accent) 10%, transparent);
        color: var(--brand-accent);
    }
    .badge-light {
        background-color: rgba(255, 255, 255, 0.2);
        color: #FFFFFF;
        backdrop-filter: blur(4px);
        border-color: rgba(255, 255, 255, 0.4);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub tone: BadgeTone,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.tone.class())}>
            { for props.children.iter() }
        </span>
    }
}
