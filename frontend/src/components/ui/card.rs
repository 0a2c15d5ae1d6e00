use yew::prelude::*;

pub const STYLES: &str = r#"
    .card {
        border-radius: var(--radius-2xl);
        border: 1px solid var(--stroke);
        background-color: var(--surface-panel);
        color: var(--text-main);
        box-shadow: 0 1px 2px rgba(27, 42, 58, 0.05);
    }
    .card-header {
        display: flex;
        flex-direction: column;
        gap: 6px;
        padding: 24px;
    }
    .card-title {
        margin: 0;
        font-size: 18px;
        line-height: 1.3;
        font-weight: 600;
        letter-spacing: -0.01em;
    }
    .card-content {
        padding: 0 24px 24px;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-header", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardProps) -> Html {
    html! {
        <h3 class={classes!("card-title", props.class.clone())}>
            { for props.children.iter() }
        </h3>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
