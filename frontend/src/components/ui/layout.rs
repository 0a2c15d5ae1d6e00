use yew::prelude::*;

pub const STYLES: &str = r#"
    .section {
        width: 100%;
    }
    .container {
        margin: 0 auto;
        max-width: 1280px;
        padding: 0 20px;
        box-sizing: border-box;
    }
    @media (min-width: 768px) {
        .container {
            padding: 0 32px;
        }
    }
    .divider {
        height: 1px;
        width: 100%;
        background-color: var(--stroke);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-width page band. Sections with an `id` are anchor targets.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Divider)]
pub fn divider() -> Html {
    html! { <div class="divider"></div> }
}
