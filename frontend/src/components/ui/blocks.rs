use yew::prelude::*;

use super::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icons::{Icon, IconKind};

pub const STYLES: &str = r#"
    .feature-card {
        height: 100%;
    }
    .feature-card .card-header {
        gap: 12px;
    }
    .feature-icon {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 48px;
        height: 48px;
        border-radius: var(--radius-2xl);
        background-color: color-mix(in srgb, var(--brand-primary) 10%, transparent);
        color: var(--brand-primary);
    }
    .feature-card .card-title {
        font-size: 20px;
    }
    .feature-desc {
        margin: 0;
        color: var(--text-muted);
        line-height: 1.625;
    }
    .step {
        position: relative;
        padding-left: 40px;
    }
    .step-num {
        position: absolute;
        left: 0;
        top: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 32px;
        height: 32px;
        border-radius: 9999px;
        background-color: var(--brand-primary);
        color: #FFFFFF;
        font-size: 14px;
        font-weight: 600;
    }
    .step h4 {
        margin: 0 0 8px;
        color: var(--text-main);
        font-weight: 600;
    }
    .step p {
        margin: 0;
        color: var(--text-muted);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FeatureProps {
    pub icon: IconKind,
    pub title: AttrValue,
    pub desc: AttrValue,
}

#[function_component(Feature)]
pub fn feature(props: &FeatureProps) -> Html {
    html! {
        <Card class={classes!("feature-card")}>
            <CardHeader>
                <div class="feature-icon">
                    <Icon kind={props.icon} class={classes!("icon-6")} />
                </div>
                <CardTitle>{ props.title.clone() }</CardTitle>
            </CardHeader>
            <CardContent>
                <p class="feature-desc">{ props.desc.clone() }</p>
            </CardContent>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepProps {
    pub num: AttrValue,
    pub title: AttrValue,
    pub desc: AttrValue,
}

/// Numbered process step.
#[function_component(Step)]
pub fn step(props: &StepProps) -> Html {
    html! {
        <div class="step">
            <div class="step-num">{ props.num.clone() }</div>
            <h4>{ props.title.clone() }</h4>
            <p>{ props.desc.clone() }</p>
        </div>
    }
}
