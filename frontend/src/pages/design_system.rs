use log::warn;
use yew::prelude::*;

use crate::components::ui::badge::{Badge, BadgeTone};
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::ui::layout::{Container, Section};
use crate::theme::tokens::{
    export_json, ColorName, TypeScaleEntry, PALETTE, SPACING_SCALE, TYPE_SCALE,
};

const SPECIMENS: [(&str, &str); 7] = [
    ("44", "헤드라인 1 — The quick brown fox"),
    ("36", "헤드라인 2 — 도시를 개발합니다"),
    ("28", "헤드라인 3 — Project Planning"),
    ("22", "헤드라인 4 — 투명한 파이낸싱"),
    ("18", "본문 Large — 주거·업무·복합 단지 개발의 모든 것"),
    ("16", "본문 Medium — SBCity 플랫폼으로 시작하세요"),
    ("14", "캡션 — 실시간 프로젝트 현황을 확인하세요"),
];

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "Primary Button",
        ButtonVariant::Outline => "Outline Button",
        ButtonVariant::Secondary => "Secondary Button",
        ButtonVariant::Ghost => "Ghost Button",
        ButtonVariant::Link => "Link Button",
    }
}

fn size_label(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Default => "Default",
        ButtonSize::Sm => "Small",
        ButtonSize::Lg => "Large",
        ButtonSize::Icon => "+",
    }
}

/// Living style guide rendered straight from the token registry.
#[function_component(DesignSystemPreview)]
pub fn design_system_preview() -> Html {
    let token_json = use_memo(
        |_| {
            export_json().unwrap_or_else(|err| {
                warn!("failed to export design tokens: {}", err);
                String::from("{}")
            })
        },
        (),
    );

    html! {
        <Section id="design-system" class={classes!("design-system")}>
            <Container>
                <div class="ds-heading">
                    <div>
                        <h3>{"디자인 시스템"}</h3>
                        <p class="text-muted">{"색상 · 타이포그래피 · 스페이싱 · 컴포넌트"}</p>
                    </div>
                    <Badge tone={BadgeTone::Success}>{"v1.0"}</Badge>
                </div>

                <div class="ds-block">
                    <h4>{"색상 팔레트"}</h4>
                    <div class="ds-swatches">
                        { for ColorName::ALL.iter().map(|name| {
                            let token = name.token();
                            html! {
                                <div class="ds-swatch">
                                    <div class="ds-swatch-color" style={format!("background-color: {};", name.css_var())}></div>
                                    <div class="ds-swatch-body">
                                        <div class="ds-swatch-name">{ token.label }</div>
                                        <code class="text-muted">{ name.hex() }</code>
                                        <p class="text-muted">{ token.description }</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div class="ds-block">
                    <h4>{"타이포그래피"}</h4>
                    <div class="ds-panel ds-type">
                        { for SPECIMENS.iter().filter_map(|(label, text)| {
                            let entry = TypeScaleEntry::by_label(label)?;
                            let muted = (entry.size_px < 16).then_some("text-muted");
                            Some(html! { <div class={classes!(entry.class_name(), muted)}>{ *text }</div> })
                        }) }
                    </div>
                    <table class="ds-type-table">
                        <thead>
                            <tr><th>{"Size"}</th><th>{"Line height"}</th><th>{"Weight"}</th></tr>
                        </thead>
                        <tbody>
                            { for TYPE_SCALE.iter().map(|entry| html! {
                                <tr>
                                    <td>{ format!("{}px", entry.size_px) }</td>
                                    <td>{ format!("{}px", entry.line_height_px) }</td>
                                    <td>{ entry.weight.value().to_string() }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <div class="ds-block">
                    <h4>{"스페이싱 스케일"}</h4>
                    <div class="ds-panel ds-spacing">
                        { for SPACING_SCALE.iter().map(|px| html! {
                            <div class="ds-space">
                                <div class="ds-space-box" style={format!("width: {0}px; height: {0}px;", px)}></div>
                                <div class="ds-space-label">{ format!("{}px", px) }</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="ds-components">
                    <div>
                        <h4>{"버튼"}</h4>
                        <div class="ds-stack">
                            { for ButtonVariant::ALL.iter().map(|variant| html! {
                                <Button variant={*variant}>{ variant_label(*variant) }</Button>
                            }) }
                        </div>
                        <div class="ds-row">
                            { for ButtonSize::ALL.iter().map(|size| html! {
                                <Button size={*size} aria_label={size_label(*size)}>{ size_label(*size) }</Button>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h4>{"카드"}</h4>
                        <Card>
                            <CardHeader class={classes!("ds-card-header")}>
                                <CardTitle class={classes!("ds-card-title")}>{"카드 제목"}</CardTitle>
                            </CardHeader>
                            <CardContent class={classes!("ds-card-content")}>
                                {"이것은 기본 카드 컴포넌트입니다. 다양한 콘텐츠를 담을 수 있습니다."}
                            </CardContent>
                        </Card>
                    </div>
                    <div>
                        <h4>{"배지"}</h4>
                        <div class="ds-row">
                            <Badge>{"Information"}</Badge>
                            <Badge tone={BadgeTone::Success}>{"Success"}</Badge>
                        </div>
                    </div>
                </div>

                <div class="ds-block ds-export">
                    <h4>{ format!("토큰 JSON ({}개 색상)", PALETTE.len()) }</h4>
                    <pre class="ds-panel"><code>{ (*token_json).clone() }</code></pre>
                </div>
            </Container>

            <style>
                {r#"
                    .design-system {
                        padding: 80px 0;
                        background-color: var(--surface-panel);
                        border-top: 1px solid var(--stroke);
                    }
                    .ds-heading {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        margin-bottom: 40px;
                    }
                    .ds-heading h3 {
                        margin: 0;
                        font-size: 30px;
                        font-weight: 700;
                    }
                    .ds-heading p {
                        margin: 4px 0 0;
                    }
                    .ds-block {
                        margin-bottom: 48px;
                    }
                    .design-system h4 {
                        margin: 0 0 16px;
                        font-size: 20px;
                        font-weight: 600;
                    }
                    .ds-swatches {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 16px;
                    }
                    .ds-swatch {
                        border-radius: var(--radius-2xl);
                        border: 1px solid var(--stroke);
                        overflow: hidden;
                    }
                    .ds-swatch-color {
                        height: 96px;
                    }
                    .ds-swatch-body {
                        padding: 12px;
                        font-size: 12px;
                    }
                    .ds-swatch-name {
                        margin-bottom: 4px;
                        font-size: 14px;
                        font-weight: 600;
                    }
                    .ds-swatch-body p {
                        margin: 4px 0 0;
                    }
                    .ds-panel {
                        border-radius: var(--radius-2xl);
                        border: 1px solid var(--stroke);
                        padding: 24px;
                    }
                    .ds-type {
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .ds-type-table {
                        margin-top: 16px;
                        border-collapse: collapse;
                        font-size: 14px;
                        color: var(--text-muted);
                    }
                    .ds-type-table th, .ds-type-table td {
                        padding: 4px 16px 4px 0;
                        text-align: left;
                    }
                    .ds-spacing {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                    }
                    .ds-space {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 8px;
                    }
                    .ds-space-box {
                        border-radius: var(--radius-lg);
                        background-color: color-mix(in srgb, var(--brand-info) 20%, transparent);
                        border: 1px solid color-mix(in srgb, var(--brand-info) 30%, transparent);
                    }
                    .ds-space-label {
                        font-family: ui-monospace, monospace;
                        font-size: 12px;
                        color: var(--text-muted);
                    }
                    .ds-components {
                        display: grid;
                        gap: 32px;
                        margin-bottom: 48px;
                    }
                    .ds-stack {
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .ds-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 8px;
                        margin-top: 12px;
                    }
                    .ds-card-header {
                        padding-bottom: 8px;
                    }
                    .ds-card-title {
                        font-size: 16px;
                    }
                    .ds-card-content {
                        font-size: 14px;
                        color: var(--text-muted);
                    }
                    .ds-export pre {
                        margin: 0;
                        overflow-x: auto;
                        font-size: 12px;
                        background-color: var(--surface-bg);
                    }
                    @media (min-width: 768px) {
                        .ds-swatches { grid-template-columns: repeat(9, 1fr); }
                        .ds-components { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_specimen_uses_a_defined_size() {
        for (label, _) in SPECIMENS {
            assert!(TypeScaleEntry::by_label(label).is_some(), "no type scale entry {}", label);
        }
        assert_eq!(SPECIMENS.len(), TYPE_SCALE.len());
    }

    #[test]
    fn specimens_cover_the_whole_scale_in_order() {
        let classes: Vec<_> = SPECIMENS
            .iter()
            .filter_map(|(label, _)| TypeScaleEntry::by_label(label))
            .map(|entry| entry.class_name())
            .collect();
        let expected: Vec<_> = TYPE_SCALE.iter().map(|entry| entry.class_name()).collect();
        assert_eq!(classes, expected);
    }

    #[test]
    fn palette_grid_shows_every_color() {
        assert_eq!(ColorName::ALL.len(), PALETTE.len());
        assert!(ColorName::ALL.contains(&ColorName::SurfacePanel));
        assert!(ColorName::ALL.contains(&ColorName::Stroke));
    }
}
