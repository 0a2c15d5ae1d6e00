use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::header::{NavMode, SiteHeader};
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::badge::{Badge, BadgeTone};
use crate::components::ui::blocks::Feature;
use crate::components::ui::button::{Button, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::ui::layout::{Container, Section};
use crate::config::{COMPANY_NAME, STO_PLATFORM_NAME};
use crate::scroll::browser::use_reset_scroll_on_mount;

const ADVANTAGES: [(IconKind, &str, &str); 4] = [
    (
        IconKind::Coins,
        "소액 투자 가능",
        "높은 진입 장벽 없이 소액으로 부동산 프로젝트에 투자할 수 있습니다.",
    ),
    (
        IconKind::ShieldCheck,
        "규제 준수",
        "금융당국의 규제를 준수하는 합법적인 증권형 토큰입니다.",
    ),
    (
        IconKind::FileText,
        "투명한 기록",
        "블록체인 기반으로 모든 거래가 투명하게 기록됩니다.",
    ),
    (
        IconKind::Building,
        "유동성 확보",
        "전통적인 부동산 투자 대비 높은 유동성을 제공합니다.",
    ),
];

#[function_component(StoPage)]
pub fn sto_page() -> Html {
    use_reset_scroll_on_mount();

    let year = Local::now().year();

    html! {
        <div class="page">
            <SiteHeader mode={NavMode::CrossPage} brand={STO_PLATFORM_NAME} />

            <Section class={classes!("sto-hero")}>
                <Container>
                    <div class="sto-hero-inner">
                        <Badge tone={BadgeTone::Info}>{"Security Token Offering"}</Badge>
                        <h1>
                            {"부동산 프로젝트를 "}<span class="text-brand">{"디지털 증권"}</span>{"으로"}
                        </h1>
                        <p class="text-muted">
                            {"블록체인 기반 증권형 토큰으로 부동산 개발 프로젝트에 대한 투자를 혁신합니다. 소액 투자부터 대규모 자금 조달까지, 투명하고 효율적인 STO 솔루션을 제공합니다."}
                        </p>
                        <div class="sto-actions">
                            <Button class={classes!("sto-cta")}>{"STO 신청하기"}</Button>
                            <Button variant={ButtonVariant::Outline} class={classes!("sto-cta")}>
                                {"자세히 알아보기"}
                            </Button>
                        </div>
                    </div>
                </Container>
            </Section>

            <Section class={classes!("sto-advantages")}>
                <Container>
                    <h2>{"STO의 장점"}</h2>
                    <div class="sto-grid">
                        { for ADVANTAGES.iter().map(|(icon, title, desc)| html! {
                            <Feature icon={*icon} title={*title} desc={*desc} />
                        }) }
                    </div>
                </Container>
            </Section>

            <Section class={classes!("sto-coming-soon")}>
                <Container>
                    <Card class={classes!("sto-notice")}>
                        <CardHeader class={classes!("sto-notice-header")}>
                            <div class="sto-notice-icon">
                                <Icon kind={IconKind::Coins} class={classes!("icon-8")} />
                            </div>
                            <CardTitle class={classes!("sto-notice-title")}>{"서비스 준비 중입니다"}</CardTitle>
                        </CardHeader>
                        <CardContent class={classes!("sto-notice-content")}>
                            <p class="text-muted">
                                {"SBCity Platform의 STO 서비스는 현재 개발 및 금융당국 승인 절차를 진행 중입니다. 출시 소식을 가장 먼저 받아보시려면 아래 버튼을 눌러 알림을 신청해주세요."}
                            </p>
                            <Button class={classes!("sto-cta")}>{"출시 알림 신청"}</Button>
                        </CardContent>
                    </Card>
                </Container>
            </Section>

            <footer class="sto-footer">
                <Container class={classes!("sto-footer-inner")}>
                    <div class="sto-footer-brand">
                        <div class="brand-mark">
                            <Icon kind={IconKind::Building} class={classes!("icon-5")} />
                        </div>
                        <span class="brand-name">{ STO_PLATFORM_NAME }</span>
                    </div>
                    <p class="text-muted">{ format!("© {} {}. All rights reserved.", year, COMPANY_NAME) }</p>
                </Container>
            </footer>

            <style>
                {r#"
                    .page {
                        min-height: 100vh;
                        width: 100%;
                        background-color: var(--surface-bg);
                        color: var(--text-main);
                    }
                    .sto-hero {
                        padding: 80px 0;
                    }
                    .sto-hero-inner {
                        max-width: 768px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .sto-hero h1 {
                        margin: 24px 0 0;
                        font-size: 36px;
                        line-height: 1.25;
                        font-weight: 800;
                    }
                    .sto-hero p {
                        margin: 24px 0 0;
                        font-size: 18px;
                    }
                    .sto-actions {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 12px;
                        margin-top: 32px;
                    }
                    .sto-cta {
                        height: auto;
                        padding: 24px 32px;
                        font-size: 16px;
                    }
                    .sto-advantages {
                        padding: 64px 0;
                        background-color: var(--surface-panel);
                        border-top: 1px solid var(--stroke);
                        border-bottom: 1px solid var(--stroke);
                    }
                    .sto-advantages h2 {
                        margin: 0 0 48px;
                        text-align: center;
                        font-size: 24px;
                        font-weight: 700;
                    }
                    .sto-grid {
                        display: grid;
                        gap: 24px;
                    }
                    .sto-coming-soon {
                        padding: 80px 0;
                    }
                    .sto-notice {
                        max-width: 672px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .sto-notice-header {
                        align-items: center;
                        gap: 16px;
                        padding-top: 48px;
                        padding-bottom: 32px;
                    }
                    .sto-notice-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        border-radius: var(--radius-2xl);
                        background-color: color-mix(in srgb, var(--brand-accent) 10%, transparent);
                        color: var(--brand-accent);
                    }
                    .sto-notice-title {
                        font-size: 24px;
                    }
                    .sto-notice-content {
                        padding-bottom: 48px;
                    }
                    .sto-notice-content p {
                        margin: 0 0 24px;
                    }
                    .sto-footer {
                        border-top: 1px solid var(--stroke);
                        background-color: var(--surface-panel);
                    }
                    .sto-footer-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 16px;
                        padding-top: 48px;
                        padding-bottom: 48px;
                    }
                    .sto-footer-inner p {
                        margin: 0;
                        font-size: 14px;
                    }
                    .sto-footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                    }
                    .sto-footer-brand .brand-mark {
                        width: 36px;
                        height: 36px;
                    }
                    @media (min-width: 768px) {
                        .sto-hero { padding: 112px 0; }
                        .sto-hero h1 { font-size: 48px; }
                        .sto-advantages h2 { font-size: 30px; }
                        .sto-grid { grid-template-columns: repeat(2, 1fr); }
                        .sto-footer-inner { flex-direction: row; }
                    }
                    @media (min-width: 1024px) {
                        .sto-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}
