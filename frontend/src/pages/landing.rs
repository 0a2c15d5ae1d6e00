use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::header::{NavMode, SiteHeader};
use crate::components::icons::{Icon, IconKind};
use crate::components::scroll_top::ScrollTopButton;
use crate::components::ui::badge::{Badge, BadgeTone};
use crate::components::ui::blocks::{Feature, Step};
use crate::components::ui::button::{Button, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::ui::layout::{Container, Divider, Section};
use crate::config::{COMPANY_NAME, PLATFORM_NAME};
use crate::pages::design_system::DesignSystemPreview;
use crate::scroll::browser::{use_scroll_past_threshold, BrowserViewport};
use crate::scroll::controller::{anchor_from_fragment, navigate_to_anchor, scroll_to_top, Viewport};

const HERO_CHECKS: [&str; 3] = ["실시간 프로젝트 현황", "투명한 자금 관리", "데이터 기반 의사결정"];

const PROOF_ITEMS: [(IconKind, &str); 4] = [
    (IconKind::ShieldCheck, "데이터 보안 인증"),
    (IconKind::Award, "부동산 개발 전문성"),
    (IconKind::FileCheck, "법무 검토 완료"),
    (IconKind::Users, "투자자 네트워크"),
];

const PROBLEMS: [&str; 3] = [
    "투자자와 시행사 간 정보 비대칭",
    "수기 중심의 비효율적인 프로젝트 관리",
    "실시간 현황 파악의 어려움",
];

const SOLUTIONS: [&str; 3] = [
    "통합 대시보드로 프로젝트 전체 현황 한눈에 파악",
    "실시간 자금 흐름 추적 및 투명한 회계 관리",
    "데이터 기반 의사결정 지원 시스템",
];

const FEATURES: [(IconKind, &str, &str); 4] = [
    (
        IconKind::Layers,
        "프로젝트 기획",
        "주거, 업무, 복합 단지 개발 프로젝트의 체계적인 기획과 수익성 분석을 지원합니다.",
    ),
    (
        IconKind::TrendingUp,
        "투명한 파이낸싱",
        "투자자와 시행사 간 실시간 자금 현황 공유와 투명한 정산 프로세스를 제공합니다.",
    ),
    (
        IconKind::Network,
        "이해관계자 연결",
        "투자자, 시행사, 시공사 등 모든 이해관계자를 하나의 플랫폼에서 연결합니다.",
    ),
    (
        IconKind::LineChart,
        "데이터 분석",
        "프로젝트 진행 현황, 재무 지표, 리스크 요인을 실시간으로 분석하고 시각화합니다.",
    ),
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "1",
        "프로젝트 등록",
        "토지 정보, 개발 계획, 사업 구조 등 기본 정보를 등록합니다. 민감한 데이터는 암호화되어 안전하게 보관됩니다.",
    ),
    (
        "2",
        "투자자 매칭",
        "등록된 프로젝트에 관심 있는 투자자를 매칭하고, 상세 정보를 공유합니다. 전자서명으로 빠르고 안전하게 계약을 진행합니다.",
    ),
    (
        "3",
        "실시간 관리",
        "프로젝트 진행 현황, 자금 집행 내역, 주요 이슈를 실시간으로 모니터링하고 이해관계자들과 투명하게 공유합니다.",
    ),
];

/// Bar heights of the mock yield chart, in percent.
const CHART_BARS: [u32; 7] = [40, 55, 45, 70, 65, 80, 75];

const ACTIVITY_LOG: [(IconKind, &str); 3] = [
    (IconKind::FileCheck, "투자 계약서 전자서명 완료"),
    (IconKind::ShieldCheck, "1차 자금 집행 승인 (₩50B)"),
    (IconKind::Sparkles, "월간 리포트 자동 생성"),
];

const TRUST_CATEGORIES: [(&str, [&str; 3]); 3] = [
    ("데이터 암호화", ["AES-256 암호화", "안전한 데이터 저장소", "접근 권한 관리"]),
    ("투명한 기록", ["모든 거래 이력 추적", "변경 불가능한 로그", "실시간 감사 추적"]),
    ("규제 준수", ["금융 규정 준수", "개인정보보호법 대응", "정기 보안 감사"]),
];

struct UseCase {
    icon: IconKind,
    title: &'static str,
    desc: &'static str,
    metrics: [&'static str; 3],
}

const USE_CASES: [UseCase; 3] = [
    UseCase {
        icon: IconKind::Home,
        title: "주거 단지 개발",
        desc: "아파트, 빌라 등 주거 시설 개발 프로젝트",
        metrics: ["평균 수익률 7-9%", "투자자 만족도 높음", "안정적인 수요 예측"],
    },
    UseCase {
        icon: IconKind::Briefcase,
        title: "업무 시설 개발",
        desc: "오피스 빌딩, 업무용 복합시설 개발",
        metrics: ["임대 수익 안정적", "장기 투자 선호", "프라임 입지 중심"],
    },
    UseCase {
        icon: IconKind::Building,
        title: "복합 단지 개발",
        desc: "주거·상업·업무가 결합된 대규모 개발",
        metrics: ["높은 시너지 효과", "다각화된 수익 구조", "지역 랜드마크"],
    },
];

const CTA_CHECKS: [&str; 3] = ["신용카드 불필요", "5분 내 시작 가능", "언제든 문의 가능"];

const FOOTER_SOLUTIONS: [(&str, &str); 4] = [
    ("프로젝트 기획", "#features"),
    ("투명한 파이낸싱", "#features"),
    ("데이터 분석", "#features"),
    ("활용 사례", "#cases"),
];

const FOOTER_COMPANY: [&str; 4] = ["회사 소개", "팀", "채용", "문의하기"];

const FOOTER_LEGAL: [&str; 3] = ["개인정보처리방침", "이용약관", "보안정책"];

fn check_item(text: &'static str) -> Html {
    html! {
        <div class="check-item">
            <Icon kind={IconKind::CheckCircle} class={classes!("icon-4", "text-accent")} />
            { text }
        </div>
    }
}

/// Honor a `/#section` fragment once the sections exist, otherwise start at
/// the top.
#[hook]
fn use_initial_anchor() {
    use_effect_with_deps(
        move |_| {
            if let Some(viewport) = BrowserViewport::new() {
                let fragment = viewport.window().location().hash().unwrap_or_default();
                match anchor_from_fragment(&fragment) {
                    Some(target) => {
                        navigate_to_anchor(&viewport, target);
                    }
                    None if viewport.scroll_offset() > 0.0 => {
                        viewport.window().scroll_to_with_x_and_y(0.0, 0.0);
                    }
                    None => {}
                }
            }
            || ()
        },
        (),
    );
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_scroll_top = use_scroll_past_threshold();
    use_initial_anchor();

    let on_scroll_top = Callback::from(|_: ()| {
        if let Some(viewport) = BrowserViewport::new() {
            scroll_to_top(&viewport);
        }
    });

    let year = Local::now().year();

    html! {
        <div class="page">
            <SiteHeader mode={NavMode::InPage} brand={PLATFORM_NAME} />
            <ScrollTopButton visible={show_scroll_top} on_activate={on_scroll_top} />

            // Hero
            <Section id="hero" class={classes!("hero")}>
                <div class="hero-backdrop">
                    <img src="/images/hero/smartBioCity_hero.webp" alt="SmartBioCity Platform" />
                    <div class="hero-overlay"></div>
                </div>
                <Container class={classes!("hero-content")}>
                    <div class="hero-inner">
                        <Badge tone={BadgeTone::Light}>{"프로젝트 기획 × 투명한 파이낸싱"}</Badge>
                        <h1>
                            {"데이터로 기획하고, "}<span class="text-accent">{"투명하게"}</span>{" 연결하는"}
                            <br />{"도시개발 플랫폼"}
                        </h1>
                        <p class="hero-lead">
                            {"주거·업무·복합 단지 개발 시 프로젝트 기획부터 투자자-시행사 간 투명한 파이낸싱까지, 모든 프로세스를 하나의 플랫폼에서 관리하세요."}
                        </p>
                        <div class="hero-actions">
                            <Button class={classes!("hero-cta")}>
                                {"프로젝트 시작하기"}
                                <Icon kind={IconKind::ArrowRight} class={classes!("icon-5")} />
                            </Button>
                            <Button variant={ButtonVariant::Outline} class={classes!("hero-cta", "hero-cta-glass")}>
                                {"솔루션 소개서 받기"}
                                <Icon kind={IconKind::FileDown} class={classes!("icon-5")} />
                            </Button>
                        </div>
                        <div class="hero-checks">
                            { for HERO_CHECKS.iter().map(|text| html! {
                                <div class="hero-check">
                                    <Icon kind={IconKind::CheckCircle} class={classes!("icon-5", "text-accent")} />
                                    { *text }
                                </div>
                            }) }
                        </div>
                    </div>
                </Container>
            </Section>

            // Social proof
            <Section class={classes!("proof")}>
                <Container class={classes!("proof-grid")}>
                    { for PROOF_ITEMS.iter().map(|(icon, text)| html! {
                        <div class="proof-item">
                            <Icon kind={*icon} class={classes!("icon-4")} />
                            { *text }
                        </div>
                    }) }
                </Container>
            </Section>

            <Divider />

            // Problem -> solution
            <Section class={classes!("band")}>
                <Container class={classes!("two-col")}>
                    <div>
                        <h2 class="col-title">{"도시개발의 과제"}</h2>
                        <p class="text-muted col-lead">
                            {"복잡한 이해관계자 구조, 불투명한 자금 흐름, 분절된 정보 관리—도시개발 프로젝트는 기획 단계부터 많은 어려움에 직면합니다."}
                        </p>
                        <ul class="point-list">
                            { for PROBLEMS.iter().map(|text| html! {
                                <li><span class="dot"></span><span>{ *text }</span></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h2 class="col-title">{"SBCity의 솔루션"}</h2>
                        <p class="text-muted col-lead">
                            {"단일 플랫폼에서 프로젝트 기획·투자·운영을 통합 관리하고, 투자자와 시행사 간 실시간 투명한 정보 공유를 제공합니다."}
                        </p>
                        <ul class="point-list">
                            { for SOLUTIONS.iter().map(|text| html! {
                                <li>
                                    <Icon kind={IconKind::CheckCircle} class={classes!("icon-5", "text-accent")} />
                                    <span>{ *text }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </Container>
            </Section>

            // Features
            <Section id="features" class={classes!("band", "band-lg")}>
                <Container>
                    <div class="section-heading">
                        <h3>{"핵심 기능"}</h3>
                        <p class="text-muted">{"도시개발 프로젝트의 성공을 위한 4가지 핵심 기능을 제공합니다."}</p>
                    </div>
                    <div class="grid grid-4">
                        { for FEATURES.iter().map(|(icon, title, desc)| html! {
                            <Feature icon={*icon} title={*title} desc={*desc} />
                        }) }
                    </div>
                </Container>
            </Section>

            // How it works
            <Section id="how" class={classes!("band", "band-panel")}>
                <Container class={classes!("two-col", "two-col-center")}>
                    <div class="steps">
                        <h3>{"어떻게 작동하나요?"}</h3>
                        <p class="text-muted">{"간단한 3단계로 프로젝트를 시작하고 관리할 수 있습니다."}</p>
                        { for STEPS.iter().map(|(num, title, desc)| html! {
                            <Step num={*num} title={*title} desc={*desc} />
                        }) }
                    </div>
                    <div class="mock-dashboard">
                        <Card>
                            <CardHeader class={classes!("mock-card-header")}>
                                <CardTitle class={classes!("mock-card-title")}>
                                    <Icon kind={IconKind::TrendingUp} class={classes!("icon-4")} />
                                    {"수익률 추이"}
                                </CardTitle>
                            </CardHeader>
                            <CardContent>
                                <div class="mock-chart">
                                    { for CHART_BARS.iter().map(|height| html! {
                                        <div class="mock-bar" style={format!("height: {}%;", height)}></div>
                                    }) }
                                </div>
                            </CardContent>
                        </Card>
                        <Card>
                            <CardHeader class={classes!("mock-card-header")}>
                                <CardTitle class={classes!("mock-card-title")}>
                                    <Icon kind={IconKind::Lock} class={classes!("icon-4")} />
                                    {"최근 활동 로그"}
                                </CardTitle>
                            </CardHeader>
                            <CardContent class={classes!("activity-log")}>
                                { for ACTIVITY_LOG.iter().map(|(icon, text)| html! {
                                    <div class="activity-item">
                                        <Icon kind={*icon} class={classes!("icon-4", "text-brand")} />
                                        <span class="text-muted">{ *text }</span>
                                    </div>
                                }) }
                            </CardContent>
                        </Card>
                    </div>
                </Container>
            </Section>

            // Trust and security
            <Section id="trust" class={classes!("band")}>
                <Container>
                    <div class="section-heading">
                        <Badge tone={BadgeTone::Success}>{"신뢰성 & 보안"}</Badge>
                        <h3 class="badge-title">{"안전하고 투명한 플랫폼"}</h3>
                        <p class="text-muted">{"금융급 보안 체계와 투명한 정보 공개로 모든 참여자의 신뢰를 보장합니다."}</p>
                    </div>
                    <div class="grid grid-3">
                        { for TRUST_CATEGORIES.iter().map(|(title, items)| html! {
                            <Card>
                                <CardHeader>
                                    <CardTitle>{ *title }</CardTitle>
                                </CardHeader>
                                <CardContent class={classes!("check-list")}>
                                    { for items.iter().copied().map(check_item) }
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </Container>
            </Section>

            // Use cases
            <Section id="cases" class={classes!("band", "band-panel")}>
                <Container>
                    <div class="section-heading">
                        <h3>{"활용 사례"}</h3>
                        <p class="text-muted">{"다양한 유형의 도시개발 프로젝트에 최적화된 솔루션을 제공합니다."}</p>
                    </div>
                    <div class="grid grid-3">
                        { for USE_CASES.iter().map(|case| html! {
                            <Card class={classes!("case-card")}>
                                <CardHeader>
                                    <div class="case-title">
                                        <div class="case-icon">
                                            <Icon kind={case.icon} class={classes!("icon-5")} />
                                        </div>
                                        <CardTitle>{ case.title }</CardTitle>
                                    </div>
                                    <p class="case-desc text-muted">{ case.desc }</p>
                                </CardHeader>
                                <CardContent class={classes!("check-list")}>
                                    { for case.metrics.iter().copied().map(check_item) }
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </Container>
            </Section>

            // Final call to action
            <Section class={classes!("band")}>
                <Container>
                    <div class="final-cta">
                        <h3>{"지금 바로 시작하세요"}</h3>
                        <p class="text-muted">
                            {"복잡한 도시개발 프로젝트, SBCity 플랫폼으로 간편하게 관리하세요. 투자자와 시행사 모두에게 투명하고 효율적인 경험을 제공합니다."}
                        </p>
                        <div class="cta-actions">
                            <Button class={classes!("cta-button")}>{"무료 데모 신청하기"}</Button>
                            <Button variant={ButtonVariant::Outline} class={classes!("cta-button")}>
                                {"투자자로 시작하기"}
                            </Button>
                        </div>
                        <div class="cta-checks">
                            { for CTA_CHECKS.iter().copied().map(check_item) }
                        </div>
                    </div>
                </Container>
            </Section>

            <DesignSystemPreview />

            <footer class="site-footer">
                <Container class={classes!("footer-inner")}>
                    <div class="footer-grid">
                        <div class="footer-about">
                            <div class="footer-brand">
                                <div class="brand-mark">
                                    <Icon kind={IconKind::Building} class={classes!("icon-5")} />
                                </div>
                                <span class="brand-name">{ PLATFORM_NAME }</span>
                            </div>
                            <p class="text-muted">
                                {"주거·업무·복합 단지 개발의 기획부터 투자, 운영까지 모든 프로세스를 데이터와 투명성으로 연결합니다."}
                            </p>
                        </div>
                        <div>
                            <h5>{"솔루션"}</h5>
                            <ul class="footer-links">
                                { for FOOTER_SOLUTIONS.iter().map(|(label, href)| html! {
                                    <li><a href={*href}>{ *label }</a></li>
                                }) }
                            </ul>
                        </div>
                        <div>
                            <h5>{"회사"}</h5>
                            <ul class="footer-links">
                                { for FOOTER_COMPANY.iter().map(|label| html! {
                                    <li><a href="#">{ *label }</a></li>
                                }) }
                            </ul>
                        </div>
                    </div>
                    <Divider />
                    <div class="footer-bottom">
                        <p class="text-muted">{ format!("© {} {}. All rights reserved.", year, COMPANY_NAME) }</p>
                        <div class="footer-legal">
                            { for FOOTER_LEGAL.iter().map(|label| html! {
                                <a href="#">{ *label }</a>
                            }) }
                        </div>
                    </div>
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
                    .hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.7));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        padding-top: 96px;
                        padding-bottom: 96px;
                    }
                    .hero-inner {
                        max-width: 896px;
                        margin: 0 auto;
                        text-align: center;
                        animation: hero-rise 600ms ease-out both;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero h1 {
                        margin: 20px 0 0;
                        font-size: 36px;
                        line-height: 1.25;
                        font-weight: 800;
                        color: #FFFFFF;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.35);
                    }
                    .hero-lead {
                        margin: 24px auto 0;
                        max-width: 672px;
                        font-size: 18px;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-actions, .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                        justify-content: center;
                        margin-top: 40px;
                    }
                    .hero-cta {
                        height: 48px;
                        padding: 0 32px;
                        font-size: 16px;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    }
                    .hero-cta-glass {
                        background-color: rgba(255, 255, 255, 0.1);
                        border-color: rgba(255, 255, 255, 0.3);
                        color: #FFFFFF;
                        backdrop-filter: blur(4px);
                    }
                    .hero-cta-glass:hover {
                        background-color: rgba(255, 255, 255, 0.2);
                    }
                    .hero-checks {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 24px;
                        margin-top: 40px;
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-check {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 8px 16px;
                        border-radius: 9999px;
                        background-color: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                    }
                    @media (min-width: 768px) {
                        .hero-content { padding-top: 128px; padding-bottom: 128px; }
                        .hero h1 { font-size: 48px; }
                        .hero-lead { font-size: 20px; }
                    }
                    @media (min-width: 1024px) {
                        .hero-content { padding-top: 160px; padding-bottom: 160px; }
                        .hero h1 { font-size: 60px; }
                    }
                    .proof {
                        padding: 40px 0;
                    }
                    .proof-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                    }
                    .proof-item {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        padding: 16px 0;
                        border-radius: var(--radius-2xl);
                        border: 1px solid var(--stroke);
                        background-color: var(--surface-panel);
                        font-size: 14px;
                        color: var(--text-muted);
                    }
                    .band {
                        padding: 64px 0;
                    }
                    .band-panel {
                        background-color: var(--surface-panel);
                        border-top: 1px solid var(--stroke);
                        border-bottom: 1px solid var(--stroke);
                    }
                    .two-col {
                        display: grid;
                        gap: 48px;
                        align-items: start;
                    }
                    .two-col-center {
                        align-items: center;
                        gap: 40px;
                    }
                    .col-title {
                        margin: 0 0 16px;
                        font-size: 30px;
                        font-weight: 700;
                    }
                    .col-lead {
                        line-height: 1.625;
                        margin: 0 0 16px;
                    }
                    .point-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .point-list li {
                        display: flex;
                        align-items: flex-start;
                        gap: 8px;
                        color: var(--text-muted);
                    }
                    .dot {
                        flex-shrink: 0;
                        width: 6px;
                        height: 6px;
                        margin-top: 8px;
                        border-radius: 9999px;
                        background-color: var(--brand-primary);
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 48px;
                    }
                    .section-heading h3, .steps h3, .final-cta h3 {
                        margin: 0 0 12px;
                        font-size: 24px;
                        font-weight: 700;
                    }
                    .section-heading .badge-title {
                        margin-top: 16px;
                    }
                    .section-heading p, .final-cta p {
                        max-width: 672px;
                        margin: 0 auto;
                    }
                    .grid {
                        display: grid;
                        gap: 24px;
                    }
                    .steps {
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                    }
                    .steps h3, .steps > p {
                        margin: 0;
                    }
                    .mock-dashboard {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        padding: 24px;
                        border-radius: var(--radius-3xl);
                        border: 1px solid var(--stroke);
                        background-color: var(--surface-bg);
                    }
                    .mock-card-header {
                        padding-bottom: 12px;
                    }
                    .mock-card-title {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 14px;
                        color: var(--text-muted);
                    }
                    .mock-chart {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-around;
                        height: 128px;
                        padding: 8px;
                        border-radius: var(--radius-lg);
                        background: linear-gradient(to right,
                            color-mix(in srgb, var(--brand-primary) 20%, transparent),
                            color-mix(in srgb, var(--brand-info) 20%, transparent),
                            color-mix(in srgb, var(--brand-accent) 20%, transparent));
                    }
                    .mock-bar {
                        width: 24px;
                        border-radius: 4px 4px 0 0;
                        background-color: var(--brand-primary);
                        opacity: 0.7;
                        transition: opacity 150ms;
                    }
                    .mock-bar:hover {
                        opacity: 1;
                    }
                    .activity-log, .check-list {
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        font-size: 14px;
                    }
                    .activity-item, .check-item {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                    }
                    .check-list {
                        color: var(--text-muted);
                    }
                    .case-card {
                        transition: box-shadow 150ms;
                    }
                    .case-card:hover {
                        box-shadow: 0 4px 6px -1px rgba(27, 42, 58, 0.1);
                    }
                    .case-title {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        margin-bottom: 8px;
                    }
                    .case-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: var(--radius-xl);
                        background-color: color-mix(in srgb, var(--brand-primary) 10%, transparent);
                        color: var(--brand-primary);
                    }
                    .case-desc {
                        margin: 0;
                        font-size: 14px;
                    }
                    .final-cta {
                        padding: 32px;
                        border-radius: var(--radius-3xl);
                        border: 1px solid var(--stroke);
                        background: linear-gradient(to bottom right, #FFFFFF, var(--surface-bg));
                        text-align: center;
                    }
                    .final-cta .cta-actions {
                        margin-top: 32px;
                        gap: 12px;
                    }
                    .cta-button {
                        height: auto;
                        padding: 24px 32px;
                        font-size: 16px;
                    }
                    .cta-checks {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 32px;
                        margin-top: 24px;
                        font-size: 14px;
                        color: var(--text-muted);
                    }
                    .site-footer {
                        border-top: 1px solid var(--stroke);
                        background-color: var(--surface-panel);
                    }
                    .footer-inner {
                        padding-top: 48px;
                        padding-bottom: 48px;
                    }
                    .footer-grid {
                        display: grid;
                        gap: 32px;
                        margin-bottom: 32px;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        margin-bottom: 12px;
                    }
                    .footer-brand .brand-mark {
                        width: 36px;
                        height: 36px;
                    }
                    .footer-about p {
                        max-width: 384px;
                        font-size: 14px;
                    }
                    .site-footer h5 {
                        margin: 0 0 12px;
                        font-weight: 600;
                    }
                    .footer-links {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        font-size: 14px;
                    }
                    .footer-links a, .footer-legal a {
                        color: var(--text-muted);
                        text-decoration: none;
                    }
                    .footer-links a:hover, .footer-legal a:hover {
                        color: var(--text-main);
                    }
                    .footer-bottom {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 16px;
                        padding-top: 32px;
                        font-size: 14px;
                    }
                    .footer-bottom p {
                        margin: 0;
                    }
                    .footer-legal {
                        display: flex;
                        align-items: center;
                        gap: 24px;
                    }
                    @media (min-width: 768px) {
                        .proof-grid { grid-template-columns: repeat(4, 1fr); }
                        .two-col { grid-template-columns: repeat(2, 1fr); }
                        .grid-3 { grid-template-columns: repeat(3, 1fr); }
                        .grid-4 { grid-template-columns: repeat(2, 1fr); }
                        .band-lg { padding: 80px 0; }
                        .section-heading h3, .steps h3, .final-cta h3 { font-size: 30px; }
                        .final-cta { padding: 48px; }
                        .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                        .footer-bottom { flex-direction: row; }
                    }
                    @media (min-width: 1024px) {
                        .grid-4 { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}
