use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::ui::button::Button;
use crate::components::ui::layout::Container;
use crate::scroll::browser::BrowserViewport;
use crate::scroll::controller::{navigate_to_anchor, NAV_ANCHORS};
use crate::Route;

/// Header links in display order: (label, anchor id).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("솔루션", NAV_ANCHORS[0]),
    ("프로세스", NAV_ANCHORS[1]),
    ("신뢰성", NAV_ANCHORS[2]),
    ("활용 사례", NAV_ANCHORS[3]),
];

pub const STYLES: &str = r#"
    .site-header {
        position: sticky;
        top: 0;
        z-index: 30;
        width: 100%;
        background-color: rgba(255, 255, 255, 0.7);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid var(--stroke);
    }
    .site-header .container {
        display: flex;
        height: 80px;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 12px;
        color: var(--text-main);
        text-decoration: none;
    }
    .brand-mark {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 40px;
        height: 40px;
        border-radius: var(--radius-xl);
        background-color: var(--brand-primary);
        color: #FFFFFF;
    }
    .brand-name {
        font-weight: 700;
        font-size: 18px;
        letter-spacing: -0.025em;
    }
    .site-nav {
        display: none;
        align-items: center;
        gap: 32px;
    }
    @media (min-width: 768px) {
        .site-nav {
            display: flex;
        }
    }
    .nav-link {
        display: inline-block;
        padding: 8px 4px;
        font-size: 14px;
        font-weight: 500;
        color: var(--text-muted);
        text-decoration: none;
        cursor: pointer;
        transition: color 150ms;
    }
    .nav-link:hover {
        color: var(--text-main);
    }
    .nav-link.active {
        color: var(--brand-primary);
    }
    .demo-request {
        height: 40px;
        padding: 0 24px;
    }
"#;

/// How the section links behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// On the landing page: smooth-scroll to the section below the header.
    InPage,
    /// On another page: load the landing page at the section.
    CrossPage,
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub mode: NavMode,
    pub brand: AttrValue,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let mode = props.mode;

    let links = NAV_LINKS.iter().map(|&(label, target)| match mode {
        NavMode::InPage => {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(viewport) = BrowserViewport::new() {
                    navigate_to_anchor(&viewport, target);
                }
            });
            html! {
                <a href={format!("#{}", target)} class="nav-link" onclick={onclick}>{ label }</a>
            }
        }
        NavMode::CrossPage => html! {
            <a href={format!("/#{}", target)} class="nav-link">{ label }</a>
        },
    });

    let brand = html! {
        <>
            <div class="brand-mark">
                <Icon kind={IconKind::Building} class={classes!("icon-5")} />
            </div>
            <span class="brand-name">{ props.brand.clone() }</span>
        </>
    };

    html! {
        <header class="site-header">
            <Container>
                {
                    match mode {
                        NavMode::InPage => html! { <div class="brand">{ brand }</div> },
                        NavMode::CrossPage => html! {
                            <Link<Route> to={Route::Home} classes="brand">{ brand }</Link<Route>>
                        },
                    }
                }
                <nav class="site-nav">
                    { for links }
                    <Link<Route>
                        to={Route::Sto}
                        classes={classes!("nav-link", (mode == NavMode::CrossPage).then_some("active"))}
                    >
                        {"STO"}
                    </Link<Route>>
                </nav>
                <div>
                    <Button class={classes!("demo-request")}>{"데모 요청"}</Button>
                </div>
            </Container>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_link_targets_how_section() {
        assert_eq!(NAV_LINKS[1], ("프로세스", "how"));
        let ids: Vec<_> = NAV_LINKS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, NAV_ANCHORS);
    }
}
