use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod theme {
    pub mod tokens;
    pub mod global_style;
}
mod scroll {
    pub mod controller;
    pub mod browser;
}
mod components {
    pub mod icons;
    pub mod header;
    pub mod scroll_top;
    pub mod ui {
        pub mod button;
        pub mod badge;
        pub mod card;
        pub mod layout;
        pub mod blocks;
    }
}
mod pages {
    pub mod landing;
    pub mod sto;
    pub mod design_system;
}

use components::ui::button::{Button, ButtonVariant};
use pages::{
    landing::Landing,
    sto::StoPage,
};
use theme::global_style::GlobalStyle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sto")]
    Sto,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Sto => {
            info!("Rendering STO page");
            html! { <StoPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <p class="text-14 text-muted">{"404"}</p>
            <h1 class="text-36">{"페이지를 찾을 수 없습니다"}</h1>
            <Link<Route> to={Route::Home}>
                <Button variant={ButtonVariant::Outline}>{"홈으로 돌아가기"}</Button>
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                        min-height: 100vh;
                        padding: 0 16px;
                        text-align: center;
                    }
                    .not-found h1 {
                        margin: 0 0 8px;
                    }
                    .not-found p {
                        margin: 0;
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyle />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
