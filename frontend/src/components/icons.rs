use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Award,
    Briefcase,
    Building,
    CheckCircle,
    ChevronUp,
    Coins,
    FileCheck,
    FileDown,
    FileText,
    Home,
    Layers,
    LineChart,
    Lock,
    Network,
    ShieldCheck,
    Sparkles,
    TrendingUp,
    Users,
}

const FILE_OUTLINE: [&str; 2] = [
    "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
    "M14 2v4a2 2 0 0 0 2 2h4",
];

impl IconKind {
    fn paths(self) -> Vec<&'static str> {
        match self {
            IconKind::ArrowRight => vec!["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Award => vec![
                "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z",
                "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
            ],
            IconKind::Briefcase => vec![
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            IconKind::Building => vec![
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4",
                "M10 10h4",
                "M10 14h4",
                "M10 18h4",
            ],
            IconKind::CheckCircle => vec![
                "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z",
                "m9 12 2 2 4-4",
            ],
            IconKind::ChevronUp => vec!["m18 15-6-6-6 6"],
            IconKind::Coins => vec![
                "M8 14a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M18.09 10.37A6 6 0 1 1 10.34 18",
                "M7 6h1v4",
                "m16.71 13.88.7.71-2.82 2.82",
            ],
            IconKind::FileCheck => [&FILE_OUTLINE[..], &["m9 15 2 2 4-4"][..]].concat(),
            IconKind::FileDown => [&FILE_OUTLINE[..], &["M12 18v-6", "m9 15 3 3 3-3"][..]].concat(),
            IconKind::FileText => {
                [&FILE_OUTLINE[..], &["M10 9H8", "M16 13H8", "M16 17H8"][..]].concat()
            }
            IconKind::Home => vec![
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            IconKind::Layers => vec![
                "m12 2 10 5-10 5L2 7z",
                "m2 17 10 5 10-5",
                "m2 12 10 5 10-5",
            ],
            IconKind::LineChart => vec!["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            IconKind::Lock => vec!["M5 11h14v11H5z", "M7 11V7a5 5 0 0 1 10 0v4"],
            IconKind::Network => vec![
                "M16 16h6v6h-6z",
                "M2 16h6v6H2z",
                "M9 2h6v6H9z",
                "M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3",
                "M12 12V8",
            ],
            IconKind::ShieldCheck => vec![
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            IconKind::Sparkles => vec![
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            ],
            IconKind::TrendingUp => vec!["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconKind::Users => vec![
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

pub const STYLES: &str = r#"
    .icon { flex-shrink: 0; }
    .icon-4 { width: 16px; height: 16px; }
    .icon-5 { width: 20px; height: 20px; }
    .icon-6 { width: 24px; height: 24px; }
    .icon-8 { width: 32px; height: 32px; }
"#;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

/// Stroke icon drawn on a 24x24 grid, colored by `currentColor`.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.kind.paths().into_iter().map(|d| html! { <path d={d} /> }) }
        </svg>
    }
}
