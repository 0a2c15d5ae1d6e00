use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::FADE_DURATION_MS;

/// Mount state of the scroll-to-top control. `Leaving` keeps the button in
/// the document while its exit animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Shown,
    Leaving,
}

pub enum PresenceAction {
    Show,
    Hide,
    /// Exit animation finished.
    Unmount,
}

impl Presence {
    pub fn next(self, action: &PresenceAction) -> Self {
        match (self, action) {
            (_, PresenceAction::Show) => Presence::Shown,
            (Presence::Shown, PresenceAction::Hide) => Presence::Leaving,
            (Presence::Leaving, PresenceAction::Unmount) => Presence::Hidden,
            (state, _) => state,
        }
    }

    /// Whether a `Hide` from this state starts the exit animation and so
    /// needs an unmount timer.
    pub fn exits_on_hide(self) -> bool {
        self == Presence::Shown
    }
}

impl Reducible for Presence {
    type Action = PresenceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(&action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub const STYLES: &str = r#"
    .scroll-top {
        position: fixed;
        bottom: 32px;
        right: 32px;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 48px;
        height: 48px;
        border: none;
        border-radius: 9999px;
        background-color: var(--brand-primary);
        color: #FFFFFF;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(27, 42, 58, 0.2);
        transition: background-color 150ms;
    }
    .scroll-top:hover {
        background-color: var(--brand-secondary);
    }
    .scroll-top-enter {
        animation: scroll-top-in 200ms ease-out forwards;
    }
    .scroll-top-exit {
        animation: scroll-top-out 200ms ease-in forwards;
        pointer-events: none;
    }
    @keyframes scroll-top-in {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes scroll-top-out {
        from { opacity: 1; transform: scale(1); }
        to { opacity: 0; transform: scale(0.8); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ScrollTopButtonProps {
    pub visible: bool,
    pub on_activate: Callback<()>,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let presence = use_reducer(Presence::default);

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |visible| {
                let exit_timer = if *visible {
                    presence.dispatch(PresenceAction::Show);
                    None
                } else {
                    let exiting = presence.exits_on_hide();
                    presence.dispatch(PresenceAction::Hide);
                    let presence = presence.clone();
                    exiting.then(|| {
                        Timeout::new(FADE_DURATION_MS, move || {
                            presence.dispatch(PresenceAction::Unmount);
                        })
                    })
                };

                // Dropping the timer cancels a pending unmount
                move || drop(exit_timer)
            },
            props.visible,
        );
    }

    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| on_activate.emit(()))
    };

    let animation = match *presence {
        Presence::Hidden => return html! {},
        Presence::Shown => "scroll-top-enter",
        Presence::Leaving => "scroll-top-exit",
    };

    html! {
        <button
            type="button"
            class={classes!("scroll-top", animation)}
            onclick={onclick}
            aria-label="Scroll to top"
        >
            <Icon kind={IconKind::ChevronUp} class={classes!("icon-6")} />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Presence::default(), Presence::Hidden);
    }

    #[test]
    fn show_then_hide_plays_exit_before_unmount() {
        let state = Presence::Hidden.next(&PresenceAction::Show);
        assert_eq!(state, Presence::Shown);
        let state = state.next(&PresenceAction::Hide);
        assert_eq!(state, Presence::Leaving);
        assert_eq!(state.next(&PresenceAction::Unmount), Presence::Hidden);
    }

    #[test]
    fn reshow_during_exit_returns_to_shown() {
        assert_eq!(Presence::Leaving.next(&PresenceAction::Show), Presence::Shown);
    }

    #[test]
    fn stale_unmount_is_ignored() {
        assert_eq!(Presence::Shown.next(&PresenceAction::Unmount), Presence::Shown);
        assert_eq!(Presence::Hidden.next(&PresenceAction::Unmount), Presence::Hidden);
    }

    #[test]
    fn hide_while_hidden_stays_hidden() {
        assert_eq!(Presence::Hidden.next(&PresenceAction::Hide), Presence::Hidden);
        assert_eq!(Presence::Leaving.next(&PresenceAction::Hide), Presence::Leaving);
    }

    #[test]
    fn only_a_shown_control_arms_the_exit_timer() {
        // first mount below the threshold
        assert!(!Presence::Hidden.exits_on_hide());
        assert!(Presence::Shown.exits_on_hide());
        assert!(!Presence::Leaving.exits_on_hide());

        for state in [Presence::Hidden, Presence::Shown, Presence::Leaving] {
            let starts_exit = state != Presence::Leaving
                && state.next(&PresenceAction::Hide) == Presence::Leaving;
            assert_eq!(state.exits_on_hide(), starts_exit);
        }
    }

    #[test]
    fn reduce_keeps_allocation_when_unchanged() {
        let state = Rc::new(Presence::Hidden);
        let next = state.clone().reduce(PresenceAction::Hide);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
