use std::fmt;
use std::rc::Rc;

use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;

use crate::config::PageConfig;
use crate::content::{CERTIFICATIONS, PROJECTS};
use crate::logging::{log_event, LogLevel};
use crate::sections::Page;
use crate::theme::Theme;
use crate::view_state::{ScrollMetrics, ViewAction, ViewState};

const MOUNT_POINT_ID: &str = "app";

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let scroll_y = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(win.document()?.document_element()?.scroll_height());

    Some(ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    })
}

/// Keeps native form controls and scrollbars in step with the palette.
fn apply_color_scheme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let _ = root.style().set_property("color-scheme", theme.as_str());
}

fn view_transition_starter() -> Option<(JsValue, Function)> {
    let document: JsValue = window()?.document()?.into();
    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition")).ok()?;
    let start = start.dyn_into::<Function>().ok()?;
    Some((document, start))
}

/// Flips the theme. When motion is allowed and the browser supports View
/// Transitions, the dispatch runs inside the transition's update callback so
/// the re-render is what gets cross-faded.
fn switch_theme(dispatcher: UseReducerDispatcher<ViewState>, reduced_motion: bool) {
    let starter = if reduced_motion {
        None
    } else {
        view_transition_starter()
    };

    let Some((document, start)) = starter else {
        dispatcher.dispatch(ViewAction::ToggleTheme);
        return;
    };

    let in_transition = dispatcher.clone();
    let update = Closure::once_into_js(move || in_transition.dispatch(ViewAction::ToggleTheme));
    if start.call1(&document, &update).is_err() {
        dispatcher.dispatch(ViewAction::ToggleTheme);
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Window listeners that live as long as the page. Dropping the guard
/// unregisters both.
struct WindowSubscriptions {
    _pointer: EventListener,
    _scroll: EventListener,
}

impl WindowSubscriptions {
    fn attach(dispatcher: UseReducerDispatcher<ViewState>) -> Option<Self> {
        let win = window()?;

        let pointer = {
            let dispatcher = dispatcher.clone();
            EventListener::new(&win, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    dispatcher.dispatch(ViewAction::PointerMoved {
                        x: event.client_x(),
                        y: event.client_y(),
                    });
                }
            })
        };

        let scroll = EventListener::new(&win, "scroll", move |_event: &Event| {
            if let Some(metrics) = read_scroll_metrics() {
                dispatcher.dispatch(ViewAction::Scrolled(metrics));
            }
        });

        Some(Self {
            _pointer: pointer,
            _scroll: scroll,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioPageProps {
    pub config: PageConfig,
    pub year: u32,
}

#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let state = use_reducer(ViewState::default);
    let config = props.config;

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            if let Some(metrics) = read_scroll_metrics() {
                dispatcher.dispatch(ViewAction::Scrolled(metrics));
            }

            let subscriptions = WindowSubscriptions::attach(dispatcher);
            log_event(
                config.log_level,
                LogLevel::Debug,
                "listeners_attached",
                json!({ "attached": subscriptions.is_some() }),
            );

            move || {
                drop(subscriptions);
                log_event(config.log_level, LogLevel::Debug, "listeners_released", json!({}));
            }
        });
    }

    // Effects see the reduced state, so these logs match what is on screen.
    {
        let snapshot = *state;
        use_effect_with(state.theme, move |theme| {
            apply_color_scheme(*theme);
            log_event(config.log_level, LogLevel::Debug, "theme_applied", json!({ "state": snapshot }));
            || ()
        });
    }

    {
        let snapshot = *state;
        use_effect_with(state.menu_open, move |_| {
            log_event(config.log_level, LogLevel::Debug, "menu_visibility", json!({ "state": snapshot }));
            || ()
        });
    }

    let on_toggle_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| switch_theme(dispatcher.clone(), config.reduced_motion))
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ViewAction::ToggleMenu))
    };

    html! {
        <Page
            state={*state}
            year={props.year}
            on_toggle_theme={on_toggle_theme}
            on_toggle_menu={on_toggle_menu}
        />
    }
}

#[derive(Debug)]
pub enum MountError {
    NoDocument,
    MissingMountPoint(&'static str),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no browser document available"),
            Self::MissingMountPoint(id) => write!(f, "missing #{id} mount point"),
        }
    }
}

pub fn run(config: PageConfig) -> Result<(), MountError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(MountError::MissingMountPoint(MOUNT_POINT_ID))?;

    let props = PortfolioPageProps {
        config,
        year: current_year(),
    };
    yew::Renderer::<PortfolioPage>::with_root_and_props(root, props).render();

    log_event(
        config.log_level,
        LogLevel::Info,
        "page_mounted",
        json!({
            "theme": ViewState::default().theme,
            "projects": PROJECTS.len(),
            "certifications": CERTIFICATIONS.len(),
        }),
    );

    Ok(())
}
