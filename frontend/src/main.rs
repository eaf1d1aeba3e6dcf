mod components;
mod storage;
mod utils;

use common::window::TimeWindow;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/history")]
    History,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current_route: Route,

    // window selector
    #[prop_or_default]
    pub on_window_changed: Callback<TimeWindow>,

    #[prop_or_default]
    pub window: TimeWindow,
}

enum Msg {}

struct Model {}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}

#[function_component(PageHome)]
pub fn page_home() -> Html {
    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Home}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"Current Status"}</h1>
                    <components::status::Status />
                </div>
            </div>
        </div>
    }
}

#[function_component(PageHistory)]
pub fn page_history() -> Html {
    let window_handle = use_state_eq(TimeWindow::default);
    let on_window_changed: Callback<TimeWindow> = {
        let handle = window_handle.clone();
        Callback::from(move |window| {
            handle.set(window);
        })
    };

    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::History}
                    {on_window_changed} window={*window_handle}
                />
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"History"}</h1>
                    <div class="box-center">
                        <components::history::Model window={*window_handle} />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let cr = &props.current_route;
    let class_active = move |r| {
        if *cr == r {
            "active"
        } else {
            ""
        }
    };

    html! {
        <div class="col-sm-3 col-md-2 sidebar">
            <ul class="nav nav-sidebar">
                <li class="brand">{"Tank Monitor"}</li>
                <li class={class_active(Route::Home)}>
                    <Link<Route> to={Route::Home}>{"⌂ Current Status"}</Link<Route>>
                </li>
                <li class={class_active(Route::History)}>
                    <Link<Route> to={Route::History}>{"🗠 History"}</Link<Route>>
                </li>
                <components::window_menu::WindowMenu visible={props.current_route==Route::History}
                    on_window_changed={props.on_window_changed.clone()}
                    window={props.window}
                />
                <li/>
            </ul>

            <ul class="nav nav-sidebar fix-bottom">
            {format!("v{}.{}.{}", env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0), env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0), env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0))}
            </ul>

        </div>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <PageHome/> },
        Route::History => html! { <PageHistory/> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
