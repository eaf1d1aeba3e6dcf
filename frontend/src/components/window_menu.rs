use common::window::TimeWindow;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub visible: bool,

    pub on_window_changed: Callback<TimeWindow>,
    pub window: TimeWindow,
}

#[function_component(WindowMenu)]
pub fn window_menu(props: &Props) -> Html {
    let selected = props.window;

    let radio_list: Vec<_> = TimeWindow::ALL_WINDOWS
        .iter()
        .map(|window| {
            let cb = props.on_window_changed.clone();
            let cbe = Callback::from(move |e: Event| {
                let target: EventTarget = e.target().unwrap();
                let value = target.unchecked_into::<HtmlInputElement>().value();
                cb.emit(TimeWindow::from(value.as_str()));
            });

            html! {
                <li>
                    <div class="submenuitem">
                        <input type="radio" name="window" onchange={cbe}
                            id={window.as_str()} value={window.as_str()}
                            checked={selected == *window}/>
                        <span><label for={window.as_str()} class="submenulabel"><a>{window.label()}</a></label></span>
                    </div>
                </li>
            }
        })
        .collect();

    html! {
        if props.visible {
            <ul class="nav nav-sidebar">
                {radio_list}
            </ul>
        }
    }
}
