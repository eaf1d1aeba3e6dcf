use chrono::Local;
use yew::prelude::*;

use common::reading::LoadResult;
use common::series::{to_series, LabelFormat, Metric};
use common::stats::average;
use common::window::{filter_by_window, TimeWindow};

use crate::components::chart_plotly::ChartPlotly;
use crate::storage;

pub enum Msg {
    ReadingsReceived(LoadResult),
}

pub struct Model {
    readings: Option<LoadResult>,
}

#[derive(Properties, PartialEq)]
pub struct ModelProps {
    pub window: TimeWindow,
}

impl Component for Model {
    type Message = Msg;

    type Properties = ModelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { readings: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ReadingsReceived(result) => {
                self.readings = Some(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(result) = self.readings.as_ref() else {
            return html! {
                <div class="box-center">
                    <label>{"Loading data..."}</label>
                </div>
            };
        };

        let readings = match result {
            LoadResult::Ready(readings) => readings.clone(),
            LoadResult::Empty | LoadResult::Malformed => vec![],
        };

        // one "now" per recompute, shared by every window check
        let now = Local::now();
        let filtered = filter_by_window(&readings, ctx.props().window, &now);
        let series = to_series(&filtered, LabelFormat::CalendarDate, &Local);

        let chart_types = [
            (Metric::Level, "history-level"),
            (Metric::Temperature, "history-temperature"),
        ];

        let charts_html: Vec<_> = chart_types
            .iter()
            .map(|(metric, id)| {
                let avg = average(series.values(*metric));
                html! {
                    <div class="panel panel-default">
                        <div class="panel-heading">
                            <h3 class="panel-title">
                                {format!("{} in {} (average {:.2})", metric.name(), metric.unit(), avg)}
                            </h3>
                        </div>
                        <div class="panel-body">
                            <div class="row">
                                <div class="col-md-12">
                                    <ChartPlotly id={id.to_string()} unit={metric.unit().to_string()}
                                        labels={series.labels.clone()}
                                        values={series.values(*metric).to_vec()}
                                    />
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })
            .collect();

        html! {
            <>
            {charts_html}
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = storage::load_readings().await;
                link.send_message(Msg::ReadingsReceived(result));
            });
        }
    }
}
