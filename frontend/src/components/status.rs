use std::time::Duration;

use chrono::{Local, Utc};
use yew::{function_component, html, use_state, Html};

use common::reading::{latest, LoadResult, Reading};
use common::series::{to_series, LabelFormat, Metric};

use crate::components::chart_plotly::{ChartKind, ChartPlotly};
use crate::{storage, utils};

const STALE_AFTER: Duration = Duration::from_secs(60 * 60);

#[function_component(Status)]
pub fn status() -> Html {
    let result = use_state(|| None);

    // single storage read per screen visit
    {
        let result = result.clone();

        if result.is_none() {
            wasm_bindgen_futures::spawn_local(async move {
                result.set(Some(storage::load_readings().await));
            });
        }
    }

    let readings: Vec<Reading> = match result.as_ref() {
        None => {
            return html! {
                <div class="box-center">
                    <label>{"Loading data..."}</label>
                </div>
            }
        }
        Some(LoadResult::Ready(readings)) => readings.clone(),
        // absent or unreadable store renders as a zeroed tank
        Some(LoadResult::Empty) | Some(LoadResult::Malformed) => {
            vec![Reading::placeholder(Utc::now())]
        }
    };

    let current = match latest(&readings) {
        Some(r) => r.clone(),
        None => Reading::placeholder(Utc::now()),
    };

    let age = utils::age_of(&current.timestamp);
    let age_str = humantime::format_duration(Duration::from_secs(age.as_secs())).to_string();
    let is_fresh = age < STALE_AFTER;

    let level_str = format!("{:.1}%", current.level);
    let volume_str = format!("{:.0} / {:.0} L", current.current_volume, current.total_volume);
    let temperature_str = format!("{:.1}°C", current.temperature);
    let purity_str = format!("{:.1}%", current.purity);

    let series = to_series(&readings, LabelFormat::TimeOfDay, &Local);

    let line_charts: Vec<_> = [(Metric::Level, "status-level"), (Metric::Purity, "status-purity")]
        .iter()
        .map(|(metric, id)| {
            html! {
                <div class="panel panel-default">
                    <div class="panel-heading">
                        <h3 class="panel-title">{format!("{} in {}", metric.name(), metric.unit())}</h3>
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

    let volume_labels = vec!["Current".to_string(), "Capacity".to_string()];
    let volume_values = vec![current.current_volume, current.total_volume];

    html! {
        <>
        <div class="row">
            <div class="col-lg-4 col-md-6 col-sm-8 col-xs-12">
                <div class="panel panel-default">
                    <div class="panel-heading">
                        <h3 class="panel-title">{"Tank"}</h3>
                    </div>
                    <div class="panel-body">
                        <table class="table table-hover">
                            <tbody>
                                if is_fresh {
                                    <tr><td>{"Updated"}</td><td>{format!("{age_str} ago")}</td></tr>
                                } else {
                                    <tr class="warning"><td>{"Updated"}</td><td>{format!("{age_str} ago")}</td></tr>
                                }
                                <tr><td>{"Water Level"}</td><td>{level_str}</td></tr>
                                <tr><td>{"Volume"}</td><td>{volume_str}</td></tr>
                                <tr><td>{"Temperature"}</td><td>{temperature_str}</td></tr>
                                <tr><td>{"Purity"}</td><td>{purity_str}</td></tr>
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>

        {line_charts}

        <div class="panel panel-default">
            <div class="panel-heading">
                <h3 class="panel-title">{"Volume in L"}</h3>
            </div>
            <div class="panel-body">
                <div class="row">
                    <div class="col-md-12">
                        <ChartPlotly id="status-volume" unit="L"
                            labels={volume_labels}
                            values={volume_values}
                            kind={ChartKind::Bar}
                        />
                    </div>
                </div>
            </div>
        </div>
        </>
    }
}
