use plotly::{layout::Margin, Bar, Configuration, Layout, Plot, Scatter};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
    pub unit: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[prop_or_default]
    pub kind: ChartKind,
}

#[function_component(ChartPlotly)]
pub fn chart_plotly(props: &Props) -> Html {
    let has_data = !props.values.is_empty();
    let id = props.id.clone();
    let p = yew_hooks::use_async::<_, _, ()>({
        let mut plot = Plot::new();
        match props.kind {
            ChartKind::Line => {
                let trace =
                    Scatter::new(props.labels.clone(), props.values.clone()).text(&props.unit);
                plot.add_trace(trace);
            }
            ChartKind::Bar => {
                let trace = Bar::new(props.labels.clone(), props.values.clone());
                plot.add_trace(trace);
            }
        }
        plot.set_configuration(
            Configuration::default()
                .display_logo(false)
                .editable(false)
                .display_mode_bar(plotly::configuration::DisplayModeBar::Hover),
        );
        plot.set_layout(
            Layout::default()
                .hover_mode(plotly::layout::HoverMode::XUnified)
                .auto_size(true)
                .margin(Margin::default().top(20).bottom(40).left(40).right(20)),
        );

        async move {
            plotly::bindings::new_plot(&id, &plot).await;
            Ok(())
        }
    });

    use_effect_with(
        // replot whenever the series changes
        (props.labels.clone(), props.values.clone()),
        move |_| {
            if has_data {
                p.run();
            }
            || ()
        },
    );

    if has_data {
        html! {
            <div class="chart" id={props.id.clone()}></div>
        }
    } else {
        html! {
            <div class="chart">
                <label>{"no data"}</label>
            </div>
        }
    }
}
