pub mod chart_plotly;
pub mod history;
pub mod status;
pub mod window_menu;
