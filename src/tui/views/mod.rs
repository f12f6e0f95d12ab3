//! Page rendering for the dashboard.

use crate::model::{NoiPoint, RevenueOpex};
use crate::session::BreakdownRelay;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{centered_rect, format_millions, key_value_line};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph},
};

mod asset_view;
mod filter;
mod home;
mod overview;
mod portfolio;
mod search;

pub use asset_view::render_asset_view;
pub use filter::render_filter;
pub use home::render_home;
pub use overview::render_overview;
pub use portfolio::render_portfolio;
pub use search::render_search;

/// Axis bounds for an NOI series: `([x_min, x_max], [y_min, y_max])`.
pub fn noi_chart_bounds(series: &[NoiPoint]) -> ([f64; 2], [f64; 2]) {
    let x_min = series.first().map_or(0.0, |p| f64::from(p.year));
    let x_max = series.last().map_or(1.0, |p| f64::from(p.year));

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for p in series {
        for v in [p.baseline, p.pay_fines, p.retrofit] {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    if series.is_empty() {
        y_min = 0.0;
        y_max = 1.0;
    }
    // Breathing room above and below the extremes.
    let pad = (y_max - y_min).abs().max(1.0) * 0.1;
    ([x_min, x_max], [y_min - pad, y_max + pad])
}

/// Render the three-line NOI projection chart with the cursor year marked.
pub fn render_noi_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &[NoiPoint],
    bounds: ([f64; 2], [f64; 2]),
    cursor_year: Option<u16>,
) {
    let scheme = colors();
    let (x_bounds, y_bounds) = bounds;

    let baseline: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year), p.baseline))
        .collect();
    let pay_fines: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year), p.pay_fines))
        .collect();
    let retrofit: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year), p.retrofit))
        .collect();

    let cursor: Vec<(f64, f64)> = series
        .iter()
        .filter(|p| Some(p.year) == cursor_year)
        .flat_map(|p| {
            [
                (f64::from(p.year), p.baseline),
                (f64::from(p.year), p.pay_fines),
                (f64::from(p.year), p.retrofit),
            ]
        })
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Baseline")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(scheme.baseline))
            .data(&baseline),
        Dataset::default()
            .name("Pay Fines")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(scheme.pay_fines))
            .data(&pay_fines),
        Dataset::default()
            .name("Retrofit")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(scheme.retrofit))
            .data(&retrofit),
        Dataset::default()
            .name(cursor_label(cursor_year))
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(scheme.warning))
            .data(&cursor),
    ];

    let x_labels: Vec<Line> = series
        .iter()
        .step_by(2)
        .map(|p| Line::from(p.year.to_string()))
        .collect();
    let y_labels: Vec<Line> = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
        .iter()
        .map(|v| Line::from(format_millions(*v)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title.to_string())
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(scheme.muted))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(scheme.muted))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn cursor_label(cursor_year: Option<u16>) -> String {
    match cursor_year {
        Some(year) => format!("Year {year}"),
        None => "Year".to_string(),
    }
}

/// Revenue-vs-opex popover for the year recorded on the relay.
pub fn render_breakdown_popover(
    frame: &mut Frame,
    area: Rect,
    relay: &BreakdownRelay,
    detail: &[RevenueOpex],
) {
    let scheme = colors();
    let Some(year) = relay.detail_year() else {
        return;
    };

    let popup = centered_rect(40, 35, area);
    frame.render_widget(Clear, popup);

    let lines = match relay.breakdown(detail) {
        Some(point) => {
            let net = point.revenue - point.opex;
            vec![
                Line::from(""),
                key_value_line("Revenue", &format_millions(point.revenue)),
                key_value_line("Opex", &format_millions(point.opex)),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Net: ", Style::default().fg(scheme.text_muted)),
                    Span::styled(
                        format_millions(net),
                        Style::default()
                            .fg(if net >= 0.0 { scheme.success } else { scheme.error })
                            .bold(),
                    ),
                ]),
                Line::from(""),
                Line::styled(
                    "Esc to close",
                    Style::default().fg(scheme.text_muted).italic(),
                ),
            ]
        }
        None => vec![
            Line::from(""),
            Line::styled(
                "No breakdown data for this year",
                Style::default().fg(scheme.text_muted).italic(),
            ),
            Line::from(""),
            Line::styled(
                "Esc to close",
                Style::default().fg(scheme.text_muted).italic(),
            ),
        ],
    };

    let popover = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Revenue vs Opex {year} "))
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .alignment(Alignment::Center);
    frame.render_widget(popover, popup);
}
