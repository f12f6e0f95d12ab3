//! Home page: portfolio KPI cards, risk distribution, geography exposure.

use crate::model::fixtures;
use crate::tui::app::App;
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, risk_badge, Styles};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
};

pub fn render_home(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // KPI cards
            Constraint::Min(8),    // Risk + geography
        ])
        .split(area);

    render_kpi_cards(frame, chunks[0], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_risk_distribution(frame, lower[0]);
    render_geography(frame, lower[1], app);
}

fn render_kpi_cards(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    // Headline figures are the unfiltered portfolio totals.
    let summary = app.summary_model.summarize(0);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let specs: [(&str, String, Color); 3] = [
        (
            " Properties ",
            summary.assets_match.to_string(),
            scheme.primary,
        ),
        (
            " Portfolio Value ",
            format!("${:.1}B", summary.total_value_billions),
            scheme.accent,
        ),
        (
            " Low Risk Share ",
            format!("{}%", summary.low_risk_pct),
            scheme.risk_low,
        ),
    ];

    for (i, (title, value, color)) in specs.into_iter().enumerate() {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
            Line::from(""),
            Line::styled("across Canada", Style::default().fg(scheme.muted)),
        ];
        let card = Paragraph::new(content)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(card, cards[i]);
    }
}

fn render_risk_distribution(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let slices = fixtures::home_risk_slices();

    let mut lines = vec![Line::from("")];
    for slice in &slices {
        let bar_width = (slice.percent as usize) / 4;
        lines.push(Line::from(vec![
            risk_badge(slice.rating),
            Span::raw(" "),
            Span::styled(
                "█".repeat(bar_width),
                Style::default().fg(scheme.risk_color(slice.rating)),
            ),
            Span::styled(
                format!(" {}%", slice.percent),
                Style::default().fg(scheme.text),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Transition Risk Distribution ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn render_geography(frame: &mut Frame, area: Rect, app: &mut App) {
    let scheme = colors();
    let rows = fixtures::home_geography();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    let bars: Vec<Bar> = rows
        .iter()
        .map(|g| {
            Bar::default()
                .label(Line::from(g.region.clone()))
                .value(u64::from(g.properties))
                .style(Style::default().fg(scheme.accent))
                .value_style(Style::default().fg(scheme.text).bg(scheme.accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Exposure by Geography ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);
    frame.render_widget(chart, chunks[0]);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let style = if i == app.home.geography.selected() {
                Styles::selected()
            } else {
                Styles::text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", g.region), style),
                Span::styled(
                    format!("{:>4} properties  ", g.properties),
                    Style::default().fg(scheme.text_muted),
                ),
                Span::styled(
                    format!("${:.1}B", g.value_billions),
                    Style::default().fg(scheme.primary),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(list, chunks[1]);
}
