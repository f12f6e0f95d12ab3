//! Asset view page: scenario chips and the NOI projection chart.

use crate::model::{fixtures, RiskRating};
use crate::tui::app::App;
use crate::tui::theme::{colors, risk_badge, Styles};
use crate::tui::views::{noi_chart_bounds, render_breakdown_popover, render_noi_chart};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub fn render_asset_view(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Asset header + scenario chips
            Constraint::Percentage(55), // Projection chart
            Constraint::Min(5),         // KPI table
        ])
        .split(area);

    render_asset_header(frame, chunks[0], app);

    let cursor_year = app
        .asset_view
        .series
        .get(app.asset_view.year_cursor)
        .map(|p| p.year);
    let bounds = noi_chart_bounds(&app.asset_view.series);
    render_noi_chart(
        frame,
        chunks[1],
        " NOI Projection 2025-2050 ",
        &app.asset_view.series,
        bounds,
        cursor_year,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    render_kpi_table(frame, bottom[0]);
    render_map_panel(frame, bottom[1]);

    if app.asset_view.relay.is_open() {
        render_breakdown_popover(frame, area, &app.asset_view.relay, &app.asset_view.detail);
    }
}

fn render_kpi_table(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let rows_data = fixtures::kpi_rows();

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Risk"),
        Cell::from("DSCR Δ"),
        Cell::from("LTV"),
        Cell::from("Energy Δ"),
        Cell::from("Retrofit Cost"),
    ])
    .style(Styles::label());

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            let dscr_color = if row.dscr_delta < 0.0 {
                scheme.error
            } else {
                scheme.success
            };
            Row::new(vec![
                Cell::from(row.label.clone()).style(Styles::text()),
                Cell::from(Line::from(risk_badge(row.risk))),
                Cell::from(format!("{:+.2}", row.dscr_delta))
                    .style(Style::default().fg(dscr_color)),
                Cell::from(Line::from(Span::styled(
                    format!("{} {}", row.ltv_trend.arrow(), row.ltv_trend.word()),
                    Style::default().fg(scheme.trend_color(row.ltv_trend)),
                ))),
                Cell::from(format!("{:+}%", row.energy_intensity_delta)),
                Cell::from(format!("${}k", row.retrofit_cost)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Key Indicators vs Benchmark ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

/// Static stand-in for the risk zone map, legend only.
fn render_map_panel(frame: &mut Frame, area: Rect) {
    let scheme = colors();

    let lines = vec![
        Line::styled(
            "Interactive map unavailable",
            Style::default().fg(scheme.text_muted).italic(),
        ),
        Line::styled(
            "Asset pin + regional overlays",
            Style::default().fg(scheme.text),
        ),
        Line::raw(""),
        Line::from(vec![
            risk_badge(RiskRating::Low),
            Span::raw(" "),
            risk_badge(RiskRating::Medium),
            Span::raw(" "),
            risk_badge(RiskRating::High),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Risk Zone Map ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn render_asset_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let first_line = match app.selection.list().first() {
        Some(asset) => Line::from(vec![
            risk_badge(asset.risk),
            Span::styled(
                format!(" {}", asset.address),
                Style::default().fg(scheme.text).bold(),
            ),
            Span::styled(
                format!("  {}  {}", asset.property_type, asset.value),
                Style::default().fg(scheme.text_muted),
            ),
        ]),
        None => Line::styled("No asset selected", Style::default().fg(scheme.text_muted)),
    };

    let chips = Line::from(vec![
        Span::styled("Scenario ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {} ", app.asset_view.scenario.display_name()),
            Style::default().bg(scheme.accent).fg(scheme.background).bold(),
        ),
        Span::raw("  "),
        Span::styled("Plan ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {} ", app.asset_view.plan.display_name()),
            Style::default().bg(scheme.primary).fg(scheme.background).bold(),
        ),
    ]);

    let header = Paragraph::new(vec![first_line, chips]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_asset_view_shows_risk_zone_map() {
        let config = AppConfig::default();
        let mut app = App::new(&config);
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render_asset_view(frame, frame.area(), &mut app))
            .expect("draw");
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();

        assert!(text.contains("Risk Zone Map"), "map panel missing");
        assert!(text.contains("Asset pin + regional overlays"));
    }
}
