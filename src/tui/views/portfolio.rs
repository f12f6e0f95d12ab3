//! Portfolio view page: projection chart, exposure table, breakdown popover.

use crate::model::fixtures;
use crate::tui::app::App;
use crate::tui::filter::SplitMethod;
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, risk_badge, Styles};
use crate::tui::views::{noi_chart_bounds, render_breakdown_popover, render_noi_chart};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub fn render_portfolio(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Split and grouping chips
            Constraint::Percentage(45), // Projection chart
            Constraint::Min(6),         // Exposure table
        ])
        .split(area);

    render_chips(frame, chunks[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let cursor_year = app
        .portfolio
        .series
        .get(app.portfolio.year_cursor)
        .map(|p| p.year);
    let bounds = noi_chart_bounds(&app.portfolio.series);
    render_noi_chart(
        frame,
        charts[0],
        " Portfolio NOI Projection ",
        &app.portfolio.series,
        bounds,
        cursor_year,
    );

    render_split_panel(frame, charts[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    render_table(frame, bottom[0], app);
    render_map_panel(frame, bottom[1], app);

    if app.portfolio.relay.is_open() {
        render_breakdown_popover(frame, area, &app.portfolio.relay, &app.portfolio.detail);
    }
}

fn render_chips(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let source = if app.portfolio.uploaded {
        Span::styled(" uploaded CSV ", Style::default().bg(scheme.success).fg(scheme.background))
    } else {
        Span::styled(
            format!(" {} filters ", app.filters.active_count()),
            Style::default().bg(scheme.primary).fg(scheme.background),
        )
    };

    let line = Line::from(vec![
        Span::styled("Source ", Style::default().fg(scheme.text_muted)),
        source,
        Span::raw("  "),
        Span::styled("Split ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {} ", app.portfolio.split.display_name()),
            Style::default().bg(scheme.accent).fg(scheme.background).bold(),
        ),
        Span::raw("  "),
        Span::styled("Group ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {} ", app.portfolio.grouping.display_name()),
            Style::default().bg(scheme.accent).fg(scheme.background).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_split_panel(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let lines: Vec<Line> = match app.portfolio.split.current {
        SplitMethod::Geography => fixtures::portfolio_geography()
            .iter()
            .map(|g| {
                Line::from(vec![
                    Span::styled(format!("{:<12}", g.region), Styles::text()),
                    Span::styled(
                        format!("{:>3}  ", g.properties),
                        Style::default().fg(scheme.text_muted),
                    ),
                    Span::styled(
                        format!("${:.1}B", g.value_billions),
                        Style::default().fg(scheme.primary),
                    ),
                ])
            })
            .collect(),
        SplitMethod::RiskRating => fixtures::portfolio_risk_slices()
            .iter()
            .map(|slice| {
                Line::from(vec![
                    risk_badge(slice.rating),
                    Span::raw(" "),
                    Span::styled(
                        "█".repeat((slice.percent as usize) / 5),
                        Style::default().fg(scheme.risk_color(slice.rating)),
                    ),
                    Span::styled(
                        format!(" {}%", slice.percent),
                        Style::default().fg(scheme.text),
                    ),
                ])
            })
            .collect(),
        SplitMethod::PropertyType => {
            let mut counts: Vec<(String, usize)> = Vec::new();
            for asset in &app.assets {
                match counts.iter_mut().find(|(t, _)| *t == asset.property_type) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((asset.property_type.clone(), 1)),
                }
            }
            counts
                .iter()
                .map(|(property_type, n)| {
                    Line::from(vec![
                        Span::styled(format!("{property_type:<14}"), Styles::text()),
                        Span::styled(
                            format!("{n} selected"),
                            Style::default().fg(scheme.text_muted),
                        ),
                    ])
                })
                .collect()
        }
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Split by {} ", app.portfolio.split.display_name()))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

/// Static stand-in for the portfolio risk map. Shows the pin total and a
/// badge per risk band instead of rendering geography.
fn render_map_panel(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let summary = app.filters.summary(&app.summary_model);

    let mut lines = vec![
        Line::styled(
            "Interactive map unavailable",
            Style::default().fg(scheme.text_muted).italic(),
        ),
        Line::styled(
            format!("{} asset pins across Canada", summary.assets_match),
            Style::default().fg(scheme.text),
        ),
        Line::raw(""),
    ];
    for slice in fixtures::portfolio_risk_slices() {
        let count = u32::from(slice.percent) * summary.assets_match / 100;
        lines.push(Line::from(vec![
            risk_badge(slice.rating),
            Span::styled(
                format!(" {count} {} Risk", slice.rating.label()),
                Style::default().fg(scheme.text),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Portfolio Risk Map ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let cursor = app.portfolio.table.selected();

    let header = Row::new(vec![
        Cell::from("Postal Code"),
        Cell::from("Risk"),
        Cell::from("DSCR Δ"),
        Cell::from("LTV"),
        Cell::from("Energy Δ"),
        Cell::from("Retrofit Cost"),
    ])
    .style(Styles::label());

    let rows: Vec<Row> = app
        .portfolio
        .table_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let base = if i == cursor {
                Styles::selected()
            } else {
                Styles::text()
            };
            let dscr_color = if row.dscr_delta < 0.0 {
                scheme.error
            } else {
                scheme.success
            };
            Row::new(vec![
                Cell::from(row.postal_code.clone()),
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
            .style(base)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(
                " Exposure by {} ({} rows) ",
                app.portfolio.grouping.display_name(),
                app.portfolio.table_rows.len()
            ))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &mut App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render_portfolio(frame, frame.area(), app))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_portfolio_page_shows_map_placeholder() {
        let config = AppConfig::default();
        let mut app = App::new(&config);
        app.portfolio.uploaded = true;
        let text = rendered_text(&mut app);

        assert!(text.contains("Portfolio Risk Map"), "map panel missing");
        assert!(text.contains("asset pins across Canada"));
        for rating in ["Low", "Medium", "High"] {
            assert!(text.contains(&format!("{rating} Risk")), "missing {rating} badge");
        }
    }
}
