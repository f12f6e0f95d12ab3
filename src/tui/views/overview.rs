//! Asset overview page: editable record form with a walkthrough stepper.

use crate::model::{FieldId, FormSection};
use crate::tui::app::App;
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, risk_badge, Styles};
use crate::tui::widgets::key_value_line;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};

pub fn render_overview(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_form(frame, chunks[0], app);
    render_side_panel(frame, chunks[1], app);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let record = app.overview.editor.record();
    let cursor = app.overview.fields.selected();
    let editing = app.overview.editor.editing_field();

    let mut items: Vec<ListItem> = Vec::new();
    let mut last_section: Option<FormSection> = None;

    for (i, field) in FieldId::ALL.into_iter().enumerate() {
        let section = field.section();
        if last_section != Some(section) {
            items.push(ListItem::new(Line::styled(
                format!("── {} ", section.title()),
                Styles::section_title(),
            )));
            last_section = Some(section);
        }

        let highlighted = i == cursor;
        let label_style = if highlighted {
            Styles::selected()
        } else {
            Styles::label()
        };

        let value_span = if editing == Some(field) {
            let draft = app.overview.editor.draft().unwrap_or_default();
            Span::styled(
                format!("{draft}▏"),
                Style::default().fg(scheme.accent).bold(),
            )
        } else {
            Span::styled(record.value(field).to_string(), Styles::value())
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  {:<22}", field.label()), label_style),
            value_span,
        ])));
    }

    let title = format!(" {} ", record.address);
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .title_style(Styles::header_title())
            .borders(Borders::ALL)
            .border_style(if editing.is_some() {
                Styles::border_focused()
            } else {
                Styles::border()
            }),
    );
    frame.render_widget(list, area);
}

fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Walkthrough progress
            Constraint::Length(6), // Derived NOI
            Constraint::Min(4),    // Selection summary
        ])
        .split(area);

    render_stepper(frame, chunks[0], app);
    render_noi_card(frame, chunks[1], app);
    render_selection_summary(frame, chunks[2], app);
}

fn render_stepper(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let stepper = &app.overview.stepper;
    let ratio = stepper.cursor() as f64 / stepper.total() as f64;

    let label = if stepper.is_final_step() {
        format!("Step {} of {} (review)", stepper.cursor(), stepper.total())
    } else {
        format!("Step {} of {}", stepper.cursor(), stepper.total())
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Walkthrough ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .gauge_style(Style::default().fg(scheme.accent).bg(scheme.background_alt))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_noi_card(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let record = app.overview.editor.record();

    let noi_line = match record.noi() {
        Some(noi) => Line::from(vec![
            Span::styled("NOI 2024: ", Style::default().fg(scheme.text_muted)),
            Span::styled(
                format!("${noi}"),
                Style::default()
                    .fg(if noi >= 0 { scheme.success } else { scheme.error })
                    .bold(),
            ),
        ]),
        None => Line::styled(
            "NOI 2024: enter revenue and opex as dollar amounts",
            Style::default().fg(scheme.text_muted).italic(),
        ),
    };

    let lines = vec![
        key_value_line("Revenue", record.value(FieldId::Revenue2024)),
        key_value_line("Opex", record.value(FieldId::Opex2024)),
        Line::from(""),
        noi_line,
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(" Derived NOI ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(card, area);
}

fn render_selection_summary(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mut lines = Vec::new();
    for asset in app.selection.list() {
        lines.push(Line::from(vec![
            risk_badge(asset.risk),
            Span::styled(
                format!(" {}", asset.address),
                Style::default().fg(scheme.text),
            ),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::styled(
            "Nothing selected",
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Selected Assets ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}
