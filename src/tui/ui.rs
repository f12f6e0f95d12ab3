//! Terminal lifecycle and top-level rendering.

use crate::session::Route;
use crate::tui::app::App;
use crate::tui::events::{handle_key_event, Event, EventHandler};
use crate::tui::theme::{
    colors, current_theme_name, render_footer_hints, FooterHints, Styles,
};
use crate::tui::views;
use crate::tui::widgets::{centered_rect, check_terminal_size, render_size_warning};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};

/// Run the dashboard TUI until the user quits.
pub fn run_tui(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick += 1;
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Page tabs
            Constraint::Min(10),    // Content
            Constraint::Length(1),  // Status bar
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    match app.route {
        Route::Home => views::render_home(frame, chunks[2], app),
        Route::AssetSearch => views::render_search(frame, chunks[2], app),
        Route::AssetOverview => views::render_overview(frame, chunks[2], app),
        Route::AssetView => views::render_asset_view(frame, chunks[2], app),
        Route::Filter => views::render_filter(frame, chunks[2], app),
        Route::PortfolioView => views::render_portfolio(frame, chunks[2], app),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let header_line = Line::from(vec![
        Span::styled("arc-console", Style::default().fg(scheme.primary).bold()),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            "Climate Transition Risk",
            Style::default().fg(scheme.text).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            app.route.title(),
            Style::default().fg(scheme.text_muted),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            format!("theme: {}", current_theme_name()),
            Style::default().fg(scheme.muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let gate = app.gate();

    let titles: Vec<Line> = Route::ALL
        .into_iter()
        .enumerate()
        .map(|(i, route)| {
            let is_active = route == app.route;
            let reachable = gate.is_reachable(route);

            let key_style = if is_active {
                Style::default().fg(scheme.accent).bold()
            } else if reachable {
                Style::default().fg(scheme.muted)
            } else {
                Style::default().fg(scheme.muted).dim()
            };
            let title_style = if is_active {
                Style::default().fg(scheme.accent).bold()
            } else if reachable {
                Style::default().fg(scheme.text_muted)
            } else {
                Style::default().fg(scheme.muted).dim()
            };
            let lock = if reachable { "" } else { "🔒" };

            Line::from(vec![
                Span::styled(format!("[{}]", i + 1), key_style),
                Span::styled(format!(" {}{} ", route.title(), lock), title_style),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .highlight_style(Style::default().fg(scheme.accent))
        .select(app.route.index())
        .divider(Span::styled(" │ ", Style::default().fg(scheme.muted)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let scheme = colors();

    let mut spans = vec![
        Span::styled(" Selected: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            app.selection.len().to_string(),
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Filters: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            app.filters.active_count().to_string(),
            Style::default().fg(scheme.accent).bold(),
        ),
    ];

    if let Some(msg) = app.status.message() {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("ℹ ", Style::default().fg(scheme.accent)));
        spans.push(Span::styled(
            msg,
            Style::default().fg(scheme.accent).bold(),
        ));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(scheme.background_alt));
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = FooterHints::for_route(app.route);
    let footer_spans = render_footer_hints(&hints);

    let footer = Paragraph::new(Line::from(footer_spans))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::styled(
            "━━━ Dashboard Help ━━━",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
        Line::styled("Global", Style::default().fg(scheme.primary).bold()),
    ];
    for (key, desc) in FooterHints::global() {
        lines.push(help_line(key, desc));
    }

    lines.push(Line::from(""));
    let global_count = FooterHints::global().len();
    for route in Route::ALL {
        let hints = FooterHints::for_route(route);
        let page_hints = &hints[..hints.len() - global_count];
        if page_hints.is_empty() {
            continue;
        }
        lines.push(Line::styled(
            route.title(),
            Style::default().fg(scheme.primary).bold(),
        ));
        for &(key, desc) in page_hints {
            lines.push(help_line(key, desc));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(
        "Press Esc, q, or ? to close",
        Style::default().fg(scheme.text_muted).italic(),
    ));

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .title_style(Styles::header_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(help, popup_area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Styles::shortcut_key()),
        Span::styled(desc, Styles::shortcut_desc()),
    ])
}
