//! Shared UI components (status bar, modal helpers).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode, ModalState, Surface};
use crate::store::SortDirection;

/// Render the bottom status bar with mode, counts and sort direction.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = if app.modal.is_some() {
        "MODAL"
    } else {
        match app.surface {
            Surface::Add => "ADD",
            Surface::Edit => "EDIT",
            Surface::List => match app.input_mode {
                InputMode::Normal => "NORMAL",
                InputMode::Search => "SEARCH",
            },
        }
    };
    let sort = match app.sort_order {
        SortDirection::Ascending => "name asc",
        SortDirection::Descending => "name desc",
    };
    let filter = if app.search_query.is_empty() {
        String::new()
    } else {
        format!("  filter:\"{}\"", app.search_query)
    };
    let uptime = app.started_at.elapsed().as_secs();
    let msg = format!(
        "mode: {mode}  employees:{}/{}  sort:{sort}  rows/page:{}{filter}  up:{uptime}s",
        app.employees.len(),
        app.store.len(),
        app.rows_per_page
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the blocking alert dialog for a rejected operation.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Info { message } = state {
        let max_w = area.width.saturating_sub(6).max(30);
        let min_w = 40u16.min(max_w);
        let approx_lines = (message.len() as u16 / (min_w.saturating_sub(4).max(10))).max(1);
        let max_h = area.height.saturating_sub(6).max(5);
        let height = (approx_lines + 4).min(max_h).max(5);
        let rect = centered_rect(min_w, height, area);
        let p = Paragraph::new(message.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Error")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}

/// Render the help modal with key usage information.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let width = 64u16.min(area.width.saturating_sub(4)).max(44);
    let height = 16u16.min(area.height.saturating_sub(4)).max(10);
    let rect = centered_rect(width, height, area);

    let key = |label: &str, keys: &str| {
        Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(
                keys.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ])
    };

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        key("Navigation", "Arrow keys / h j k l, PageUp / PageDown"),
        key("Search by name", "/ (type to filter; Enter keeps it, Esc clears it)"),
        key("Sort by name", "s (flips direction each press)"),
        key("Add employee", "a or n"),
        key("Edit selection", "e or Enter"),
        key("Delete selection", "d or Delete"),
        key("Quit", "q"),
        Line::raw(""),
        key("On the form", "Tab/Shift-Tab: move; Enter: save; Esc: cancel"),
        Line::raw(""),
        key("Close help", "Esc / Enter"),
    ];

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
