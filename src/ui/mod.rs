pub mod components;
pub mod form;
pub mod list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, ModalState, Surface};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    render_header(f, root[0], app);

    match app.surface {
        Surface::List => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
                .split(root[1]);
            list::render_employee_table(f, body[0], app);
            list::render_employee_details(f, body[1], app);
        }
        Surface::Add | Surface::Edit => {
            form::render_form(f, root[1], app);
        }
    }

    components::render_status_bar(f, root[2], app);

    if app.modal.is_some() {
        render_modal(f, f.area(), app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let surface = match app.surface {
        Surface::List => "[List]",
        Surface::Add => "[Add]",
        Surface::Edit => "[Edit]",
    };
    let prompt = match app.input_mode {
        InputMode::Search => format!("  Search: {}", app.search_query),
        InputMode::Normal => String::new(),
    };
    let hints = match app.surface {
        Surface::List => "a: add; e: edit; d: delete; s: sort; /: search; ?: help; q: quit",
        Surface::Add | Surface::Edit => "Tab: next field; Enter: save; Esc: cancel",
    };
    let p = Paragraph::new(format!(
        "empdir-manager  {surface}{prompt}  employees:{}  — {hints}",
        app.employees.len()
    ))
    .block(
        Block::default()
            .title("empdir-manager")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(
        Style::default()
            .fg(app.theme.header_fg)
            .bg(app.theme.header_bg),
    );
    f.render_widget(p, area);
}

fn render_modal(f: &mut Frame, area: Rect, app: &mut AppState) {
    if let Some(state) = app.modal.clone() {
        match state {
            ModalState::Info { .. } => components::render_info_modal(f, area, app, &state),
            ModalState::Help => components::render_help_modal(f, area, app),
        }
    }
}
