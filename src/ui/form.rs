use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, FormFocus};

/// Render the Add/Edit form: three labeled inputs with a focus marker.
pub fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let title = if app.form.editing_id.is_some() {
        "Edit Employee"
    } else {
        "Add Employee"
    };

    let width = area.width.saturating_sub(10).clamp(40, 60);
    let height = 9u16.min(area.height);
    let rect = crate::ui::components::centered_rect(width, height, area);

    let marker = |focus: FormFocus| if app.form.focus == focus { "▶" } else { " " };
    let lines = vec![
        Line::raw(""),
        Line::raw(format!(
            "{} Employee ID: {}",
            marker(FormFocus::EmpId),
            app.form.fields.emp_id
        )),
        Line::raw(format!(
            "{} Name:        {}",
            marker(FormFocus::Name),
            app.form.fields.name
        )),
        Line::raw(format!(
            "{} Position:    {}",
            marker(FormFocus::Position),
            app.form.fields.position
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter: save   Tab: next field   Esc: cancel",
            Style::default().fg(app.theme.muted),
        )),
    ];

    let p = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, rect);
}
