use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

use crate::app::keymap::KeyAction;
use crate::app::{AppState, Command, EmployeeForm, InputMode, ModalState, Surface};
use crate::error::StoreError;
use crate::search::apply_search;
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !handle_key(&mut app, key)
        {
            break;
        }
    }

    Ok(())
}

/// Route one key press to the active modal, surface and input mode.
/// Returns `false` when the application should exit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if app.modal.is_some() {
        handle_modal_key(app, key.code);
        return true;
    }
    match app.surface {
        Surface::List => match app.input_mode {
            InputMode::Normal => return handle_list_key(app, key),
            InputMode::Search => handle_search_key(app, key.code),
        },
        Surface::Add | Surface::Edit => handle_form_key(app, key.code),
    }
    true
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> bool {
    let Some(action) = app.keymap.resolve(&key) else {
        return true;
    };
    match action {
        KeyAction::Quit => return false,
        KeyAction::StartSearch => {
            app.search_query.clear();
            apply_search(app);
            app.input_mode = InputMode::Search;
        }
        KeyAction::AddEmployee => {
            app.form = EmployeeForm::blank();
            app.surface = Surface::Add;
        }
        KeyAction::EditSelection => {
            if let Some(employee) = app.selected_employee() {
                app.form = EmployeeForm::for_employee(employee);
                app.surface = Surface::Edit;
            }
        }
        KeyAction::DeleteSelection => {
            if let Some(employee) = app.selected_employee() {
                let id = employee.id.clone();
                dispatch(app, Command::Remove { id });
            }
        }
        KeyAction::ToggleSort => {
            // The flip happens before the sort, so the very first toggle
            // sorts descending when starting from the ascending default.
            let order = app.sort_order.flipped();
            app.sort_order = order;
            app.store.sort_by_name(order);
            apply_search(app);
        }
        KeyAction::OpenHelp => {
            app.modal = Some(ModalState::Help);
        }
        KeyAction::MoveUp => {
            if app.selected_index > 0 {
                app.selected_index -= 1;
            }
        }
        KeyAction::MoveDown => {
            if app.selected_index + 1 < app.employees.len() {
                app.selected_index += 1;
            }
        }
        KeyAction::MoveLeftPage | KeyAction::PageUp => {
            let rpp = app.rows_per_page.max(1);
            if app.selected_index >= rpp {
                app.selected_index -= rpp;
            } else {
                app.selected_index = 0;
            }
        }
        KeyAction::MoveRightPage | KeyAction::PageDown => {
            let rpp = app.rows_per_page.max(1);
            let new_idx = app.selected_index.saturating_add(rpp);
            app.selected_index = new_idx.min(app.employees.len().saturating_sub(1));
        }
        KeyAction::Ignore => {}
    }
    true
}

fn handle_search_key(app: &mut AppState, code: KeyCode) {
    match code {
        // Enter keeps the current filter, Esc discards it; the view is
        // re-derived on every keystroke in between.
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.search_query.clear();
            apply_search(app);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            apply_search(app);
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            apply_search(app);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.form = EmployeeForm::blank();
            app.surface = Surface::List;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = app.form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = app.form.focus.prev();
        }
        KeyCode::Enter => submit_form(app),
        KeyCode::Backspace => {
            app.form.focused_field_mut().pop();
        }
        KeyCode::Char(c) => {
            app.form.focused_field_mut().push(c);
        }
        _ => {}
    }
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    if let KeyCode::Esc | KeyCode::Enter = code {
        app.modal = None;
    }
}

fn submit_form(app: &mut AppState) {
    let fields = app.form.fields.clone();
    let command = match app.form.editing_id.clone() {
        Some(id) => Command::Update { id, fields },
        None => Command::Add { fields },
    };
    dispatch(app, command);
}

/// Apply a command to the store and reconcile the UI: navigate back to the
/// List surface on success, or raise a blocking alert on rejection. The
/// form keeps its contents on rejection so the user can correct and
/// resubmit.
pub fn dispatch(app: &mut AppState, command: Command) {
    match command {
        Command::Add { fields } => match app.store.add(fields) {
            Ok(_) => return_to_list(app),
            Err(err) => {
                app.modal = Some(ModalState::Info {
                    message: err.to_string(),
                });
            }
        },
        Command::Update { id, fields } => match app.store.update(&id, fields) {
            Ok(()) => return_to_list(app),
            Err(err) => {
                if let StoreError::NotFound(missing) = &err {
                    tracing::warn!(id = %missing, "update target is no longer in the directory");
                }
                app.modal = Some(ModalState::Info {
                    message: err.to_string(),
                });
            }
        },
        Command::Remove { id } => {
            app.store.remove(&id);
            apply_search(app);
        }
    }
}

fn return_to_list(app: &mut AppState) {
    app.form = EmployeeForm::blank();
    app.surface = Surface::List;
    apply_search(app);
}
