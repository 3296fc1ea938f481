//! Application state types and entry glue.
//!
//! Defines the navigation, input and form state that back the three
//! surfaces, as well as helpers to construct defaults and to run the
//! application loop (re-exported as `run`).

pub mod keymap;
pub mod theme;
pub mod update;

use std::time::Instant;

use crate::store::{Employee, EmployeeFields, EmployeeStore, SortDirection};
pub use theme::Theme;

/// Active surface in the navigation stack. List is the entry surface; Add
/// and Edit are reached from it and return to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Surface {
    List,
    Add,
    Edit,
}

/// Current input mode for key handling on the List surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Which form input has focus on the Add/Edit surfaces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    EmpId,
    Name,
    Position,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::EmpId => FormFocus::Name,
            FormFocus::Name => FormFocus::Position,
            FormFocus::Position => FormFocus::EmpId,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::EmpId => FormFocus::Position,
            FormFocus::Name => FormFocus::EmpId,
            FormFocus::Position => FormFocus::Name,
        }
    }
}

/// Transient text fields backing the Add/Edit form.
///
/// `editing_id` distinguishes the two flows: `None` submits an add command,
/// `Some(id)` an update for that record. A rejected submit leaves the form
/// untouched so nothing the user typed is lost.
#[derive(Clone, Debug, Default)]
pub struct EmployeeForm {
    pub fields: EmployeeFields,
    pub focus: FormFocus,
    pub editing_id: Option<String>,
}

impl EmployeeForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-populate the form from an existing record for the Edit surface.
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            fields: EmployeeFields {
                emp_id: employee.emp_id.clone(),
                name: employee.name.clone(),
                position: employee.position.clone(),
            },
            focus: FormFocus::default(),
            editing_id: Some(employee.id.clone()),
        }
    }

    /// The text buffer behind the currently focused input.
    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormFocus::EmpId => &mut self.fields.emp_id,
            FormFocus::Name => &mut self.fields.name,
            FormFocus::Position => &mut self.fields.position,
        }
    }
}

/// Modal dialog states. A modal blocks all other input until dismissed.
#[derive(Clone, Debug)]
pub enum ModalState {
    /// Blocking alert, used for rejected operations.
    Info { message: String },
    /// Keybinding summary.
    Help,
}

/// Mutations the surfaces issue against the shared store.
///
/// Surfaces never mutate the directory themselves and no callbacks cross
/// navigation boundaries; everything funnels through
/// [`update::dispatch`].
#[derive(Clone, Debug)]
pub enum Command {
    Add { fields: EmployeeFields },
    Update { id: String, fields: EmployeeFields },
    Remove { id: String },
}

pub struct AppState {
    pub started_at: Instant,
    /// The authoritative directory.
    pub store: EmployeeStore,
    /// Derived view of the directory with the current search applied;
    /// recomputed whenever the query or the store changes.
    pub employees: Vec<Employee>,
    pub surface: Surface,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub sort_order: SortDirection,
    pub theme: Theme,
    pub keymap: keymap::Keymap,
    pub modal: Option<ModalState>,
    pub form: EmployeeForm,
}

impl AppState {
    /// Create a new `AppState` with the seeded directory and config files
    /// from the working directory.
    pub fn new() -> Self {
        Self::with_config("theme.conf", "keybinds.conf")
    }

    /// Create a new `AppState` loading theme and keybindings from the given
    /// paths (missing files are created with defaults).
    pub fn with_config(theme_path: &str, keybinds_path: &str) -> Self {
        let store = EmployeeStore::seeded();
        let employees = store.list().to_vec();
        Self {
            started_at: Instant::now(),
            store,
            employees,
            surface: Surface::List,
            selected_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            sort_order: SortDirection::Ascending,
            theme: Theme::load_or_init(theme_path),
            keymap: keymap::Keymap::load_or_init(keybinds_path),
            modal: None,
            form: EmployeeForm::blank(),
        }
    }

    /// The record the selection currently points at, out of the derived view.
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected_index)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a config file in the standard config locations: the working
/// directory first, then `$XDG_CONFIG_HOME/empdir-manager/` (or
/// `~/.config/empdir-manager/`).
pub fn config_file_read_path(name: &str) -> Option<String> {
    if std::path::Path::new(name).exists() {
        return Some(name.to_string());
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(std::path::PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| std::path::PathBuf::from(home).join(".config"))
        })?;
    let candidate = base.join("empdir-manager").join(name);
    if candidate.exists() {
        Some(candidate.to_string_lossy().into_owned())
    } else {
        None
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
