//! Derived-view computation for the List surface.

use crate::app::AppState;

/// Recompute the displayed employee list from the authoritative directory
/// and the current query, then clamp the selection into range.
///
/// This is a pure re-derivation, called whenever the query or the directory
/// contents change; the result is always a subset of the store's current
/// order.
pub fn apply_search(app: &mut AppState) {
    app.employees = app.store.search(&app.search_query);
    if app.employees.is_empty() {
        app.selected_index = 0;
    } else if app.selected_index >= app.employees.len() {
        app.selected_index = app.employees.len() - 1;
    }
}
