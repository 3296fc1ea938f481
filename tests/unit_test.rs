// Unit tests for empdir-manager
// These tests work with the public API without modifying the main codebase

#[cfg(test)]
mod store_tests {
    use empdir_manager::error::StoreError;
    use empdir_manager::store::{EmployeeFields, EmployeeStore, SortDirection};

    #[test]
    fn test_seed_directory_contents() {
        let store = EmployeeStore::seeded();
        assert_eq!(store.len(), 3);
        let emp_ids: Vec<&str> = store.list().iter().map(|e| e.emp_id.as_str()).collect();
        assert_eq!(emp_ids, ["EMP001", "EMP002", "EMP003"]);
        let positions: Vec<&str> = store.list().iter().map(|e| e.position.as_str()).collect();
        assert_eq!(
            positions,
            ["Software Engineer", "Product Manager", "UI/UX Designer"]
        );
    }

    #[test]
    fn test_list_length_tracks_successful_adds() {
        let mut store = EmployeeStore::seeded();
        let mut successes: usize = 0;
        for (emp_id, name) in [
            ("EMP004", "Bilal"),
            ("EMP001", "Clash"), // duplicate, rejected
            ("EMP005", "Sana"),
            ("", "Nameless"), // missing field, rejected
        ] {
            if store
                .add(EmployeeFields::new(emp_id, name, "QA"))
                .is_ok()
            {
                successes += 1;
            }
        }
        assert_eq!(successes, 2);
        assert_eq!(store.len(), 3 + successes);
    }

    #[test]
    fn test_add_scenario_from_seed() {
        let mut store = EmployeeStore::seeded();
        let added = store
            .add(EmployeeFields::new("EMP004", "Bilal", "QA"))
            .expect("distinct emp_id should be accepted");
        assert_eq!(store.len(), 4);
        let last = store.list().last().expect("non-empty");
        assert_eq!(last.id, added.id);
        assert_eq!(last.emp_id, "EMP004");
        assert_eq!(last.name, "Bilal");
    }

    #[test]
    fn test_duplicate_add_scenario_from_seed() {
        let mut store = EmployeeStore::seeded();
        let before = store.list().to_vec();
        let err = store
            .add(EmployeeFields::new("EMP001", "X", "Y"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId);
        assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn test_emp_id_uniqueness_is_case_sensitive() {
        let mut store = EmployeeStore::seeded();
        // "emp001" is a different identifier than "EMP001"
        assert!(store.add(EmployeeFields::new("emp001", "Lower", "QA")).is_ok());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_update_preserves_position_and_id() {
        let mut store = EmployeeStore::seeded();
        store
            .update("1", EmployeeFields::new("EMP010", "Usama", "Staff Engineer"))
            .unwrap();
        let first = &store.list()[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.emp_id, "EMP010");
        assert_eq!(first.position, "Staff Engineer");
    }

    #[test]
    fn test_update_with_own_emp_id_succeeds() {
        let mut store = EmployeeStore::seeded();
        store
            .update("1", EmployeeFields::new("EMP001", "Usama", "Principal Engineer"))
            .expect("own emp_id is not a collision");
        assert_eq!(store.list()[0].position, "Principal Engineer");
    }

    #[test]
    fn test_update_collision_and_not_found() {
        let mut store = EmployeeStore::seeded();
        assert_eq!(
            store
                .update("2", EmployeeFields::new("EMP003", "Umer", "PM"))
                .unwrap_err(),
            StoreError::DuplicateId
        );
        assert_eq!(
            store
                .update("404", EmployeeFields::new("EMP404", "Nobody", "None"))
                .unwrap_err(),
            StoreError::NotFound("404".to_string())
        );
        // Directory untouched either way
        assert_eq!(store.list()[1].emp_id, "EMP002");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_twice_equals_remove_once() {
        let mut once = EmployeeStore::seeded();
        once.remove("1");
        let mut twice = EmployeeStore::seeded();
        twice.remove("1");
        twice.remove("1");
        assert_eq!(once.list(), twice.list());
    }

    #[test]
    fn test_search_scenario_from_seed() {
        let store = EmployeeStore::seeded();
        let hits = store.search("ar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Arslan");
    }

    #[test]
    fn test_search_results_are_a_subset_of_list() {
        let store = EmployeeStore::seeded();
        for query in ["", "a", "U", "ar", "nothing"] {
            let hits = store.search(query);
            for hit in &hits {
                assert!(store.list().contains(hit));
                assert!(
                    hit.name.to_lowercase().contains(&query.to_lowercase()),
                    "{} should contain {}",
                    hit.name,
                    query
                );
            }
        }
        assert_eq!(store.search(""), store.list().to_vec());
    }

    #[test]
    fn test_sort_scenario_from_seed() {
        let mut store = EmployeeStore::seeded();
        store.sort_by_name(SortDirection::Ascending);
        let names: Vec<&str> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Arslan", "Umer", "Usama"]);
    }

    #[test]
    fn test_sort_directions_are_exact_reverses() {
        let mut store = EmployeeStore::seeded();
        store.sort_by_name(SortDirection::Ascending);
        let ascending: Vec<String> = store.list().iter().map(|e| e.name.clone()).collect();
        store.sort_by_name(SortDirection::Descending);
        let descending: Vec<String> = store.list().iter().map(|e| e.name.clone()).collect();
        let mut reversed = descending.clone();
        reversed.reverse();
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn test_validation_rejects_whitespace_only_fields() {
        assert_eq!(
            EmployeeFields::new(" ", "Name", "Position").validate(),
            Err(StoreError::MissingField)
        );
        assert_eq!(
            EmployeeFields::new("EMP001", "\t", "Position").validate(),
            Err(StoreError::MissingField)
        );
        assert_eq!(EmployeeFields::new("EMP001", "Name", "Position").validate(), Ok(()));
    }
}

#[cfg(test)]
mod search_tests {
    use empdir_manager::app::{AppState, EmployeeForm, InputMode, Surface, Theme, keymap::Keymap};
    use empdir_manager::search::apply_search;
    use empdir_manager::store::{EmployeeFields, EmployeeStore, SortDirection};

    fn create_test_app(store: EmployeeStore) -> AppState {
        let employees = store.list().to_vec();
        AppState {
            started_at: std::time::Instant::now(),
            store,
            employees,
            surface: Surface::List,
            selected_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            sort_order: SortDirection::Ascending,
            theme: Theme::dark(),
            keymap: Keymap::default(),
            modal: None,
            form: EmployeeForm::blank(),
        }
    }

    #[test]
    fn test_search_empty_query_resets() {
        let mut app = create_test_app(EmployeeStore::seeded());
        app.employees.truncate(1); // stale filtered state
        app.search_query = String::new();

        apply_search(&mut app);

        assert_eq!(app.employees.len(), 3);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut app = create_test_app(EmployeeStore::seeded());
        app.search_query = "uSaMa".to_string();
        apply_search(&mut app);
        assert_eq!(app.employees.len(), 1);
        assert_eq!(app.employees[0].name, "Usama");

        app.search_query = "UMER".to_string();
        apply_search(&mut app);
        assert_eq!(app.employees.len(), 1);
        assert_eq!(app.employees[0].name, "Umer");
    }

    #[test]
    fn test_search_matches_name_only() {
        let mut store = EmployeeStore::seeded();
        store
            .add(EmployeeFields::new("ARSLAN", "Zoya", "Engineer"))
            .unwrap();
        let mut app = create_test_app(store);

        // "arslan" appears in the new record's emp_id but only in one name
        app.search_query = "arslan".to_string();
        apply_search(&mut app);
        assert_eq!(app.employees.len(), 1);
        assert_eq!(app.employees[0].name, "Arslan");
    }

    #[test]
    fn test_selection_index_clamp_after_filter() {
        let mut app = create_test_app(EmployeeStore::seeded());
        app.selected_index = 2; // last index
        app.search_query = "um".to_string();
        apply_search(&mut app);

        assert_eq!(app.employees.len(), 2);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_search_special_characters_and_no_panic() {
        let mut app = create_test_app(EmployeeStore::seeded());
        // Special characters are treated literally
        app.search_query = "[".to_string();
        apply_search(&mut app);
        assert_eq!(app.employees.len(), 0);

        app.search_query = "ßß".to_string();
        apply_search(&mut app);
        assert_eq!(app.employees.len(), 0);
    }

    #[test]
    fn test_search_performance_large_directory() {
        use std::time::Instant;

        let mut store = EmployeeStore::new();
        for i in 0..10_000 {
            store
                .add(EmployeeFields::new(
                    format!("EMP{i:05}"),
                    format!("person{i}"),
                    "Engineer",
                ))
                .unwrap();
        }
        let mut app = create_test_app(store);
        app.search_query = "person5000".to_string();

        let start = Instant::now();
        apply_search(&mut app);
        let duration = start.elapsed();

        assert_eq!(app.employees.len(), 1);
        assert_eq!(app.employees[0].name, "person5000");
        assert!(
            duration.as_millis() < 100,
            "Search took too long: {:?}",
            duration
        );
    }
}

#[cfg(test)]
mod error_tests {
    use empdir_manager::error::StoreError;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            StoreError::MissingField.to_string(),
            "Please fill in all the fields."
        );
        assert_eq!(
            StoreError::DuplicateId.to_string(),
            "Employee with the same ID already exists."
        );
        assert_eq!(
            StoreError::NotFound("7".to_string()).to_string(),
            "No employee record with id 7."
        );
    }

    #[test]
    fn test_store_error_is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&StoreError::MissingField);
    }
}

#[cfg(test)]
mod app_state_tests {
    use empdir_manager::app::{AppState, InputMode, Surface};
    use empdir_manager::store::SortDirection;

    #[test]
    fn test_app_state_creation() {
        let app = AppState::new();
        assert_eq!(app.surface, Surface::List);
        assert_eq!(app.selected_index, 0);
        assert!(matches!(app.input_mode, InputMode::Normal));
        assert_eq!(app.sort_order, SortDirection::Ascending);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_app_state_starts_with_seeded_view() {
        let app = AppState::new();
        assert_eq!(app.store.len(), 3);
        // Derived view starts equal to the directory
        assert_eq!(app.employees, app.store.list().to_vec());
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_selected_employee_follows_index() {
        let mut app = AppState::new();
        assert_eq!(app.selected_employee().map(|e| e.name.as_str()), Some("Usama"));
        app.selected_index = 2;
        assert_eq!(app.selected_employee().map(|e| e.name.as_str()), Some("Arslan"));
        app.selected_index = 99;
        assert!(app.selected_employee().is_none());
    }
}

#[cfg(test)]
mod form_tests {
    use empdir_manager::app::{EmployeeForm, FormFocus};
    use empdir_manager::store::{Employee, EmployeeFields};

    #[test]
    fn test_blank_form_targets_add_flow() {
        let form = EmployeeForm::blank();
        assert!(form.editing_id.is_none());
        assert_eq!(form.fields, EmployeeFields::default());
        assert_eq!(form.focus, FormFocus::EmpId);
    }

    #[test]
    fn test_form_prepopulates_from_employee() {
        let employee = Employee {
            id: "2".to_string(),
            emp_id: "EMP002".to_string(),
            name: "Umer".to_string(),
            position: "Product Manager".to_string(),
        };
        let form = EmployeeForm::for_employee(&employee);
        assert_eq!(form.editing_id.as_deref(), Some("2"));
        assert_eq!(form.fields.emp_id, "EMP002");
        assert_eq!(form.fields.name, "Umer");
        assert_eq!(form.fields.position, "Product Manager");
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut focus = FormFocus::EmpId;
        focus = focus.next();
        assert_eq!(focus, FormFocus::Name);
        focus = focus.next();
        assert_eq!(focus, FormFocus::Position);
        focus = focus.next();
        assert_eq!(focus, FormFocus::EmpId);
        focus = focus.prev();
        assert_eq!(focus, FormFocus::Position);
    }

    #[test]
    fn test_focused_field_mut_edits_the_right_buffer() {
        let mut form = EmployeeForm::blank();
        form.focused_field_mut().push_str("EMP004");
        form.focus = form.focus.next();
        form.focused_field_mut().push_str("Bilal");
        form.focus = form.focus.next();
        form.focused_field_mut().push_str("QA");

        assert_eq!(form.fields.emp_id, "EMP004");
        assert_eq!(form.fields.name, "Bilal");
        assert_eq!(form.fields.position, "QA");
    }
}
