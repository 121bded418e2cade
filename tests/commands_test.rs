use missionctl::commands::{self, CommandAction, CommandCategory};
use missionctl::ui::core::actions::View;

#[test]
fn test_registry_has_ten_commands() {
    assert_eq!(commands::REGISTRY.len(), 10);
}

#[test]
fn test_registry_ids_are_unique() {
    let mut ids: Vec<&str> = commands::REGISTRY.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), commands::REGISTRY.len());
}

#[test]
fn test_registry_is_declared_grouped_by_category() {
    // Categories must be contiguous runs so the palette's headers follow
    // declaration order without re-sorting
    let mut seen: Vec<CommandCategory> = Vec::new();
    for command in commands::REGISTRY.iter() {
        if seen.last() != Some(&command.category) {
            assert!(
                !seen.contains(&command.category),
                "category {:?} appears in two separate runs",
                command.category
            );
            seen.push(command.category);
        }
    }
    assert_eq!(
        seen,
        vec![CommandCategory::Navigation, CommandCategory::Actions, CommandCategory::Settings]
    );
}

#[test]
fn test_every_view_has_a_navigation_command() {
    for view in [View::Dashboard, View::Tasks, View::Agents, View::Documents, View::Activity] {
        assert!(
            commands::REGISTRY
                .iter()
                .any(|c| c.action == CommandAction::Navigate(view)),
            "no navigation command for {:?}",
            view
        );
    }
}

#[test]
fn test_empty_query_matches_everything() {
    assert_eq!(commands::matching_indices("").len(), commands::REGISTRY.len());
}

#[test]
fn test_filter_results_are_a_matching_subset() {
    for query in ["go", "DASH", "settings", "theme", "e", "Navigation", "zzz-no-such"] {
        let indices = commands::matching_indices(query);
        assert!(indices.len() <= commands::REGISTRY.len());
        let needle = query.to_lowercase();
        for index in indices {
            let command = &commands::REGISTRY[index];
            assert!(
                command.title.to_lowercase().contains(&needle)
                    || command.category.label().to_lowercase().contains(&needle),
                "'{}' survived query '{}' without matching",
                command.title,
                query
            );
        }
    }
}

#[test]
fn test_filter_is_case_insensitive() {
    assert_eq!(commands::matching_indices("dash"), commands::matching_indices("DASH"));
    assert_eq!(commands::matching_indices("Dash").len(), 1);
}

#[test]
fn test_category_label_matches_too() {
    // "navigation" is no command title, only a category label
    let indices = commands::matching_indices("navigation");
    assert_eq!(indices.len(), 5);
    for index in indices {
        assert_eq!(commands::REGISTRY[index].category, CommandCategory::Navigation);
    }
}

#[test]
fn test_no_match_returns_empty() {
    assert!(commands::matching_indices("qqqqq").is_empty());
}
