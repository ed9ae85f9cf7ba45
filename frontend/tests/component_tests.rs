#[cfg(test)]
mod component_tests {
    use frontend::components::badge::variant_classes;
    use frontend::components::grid_view::grid_classes;
    use frontend::components::nav::SECTIONS;
    use frontend::pages::matches::MatchFilters;
    use frontend::pages::players::{form_from_values, values_from_player, PlayersQuery};
    use frontend::Route;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared::{BadgeVariant, GridColumns, Match, Player};
    use std::collections::BTreeMap;

    fn fixture(id: &str, tournament: &str, date: (i32, u32, u32), status: &str) -> Match {
        Match {
            id: id.to_string(),
            tournament: tournament.to_string(),
            home_team: "Rovers".to_string(),
            away_team: "United".to_string(),
            kickoff_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            venue: None,
            status: status.to_string(),
            home_score: None,
            away_score: None,
        }
    }

    #[test]
    fn test_grid_classes_use_sm_as_base() {
        let classes = grid_classes(&GridColumns { sm: 1, md: 2, lg: 3, xl: 4, xxl: 6 });
        assert_eq!(
            classes,
            vec![
                "grid", "gap-4", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3",
                "xl:grid-cols-4", "2xl:grid-cols-6",
            ]
        );
    }

    #[rstest]
    #[case(BadgeVariant::Default, "bg-blue-600")]
    #[case(BadgeVariant::Secondary, "bg-gray-100")]
    #[case(BadgeVariant::Destructive, "bg-red-600")]
    #[case(BadgeVariant::Outline, "border-gray-300")]
    fn test_badge_classes(#[case] variant: BadgeVariant, #[case] expected: &str) {
        assert!(variant_classes(variant).contains(expected));
    }

    #[test]
    fn test_sections_start_with_players() {
        assert_eq!(SECTIONS[0].0, Route::Players);
        assert_eq!(SECTIONS.len(), 5);
    }

    #[test]
    fn test_players_query_resets_page_on_filter_change() {
        let mut query = PlayersQuery::new(20);
        query.page = 4;

        let searched = query.clone().with_search("smith".to_string());
        assert_eq!(searched.page, 1);
        assert_eq!(searched.to_page_query().search.as_deref(), Some("smith"));

        let mut paged = searched.clone();
        paged.page = 3;
        let same = paged.clone().with_search("smith".to_string());
        assert_eq!(same.page, 3);

        let filtered = paged.with_predicate("position", vec!["GK".to_string()]);
        assert_eq!(filtered.page, 1);
        assert_eq!(filtered.selected("position"), vec!["GK".to_string()]);
    }

    #[test]
    fn test_player_form_from_dialog_values() {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Alex Morgan".to_string());
        values.insert("position".to_string(), "FWD".to_string());
        values.insert("jerseyNumber".to_string(), "13".to_string());

        let form = form_from_values(&values).unwrap();
        assert_eq!(form.name, "Alex Morgan");
        assert_eq!(form.jersey_number, Some(13));
        assert_eq!(form.team, None);

        values.insert("jerseyNumber".to_string(), "thirteen".to_string());
        assert!(form_from_values(&values).is_err());
    }

    #[test]
    fn test_player_values_skip_missing_fields() {
        let player = Player {
            id: "p1".to_string(),
            name: "Sam Kerr".to_string(),
            position: "FWD".to_string(),
            team: None,
            nationality: Some("Australia".to_string()),
            status: "active".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1993, 9, 10),
            jersey_number: None,
        };
        let values = values_from_player(&player);
        assert_eq!(values.get("dateOfBirth").map(String::as_str), Some("1993-09-10"));
        assert!(!values.contains_key("team"));
        assert!(!values.contains_key("jerseyNumber"));
    }

    #[test]
    fn test_match_filters_combine_predicates_and_dates() {
        let matches = vec![
            fixture("1", "League", (2024, 3, 1), "completed"),
            fixture("2", "Cup", (2024, 3, 10), "scheduled"),
            fixture("3", "League", (2024, 4, 2), "scheduled"),
        ];

        let mut filters = MatchFilters::default();
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&matches).len(), 3);

        filters.predicates.set_predicate("tournament", vec!["League"]);
        filters.from = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert!(filters.is_active());
        let ids: Vec<String> = filters.apply(&matches).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["3".to_string()]);
    }
}
