use crate::api::matches::list_matches;
use crate::components::data_table::{Column, DataTable};
use crate::components::date_picker::DatePicker;
use crate::components::multi_select::MultiSelect;
use crate::components::page_shell::PageShell;
use crate::config::Config;
use chrono::NaiveDate;
use shared::date::{format_iso, format_long, parse_date};
use shared::models::matches::{status_options, tournament_options};
use shared::{EmptyState, FilterState, Match};
use std::rc::Rc;
use yew::prelude::*;

/// Filters applied before the table's own search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilters {
    pub predicates: FilterState,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl MatchFilters {
    pub fn apply(&self, matches: &[Match]) -> Vec<Match> {
        matches
            .iter()
            .filter(|m| self.predicates.matches_predicates(*m))
            .filter(|m| m.kicks_off_within(self.from, self.to))
            .cloned()
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.predicates.is_active() || self.from.is_some() || self.to.is_some()
    }

    fn selected(&self, field: &str) -> Vec<String> {
        self.predicates
            .predicate(field)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn columns() -> Vec<Column<Match>> {
    vec![
        Column::accessor("Fixture", "fixture"),
        Column::accessor("Tournament", "tournament"),
        Column::cell("Kick-off", |m: &Match| html! { {format_long(m.kickoff_date)} }),
        Column::accessor("Venue", "venue"),
        Column::accessor("Score", "score"),
        Column::badge("Status", "status"),
    ]
}

#[function_component(Matches)]
pub fn matches() -> Html {
    let config = use_memo((), |_| Config::view());
    let all = use_state(|| None::<Rc<Vec<Match>>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filters = use_state(MatchFilters::default);
    let filter_generation = use_state(|| 0u32);
    let columns = use_memo((), |_| columns());

    {
        let all = all.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match list_matches().await {
                    Ok(list) => all.set(Some(Rc::new(list))),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let rows = {
        let all = (*all).clone();
        use_memo(((*filters).clone(), all), |(filters, all)| {
            all.as_ref().map(|list| Rc::new(filters.apply(list)))
        })
    };

    let tournaments = all
        .as_ref()
        .map(|list| tournament_options(list))
        .unwrap_or_default();

    // Every real change sends the table back to page 1.
    let set_filters = {
        let filters = filters.clone();
        let filter_generation = filter_generation.clone();
        Callback::from(move |next: MatchFilters| {
            if next != *filters {
                filter_generation.set(filter_generation.wrapping_add(1));
                filters.set(next);
            }
        })
    };

    let on_predicate = |field: &'static str| {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |values: Vec<String>| {
            let mut next = (*filters).clone();
            next.predicates.set_predicate(field, values);
            set_filters.emit(next);
        })
    };

    let on_from = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |iso: Option<String>| {
            set_filters.emit(MatchFilters {
                from: iso.as_deref().and_then(parse_date),
                ..(*filters).clone()
            });
        })
    };

    let on_to = {
        let filters = filters.clone();
        let set_filters = set_filters.clone();
        Callback::from(move |iso: Option<String>| {
            set_filters.emit(MatchFilters {
                to: iso.as_deref().and_then(parse_date),
                ..(*filters).clone()
            });
        })
    };

    let on_reset = set_filters.reform(|_: MouseEvent| MatchFilters::default());

    let filter_bar = html! {
        <>
            <MultiSelect
                label="Tournament"
                options={tournaments}
                selected={filters.selected("tournament")}
                on_change={on_predicate("tournament")}
                max_chips={config.max_visible_chips}
                searchable=true
            />
            <MultiSelect
                label="Status"
                options={status_options()}
                selected={filters.selected("status")}
                on_change={on_predicate("status")}
                max_chips={config.max_visible_chips}
            />
            <div class="flex flex-col">
                <label for="matches-from" class="text-sm font-medium text-gray-700 mb-1">{"From"}</label>
                <DatePicker
                    id="matches-from"
                    value={filters.from.map(|d| AttrValue::from(format_iso(d)))}
                    on_change={on_from}
                    auto_parse_after={config.date_auto_parse_after}
                />
            </div>
            <div class="flex flex-col">
                <label for="matches-to" class="text-sm font-medium text-gray-700 mb-1">{"To"}</label>
                <DatePicker
                    id="matches-to"
                    value={filters.to.map(|d| AttrValue::from(format_iso(d)))}
                    on_change={on_to}
                    auto_parse_after={config.date_auto_parse_after}
                />
            </div>
            if filters.is_active() {
                <button onclick={on_reset} class="text-sm text-blue-600 hover:text-blue-800 py-2">
                    {"Reset filters"}
                </button>
            }
        </>
    };

    html! {
        <PageShell title="Matches" filters={filter_bar} error={(*error).clone()}>
            <DataTable<Match>
                rows={(*rows).clone()}
                {columns}
                loading={*loading}
                searchable=true
                search_placeholder="Search fixtures, tournaments or venues..."
                search_debounce_ms={config.search_debounce_ms}
                page_size={config.default_page_size}
                page_size_options={config.page_size_choices()}
                reset_key={*filter_generation}
                empty_state={EmptyState::new("No matches", "Scheduled fixtures appear here.")}
            />
        </PageShell>
    }
}
