use crate::api::teams::list_teams;
use crate::components::grid_view::GridView;
use crate::components::page_shell::PageShell;
use crate::config::Config;
use log::debug;
use shared::{EmptyState, GridPageChanged, Team};
use std::rc::Rc;
use yew::prelude::*;

pub const TEAM_SEARCH_KEYS: [&str; 3] = ["name", "country", "league"];

fn team_tile(team: Team) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-sm p-4 flex items-center gap-4 hover:shadow-md transition-shadow">
            if let Some(url) = &team.logo_url {
                <img src={url.clone()} alt={team.name.clone()} class="h-12 w-12 rounded-full object-cover" />
            } else {
                <div class="h-12 w-12 rounded-full bg-emerald-100 text-emerald-700 flex items-center justify-center font-semibold">
                    {team.initials()}
                </div>
            }
            <div class="min-w-0">
                <h3 class="font-medium text-gray-900 truncate">{&team.name}</h3>
                <p class="text-sm text-gray-500 truncate">
                    {match &team.league {
                        Some(league) => format!("{} · {}", team.country, league),
                        None => team.country.clone(),
                    }}
                </p>
                <p class="text-xs text-gray-400">
                    {format!("{} players", team.player_count)}
                    if let Some(coach) = &team.coach {
                        {format!(" · Coach: {}", coach)}
                    }
                </p>
            </div>
        </div>
    }
}

#[function_component(Teams)]
pub fn teams() -> Html {
    let config = use_memo((), |_| Config::view());
    let teams = use_state(|| None::<Rc<Vec<Team>>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let teams = teams.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match list_teams().await {
                    Ok(list) => teams.set(Some(Rc::new(list))),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_page_change = Callback::from(|changed: GridPageChanged| {
        debug!("Teams grid page {} ({} per page)", changed.page, changed.page_size);
    });

    html! {
        <PageShell title="Teams" error={(*error).clone()}>
            <GridView<Team>
                rows={(*teams).clone()}
                render_item={Callback::from(team_tile)}
                loading={*loading}
                page_size={config.grid_page_size}
                columns={config.grid_columns}
                search_keys={TEAM_SEARCH_KEYS.iter().map(|k| k.to_string()).collect::<Vec<_>>()}
                search_placeholder="Search teams, countries or leagues..."
                search_debounce_ms={config.search_debounce_ms}
                {on_page_change}
                empty_state={EmptyState::new("No teams", "Teams appear here once they are registered.")}
            />
        </PageShell>
    }
}
