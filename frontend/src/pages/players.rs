use crate::api::players::{create_player, update_player, PlayerSource};
use crate::components::data_table::{Column, DataTable};
use crate::components::form_dialog::FormDialog;
use crate::components::multi_select::MultiSelect;
use crate::components::page_shell::PageShell;
use crate::config::Config;
use log::{debug, warn};
use shared::date::format_long;
use shared::models::player::{position_options, status_options};
use shared::{
    EmptyState, FieldSpec, FilterState, PageQuery, PaginationState, Player, PlayerForm, Row,
    RowSource,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// What the players listing currently asks the server for.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayersQuery {
    pub filter: FilterState,
    pub page: u32,
    pub page_size: u32,
}

impl PlayersQuery {
    pub fn new(page_size: u32) -> Self {
        Self { filter: FilterState::new(), page: 1, page_size }
    }

    pub fn to_page_query(&self) -> PageQuery {
        PageQuery::new(self.page, self.page_size).with_filter(&self.filter)
    }

    /// Any filter change starts over from page 1.
    pub fn with_search(mut self, term: String) -> Self {
        if self.filter.set_search_term(term) {
            self.page = 1;
        }
        self
    }

    pub fn with_predicate(mut self, field: &str, values: Vec<String>) -> Self {
        self.filter.set_predicate(field, values);
        self.page = 1;
        self
    }

    pub fn selected(&self, field: &str) -> Vec<String> {
        self.filter
            .predicate(field)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

pub fn player_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name").required().max_length(100),
        FieldSpec::select("position", "Position", position_options()).required(),
        FieldSpec::text("team", "Team").max_length(100),
        FieldSpec::text("nationality", "Nationality").max_length(60),
        FieldSpec::date("dateOfBirth", "Date of birth"),
        FieldSpec::text("jerseyNumber", "Jersey number").max_length(2).placeholder("1-99"),
    ]
}

/// Dialog values for an existing player.
pub fn values_from_player(player: &Player) -> BTreeMap<String, String> {
    ["name", "position", "team", "nationality", "dateOfBirth", "jerseyNumber"]
        .iter()
        .filter_map(|key| player.field(key).map(|v| (key.to_string(), v)))
        .collect()
}

/// Builds the request body from cleaned dialog values.
pub fn form_from_values(values: &BTreeMap<String, String>) -> Result<PlayerForm, String> {
    let jersey_number = values
        .get("jerseyNumber")
        .map(|raw| {
            raw.parse::<u8>()
                .map_err(|_| format!("Jersey number must be a number, got {:?}", raw))
        })
        .transpose()?;
    let form = PlayerForm {
        name: values.get("name").cloned().unwrap_or_default(),
        position: values.get("position").cloned().unwrap_or_default(),
        team: values.get("team").cloned(),
        nationality: values.get("nationality").cloned(),
        date_of_birth: values.get("dateOfBirth").cloned(),
        jersey_number,
    };
    form.validate_fields().map_err(|e| e.to_string())?;
    Ok(form)
}

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(Player),
}

#[function_component(Players)]
pub fn players() -> Html {
    let config = use_memo((), |_| Config::view());
    let query = {
        let page_size = config.default_page_size;
        use_state(move || PlayersQuery::new(page_size))
    };
    let reload = use_state(|| 0u32);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let rows = use_state(|| None::<Rc<Vec<Player>>>);
    let pagination = use_state(|| None::<PaginationState>);
    let dialog = use_state(|| Dialog::Closed);
    let dialog_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let loading = loading.clone();
        let error = error.clone();
        let rows = rows.clone();
        let pagination = pagination.clone();
        use_effect_with(((*query).clone(), *reload), move |(query, _)| {
            let page_query = query.to_page_query();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match PlayerSource.fetch_page(&page_query).await {
                    Ok(page) => {
                        match page.pagination_state() {
                            Ok(state) => pagination.set(Some(state)),
                            Err(e) => warn!("Ignoring pagination from server: {}", e),
                        }
                        rows.set(Some(Rc::new(page.items)));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let columns = use_memo((), |_| {
        vec![
            Column::cell("Name", |p: &Player| html! {
                <span class="font-medium">
                    {&p.name}
                    if let Some(n) = p.jersey_number {
                        <span class="ml-2 text-xs text-gray-500">{format!("#{}", n)}</span>
                    }
                </span>
            }),
            Column::accessor("Position", "positionLabel"),
            Column::accessor("Team", "team"),
            Column::accessor("Nationality", "nationality"),
            Column::cell("Date of birth", |p: &Player| {
                html! { {p.date_of_birth.map(format_long).unwrap_or_default()} }
            }),
            Column::badge("Status", "status"),
        ]
    });

    let open_edit = {
        let dialog = dialog.clone();
        let dialog_error = dialog_error.clone();
        Callback::from(move |player: Player| {
            dialog_error.set(None);
            dialog.set(Dialog::Edit(player));
        })
    };

    let actions = {
        let open_edit = open_edit.clone();
        Callback::from(move |player: Player| {
            html! {
                <button
                    onclick={open_edit.reform(move |_: MouseEvent| player.clone())}
                    class="text-sm text-blue-600 hover:text-blue-800"
                >
                    {"Edit"}
                </button>
            }
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            debug!("Players page -> {}", page);
            query.set(PlayersQuery { page, ..(*query).clone() });
        })
    };

    let on_page_size_change = {
        let query = query.clone();
        Callback::from(move |(page_size, page): (u32, u32)| {
            query.set(PlayersQuery { page, page_size, ..(*query).clone() });
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |term: String| {
            let next = (*query).clone().with_search(term);
            if next != *query {
                query.set(next);
            }
        })
    };

    let on_predicate = |field: &'static str| {
        let query = query.clone();
        Callback::from(move |values: Vec<String>| {
            query.set((*query).clone().with_predicate(field, values));
        })
    };

    let open_create = {
        let dialog = dialog.clone();
        let dialog_error = dialog_error.clone();
        Callback::from(move |_: ()| {
            dialog_error.set(None);
            dialog.set(Dialog::Create);
        })
    };

    let close_dialog = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(Dialog::Closed))
    };

    let on_submit = {
        let dialog = dialog.clone();
        let dialog_error = dialog_error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |values: BTreeMap<String, String>| {
            let form = match form_from_values(&values) {
                Ok(form) => form,
                Err(e) => {
                    dialog_error.set(Some(e));
                    return;
                }
            };
            let editing = match &*dialog {
                Dialog::Edit(player) => Some(player.id.clone()),
                _ => None,
            };
            let dialog = dialog.clone();
            let dialog_error = dialog_error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing {
                    Some(id) => update_player(&id, &form).await,
                    None => create_player(&form).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => {
                        dialog.set(Dialog::Closed);
                        reload.set(*reload + 1);
                    }
                    Err(e) => dialog_error.set(Some(e)),
                }
            });
        })
    };

    let (dialog_title, initial) = match &*dialog {
        Dialog::Edit(player) => ("Edit player", values_from_player(player)),
        _ => ("Add player", BTreeMap::new()),
    };

    let filters = html! {
        <>
            <MultiSelect
                label="Position"
                options={position_options()}
                selected={query.selected("position")}
                on_change={on_predicate("position")}
                max_chips={config.max_visible_chips}
            />
            <MultiSelect
                label="Status"
                options={status_options()}
                selected={query.selected("status")}
                on_change={on_predicate("status")}
                max_chips={config.max_visible_chips}
            />
        </>
    };

    let header_actions = html! {
        <button
            onclick={open_create.reform(|_: MouseEvent| ())}
            class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
        >
            {"Add player"}
        </button>
    };

    html! {
        <PageShell title="Players" actions={header_actions} {filters} error={(*error).clone()}>
            <DataTable<Player>
                rows={(*rows).clone()}
                columns={columns}
                loading={*loading}
                searchable=true
                search_placeholder="Search players..."
                search_debounce_ms={config.search_debounce_ms}
                page_size={query.page_size}
                page_size_options={config.page_size_choices()}
                pagination={*pagination}
                {on_page_change}
                {on_page_size_change}
                {on_search}
                empty_state={EmptyState::new("No players yet", "Players added to the squad appear here.").with_action("Add player")}
                on_add={open_create.clone()}
                {actions}
                on_row_click={open_edit}
            />
            <FormDialog
                is_open={*dialog != Dialog::Closed}
                title={dialog_title}
                fields={player_fields()}
                {initial}
                on_submit={on_submit}
                on_close={close_dialog}
                error={(*dialog_error).clone().map(AttrValue::from)}
                submitting={*saving}
            />
        </PageShell>
    }
}
