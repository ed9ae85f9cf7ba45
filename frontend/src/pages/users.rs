use crate::api::users::list_users;
use crate::components::data_table::{Column, DataTable};
use crate::components::multi_select::MultiSelect;
use crate::components::page_shell::PageShell;
use crate::config::Config;
use shared::models::user::role_options;
use shared::{EmptyState, FilterState, User};
use std::rc::Rc;
use yew::prelude::*;

fn columns() -> Vec<Column<User>> {
    vec![
        Column::accessor("Name", "name"),
        Column::accessor("Email", "email"),
        Column::cell("Role", |u: &User| html! {
            <span class="capitalize">{&u.role}</span>
        }),
        Column::badge("Status", "status"),
        Column::accessor("Last login", "lastLogin"),
    ]
}

#[function_component(Users)]
pub fn users() -> Html {
    let config = use_memo((), |_| Config::view());
    let all = use_state(|| None::<Rc<Vec<User>>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let roles = use_state(FilterState::new);
    let roles_generation = use_state(|| 0u32);
    let columns = use_memo((), |_| columns());

    {
        let all = all.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match list_users().await {
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
        use_memo(((*roles).clone(), all), |(roles, all)| {
            all.as_ref().map(|list| {
                Rc::new(
                    list.iter()
                        .filter(|u| roles.matches_predicates(*u))
                        .cloned()
                        .collect::<Vec<_>>(),
                )
            })
        })
    };

    let on_roles = {
        let roles = roles.clone();
        let roles_generation = roles_generation.clone();
        Callback::from(move |values: Vec<String>| {
            let mut next = (*roles).clone();
            next.set_predicate("role", values);
            if next != *roles {
                roles_generation.set(roles_generation.wrapping_add(1));
                roles.set(next);
            }
        })
    };

    let selected = roles
        .predicate("role")
        .map(|set| set.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    let filters = html! {
        <MultiSelect
            label="Role"
            options={role_options()}
            {selected}
            on_change={on_roles}
            max_chips={config.max_visible_chips}
        />
    };

    html! {
        <PageShell title="Users" {filters} error={(*error).clone()}>
            <DataTable<User>
                rows={(*rows).clone()}
                {columns}
                loading={*loading}
                searchable=true
                search_placeholder="Search by name or email..."
                search_debounce_ms={config.search_debounce_ms}
                page_size={config.default_page_size}
                page_size_options={config.page_size_choices()}
                reset_key={*roles_generation}
                empty_state={EmptyState::new("No users", "Dashboard accounts appear here.")}
            />
        </PageShell>
    }
}
