use crate::components::empty_state::{EmptyStatePanel, LoadingSkeleton, NoResults};
use crate::components::pagination_bar::PaginationBar;
use gloo_timers::callback::Timeout;
use shared::{EmptyState, GridColumns, GridMsg, GridPageChanged, GridState, Row, ViewStatus};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Tailwind classes for the tile grid; the `sm` count is the base layout.
pub fn grid_classes(columns: &GridColumns) -> Vec<String> {
    let mut classes = vec!["grid".to_string(), "gap-4".to_string()];
    for (breakpoint, count) in columns.breakpoints() {
        if breakpoint == "sm" {
            classes.push(format!("grid-cols-{}", count));
        } else {
            classes.push(format!("{}:grid-cols-{}", breakpoint, count));
        }
    }
    classes
}

#[derive(Properties, PartialEq)]
pub struct GridViewProps<R: PartialEq + 'static> {
    /// `None` until the page has loaded anything.
    pub rows: Option<Rc<Vec<R>>>,
    pub render_item: Callback<R, Html>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(12)]
    pub page_size: u32,
    #[prop_or_default]
    pub columns: GridColumns,
    /// Row fields the search box matches; empty hides the search box.
    #[prop_or_default]
    pub search_keys: Vec<String>,
    #[prop_or(AttrValue::from("Search..."))]
    pub search_placeholder: AttrValue,
    #[prop_or(300)]
    pub search_debounce_ms: u32,
    #[prop_or_default]
    pub on_page_change: Callback<GridPageChanged>,
    /// Bump whenever the host's own filters change; moves back to page 1.
    #[prop_or_default]
    pub reset_key: u32,
    #[prop_or_default]
    pub empty_state: EmptyState,
    #[prop_or_default]
    pub on_add: Option<Callback<()>>,
}

#[function_component]
pub fn GridView<R>(props: &GridViewProps<R>) -> Html
where
    R: Row + Clone + PartialEq + 'static,
{
    let grid = {
        let page_size = props.page_size;
        let keys = props.search_keys.clone();
        let columns = props.columns;
        use_mut_ref(move || {
            GridState::with_page_size(page_size)
                .with_search_keys(keys)
                .with_columns(columns)
        })
    };
    let filtered_total = use_mut_ref(|| 0u64);
    let force_update = use_force_update();
    let search_text = use_state(String::new);
    let debounce = use_mut_ref(|| None::<Timeout>);

    let rows = props.rows.as_ref().map(|rows| rows.as_slice());
    let view = grid.borrow().view(rows, props.loading);
    *filtered_total.borrow_mut() = view.pagination.total;

    let dispatch = {
        let grid = grid.clone();
        let filtered_total = filtered_total.clone();
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |msg: GridMsg| {
            let (event, changed) = {
                let mut grid = grid.borrow_mut();
                let before = grid.clone();
                let event = grid.update(msg, *filtered_total.borrow());
                (event, *grid != before)
            };
            if let Some(page_changed) = event {
                on_page_change.emit(page_changed);
            }
            if changed {
                force_update.force_update();
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with(props.reset_key, move |_| {
            dispatch.emit(GridMsg::ResetPage);
            || ()
        });
    }

    let on_search_input = {
        let search_text = search_text.clone();
        let debounce = debounce.clone();
        let dispatch = dispatch.clone();
        let delay = props.search_debounce_ms;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            search_text.set(value.clone());
            let dispatch = dispatch.clone();
            *debounce.borrow_mut() = Some(Timeout::new(delay, move || {
                dispatch.emit(GridMsg::Search(value));
            }));
        })
    };

    let on_clear_search = {
        let search_text = search_text.clone();
        let debounce = debounce.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            debounce.borrow_mut().take();
            search_text.set(String::new());
            dispatch.emit(GridMsg::ClearSearch);
        })
    };

    let search_box = if props.search_keys.is_empty() {
        html! {}
    } else {
        html! {
            <div class="mb-4">
                <input
                    type="search"
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    placeholder={props.search_placeholder.clone()}
                    class="w-full sm:w-72 px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            </div>
        }
    };

    let body = match view.status {
        ViewStatus::Loading => html! { <LoadingSkeleton rows={3} /> },
        ViewStatus::Idle => html! {},
        ViewStatus::Empty => html! {
            <EmptyStatePanel state={props.empty_state.clone()} on_action={props.on_add.clone()} />
        },
        ViewStatus::EmptySearchResult => html! {
            <NoResults search_term={AttrValue::from(view.search_term.clone())} on_clear={on_clear_search} />
        },
        ViewStatus::Populated => html! {
            <div class={classes!(grid_classes(grid.borrow().columns()))}>
                {view.rows.iter().enumerate().map(|(idx, row)| html! {
                    <div key={idx}>{props.render_item.emit((*row).clone())}</div>
                }).collect::<Html>()}
            </div>
        },
    };

    let pagination = if view.show_footer(false) {
        html! {
            <div class="mt-6 rounded-lg overflow-hidden shadow">
                <PaginationBar
                    state={view.pagination}
                    on_page={dispatch.reform(GridMsg::GoToPage)}
                    noun={AttrValue::from("items")}
                />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div>
            {search_box}
            {body}
            {pagination}
        </div>
    }
}
