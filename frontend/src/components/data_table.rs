use crate::components::badge::Badge;
use crate::components::empty_state::{EmptyStatePanel, LoadingSkeleton, NoResults};
use crate::components::pagination_bar::PaginationBar;
use gloo_timers::callback::Timeout;
use log::debug;
use shared::{
    CellView, ColumnDescriptor, EmptyState, PageEvent, PaginationState, Row, TableMsg, TableState,
    ViewStatus, DEFAULT_PAGE_SIZE,
};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub type Column<R> = ColumnDescriptor<R, Html>;
pub type Columns<R> = Rc<Vec<Column<R>>>;

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: PartialEq + 'static> {
    /// `None` until the page has loaded anything.
    pub rows: Option<Rc<Vec<R>>>,
    pub columns: Columns<R>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub searchable: bool,
    #[prop_or(AttrValue::from("Search..."))]
    pub search_placeholder: AttrValue,
    #[prop_or(300)]
    pub search_debounce_ms: u32,
    #[prop_or(DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
    #[prop_or_default]
    pub page_size_options: Vec<u32>,
    /// Server-side paging: rows are already the current page. May arrive
    /// after the first render; the table switches to it then.
    #[prop_or_default]
    pub pagination: Option<PaginationState>,
    /// Bump whenever the host's own filters change; moves back to page 1.
    #[prop_or_default]
    pub reset_key: u32,
    #[prop_or_default]
    pub on_page_change: Callback<u32>,
    /// `(page_size, page)`; `page` is always 1.
    #[prop_or_default]
    pub on_page_size_change: Callback<(u32, u32)>,
    /// Debounced search text, for pages that search on the server.
    #[prop_or_default]
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub empty_state: EmptyState,
    #[prop_or_default]
    pub on_add: Option<Callback<()>>,
    /// Renders a trailing "Actions" cell per row.
    #[prop_or_default]
    pub actions: Option<Callback<R, Html>>,
    #[prop_or_default]
    pub on_row_click: Option<Callback<R>>,
}

fn render_cell<R: Row>(column: &Column<R>, row: &R) -> Html {
    match column.resolve(row) {
        CellView::Custom(html) => html,
        CellView::Text(text) => html! { {text} },
        CellView::Badge { label, variant } => html! { <Badge label={label} variant={variant} /> },
        CellView::Blank => html! {},
    }
}

#[function_component]
pub fn DataTable<R>(props: &DataTableProps<R>) -> Html
where
    R: Row + Clone + PartialEq + 'static,
{
    let table = {
        let pagination = props.pagination;
        let page_size = props.page_size;
        use_mut_ref(move || TableState::new(pagination, page_size))
    };
    let filtered_total = use_mut_ref(|| 0u64);
    let force_update = use_force_update();
    let search_text = use_state(String::new);
    let debounce = use_mut_ref(|| None::<Timeout>);

    if let Some(pagination) = props.pagination {
        table.borrow_mut().sync_external(pagination);
    }
    let rows = props.rows.as_ref().map(|rows| rows.as_slice());
    let view = table.borrow().view(rows, &props.columns, props.loading);
    *filtered_total.borrow_mut() = view.pagination.total;

    // Reads the table through the ref, so a late timeout still sees current state.
    let dispatch = {
        let table = table.clone();
        let filtered_total = filtered_total.clone();
        let on_page_change = props.on_page_change.clone();
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |msg: TableMsg| {
            let (event, changed) = {
                let mut table = table.borrow_mut();
                let before = table.clone();
                let event = table.update(msg, *filtered_total.borrow());
                (event, *table != before)
            };
            match event {
                Some(PageEvent::PageChange(page)) => on_page_change.emit(page),
                Some(PageEvent::PageSizeChange { page_size, page }) => {
                    on_page_size_change.emit((page_size, page))
                }
                None => {}
            }
            if changed {
                force_update.force_update();
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with(props.reset_key, move |_| {
            dispatch.emit(TableMsg::ResetPage);
            || ()
        });
    }

    let on_search_input = {
        let search_text = search_text.clone();
        let debounce = debounce.clone();
        let dispatch = dispatch.clone();
        let on_search = props.on_search.clone();
        let delay = props.search_debounce_ms;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            search_text.set(value.clone());
            let dispatch = dispatch.clone();
            let on_search = on_search.clone();
            // Replacing the pending timeout cancels it.
            *debounce.borrow_mut() = Some(Timeout::new(delay, move || {
                debug!("Table search: {:?}", value);
                on_search.emit(value.clone());
                dispatch.emit(TableMsg::Search(value));
            }));
        })
    };

    let on_clear_search = {
        let search_text = search_text.clone();
        let debounce = debounce.clone();
        let dispatch = dispatch.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: ()| {
            debounce.borrow_mut().take();
            search_text.set(String::new());
            on_search.emit(String::new());
            dispatch.emit(TableMsg::ClearSearch);
        })
    };

    let search_box = if props.searchable {
        html! {
            <div class="px-4 py-3 border-b border-gray-200">
                <input
                    type="search"
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    placeholder={props.search_placeholder.clone()}
                    class="w-full sm:w-72 px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            </div>
        }
    } else {
        html! {}
    };

    let header = html! {
        <thead class="bg-gray-50">
            <tr>
                {props.columns.iter().map(|column| html! {
                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                        {&column.header}
                    </th>
                }).collect::<Html>()}
                if props.actions.is_some() {
                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                        {"Actions"}
                    </th>
                }
            </tr>
        </thead>
    };

    let body = match view.status {
        ViewStatus::Loading => html! { <LoadingSkeleton rows={view.pagination.page_size.min(10) as usize} /> },
        ViewStatus::Idle => html! {},
        ViewStatus::Empty => html! {
            <EmptyStatePanel state={props.empty_state.clone()} on_action={props.on_add.clone()} />
        },
        ViewStatus::EmptySearchResult => html! {
            <NoResults search_term={AttrValue::from(view.search_term.clone())} on_clear={on_clear_search} />
        },
        ViewStatus::Populated => html! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    {header}
                    <tbody class="bg-white divide-y divide-gray-200">
                        {view.rows.iter().enumerate().map(|(idx, row)| {
                            let onclick = props.on_row_click.as_ref().map(|on_click| {
                                let row = (*row).clone();
                                on_click.reform(move |_: MouseEvent| row.clone())
                            });
                            html! {
                                <tr
                                    key={idx}
                                    {onclick}
                                    class={classes!("hover:bg-gray-50", props.on_row_click.is_some().then_some("cursor-pointer"))}
                                >
                                    {props.columns.iter().map(|column| html! {
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                            {render_cell(column, *row)}
                                        </td>
                                    }).collect::<Html>()}
                                    if let Some(actions) = &props.actions {
                                        <td
                                            class="px-6 py-4 whitespace-nowrap text-right text-sm"
                                            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                                        >
                                            {actions.emit((*row).clone())}
                                        </td>
                                    }
                                </tr>
                            }
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>
        },
    };

    let pagination = if view.show_footer(!props.page_size_options.is_empty()) {
        let on_page = dispatch.reform(TableMsg::GoToPage);
        let on_page_size = dispatch.reform(TableMsg::SetPageSize);
        html! {
            <PaginationBar
                state={view.pagination}
                on_page={on_page}
                page_size_options={props.page_size_options.clone()}
                on_page_size={on_page_size}
            />
        }
    } else {
        html! {}
    };

    html! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            {search_box}
            {body}
            {pagination}
        </div>
    }
}
