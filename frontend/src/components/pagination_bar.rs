use shared::{PageItem, PaginationState};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub state: PaginationState,
    pub on_page: Callback<u32>,
    /// Empty hides the page-size selector. Page buttons only show past one page.
    #[prop_or_default]
    pub page_size_options: Vec<u32>,
    #[prop_or_default]
    pub on_page_size: Callback<u32>,
    #[prop_or(AttrValue::from("results"))]
    pub noun: AttrValue,
}

const NAV_BUTTON: &str = "relative inline-flex items-center px-2 py-2 border border-gray-300 bg-white text-sm font-medium text-gray-500 hover:bg-gray-50 disabled:opacity-50";

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let state = props.state;
    let current_page = state.page;

    let on_page_size_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_page_size.emit(size);
            }
        })
    };

    let page_size_selector = if props.page_size_options.is_empty() {
        html! {}
    } else {
        html! {
            <label class="flex items-center space-x-2 text-sm text-gray-700">
                <span>{"Rows per page"}</span>
                <select
                    onchange={on_page_size_change}
                    class="border border-gray-300 rounded-md px-2 py-1 text-sm"
                >
                    {props.page_size_options.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == state.page_size}>
                            {*size}
                        </option>
                    }).collect::<Html>()}
                </select>
            </label>
        }
    };

    let multiple_pages = state.has_multiple_pages();

    html! {
        <div class="bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200 sm:px-6">
            if multiple_pages {
                <div class="flex-1 flex justify-between sm:hidden">
                    <button
                        onclick={props.on_page.reform(move |_| current_page.saturating_sub(1).max(1))}
                        disabled={!state.has_previous()}
                        class="relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50"
                    >
                        {"Previous"}
                    </button>
                    <button
                        onclick={props.on_page.reform(move |_| current_page + 1)}
                        disabled={!state.has_next()}
                        class="ml-3 relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50"
                    >
                        {"Next"}
                    </button>
                </div>
            }
            <div class="hidden sm:flex-1 sm:flex sm:items-center sm:justify-between">
                <div class="flex items-center space-x-6">
                    <p class="text-sm text-gray-700">
                        {"Showing "}
                        <span class="font-medium">{state.range_start()}</span>
                        {" to "}
                        <span class="font-medium">{state.range_end()}</span>
                        {" of "}
                        <span class="font-medium">{state.total}</span>
                        {" "}{&props.noun}
                    </p>
                    {page_size_selector}
                </div>
                if multiple_pages {
                    <nav class="relative z-0 inline-flex rounded-md shadow-sm -space-x-px" aria-label="Pagination">
                        <button
                            onclick={props.on_page.reform(move |_| current_page.saturating_sub(1).max(1))}
                            disabled={!state.has_previous()}
                            class={classes!(NAV_BUTTON, "rounded-l-md")}
                        >
                            {"Previous"}
                        </button>
                        {state.page_numbers().into_iter().enumerate().map(|(idx, item)| match item {
                            PageItem::Page(page_num) => {
                                let is_current = page_num == current_page;
                                html! {
                                    <button
                                        key={format!("page-{}", page_num)}
                                        data-page={page_num.to_string()}
                                        onclick={props.on_page.reform(move |_| page_num)}
                                        aria-current={if is_current { Some("page") } else { None }}
                                        class={classes!(
                                            "relative", "inline-flex", "items-center", "px-4", "py-2", "border", "text-sm", "font-medium",
                                            if is_current {
                                                classes!("z-10", "bg-indigo-50", "border-indigo-500", "text-indigo-600")
                                            } else {
                                                classes!("bg-white", "border-gray-300", "text-gray-500", "hover:bg-gray-50")
                                            }
                                        )}
                                    >
                                        {page_num}
                                    </button>
                                }
                            }
                            PageItem::Ellipsis => html! {
                                <span
                                    key={format!("gap-{}", idx)}
                                    class="relative inline-flex items-center px-4 py-2 border border-gray-300 bg-white text-sm font-medium text-gray-700"
                                >
                                    {item.to_string()}
                                </span>
                            },
                        }).collect::<Html>()}
                        <button
                            onclick={props.on_page.reform(move |_| current_page + 1)}
                            disabled={!state.has_next()}
                            class={classes!(NAV_BUTTON, "rounded-r-md")}
                        >
                            {"Next"}
                        </button>
                    </nav>
                }
            </div>
        </div>
    }
}
