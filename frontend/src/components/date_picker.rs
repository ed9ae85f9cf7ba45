use chrono::{Local, NaiveDate};
use shared::date::{format_long, DateChange, DateInputState, AUTO_PARSE_AFTER, WEEKDAY_LABELS};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Properties, Clone, PartialEq)]
pub struct DatePickerProps {
    /// ISO `YYYY-MM-DD`, or `None` when empty.
    pub value: Option<AttrValue>,
    /// Receives the new ISO value, or `None` when cleared.
    pub on_change: Callback<Option<String>>,
    #[prop_or(AttrValue::from("MM/DD/YYYY"))]
    pub placeholder: AttrValue,
    #[prop_or(AUTO_PARSE_AFTER)]
    pub auto_parse_after: usize,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let state = {
        let value = props.value.clone();
        let threshold = props.auto_parse_after;
        use_state(move || {
            DateInputState::new(value.as_deref(), today()).with_auto_parse_after(threshold)
        })
    };

    // Follow the owner when the value changes from outside.
    {
        let state = state.clone();
        use_effect_with(props.value.clone(), move |value| {
            let mut next = (*state).clone();
            next.sync(value.as_deref());
            if next != *state {
                state.set(next);
            }
            || ()
        });
    }

    let apply = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        move |next: DateInputState, change: Option<DateChange>| {
            match change {
                Some(DateChange::Selected(iso)) => on_change.emit(Some(iso)),
                Some(DateChange::Cleared) => on_change.emit(None),
                None => {}
            }
            state.set(next);
        }
    };

    let on_input = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            let change = next.input(&input.value());
            apply(next, change);
        })
    };

    let on_blur = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*state).clone();
            let change = next.submit();
            apply(next, change);
        })
    };

    let on_keydown = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                let mut next = (*state).clone();
                let change = next.submit();
                apply(next, change);
            } else if e.key() == "Escape" {
                let mut next = (*state).clone();
                next.close();
                state.set(next);
            }
        })
    };

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.toggle_open();
            state.set(next);
        })
    };

    let on_clear = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            let change = next.clear();
            apply(next, Some(change));
        })
    };

    let step = |forward: bool| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            if forward {
                next.next_month();
            } else {
                next.previous_month();
            }
            state.set(next);
        })
    };

    let calendar = if state.is_open() {
        let today = today();
        html! {
            <div class="absolute z-40 mt-1 w-72 bg-white border border-gray-200 rounded-md shadow-lg p-3">
                <div class="flex items-center justify-between mb-2">
                    <button type="button" onclick={step(false)} class="px-2 text-gray-600 hover:text-gray-900" aria-label="Previous month">{"‹"}</button>
                    <span class="text-sm font-medium">{state.view().label()}</span>
                    <button type="button" onclick={step(true)} class="px-2 text-gray-600 hover:text-gray-900" aria-label="Next month">{"›"}</button>
                </div>
                <div class="grid grid-cols-7 text-center text-xs text-gray-500 mb-1">
                    {WEEKDAY_LABELS.iter().map(|d| html! { <span>{*d}</span> }).collect::<Html>()}
                </div>
                <div class="grid grid-cols-7 gap-1 text-center text-sm">
                    {state.cells(today).into_iter().map(|cell| {
                        let on_pick = {
                            let state = state.clone();
                            let apply = apply.clone();
                            let date = cell.date;
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*state).clone();
                                let change = next.select(date);
                                apply(next, Some(change));
                            })
                        };
                        html! {
                            <button
                                type="button"
                                key={cell.date.to_string()}
                                onclick={on_pick}
                                title={format_long(cell.date)}
                                class={classes!(
                                    "rounded", "py-1",
                                    if cell.is_selected {
                                        classes!("bg-blue-600", "text-white")
                                    } else if cell.is_today {
                                        classes!("border", "border-blue-500", "text-blue-700")
                                    } else if cell.in_month {
                                        classes!("text-gray-900", "hover:bg-gray-100")
                                    } else {
                                        classes!("text-gray-400", "hover:bg-gray-100")
                                    }
                                )}
                            >
                                {cell.day()}
                            </button>
                        }
                    }).collect::<Html>()}
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="relative">
            <div class="flex">
                <input
                    type="text"
                    id={props.id.clone()}
                    value={state.text().to_string()}
                    oninput={on_input}
                    onblur={on_blur}
                    onkeydown={on_keydown}
                    placeholder={props.placeholder.clone()}
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-l-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                if state.value().is_some() {
                    <button type="button" onclick={on_clear} class="px-2 border-t border-b border-gray-300 text-gray-500 hover:text-gray-800" aria-label="Clear date">
                        {"×"}
                    </button>
                }
                <button type="button" onclick={on_toggle} class="px-3 border border-gray-300 rounded-r-md bg-gray-50 text-sm" aria-label="Open calendar">
                    {"📅"}
                </button>
            </div>
            {calendar}
        </div>
    }
}
