use gloo::events::EventListener;
use shared::{MultiSelectState, PositioningStrategy, Rect, SelectOption};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, Node};
use yew::prelude::*;

/// Measures the trigger element in the live DOM.
pub struct DomTrigger<'a>(pub &'a NodeRef);

impl PositioningStrategy for DomTrigger<'_> {
    fn trigger_bounds(&self) -> Option<Rect> {
        let element = self.0.cast::<Element>()?;
        let bounds = element.get_bounding_client_rect();
        Some(Rect {
            x: bounds.left(),
            y: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        })
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MultiSelectProps {
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
    #[prop_or(2)]
    pub max_chips: usize,
    /// Adds a text box above the options.
    #[prop_or_default]
    pub searchable: bool,
}

#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    let state = {
        let options = props.options.clone();
        let selected = props.selected.clone();
        let max_chips = props.max_chips;
        use_state(move || {
            MultiSelectState::new(options)
                .with_selected(selected)
                .with_max_chips(max_chips)
        })
    };
    let trigger_ref = use_node_ref();
    let dropdown_ref = use_node_ref();

    // The owner's selection and option list are authoritative.
    let mut current = (*state).clone();
    current.set_options(props.options.clone());
    current.sync_selected(props.selected.clone());

    {
        let state = state.clone();
        let trigger_ref = trigger_ref.clone();
        let dropdown_ref = dropdown_ref.clone();
        use_effect_with(state.is_open(), move |open| {
            let listener = open.then(|| {
                let document = gloo_utils::document();
                EventListener::new(&document, "mousedown", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .zip(target.as_ref())
                            .map(|(container, target)| container.contains(Some(target)))
                            .unwrap_or(false)
                    };
                    if !inside(&trigger_ref) && !inside(&dropdown_ref) {
                        let mut next = (*state).clone();
                        next.outside_click();
                        state.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_open = {
        let state = state.clone();
        let current = current.clone();
        let trigger_ref = trigger_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = current.clone();
            next.toggle_open(&DomTrigger(&trigger_ref));
            state.set(next);
        })
    };

    let emit_with = {
        let state = state.clone();
        let current = current.clone();
        let on_change = props.on_change.clone();
        move |change: Box<dyn Fn(&mut MultiSelectState)>| {
            let mut next = current.clone();
            change(&mut next);
            on_change.emit(next.selected_values().to_vec());
            state.set(next);
        }
    };

    let on_query = {
        let state = state.clone();
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            next.set_query(input.value());
            state.set(next);
        })
    };

    let (chips, hidden) = current.chips();
    let trigger_content = if chips.is_empty() {
        html! { <span class="text-gray-500">{&props.label}</span> }
    } else {
        html! {
            <>
                {chips.into_iter().map(|(value, label)| {
                    let value = value.to_string();
                    let emit_with = emit_with.clone();
                    let on_remove = Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        let value = value.clone();
                        emit_with(Box::new(move |s: &mut MultiSelectState| {
                            s.remove(&value);
                        }));
                    });
                    html! {
                        <span class="inline-flex items-center px-2 py-0.5 rounded bg-blue-100 text-blue-800 text-xs mr-1">
                            {label}
                            <button type="button" onclick={on_remove} class="ml-1 text-blue-600 hover:text-blue-900" aria-label="Remove">
                                {"×"}
                            </button>
                        </span>
                    }
                }).collect::<Html>()}
                if let Some(summary) = current.summary() {
                    <span class="text-xs text-gray-600" title={summary.clone()}>
                        {format!("+{} · {}", hidden, summary)}
                    </span>
                }
            </>
        }
    };

    let dropdown = if current.is_open() {
        let style = current.position().map(|p| p.to_style()).unwrap_or_default();
        let on_clear_all = {
            let emit_with = emit_with.clone();
            Callback::from(move |_: MouseEvent| emit_with(Box::new(|s: &mut MultiSelectState| s.clear_all())))
        };
        let options = current
            .visible_options()
            .into_iter()
            .map(|option| {
                let checked = current.is_selected(&option.value);
                let value = option.value.clone();
                let emit_with = emit_with.clone();
                let on_toggle = Callback::from(move |_: Event| {
                    let value = value.clone();
                    emit_with(Box::new(move |s: &mut MultiSelectState| {
                        s.toggle_option(&value);
                    }));
                });
                html! {
                    <label key={option.value.clone()} class="flex items-center px-3 py-2 text-sm hover:bg-gray-50 cursor-pointer">
                        <input type="checkbox" class="mr-2" checked={checked} onchange={on_toggle} />
                        {&option.label}
                    </label>
                }
            })
            .collect::<Html>();
        let portal_host = gloo_utils::body();
        create_portal(
            html! {
                <div ref={dropdown_ref.clone()} style={style} class="z-50 bg-white border border-gray-200 rounded-md shadow-lg max-h-72 overflow-y-auto">
                    if props.searchable {
                        <div class="p-2 border-b border-gray-100">
                            <input
                                type="text"
                                value={current.query().to_string()}
                                oninput={on_query}
                                placeholder="Filter options"
                                class="w-full px-2 py-1 border border-gray-300 rounded text-sm"
                            />
                        </div>
                    }
                    {options}
                    <div class="border-t border-gray-100 px-3 py-2">
                        <button type="button" onclick={on_clear_all} class="text-xs text-gray-600 hover:text-gray-900">
                            {"Clear all"}
                        </button>
                    </div>
                </div>
            },
            portal_host.into(),
        )
    } else {
        html! {}
    };

    html! {
        <div class="relative inline-block">
            <button
                type="button"
                ref={trigger_ref}
                onclick={on_toggle_open}
                aria-expanded={current.is_open().to_string()}
                class="inline-flex items-center min-w-[10rem] px-3 py-2 border border-gray-300 rounded-md bg-white text-sm text-left"
            >
                {trigger_content}
            </button>
            {dropdown}
        </div>
    }
}
