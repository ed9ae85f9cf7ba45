use crate::components::form_fields::FormField;
use shared::{validate_all, FieldSpec};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FormDialogProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub fields: Vec<FieldSpec>,
    #[prop_or_default]
    pub initial: BTreeMap<String, String>,
    /// Cleaned values, keyed by field name.
    pub on_submit: Callback<BTreeMap<String, String>>,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::from("Save"))]
    pub submit_label: AttrValue,
    /// Error reported by the server for the last submit.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(FormDialog)]
pub fn form_dialog(props: &FormDialogProps) -> Html {
    let values = use_state(|| props.initial.clone());
    let errors = use_state(BTreeMap::<String, String>::new);

    {
        let values = values.clone();
        let errors = errors.clone();
        use_effect_with((props.is_open, props.initial.clone()), move |(open, initial)| {
            if *open {
                values.set(initial.clone());
                errors.set(BTreeMap::new());
            }
            || ()
        });
    }

    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_submit = {
        let values = values.clone();
        let errors = errors.clone();
        let fields = props.fields.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_all(&fields, &values) {
                Ok(cleaned) => {
                    errors.set(BTreeMap::new());
                    on_submit.emit(cleaned);
                }
                Err(failures) => {
                    errors.set(
                        failures
                            .into_iter()
                            .map(|(field, error)| (field, error.to_string()))
                            .collect(),
                    );
                }
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black bg-opacity-50" onclick={on_overlay_click}></div>
            <form
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-lg w-full mx-4"
                onclick={on_dialog_click}
                onsubmit={on_submit}
            >
                <h3 class="text-lg font-medium text-gray-900 mb-4">{&props.title}</h3>
                if let Some(error) = &props.error {
                    <div class="mb-4 p-3 rounded-md bg-red-50 text-sm text-red-700">{error}</div>
                }
                {props.fields.iter().map(|spec| {
                    let name = spec.name.clone();
                    let on_change = {
                        let values = values.clone();
                        Callback::from(move |value: String| {
                            let mut next = (*values).clone();
                            next.insert(name.clone(), value);
                            values.set(next);
                        })
                    };
                    let value = values.get(&spec.name).cloned().unwrap_or_default();
                    let error = errors.get(&spec.name).cloned().map(AttrValue::from);
                    html! {
                        <FormField key={spec.name.clone()} spec={spec.clone()} value={value} {on_change} {error} />
                    }
                }).collect::<Html>()}
                <div class="flex justify-end space-x-3 mt-6">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={props.submitting}
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {&props.submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
