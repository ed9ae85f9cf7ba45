use crate::components::date_picker::DatePicker;
use shared::{FieldKind, FieldSpec};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Properties, Clone, PartialEq)]
pub struct FormFieldProps {
    pub spec: FieldSpec,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Labelled input chosen by the field kind.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let spec = &props.spec;
    let field_id = format!("field-{}", spec.name);
    let placeholder = spec.placeholder.clone().unwrap_or_default();
    let maxlength = spec.max_length.map(|n| n.to_string());

    let control = match &spec.kind {
        FieldKind::Text => {
            let on_change = props.on_change.clone();
            html! {
                <input
                    id={field_id.clone()}
                    type="text"
                    value={props.value.clone()}
                    {placeholder}
                    {maxlength}
                    required={spec.required}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_change.emit(input.value());
                    })}
                    class={INPUT_CLASSES}
                />
            }
        }
        FieldKind::TextArea { rows } => {
            let on_change = props.on_change.clone();
            html! {
                <textarea
                    id={field_id.clone()}
                    rows={rows.to_string()}
                    value={props.value.clone()}
                    {placeholder}
                    {maxlength}
                    required={spec.required}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_change.emit(input.value());
                    })}
                    class={INPUT_CLASSES}
                />
            }
        }
        FieldKind::Select(options) => {
            let on_change = props.on_change.clone();
            html! {
                <select
                    id={field_id.clone()}
                    required={spec.required}
                    onchange={Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        on_change.emit(select.value());
                    })}
                    class={INPUT_CLASSES}
                >
                    <option value="" selected={props.value.is_empty()}>
                        {if placeholder.is_empty() { "Select..." } else { placeholder.as_str() }}
                    </option>
                    {options.iter().map(|option| html! {
                        <option
                            key={option.value.clone()}
                            value={option.value.clone()}
                            selected={*props.value == *option.value}
                        >
                            {&option.label}
                        </option>
                    }).collect::<Html>()}
                </select>
            }
        }
        FieldKind::Date => {
            let on_change = props.on_change.clone();
            let value = (!props.value.is_empty()).then(|| props.value.clone());
            html! {
                <DatePicker
                    id={AttrValue::from(field_id.clone())}
                    {value}
                    on_change={Callback::from(move |iso: Option<String>| {
                        on_change.emit(iso.unwrap_or_default());
                    })}
                />
            }
        }
    };

    html! {
        <div class="mb-4">
            <label for={field_id} class="block text-sm font-medium text-gray-700 mb-1">
                {spec.display_label()}
            </label>
            {control}
            if let Some(error) = &props.error {
                <p class="mt-1 text-xs text-red-600">{error}</p>
            }
        </div>
    }
}
