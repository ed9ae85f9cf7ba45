use shared::BadgeVariant;
use yew::prelude::*;

pub fn variant_classes(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "bg-blue-600 text-white border-transparent",
        BadgeVariant::Secondary => "bg-gray-100 text-gray-800 border-transparent",
        BadgeVariant::Destructive => "bg-red-600 text-white border-transparent",
        BadgeVariant::Outline => "bg-white text-gray-700 border-gray-300",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    pub variant: BadgeVariant,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span
            data-variant={props.variant.as_str()}
            class={classes!(
                "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "border",
                "text-xs", "font-semibold", "capitalize",
                variant_classes(props.variant)
            )}
        >
            {&props.label}
        </span>
    }
}
