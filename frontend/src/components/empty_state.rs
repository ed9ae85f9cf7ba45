use shared::EmptyState;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EmptyStatePanelProps {
    pub state: EmptyState,
    /// Shown as a button when the state carries an action label.
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

#[function_component(EmptyStatePanel)]
pub fn empty_state_panel(props: &EmptyStatePanelProps) -> Html {
    let action = match (&props.state.action_label, &props.on_action) {
        (Some(label), Some(on_action)) => {
            let on_action = on_action.clone();
            html! {
                <button
                    onclick={Callback::from(move |_| on_action.emit(()))}
                    class="mt-4 inline-flex items-center px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                >
                    {label}
                </button>
            }
        }
        _ => html! {},
    };

    html! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <h3 class="text-lg font-medium text-gray-900">{&props.state.title}</h3>
            <p class="mt-1 text-sm text-gray-500">{&props.state.description}</p>
            {action}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoResultsProps {
    pub search_term: AttrValue,
    pub on_clear: Callback<()>,
}

#[function_component(NoResults)]
pub fn no_results(props: &NoResultsProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <h3 class="text-lg font-medium text-gray-900">{EmptyState::no_results_title()}</h3>
            <p class="mt-1 text-sm text-gray-500">
                {EmptyState::no_results_description(&props.search_term)}
            </p>
            <button
                onclick={on_clear}
                class="mt-4 px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50"
            >
                {"Clear search"}
            </button>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingSkeletonProps {
    #[prop_or(5)]
    pub rows: usize,
}

#[function_component(LoadingSkeleton)]
pub fn loading_skeleton(props: &LoadingSkeletonProps) -> Html {
    html! {
        <div class="animate-pulse space-y-3 py-4" aria-busy="true">
            {(0..props.rows).map(|i| html! {
                <div key={i} class="h-8 bg-gray-200 rounded"></div>
            }).collect::<Html>()}
        </div>
    }
}
