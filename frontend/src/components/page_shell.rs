use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub title: AttrValue,
    /// Buttons rendered on the right of the header.
    #[prop_or_default]
    pub actions: Html,
    /// Filter controls rendered above the listing.
    #[prop_or_default]
    pub filters: Option<Html>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <h1 class="text-xl font-medium">{&props.title}</h1>
                    <div class="flex gap-2">{props.actions.clone()}</div>
                </div>
            </header>
            <main class="container mx-auto px-4 py-6">
                if let Some(filters) = &props.filters {
                    <div class="bg-white rounded-lg shadow-sm p-4 mb-6 flex flex-wrap items-end gap-4">
                        {filters.clone()}
                    </div>
                }
                if let Some(err) = &props.error {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
                        <div class="flex">
                            <div class="text-red-400">{"⚠️"}</div>
                            <div class="ml-3">
                                <h3 class="text-sm font-medium text-red-800">{"Error"}</h3>
                                <p class="mt-1 text-sm text-red-700">{err}</p>
                            </div>
                        </div>
                    </div>
                }
                {props.children.clone()}
            </main>
        </div>
    }
}
