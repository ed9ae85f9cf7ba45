use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="mt-2 text-gray-600">{"This page is not part of the dashboard."}</p>
            <Link<Route> to={Route::Players} classes={classes!("mt-6", "text-blue-600", "hover:text-blue-800")}>
                {"Back to players"}
            </Link<Route>>
        </div>
    }
}
