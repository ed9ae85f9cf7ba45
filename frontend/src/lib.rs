use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::Nav;
use crate::components::footer::Footer;

pub mod api;
pub mod components;
pub mod config;
pub mod pages {
    pub mod files;
    pub mod matches;
    pub mod not_found;
    pub mod players;
    pub mod teams;
    pub mod users;
}

use pages::{
    files::Files, matches::Matches, not_found::NotFound, players::Players, teams::Teams,
    users::Users,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Players,
    #[at("/teams")]
    Teams,
    #[at("/matches")]
    Matches,
    #[at("/users")]
    Users,
    #[at("/files")]
    Files,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container min-h-screen flex flex-col">
                <Nav />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Players => html! { <Players /> },
        Route::Teams => html! { <Teams /> },
        Route::Matches => html! { <Matches /> },
        Route::Users => html! { <Users /> },
        Route::Files => html! { <Files /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Logger and panic hook ready");

    yew::Renderer::<App>::new().render();
    info!("Dashboard mounted");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to start dashboard: {:?}", e);
        }
    });
    Ok(())
}
