use crate::components::nav::SECTIONS;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-emerald-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="text-center md:text-left">
                        <span class="text-2xl font-bold tracking-tight">{"Pitchside"}</span>
                        <p class="text-emerald-100 text-sm leading-relaxed max-w-md mx-auto md:mx-0 mt-2">
                            {"Squad, fixture and document administration for the performance-analytics team."}
                        </p>
                    </div>
                    <div class="text-center md:text-left">
                        <h3 class="text-lg font-semibold mb-4">{"Sections"}</h3>
                        <ul class="space-y-2">
                            {SECTIONS.iter().map(|(route, label)| html! {
                                <li>
                                    <Link<Route> to={route.clone()} classes={classes!("text-emerald-100", "hover:text-white", "text-sm")}>
                                        {*label}
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()}
                        </ul>
                    </div>
                </div>
                <div class="border-t border-white/10 mt-8 pt-6 text-center sm:text-left">
                    <p class="text-emerald-100 text-xs font-mono">
                        {format!("Frontend v{}", env!("CARGO_PKG_VERSION"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
