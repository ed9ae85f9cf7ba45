use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Top-level sections, in menu order.
pub const SECTIONS: [(Route, &str); 5] = [
    (Route::Players, "Players"),
    (Route::Teams, "Teams"),
    (Route::Matches, "Matches"),
    (Route::Users, "Users"),
    (Route::Files, "Files"),
];

fn link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("bg-white/20", "text-white")
        } else {
            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Players);
    let menu_open = use_state(|| false);

    // Navigating anywhere folds the mobile menu away.
    {
        let menu_open = menu_open.clone();
        use_effect_with(current_route.clone(), move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = SECTIONS
        .iter()
        .map(|(route, label)| html! {
            <Link<Route> to={route.clone()} classes={link_classes(*route == current_route)}>
                {*label}
            </Link<Route>>
        })
        .collect::<Html>();

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-emerald-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Players} classes={classes!("flex", "items-baseline", "space-x-1")}>
                            <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-emerald-700", "px-2", "py-0.5", "rounded")}>{"Pitchside"}</span>
                        </Link<Route>>
                        <div class={classes!("hidden", "md:flex", "space-x-6")}>
                            {links.clone()}
                        </div>
                    </div>
                    <button
                        onclick={on_menu}
                        class={classes!("md:hidden", "p-2", "rounded-md", "hover:bg-white/10")}
                        aria-label="Toggle menu"
                    >
                        {"☰"}
                    </button>
                </div>
                if *menu_open {
                    <div class={classes!("md:hidden", "pb-3", "flex", "flex-col", "space-y-1")}>
                        {links}
                    </div>
                }
            </div>
        </nav>
    }
}
