use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod storage;
mod hunt;
mod pages {
    pub mod landing;
    pub mod skier;
    pub mod walker;
    pub mod submit;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    skier::SkierChecklistPage,
    walker::WalkerWizard,
    submit::SubmitPhotos,
    not_found::NotFound,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/scavenger/skier")]
    Skier,
    #[at("/scavenger/walker")]
    Walker,
    #[at("/scavenger/submit")]
    Submit,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Skier => {
            info!("Rendering Skier page");
            html! { <SkierChecklistPage /> }
        },
        Route::Walker => {
            info!("Rendering Walker page");
            html! { <WalkerWizard /> }
        },
        Route::Submit => {
            info!("Rendering Submit page");
            html! { <SubmitPhotos /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting scavenger hunt");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn hunt_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/scavenger/skier"), Some(Route::Skier));
        assert_eq!(Route::recognize("/scavenger/walker"), Some(Route::Walker));
        assert_eq!(Route::recognize("/scavenger/submit"), Some(Route::Submit));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/scavenger/snowboarder"), Some(Route::NotFound));
    }

    #[test]
    fn submit_path_matches_the_skier_link() {
        assert_eq!(Route::Submit.to_path(), "/scavenger/submit");
    }
}
