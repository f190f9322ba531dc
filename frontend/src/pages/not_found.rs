use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Nothing to find here"}</h1>
            <p>{"This clue leads nowhere. Head back to the start."}</p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"Back to the hunt"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    background: #1BB1E7;
                    color: #ffffff;
                    text-align: center;
                    padding: 6rem 1rem;
                }
                .not-found-page h1 {
                    color: #7A263A;
                }
                .home-link {
                    display: inline-block;
                    margin-top: 1.5rem;
                    background: #1e40af;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
