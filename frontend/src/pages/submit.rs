use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;
use crate::config;

#[function_component(SubmitPhotos)]
pub fn submit_photos() -> Html {
    html! {
        <div class="submit-page">
            <div class="submit-content">
                <Link<Route> to={Route::Skier} classes="back-link">
                    {"← Back"}
                </Link<Route>>
                <h1>{"Submit Your Photos"}</h1>
                <p>{"Upload your team’s photos below. When you’re done, submit the form."}</p>

                <div class="form-frame">
                    <iframe
                        class="airtable-embed"
                        src={config::form_embed_url()}
                        width="100%"
                        height="700"
                        style="background: transparent; border: 0;"
                    ></iframe>
                </div>
            </div>
            <style>
                {r#"
                .submit-page {
                    min-height: 100vh;
                    background: #1BB1E7;
                    color: #ffffff;
                }
                .submit-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 2.5rem 1rem;
                }
                .submit-content .back-link {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(0, 0, 0, 0.4);
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                }
                .submit-content h1 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .submit-content p {
                    margin-top: 0.5rem;
                    opacity: 0.9;
                }
                .form-frame {
                    margin-top: 1.5rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    background: #ffffff;
                }
                .form-frame iframe {
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}
