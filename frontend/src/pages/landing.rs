use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;
use crate::config;

#[derive(Properties, PartialEq)]
struct RulesPanelProps {
    title: AttrValue,
    children: Children,
}

#[function_component(RulesPanel)]
fn rules_panel(props: &RulesPanelProps) -> Html {
    html! {
        <section class="rules-panel">
            <h2>{&props.title}</h2>
            <ul>
                { for props.children.iter() }
            </ul>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <div class="landing-content">
                <h1>{"SCAVENGER HUNT"}</h1>

                <div class="logo-row">
                    <img src="/assets/whuf-stacked-digital.png" alt="WHU Foundation Logo" />
                    <img src="/assets/wfr-round-logo.png" alt="WHU Foundation Logo" />
                </div>

                <RulesPanel title="How It Works">
                    <li class="bullet">{"Break into groups of 5-10 people"}</li>
                    <li class="bullet">{"Designate a team photographer"}</li>
                    <li class="bullet">{"Add Team Name. Snap a photo, check it off, move on."}</li>
                </RulesPanel>

                <RulesPanel title="Pro Tips">
                    <li class="bullet">{"One person per team uploads the photos at the end"}</li>
                    <li class="bullet">{"Keep it moving - this should feel like wandering, not a race"}</li>
                    <li class="bullet">{"If it's funny, it counts!"}</li>
                </RulesPanel>

                <RulesPanel title="Scoring">
                    <li>{"1 point per photo"}</li>
                    <li>{"+2 bonus for creativity"}</li>
                    <li>{"+5 for photo in front of all 4 Canyons lifts (non-skiers)"}</li>
                    <li>{"+10 for photo infront of all 5 Mountain Lodges (skiers/snowboarders)"}</li>
                    <li class="judges-title">{"Judges Choice Awards:"}</li>
                    <li class="judges-awards">{"Most Epic, Funniest, Best Wipeout"}</li>
                </RulesPanel>

                <div class="hunt-buttons">
                    <Link<Route> to={Route::Skier} classes="hunt-button">
                        {"Scavenger Hunt – Skiers"}
                    </Link<Route>>
                    <Link<Route> to={Route::Walker} classes="hunt-button">
                        {"Scavenger Hunt – Village"}
                    </Link<Route>>
                    <a href={config::ART_STROLL_URL} class="hunt-button wide" target="_blank" rel="noopener noreferrer">
                        {"Alternative: Art Stroll"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1BB1E7;
                    padding: 1.5rem;
                }
                .landing-content {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .landing-page h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: #7A263A;
                    margin-bottom: 2rem;
                }
                .logo-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    padding-bottom: 2.5rem;
                }
                .logo-row img {
                    width: 100%;
                    height: 7.5rem;
                    object-fit: contain;
                }
                .rules-panel {
                    background: #7A263A;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                    color: #ffffff;
                }
                .rules-panel h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1rem 0;
                }
                .rules-panel ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    font-size: 1.125rem;
                }
                .rules-panel li {
                    margin-bottom: 0.75rem;
                }
                .rules-panel li.bullet::before {
                    content: '•';
                    margin-right: 0.5rem;
                }
                .rules-panel .judges-title {
                    font-weight: 700;
                    padding-top: 1.5rem;
                }
                .rules-panel .judges-awards {
                    font-weight: 500;
                }
                .hunt-buttons {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    place-items: center;
                    margin-top: 2.5rem;
                }
                .hunt-button {
                    display: inline-block;
                    background: #1e40af;
                    color: #ffffff;
                    font-weight: 600;
                    font-size: 1.125rem;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    text-decoration: none;
                    transition: transform 0.2s, background 0.2s;
                }
                .hunt-button.wide {
                    padding: 1rem 3rem;
                }
                .hunt-button:hover {
                    background: #1e3a8a;
                    transform: scale(1.05);
                }
                @media (min-width: 768px) {
                    .landing-page {
                        padding: 3rem;
                    }
                    .landing-page h1 {
                        font-size: 3rem;
                    }
                    .logo-row img {
                        height: 15rem;
                    }
                    .rules-panel h2 {
                        font-size: 1.875rem;
                    }
                    .hunt-buttons {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
