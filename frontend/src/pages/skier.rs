use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::{info, warn};
use crate::Route;
use crate::hunt::checklist::SkierChecklist;
use crate::storage::BrowserStorage;

const FIVE_POINT_PHOTOS: [&str; 4] = [
    "Fresh tracks in untouched snow",
    "Snowmaking guns in action",
    "Trees frosted with snow",
    "Most trail signs in one shot.",
];

const LODGES: [&str; 5] = [
    "Sun Lodge",
    "Red Pine Lodge",
    "Tomstone BBQ",
    "Lookout Cabin",
    "Cloud Dine",
];

fn bullet_list(entries: &[&'static str]) -> Html {
    entries
        .iter()
        .map(|entry| html! { <li class="bullet">{*entry}</li> })
        .collect::<Html>()
}

#[function_component]
pub fn SkierChecklistPage() -> Html {
    let checklist = use_state(|| SkierChecklist::load(&BrowserStorage));
    let team_input = {
        let saved = checklist.team_name().to_string();
        use_state(move || saved)
    };
    let navigator = use_navigator();

    let toggle = {
        let checklist = checklist.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*checklist).clone();
            if let Err(e) = next.toggle(id, &BrowserStorage) {
                warn!("Checklist not saved: {}", e);
            }
            checklist.set(next);
        })
    };

    let on_team_input = {
        let team_input = team_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            team_input.set(input.value());
        })
    };

    let save_team = {
        let checklist = checklist.clone();
        let team_input = team_input.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*checklist).clone();
            if let Err(e) = next.save_team(&team_input, &BrowserStorage) {
                warn!("Team name not saved: {}", e);
            }
            team_input.set(next.team_name().to_string());
            checklist.set(next);
        })
    };

    let reset_team = {
        let checklist = checklist.clone();
        let team_input = team_input.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*checklist).clone();
            if let Err(e) = next.reset_team(&BrowserStorage) {
                warn!("Team name not cleared: {}", e);
            }
            team_input.set(String::new());
            checklist.set(next);
        })
    };

    let submit = {
        let checklist = checklist.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*checklist).clone();
            let allowed = next.submit().is_ok();
            if allowed {
                info!("Team '{}' heading to the submit form", next.team_name());
            }
            checklist.set(next);
            if allowed {
                if let Some(navigator) = navigator.clone() {
                    navigator.push(&Route::Submit);
                }
            }
        })
    };

    let submit_class = if checklist.can_submit() {
        "submit-link ready"
    } else {
        "submit-link blocked"
    };

    html! {
        <div class="skier-page">
            <div class="back-row">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back"}
                </Link<Route>>
            </div>

            <div class="skier-content">
                <div class="skier-header">
                    <h1>{"Skiers Scavenger List"}</h1>
                    <p class="intro">
                        {"Check items off as you complete them. Once you’re ready, submit your photos via the form. Winners will be decided tonight at the Burger Bash!"}
                    </p>

                    <div class="team-card">
                        <div class="team-current">
                            <div class="team-label">{"Team Name"}</div>
                            {
                                if !checklist.team_name().is_empty() {
                                    html! { <div class="team-name">{checklist.team_name()}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <div class="team-controls">
                            <input
                                type="text"
                                placeholder="Enter team name"
                                value={(*team_input).clone()}
                                oninput={on_team_input}
                            />
                            <button type="button" class="save-button" onclick={save_team}>
                                {"Save"}
                            </button>
                            <button type="button" class="reset-button" onclick={reset_team}>
                                {"Reset"}
                            </button>
                        </div>
                    </div>

                    <p class="progress">{checklist.progress_text()}</p>
                </div>

                <ul class="checklist">
                    {
                        checklist.items().iter().map(|item| {
                            let done = checklist.is_checked(item.id);
                            let onchange = {
                                let toggle = toggle.clone();
                                let id = item.id;
                                Callback::from(move |_: Event| toggle.emit(id))
                            };
                            html! {
                                <li key={item.id}>
                                    <label>
                                        <input type="checkbox" checked={done} {onchange} />
                                        <span class={classes!("item-text", done.then(|| "done"))}>
                                            {item.text}
                                        </span>
                                    </label>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>

                {
                    if let Some(blocked) = checklist.blocked() {
                        html! { <p class="error-message">{blocked.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="submit-row">
                    <a href="/scavenger/submit" class={submit_class} onclick={submit}>
                        {"Submit Photos"}
                    </a>
                </div>

                <div class="bonus-section">
                    <div class="bonus-card">
                        <p class="bonus-title">{"5 point photos:"}</p>
                        <ul>{ bullet_list(&FIVE_POINT_PHOTOS) }</ul>
                    </div>
                    <div class="bonus-card">
                        <p class="bonus-title">{"Lodge shots (sign must be visible):"}</p>
                        <ul>{ bullet_list(&LODGES) }</ul>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .skier-page {
                    min-height: 100vh;
                    background: #1BB1E7;
                    color: #ffffff;
                }
                .back-row {
                    padding: 1rem;
                }
                .back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 0.75rem;
                    background: rgba(0, 0, 0, 0.4);
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .back-link:hover {
                    background: rgba(0, 0, 0, 0.6);
                }
                .skier-content {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .skier-header {
                    margin-bottom: 1.5rem;
                }
                .skier-header h1 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .skier-header .intro {
                    margin-top: 0.5rem;
                    opacity: 0.9;
                }
                .team-card, .checklist {
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.25);
                }
                .team-card {
                    margin-top: 1.25rem;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .team-label {
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .team-name {
                    font-size: 1.125rem;
                    font-weight: 700;
                }
                .team-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .team-controls input {
                    width: 100%;
                    border-radius: 0.75rem;
                    border: none;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    color: #000000;
                }
                .save-button, .reset-button {
                    border-radius: 0.75rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    white-space: nowrap;
                }
                .save-button {
                    background: #000000;
                    border: none;
                }
                .reset-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                }
                .progress {
                    margin-top: 1rem;
                    font-weight: 600;
                }
                .checklist {
                    list-style: none;
                    padding: 1.5rem;
                    margin: 0;
                }
                .checklist li + li {
                    margin-top: 0.75rem;
                }
                .checklist label {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    cursor: pointer;
                }
                .checklist input {
                    margin-top: 0.25rem;
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .item-text.done {
                    text-decoration: line-through;
                    opacity: 0.8;
                }
                .error-message {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #fecaca;
                }
                .submit-row {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: center;
                }
                .submit-link {
                    border-radius: 0.75rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    text-decoration: none;
                }
                .submit-link.ready {
                    background: #16a34a;
                }
                .submit-link.blocked {
                    background: rgba(0, 0, 0, 0.4);
                    cursor: not-allowed;
                }
                .bonus-section {
                    padding: 1rem 0;
                }
                .bonus-card {
                    font-size: 0.875rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                }
                .bonus-title {
                    font-weight: 600;
                    margin: 0 0 0.75rem 0;
                }
                .bonus-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .bonus-card li + li {
                    margin-top: 0.75rem;
                }
                .bonus-card li.bullet::before {
                    content: '•';
                    margin-right: 0.5rem;
                }
                @media (min-width: 640px) {
                    .team-card {
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .team-controls input {
                        width: 16rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
