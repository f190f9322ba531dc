use std::rc::Rc;

use yew::prelude::*;
use web_sys::{File, HtmlInputElement};
use log::debug;
use crate::hunt::preview::BrowserPreviews;
use crate::hunt::wizard::Wizard;

pub enum WalkerMsg {
    PickFile(Option<File>),
    Submit,
    Restart,
}

pub struct WalkerWizard {
    wizard: Wizard<BrowserPreviews>,
}

fn submitted_summary(count: usize) -> String {
    format!("You submitted {} photo{}.", count, if count == 1 { "" } else { "s" })
}

impl Component for WalkerWizard {
    type Message = WalkerMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(Rc::new(BrowserPreviews)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WalkerMsg::PickFile(file) => {
                self.wizard.pick_file(file);
            }
            WalkerMsg::Submit => {
                if let Err(e) = self.wizard.submit_step() {
                    debug!("Step not submitted: {}", e);
                }
            }
            WalkerMsg::Restart => {
                self.wizard.restart();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let progress_text = self.wizard.progress_text();
        let bar_style = format!("width: {}%;", self.wizard.progress_percent());

        html! {
            <div class="walker-page">
                <div class="walker-content">
                    <div class="walker-header">
                        <h1>{"Photo Questions"}</h1>
                        <span class="muted">{&progress_text}</span>
                    </div>

                    <div class="progress-track">
                        <div class="progress-fill" style={bar_style}></div>
                    </div>

                    if self.wizard.is_done() {
                        { self.view_review(ctx) }
                    } else {
                        { self.view_question(ctx, &progress_text) }
                    }
                </div>
                <style>
                    {r#"
                    .walker-page {
                        min-height: 100vh;
                        background: #ffffff;
                    }
                    .walker-content {
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 2.5rem 1rem;
                    }
                    .walker-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1.5rem;
                    }
                    .walker-header h1 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .muted {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .progress-track {
                        margin-bottom: 2rem;
                        height: 0.5rem;
                        width: 100%;
                        border-radius: 0.25rem;
                        background: #e5e7eb;
                    }
                    .progress-fill {
                        height: 0.5rem;
                        border-radius: 0.25rem;
                        background: #000000;
                        transition: width 0.3s;
                    }
                    .wizard-card {
                        border-radius: 1rem;
                        border: 1px solid #e5e7eb;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .wizard-card h2 {
                        font-size: 1.125rem;
                        font-weight: 500;
                        margin: 0 0 1.5rem 0;
                    }
                    .upload-label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .preview-box {
                        margin-top: 1rem;
                        height: 16rem;
                        width: 100%;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        background: #f3f4f6;
                    }
                    .preview-box img, .answer-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .remove-photo {
                        margin-top: 0.75rem;
                        background: none;
                        border: none;
                        padding: 0;
                        font-size: 0.875rem;
                        color: #4b5563;
                        text-decoration: underline;
                    }
                    .wizard-error {
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                        color: #dc2626;
                    }
                    .wizard-actions {
                        margin-top: 1.5rem;
                        display: flex;
                        justify-content: flex-end;
                    }
                    .next-button {
                        border-radius: 0.75rem;
                        background: #000000;
                        border: none;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #ffffff;
                    }
                    .restart-button {
                        border-radius: 0.75rem;
                        border: 1px solid #d1d5db;
                        background: #ffffff;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .answer {
                        border-radius: 0.75rem;
                        background: #f9fafb;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .answer p {
                        margin: 0 0 0.75rem 0;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .answer-photo {
                        height: 13rem;
                        width: 100%;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #ffffff;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl WalkerWizard {
    fn view_question(&self, ctx: &Context<Self>, progress_text: &str) -> Html {
        let Some(question) = self.wizard.current_question() else {
            return html! {};
        };

        let on_pick = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WalkerMsg::PickFile(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <div class="wizard-card">
                <p class="muted">{progress_text}</p>
                <h2>{question.prompt}</h2>

                <div>
                    <label class="upload-label">{"Upload photo (required)"}</label>
                    // Keyed by question so the picker starts empty on every step.
                    <input
                        key={question.id}
                        type="file"
                        accept="image/*"
                        capture="environment"
                        onchange={on_pick}
                    />

                    if let Some(url) = self.wizard.selected_preview() {
                        <div class="preview-box">
                            <img src={url.to_string()} alt="Selected preview" />
                        </div>
                        <button
                            type="button"
                            class="remove-photo"
                            onclick={ctx.link().callback(|_| WalkerMsg::PickFile(None))}
                        >
                            {"Remove photo"}
                        </button>
                    }
                </div>

                if let Some(error) = self.wizard.error() {
                    <p class="wizard-error">{error.to_string()}</p>
                }

                <div class="wizard-actions">
                    <button
                        type="button"
                        class="next-button"
                        onclick={ctx.link().callback(|_| WalkerMsg::Submit)}
                    >
                        {"Submit & Next"}
                    </button>
                </div>
            </div>
        }
    }

    fn view_review(&self, ctx: &Context<Self>) -> Html {
        let answers = self.wizard.answers();

        html! {
            <div class="wizard-card">
                <h2>{"All done 🎉"}</h2>
                <p class="muted">{submitted_summary(answers.len())}</p>

                <div>
                    { for answers.iter().enumerate().map(|(idx, answer)| html! {
                        <div class="answer" key={answer.question_id}>
                            <p>{format!("{}. {}", idx + 1, answer.prompt())}</p>
                            <div class="answer-photo">
                                <img src={answer.preview_url().to_string()} alt={format!("Answer {}", idx + 1)} />
                            </div>
                        </div>
                    }) }
                </div>

                <div class="wizard-actions">
                    <button
                        type="button"
                        class="restart-button"
                        onclick={ctx.link().callback(|_| WalkerMsg::Restart)}
                    >
                        {"Restart"}
                    </button>
                </div>
            </div>
        }
    }
}
