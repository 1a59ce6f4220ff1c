mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::{debounce, render_notice};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{ApiEndpoint, Generation, PredictionError, PredictionResult, PredictorState, Screen};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Selection
    FileSelected(GlooFile),
    SelectionRejected(String),

    // Submission
    Submit,
    PredictionFinished(Generation, Result<PredictionResult, PredictionError>),

    // UI states
    DismissNotice,
    ConfigLoaded(ApiEndpoint),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    state: PredictorState<GlooFile>,
    endpoint: ApiEndpoint,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    notice_timeout: Option<Timeout>,
    // Built once so re-renders inside the debounce window keep the pending click.
    submit_click: Callback<MouseEvent>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let submit_link = ctx.link().clone();
        let mut model = Self {
            state: PredictorState::default(),
            endpoint: api::initial_endpoint(),
            is_dragging: false,
            paste_listener: None,
            notice_timeout: None,
            submit_click: debounce(300, move || submit_link.send_message(Msg::Submit)),
        };

        let link = ctx.link().clone();
        if let Some(window) = web_sys::window() {
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_client_config().await {
                Ok(endpoint) => link.send_message(Msg::ConfigLoaded(endpoint)),
                Err(e) => log::warn!("Using built-in prediction endpoint: {}", e),
            }
        });

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::SelectionRejected(reason) => {
                handlers::handle_selection_rejected(self, ctx, reason)
            }

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionFinished(generation, outcome) => {
                handlers::handle_prediction_finished(self, ctx, generation, outcome)
            }

            Msg::DismissNotice => handlers::handle_dismiss_notice(self, ctx),
            Msg::ConfigLoaded(endpoint) => {
                log::info!("Prediction endpoint: {}", endpoint.predict_url());
                self.endpoint = endpoint;
                false
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let screen = Screen::from_state(&self.state);

        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                { render_upload_section(self, ctx, &screen) }
                { render_notice(self, ctx) }
                { render_results(&screen) }
                </main>

                <footer class="app-footer">
                    <p>{"Brain Tumor Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
