use super::super::Model;
use super::super::Msg;
use super::utils::first_image_file;
use crate::api;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{
    ApiEndpoint, Event, Generation, PredictionError, PredictionRequest, PredictionResult,
    SelectedImage,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let image = SelectedImage::new(file.clone(), file.name(), file.raw_mime_type());
    apply_event(model, ctx, Event::FileSelected(image))
}

pub fn handle_selection_rejected(model: &mut Model, ctx: &Context<Model>, reason: String) -> bool {
    apply_event(model, ctx, Event::SelectionRejected(reason))
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    apply_event(model, ctx, Event::SubmitRequested)
}

pub fn handle_prediction_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    generation: Generation,
    outcome: Result<PredictionResult, PredictionError>,
) -> bool {
    apply_event(model, ctx, Event::PredictionFinished { generation, outcome })
}

pub fn handle_dismiss_notice(model: &mut Model, ctx: &Context<Model>) -> bool {
    apply_event(model, ctx, Event::NoticeDismissed)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, &file_list);
        }
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, &file_list);
            }
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: &FileList) {
    match first_image_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
        None => {
            let names = (0..file_list.length())
                .filter_map(|i| file_list.item(i))
                .map(|file| file.name())
                .collect::<Vec<_>>()
                .join(", ");
            log::warn!("Skipping non-image files: {}", names);
            ctx.link().send_message(Msg::SelectionRejected(names));
        }
    }
}

// Every state change goes through the reducer; a returned request is the only
// trigger for a network call.
fn apply_event(model: &mut Model, ctx: &Context<Model>, event: Event<GlooFile>) -> bool {
    let notice_before = model.state.notice();

    if let Some(request) = model.state.apply(event) {
        send_prediction_request(ctx, model.endpoint.clone(), request);
    }

    let notice_after = model.state.notice();
    if notice_after != notice_before {
        model.notice_timeout = notice_after.map(|_| {
            let link = ctx.link().clone();
            Timeout::new(NOTICE_TIMEOUT_MS, move || {
                link.send_message(Msg::DismissNotice);
            })
        });
    }

    true
}

pub fn send_prediction_request(
    ctx: &Context<Model>,
    endpoint: ApiEndpoint,
    request: PredictionRequest<GlooFile>,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let generation = request.generation();
            let outcome = api::send_prediction(&endpoint, &request).await;
            if let Err(e) = &outcome {
                log::error!("Prediction request {} failed: {}", generation, e);
            }
            link.send_message(Msg::PredictionFinished(generation, outcome));
        }
    });
}
