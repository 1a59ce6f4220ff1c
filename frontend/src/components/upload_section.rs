use super::super::{Model, Msg};
use super::utils::{debounce, display_name, first_image_file};
use shared::Screen;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>, screen: &Screen) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx, screen) }
            { render_submit_button(model, screen) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>, screen: &Screen) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::SelectionRejected("file picker".into()),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    let label = match screen.filename() {
        Some(filename) => display_name(filename),
        None => "Choose MRI Image to Predict".to_string(),
    };

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p class="selected-file" title={screen.filename().unwrap_or_default().to_string()}>
                        { label }
                    </p>
                    <p class="file-types">{"Drag & drop, paste, or click. JPG, PNG, WEBP"}</p>
                </div>
            </div>
        </>
    }
}

fn render_submit_button(model: &Model, screen: &Screen) -> Html {
    html! {
        <div class="button-container">
            <button
                class="analyze-btn"
                onclick={model.submit_click.clone()}
                disabled={!screen.submit_enabled()}
            >
                {
                    if screen.is_busy() {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict Tumor"}</> }
                    }
                }
            </button>
        </div>
    }
}
