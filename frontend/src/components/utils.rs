use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{is_image_media_type, notice_text};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

const MAX_DISPLAY_NAME: usize = 20;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// First file in the list whose MIME type is an image. Advisory only.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| is_image_media_type(&file.type_()))
        .map(GlooFile::from)
}

pub fn display_name(filename: &str) -> String {
    if filename.chars().count() > MAX_DISPLAY_NAME {
        let head: String = filename.chars().take(MAX_DISPLAY_NAME - 3).collect();
        format!("{}...", head)
    } else {
        filename.to_string()
    }
}

pub fn render_notice(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(text) = notice_text(&model.state) {
        html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ text }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissNotice)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
