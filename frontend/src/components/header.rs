use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-brain"></i> {" Brain Tumor Detection"}</h1>
            <p class="subtitle">{"Upload an MRI scan to classify it and highlight the tumor region"}</p>
        </header>
    }
}
