use shared::{ResultPanel, Screen};
use yew::prelude::*;

pub fn render_results(screen: &Screen) -> Html {
    match screen {
        Screen::Busy { .. } => html! {
            <div class="loading-indicator">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Analyzing MRI image..."}</p>
            </div>
        },
        Screen::Result(panel) => render_result_panel(panel),
        _ => html! {},
    }
}

fn render_result_panel(panel: &ResultPanel) -> Html {
    html! {
        <div class="results-container">
            <div class="result-header">
                <h2 title={format!("Analysis results for: {}", panel.filename)}>
                    {"Predicted Type: "}
                    <span class="predicted-label">{ &panel.label }</span>
                    <span class="analyzed-filename-display">{format!(" ({})", panel.filename)}</span>
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}", panel.confidence)}></div>
                    </div>
                    <div class="meter-value">{ &panel.confidence }</div>
                </div>
            </div>
            <div class="segmentation">
                <h3>{"Segmentation Overlay"}</h3>
                <img
                    id="segmentation-overlay"
                    src={panel.image_src.clone()}
                    alt="Segmentation Overlay"
                />
                <p class="segmentation-legend">{ panel.legend }</p>
            </div>
        </div>
    }
}
