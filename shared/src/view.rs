use crate::state::{PredictorState, SubmissionStatus};

pub const SEGMENTATION_LEGEND: &str = "Red/Yellow = Tumor regions";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub filename: String,
    pub label: String,
    pub confidence: String,
    pub image_src: String,
    pub legend: &'static str,
}

/// What the predictor view shows, derived from state alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Prompt,
    Ready { filename: String },
    Busy { filename: String },
    Result(ResultPanel),
    Failed { filename: String },
}

impl Screen {
    pub fn from_state<P>(state: &PredictorState<P>) -> Self {
        let Some(selected) = state.selected() else {
            return Screen::Prompt;
        };
        let filename = selected.filename().to_string();

        match (state.status(), state.result()) {
            (SubmissionStatus::Busy, _) => Screen::Busy { filename },
            (SubmissionStatus::Succeeded, Some(result)) => Screen::Result(ResultPanel {
                filename,
                label: result.classification().to_string(),
                confidence: result.confidence_label(),
                image_src: result.segmentation_src(),
                legend: SEGMENTATION_LEGEND,
            }),
            (SubmissionStatus::Failed, _) => Screen::Failed { filename },
            _ => Screen::Ready { filename },
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self, Screen::Prompt | Screen::Busy { .. })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Screen::Busy { .. })
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Screen::Prompt => None,
            Screen::Ready { filename } | Screen::Busy { filename } | Screen::Failed { filename } => {
                Some(filename)
            }
            Screen::Result(panel) => Some(&panel.filename),
        }
    }

    pub fn result_panel(&self) -> Option<&ResultPanel> {
        match self {
            Screen::Result(panel) => Some(panel),
            _ => None,
        }
    }
}

pub fn notice_text<P>(state: &PredictorState<P>) -> Option<&'static str> {
    state.notice().map(|notice| notice.text())
}
