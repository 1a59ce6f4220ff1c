use derive_more::Display;
use strum_macros::{AsRefStr, Display as StrumDisplay};

use crate::media::SelectedImage;
use crate::prediction::{PredictionError, PredictionResult, UPLOAD_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, AsRefStr)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Busy,
    Succeeded,
    Failed,
}

/// Request token. Bumped on every selection and every dispatched submission;
/// a response is only applied when it carries the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Transient user-facing message. Never part of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoFileSelected,
    NoValidImage,
    PredictionFailed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::NoFileSelected => "Please select an image.",
            Notice::NoValidImage => "No valid image files selected.",
            Notice::PredictionFailed => "Error predicting tumor. Check backend server.",
        }
    }
}

#[derive(Debug)]
pub enum Event<P> {
    FileSelected(SelectedImage<P>),
    SelectionRejected(String),
    SubmitRequested,
    PredictionFinished {
        generation: Generation,
        outcome: Result<PredictionResult, PredictionError>,
    },
    NoticeDismissed,
}

/// A submission ready to be sent. Only produced by [`PredictorState::apply`].
#[derive(Debug, Clone)]
pub struct PredictionRequest<P> {
    generation: Generation,
    image: SelectedImage<P>,
}

impl<P> PredictionRequest<P> {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn image(&self) -> &SelectedImage<P> {
        &self.image
    }

    pub fn field_name(&self) -> &'static str {
        UPLOAD_FIELD
    }
}

#[derive(Debug, Clone)]
pub struct PredictorState<P> {
    selected: Option<SelectedImage<P>>,
    status: SubmissionStatus,
    result: Option<PredictionResult>,
    generation: Generation,
    notice: Option<Notice>,
}

impl<P> Default for PredictorState<P> {
    fn default() -> Self {
        Self {
            selected: None,
            status: SubmissionStatus::Idle,
            result: None,
            generation: Generation::default(),
            notice: None,
        }
    }
}

impl<P: Clone> PredictorState<P> {
    /// Applies one event. Returns a request exactly when a network call must be made.
    pub fn apply(&mut self, event: Event<P>) -> Option<PredictionRequest<P>> {
        match event {
            Event::FileSelected(image) => {
                self.select_file(image);
                None
            }
            Event::SelectionRejected(reason) => {
                log::warn!("Selection rejected: {}", reason);
                self.notice = Some(Notice::NoValidImage);
                None
            }
            Event::SubmitRequested => self.submit(),
            Event::PredictionFinished {
                generation,
                outcome,
            } => {
                self.finish(generation, outcome);
                None
            }
            Event::NoticeDismissed => {
                self.notice = None;
                None
            }
        }
    }

    fn select_file(&mut self, image: SelectedImage<P>) {
        if self.status == SubmissionStatus::Busy {
            log::info!(
                "New selection while generation {} is in flight; its response will be ignored",
                self.generation
            );
        }
        log::debug!("Selected {} ({})", image.filename(), image.media_type());

        self.selected = Some(image);
        self.result = None;
        self.status = SubmissionStatus::Idle;
        self.notice = None;
        self.generation = self.generation.next();
    }

    fn submit(&mut self) -> Option<PredictionRequest<P>> {
        if self.status == SubmissionStatus::Busy {
            log::debug!("Submit ignored, generation {} still in flight", self.generation);
            return None;
        }

        let Some(image) = self.selected.clone() else {
            self.notice = Some(Notice::NoFileSelected);
            return None;
        };

        self.generation = self.generation.next();
        self.result = None;
        self.notice = None;
        self.status = SubmissionStatus::Busy;
        log::debug!("Dispatching {} as generation {}", image.filename(), self.generation);

        Some(PredictionRequest {
            generation: self.generation,
            image,
        })
    }

    fn finish(&mut self, generation: Generation, outcome: Result<PredictionResult, PredictionError>) {
        if generation != self.generation || self.status != SubmissionStatus::Busy {
            log::debug!(
                "Dropping stale response for generation {} (current {}, {})",
                generation,
                self.generation,
                self.status
            );
            return;
        }

        match outcome {
            Ok(result) => {
                log::info!(
                    "Prediction: {} ({})",
                    result.classification(),
                    result.confidence_label()
                );
                self.result = Some(result);
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                log::error!("Prediction failed: {}", e);
                self.result = None;
                self.status = SubmissionStatus::Failed;
                self.notice = Some(Notice::PredictionFailed);
            }
        }
    }
}

impl<P> PredictorState<P> {
    pub fn selected(&self) -> Option<&SelectedImage<P>> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENTATION: &str = "iVBORw0KGgo=";

    fn image(name: &str) -> SelectedImage<Vec<u8>> {
        SelectedImage::new(vec![0x89, b'P', b'N', b'G'], name, "image/png")
    }

    fn success(label: &str, confidence: f64) -> Result<PredictionResult, PredictionError> {
        let body = serde_json::json!({
            "classification": label,
            "confidence": confidence,
            "segmentation": SEGMENTATION,
        });
        PredictionResult::decode(body.to_string().as_bytes())
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = PredictorState::<Vec<u8>>::default();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.selected().is_none());
        assert!(state.result().is_none());
        assert!(state.notice().is_none());
    }

    #[test]
    fn submit_without_file_sets_notice_and_sends_nothing() {
        let mut state = PredictorState::<Vec<u8>>::default();
        assert!(state.apply(Event::SubmitRequested).is_none());
        assert_eq!(state.notice(), Some(Notice::NoFileSelected));
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn submit_produces_request_with_upload_field() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));

        let request = state.apply(Event::SubmitRequested).expect("request");
        assert_eq!(request.field_name(), "file");
        assert_eq!(request.image().filename(), "scan.png");
        assert_eq!(request.generation(), state.generation());
        assert_eq!(state.status(), SubmissionStatus::Busy);
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        assert!(state.apply(Event::SubmitRequested).is_some());
        assert!(state.apply(Event::SubmitRequested).is_none());
        assert_eq!(state.status(), SubmissionStatus::Busy);
    }

    #[test]
    fn success_populates_result() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let request = state.apply(Event::SubmitRequested).unwrap();

        state.apply(Event::PredictionFinished {
            generation: request.generation(),
            outcome: success("glioma", 92.5),
        });

        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        let result = state.result().unwrap();
        assert_eq!(result.classification(), "glioma");
        assert_eq!(result.confidence(), 92.5);
    }

    #[test]
    fn failure_sets_notice_and_leaves_no_result() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let request = state.apply(Event::SubmitRequested).unwrap();

        state.apply(Event::PredictionFinished {
            generation: request.generation(),
            outcome: Err(PredictionError::Transport("connection refused".into())),
        });

        assert_eq!(state.status(), SubmissionStatus::Failed);
        assert!(state.result().is_none());
        assert_eq!(state.notice(), Some(Notice::PredictionFailed));
    }

    #[test]
    fn resubmit_after_failure_is_allowed() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let first = state.apply(Event::SubmitRequested).unwrap();
        state.apply(Event::PredictionFinished {
            generation: first.generation(),
            outcome: Err(PredictionError::Status {
                status: 502,
                body: String::new(),
            }),
        });

        let second = state.apply(Event::SubmitRequested).expect("retry request");
        assert!(second.generation() > first.generation());
        assert!(state.notice().is_none());
    }

    #[test]
    fn new_selection_clears_previous_result() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let request = state.apply(Event::SubmitRequested).unwrap();
        state.apply(Event::PredictionFinished {
            generation: request.generation(),
            outcome: success("pituitary", 71.0),
        });

        state.apply(Event::FileSelected(image("scan2.png")));

        assert!(state.result().is_none());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.selected().unwrap().filename(), "scan2.png");
    }

    #[test]
    fn response_for_old_selection_is_dropped() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let stale = state.apply(Event::SubmitRequested).unwrap();
        state.apply(Event::FileSelected(image("scan2.png")));

        state.apply(Event::PredictionFinished {
            generation: stale.generation(),
            outcome: success("glioma", 99.0),
        });

        assert!(state.result().is_none());
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn stale_failure_does_not_clobber_new_submission() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let stale = state.apply(Event::SubmitRequested).unwrap();
        state.apply(Event::FileSelected(image("scan2.png")));
        let fresh = state.apply(Event::SubmitRequested).unwrap();

        state.apply(Event::PredictionFinished {
            generation: stale.generation(),
            outcome: Err(PredictionError::Transport("reset".into())),
        });
        assert_eq!(state.status(), SubmissionStatus::Busy);
        assert!(state.notice().is_none());

        state.apply(Event::PredictionFinished {
            generation: fresh.generation(),
            outcome: success("no_tumor", 64.25),
        });
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert_eq!(state.result().unwrap().classification(), "no_tumor");
    }

    #[test]
    fn duplicate_response_is_ignored_once_settled() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        let request = state.apply(Event::SubmitRequested).unwrap();
        state.apply(Event::PredictionFinished {
            generation: request.generation(),
            outcome: success("glioma", 80.0),
        });
        state.apply(Event::PredictionFinished {
            generation: request.generation(),
            outcome: Err(PredictionError::Decode("late".into())),
        });

        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert!(state.notice().is_none());
    }

    #[test]
    fn rejected_selection_keeps_current_file() {
        let mut state = PredictorState::default();
        state.apply(Event::FileSelected(image("scan.png")));
        state.apply(Event::SelectionRejected("notes.txt".into()));

        assert_eq!(state.selected().unwrap().filename(), "scan.png");
        assert_eq!(state.notice(), Some(Notice::NoValidImage));

        state.apply(Event::NoticeDismissed);
        assert!(state.notice().is_none());
    }

    #[test]
    fn status_displays_its_name() {
        assert_eq!(SubmissionStatus::Busy.to_string(), "Busy");
        assert_eq!(SubmissionStatus::Succeeded.as_ref(), "Succeeded");
    }
}
