/// Advisory filter used by the file picker, drop zone and paste handler.
/// The prediction service does the real validation.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
        && media_type.len() > 6
}

/// The one file currently chosen in the view. `P` is the payload handle:
/// a browser `File` in the frontend, plain bytes in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<P> {
    payload: P,
    filename: String,
    media_type: String,
}

impl<P> SelectedImage<P> {
    pub fn new(payload: P, filename: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            payload,
            filename: filename.into(),
            media_type: media_type.into(),
        }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}
