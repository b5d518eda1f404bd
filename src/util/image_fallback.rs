//! Thumbnail source with a one-shot placeholder substitution.
//!
//! The first load error swaps in the placeholder; later errors are ignored so
//! a broken placeholder can never bounce the element into a retry loop.

#[cfg(test)]
#[path = "image_fallback_test.rs"]
mod image_fallback_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    src: String,
    placeholder: String,
    substituted: bool,
}

impl ImageSource {
    /// A missing image starts on the placeholder without waiting for an error.
    pub fn new(image: Option<&str>, placeholder: &str) -> Self {
        match image.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self { src: url.to_owned(), placeholder: placeholder.to_owned(), substituted: false },
            None => Self { src: placeholder.to_owned(), placeholder: placeholder.to_owned(), substituted: true },
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.substituted
    }

    /// Handle an `error` event. Returns `true` when the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.substituted {
            return false;
        }
        self.substituted = true;
        self.src.clone_from(&self.placeholder);
        true
    }
}
