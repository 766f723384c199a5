//! Turns raw OCR text into a stable identifier and reports only real changes.

/// The identifier currently under the pointer. Empty means nothing is recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: String,
}

impl HoverState {
    pub fn current(&self) -> &str {
        &self.current
    }
}

/// Emitted when the identifier under the pointer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityChanged {
    pub identifier: String,
}

impl IdentityChanged {
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty()
    }
}

/// First line of the OCR output, without surrounding whitespace.
///
/// Tesseract terminates its output with a newline and a form feed, both of which are
/// dropped here. The trim also strips leading and trailing spaces from the first line;
/// inner characters are kept as read.
pub fn normalize_identifier(raw: &str) -> &str {
    raw.lines().next().unwrap_or("").trim()
}

#[derive(Debug, Default)]
pub struct IdentityChangeDetector {
    state: HoverState,
}

impl IdentityChangeDetector {
    pub fn new(state: HoverState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Records a recognition result. Returns a notification only when the
    /// normalized identifier differs from the stored one.
    pub fn update(&mut self, raw_text: &str) -> Option<IdentityChanged> {
        let identifier = normalize_identifier(raw_text);
        if identifier == self.state.current {
            return None;
        }
        self.state.current = identifier.to_string();
        Some(IdentityChanged {
            identifier: self.state.current.clone(),
        })
    }
}
