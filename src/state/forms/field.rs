//! Form field value objects

/// Visual tone of a field's border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldTone {
    #[default]
    Neutral,
    /// Failed validation or live mismatch
    Errored,
    /// Live feedback says the value is good
    Valid,
    /// Non-empty but not yet meeting all rules
    Pending,
}

/// Represents a single form field with its value and inline error annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    value: String,
    error: Option<String>,
    pub tone: FieldTone,
    pub is_secret: bool,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            error: None,
            tone: FieldTone::Neutral,
            is_secret: false,
            is_multiline: false,
        }
    }

    /// Create a masked field for passwords
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a multiline text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label)
        }
    }

    /// Builder-style initial value
    #[cfg(test)]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the value
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Current error annotation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Attach an error annotation, replacing any existing one
    pub fn annotate(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.tone = FieldTone::Errored;
    }

    /// Drop the annotation and restore the neutral tone. Safe to call on a clean field.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.tone = FieldTone::Neutral;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}
