//! Confirmation request model

use serde::{Deserialize, Serialize};

/// Semantic hint for how the dialog should present itself.
///
/// The variant never affects how a request resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    /// The confirmed action is destructive (dropping a player, deleting a league)
    Destructive,
}

/// A single yes/no question to put in front of the user.
///
/// Fields are passed to the dialog as-is. Empty strings are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    /// Dialog title
    pub title: String,

    /// Body text explaining what is about to happen
    pub description: String,

    /// Label override for the confirm button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_label: Option<String>,

    /// Label override for the cancel button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_label: Option<String>,

    #[serde(default)]
    pub variant: Variant,
}

impl ConfirmationRequest {
    /// Create a request with default labels and the default variant
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Override the confirm button label
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Override the cancel button label
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for `variant(Variant::Destructive)`
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = ConfirmationRequest::new("Drop player?", "He goes to waivers.")
            .confirm_label("Drop")
            .destructive();

        assert_eq!(request.title, "Drop player?");
        assert_eq!(request.confirm_label.as_deref(), Some("Drop"));
        assert!(request.cancel_label.is_none());
        assert!(request.is_destructive());
    }

    #[test]
    fn test_empty_strings_pass_through() {
        let request = ConfirmationRequest::new("", "");
        assert_eq!(request.title, "");
        assert_eq!(request.description, "");
        assert_eq!(request.variant, Variant::Default);
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"title":"Leave page?","description":"Unsaved changes will be lost."}"#;
        let request: ConfirmationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.variant, Variant::Default);
        assert!(request.confirm_label.is_none());
    }

    #[test]
    fn test_variant_serialization() {
        let request = ConfirmationRequest::new("Delete?", "This cannot be undone.").destructive();
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""variant":"destructive""#));
        assert!(!json.contains("confirm_label"));
    }
}
