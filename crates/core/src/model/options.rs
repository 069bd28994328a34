/// A selectable description option for the session form.
///
/// Derived on every fetch from the distinct descriptions the backend has
/// seen; label and value carry the same text today, but the pair mirrors the
/// wire shape the form contract expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardioOption {
    pub label: String,
    pub value: String,
}

impl CardioOption {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        let value = description.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Maps the backend's known-description list into form options.
    #[must_use]
    pub fn from_descriptions(descriptions: &[String]) -> Vec<Self> {
        descriptions.iter().map(Self::new).collect()
    }
}
