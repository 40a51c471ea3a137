use std::borrow::Cow;

/// Where the text of a violation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationMessage {
    /// Caller-supplied text, reported verbatim.
    Override(String),
    /// Built-in template naming the offending pattern.
    Default { pattern: String },
}

impl ViolationMessage {
    /// Choose between `message` and the default template for `pattern`.
    ///
    /// An empty override counts as absent.
    #[must_use]
    pub fn resolve(message: Option<&str>, pattern: &str) -> Self {
        match message {
            Some(text) if !text.is_empty() => Self::Override(text.to_string()),
            _ => Self::Default {
                pattern: pattern.to_string(),
            },
        }
    }

    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Override(text) => Cow::Borrowed(text),
            Self::Default { pattern } => Cow::Owned(default_message(pattern)),
        }
    }

    #[must_use]
    pub const fn is_override(&self) -> bool {
        matches!(self, Self::Override(_))
    }
}

/// The default violation text for `pattern`.
#[must_use]
pub fn default_message(pattern: &str) -> String {
    format!("Line matches the illegal pattern '{pattern}'.")
}
