use std::fmt;

/// Extra text appended to a failure message.
pub enum Message<'a> {
    Empty,
    Text(String),
    /// Built only when the assertion fails.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> Message<'a> {
    pub fn lazy<F>(supplier: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        Self::Lazy(Box::new(supplier))
    }

    #[must_use]
    pub fn render(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text,
            Self::Lazy(supplier) => supplier(),
        }
    }
}

impl Default for Message<'_> {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<&str> for Message<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Appends the extra message to `base`, separated by a single space.
#[must_use]
pub fn with_custom_message(base: &str, message: Message<'_>) -> String {
    let custom = message.render();
    match (base.is_empty(), custom.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => custom,
        (false, false) => format!("{base} {custom}"),
    }
}
