//! Widget configuration.
//!
//! Copy and runtime settings for a [`TodoWidget`](crate::TodoWidget).
//! Values are provided by the embedding application; defaults match the
//! stock widget.

use composable_todo_runtime::StoreConfig;

/// Todo widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Heading shown above the widget.
    ///
    /// Default: "Todo App"
    pub title: String,

    /// Line shown under the heading.
    ///
    /// Default: "Stay organized and get things done"
    pub subtitle: String,

    /// Hint shown in the input field while the draft is empty.
    ///
    /// Default: "What needs to be done?"
    pub placeholder: String,

    /// Store runtime settings.
    pub store: StoreConfig,
}

impl WidgetConfig {
    /// Create a configuration with the stock copy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the input placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the store runtime settings.
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_string(),
            subtitle: "Stay organized and get things done".to_string(),
            placeholder: "What needs to be done?".to_string(),
            store: StoreConfig::default(),
        }
    }
}
