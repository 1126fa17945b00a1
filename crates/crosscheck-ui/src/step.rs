//! Browser interaction steps
//!
//! Steps are recorded by page objects and rendered into one script per run.

/// One browser interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Load a relative URL and wait for the page to settle
    Navigate { path: String },
    /// Fill an input with text
    Fill { selector: String, value: String },
    /// Click an element
    Click { selector: String },
    /// Press a keyboard key
    Press { key: String },
    /// Wait for an element to become visible
    WaitVisible { selector: String, timeout_ms: u64 },
    /// Assert the element's text contains a fragment
    AssertText { selector: String, contains: String },
    /// Assert the element is visible
    AssertVisible { selector: String },
    /// Assert the current URL contains a fragment
    AssertUrlContains { fragment: String },
    /// Check a checkbox or radio button
    Check { selector: String },
    /// Uncheck a checkbox
    Uncheck { selector: String },
    /// Select an option in a select element by value
    SelectOption { selector: String, value: String },
    /// Capture a screenshot
    Screenshot { name: String, full_page: bool },
    /// Wait a fixed amount of time (use sparingly)
    Sleep { ms: u64 },
}

impl Step {
    /// Compact label for logs and failure messages
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Navigate { path } => format!("navigate:{path}"),
            Self::Fill { selector, .. } => format!("fill:{selector}"),
            Self::Click { selector } => format!("click:{selector}"),
            Self::Press { key } => format!("press:{key}"),
            Self::WaitVisible { selector, .. } => format!("wait-visible:{selector}"),
            Self::AssertText { selector, .. } => format!("assert-text:{selector}"),
            Self::AssertVisible { selector } => format!("assert-visible:{selector}"),
            Self::AssertUrlContains { fragment } => format!("assert-url:{fragment}"),
            Self::Check { selector } => format!("check:{selector}"),
            Self::Uncheck { selector } => format!("uncheck:{selector}"),
            Self::SelectOption { selector, .. } => format!("select:{selector}"),
            Self::Screenshot { name, .. } => format!("screenshot:{name}"),
            Self::Sleep { ms } => format!("sleep:{ms}ms"),
        }
    }
}
