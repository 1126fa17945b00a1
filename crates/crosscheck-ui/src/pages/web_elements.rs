//! The web-elements demo screen

use crosscheck_core::TestLogger;

use crate::error::UiResult;
use crate::pages::selectors::web_elements as sel;
use crate::session::BrowserSession;
use crate::step::Step;

pub struct WebElementsPage<'a> {
    session: &'a BrowserSession,
    logger: &'a TestLogger,
}

impl<'a> WebElementsPage<'a> {
    #[must_use]
    pub fn new(session: &'a BrowserSession, logger: &'a TestLogger) -> Self {
        Self { session, logger }
    }

    /// Type into the text input and assert the echoed output
    ///
    /// # Errors
    ///
    /// Returns the in-browser failure, including a failed assertion
    pub fn type_and_verify(&self, text: &str) -> UiResult<()> {
        self.logger.step("type_and_verify");
        self.session.run("web-elements-type", &type_steps(text))
    }
}

fn type_steps(text: &str) -> Vec<Step> {
    vec![
        Step::Navigate {
            path: "/elements".to_string(),
        },
        Step::Fill {
            selector: sel::TEXT_INPUT.to_string(),
            value: text.to_string(),
        },
        Step::AssertText {
            selector: sel::TEXT_OUTPUT.to_string(),
            contains: text.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_text_is_asserted_on_the_output() {
        let steps = type_steps("hello there");

        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[1], Step::Fill { value, .. } if value == "hello there"));
        assert!(matches!(&steps[2], Step::AssertText { selector, contains }
            if selector == sel::TEXT_OUTPUT && contains == "hello there"));
    }
}
