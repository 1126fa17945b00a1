//! The login form screen

use crosscheck_core::TestLogger;

use crate::error::UiResult;
use crate::pages::selectors::login as sel;
use crate::session::BrowserSession;
use crate::step::Step;

pub struct LoginPage<'a> {
    session: &'a BrowserSession,
    logger: &'a TestLogger,
}

impl<'a> LoginPage<'a> {
    #[must_use]
    pub fn new(session: &'a BrowserSession, logger: &'a TestLogger) -> Self {
        Self { session, logger }
    }

    /// Submit the login form
    ///
    /// # Errors
    ///
    /// Returns the in-browser failure
    pub fn login(&self, username: &str, password: &str) -> UiResult<()> {
        self.logger.step("login");
        self.session.run("login", &login_steps(username, password))
    }

    /// Submit the login form and assert the landing banner text
    ///
    /// # Errors
    ///
    /// Returns the in-browser failure, including a failed assertion
    pub fn login_expecting(&self, username: &str, password: &str, expected: &str) -> UiResult<()> {
        self.logger.step("login");

        let mut steps = login_steps(username, password);
        steps.push(Step::WaitVisible {
            selector: sel::WELCOME_BANNER.to_string(),
            timeout_ms: 5_000,
        });
        steps.push(Step::AssertText {
            selector: sel::WELCOME_BANNER.to_string(),
            contains: expected.to_string(),
        });

        self.session.run("login-expecting", &steps)
    }
}

fn login_steps(username: &str, password: &str) -> Vec<Step> {
    vec![
        Step::Navigate {
            path: "/form".to_string(),
        },
        Step::Fill {
            selector: sel::USERNAME_INPUT.to_string(),
            value: username.to_string(),
        },
        Step::Fill {
            selector: sel::PASSWORD_INPUT.to_string(),
            value: password.to_string(),
        },
        Step::Click {
            selector: sel::LOGIN_BUTTON.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_flow_fills_before_clicking() {
        let steps = login_steps("admin", "secret");

        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[0],
            Step::Navigate {
                path: "/form".to_string()
            }
        );
        assert!(matches!(&steps[1], Step::Fill { selector, value }
            if selector == sel::USERNAME_INPUT && value == "admin"));
        assert!(matches!(&steps[2], Step::Fill { selector, value }
            if selector == sel::PASSWORD_INPUT && value == "secret"));
        assert!(matches!(&steps[3], Step::Click { selector }
            if selector == sel::LOGIN_BUTTON));
    }
}
