//! Page objects: named UI actions over fixed locators
//!
//! One page object per logical screen. A page borrows the session and the
//! test logger, composes the steps for an action, and hands them to the
//! session as a single run.

mod login;
mod web_elements;

pub use login::LoginPage;
pub use web_elements::WebElementsPage;

/// Element locators, one module per screen
pub mod selectors {
    pub mod login {
        pub const USERNAME_INPUT: &str = "input[placeholder='Username']";
        pub const PASSWORD_INPUT: &str = "input[name='password']";
        pub const LOGIN_BUTTON: &str = "button:has-text('Login')";
        pub const WELCOME_BANNER: &str = "#welcome-message";
    }

    pub mod web_elements {
        pub const TEXT_INPUT: &str = "#text-input";
        // The demo app gives the echo paragraph no id or class.
        pub const TEXT_OUTPUT: &str = "main > div > div > p:nth-child(3)";
    }
}
