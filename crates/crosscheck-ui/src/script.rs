//! Playwright script rendering
//!
//! Rendering is pure: settings plus steps in, a self-contained Node script
//! out. The generated script owns the whole browser lifecycle — on any error
//! it captures a failure screenshot, reports a JSON result line and exits
//! non-zero; handles close in page → context → browser order either way.

use std::path::Path;

use crosscheck_core::{BrowserKind, BrowserSettings};

use crate::step::Step;

/// Render the script for one browser run.
///
/// `name` labels the run and its failure screenshot under `screenshot_dir`.
#[must_use]
pub fn render_script(
    settings: &BrowserSettings,
    screenshot_dir: &Path,
    name: &str,
    steps: &[Step],
) -> String {
    let failure_shot = screenshot_dir.join(format!("{name}-failure.png"));
    let failure_shot = js_str(&failure_shot.to_string_lossy());

    let mut script = format!(
        r"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {launch};
  const context = await browser.newContext({{
    baseURL: '{base_url}',
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  page.setDefaultTimeout({timeout});

  try {{
",
        launch = launch_js(settings),
        base_url = js_str(&settings.base_url),
        width = settings.viewport_width,
        height = settings.viewport_height,
        timeout = settings.default_timeout_ms,
    );

    for (i, step) in steps.iter().enumerate() {
        script.push_str(&format!("    // step {}: {}\n", i + 1, step.label()));
        script.push_str(&step_js(step, screenshot_dir));
    }

    script.push_str(&format!(
        r"    console.log(JSON.stringify({{ success: true }}));
  }} catch (error) {{
    try {{
      await page.screenshot({{ path: '{failure_shot}', fullPage: true }});
    }} catch (_) {{}}
    console.error(JSON.stringify({{ success: false, error: error.message, screenshot: '{failure_shot}' }}));
    process.exitCode = 1;
  }} finally {{
    await page.close();
    await context.close();
    await browser.close();
  }}
}})();
"
    ));

    script
}

/// Launch expression for the configured engine or branded channel
fn launch_js(settings: &BrowserSettings) -> String {
    let mut options = format!("headless: {}", settings.headless);
    if settings.slow_mo_ms > 0 {
        options.push_str(&format!(", slowMo: {}", settings.slow_mo_ms));
    }

    match settings.kind {
        BrowserKind::Chromium => format!("chromium.launch({{ {options} }})"),
        BrowserKind::Chrome => format!("chromium.launch({{ channel: 'chrome', {options} }})"),
        BrowserKind::Edge => format!("chromium.launch({{ channel: 'msedge', {options} }})"),
        BrowserKind::Firefox => format!("firefox.launch({{ {options} }})"),
        BrowserKind::Webkit => format!("webkit.launch({{ {options} }})"),
    }
}

/// JavaScript for a single step, indented for the try block
fn step_js(step: &Step, screenshot_dir: &Path) -> String {
    match step {
        Step::Navigate { path } => format!(
            "    await page.goto('{}');\n    await page.waitForLoadState('domcontentloaded');\n",
            js_str(path)
        ),
        Step::Fill { selector, value } => format!(
            "    await page.fill('{}', '{}');\n",
            js_str(selector),
            js_str(value)
        ),
        Step::Click { selector } => {
            format!("    await page.click('{}');\n", js_str(selector))
        }
        Step::Press { key } => {
            format!("    await page.keyboard.press('{}');\n", js_str(key))
        }
        Step::WaitVisible {
            selector,
            timeout_ms,
        } => format!(
            "    await page.waitForSelector('{}', {{ state: 'visible', timeout: {timeout_ms} }});\n",
            js_str(selector)
        ),
        Step::AssertText { selector, contains } => {
            let selector = js_str(selector);
            let contains = js_str(contains);
            format!(
                "    {{\n      const text = await page.textContent('{selector}');\n      if (text === null || !text.includes('{contains}')) {{\n        throw new Error('unexpected text in {selector}: ' + text);\n      }}\n    }}\n"
            )
        }
        Step::AssertVisible { selector } => {
            let selector = js_str(selector);
            format!(
                "    if (!(await page.isVisible('{selector}'))) {{\n      throw new Error('element not visible: {selector}');\n    }}\n"
            )
        }
        Step::AssertUrlContains { fragment } => {
            let fragment = js_str(fragment);
            format!(
                "    if (!page.url().includes('{fragment}')) {{\n      throw new Error('url missing {fragment}: ' + page.url());\n    }}\n"
            )
        }
        Step::Check { selector } => {
            format!("    await page.check('{}');\n", js_str(selector))
        }
        Step::Uncheck { selector } => {
            format!("    await page.uncheck('{}');\n", js_str(selector))
        }
        Step::SelectOption { selector, value } => format!(
            "    await page.selectOption('{}', '{}');\n",
            js_str(selector),
            js_str(value)
        ),
        Step::Screenshot { name, full_page } => {
            let path = screenshot_dir.join(format!("{name}.png"));
            format!(
                "    await page.screenshot({{ path: '{}', fullPage: {full_page} }});\n",
                js_str(&path.to_string_lossy())
            )
        }
        Step::Sleep { ms } => format!("    await page.waitForTimeout({ms});\n"),
    }
}

/// Escape a string for a single-quoted JavaScript literal
fn js_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings() -> BrowserSettings {
        BrowserSettings::default()
    }

    fn shot_dir() -> PathBuf {
        PathBuf::from("test-results/screenshots")
    }

    fn login_steps() -> Vec<Step> {
        vec![
            Step::Navigate {
                path: "/form".to_string(),
            },
            Step::Fill {
                selector: "#user".to_string(),
                value: "admin".to_string(),
            },
            Step::Click {
                selector: "#login".to_string(),
            },
        ]
    }

    #[test]
    fn renders_steps_in_order() {
        let script = render_script(&settings(), &shot_dir(), "login", &login_steps());

        let goto = script.find("page.goto('/form')").unwrap();
        let fill = script.find("page.fill('#user', 'admin')").unwrap();
        let click = script.find("page.click('#login')").unwrap();

        assert!(goto < fill && fill < click);
        assert!(script.contains("JSON.stringify({ success: true })"));
    }

    #[test]
    fn navigate_waits_for_load() {
        let script = render_script(&settings(), &shot_dir(), "nav", &login_steps());
        assert!(script.contains("waitForLoadState('domcontentloaded')"));
    }

    #[test]
    fn failure_path_takes_a_screenshot_and_fails_the_process() {
        let script = render_script(&settings(), &shot_dir(), "login", &login_steps());

        assert!(script.contains("test-results/screenshots/login-failure.png"));
        assert!(script.contains("process.exitCode = 1"));
        assert!(script.contains("success: false"));
    }

    #[test]
    fn handles_close_in_reverse_order() {
        let script = render_script(&settings(), &shot_dir(), "login", &login_steps());

        let page = script.find("await page.close()").unwrap();
        let context = script.find("await context.close()").unwrap();
        let browser = script.find("await browser.close()").unwrap();

        assert!(page < context && context < browser);
    }

    #[test]
    fn context_carries_base_url_and_viewport() {
        let script = render_script(&settings(), &shot_dir(), "ctx", &[]);

        assert!(script.contains("baseURL: 'http://localhost:3000'"));
        assert!(script.contains("viewport: { width: 1280, height: 800 }"));
        assert!(script.contains("page.setDefaultTimeout(30000)"));
    }

    #[test]
    fn branded_channels_launch_through_chromium() {
        let mut s = settings();

        s.kind = BrowserKind::Chrome;
        let script = render_script(&s, &shot_dir(), "chrome", &[]);
        assert!(script.contains("chromium.launch({ channel: 'chrome', headless: true })"));

        s.kind = BrowserKind::Edge;
        let script = render_script(&s, &shot_dir(), "edge", &[]);
        assert!(script.contains("channel: 'msedge'"));
    }

    #[test]
    fn engines_launch_directly() {
        let mut s = settings();

        s.kind = BrowserKind::Firefox;
        assert!(render_script(&s, &shot_dir(), "ff", &[]).contains("firefox.launch("));

        s.kind = BrowserKind::Webkit;
        assert!(render_script(&s, &shot_dir(), "wk", &[]).contains("webkit.launch("));
    }

    #[test]
    fn headed_and_slow_mo_settings_render() {
        let mut s = settings();
        s.headless = false;
        s.slow_mo_ms = 500;

        let script = render_script(&s, &shot_dir(), "slow", &[]);
        assert!(script.contains("headless: false, slowMo: 500"));
    }

    #[test]
    fn slow_mo_zero_is_omitted() {
        let script = render_script(&settings(), &shot_dir(), "fast", &[]);
        assert!(!script.contains("slowMo"));
    }

    #[test]
    fn single_quotes_and_backslashes_are_escaped() {
        let steps = vec![Step::Fill {
            selector: "input[name='user']".to_string(),
            value: "O'Brien \\ co".to_string(),
        }];

        let script = render_script(&settings(), &shot_dir(), "escape", &steps);

        assert!(script.contains(r"input[name=\'user\']"));
        assert!(script.contains(r"O\'Brien \\ co"));
    }

    #[test]
    fn assertions_render_as_guards() {
        let steps = vec![
            Step::AssertText {
                selector: "#out".to_string(),
                contains: "saved".to_string(),
            },
            Step::AssertUrlContains {
                fragment: "/done".to_string(),
            },
        ];

        let script = render_script(&settings(), &shot_dir(), "asserts", &steps);

        assert!(script.contains("page.textContent('#out')"));
        assert!(script.contains("text.includes('saved')"));
        assert!(script.contains("page.url().includes('/done')"));
    }

    #[test]
    fn screenshot_step_lands_in_the_artifact_dir() {
        let steps = vec![Step::Screenshot {
            name: "after-login".to_string(),
            full_page: true,
        }];

        let script = render_script(&settings(), &shot_dir(), "shots", &steps);
        assert!(script.contains("test-results/screenshots/after-login.png"));
        assert!(script.contains("fullPage: true"));
    }

    #[test]
    fn step_comments_carry_labels() {
        let script = render_script(&settings(), &shot_dir(), "login", &login_steps());
        assert!(script.contains("// step 1: navigate:/form"));
        assert!(script.contains("// step 3: click:#login"));
    }
}
