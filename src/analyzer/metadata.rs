//! Page metadata extraction: title, HTML version, headings, login forms.
//!
//! Everything here is a pure function of the markup.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::model::{HeadingCounts, HtmlVersion, NO_TITLE};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid - this is a bug"));

static HEADING_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    (1..=6)
        .map(|level| {
            Selector::parse(&format!("h{level}")).expect("heading selector is valid - this is a bug")
        })
        .collect()
});

// Any one match is enough to call it a login form
const LOGIN_FORM_PATTERNS: [&str; 5] = [
    "input[type='password']",
    "input[name*='password']",
    "input[id*='password']",
    "form[action*='login']",
    "form[id*='login']",
];

static LOGIN_FORM_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    LOGIN_FORM_PATTERNS
        .iter()
        .map(|pattern| Selector::parse(pattern).expect("login selector is valid - this is a bug"))
        .collect()
});

const HTML5_DOCTYPE: &str = "<!doctype html>";

/// Returns the trimmed text of the first `<title>`, or `"No title found"`.
pub fn extract_title(document: &Html) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default();

    let title = title.trim();
    if title.is_empty() {
        NO_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Guesses the HTML version from the raw markup.
///
/// Case-insensitive substring search for `<!doctype html>` anywhere in the
/// source. Legacy doctypes with a public identifier don't contain that exact
/// token and come out as HTML4; an HTML5 doctype inside a comment still
/// counts.
pub fn detect_html_version(markup: &str) -> HtmlVersion {
    if markup.to_ascii_lowercase().contains(HTML5_DOCTYPE) {
        HtmlVersion::Html5
    } else {
        HtmlVersion::Html4OrEarlier
    }
}

pub fn count_headings(document: &Html) -> HeadingCounts {
    let mut levels = [0usize; 6];
    for (count, selector) in levels.iter_mut().zip(HEADING_SELECTORS.iter()) {
        *count = document.select(selector).count();
    }
    HeadingCounts::from_levels(levels)
}

pub fn detect_login_form(document: &Html) -> bool {
    LOGIN_FORM_SELECTORS
        .iter()
        .any(|selector| document.select(selector).next().is_some())
}
