//! `?open=about,projects` boot links.

use thiserror::Error;

use crate::model::{DeepLinkState, WindowId};

const OPEN_KEY: &str = "open";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("unknown window `{0}` in deep link")]
    UnknownWindow(String),
}

/// Result of reading a query string: windows to open plus tokens that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeepLink {
    pub state: DeepLinkState,
    pub rejected: Vec<DeepLinkError>,
}

fn decode_separators(value: &str) -> String {
    value.replace("%2C", ",").replace("%2c", ",")
}

/// Parses every `open` parameter in `query`. Duplicate tokens are kept; opening twice simply
/// raises the window again.
pub fn parse_deep_link_from_query(query: &str) -> ParsedDeepLink {
    let mut parsed = ParsedDeepLink::default();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != OPEN_KEY {
            continue;
        }
        for token in decode_separators(value)
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
        {
            match WindowId::from_token(&token.to_ascii_lowercase()) {
                Some(window_id) => parsed.state.open.push(window_id),
                None => parsed
                    .rejected
                    .push(DeepLinkError::UnknownWindow(token.to_string())),
            }
        }
    }

    parsed
}

/// Reads the deep link from the current page URL. Always empty off the browser.
pub fn current_deep_link() -> ParsedDeepLink {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return ParsedDeepLink::default();
        };
        match window.location().search() {
            Ok(search) => parse_deep_link_from_query(&search),
            Err(_) => ParsedDeepLink::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ParsedDeepLink::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_comma_separated_windows_in_order() {
        let parsed = parse_deep_link_from_query("?open=about,projects");
        assert_eq!(
            parsed.state.open,
            vec![WindowId::About, WindowId::Projects]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn unknown_tokens_are_reported_and_skipped() {
        let parsed = parse_deep_link_from_query("?utm=x&open=Skills%2Cterminal,,pet");
        assert_eq!(parsed.state.open, vec![WindowId::Skills, WindowId::Pet]);
        assert_eq!(
            parsed.rejected,
            vec![DeepLinkError::UnknownWindow("terminal".to_string())]
        );
        assert_eq!(
            parsed.rejected[0].to_string(),
            "unknown window `terminal` in deep link"
        );
    }

    #[test]
    fn missing_open_parameter_yields_nothing() {
        assert_eq!(parse_deep_link_from_query(""), ParsedDeepLink::default());
        assert_eq!(
            parse_deep_link_from_query("?open"),
            ParsedDeepLink::default()
        );
    }
}
