//! Viewer option enums
//!
//! The Play viewer accepts a fixed set of values for its `layout` and
//! `searchHotKey` options. Both are modeled as closed enums that
//! serialize by their wire string; parsing anything outside the set
//! fails with [`PlayError::InvalidConfiguration`] naming the field.

use crate::PlayError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Layout mode for the Play viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Single-column layout with floating request samples
    Modern,
    /// Two-column layout in the style of classic API docs
    Classic,
}

impl Layout {
    /// The wire value sent to the viewer
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Classic => "classic",
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Modern
    }
}

impl FromStr for Layout {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(Layout::Modern),
            "classic" => Ok(Layout::Classic),
            _ => Err(PlayError::InvalidConfiguration("layout")),
        }
    }
}

/// Hotkey that focuses the viewer's search box (e.g. CMD+k)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchHotKey {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl SearchHotKey {
    /// The wire value sent to the viewer
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchHotKey::A => "a",
            SearchHotKey::B => "b",
            SearchHotKey::C => "c",
            SearchHotKey::D => "d",
            SearchHotKey::E => "e",
            SearchHotKey::F => "f",
            SearchHotKey::G => "g",
            SearchHotKey::H => "h",
            SearchHotKey::I => "i",
            SearchHotKey::J => "j",
            SearchHotKey::K => "k",
            SearchHotKey::L => "l",
            SearchHotKey::M => "m",
            SearchHotKey::N => "n",
            SearchHotKey::O => "o",
            SearchHotKey::P => "p",
            SearchHotKey::Q => "q",
            SearchHotKey::R => "r",
            SearchHotKey::S => "s",
            SearchHotKey::T => "t",
            SearchHotKey::U => "u",
            SearchHotKey::V => "v",
            SearchHotKey::W => "w",
            SearchHotKey::X => "x",
            SearchHotKey::Y => "y",
            SearchHotKey::Z => "z",
        }
    }

    /// Build a hotkey from a single lowercase ASCII letter
    pub fn from_char(c: char) -> Result<Self, PlayError> {
        match c {
            'a' => Ok(SearchHotKey::A),
            'b' => Ok(SearchHotKey::B),
            'c' => Ok(SearchHotKey::C),
            'd' => Ok(SearchHotKey::D),
            'e' => Ok(SearchHotKey::E),
            'f' => Ok(SearchHotKey::F),
            'g' => Ok(SearchHotKey::G),
            'h' => Ok(SearchHotKey::H),
            'i' => Ok(SearchHotKey::I),
            'j' => Ok(SearchHotKey::J),
            'k' => Ok(SearchHotKey::K),
            'l' => Ok(SearchHotKey::L),
            'm' => Ok(SearchHotKey::M),
            'n' => Ok(SearchHotKey::N),
            'o' => Ok(SearchHotKey::O),
            'p' => Ok(SearchHotKey::P),
            'q' => Ok(SearchHotKey::Q),
            'r' => Ok(SearchHotKey::R),
            's' => Ok(SearchHotKey::S),
            't' => Ok(SearchHotKey::T),
            'u' => Ok(SearchHotKey::U),
            'v' => Ok(SearchHotKey::V),
            'w' => Ok(SearchHotKey::W),
            'x' => Ok(SearchHotKey::X),
            'y' => Ok(SearchHotKey::Y),
            'z' => Ok(SearchHotKey::Z),
            _ => Err(PlayError::InvalidConfiguration("search_hot_key")),
        }
    }
}

impl Default for SearchHotKey {
    fn default() -> Self {
        SearchHotKey::K
    }
}

impl FromStr for SearchHotKey {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(PlayError::InvalidConfiguration("search_hot_key")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_wire_values() {
        assert_eq!(Layout::Modern.as_str(), "modern");
        assert_eq!(Layout::Classic.as_str(), "classic");
        assert_eq!("modern".parse::<Layout>().unwrap(), Layout::Modern);
        assert_eq!("classic".parse::<Layout>().unwrap(), Layout::Classic);
    }

    #[test]
    fn test_layout_rejects_unknown_value() {
        let err = "fancy".parse::<Layout>().unwrap_err();
        assert!(matches!(err, PlayError::InvalidConfiguration("layout")));
        // case-sensitive, no coercion
        assert!("Modern".parse::<Layout>().is_err());
    }

    #[test]
    fn test_hotkey_roundtrip() {
        for c in 'a'..='z' {
            let key = SearchHotKey::from_char(c).unwrap();
            assert_eq!(key.as_str(), c.to_string());
            assert_eq!(c.to_string().parse::<SearchHotKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_hotkey_rejects_invalid_input() {
        for s in ["1", "K", "kk", "", "!"] {
            let err = s.parse::<SearchHotKey>().unwrap_err();
            assert!(matches!(err, PlayError::InvalidConfiguration("search_hot_key")));
        }
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&Layout::Classic).unwrap(), "\"classic\"");
        assert_eq!(serde_json::to_string(&SearchHotKey::K).unwrap(), "\"k\"");
    }

    proptest! {
        #[test]
        fn prop_hotkey_accepts_exactly_lowercase_ascii(c in any::<char>()) {
            prop_assert_eq!(SearchHotKey::from_char(c).is_ok(), c.is_ascii_lowercase());
        }
    }
}
