//! Lenient query parameter handling. Out-of-range values fall back to
//! defaults instead of rejecting the request, so avatar URLs always resolve.

use regex::Regex;
use std::sync::LazyLock;

use crate::avatar::{
    styles::voxel::render::{SIZE_DEFAULT, SIZE_MAX, SIZE_MIN},
    RenderOptions,
};

pub const RADIUS_MAX: u32 = 50;
pub const SEED_MAX_UTF16: usize = 200;
pub const DEFAULT_SEED: &str = "default";

pub static CATEGORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

pub static ASSET_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.-]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarParams {
    pub seed: String,
    pub size: u32,
    pub radius: u32,
    pub bg: Option<String>,
    pub palette: Option<String>,
}

impl AvatarParams {
    /// Build from the raw query pairs. A repeated key keeps its first value.
    pub fn from_query(query: &[(String, String)]) -> Self {
        let get = |key: &str| {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let seed = get("seed")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEED);

        let size = get("size")
            .and_then(|raw| parse_int(raw))
            .filter(|n| (i64::from(SIZE_MIN)..=i64::from(SIZE_MAX)).contains(n))
            .map_or(SIZE_DEFAULT, |n| n as u32);

        let radius = get("radius")
            .and_then(|raw| parse_int(raw))
            .filter(|n| (0..=i64::from(RADIUS_MAX)).contains(n))
            .map_or(0, |n| n as u32);

        let non_empty = |key: &str| get(key).filter(|v| !v.is_empty()).map(String::from);

        Self {
            seed: truncate_utf16(seed, SEED_MAX_UTF16).to_string(),
            size,
            radius,
            bg: non_empty("bg"),
            palette: non_empty("palette"),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            size: Some(self.size),
            radius: Some(self.radius),
        }
    }
}

/// Leading decimal integer of `raw`, ignoring trailing garbage (`"12px"` is 12).
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// Longest prefix of `s` spanning at most `max` UTF-16 code units, never
/// splitting a character.
pub fn truncate_utf16(s: &str, max: usize) -> &str {
    let mut units = 0;
    for (idx, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max {
            return &s[..idx];
        }
    }
    s
}

pub fn sanitize_category(category: &str) -> String {
    CATEGORY_REGEX.replace_all(category, "").into_owned()
}

/// Sanitised asset file name, with `.png` appended when missing.
pub fn asset_filename(id: &str) -> Option<String> {
    let id = ASSET_ID_REGEX.replace_all(id, "");
    if id.is_empty() {
        return None;
    }

    if id.ends_with(".png") {
        Some(id.into_owned())
    } else {
        Some(format!("{}.png", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let params = AvatarParams::from_query(&[]);

        assert_eq!(
            params,
            AvatarParams {
                seed: "default".into(),
                size: 64,
                radius: 0,
                bg: None,
                palette: None,
            }
        );
    }

    #[test]
    fn test_valid_values() {
        let params = AvatarParams::from_query(&query(&[
            ("seed", "  alice  "),
            ("size", "128"),
            ("radius", "25"),
            ("bg", "ffffff"),
        ]));

        assert_eq!(params.seed, "alice");
        assert_eq!(params.size, 128);
        assert_eq!(params.radius, 25);
        assert_eq!(params.bg.as_deref(), Some("ffffff"));
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let cases = [("1", "-1"), ("999", "51"), ("abc", "x"), ("", "")];

        for (size, radius) in cases {
            let params = AvatarParams::from_query(&query(&[("size", size), ("radius", radius)]));
            assert_eq!(params.size, 64, "size {:?}", size);
            assert_eq!(params.radius, 0, "radius {:?}", radius);
        }
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let params = AvatarParams::from_query(&query(&[
            ("seed", "alice"),
            ("size", "32"),
            ("seed", "bob"),
            ("size", "256"),
            ("radius", "5"),
            ("radius", "40"),
        ]));

        assert_eq!(params.seed, "alice");
        assert_eq!(params.size, 32);
        assert_eq!(params.radius, 5);
    }

    #[test]
    fn test_repeated_invalid_first_value_falls_back() {
        let params = AvatarParams::from_query(&query(&[("size", "999"), ("size", "128")]));

        assert_eq!(params.size, 64);
    }

    #[test]
    fn test_blank_seed_uses_default() {
        let params = AvatarParams::from_query(&query(&[("seed", "   ")]));

        assert_eq!(params.seed, "default");
    }

    #[test]
    fn test_seed_truncated() {
        let long = "x".repeat(500);
        let params = AvatarParams::from_query(&query(&[("seed", &long)]));

        assert_eq!(params.seed.len(), 200);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" 12px"), Some(12));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("px12"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_truncate_utf16_keeps_pairs_whole() {
        assert_eq!(truncate_utf16("a👋b", 2), "a");
        assert_eq!(truncate_utf16("a👋b", 3), "a👋");
        assert_eq!(truncate_utf16("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_drops_pair_straddling_limit() {
        let seed = format!("{}👋", "a".repeat(199));

        assert_eq!(truncate_utf16(&seed, SEED_MAX_UTF16), "a".repeat(199));
    }

    #[test]
    fn test_sanitize_category() {
        assert_eq!(sanitize_category("voxel"), "voxel");
        assert_eq!(sanitize_category("../etc"), "etc");
        assert_eq!(sanitize_category("pixel_art-2"), "pixel_art-2");
        assert_eq!(sanitize_category("!!"), "");
    }

    #[test]
    fn test_asset_filename() {
        assert_eq!(asset_filename("12").as_deref(), Some("12.png"));
        assert_eq!(asset_filename("12.png").as_deref(), Some("12.png"));
        assert_eq!(asset_filename("../12").as_deref(), Some("..12.png"));
        assert_eq!(asset_filename("/"), None);
    }
}
