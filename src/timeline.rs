use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::icon::IconSlot;

pub const TIMELINE_FILE: &str = "timeline.json";

pub static GLOBAL_TIMELINE_CACHE: LazyLock<DashMap<String, Vec<TimelineEntry>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "data"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct TimelineData;

/// One milestone of the history section, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Tailwind gradient stops, e.g. `from-indigo-500 to-purple-500`
    pub color: String,
}

impl TimelineEntry {
    pub fn icon_slot(&self) -> IconSlot {
        IconSlot::resolve(&self.icon)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("Timeline data not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse timeline data: {0}")]
    ParseError(String),
}

pub fn parse_timeline(raw: &[u8]) -> Result<Vec<TimelineEntry>, TimelineError> {
    serde_json::from_slice(raw).map_err(|e| TimelineError::ParseError(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
pub fn get_timeline() -> Result<Vec<TimelineEntry>, TimelineError> {
    let cache = &*GLOBAL_TIMELINE_CACHE;
    if let Some(entries) = cache.get(TIMELINE_FILE) {
        return Ok(entries.clone());
    }
    let file = TimelineData::get(TIMELINE_FILE)
        .ok_or_else(|| TimelineError::NotFound(TIMELINE_FILE.to_string()))?;
    let entries = parse_timeline(&file.data)?;
    log::debug!("loaded {} timeline entries", entries.len());
    cache.insert(TIMELINE_FILE.to_string(), entries.clone());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;

    #[test]
    fn test_parse_keeps_provider_order() {
        let raw = br#"[
            {"year": "2019", "title": "b", "description": "", "icon": "Code", "color": "from-a to-b"},
            {"year": "2017", "title": "a", "description": "", "icon": "Star", "color": "from-c to-d"}
        ]"#;
        let entries = parse_timeline(raw).expect("valid timeline");
        let years = entries.iter().map(|e| e.year.as_str()).collect::<Vec<_>>();
        assert_eq!(years, vec!["2019", "2017"]);
        assert_eq!(entries[0].icon_slot(), IconSlot::Symbol(Icon::Code));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_timeline(b"{\"year\": 1}"),
            Err(TimelineError::ParseError(_))
        ));
        assert!(matches!(
            parse_timeline(br#"[{"year": "2020"}]"#),
            Err(TimelineError::ParseError(_))
        ));
        assert_eq!(parse_timeline(b"[]"), Ok(vec![]));
    }

    #[test]
    fn test_invalid_icon_survives_parsing() {
        let raw = br#"[{"year": "2024", "title": "t", "description": "d", "icon": "NotARealIcon", "color": "from-red-500 to-red-700"}]"#;
        let entries = parse_timeline(raw).expect("icon names are not validated on load");
        assert_eq!(
            entries[0].icon_slot(),
            IconSlot::Invalid("NotARealIcon".to_string())
        );
    }

    #[test]
    fn test_embedded_timeline() {
        let entries = get_timeline().expect("embedded timeline should parse");
        assert!(!entries.is_empty());
        for entry in &entries {
            assert!(
                matches!(entry.icon_slot(), IconSlot::Symbol(_)),
                "unknown icon {} in embedded data",
                entry.icon
            );
            assert!(entry.color.starts_with("from-"));
        }
        // second call is served from the cache
        assert_eq!(get_timeline(), Ok(entries));
        assert!(GLOBAL_TIMELINE_CACHE.contains_key(TIMELINE_FILE));
    }
}
