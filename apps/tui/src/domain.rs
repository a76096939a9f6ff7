use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no month matches '{0}'")]
    UnknownMonth(String),
    #[error("no slide matches '{0}'")]
    UnknownSlide(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Large,
    Medium,
}

impl CardSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// One month of the radial timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub display_month: &'static str,
    pub short_label: &'static str,
    /// Position on the ring in tick units (0..=180).
    pub angle_degree: u16,
    pub card_size: CardSize,
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static [Stat],
    pub emoji: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideId {
    Intro,
    Journey,
    SearchHabits,
    Impact,
    FunStats,
    Archetype,
    UsageOverview,
    Outro,
}

impl SlideId {
    pub const ALL: [Self; 8] = [
        Self::Intro,
        Self::Journey,
        Self::SearchHabits,
        Self::Impact,
        Self::FunStats,
        Self::Archetype,
        Self::UsageOverview,
        Self::Outro,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Journey => "journey",
            Self::SearchHabits => "search-habits",
            Self::Impact => "impact",
            Self::FunStats => "fun-stats",
            Self::Archetype => "archetype",
            Self::UsageOverview => "usage-overview",
            Self::Outro => "outro",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|slide| *slide == self)
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|slide| slide.as_str() == value)
    }

    /// Exact name first, then the best fuzzy match.
    pub fn resolve(query: &str) -> Result<Self, LookupError> {
        if let Some(slide) = Self::parse(query) {
            return Ok(slide);
        }
        best_match(
            query,
            Self::ALL.iter().map(|slide| (*slide, slide.as_str())),
        )
        .ok_or_else(|| LookupError::UnknownSlide(query.to_string()))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Journey => "Your Journey",
            Self::SearchHabits => "Search Habits",
            Self::Impact => "Impact",
            Self::FunStats => "Favorites",
            Self::Archetype => "Archetype",
            Self::UsageOverview => "Usage Overview",
            Self::Outro => "Outro",
        }
    }
}

/// Resolves a month name ("sep", "September", "septmber") to its timeline index.
pub fn resolve_month(entries: &[TimelineEntry], query: &str) -> Result<usize, LookupError> {
    let needle = query.trim().to_lowercase();
    if let Some(index) = entries.iter().position(|entry| {
        entry.id == needle
            || entry.short_label.to_lowercase() == needle
            || entry.display_month.to_lowercase() == needle
    }) {
        return Ok(index);
    }

    best_match(
        &needle,
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.display_month)),
    )
    .ok_or_else(|| LookupError::UnknownMonth(query.to_string()))
}

fn best_match<T>(query: &str, choices: impl Iterator<Item = (T, &'static str)>) -> Option<T> {
    let matcher = SkimMatcherV2::default();
    choices
        .filter_map(|(value, name)| {
            matcher
                .fuzzy_match(name, query.trim())
                .map(|score| (score, value))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::timeline::TIMELINE;

    #[test]
    fn slide_round_trips_through_index_and_name() {
        for (index, slide) in SlideId::ALL.iter().enumerate() {
            assert_eq!(SlideId::from_index(index), Some(*slide));
            assert_eq!(slide.index(), index);
            assert_eq!(SlideId::parse(slide.as_str()), Some(*slide));
        }
        assert_eq!(SlideId::from_index(8), None);
    }

    #[test]
    fn slide_resolves_fuzzy_names() {
        assert_eq!(SlideId::resolve("journey"), Ok(SlideId::Journey));
        assert_eq!(SlideId::resolve("habits"), Ok(SlideId::SearchHabits));
        assert_eq!(SlideId::resolve("usage"), Ok(SlideId::UsageOverview));
        assert_eq!(
            SlideId::resolve("zzz"),
            Err(LookupError::UnknownSlide("zzz".to_string()))
        );
    }

    #[test]
    fn month_resolves_short_long_and_fuzzy_names() {
        assert_eq!(resolve_month(&TIMELINE, "sep"), Ok(8));
        assert_eq!(resolve_month(&TIMELINE, "September"), Ok(8));
        assert_eq!(resolve_month(&TIMELINE, " DEC "), Ok(11));
        assert_eq!(resolve_month(&TIMELINE, "febrary"), Ok(1));
        assert!(matches!(
            resolve_month(&TIMELINE, "qqq"),
            Err(LookupError::UnknownMonth(_))
        ));
    }
}
