//! Picks the glyph shown in compact day cells

use crate::reservation::ReservationRecord;

/// The keywords of the hall's regular activities, with their glyph.
/// Order matters: the first keyword found wins
pub const DEFAULT_KEYWORDS: &[(&str, &str)] = &[
    ("サロン", "🪑"),
    ("クラブ", "🌺"),
    ("体操", "👭"),
    ("カフェ", "🍵"),
    ("イベント", "🎉"),
];

/// Glyph for reservations that match no keyword
pub const DEFAULT_GLYPH: &str = "✏️";

/// Maps a reservation to a single glyph, by looking for keywords in its texts.
///
/// Texts are scanned in display order, and for each text the keywords are tried in table order (text-major, keyword-minor).
/// Matching is a case-sensitive substring search.
#[derive(Clone, Debug)]
pub struct IconClassifier {
    keywords: Vec<(String, String)>,
    default_glyph: String,
}

impl IconClassifier {
    pub fn new<K, G>(keywords: impl IntoIterator<Item = (K, G)>, default_glyph: &str) -> Self
    where
        K: ToString,
        G: ToString,
    {
        Self {
            keywords: keywords.into_iter().map(|(k, g)| (k.to_string(), g.to_string())).collect(),
            default_glyph: default_glyph.to_string(),
        }
    }

    pub fn classify(&self, record: &ReservationRecord) -> &str {
        for text in record.texts() {
            if let Some(glyph) = self.match_text(text) {
                return glyph;
            }
        }
        &self.default_glyph
    }

    fn match_text(&self, text: &str) -> Option<&str> {
        self.keywords.iter()
            .find(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|(_, glyph)| glyph.as_str())
    }

    pub fn default_glyph(&self) -> &str {
        &self.default_glyph
    }
}

impl Default for IconClassifier {
    fn default() -> Self {
        let default_glyph = crate::config::read(&crate::config::DEFAULT_GLYPH);
        Self::new(DEFAULT_KEYWORDS.iter().copied(), &default_glyph)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IconClassifier {
        IconClassifier::new(DEFAULT_KEYWORDS.iter().copied(), DEFAULT_GLYPH)
    }

    #[test]
    fn single() {
        let c = classifier();
        assert_eq!(c.classify(&ReservationRecord::Single("朝の体操".to_string())), "👭");
        assert_eq!(c.classify(&ReservationRecord::Single("理事会".to_string())), DEFAULT_GLYPH);
    }

    #[test]
    fn keyword_order_breaks_ties() {
        // Both keywords are in the same text: the table order decides
        let c = classifier();
        assert_eq!(c.classify(&ReservationRecord::Single("カフェ＆サロン".to_string())), "🪑");
    }

    #[test]
    fn entries_are_scanned_first() {
        // "サロン" comes first in the table, but "カフェ" comes first in the list
        let c = classifier();
        let list = ReservationRecord::List(vec!["会議".to_string(), "カフェ".to_string(), "サロン".to_string()]);
        assert_eq!(c.classify(&list), "🍵");

        let table = ReservationRecord::TimeTable(vec![
            ("14:00".to_string(), "イベント".to_string()),
            ("10:00".to_string(), "クラブ".to_string()),
        ]);
        assert_eq!(c.classify(&table), "🎉");
    }

    #[test]
    fn labels_are_not_scanned() {
        let c = classifier();
        let table = ReservationRecord::TimeTable(vec![("体操".to_string(), "会議".to_string())]);
        assert_eq!(c.classify(&table), DEFAULT_GLYPH);
    }

    #[test]
    fn case_sensitive() {
        let c = IconClassifier::new(vec![("Yoga", "🧘")], "?");
        assert_eq!(c.classify(&ReservationRecord::Single("yoga".to_string())), "?");
        assert_eq!(c.classify(&ReservationRecord::Single("Yoga class".to_string())), "🧘");
        assert_eq!(c.classify(&ReservationRecord::List(vec![])), "?");
    }

    #[test]
    fn deterministic() {
        let c = classifier();
        let record = ReservationRecord::List(vec!["クラブ".to_string(), "体操".to_string()]);
        let first = c.classify(&record).to_string();
        c.classify(&ReservationRecord::Single("カフェ".to_string()));
        assert_eq!(c.classify(&record), first);
    }
}
