use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    News,
    SocialMedia,
    FinancialData,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::News, Source::SocialMedia, Source::FinancialData];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "news" => Some(Self::News),
            "social_media" => Some(Self::SocialMedia),
            "financial_data" => Some(Self::FinancialData),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::SocialMedia => "social_media",
            Self::FinancialData => "financial_data",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw market data collected during one gathering session, keyed by source.
/// Entries are only ever added or replaced, never removed; the store lives as
/// long as the session that owns it and is passed by reference into each
/// pipeline stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketDataStore {
    records: HashMap<Source, Value>,
}

impl MarketDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: Source, record: Value) {
        self.records.insert(source, record);
    }

    pub fn get(&self, source: Source) -> Option<&Value> {
        self.records.get(&source)
    }

    pub fn contains(&self, source: Source) -> bool {
        self.records.contains_key(&source)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn sources(&self) -> impl Iterator<Item = Source> + '_ {
        self.records.keys().copied()
    }
}
