//! Report document model: the text and tone of every cell, built from a
//! finished session before any PDF drawing happens.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use survey::{Catalog, InterestLevel, Response, RolePreference, Session};

pub const IDENTITY_PLACEHOLDER: &str = "_______";
pub const NOT_APPLICABLE: &str = "-";
pub const COLUMN_HEADINGS: [&str; 6] = ["类别", "项目", "尝试过", "评分", "意愿程度", "倾向 (提供/接受)"];

/// Text color of a cell, RGB in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Red,
    Orange,
    Green,
    Gray,
}

impl Tone {
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Plain => (20, 20, 20),
            Self::Red => (220, 38, 38),
            Self::Orange => (217, 119, 6),
            Self::Green => (22, 163, 74),
            Self::Gray => (156, 163, 175),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Plain, bold: false }
    }

    fn toned(text: impl Into<String>, (tone, bold): (Tone, bool)) -> Self {
        Self { text: text.into(), tone, bold }
    }
}

/// One table row, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub cells: [Cell; 6],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub hard_limits: usize,
    pub enthusiastic: usize,
}

impl Summary {
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            "统计摘要:".to_owned(),
            format!("- 绝对不行 (Hard Limits): {}", self.hard_limits),
            format!("- 非常渴望/爱死了: {}", self.enthusiastic),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    pub title: String,
    /// `(label, value)` pairs for the line under the title.
    pub identity: [(&'static str, String); 3],
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
}

impl ReportModel {
    /// One row per catalog item, in catalog order.
    #[must_use]
    pub fn build(title: &str, catalog: &Catalog, session: &Session) -> Self {
        let answers = session.answers();
        let rows = answers
            .in_catalog_order(catalog)
            .map(|(item, response)| ReportRow {
                cells: [
                    Cell::plain(item.category.clone()),
                    Cell::plain(item.label.clone()),
                    Cell::plain(tried_text(response.tried)),
                    Cell::toned(rating_text(&response), rating_tone(&response)),
                    Cell::toned(interest_text(response.interest), interest_tone(response.interest)),
                    Cell::plain(role_text(response.role)),
                ],
            })
            .collect();
        Self {
            title: title.to_owned(),
            identity: [
                ("昵称", identity_or_placeholder(&session.identity_a)),
                ("伴侣", identity_or_placeholder(&session.identity_b)),
                ("日期", session.date.clone()),
            ],
            rows,
            summary: Summary {
                hard_limits: answers.count_interest(InterestLevel::HardLimit),
                enthusiastic: answers.count_interest(InterestLevel::Enthusiastic),
            },
        }
    }
}

#[must_use]
pub fn identity_or_placeholder(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { IDENTITY_PLACEHOLDER.to_owned() } else { trimmed.to_owned() }
}

#[must_use]
pub fn tried_text(tried: bool) -> &'static str {
    if tried { "是" } else { "否" }
}

#[must_use]
pub fn rating_text(response: &Response) -> String {
    response
        .shown_rating()
        .map_or_else(|| NOT_APPLICABLE.to_owned(), |rating| rating.to_string())
}

#[must_use]
pub fn interest_text(level: Option<InterestLevel>) -> &'static str {
    match level {
        None => NOT_APPLICABLE,
        Some(InterestLevel::HardLimit) => "绝对不行",
        Some(InterestLevel::NoInterest) => "没兴趣",
        Some(InterestLevel::Neutral) => "中立",
        Some(InterestLevel::Curious) => "有点好奇",
        Some(InterestLevel::Interested) => "想尝试",
        Some(InterestLevel::Enthusiastic) => "爱死了",
    }
}

#[must_use]
pub fn role_text(role: Option<RolePreference>) -> &'static str {
    match role {
        None => NOT_APPLICABLE,
        Some(RolePreference::Dominant) => "提供 (Dom)",
        Some(RolePreference::Submissive) => "接受 (Sub)",
        Some(RolePreference::Switch) => "Switch",
        Some(RolePreference::None) => "N/A",
    }
}

/// Tone and weight for the rating cell; untried rows stay plain.
#[must_use]
pub fn rating_tone(response: &Response) -> (Tone, bool) {
    match response.shown_rating() {
        None => (Tone::Plain, false),
        Some(0..=2) => (Tone::Red, false),
        Some(3) => (Tone::Orange, false),
        Some(_) => (Tone::Green, true),
    }
}

#[must_use]
pub fn interest_tone(level: Option<InterestLevel>) -> (Tone, bool) {
    match level {
        Some(InterestLevel::HardLimit) => (Tone::Red, true),
        Some(InterestLevel::NoInterest) => (Tone::Gray, false),
        Some(InterestLevel::Curious) => (Tone::Orange, false),
        Some(InterestLevel::Interested | InterestLevel::Enthusiastic) => (Tone::Green, true),
        Some(InterestLevel::Neutral) | None => (Tone::Plain, false),
    }
}
