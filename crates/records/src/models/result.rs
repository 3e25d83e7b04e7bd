/// Rating category code on a cross-table row. Only regular-rated sections
/// count toward the national-master games floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingType {
    Regular,
    Quick,
    Blitz,
    Other,
}

impl RatingType {
    /// Maps the single-letter codes used by the federation exports. Unknown
    /// codes are kept as `Other` rather than rejected.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "R" => Self::Regular,
            "Q" => Self::Quick,
            "B" => Self::Blitz,
            _ => Self::Other,
        }
    }

    pub fn is_regular(self) -> bool {
        matches!(self, Self::Regular)
    }
}

/// One parsed row of the results cross-table. Numeric fields that failed to
/// parse arrive here already collapsed to their sentinels (zero games, absent
/// ratings), so downstream accounting never sees a malformed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub cfc_id: String,
    pub event_id: String,
    pub rating_type: RatingType,
    pub games_played: u32,
    pub performance: Option<i32>,
    pub indicator: Option<i32>,
    pub score: String,
    pub post_rating: Option<i32>,
}
