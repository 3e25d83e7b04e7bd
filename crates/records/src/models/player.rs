use chrono::NaiveDate;
use serde::Serialize;

/// One row of the federation's player export, reduced to the fields the
/// derived datasets read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Player {
    pub cfc_id: String,
    pub regular_rating: Option<i32>,
    pub expiry: Option<NaiveDate>,
}

impl Player {
    /// A player only enters the qualification accounting with a positive
    /// regular rating. Zero and absent ratings both mean unrated.
    pub fn has_regular_rating(&self) -> bool {
        self.regular_rating.is_some_and(|rating| rating > 0)
    }

    /// Membership is valid through the expiry date itself.
    pub fn is_active_on(&self, as_of: NaiveDate) -> bool {
        self.expiry.is_some_and(|expiry| expiry >= as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(rating: Option<i32>, expiry: Option<&str>) -> Player {
        Player {
            cfc_id: "100001".to_string(),
            regular_rating: rating,
            expiry: expiry.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_has_regular_rating() {
        assert!(player(Some(1500), None).has_regular_rating());
        assert!(!player(Some(0), None).has_regular_rating());
        assert!(!player(Some(-1), None).has_regular_rating());
        assert!(!player(None, None).has_regular_rating());
    }

    #[test]
    fn test_is_active_on_expiry_day() {
        let as_of = "2026-01-31".parse().unwrap();
        assert!(player(None, Some("2026-01-31")).is_active_on(as_of));
        assert!(player(None, Some("2026-02-01")).is_active_on(as_of));
        assert!(!player(None, Some("2026-01-30")).is_active_on(as_of));
        assert!(!player(None, None).is_active_on(as_of));
    }
}
