use serde::Serialize;

/// Transient extraction result: a listing URL paired with its advertised
/// monthly rent in DKK. Exists only while a results page is filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub url: String,
    pub price: i64,
}

/// Outcome of one run, consumed by the notifier and then discarded.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub new_listings: Vec<String>,
}

impl RunSummary {
    pub fn new(new_listings: Vec<String>) -> Self {
        Self { new_listings }
    }

    /// Notification lines: one summary line, then one numbered line per
    /// new listing.
    pub fn lines(&self) -> Vec<String> {
        if self.new_listings.is_empty() {
            return vec!["No new listings found.".to_string()];
        }
        let mut lines = vec![format!("Found {} new listings.", self.new_listings.len())];
        for (i, listing) in self.new_listings.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, listing));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_a_single_line() {
        let summary = RunSummary::new(vec![]);
        assert_eq!(summary.lines(), vec!["No new listings found.".to_string()]);
    }

    #[test]
    fn summary_numbers_listings_in_order() {
        let summary = RunSummary::new(vec![
            "https://www.boligportal.dk/a".to_string(),
            "https://www.boligportal.dk/b".to_string(),
        ]);
        assert_eq!(
            summary.lines(),
            vec![
                "Found 2 new listings.".to_string(),
                "1. https://www.boligportal.dk/a".to_string(),
                "2. https://www.boligportal.dk/b".to_string(),
            ]
        );
    }
}
