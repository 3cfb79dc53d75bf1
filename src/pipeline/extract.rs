use std::collections::HashSet;
use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::browser::Session;
use crate::config::Config;
use crate::models::Candidate;
use crate::pipeline::navigation::NavigationGuard;

/// Result cards step by this many listings per page on the site.
pub const PAGE_SIZE: usize = 18;

const CARD_SELECTOR: &str = ".AdCardSrp__Link";
const PRICE_SELECTOR: &str = ".css-dlcfcd";

/// Paginated crawl of the search results, producing the URLs of listings
/// priced strictly below the configured ceiling.
pub struct ListingExtractor {
    config: Config,
    pub wait: Duration,
}

impl ListingExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            wait: Duration::from_secs(5),
        }
    }

    /// Walk offsets 0, 18, 36, ... until `page_budget` listings have been
    /// requested. A page whose results container never shows up
    /// contributes nothing and the crawl moves on; no failure here aborts
    /// the extraction.
    pub async fn extract(&self, session: &dyn Session, guard: &NavigationGuard) -> Vec<String> {
        let mut urls = HashSet::new();
        let mut offset = 0;

        while offset < self.config.page_budget {
            let page_url = self.config.search_url(offset);
            guard.goto(session, &page_url).await;

            match session.wait_for_selector(CARD_SELECTOR, self.wait).await {
                Ok(()) => match session.content().await {
                    Ok(html) => {
                        let candidates = parse_cards(&html, &self.config.base_url);
                        debug!("Offset {offset}: {} priced cards", candidates.len());
                        for candidate in candidates {
                            if candidate.price < self.config.max_price {
                                urls.insert(candidate.url);
                            }
                        }
                    }
                    Err(e) => warn!("⚠️ Error reading results page at offset {offset}: {e:#}"),
                },
                Err(e) => warn!("⚠️ No results container at offset {offset}: {e:#}"),
            }

            offset += PAGE_SIZE;
        }

        info!("🔍 Extracted {} listings under {} kr.", urls.len(), self.config.max_price);
        urls.into_iter().collect()
    }
}

/// Pull `(url, price)` pairs out of a results page. Cards without a
/// readable price element are skipped, never treated as zero-priced.
pub fn parse_cards(html: &str, base_url: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse(CARD_SELECTOR).unwrap();
    let price_selector = Selector::parse(PRICE_SELECTOR).unwrap();

    let mut candidates = Vec::new();
    for card in document.select(&card_selector) {
        let Some(price_element) = card.select(&price_selector).next() else {
            continue;
        };
        let price_text: String = price_element.text().collect();
        let Some(price) = parse_price(&price_text) else {
            continue;
        };
        if let Some(href) = card.value().attr("href") {
            candidates.push(Candidate {
                url: format!("{base_url}{href}"),
                price,
            });
        }
    }
    candidates
}

/// "12.500 kr." -> 12500. Currency suffix and thousands separators are
/// formatting only; anything with no digits is unreadable.
fn parse_price(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.boligportal.dk";

    fn card(href: &str, price: &str) -> String {
        format!(
            r#"<a class="AdCardSrp__Link" href="{href}"><span class="css-dlcfcd">{price}</span></a>"#
        )
    }

    #[test]
    fn parses_danish_price_formatting() {
        assert_eq!(parse_price("12.500 kr."), Some(12_500));
        assert_eq!(parse_price(" 9.950 kr. "), Some(9_950));
        assert_eq!(parse_price("875 kr."), Some(875));
    }

    #[test]
    fn price_without_digits_is_unreadable() {
        assert_eq!(parse_price("Pris på forespørgsel"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn cards_get_base_origin_prefixed() {
        let html = card("/lejebolig/id-123", "12.500 kr.");
        let candidates = parse_cards(&html, BASE);
        assert_eq!(
            candidates,
            vec![Candidate {
                url: format!("{BASE}/lejebolig/id-123"),
                price: 12_500,
            }]
        );
    }

    #[test]
    fn card_without_price_element_is_skipped() {
        let html = format!(
            r#"<a class="AdCardSrp__Link" href="/lejebolig/no-price"></a>{}"#,
            card("/lejebolig/priced", "8.000 kr.")
        );
        let candidates = parse_cards(&html, BASE);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, format!("{BASE}/lejebolig/priced"));
    }

    #[test]
    fn card_without_href_is_skipped() {
        let html = r#"<a class="AdCardSrp__Link"><span class="css-dlcfcd">8.000 kr.</span></a>"#;
        assert!(parse_cards(html, BASE).is_empty());
    }
}
