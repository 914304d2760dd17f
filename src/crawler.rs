// src/crawler.rs
use crate::html;
use crate::session::Session;
use crate::types::CrawlOutcome;
use crate::utils;
use log::{debug, info};
use std::collections::{HashSet, VecDeque};
use url::Url;

struct CrawlTarget {
    url: Url,
    depth: usize,
}

/// Breadth-first crawler scoped to the seed's authority.
pub struct Crawler {
    session: Session,
    max_depth: usize,
}

impl Crawler {
    pub fn new(session: Session, max_depth: usize) -> Self {
        Crawler { session, max_depth }
    }

    /// Crawl outward from `seed`, following same-authority links up to
    /// `max_depth` hops away. Every dequeued URL lands in the outcome's
    /// `visited` list exactly once, in discovery order; URLs whose fetch
    /// errored or came back non-2xx also land in `failed`. Fetch errors
    /// never abort the crawl.
    ///
    /// Membership in the frontier is decided at enqueue time: a link is
    /// pushed only if it is same-authority, within the depth bound, and
    /// not already seen. The frontier therefore never holds duplicates.
    pub async fn crawl(&self, seed: &Url) -> CrawlOutcome {
        let mut frontier: VecDeque<CrawlTarget> = VecDeque::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut outcome = CrawlOutcome::default();

        seen.insert(seed.as_str().to_string());
        frontier.push_back(CrawlTarget {
            url: seed.clone(),
            depth: 0,
        });

        while let Some(target) = frontier.pop_front() {
            info!("Crawling: {} (depth {})", target.url, target.depth);
            outcome.visited.push(target.url.as_str().to_string());

            let page = match self.session.fetch_page(&target.url).await {
                Ok(page) => page,
                Err(e) => {
                    debug!("Failed to fetch {}: {}", target.url, e);
                    outcome.failed.push(target.url.as_str().to_string());
                    continue;
                }
            };

            if !page.is_success() {
                debug!("Failed to fetch {}: HTTP {}", target.url, page.status);
                outcome.failed.push(target.url.as_str().to_string());
                continue;
            }

            // Children would exceed the bound, skip extraction entirely.
            if target.depth >= self.max_depth {
                continue;
            }

            for link in html::extract_links(&target.url, &page.body) {
                if !utils::same_authority(seed, &link) {
                    continue;
                }
                if seen.insert(link.as_str().to_string()) {
                    frontier.push_back(CrawlTarget {
                        url: link,
                        depth: target.depth + 1,
                    });
                }
            }
        }

        outcome
    }
}
