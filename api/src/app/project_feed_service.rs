//! Project feed service
//!
//! Fetches the owner's public repositories, drops the ones that are not
//! portfolio material, and turns the rest into project cards.

use std::sync::Arc;

use crate::domain::entities::{Category, CategoryFilter, ProjectCard, RepositorySummary};
use crate::domain::ports::{HostingClient, REPOS_PER_PAGE};
use crate::error::HostingError;

/// Outcome of one feed load, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFeed {
    /// Cards in the provider's update-recency order (possibly empty)
    Loaded(Vec<ProjectCard>),
    /// The listing loaded but no card falls in the requested category
    NoMatches { category: Category },
    /// The listing call failed; `reason` is shown inline
    Unavailable { reason: String },
}

impl ProjectFeed {
    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            ProjectFeed::Loaded(cards) => cards,
            ProjectFeed::NoMatches { .. } | ProjectFeed::Unavailable { .. } => &[],
        }
    }
}

/// Service that builds the project feed for a fixed owner
pub struct ProjectFeedService<HC>
where
    HC: HostingClient,
{
    hosting: Arc<HC>,
    owner: String,
}

impl<HC> ProjectFeedService<HC>
where
    HC: HostingClient,
{
    pub fn new(hosting: Arc<HC>, owner: String) -> Self {
        Self { hosting, owner }
    }

    /// One listing call, filtered down to showcase repositories.
    ///
    /// Only the first page is requested, so at most 100 repositories come back.
    pub async fn fetch_repositories(&self) -> Result<Vec<RepositorySummary>, HostingError> {
        let repos = self.hosting.list_user_repos(&self.owner).await?;
        let fetched = repos.len();

        let filtered: Vec<RepositorySummary> = repos
            .into_iter()
            .filter(RepositorySummary::is_showcase)
            .take(REPOS_PER_PAGE)
            .collect();

        tracing::debug!(
            owner = %self.owner,
            fetched,
            kept = filtered.len(),
            "Filtered repository listing"
        );

        Ok(filtered)
    }

    /// Load the feed, degrading to `Unavailable` instead of failing
    pub async fn load(&self, filter: CategoryFilter) -> ProjectFeed {
        match self.fetch_repositories().await {
            Ok(repos) => {
                let cards: Vec<ProjectCard> = repos
                    .iter()
                    .map(ProjectCard::from)
                    .filter(|card| filter.matches(card.category))
                    .collect();
                tracing::info!("Loaded {} projects from GitHub", cards.len());
                match filter {
                    CategoryFilter::Only(category) if cards.is_empty() => {
                        ProjectFeed::NoMatches { category }
                    }
                    _ => ProjectFeed::Loaded(cards),
                }
            }
            Err(e) => {
                tracing::warn!(owner = %self.owner, "Error fetching GitHub projects: {}", e);
                ProjectFeed::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_repo, test_repo_described, MockHostingClient};

    fn service(mock: MockHostingClient) -> (ProjectFeedService<MockHostingClient>, Arc<MockHostingClient>) {
        let mock = Arc::new(mock);
        (ProjectFeedService::new(mock.clone(), "octo".to_string()), mock)
    }

    #[tokio::test]
    async fn forks_archived_and_pages_sites_are_dropped() {
        let mut fork = test_repo("react-fork");
        fork.fork = true;
        let mut archived = test_repo("old-thing");
        archived.archived = true;

        let (service, _) = service(MockHostingClient::new().with_repos(vec![
            test_repo("keeper"),
            fork,
            archived,
            test_repo("octo.github.io"),
            test_repo("another"),
        ]));

        let repos = service.fetch_repositories().await.unwrap();

        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["keeper", "another"]);
    }

    #[tokio::test]
    async fn fetch_uses_configured_owner_once() {
        let (service, mock) = service(MockHostingClient::new());

        service.fetch_repositories().await.unwrap();

        assert_eq!(mock.list_calls(), vec!["octo".to_string()]);
    }

    #[tokio::test]
    async fn listing_failure_surfaces_status() {
        let (service, _) = service(MockHostingClient::new().failing_with(503));

        let err = service.fetch_repositories().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn load_keeps_provider_order_and_classifies() {
        let (service, _) = service(MockHostingClient::new().with_repos(vec![
            test_repo_described("shop", "A Vue storefront"),
            test_repo("tetris-game"),
            test_repo("dotfiles"),
        ]));

        let feed = service.load(CategoryFilter::All).await;

        let categories: Vec<Category> = feed.cards().iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![Category::Web, Category::Gamedev, Category::Other]
        );
    }

    #[tokio::test]
    async fn load_applies_category_filter() {
        let (service, _) = service(MockHostingClient::new().with_repos(vec![
            test_repo_described("shop", "A Vue storefront"),
            test_repo("tetris-game"),
        ]));

        let feed = service.load(CategoryFilter::Only(Category::Gamedev)).await;

        assert_eq!(feed.cards().len(), 1);
        assert_eq!(feed.cards()[0].name, "tetris-game");
    }

    #[tokio::test]
    async fn filter_matching_nothing_is_not_a_load_failure() {
        let (service, _) = service(MockHostingClient::new().with_repos(vec![
            test_repo_described("shop", "A Vue storefront"),
        ]));

        let feed = service.load(CategoryFilter::Only(Category::Mobile)).await;

        assert_eq!(
            feed,
            ProjectFeed::NoMatches {
                category: Category::Mobile
            }
        );
        assert!(feed.cards().is_empty());
    }

    #[tokio::test]
    async fn empty_listing_without_filter_stays_loaded() {
        let (service, _) = service(MockHostingClient::new());

        let feed = service.load(CategoryFilter::All).await;

        assert_eq!(feed, ProjectFeed::Loaded(vec![]));
    }

    #[tokio::test]
    async fn load_degrades_on_failure() {
        let (service, _) = service(MockHostingClient::new().failing_with(500));

        let feed = service.load(CategoryFilter::All).await;

        assert_eq!(
            feed,
            ProjectFeed::Unavailable {
                reason: "GitHub API returned 500".to_string()
            }
        );
        assert!(feed.cards().is_empty());
    }
}
