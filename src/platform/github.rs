//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PrRef, PrState, PullRequestMetadata};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

// GraphQL response types for the pull request query

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct PrQueryData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    pull_request: Option<PrNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrNode {
    state: String,
    maintainer_can_modify: bool,
    viewer_did_author: bool,
    head_ref_oid: String,
    head_ref: Option<RefNode>,
    base_ref: Option<RefNode>,
}

#[derive(Deserialize)]
struct RefNode {
    name: String,
    repository: RefRepositoryNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefRepositoryNode {
    url: String,
    name_with_owner: String,
}

impl From<RefNode> for PrRef {
    fn from(node: RefNode) -> Self {
        Self {
            name: node.name,
            repo_url: node.repository.url,
            repo_full_name: node.repository.name_with_owner,
        }
    }
}

const PR_METADATA_QUERY: &str = r"
    query PullRequestMetadata($owner: String!, $name: String!, $number: Int!) {
        repository(owner: $owner, name: $name) {
            pullRequest(number: $number) {
                state
                maintainerCanModify
                viewerDidAuthor
                headRefOid
                headRef {
                    name
                    repository {
                        url
                        nameWithOwner
                    }
                }
                baseRef {
                    name
                    repository {
                        url
                        nameWithOwner
                    }
                }
            }
        }
    }
";

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// A custom host routes API calls to a GitHub Enterprise installation.
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref host) = config.host {
            let base_url = format!("https://{host}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn pr_metadata(&self, pr_number: u64) -> Result<PullRequestMetadata> {
        debug!(pr_number, "fetching PR metadata");

        let response: GraphQlResponse<PrQueryData> = self
            .client
            .graphql(&serde_json::json!({
                "query": PR_METADATA_QUERY,
                "variables": {
                    "owner": self.config.owner,
                    "name": self.config.repo,
                    "number": pr_number,
                },
            }))
            .await
            .map_err(|e| Error::GitHubApi(format!("GraphQL query failed: {e}")))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GitHubApi(format!(
                "GraphQL error: {}",
                messages.join(", ")
            )));
        }

        let pr = response
            .data
            .and_then(|d| d.repository)
            .and_then(|r| r.pull_request)
            .ok_or(Error::PrNotFound(pr_number))?;

        let state = match pr.state.as_str() {
            "OPEN" => PrState::Open,
            "MERGED" => PrState::Merged,
            _ => PrState::Closed,
        };

        // A deleted head branch leaves headRef null; nothing to rebase then
        let head_ref = pr.head_ref.ok_or_else(|| {
            Error::GitHubApi(format!("PR #{pr_number} has no head ref (branch deleted?)"))
        })?;
        let base_ref = pr.base_ref.ok_or_else(|| {
            Error::GitHubApi(format!("PR #{pr_number} has no base ref"))
        })?;

        let metadata = PullRequestMetadata {
            state,
            maintainer_can_modify: pr.maintainer_can_modify,
            viewer_did_author: pr.viewer_did_author,
            head_ref_oid: pr.head_ref_oid,
            head_ref: head_ref.into(),
            base_ref: base_ref.into(),
        };

        debug!(
            pr_number,
            state = %metadata.state,
            head_ref_oid = %metadata.head_ref_oid,
            "fetched PR metadata"
        );
        Ok(metadata)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
