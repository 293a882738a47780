use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to fetch site content: {0}")]
    Fetch(#[from] gloo_net::Error),

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
