use gloo_net::http::Request;

use crate::content::SiteContent;
use crate::error::ContentError;

/// Relative so it resolves under whatever public URL Trunk deploys to.
pub const SITE_JSON_URL: &str = "./site.json";

pub async fn load_site_content(url: &str) -> Result<SiteContent, ContentError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(ContentError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let body = resp.text().await?;
    SiteContent::from_json(&body)
}
