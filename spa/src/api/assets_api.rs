use gloo_net::http::Request;

/// Best-effort fetch of a trusted static fragment. Every failure collapses to
/// `None`: a missing fragment must never break the page.
pub async fn fetch_fragment(path: &str) -> Option<String> {
    let response = match Request::get(path).send().await {
        Ok(response) => response,
        Err(error) => {
            log::debug!("Fragment fetch failed, path={path}, error={error}");
            return None;
        }
    };
    if !response.ok() {
        log::debug!(
            "Fragment fetch returned status={status}, path={path}",
            status = response.status()
        );
        return None;
    }
    response.text().await.ok()
}
