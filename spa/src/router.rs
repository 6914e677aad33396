use wasm_bindgen::JsValue;

/// The five views, resolved off `window.location`. The session id stays a
/// query-string parameter (`/session?id=...`) so a missing id remains a
/// distinct, directly reportable state.
#[derive(Clone, PartialEq, Debug)]
pub enum Page {
    Login,
    Register,
    Sessions,
    SessionDetail { id: Option<String> },
    Reservations,
}

impl Page {
    /// Unknown paths land on the sessions list when a token is present, on
    /// login otherwise.
    pub fn from_parts(path: &str, query: &str, logged: bool) -> Page {
        match path.trim_end_matches('/') {
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/sessions" => Page::Sessions,
            "/session" => Page::SessionDetail {
                id: query_param(query, "id"),
            },
            "/reservations" => Page::Reservations,
            _ => {
                if logged {
                    Page::Sessions
                } else {
                    Page::Login
                }
            }
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Page::Login => "/login".to_owned(),
            Page::Register => "/register".to_owned(),
            Page::Sessions => "/sessions".to_owned(),
            Page::SessionDetail { id: Some(id) } => format!("/session?id={id}"),
            Page::SessionDetail { id: None } => "/session".to_owned(),
            Page::Reservations => "/reservations".to_owned(),
        }
    }
}

// Session ids are opaque UUIDs, no percent-decoding is involved.
fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

/// Resolve the page the browser is currently on.
pub fn current(logged: bool) -> Page {
    let location = web_sys::window().expect("window should exist").location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Page::from_parts(&path, &query, logged)
}

/// Record a navigation in the browser history without reloading.
pub fn push(page: &Page) {
    let window = web_sys::window().expect("window should exist");
    let history = window.history().expect("history should exist");
    if let Err(error) = history.push_state_with_url(&JsValue::NULL, "", Some(&page.to_path())) {
        log::warn!("Fail to push history entry, error={error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Page::from_parts("/login", "", false), Page::Login);
        assert_eq!(Page::from_parts("/register", "", false), Page::Register);
        assert_eq!(Page::from_parts("/sessions", "", true), Page::Sessions);
        assert_eq!(Page::from_parts("/reservations", "", true), Page::Reservations);
    }

    #[test]
    fn session_detail_picks_the_id_from_the_query_string() {
        let page = Page::from_parts("/session", "?id=7b4e3c62", true);
        assert_eq!(
            page,
            Page::SessionDetail {
                id: Some("7b4e3c62".to_owned())
            }
        );
    }

    #[test]
    fn session_detail_without_id_is_a_distinct_state() {
        assert_eq!(
            Page::from_parts("/session", "", true),
            Page::SessionDetail { id: None }
        );
        assert_eq!(
            Page::from_parts("/session", "?id=", true),
            Page::SessionDetail { id: None }
        );
    }

    #[test]
    fn the_id_survives_other_query_parameters() {
        let page = Page::from_parts("/session", "?utm=x&id=abc&lang=es", true);
        assert_eq!(
            page,
            Page::SessionDetail {
                id: Some("abc".to_owned())
            }
        );
    }

    #[test]
    fn unknown_paths_depend_on_the_token() {
        assert_eq!(Page::from_parts("/", "", true), Page::Sessions);
        assert_eq!(Page::from_parts("/", "", false), Page::Login);
        assert_eq!(Page::from_parts("/pages/old.html", "", false), Page::Login);
    }

    #[test]
    fn paths_round_trip() {
        let pages = [
            Page::Login,
            Page::Register,
            Page::Sessions,
            Page::SessionDetail {
                id: Some("abc".to_owned()),
            },
            Page::Reservations,
        ];
        for page in pages {
            let path = page.to_path();
            let (path, query) = path.split_once('?').unwrap_or((path.as_str(), ""));
            assert_eq!(Page::from_parts(path, query, true), page);
        }
    }
}
