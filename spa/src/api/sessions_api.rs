use shared::{Session, WaitlistEntry};

use crate::api::client::{ApiClient, ApiError};

pub async fn list(api: &ApiClient) -> Result<Vec<Session>, ApiError> {
    let sessions = api.get::<Vec<Session>>("/sessions").await?;
    log::info!("Api list sessions, count={}", sessions.len());
    Ok(sessions)
}

pub async fn get_by_id(api: &ApiClient, id: &str) -> Result<Session, ApiError> {
    let endpoint = format!("/sessions/{id}");
    let session = api.get::<Session>(&endpoint).await?;
    log::info!("Api get session by id, id={id}");
    Ok(session)
}

/// Direct by-id fetch with a list-and-scan fallback, for backends that do not
/// implement the by-id endpoint.
pub async fn get_or_scan(api: &ApiClient, id: &str) -> Result<Option<Session>, ApiError> {
    match get_by_id(api, id).await {
        Ok(session) => Ok(Some(session)),
        Err(error) => {
            log::warn!("Direct session fetch failed, scanning the list, id={id}, error={error}");
            let sessions = list(api).await?;
            Ok(find_by_id(&sessions, id).cloned())
        }
    }
}

pub fn find_by_id<'a>(sessions: &'a [Session], id: &str) -> Option<&'a Session> {
    sessions
        .iter()
        .find(|session| session.id.to_string().eq_ignore_ascii_case(id))
}

pub async fn join_waitlist(api: &ApiClient, id: &str) -> Result<WaitlistEntry, ApiError> {
    let endpoint = format!("/sessions/{id}/waitlist");
    let entry = api.post::<WaitlistEntry>(&endpoint).await?;
    log::info!(
        "Api join waitlist, session={id}, position={position}",
        position = entry.position
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::SessionStatus;
    use uuid::Uuid;

    fn session(id: &str) -> Session {
        Session {
            id: id.parse().unwrap(),
            class_type_id: Uuid::nil(),
            trainer_id: None,
            location_id: None,
            start_time: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap(),
            capacity: 20,
            status: SessionStatus::Scheduled,
            class_type: None,
        }
    }

    #[test]
    fn scan_finds_a_matching_id() {
        let sessions = vec![
            session("7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01"),
            session("0d9f1b7a-5c2e-4a8b-b3d4-6e7f8a9b0c1d"),
        ];
        let found = find_by_id(&sessions, "0d9f1b7a-5c2e-4a8b-b3d4-6e7f8a9b0c1d").unwrap();
        assert_eq!(found.id, sessions[1].id);
    }

    #[test]
    fn scan_is_case_insensitive_on_the_id() {
        let sessions = vec![session("7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01")];
        assert!(find_by_id(&sessions, "7B4E3C62-3C0A-4F3D-9F6E-2A1C5D8B9E01").is_some());
    }

    #[test]
    fn scan_misses_unknown_ids() {
        let sessions = vec![session("7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01")];
        assert!(find_by_id(&sessions, "not-a-uuid").is_none());
        assert!(find_by_id(&[], "7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01").is_none());
    }
}
