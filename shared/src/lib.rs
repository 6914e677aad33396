use chrono::{DateTime, NaiveDateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Fallback title rendered when the backend does not inline the class type.
pub const UNTITLED_CLASS: &str = "Clase";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

fn expose_password<S>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(password.expose_secret())
}

#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Cancelled,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReservationStatus {
    #[default]
    Booked,
    Cancelled,
    Attended,
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    pub title: String,
}

/// A scheduled class instance, as served by `GET /sessions`. The backend
/// inlines `class_type` only on some deployments, hence the option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub class_type_id: Uuid,
    pub trainer_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub capacity: i32,
    pub status: SessionStatus,
    pub class_type: Option<ClassType>,
}

impl Session {
    pub fn title(&self) -> &str {
        self.class_type
            .as_ref()
            .map(|class_type| class_type.title.as_str())
            .unwrap_or(UNTITLED_CLASS)
    }
}

/// Session summary embedded in each `GET /me/reservations` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSession {
    pub id: Uuid,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub class_type_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub status: ReservationStatus,
    // Naive timestamp on the wire, the backend emits it without an offset.
    pub created_at: Option<NaiveDateTime>,
    pub session: ReservationSession,
}

impl Reservation {
    pub fn title(&self) -> &str {
        self.session
            .class_type_title
            .as_deref()
            .unwrap_or(UNTITLED_CLASS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub session_id: Uuid,
    pub auto_waitlist: bool,
}

/// The two reply shapes of `POST /reservations`: a confirmed booking, or a
/// waitlist placement when the session is full and `auto_waitlist` was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReserveOutcome {
    Booked {
        reservation_id: Uuid,
        status: String,
    },
    Waitlisted {
        status: String,
        position: i32,
    },
}

impl ReserveOutcome {
    pub fn message(&self) -> String {
        match self {
            ReserveOutcome::Booked { .. } => "Reservado con éxito".to_owned(),
            ReserveOutcome::Waitlisted { position, .. } => {
                format!("En lista de espera, posición {position}")
            }
        }
    }
}

/// Reply of `POST /sessions/{id}/waitlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub status: String,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_deserializes_without_inlined_class_type() {
        let payload = json!({
            "id": "7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01",
            "class_type_id": "0d9f1b7a-5c2e-4a8b-b3d4-6e7f8a9b0c1d",
            "trainer_id": null,
            "location_id": null,
            "start_time": "2025-03-01T10:00:00+00:00",
            "end_time": "2025-03-01T11:00:00+00:00",
            "capacity": 20,
            "status": "scheduled"
        });
        let session: Session = serde_json::from_value(payload).unwrap();
        assert_eq!(session.capacity, 20);
        assert_eq!(session.status, SessionStatus::Scheduled);
        assert_eq!(session.class_type, None);
        assert_eq!(session.title(), UNTITLED_CLASS);
    }

    #[test]
    fn session_title_prefers_inlined_class_type() {
        let session = Session {
            id: Uuid::nil(),
            class_type_id: Uuid::nil(),
            trainer_id: None,
            location_id: None,
            start_time: Utc::now(),
            end_time: Utc::now(),
            capacity: 10,
            status: SessionStatus::Scheduled,
            class_type: Some(ClassType {
                title: "Yoga".to_owned(),
            }),
        };
        assert_eq!(session.title(), "Yoga");
    }

    #[test]
    fn reservation_row_deserializes_backend_shape() {
        let payload = json!({
            "id": "b1c2d3e4-f5a6-4b7c-8d9e-0f1a2b3c4d5e",
            "status": "booked",
            "created_at": "2025-02-28T19:30:00",
            "session": {
                "id": "7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01",
                "start_time": "2025-03-01T10:00:00+00:00",
                "end_time": "2025-03-01T11:00:00+00:00",
                "capacity": 20,
                "class_type_title": "Spinning"
            }
        });
        let reservation: Reservation = serde_json::from_value(payload).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Booked);
        assert_eq!(reservation.title(), "Spinning");
        assert!(reservation.created_at.is_some());
    }

    #[test]
    fn reservation_title_falls_back_when_missing() {
        let payload = json!({
            "id": "b1c2d3e4-f5a6-4b7c-8d9e-0f1a2b3c4d5e",
            "status": "no_show",
            "created_at": null,
            "session": {
                "id": "7b4e3c62-3c0a-4f3d-9f6e-2a1c5d8b9e01",
                "start_time": null,
                "end_time": null,
                "capacity": 12,
                "class_type_title": null
            }
        });
        let reservation: Reservation = serde_json::from_value(payload).unwrap();
        assert_eq!(reservation.status, ReservationStatus::NoShow);
        assert_eq!(reservation.title(), UNTITLED_CLASS);
    }

    #[test]
    fn reserve_outcome_covers_both_reply_shapes() {
        let booked: ReserveOutcome = serde_json::from_value(json!({
            "reservation_id": "b1c2d3e4-f5a6-4b7c-8d9e-0f1a2b3c4d5e",
            "status": "booked"
        }))
        .unwrap();
        assert!(matches!(booked, ReserveOutcome::Booked { .. }));
        assert_eq!(booked.message(), "Reservado con éxito");

        let waitlisted: ReserveOutcome = serde_json::from_value(json!({
            "status": "waitlisted",
            "position": 3
        }))
        .unwrap();
        assert_eq!(
            waitlisted,
            ReserveOutcome::Waitlisted {
                status: "waitlisted".to_owned(),
                position: 3
            }
        );
        assert_eq!(waitlisted.message(), "En lista de espera, posición 3");
    }

    #[test]
    fn register_request_serializes_password_and_redacts_debug() {
        let request = RegisterRequest {
            full_name: "Ana Pérez".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: None,
            password: SecretString::from("hunter2"),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["password"], "hunter2");
        assert_eq!(value["full_name"], "Ana Pérez");
        assert!(!format!("{request:?}").contains("hunter2"));
    }

    #[test]
    fn status_enums_round_trip_snake_case() {
        assert_eq!(ReservationStatus::NoShow.to_string(), "no_show");
        assert_eq!(
            "no_show".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::NoShow
        );
        assert_eq!(SessionStatus::Scheduled.to_string(), "scheduled");
        let status: SessionStatus = serde_json::from_value(json!("completed")).unwrap();
        assert_eq!(status, SessionStatus::Completed);
    }
}
