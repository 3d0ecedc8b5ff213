use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::domain::models::client::Client;
use crate::domain::models::session::{NewSessionParams, Session, SessionStatus, SessionType};
use crate::domain::models::trainer::Trainer;
use crate::domain::services::availability;
use crate::domain::services::timegrid;
use crate::error::{IssueCode, ValidationIssue};

/// Session length policy, shared by direct creation and bulk import so the
/// two paths cannot drift apart.
pub const SESSION_MIN_MINUTES: i32 = 30;
pub const SESSION_MAX_MINUTES: i32 = 240;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A booking request after structural deserialization, before semantic
/// validation. The core fields stay optional so every missing one can be
/// reported in a single pass instead of failing at the first hole.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SessionRequest {
    pub trainer_id: Option<String>,
    pub client_id: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub session_type: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    /// Explicitly moves the client to this trainer, silencing the
    /// assigned-trainer consistency check.
    #[serde(default)]
    pub reassign_trainer: bool,
}

/// Snapshot of everything the validator needs; fetched by the caller so the
/// validation itself stays a pure function.
pub struct ValidationContext<'a> {
    pub trainer: Option<&'a Trainer>,
    pub client: Option<&'a Client>,
    /// Sessions of the requested trainer on the requested date.
    pub existing: &'a [Session],
    pub today: NaiveDate,
}

/// Semantic validation of a booking request. Every applicable rule runs and
/// all findings come back together; on success the returned session is
/// normalized (re-formatted times, snapshot price) and enters `scheduled`.
pub fn validate_session_request(
    request: &SessionRequest,
    ctx: &ValidationContext<'_>,
) -> Result<Session, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let trainer_id = required(&request.trainer_id, "trainer_id", &mut issues);
    let client_id = required(&request.client_id, "client_id", &mut issues);
    let date_raw = required(&request.date, "date", &mut issues);
    let start_raw = required(&request.start_time, "start_time", &mut issues);
    let end_raw = required(&request.end_time, "end_time", &mut issues);

    let trainer = match (trainer_id, ctx.trainer) {
        (Some(id), None) => {
            issues.push(ValidationIssue::new(
                "trainer_id",
                IssueCode::NotFound,
                format!("trainer '{id}' does not exist"),
            ));
            None
        }
        (Some(id), Some(trainer)) if !trainer.is_bookable() => {
            issues.push(ValidationIssue::new(
                "trainer_id",
                IssueCode::NotBookable,
                format!("trainer '{id}' is {} and cannot be booked", status_word(trainer)),
            ));
            None
        }
        (Some(_), Some(trainer)) => Some(trainer),
        (None, _) => None,
    };

    if let (Some(id), None) = (client_id, ctx.client) {
        issues.push(ValidationIssue::new(
            "client_id",
            IssueCode::NotFound,
            format!("client '{id}' does not exist"),
        ));
    }

    // Only the calendar day is compared; booking earlier today is allowed.
    let date = date_raw.and_then(|raw| match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(parsed) if parsed < ctx.today => {
            issues.push(ValidationIssue::new(
                "date",
                IssueCode::PastDate,
                format!("'{raw}' is in the past"),
            ));
            None
        }
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(ValidationIssue::new(
                "date",
                IssueCode::Format,
                format!("invalid date '{raw}', expected YYYY-MM-DD"),
            ));
            None
        }
    });

    let start = start_raw.and_then(|raw| parse_time_field("start_time", raw, &mut issues));
    let end = end_raw.and_then(|raw| parse_time_field("end_time", raw, &mut issues));

    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            issues.push(ValidationIssue::new(
                "end_time",
                IssueCode::TimeOrder,
                "start_time must be before end_time",
            ));
        } else {
            let duration = i32::from(end - start);
            if !(SESSION_MIN_MINUTES..=SESSION_MAX_MINUTES).contains(&duration) {
                issues.push(ValidationIssue::new(
                    "end_time",
                    IssueCode::InvalidDuration,
                    format!(
                        "session length must be {SESSION_MIN_MINUTES}-{SESSION_MAX_MINUTES} minutes, got {duration}"
                    ),
                ));
            }
        }
    }

    let session_type = match request.session_type.as_deref() {
        None => SessionType::Personal,
        Some(raw) => SessionType::parse(raw).unwrap_or_else(|| {
            issues.push(ValidationIssue::new(
                "type",
                IssueCode::UnknownType,
                format!("unknown session type '{raw}'"),
            ));
            SessionType::Personal
        }),
    };

    // Validated when supplied; direct creation still always enters
    // `scheduled`. Seeding terminal statuses is reserved to trusted bulk
    // paths.
    if let Some(raw) = request.status.as_deref()
        && SessionStatus::parse(raw).is_none()
    {
        issues.push(ValidationIssue::new(
            "status",
            IssueCode::UnknownStatus,
            format!("unknown status '{raw}'"),
        ));
    }

    if let (Some(trainer), Some(date), Some(start), Some(end)) = (trainer, date, start, end)
        && start < end
    {
        match trainer.working_hours.day(date.weekday()).window() {
            Some((day_start, day_end)) if start >= day_start && end <= day_end => {}
            _ => issues.push(ValidationIssue::new(
                "start_time",
                IssueCode::OutOfWorkingHours,
                "requested interval is outside the trainer's working hours",
            )),
        }

        for hit in availability::conflicts_for(ctx.existing, &trainer.id, date, start, end, None) {
            issues.push(ValidationIssue::new(
                "start_time",
                IssueCode::Conflict,
                format!(
                    "overlaps session '{}' ({}-{})",
                    hit.id, hit.start_time, hit.end_time
                ),
            ));
        }
    }

    if let (Some(client), Some(trainer)) = (ctx.client, trainer)
        && !request.reassign_trainer
        && let Some(assigned) = client.assigned_trainer_id.as_deref()
        && assigned != trainer.id
    {
        issues.push(ValidationIssue::new(
            "trainer_id",
            IssueCode::TrainerMismatch,
            format!("client is assigned to trainer '{assigned}'; set reassign_trainer to override"),
        ));
    }

    match (trainer, client_id, date, start, end) {
        (Some(trainer), Some(client_id), Some(date), Some(start), Some(end))
            if issues.is_empty() =>
        {
            let duration = i32::from(end - start);
            Ok(Session::new(NewSessionParams {
                trainer_id: trainer.id.clone(),
                client_id: client_id.to_string(),
                date,
                start_time: timegrid::format_minutes(start),
                end_time: timegrid::format_minutes(end),
                session_type,
                notes: request.notes.clone(),
                price_cents: trainer.hourly_rate_cents * duration / 60,
            }))
        }
        _ => Err(issues),
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            issues.push(ValidationIssue::new(
                field,
                IssueCode::MissingField,
                format!("{field} is required"),
            ));
            None
        }
    }
}

fn parse_time_field(field: &str, raw: &str, issues: &mut Vec<ValidationIssue>) -> Option<u16> {
    match timegrid::parse_minutes(raw) {
        Ok(minutes) => Some(minutes),
        Err(_) => {
            issues.push(ValidationIssue::new(
                field,
                IssueCode::Format,
                format!("invalid time '{raw}', expected HH:MM"),
            ));
            None
        }
    }
}

fn status_word(trainer: &Trainer) -> &'static str {
    use crate::domain::models::trainer::TrainerStatus;
    match trainer.status {
        TrainerStatus::Active => "active",
        TrainerStatus::Inactive => "inactive",
        TrainerStatus::Suspended => "suspended",
        TrainerStatus::Deleted => "deleted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::schedule::WeekSchedule;
    use crate::domain::models::trainer::{NewTrainerParams, TrainerStatus};

    fn trainer() -> Trainer {
        Trainer::new(NewTrainerParams {
            name: "Jonas Falk".to_string(),
            email: "jonas@club.test".to_string(),
            specialty: Some("strength".to_string()),
            bio: None,
            hourly_rate_cents: 9000,
            working_hours: WeekSchedule::default(),
        })
    }

    fn client(assigned: Option<&str>) -> Client {
        Client::new(
            "Lea Brandt".to_string(),
            "lea@club.test".to_string(),
            assigned.map(str::to_string),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap() // a Monday
    }

    fn request(trainer: &Trainer, client: &Client, start: &str, end: &str) -> SessionRequest {
        SessionRequest {
            trainer_id: Some(trainer.id.clone()),
            client_id: Some(client.id.clone()),
            date: Some("2026-08-10".to_string()),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..SessionRequest::default()
        }
    }

    fn ctx<'a>(
        trainer: &'a Trainer,
        client: &'a Client,
        existing: &'a [Session],
    ) -> ValidationContext<'a> {
        ValidationContext {
            trainer: Some(trainer),
            client: Some(client),
            existing,
            today: today(),
        }
    }

    #[test]
    fn accepts_a_clean_request() {
        let t = trainer();
        let c = client(None);
        let session =
            validate_session_request(&request(&t, &c, "10:00", "11:00"), &ctx(&t, &c, &[])).unwrap();

        assert_eq!(session.trainer_id, t.id);
        assert_eq!(session.status, SessionStatus::Scheduled);
        assert_eq!(session.session_type, SessionType::Personal);
        assert_eq!(session.price_cents, 9000);
        assert_eq!(session.start_time, "10:00");
        assert_eq!(session.end_time, "11:00");
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let issues = validate_session_request(
            &SessionRequest::default(),
            &ValidationContext {
                trainer: None,
                client: None,
                existing: &[],
                today: today(),
            },
        )
        .unwrap_err();

        let missing: Vec<&str> = issues
            .iter()
            .filter(|i| i.code == IssueCode::MissingField)
            .map(|i| i.field.as_str())
            .collect();
        assert_eq!(
            missing,
            vec!["trainer_id", "client_id", "date", "start_time", "end_time"]
        );
    }

    #[test]
    fn reversed_times_fail_regardless_of_other_fields() {
        let t = trainer();
        let c = client(None);
        let issues =
            validate_session_request(&request(&t, &c, "14:00", "13:30"), &ctx(&t, &c, &[]))
                .unwrap_err();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::TimeOrder);
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        let t = trainer();
        let c = client(None);
        let verdict = |start: &str, end: &str| {
            validate_session_request(&request(&t, &c, start, end), &ctx(&t, &c, &[]))
        };

        assert!(verdict("10:00", "10:29").is_err()); // 29 min
        assert!(verdict("10:00", "10:30").is_ok()); // 30 min
        assert!(verdict("10:00", "14:00").is_ok()); // 240 min
        assert!(verdict("10:00", "14:01").is_err()); // 241 min
    }

    #[test]
    fn past_date_is_rejected_but_today_is_fine() {
        let t = trainer();
        let c = client(None);

        let mut req = request(&t, &c, "10:00", "11:00");
        req.date = Some("2026-08-02".to_string());
        let issues = validate_session_request(&req, &ctx(&t, &c, &[])).unwrap_err();
        assert!(issues.iter().any(|i| i.code == IssueCode::PastDate));

        req.date = Some("2026-08-03".to_string()); // today, a Monday
        assert!(validate_session_request(&req, &ctx(&t, &c, &[])).is_ok());
    }

    #[test]
    fn conflicting_session_is_named() {
        let t = trainer();
        let c = client(None);
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let existing = vec![Session::new(NewSessionParams {
            trainer_id: t.id.clone(),
            client_id: c.id.clone(),
            date,
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            session_type: SessionType::Personal,
            notes: None,
            price_cents: 9000,
        })];

        let issues =
            validate_session_request(&request(&t, &c, "10:30", "11:30"), &ctx(&t, &c, &existing))
                .unwrap_err();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::Conflict);
        assert!(issues[0].message.contains(&existing[0].id));
    }

    #[test]
    fn back_to_back_is_not_a_conflict() {
        let t = trainer();
        let c = client(None);
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let existing = vec![Session::new(NewSessionParams {
            trainer_id: t.id.clone(),
            client_id: c.id.clone(),
            date,
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            session_type: SessionType::Personal,
            notes: None,
            price_cents: 9000,
        })];

        assert!(
            validate_session_request(&request(&t, &c, "11:00", "12:00"), &ctx(&t, &c, &existing))
                .is_ok()
        );
    }

    #[test]
    fn out_of_working_hours_is_flagged() {
        let t = trainer();
        let c = client(None);
        let issues =
            validate_session_request(&request(&t, &c, "07:00", "08:00"), &ctx(&t, &c, &[]))
                .unwrap_err();
        assert!(issues.iter().any(|i| i.code == IssueCode::OutOfWorkingHours));
    }

    #[test]
    fn inactive_trainer_is_not_bookable() {
        let mut t = trainer();
        t.status = TrainerStatus::Inactive;
        let c = client(None);
        let issues =
            validate_session_request(&request(&t, &c, "10:00", "11:00"), &ctx(&t, &c, &[]))
                .unwrap_err();
        assert!(issues.iter().any(|i| i.code == IssueCode::NotBookable));
    }

    #[test]
    fn assigned_trainer_mismatch_is_a_distinct_issue() {
        let t = trainer();
        let c = client(Some("some-other-trainer"));

        let issues = validate_session_request(&request(&t, &c, "10:00", "11:00"), &ctx(&t, &c, &[]))
            .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::TrainerMismatch);

        let mut req = request(&t, &c, "10:00", "11:00");
        req.reassign_trainer = true;
        assert!(validate_session_request(&req, &ctx(&t, &c, &[])).is_ok());
    }

    #[test]
    fn unknown_type_and_status_are_both_reported() {
        let t = trainer();
        let c = client(None);
        let mut req = request(&t, &c, "10:00", "11:00");
        req.session_type = Some("aqua".to_string());
        req.status = Some("tentative".to_string());

        let issues = validate_session_request(&req, &ctx(&t, &c, &[])).unwrap_err();
        assert!(issues.iter().any(|i| i.code == IssueCode::UnknownType));
        assert!(issues.iter().any(|i| i.code == IssueCode::UnknownStatus));
    }

    #[test]
    fn valid_supplied_status_still_enters_scheduled() {
        let t = trainer();
        let c = client(None);
        let mut req = request(&t, &c, "10:00", "11:00");
        req.status = Some("completed".to_string());

        let session = validate_session_request(&req, &ctx(&t, &c, &[])).unwrap();
        assert_eq!(session.status, SessionStatus::Scheduled);
    }
}
