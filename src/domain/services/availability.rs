use chrono::{Datelike, NaiveDate};

use crate::domain::models::session::{Session, SessionStatus};
use crate::domain::models::slot::Slot;
use crate::domain::models::trainer::Trainer;
use crate::domain::services::timegrid::{self, overlaps};
use crate::error::AppError;

/// Non-cancelled sessions of `trainer_id` on `date` whose interval overlaps
/// `[start, end)`. `exclude_id` skips one session so an edit can be
/// re-validated against everything but itself.
pub fn conflicts_for<'a>(
    sessions: &'a [Session],
    trainer_id: &str,
    date: NaiveDate,
    start: u16,
    end: u16,
    exclude_id: Option<&str>,
) -> Vec<&'a Session> {
    sessions
        .iter()
        .filter(|s| s.trainer_id == trainer_id && s.date == date)
        .filter(|s| s.status != SessionStatus::Cancelled)
        .filter(|s| exclude_id != Some(s.id.as_str()))
        .filter(|s| {
            s.interval()
                .is_some_and(|(b_start, b_end)| overlaps(start, end, b_start, b_end))
        })
        .collect()
}

/// A candidate interval is bookable iff the trainer is active, the day is a
/// working day, the interval sits inside the working window, and no
/// non-cancelled session overlaps it. Callers that need to know *which*
/// condition failed use the sub-checks directly.
pub fn is_available(
    trainer: &Trainer,
    date: NaiveDate,
    start: u16,
    end: u16,
    sessions: &[Session],
    exclude_id: Option<&str>,
) -> bool {
    if !trainer.is_bookable() {
        return false;
    }
    let Some((day_start, day_end)) = trainer.working_hours.day(date.weekday()).window() else {
        return false;
    };
    if start < day_start || end > day_end {
        return false;
    }
    conflicts_for(sessions, &trainer.id, date, start, end, exclude_id).is_empty()
}

/// Walk the trainer's working window on `date` at a fixed step and return a
/// slot for every grid point, available or not, ordered by start time. A long
/// existing session can leave free minutes unreachable between grid points;
/// that is the intended granularity, not a packing optimum. An off day yields
/// no slots at all.
pub fn generate_slots(
    trainer: &Trainer,
    date: NaiveDate,
    duration_min: i32,
    step_min: i32,
    sessions: &[Session],
) -> Result<Vec<Slot>, AppError> {
    if duration_min <= 0 {
        return Err(AppError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    if step_min <= 0 {
        return Err(AppError::Validation(
            "step must be a positive number of minutes".to_string(),
        ));
    }

    let Some((day_start, day_end)) = trainer.working_hours.day(date.weekday()).window() else {
        return Ok(Vec::new());
    };

    let price_cents = trainer.hourly_rate_cents * duration_min / 60;

    let mut slots = Vec::new();
    let mut cursor = i32::from(day_start);
    while cursor + duration_min <= i32::from(day_end) {
        let start = cursor as u16;
        let end = (cursor + duration_min) as u16;

        slots.push(Slot {
            time: timegrid::format_minutes(start),
            available: is_available(trainer, date, start, end, sessions, None),
            price_cents,
        });

        cursor += step_min;
    }

    Ok(slots)
}
