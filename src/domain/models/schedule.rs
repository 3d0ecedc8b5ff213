use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::services::timegrid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaySchedule {
    pub start: String,
    pub end: String,
    pub is_working: bool,
}

impl DaySchedule {
    pub fn working(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            is_working: true,
        }
    }

    pub fn off(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            is_working: false,
        }
    }

    /// Minute window of the day. `None` on an off day, whose configured
    /// start/end contribute zero availability, and when the stored times
    /// do not parse.
    pub fn window(&self) -> Option<(u16, u16)> {
        if !self.is_working {
            return None;
        }
        let start = timegrid::parse_minutes(&self.start).ok()?;
        let end = timegrid::parse_minutes(&self.end).ok()?;
        (start < end).then_some((start, end))
    }
}

/// Recurring weekly working hours, one entry per weekday by construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

impl Default for WeekSchedule {
    /// The documented fallback week: Mon-Fri 09:00-18:00, Sat-Sun
    /// 10:00-16:00 with Sunday off.
    fn default() -> Self {
        Self {
            monday: DaySchedule::working("09:00", "18:00"),
            tuesday: DaySchedule::working("09:00", "18:00"),
            wednesday: DaySchedule::working("09:00", "18:00"),
            thursday: DaySchedule::working("09:00", "18:00"),
            friday: DaySchedule::working("09:00", "18:00"),
            saturday: DaySchedule::working("10:00", "16:00"),
            sunday: DaySchedule::off("10:00", "16:00"),
        }
    }
}

/// Result of normalizing loosely-typed working-hours input. Degraded input is
/// replaced wholesale by the default week; the warnings say why, so callers
/// can surface them instead of treating the fallback as clean data.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedSchedule {
    Clean(WeekSchedule),
    Degraded(WeekSchedule, Vec<String>),
}

impl NormalizedSchedule {
    pub fn hours(&self) -> &WeekSchedule {
        match self {
            NormalizedSchedule::Clean(hours) => hours,
            NormalizedSchedule::Degraded(hours, _) => hours,
        }
    }

    pub fn into_parts(self) -> (WeekSchedule, Vec<String>) {
        match self {
            NormalizedSchedule::Clean(hours) => (hours, Vec::new()),
            NormalizedSchedule::Degraded(hours, warnings) => (hours, warnings),
        }
    }
}

/// Validate a raw working-hours document. All seven weekday entries must be
/// objects with well-formed `HH:MM` strings and a boolean flag; working days
/// additionally need `start < end`. Any structural failure degrades the whole
/// schedule to the default week.
pub fn normalize(raw: &Value) -> NormalizedSchedule {
    let Some(obj) = raw.as_object() else {
        return NormalizedSchedule::Degraded(
            WeekSchedule::default(),
            vec!["working hours must be a JSON object keyed by weekday".to_string()],
        );
    };

    let mut warnings = Vec::new();
    let mut day = |key: &str| -> DaySchedule {
        match obj.get(key) {
            None => {
                warnings.push(format!("{key}: entry missing"));
                DaySchedule::off("00:00", "00:00")
            }
            Some(value) => match parse_day(key, value) {
                Ok(parsed) => parsed,
                Err(problem) => {
                    warnings.push(problem);
                    DaySchedule::off("00:00", "00:00")
                }
            },
        }
    };

    let week = WeekSchedule {
        monday: day("monday"),
        tuesday: day("tuesday"),
        wednesday: day("wednesday"),
        thursday: day("thursday"),
        friday: day("friday"),
        saturday: day("saturday"),
        sunday: day("sunday"),
    };

    if warnings.is_empty() {
        NormalizedSchedule::Clean(week)
    } else {
        NormalizedSchedule::Degraded(WeekSchedule::default(), warnings)
    }
}

fn parse_day(key: &str, value: &Value) -> Result<DaySchedule, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("{key}: entry must be an object"))?;
    let start = obj
        .get("start")
        .and_then(Value::as_str)
        .ok_or_else(|| format!("{key}: missing start time"))?;
    let end = obj
        .get("end")
        .and_then(Value::as_str)
        .ok_or_else(|| format!("{key}: missing end time"))?;
    let is_working = obj
        .get("is_working")
        .and_then(Value::as_bool)
        .ok_or_else(|| format!("{key}: is_working must be a boolean"))?;

    let start_min =
        timegrid::parse_minutes(start).map_err(|_| format!("{key}: invalid start time '{start}'"))?;
    let end_min =
        timegrid::parse_minutes(end).map_err(|_| format!("{key}: invalid end time '{end}'"))?;
    if is_working && start_min >= end_min {
        return Err(format!("{key}: start must be before end on a working day"));
    }

    Ok(DaySchedule {
        start: start.to_string(),
        end: end.to_string(),
        is_working,
    })
}
