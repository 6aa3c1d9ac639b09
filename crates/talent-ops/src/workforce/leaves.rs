use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave row as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: u32,
    pub employee_name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Free text, conventionally `"<leave type>: <details>"`.
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Leave row as shown in the leave requests table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub duration: String,
    pub dates: String,
    pub status: String,
}

impl LeaveRecord {
    /// Inclusive day count; reversed ranges count the same as forward ones.
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days().abs() + 1
    }

    pub fn leave_type(&self) -> String {
        match self.reason.as_deref() {
            Some(reason) if reason.contains(':') => reason
                .split(':')
                .next()
                .map(str::trim)
                .filter(|kind| !kind.is_empty())
                .unwrap_or("Leave")
                .to_string(),
            _ => "Leave".to_string(),
        }
    }

    pub fn to_request(&self) -> LeaveRequest {
        LeaveRequest {
            id: self.id,
            name: self.employee_name.clone(),
            leave_type: self.leave_type(),
            duration: duration_label(self.days()),
            dates: dates_label(self.from_date, self.to_date),
            status: status_label(self.status.as_deref()),
        }
    }
}

/// New leave request submitted from the leave page.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveApplication {
    #[serde(default = "default_applicant")]
    pub employee_name: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_applicant() -> String {
    "Teamlead (You)".to_string()
}

impl LeaveApplication {
    /// Stored form of the application; `reason` keeps the `"<type>: <details>"` shape.
    pub fn into_record(self, id: u32) -> LeaveRecord {
        let leave_type = self.leave_type.trim();
        let reason = match self.reason.as_deref().map(str::trim) {
            Some(details) if !details.is_empty() => format!("{leave_type}: {details}"),
            _ => format!("{leave_type}:"),
        };
        LeaveRecord {
            id,
            employee_name: self.employee_name,
            from_date: self.from_date,
            to_date: self.to_date,
            reason: Some(reason),
            status: Some("pending".to_string()),
        }
    }
}

/// Reviewer action on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    pub const fn status(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Table rows for `records`, newest request first.
pub fn project_leaves(records: &[LeaveRecord]) -> Vec<LeaveRequest> {
    let mut requests: Vec<LeaveRequest> = records.iter().map(LeaveRecord::to_request).collect();
    requests.sort_by(|a, b| b.id.cmp(&a.id));
    requests
}

fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 Day".to_string()
    } else {
        format!("{days} Days")
    }
}

fn dates_label(from: NaiveDate, to: NaiveDate) -> String {
    if from == to {
        from.format("%b %d").to_string()
    } else {
        format!("{} - {}", from.format("%b %d"), to.format("%b %d"))
    }
}

fn status_label(status: Option<&str>) -> String {
    let Some(status) = status.map(str::trim).filter(|status| !status.is_empty()) else {
        return "Pending".to_string();
    };

    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => "Pending".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, from: (i32, u32, u32), to: (i32, u32, u32)) -> LeaveRecord {
        LeaveRecord {
            id,
            employee_name: "Diana Prince".to_string(),
            from_date: NaiveDate::from_ymd_opt(from.0, from.1, from.2).expect("valid from date"),
            to_date: NaiveDate::from_ymd_opt(to.0, to.1, to.2).expect("valid to date"),
            reason: Some("Sick Leave: flu".to_string()),
            status: Some("APPROVED".to_string()),
        }
    }

    #[test]
    fn multi_day_leave_formats_range_and_duration() {
        let request = record(1, (2025, 12, 1), (2025, 12, 2)).to_request();
        assert_eq!(request.leave_type, "Sick Leave");
        assert_eq!(request.duration, "2 Days");
        assert_eq!(request.dates, "Dec 01 - Dec 02");
        assert_eq!(request.status, "Approved");
    }

    #[test]
    fn single_day_leave_uses_singular_label() {
        let mut leave = record(2, (2025, 12, 10), (2025, 12, 10));
        leave.reason = Some("no type given".to_string());
        leave.status = None;

        let request = leave.to_request();
        assert_eq!(request.duration, "1 Day");
        assert_eq!(request.dates, "Dec 10");
        assert_eq!(request.leave_type, "Leave");
        assert_eq!(request.status, "Pending");
    }

    #[test]
    fn reversed_ranges_count_inclusive_days() {
        let leave = record(3, (2025, 12, 25), (2025, 12, 20));
        assert_eq!(leave.days(), 6);
    }

    #[test]
    fn applications_become_pending_requests() {
        let application = LeaveApplication {
            employee_name: "Bob Smith".to_string(),
            leave_type: " Casual Leave ".to_string(),
            from_date: NaiveDate::from_ymd_opt(2025, 12, 29).expect("valid from date"),
            to_date: NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid to date"),
            reason: Some("moving house".to_string()),
        };

        let request = application.into_record(4).to_request();
        assert_eq!(request.id, 4);
        assert_eq!(request.leave_type, "Casual Leave");
        assert_eq!(request.duration, "5 Days");
        assert_eq!(request.dates, "Dec 29 - Jan 02");
        assert_eq!(request.status, "Pending");
    }

    #[test]
    fn applications_default_to_the_signed_in_lead() {
        let application: LeaveApplication = serde_json::from_str(
            r#"{"leave_type":"Sick Leave","from_date":"2025-12-05","to_date":"2025-12-05"}"#,
        )
        .expect("application parses");
        let request = application.into_record(9).to_request();
        assert_eq!(request.name, "Teamlead (You)");
        assert_eq!(request.leave_type, "Sick Leave");
        assert_eq!(request.duration, "1 Day");
    }

    #[test]
    fn projection_lists_newest_first() {
        let records = vec![
            record(1, (2025, 12, 1), (2025, 12, 1)),
            record(3, (2025, 12, 3), (2025, 12, 3)),
            record(2, (2025, 12, 2), (2025, 12, 2)),
        ];
        let ids: Vec<u32> = project_leaves(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
