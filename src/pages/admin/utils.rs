use crate::api::AttendanceRecord;

pub const PAGE_SIZE: usize = 10;

/// Newest day first. The sort is stable so same-day rows keep the server's
/// order.
pub fn sort_by_date_desc(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// One-based page slice; an out-of-range page clamps to the last non-empty
/// page instead of rendering nothing.
pub fn page_slice(records: &[AttendanceRecord], page: usize) -> &[AttendanceRecord] {
    if records.is_empty() {
        return records;
    }
    let last_page = page_count(records.len());
    let page = page.clamp(1, last_page);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(records.len());
    &records[start..end]
}

pub fn report_filename(department: Option<&str>) -> String {
    match department {
        Some(department) => format!("attendance_report_{department}.xlsx"),
        None => "attendance_report.xlsx".to_string(),
    }
}

/// Resource key for the report query. `token` is bumped on every filter
/// submission so re-applying the same department still refetches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportQuery {
    pub department: Option<String>,
    token: u32,
}

impl ReportQuery {
    pub fn with_department(&self, department: Option<String>) -> Self {
        Self {
            department,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn department_param(&self) -> Option<&str> {
        self.department.as_deref()
    }
}

pub fn normalize_department(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
