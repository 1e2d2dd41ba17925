// Pure job filtering
//
// A job passes when both predicates hold:
//   - the schedule-type set is empty, or contains the job's lower-cased
//     schedule type
//   - the query is empty, or its trimmed lower-cased form is a substring of
//     "name description organization-name" lower-cased
//
// Matching is plain substring containment, not token matching.

use std::collections::HashSet;

use crate::models::JobWithOrganization;

/// Set of accepted schedule-type labels, matched case-insensitively
///
/// An empty set means no schedule-type filtering at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    labels: HashSet<String>,
}

impl ScheduleFilter {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|label| label.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether a job with this schedule type passes the filter
    pub fn accepts(&self, schedule_type: &str) -> bool {
        self.labels.is_empty() || self.labels.contains(&schedule_type.to_lowercase())
    }
}

fn matches_query(record: &JobWithOrganization, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        record.job.name, record.job.description, record.organization.name
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// Compute the visible subset of the job list
///
/// Pure and idempotent: no side effects, and re-applying the same inputs
/// yields the same result.
pub fn filter_jobs(
    jobs: &[JobWithOrganization],
    schedule_filter: &ScheduleFilter,
    query: &str,
) -> Vec<JobWithOrganization> {
    let needle = query.trim().to_lowercase();
    jobs.iter()
        .filter(|record| schedule_filter.accepts(&record.job.schedule_type))
        .filter(|record| matches_query(record, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Organization};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn record(name: &str, description: &str, org: &str, schedule_type: &str) -> JobWithOrganization {
        let now = Utc::now();
        let org_id = Uuid::now_v7();
        JobWithOrganization {
            job: Job {
                id: Uuid::now_v7(),
                name: name.to_string(),
                rate: dec!(15),
                schedule_type: schedule_type.to_string(),
                street_address: "12 Main St".to_string(),
                city: "Halifax".to_string(),
                province: "Nova Scotia".to_string(),
                description: description.to_string(),
                organization_id: org_id,
                created_at: now,
                updated_at: now,
            },
            organization: Organization {
                id: org_id,
                name: org.to_string(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    fn sample_jobs() -> Vec<JobWithOrganization> {
        vec![
            record("Cashier", "Retail till", "Acme", "Hourly"),
            record("Manager", "Runs store", "Acme", "Full Time"),
        ]
    }

    #[test]
    fn test_query_matches_name() {
        let jobs = sample_jobs();
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "cash");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].job.name, "Cashier");
    }

    #[test]
    fn test_schedule_filter_is_case_insensitive() {
        let jobs = sample_jobs();
        let visible = filter_jobs(&jobs, &ScheduleFilter::new(["full time"]), "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].job.name, "Manager");
    }

    #[test]
    fn test_query_matches_description_within_schedule_set() {
        let jobs = sample_jobs();
        let filter = ScheduleFilter::new(["hourly", "full time"]);
        let visible = filter_jobs(&jobs, &filter, "store");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].job.name, "Manager");
    }

    #[test]
    fn test_query_matches_organization_name() {
        let jobs = sample_jobs();
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "acme");
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let jobs = sample_jobs();
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "  CASH  ");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].job.name, "Cashier");
    }

    #[test]
    fn test_empty_inputs_pass_everything() {
        let jobs = sample_jobs();
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "");
        assert_eq!(visible.len(), jobs.len());
    }

    #[test]
    fn test_substring_not_token_matching() {
        let jobs = sample_jobs();
        // "uns st" spans the word boundary in "Runs store"
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "uns st");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].job.name, "Manager");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = sample_jobs();
        let filter = ScheduleFilter::new(["hourly"]);
        let once = filter_jobs(&jobs, &filter, "till");
        let twice = filter_jobs(&once, &filter, "till");
        assert_eq!(once, twice);
    }
}
