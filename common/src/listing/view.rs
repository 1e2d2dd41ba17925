// Listing view state
//
// The listing UI state (cached job list, raw and applied query text, selected
// schedule types, visible subset) is an explicit immutable value. A pure
// reducer consumes events and returns the next state, so every transition is
// deterministic and testable without a UI attached.
//
// Fetches are guarded by a monotonically increasing sequence number: a
// `JobsLoaded` event whose sequence is not newer than the last applied one is
// dropped, so a late response never overwrites a view already refreshed by a
// newer fetch.

use serde::{Deserialize, Serialize};

use crate::listing::filter::{filter_jobs, ScheduleFilter};
use crate::models::JobWithOrganization;

/// Events driving the listing view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListingEvent {
    /// A fetch of the full job list completed
    JobsLoaded {
        seq: u64,
        jobs: Vec<JobWithOrganization>,
    },
    /// The search input changed; takes effect once the debounce fires
    QueryChanged { text: String },
    /// The debounce interval elapsed for this query text
    DebounceFired { text: String },
    /// The schedule-type checkboxes changed; applies immediately
    ScheduleFilterChanged { labels: Vec<String> },
}

/// Immutable snapshot of the listing view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingView {
    jobs: Vec<JobWithOrganization>,
    query: String,
    applied_query: String,
    schedule_filter: ScheduleFilter,
    visible: Vec<JobWithOrganization>,
    applied_fetch_seq: u64,
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible subset of jobs
    pub fn visible(&self) -> &[JobWithOrganization] {
        &self.visible
    }

    /// The query text as typed, which may not be applied yet
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query text currently applied to the visible subset
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn schedule_filter(&self) -> &ScheduleFilter {
        &self.schedule_filter
    }

    /// Sequence number of the newest applied fetch
    pub fn applied_fetch_seq(&self) -> u64 {
        self.applied_fetch_seq
    }

    /// Apply one event, returning the next view
    ///
    /// Pure: `self` is untouched, and the same (view, event) pair always
    /// produces the same result.
    pub fn reduce(&self, event: ListingEvent) -> ListingView {
        let mut next = self.clone();
        match event {
            ListingEvent::JobsLoaded { seq, jobs } => {
                // Sequence numbers are issued from 1; a response that is not
                // strictly newer than the last applied fetch is stale
                if seq <= next.applied_fetch_seq {
                    return next;
                }
                next.applied_fetch_seq = seq;
                next.jobs = jobs;
            }
            ListingEvent::QueryChanged { text } => {
                next.query = text;
                // Visible set unchanged until the debounce fires
                return next;
            }
            ListingEvent::DebounceFired { text } => {
                // A fire for superseded text is stale; the timer for the
                // current text is still pending
                if text != next.query {
                    return next;
                }
                next.applied_query = text;
            }
            ListingEvent::ScheduleFilterChanged { labels } => {
                next.schedule_filter = ScheduleFilter::new(labels);
            }
        }
        next.visible = filter_jobs(&next.jobs, &next.schedule_filter, &next.applied_query);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Organization};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn record(name: &str, schedule_type: &str) -> JobWithOrganization {
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
                description: "desc".to_string(),
                organization_id: org_id,
                created_at: now,
                updated_at: now,
            },
            organization: Organization {
                id: org_id,
                name: "Acme".to_string(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[test]
    fn test_jobs_loaded_populates_visible() {
        let view = ListingView::new().reduce(ListingEvent::JobsLoaded {
            seq: 1,
            jobs: vec![record("Cashier", "Hourly")],
        });
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.applied_fetch_seq(), 1);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let fresh = vec![record("Manager", "Full Time")];
        let stale = vec![record("Cashier", "Hourly")];

        let view = ListingView::new()
            .reduce(ListingEvent::JobsLoaded {
                seq: 2,
                jobs: fresh.clone(),
            })
            .reduce(ListingEvent::JobsLoaded { seq: 1, jobs: stale });

        assert_eq!(view.applied_fetch_seq(), 2);
        assert_eq!(view.visible(), &fresh[..]);
    }

    #[test]
    fn test_query_change_is_not_applied_until_debounce_fires() {
        let view = ListingView::new()
            .reduce(ListingEvent::JobsLoaded {
                seq: 1,
                jobs: vec![record("Cashier", "Hourly"), record("Manager", "Full Time")],
            })
            .reduce(ListingEvent::QueryChanged {
                text: "cash".to_string(),
            });

        // Still showing everything; the debounce has not fired
        assert_eq!(view.visible().len(), 2);
        assert_eq!(view.applied_query(), "");

        let view = view.reduce(ListingEvent::DebounceFired {
            text: "cash".to_string(),
        });
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].job.name, "Cashier");
    }

    #[test]
    fn test_stale_debounce_fire_is_discarded() {
        let view = ListingView::new()
            .reduce(ListingEvent::JobsLoaded {
                seq: 1,
                jobs: vec![record("Cashier", "Hourly"), record("Manager", "Full Time")],
            })
            .reduce(ListingEvent::QueryChanged {
                text: "cash".to_string(),
            })
            .reduce(ListingEvent::QueryChanged {
                text: "manage".to_string(),
            })
            // Fire for the superseded text must not apply
            .reduce(ListingEvent::DebounceFired {
                text: "cash".to_string(),
            });

        assert_eq!(view.applied_query(), "");
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn test_schedule_filter_applies_immediately() {
        let view = ListingView::new()
            .reduce(ListingEvent::JobsLoaded {
                seq: 1,
                jobs: vec![record("Cashier", "Hourly"), record("Manager", "Full Time")],
            })
            .reduce(ListingEvent::ScheduleFilterChanged {
                labels: vec!["full time".to_string()],
            });

        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].job.name, "Manager");
    }

    #[test]
    fn test_reduce_is_pure() {
        let initial = ListingView::new();
        let event = ListingEvent::JobsLoaded {
            seq: 1,
            jobs: vec![record("Cashier", "Hourly")],
        };
        let _ = initial.reduce(event);
        assert_eq!(initial, ListingView::new());
    }
}
