// Property-based tests for the job listing filter and view reducer

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use common::listing::{filter_jobs, ListingEvent, ListingView, ScheduleFilter};
use common::models::{Job, JobWithOrganization, Organization};

const SCHEDULE_TYPES: [&str; 3] = ["Full Time", "Part Time", "Hourly"];

fn record(name: &str, description: &str, org: &str, schedule_type: &str) -> JobWithOrganization {
    let now = Utc::now();
    let org_id = Uuid::now_v7();
    JobWithOrganization {
        job: Job {
            id: Uuid::now_v7(),
            name: name.to_string(),
            rate: Decimal::new(1500, 2),
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

fn arb_record() -> impl Strategy<Value = JobWithOrganization> {
    (
        "[a-zA-Z ]{2,16}",
        "[a-zA-Z ]{2,24}",
        "[a-zA-Z]{2,12}",
        prop::sample::select(SCHEDULE_TYPES.to_vec()),
    )
        .prop_map(|(name, description, org, schedule_type)| {
            record(&name, &description, &org, schedule_type)
        })
}

fn arb_jobs() -> impl Strategy<Value = Vec<JobWithOrganization>> {
    prop::collection::vec(arb_record(), 0..20)
}

fn arb_schedule_filter() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(SCHEDULE_TYPES.to_vec()).prop_map(str::to_string),
        0..3,
    )
}

// Applying the filter to its own output with the same inputs changes nothing
#[test]
fn property_filter_is_idempotent() {
    proptest!(|(jobs in arb_jobs(), labels in arb_schedule_filter(), query in "[a-z ]{0,8}")| {
        let filter = ScheduleFilter::new(&labels);
        let once = filter_jobs(&jobs, &filter, &query);
        let twice = filter_jobs(&once, &filter, &query);
        prop_assert_eq!(once, twice);
    });
}

// Every visible job satisfies both predicates, and input order is preserved
#[test]
fn property_visible_jobs_satisfy_both_predicates() {
    proptest!(|(jobs in arb_jobs(), labels in arb_schedule_filter(), query in "[a-z ]{0,8}")| {
        let filter = ScheduleFilter::new(&labels);
        let visible = filter_jobs(&jobs, &filter, &query);
        let needle = query.trim().to_lowercase();

        for record in &visible {
            prop_assert!(filter.accepts(&record.job.schedule_type));
            let haystack = format!(
                "{} {} {}",
                record.job.name, record.job.description, record.organization.name
            )
            .to_lowercase();
            prop_assert!(needle.is_empty() || haystack.contains(&needle));
        }

        // Order preservation: visible is a subsequence of jobs
        let mut cursor = jobs.iter();
        for record in &visible {
            prop_assert!(cursor.any(|candidate| candidate == record));
        }
    });
}

// Empty inputs filter nothing out
#[test]
fn property_empty_filter_passes_everything() {
    proptest!(|(jobs in arb_jobs())| {
        let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "");
        prop_assert_eq!(visible, jobs);
    });
}

// Upper-cased filter labels accept the same jobs as lower-cased ones
#[test]
fn property_schedule_filter_case_insensitive() {
    proptest!(|(jobs in arb_jobs(), labels in arb_schedule_filter())| {
        let lower = ScheduleFilter::new(labels.iter().map(|l| l.to_lowercase()));
        let upper = ScheduleFilter::new(labels.iter().map(|l| l.to_uppercase()));
        prop_assert_eq!(
            filter_jobs(&jobs, &lower, ""),
            filter_jobs(&jobs, &upper, "")
        );
    });
}

// The applied fetch sequence never moves backwards, whatever the event order
#[test]
fn property_fetch_sequence_is_monotonic() {
    proptest!(|(seqs in prop::collection::vec(1u64..50, 1..20))| {
        let mut view = ListingView::new();
        let mut high_water = 0u64;
        for seq in seqs {
            view = view.reduce(ListingEvent::JobsLoaded { seq, jobs: vec![] });
            prop_assert!(view.applied_fetch_seq() >= high_water);
            high_water = view.applied_fetch_seq();
            prop_assert!(high_water >= seq);
        }
    });
}

// A late response carrying an older sequence never replaces newer data
#[test]
fn property_stale_response_never_applied() {
    proptest!(|(newer in 2u64..100)| {
        let fresh = vec![record("Manager", "Runs store", "Acme", "Full Time")];
        let stale = vec![record("Cashier", "Retail till", "Acme", "Hourly")];

        let view = ListingView::new()
            .reduce(ListingEvent::JobsLoaded { seq: newer, jobs: fresh.clone() })
            .reduce(ListingEvent::JobsLoaded { seq: newer - 1, jobs: stale });

        prop_assert_eq!(view.applied_fetch_seq(), newer);
        prop_assert_eq!(view.visible(), &fresh[..]);
    });
}

// Only the latest query text survives a burst of edits once its fire arrives
#[test]
fn property_only_latest_query_applies() {
    proptest!(|(edits in prop::collection::vec("[a-z]{1,6}", 1..10))| {
        let mut view = ListingView::new().reduce(ListingEvent::JobsLoaded {
            seq: 1,
            jobs: vec![record("Cashier", "Retail till", "Acme", "Hourly")],
        });

        for text in &edits {
            view = view.reduce(ListingEvent::QueryChanged { text: text.clone() });
        }
        let latest = edits.last().unwrap().clone();

        // Fires for superseded edits are discarded
        for text in &edits[..edits.len() - 1] {
            if text == &latest {
                continue;
            }
            view = view.reduce(ListingEvent::DebounceFired { text: text.clone() });
            prop_assert_ne!(view.applied_query(), text.as_str());
        }

        view = view.reduce(ListingEvent::DebounceFired { text: latest.clone() });
        prop_assert_eq!(view.applied_query(), latest.as_str());
    });
}

// The worked example from the listing requirements
#[test]
fn test_cashier_manager_examples() {
    let jobs = vec![
        record("Cashier", "Retail till", "Acme", "Hourly"),
        record("Manager", "Runs store", "Acme", "Full Time"),
    ];

    let visible = filter_jobs(&jobs, &ScheduleFilter::default(), "cash");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].job.name, "Cashier");

    let visible = filter_jobs(&jobs, &ScheduleFilter::new(["full time"]), "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].job.name, "Manager");

    let visible = filter_jobs(&jobs, &ScheduleFilter::new(["hourly", "full time"]), "store");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].job.name, "Manager");
}
