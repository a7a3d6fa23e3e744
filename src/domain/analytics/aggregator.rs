//! Analytics aggregation over the current user set
//!
//! Pure functions: the caller supplies the users and the reference date,
//! so identical input always produces an identical snapshot.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use super::snapshot::{AnalyticsSnapshot, BucketCount};
use crate::domain::user::User;

/// Regional and domain summaries keep only the largest groups.
pub const TOP_GROUPS: usize = 5;

/// The growth series covers the 7 calendar days ending on the reference
/// date, inclusive.
pub const GROWTH_WINDOW_DAYS: i64 = 7;

/// Compute the full snapshot for the given users.
///
/// `today` is the UTC calendar date the growth window ends on. Tests pin
/// it; production resolves it from the wall clock once per request.
pub fn aggregate(users: &[User], today: NaiveDate) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        by_state: top_groups(users.iter().map(|u| u.state())),
        by_city: top_groups(users.iter().map(|u| u.city())),
        by_domain: top_groups(users.iter().filter_map(|u| u.email_domain())),
        growth: growth_series(users, today),
    }
}

/// Group keys case-insensitively (emitting the lowercase form), count,
/// sort by count descending, and keep the top [`TOP_GROUPS`].
///
/// Ties keep the order in which their keys were first seen in the scan:
/// the sort is stable over an insertion-ordered grouping, so the result
/// is the same on every call over the same input sequence.
fn top_groups<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<BucketCount> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for key in keys {
        let folded = key.to_lowercase();
        match counts.entry(folded) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                first_seen.push(entry.key().clone());
                entry.insert(1);
            }
        }
    }

    let mut buckets: Vec<BucketCount> = first_seen
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            BucketCount { key, count }
        })
        .collect();

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(TOP_GROUPS);
    buckets
}

/// Signups per UTC calendar day over the window ending on `today`.
///
/// Always exactly [`GROWTH_WINDOW_DAYS`] buckets in ascending date order;
/// days without signups appear with a zero count.
fn growth_series(users: &[User], today: NaiveDate) -> Vec<BucketCount> {
    let start = today - Duration::days(GROWTH_WINDOW_DAYS - 1);

    let mut series: Vec<BucketCount> = (0..GROWTH_WINDOW_DAYS)
        .map(|offset| {
            let day = start + Duration::days(offset);
            BucketCount::new(day.format("%Y-%m-%d").to_string(), 0)
        })
        .collect();

    for user in users {
        let day = user.created_at().date_naive();
        if day >= start && day <= today {
            let index = (day - start).num_days() as usize;
            series[index].count += 1;
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::{TimeZone, Utc};

    fn user(email: &str, city: &str, state: &str) -> User {
        User::new(
            UserId::generate(),
            "Test User",
            email,
            city,
            state,
            Utc::now(),
        )
    }

    fn user_created_on(date: NaiveDate) -> User {
        let created_at = Utc
            .from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
        User::new(
            UserId::generate(),
            "Test User",
            "test@example.com",
            "New York",
            "NY",
            created_at,
        )
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_by_state_groups_case_insensitively() {
        let users = vec![
            user("a@x.com", "New York", "NY"),
            user("b@x.com", "Buffalo", "ny"),
            user("c@x.com", "Albany", "NY"),
        ];

        let snapshot = aggregate(&users, fixed_today());
        assert_eq!(snapshot.by_state, vec![BucketCount::new("ny", 3)]);
    }

    #[test]
    fn test_groups_sorted_by_count_descending() {
        let users = vec![
            user("a@x.com", "Chicago", "IL"),
            user("b@x.com", "Austin", "TX"),
            user("c@x.com", "Dallas", "TX"),
            user("d@x.com", "Houston", "TX"),
            user("e@x.com", "Springfield", "IL"),
            user("f@x.com", "Miami", "FL"),
        ];

        let snapshot = aggregate(&users, fixed_today());
        assert_eq!(
            snapshot.by_state,
            vec![
                BucketCount::new("tx", 3),
                BucketCount::new("il", 2),
                BucketCount::new("fl", 1),
            ]
        );
    }

    #[test]
    fn test_groups_truncated_to_top_five() {
        let states = ["AL", "AK", "AZ", "AR", "CA", "CO", "CT"];
        let users: Vec<User> = states
            .iter()
            .enumerate()
            .map(|(i, state)| user(&format!("u{}@x.com", i), "Somewhere", state))
            .collect();

        let snapshot = aggregate(&users, fixed_today());
        assert_eq!(snapshot.by_state.len(), TOP_GROUPS);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let users = vec![
            user("a@x.com", "Boston", "MA"),
            user("b@x.com", "Denver", "CO"),
            user("c@x.com", "Boston", "MA"),
            user("d@x.com", "Denver", "CO"),
        ];

        // ma and co both count 2; ma was seen first in the scan
        let snapshot = aggregate(&users, fixed_today());
        assert_eq!(
            snapshot.by_state,
            vec![BucketCount::new("ma", 2), BucketCount::new("co", 2)]
        );
    }

    #[test]
    fn test_by_domain_folds_case_and_counts() {
        let users = vec![
            user("a@Gmail.com", "NYC", "NY"),
            user("b@gmail.COM", "NYC", "NY"),
            user("c@example.org", "NYC", "NY"),
        ];

        let snapshot = aggregate(&users, fixed_today());
        assert_eq!(
            snapshot.by_domain,
            vec![
                BucketCount::new("gmail.com", 2),
                BucketCount::new("example.org", 1),
            ]
        );
    }

    #[test]
    fn test_malformed_email_excluded_from_domain_only() {
        let users = vec![
            user("not-an-email", "New York", "NY"),
            user("ok@example.com", "New York", "NY"),
        ];

        let snapshot = aggregate(&users, fixed_today());

        // skipped by the domain summary, still counted regionally
        assert_eq!(snapshot.by_domain, vec![BucketCount::new("example.com", 1)]);
        assert_eq!(snapshot.by_state, vec![BucketCount::new("ny", 2)]);
        assert_eq!(snapshot.by_city, vec![BucketCount::new("new york", 2)]);
    }

    #[test]
    fn test_growth_always_seven_ascending_buckets() {
        let today = fixed_today();
        let snapshot = aggregate(&[], today);

        assert_eq!(snapshot.growth.len(), 7);
        assert_eq!(snapshot.growth[0].key, "2026-08-01");
        assert_eq!(snapshot.growth[6].key, "2026-08-07");
        for window in snapshot.growth.windows(2) {
            assert!(window[0].key < window[1].key);
        }
        assert!(snapshot.growth.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn test_growth_buckets_by_creation_date() {
        let today = fixed_today();
        let users = vec![
            user_created_on(today),
            user_created_on(today),
            user_created_on(today - Duration::days(3)),
            // outside the window in both directions
            user_created_on(today - Duration::days(7)),
            user_created_on(today + Duration::days(1)),
        ];

        let snapshot = aggregate(&users, today);

        assert_eq!(snapshot.growth[6], BucketCount::new("2026-08-07", 2));
        assert_eq!(snapshot.growth[3], BucketCount::new("2026-08-04", 1));

        let total: u64 = snapshot.growth.iter().map(|bucket| bucket.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_growth_spans_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let snapshot = aggregate(&[], today);

        assert_eq!(snapshot.growth[0].key, "2026-02-24");
        assert_eq!(snapshot.growth[6].key, "2026-03-02");
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let users = vec![
            user("a@x.com", "New York", "NY"),
            user("b@y.org", "Austin", "TX"),
            user("c@x.com", "Austin", "tx"),
        ];
        let today = fixed_today();

        assert_eq!(aggregate(&users, today), aggregate(&users, today));
    }
}
