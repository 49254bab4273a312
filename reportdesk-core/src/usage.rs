//! Plan quota accounting behind the limit-exceeded modal.

use crate::report::ReportItem;

/// Report runs consumed against an optional cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    /// Runs so far
    pub used: u32,
    /// Cap; `None` is unlimited
    pub limit: Option<u32>,
}

/// What the catalog should do when a report is launched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunDecision {
    /// Go ahead and count the run
    Run,
    /// Show the upsell modal instead
    Upsell(UpsellReason),
}

/// Why the upsell modal opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsellReason {
    /// Free quota used up
    LimitReached,
    /// Pro report on a capped plan
    ProReport,
}

impl UpsellReason {
    /// Modal heading.
    pub fn headline(self) -> &'static str {
        match self {
            UpsellReason::LimitReached => "You've reached your report limit",
            UpsellReason::ProReport => "This is a Pro report",
        }
    }
}

impl Usage {
    /// Fresh counter with the given cap.
    pub fn with_limit(limit: Option<u32>) -> Self {
        Self { used: 0, limit }
    }

    /// Runs left before the cap, `None` if unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.limit.map(|limit| limit.saturating_sub(self.used))
    }

    /// Cap reached (`used >= limit`).
    pub fn is_exceeded(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }

    /// Count one run.
    pub fn record_run(&mut self) {
        self.used = self.used.saturating_add(1);
    }

    /// Gate a launch of `item`. Capped plans never run pro reports.
    pub fn check(&self, item: &ReportItem) -> RunDecision {
        if self.limit.is_some() && item.is_pro {
            RunDecision::Upsell(UpsellReason::ProReport)
        } else if self.is_exceeded() {
            RunDecision::Upsell(UpsellReason::LimitReached)
        } else {
            RunDecision::Run
        }
    }

    /// "2 of 3 reports used" style summary.
    pub fn summary(&self) -> String {
        match self.limit {
            Some(limit) => format!("{} of {} reports used", self.used.min(limit), limit),
            None => format!("{} reports run", self.used),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_exceeds() {
        let mut usage = Usage::with_limit(None);
        for _ in 0..1000 {
            usage.record_run();
        }
        assert!(!usage.is_exceeded());
        assert_eq!(usage.remaining(), None);
        assert_eq!(usage.check(&ReportItem::new("a", "A").pro()), RunDecision::Run);
    }

    #[test]
    fn cap_is_inclusive() {
        let mut usage = Usage::with_limit(Some(2));
        let item = ReportItem::new("a", "A");
        assert_eq!(usage.check(&item), RunDecision::Run);
        usage.record_run();
        usage.record_run();
        assert!(usage.is_exceeded());
        assert_eq!(usage.remaining(), Some(0));
        assert_eq!(
            usage.check(&item),
            RunDecision::Upsell(UpsellReason::LimitReached)
        );
        assert_eq!(usage.summary(), "2 of 2 reports used");
    }

    #[test]
    fn pro_reports_upsell_on_capped_plan() {
        let usage = Usage::with_limit(Some(10));
        assert_eq!(
            usage.check(&ReportItem::new("p", "P").pro()),
            RunDecision::Upsell(UpsellReason::ProReport)
        );
    }

    #[test]
    fn record_run_saturates() {
        let mut usage = Usage {
            used: u32::MAX,
            limit: None,
        };
        usage.record_run();
        assert_eq!(usage.used, u32::MAX);
    }
}
