use bookworm_core::stats::ClassTier;
use services::ClassSummaryItem;

/// Headline numbers plus the narrative sentence for the overview header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOverviewVm {
    pub students: usize,
    pub total_books: usize,
    pub completed_books: u32,
    pub average_progress: u8,
    pub summary: &'static str,
}

impl From<&ClassSummaryItem> for ClassOverviewVm {
    fn from(item: &ClassSummaryItem) -> Self {
        Self {
            students: item.overview.students,
            total_books: item.overview.total_books,
            completed_books: item.overview.completed_books,
            average_progress: item.overview.average_progress,
            summary: tier_narrative(item.tier),
        }
    }
}

/// One canned sentence per tier. The tier selection itself is domain logic;
/// only the wording lives here.
#[must_use]
pub fn tier_narrative(tier: ClassTier) -> &'static str {
    match tier {
        ClassTier::Excelling => {
            "The class is excelling: most readers are active and books keep getting finished."
        }
        ClassTier::SolidProgress => {
            "Solid progress across the class, with steady completions and plenty of active readers."
        }
        ClassTier::HighEngagement => {
            "Engagement is high right now, even though many books are still in progress."
        }
        ClassTier::Foundation => {
            "A strong foundation of completed books is building up across the class."
        }
        ClassTier::GettingStarted => "The class is just getting started on its reading journey.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworm_core::stats::ClassOverview;

    #[test]
    fn vm_picks_the_tier_sentence() {
        let item = ClassSummaryItem {
            overview: ClassOverview {
                students: 0,
                total_books: 0,
                completed_books: 0,
                average_progress: 0,
            },
            tier: ClassTier::GettingStarted,
        };

        let vm = ClassOverviewVm::from(&item);
        assert_eq!(vm.summary, tier_narrative(ClassTier::GettingStarted));
    }

    #[test]
    fn every_tier_has_a_sentence() {
        for tier in [
            ClassTier::Excelling,
            ClassTier::SolidProgress,
            ClassTier::HighEngagement,
            ClassTier::Foundation,
            ClassTier::GettingStarted,
        ] {
            assert!(!tier_narrative(tier).is_empty());
        }
    }
}
