//! Onboarding wizard steps.

/// One screen of the onboarding flow, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    /// Greeting
    #[default]
    Welcome,
    /// Connect a data source
    ConnectSource,
    /// Choose starter reports
    PickReports,
    /// All set
    Done,
}

impl OnboardingStep {
    /// Every step in display order.
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Welcome,
        OnboardingStep::ConnectSource,
        OnboardingStep::PickReports,
        OnboardingStep::Done,
    ];

    fn index(self) -> usize {
        match self {
            OnboardingStep::Welcome => 0,
            OnboardingStep::ConnectSource => 1,
            OnboardingStep::PickReports => 2,
            OnboardingStep::Done => 3,
        }
    }

    /// Following step; stays on `Done`.
    pub fn next(self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(OnboardingStep::Done)
    }

    /// Previous step; stays on `Welcome`.
    pub fn back(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(OnboardingStep::Welcome)
    }

    /// `(current, total)`, one-based.
    pub fn progress(self) -> (usize, usize) {
        (self.index() + 1, Self::ALL.len())
    }

    /// Progress as a whole percentage, for the progress bar width.
    pub fn percent(self) -> u8 {
        let (current, total) = self.progress();
        (current * 100 / total) as u8
    }

    /// First step?
    pub fn is_first(self) -> bool {
        self == OnboardingStep::Welcome
    }

    /// Final step?
    pub fn is_last(self) -> bool {
        self == OnboardingStep::Done
    }

    /// Step heading.
    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to Reportdesk",
            OnboardingStep::ConnectSource => "Connect your data",
            OnboardingStep::PickReports => "Pick your first reports",
            OnboardingStep::Done => "You're all set",
        }
    }

    /// Step description.
    pub fn body(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => {
                "Reportdesk turns your product analytics into ready-made reports. This takes about a minute."
            }
            OnboardingStep::ConnectSource => {
                "Point Reportdesk at your event stream or warehouse. You can add more sources later from settings."
            }
            OnboardingStep::PickReports => {
                "Start with traffic and funnels. Pro reports such as retention cohorts unlock with an upgrade."
            }
            OnboardingStep::Done => "Your dashboard is ready. Run any report from the catalog.",
        }
    }
}
