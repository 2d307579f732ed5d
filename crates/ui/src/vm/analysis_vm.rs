use services::{AnalysisEvent, AnalysisProgress};

/// Status line once every step ran.
pub const COMPLETED_STATUS: &str = "Analysis completed!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub kind: NoticeKind,
    pub text: String,
}

impl NoticeVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Info => "notice notice-info",
        }
    }
}

/// Where an analysis event lands on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisMessage {
    /// Replaces the status line under the progress bar.
    Status(String),
    /// Appended below the progress bar and kept.
    Notice(NoticeVm),
}

impl AnalysisMessage {
    /// Page updates for one event, in the order they apply.
    #[must_use]
    pub fn for_event(event: &AnalysisEvent) -> Vec<Self> {
        let text = event.to_string();
        match event {
            AnalysisEvent::Preparing | AnalysisEvent::Step { .. } => vec![Self::Status(text)],
            AnalysisEvent::Completed => vec![
                Self::Status(COMPLETED_STATUS.to_owned()),
                Self::Notice(NoticeVm {
                    kind: NoticeKind::Success,
                    text,
                }),
            ],
            AnalysisEvent::Identified { .. } => vec![Self::Notice(NoticeVm {
                kind: NoticeKind::Info,
                text,
            })],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisVm {
    pub percent: u8,
    pub step_text: String,
    pub is_complete: bool,
    pub show_view_results: bool,
}

impl AnalysisVm {
    #[must_use]
    pub fn new(progress: &AnalysisProgress, auto_advance: bool) -> Self {
        let shown = progress.step.min(progress.total);
        Self {
            percent: progress.percent(),
            step_text: format!("Step {shown} of {}", progress.total),
            is_complete: progress.is_complete,
            show_view_results: progress.is_complete && !auto_advance,
        }
    }

    /// Inline style for the progress bar fill.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}
