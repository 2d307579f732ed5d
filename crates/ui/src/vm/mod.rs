mod analysis_vm;
mod results_vm;
mod theme;

pub use analysis_vm::{AnalysisMessage, AnalysisVm, NoticeKind, NoticeVm};
pub use results_vm::{
    BarVm, DOSAGE, GUIDANCE, ResultRowVm, ResultsVm, TreatmentVm, format_pct,
};
pub use theme::palette_css;
