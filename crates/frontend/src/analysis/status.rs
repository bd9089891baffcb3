/// Workflow status shown in the single status line above the preview.
/// Every run walks Uploading -> GeneratingSummary -> Complete, or stops
/// at Failed; all failure origins collapse into one textual message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    NoFileSelected,
    Uploading { filename: String },
    GeneratingSummary,
    Complete,
    Failed { message: String },
}

impl WorkflowStatus {
    pub fn message(&self) -> String {
        match self {
            WorkflowStatus::Idle => String::new(),
            WorkflowStatus::NoFileSelected => "No file selected.".to_string(),
            WorkflowStatus::Uploading { filename } => format!("Uploading \"{}\"...", filename),
            WorkflowStatus::GeneratingSummary => {
                "Upload successful! Generating summary...".to_string()
            }
            WorkflowStatus::Complete => "Analysis complete!".to_string(),
            WorkflowStatus::Failed { message } => format!("Error: {}", message),
        }
    }

    /// A request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            WorkflowStatus::Uploading { .. } | WorkflowStatus::GeneratingSummary
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WorkflowStatus::Failed { .. })
    }
}
