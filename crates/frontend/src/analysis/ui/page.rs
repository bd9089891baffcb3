use contracts::analysis::{SummaryData, UploadResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::analysis::api;
use crate::analysis::run_guard::RunSequence;
use crate::analysis::status::WorkflowStatus;
use crate::analysis::ui::dashboard::SummaryDashboard;
use crate::analysis::ui::preview::PreviewTable;
use crate::shared::icons::icon;

/// Upload/analysis workflow page.
///
/// Owns the three output regions (status line, preview, dashboard) as
/// signals and runs the two-step pipeline per file selection: upload,
/// then summarize. No retries; any failure ends the run.
#[component]
pub fn AnalysisPage() -> impl IntoView {
    let (status, set_status) = signal(WorkflowStatus::Idle);
    let (upload, set_upload) = signal(None::<UploadResult>);
    let (summary, set_summary) = signal(None::<SummaryData>);

    // A selection made while a run is in flight begins a new run; the old
    // one drops its writes at its next token check.
    let runs = StoredValue::new(RunSequence::default());

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            set_status.set(WorkflowStatus::NoFileSelected);
            return;
        };

        let token = runs.with_value(|seq| seq.begin());

        // Clear previous results before the new run renders anything
        set_upload.set(None);
        set_summary.set(None);
        set_status.set(WorkflowStatus::Uploading {
            filename: file.name(),
        });

        spawn_local(async move {
            let uploaded = api::upload_csv(file).await;
            if !runs.with_value(|seq| seq.is_current(token)) {
                return;
            }
            let uploaded = match uploaded {
                Ok(result) => result,
                Err(message) => {
                    log::error!("Upload failed: {}", message);
                    set_status.set(WorkflowStatus::Failed { message });
                    return;
                }
            };

            let filename = uploaded.filename.clone();
            set_upload.set(Some(uploaded));
            set_status.set(WorkflowStatus::GeneratingSummary);

            let summarized = api::fetch_summary(&filename).await;
            if !runs.with_value(|seq| seq.is_current(token)) {
                return;
            }
            match summarized {
                Ok(data) => {
                    set_summary.set(Some(data));
                    set_status.set(WorkflowStatus::Complete);
                }
                Err(message) => {
                    log::error!("Summary failed: {}", message);
                    set_status.set(WorkflowStatus::Failed { message });
                }
            }
        });
    };

    view! {
        <div class="analysis-page">
            <div class="analysis-page__filebar">
                <label class="button button--primary analysis-page__file-btn" for="csv-file-input">
                    {icon("file")}
                    " Choose CSV file"
                </label>
                <input
                    id="csv-file-input"
                    type="file"
                    on:change=handle_file_select
                    class="hidden"
                />
                <Show when=move || status.with(|s| s.is_busy())>
                    <Spinner />
                </Show>
            </div>

            <div class=move || {
                if status.with(|s| s.is_failed()) {
                    "analysis-page__status analysis-page__status--error"
                } else {
                    "analysis-page__status"
                }
            }>
                {move || status.get().message()}
            </div>

            <div class="analysis-page__preview">
                {move || upload.get().map(|upload| view! { <PreviewTable upload=upload /> })}
            </div>

            {move || summary.get().map(|data| view! { <SummaryDashboard data=data /> })}
        </div>
    }
}
