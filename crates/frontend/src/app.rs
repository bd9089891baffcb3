use crate::analysis::ui::AnalysisPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AnalysisPage />
    }
}
