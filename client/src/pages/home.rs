//! Landing page: navigation header over the content sections.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::subjects_section::SubjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="page">
            <SubjectsSection/>
        </main>
    }
}
