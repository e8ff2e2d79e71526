//! Subjects grid: the `subjects` navigation target.

#[cfg(test)]
#[path = "subjects_section_test.rs"]
mod subjects_section_test;

use leptos::prelude::*;

use crate::content::sections::SectionId;
use crate::content::subjects::{BOARDS, GRADE_LINE, SUBJECTS, Subject};

const SUBTITLE: &str = "Expert tuition across multiple subjects with specialized teaching methods \
                        tailored for each discipline's unique requirements.";

#[component]
pub fn SubjectsSection() -> impl IntoView {
    view! {
        <section id={SectionId::Subjects.as_str()} class="subjects">
            <div class="subjects__inner">
                <div class="subjects__header">
                    <span class="subjects__badge">"Subjects Offered"</span>
                    <h2 class="subjects__title">
                        "Comprehensive Subject"
                        <span class="subjects__title-accent">"Coverage"</span>
                    </h2>
                    <p class="subjects__subtitle">{SUBTITLE}</p>
                </div>

                <div class="subjects__grid">
                    {SUBJECTS.into_iter().map(|subject| view! { <SubjectCard subject/> }).collect_view()}
                </div>

                <div class="subjects__boards">
                    <h3 class="subjects__boards-title">"All Boards Covered"</h3>
                    <div class="subjects__board-list">
                        {BOARDS
                            .into_iter()
                            .map(|board| view! { <span class="subjects__board">{board}</span> })
                            .collect_view()}
                    </div>
                    <p class="subjects__grades">{GRADE_LINE}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SubjectCard(subject: Subject) -> impl IntoView {
    view! {
        <div class={subject_card_class(&subject)}>
            <div class="subject-card__icon" aria-hidden="true">{subject.icon.glyph()}</div>
            <h3 class="subject-card__title">{subject.title}</h3>
            <p class="subject-card__description">{subject.description}</p>
            <div class="subject-card__more">
                <span>"Learn More"</span>
            </div>
        </div>
    }
}

fn subject_card_class(subject: &Subject) -> String {
    format!("subject-card {}", subject.accent.css_modifier())
}
