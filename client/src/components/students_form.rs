//! Controlled modal form for creating or editing one student.
//!
//! DESIGN
//! ======
//! The form keeps a local draft seeded from its `student` prop and hands the
//! draft to `on_save` untouched. It performs no validation; the backend is
//! the only judge of a record.

#[cfg(test)]
#[path = "students_form_test.rs"]
mod students_form_test;

use leptos::prelude::*;

use crate::net::types::Student;

/// An editable field, keyed by its input's `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Email,
    Course,
}

impl StudentField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Course];

    /// Value of the input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Course => "course",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Course => "Course",
        }
    }

    fn read(self, draft: &Student) -> String {
        match self {
            Self::Name => draft.name.clone(),
            Self::Email => draft.email.clone(),
            Self::Course => draft.course.clone(),
        }
    }

    /// Overwrite this field of `draft` with `value`.
    pub fn apply(self, draft: &mut Student, value: String) {
        match self {
            Self::Name => draft.name = value,
            Self::Email => draft.email = value,
            Self::Course => draft.course = value,
        }
    }
}

/// Starting draft: the record being edited, or an empty template.
pub fn seed_draft(student: Option<&Student>) -> Student {
    student.cloned().unwrap_or_default()
}

/// Hand the draft to `on_save` exactly as typed.
pub fn submit_draft(draft: &Student, on_save: impl Fn(Student)) {
    on_save(draft.clone());
}

pub fn form_heading(editing: bool) -> &'static str {
    if editing { "Edit Student" } else { "Add Student" }
}

#[component]
pub fn StudentsForm(
    student: Option<Student>,
    on_save: Callback<Student>,
    on_close: Callback<()>,
) -> impl IntoView {
    let heading = form_heading(student.is_some());
    let draft = RwSignal::new(seed_draft(student.as_ref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.with_untracked(|d| submit_draft(d, |s| on_save.run(s)));
    };

    let inputs = StudentField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    name=field.name()
                    placeholder=field.placeholder()
                    required=true
                    prop:value=move || draft.with(|d| field.read(d))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| field.apply(d, value));
                    }
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="students-modal">
            <div class="students-modal-content">
                <h2>{heading}</h2>
                <form on:submit=on_submit>
                    {inputs}
                    <div class="form-buttons">
                        <button type="submit" class="students-btn">
                            "Save"
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
