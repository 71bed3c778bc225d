//! Students management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's `StudentsState` signal and runs the fetch/save/delete
//! flows from `state::students` against the `StudentsApi` provided by `App`.
//! Rendering is delegated to `StudentsTable` and `StudentsForm`.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::students_form::StudentsForm;
use crate::components::students_table::StudentsTable;
use crate::net::api::StudentsApi;
use crate::net::types::Student;
use crate::state::students::{self, StudentsState};
use crate::util::task::spawn_flow;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let api = expect_context::<Arc<dyn StudentsApi>>();
    let state = RwSignal::new(StudentsState::default());

    let mount_api = api.clone();
    Effect::new(move || {
        let api = mount_api.clone();
        spawn_flow(async move { students::refresh(api.as_ref(), &state).await });
    });

    let on_add = move |_| state.update(StudentsState::open_create);
    let on_edit = Callback::new(move |student: Student| state.update(|s| s.open_edit(student)));
    let on_close = Callback::new(move |()| state.update(StudentsState::close_form));

    let delete_api = api.clone();
    let on_delete = Callback::new(move |id: i64| {
        let api = delete_api.clone();
        spawn_flow(async move { students::delete_student(api.as_ref(), &state, id).await });
    });

    let on_save = Callback::new(move |draft: Student| {
        let api = api.clone();
        spawn_flow(async move { students::save_student(api.as_ref(), &state, draft).await });
    });

    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    // Keyed on the selection so each edit/add mounts a freshly seeded form.
    let form_target = Memo::new(move |_| state.with(StudentsState::form_target));

    view! {
        <div class="students-container">
            <h1 class="students-title">"Students Management"</h1>
            <button class="students-btn" on:click=on_add>
                "+ Add Student"
            </button>
            <StudentsTable students=items on_edit=on_edit on_delete=on_delete />
            {move || {
                form_target
                    .get()
                    .map(|target| {
                        view! {
                            <StudentsForm
                                student=target.student().cloned()
                                on_save=on_save
                                on_close=on_close
                            />
                        }
                    })
            }}
        </div>
    }
}
