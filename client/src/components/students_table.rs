//! Stateless table of students with per-row edit and delete actions.

#[cfg(test)]
#[path = "students_table_test.rs"]
mod students_table_test;

use leptos::prelude::*;

use crate::net::types::Student;

/// Text for the ID column. Unsaved drafts have no id and render blank.
pub fn display_id(student: &Student) -> String {
    student.id.map(|id| id.to_string()).unwrap_or_default()
}

/// Report an Edit click on `row`.
pub fn edit_row(row: &Student, on_edit: impl Fn(Student)) {
    on_edit(row.clone());
}

/// Report a Delete click on `row`. Rows without an id cannot be deleted.
pub fn delete_row(row: &Student, on_delete: impl Fn(i64)) {
    if let Some(id) = row.id {
        on_delete(id);
    }
}

/// Renders `students` as rows. Holds no state of its own.
#[component]
pub fn StudentsTable(
    #[prop(into)] students: Signal<Vec<Student>>,
    on_edit: Callback<Student>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <table class="students-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Course"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    students
                        .get()
                        .into_iter()
                        .map(|s| {
                            let row = s.clone();
                            let deletable = s.id.is_some();
                            view! {
                                <tr>
                                    <td>{display_id(&s)}</td>
                                    <td>{s.name}</td>
                                    <td>{s.email}</td>
                                    <td>{s.course}</td>
                                    <td>
                                        <button
                                            class="edit-btn"
                                            on:click={
                                                let row = row.clone();
                                                move |_| edit_row(&row, |student| on_edit.run(student))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            disabled=!deletable
                                            on:click=move |_| delete_row(&row, |id| on_delete.run(id))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
