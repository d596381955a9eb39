//! Update function for the dashboard component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state, and returns whether the view must re-render.
//!
//! Key behaviors
//! - Course loading with a sequence guard: every fetch gets a number from the
//!   `FetchGuard`; a completion whose number is no longer the latest is
//!   dropped, so a slow response can never clobber a newer snapshot. The
//!   retry button funnels back into `Msg::LoadCourses`.
//! - Roster mutations are applied synchronously; the submitting form has
//!   already validated the draft. An update against a vanished id is a no-op
//!   plus a toast, never a crash.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::CatalogState;
use common::roster::RosterError;

use crate::api::fetch_courses;
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadCourses => {
            let seq = component.fetch_guard.begin();
            component.catalog = CatalogState::Loading;

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_courses().await {
                    Ok(courses) => link.send_message(Msg::CoursesLoaded { seq, courses }),
                    Err(err) => {
                        error!("course fetch failed:", err.to_string());
                        link.send_message(Msg::CoursesFailed {
                            seq,
                            message: err.to_string(),
                        });
                    }
                }
            });
            true
        }
        Msg::CoursesLoaded { seq, courses } => {
            if !component.fetch_guard.accepts(seq) {
                // Superseded by a newer fetch; keep the fresher snapshot.
                return false;
            }
            component.catalog = CatalogState::Ready(courses);
            true
        }
        Msg::CoursesFailed { seq, message } => {
            if !component.fetch_guard.accepts(seq) {
                return false;
            }
            component.catalog = CatalogState::Failed(message);
            true
        }
        Msg::SearchChanged(term) => {
            component.search = term;
            true
        }
        Msg::OpenCreateForm => {
            component.editing = None;
            component.form_open = true;
            true
        }
        Msg::OpenEditForm(id) => {
            if component.roster.get(id).is_some() {
                component.editing = Some(id);
                component.form_open = true;
                true
            } else {
                false
            }
        }
        Msg::CloseForm => {
            component.form_open = false;
            component.editing = None;
            true
        }
        Msg::SubmitDraft(draft) => {
            match component.editing {
                Some(id) => match component.roster.update(id, draft.into()) {
                    Ok(student) => {
                        show_toast(&format!("{} has been updated successfully!", student.name));
                    }
                    Err(RosterError::NotFound(_)) => {
                        show_toast("That student no longer exists.");
                    }
                },
                None => {
                    let student = component.roster.create(draft);
                    show_toast(&format!("{} has been added successfully!", student.name));
                }
            }
            component.form_open = false;
            component.editing = None;
            true
        }
        Msg::DeleteStudent(id) => {
            component.roster.delete(id);
            show_toast("Student record has been deleted.");
            true
        }
    }
}
