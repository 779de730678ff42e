//! Modal for starting or joining a meeting

use intervu_core::modal::{meeting_id_from_link, meeting_path};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

/// Shown under the link input when no meeting id can be read from it
pub const INVALID_LINK_MESSAGE: &str = "Please enter a valid meeting link.";

/// Meeting modal
///
/// In join mode the user pastes a meeting link; otherwise a fresh meeting
/// id is created. Both flows close the modal and navigate to the meeting room.
#[component]
pub fn MeetingModal<F>(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] is_join_meeting: Signal<bool>,
    on_close: F,
) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let navigate = use_navigate();
    let meeting_link = RwSignal::new(String::new());
    let link_error = RwSignal::new(None::<&'static str>);

    let close = move || {
        meeting_link.set(String::new());
        link_error.set(None);
        on_close();
    };

    let start_meeting = {
        let close = close.clone();
        let navigate = navigate.clone();
        move || {
            let meeting_id = Uuid::new_v4().to_string();
            log::info!("Starting meeting {meeting_id}");
            close();
            navigate(&meeting_path(&meeting_id), NavigateOptions::default());
        }
    };

    let join_meeting = {
        let close = close.clone();
        move || match meeting_id_from_link(&meeting_link.get_untracked()) {
            Ok(meeting_id) => {
                log::info!("Joining meeting {meeting_id}");
                close();
                navigate(&meeting_path(&meeting_id), NavigateOptions::default());
            }
            Err(e) => {
                log::debug!("Rejected meeting link: {e}");
                link_error.set(Some(INVALID_LINK_MESSAGE));
            }
        }
    };

    move || {
        if !is_open.get() {
            return None;
        }

        let heading = title.get();
        let close_overlay = close.clone();
        let close_button = close.clone();
        let close_cancel = close.clone();

        let body = if is_join_meeting.get() {
            let join_meeting = join_meeting.clone();
            view! {
                <div class="modal-body">
                    <input
                        type="text"
                        class="meeting-link-input"
                        placeholder="Paste meeting link here..."
                        prop:value=move || meeting_link.get()
                        on:input=move |ev| {
                            meeting_link.set(event_target_value(&ev));
                            link_error.set(None);
                        }
                    />
                    {move || link_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close_cancel()>
                            "Cancel"
                        </button>
                        <button type="button" class="btn-primary" on:click=move |_| join_meeting()>
                            "Join Meeting"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        } else {
            let start_meeting = start_meeting.clone();
            view! {
                <div class="modal-body">
                    <p class="modal-hint">"Start an instant call and share the link with your candidate."</p>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close_cancel()>
                            "Cancel"
                        </button>
                        <button type="button" class="btn-primary" on:click=move |_| start_meeting()>
                            "Start Meeting"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        };

        Some(view! {
            <div class="modal-overlay" on:click=move |_| close_overlay()>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    <header class="modal-header">
                        <h2>{heading}</h2>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close_button()>
                            "×"
                        </button>
                    </header>
                    {body}
                </div>
            </div>
        })
    }
}
