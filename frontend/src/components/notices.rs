//! Transient notice stack.
//!
//! Renders gate rejections and status messages as dismissible notices
//! that expire on their own after a fixed delay. The delay is cosmetic;
//! the gate's behavior never depends on it.

use std::sync::atomic::{AtomicUsize, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use clauseease_core::{Notice, NoticeLevel};

use crate::types::ActiveNotice;
use crate::{MAX_NOTICES, NOTICE_DISMISS_MS};

static NOTICE_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Append to the stack, dropping the oldest entry past [`MAX_NOTICES`].
fn push_capped(notices: &mut Vec<ActiveNotice>, entry: ActiveNotice) {
    notices.push(entry);
    if notices.len() > MAX_NOTICES {
        notices.remove(0);
    }
}

/// Surface a notice and schedule its auto-dismiss.
///
/// Also mirrors the message to the console, errors at warn level.
pub fn push_notice(set_notices: WriteSignal<Vec<ActiveNotice>>, notice: Notice) {
    let id = NOTICE_SEQ.fetch_add(1, Ordering::Relaxed);

    match notice.level {
        NoticeLevel::Error | NoticeLevel::Warning => log::warn!("{}", notice.message),
        _ => log::info!("{}", notice.message),
    }

    set_notices.update(|notices| push_capped(notices, ActiveNotice::new(id, notice)));

    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        set_notices.update(|notices| notices.retain(|n| n.id != id));
    });
}

/// Notice stack component.
#[component]
pub fn NoticeStack(
    /// Signal for the active notices
    notices: ReadSignal<Vec<ActiveNotice>>,
    /// Set notices signal (for dismissal)
    set_notices: WriteSignal<Vec<ActiveNotice>>,
) -> impl IntoView {
    view! {
        <div class="notice-stack" id="noticeStack">
            <For
                each=move || notices.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let icon = entry.notice.level.icon();
                    let css_class = format!("notice {}", entry.notice.level.css_class());

                    let on_dismiss = move |_| {
                        set_notices.update(|notices| notices.retain(|n| n.id != id));
                    };

                    view! {
                        <div class=css_class>
                            <i class=format!("fas fa-{icon} me-2")></i>
                            <span class="notice-message">{entry.notice.message.clone()}</span>
                            <span class="notice-time">{entry.timestamp.clone()}</span>
                            <button type="button" class="notice-close" on:click=on_dismiss>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_bounded_oldest_out_first() {
        let mut notices = Vec::new();
        for id in 0..MAX_NOTICES + 2 {
            push_capped(&mut notices, ActiveNotice::new(id, Notice::info("hello")));
        }

        assert_eq!(notices.len(), MAX_NOTICES);
        assert_eq!(notices.first().unwrap().id, 2);
        assert_eq!(notices.last().unwrap().id, MAX_NOTICES + 1);
    }
}
