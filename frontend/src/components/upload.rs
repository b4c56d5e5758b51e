//! Document upload component with drag & drop support.
//!
//! The presentation adapter for the upload gate: wires drop, picker,
//! clear, and submit events to the gate and renders the pending
//! selection. The actual upload is a conventional multipart form post
//! handled by the browser once the gate lets it through.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent, SubmitEvent};

use clauseease_core::{
    format_file_size, truncate_text, CandidateFile, Notice, RejectionReason, UploadGate,
    MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF,
};

use crate::components::notices::push_notice;
use crate::services::submit::install_file;
use crate::types::ActiveNotice;
use crate::{FILE_NAME_DISPLAY_LEN, UPLOAD_ENDPOINT};

#[component]
pub fn UploadSection(
    gate: ReadSignal<UploadGate>,
    set_gate: WriteSignal<UploadGate>,
    set_notices: WriteSignal<Vec<ActiveNotice>>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    // Run a candidate through the gate; on success install it into the
    // form input so the post carries it. Returns whether it was admitted.
    let admit = move |file: web_sys::File| -> bool {
        let candidate = CandidateFile::new(file.name(), file.size() as u64, file.type_());
        let label = format!("{} ({})", candidate.name, format_file_size(candidate.size));

        let mut verdict: Result<(), RejectionReason> = Ok(());
        set_gate.update(|gate| verdict = gate.select(candidate).map(|_| ()));

        match verdict {
            Ok(()) => {
                log::info!("📄 Selected {label}");
                if let Some(input) = file_input.get_untracked() {
                    if let Err(e) = install_file(&input, &file) {
                        log::error!("Failed to attach file to the form: {e:?}");
                    }
                }
                true
            }
            Err(reason) => {
                log::warn!("Rejected {label}: {reason}");
                push_notice(set_notices, Notice::from(&reason));
                false
            }
        }
    };

    // Handler for the file picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        if !admit(file) {
            // Leave no rejected file behind for the form post
            input.set_value("");
        }
    };

    // Drag and drop handlers
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        let Some(transfer) = ev.data_transfer() else { return };
        let Some(files) = transfer.files() else { return };
        // A new selection always replaces the prior one; extra files are ignored
        if let Some(file) = files.get(0) {
            admit(file);
        }
    };

    // Clicking the zone opens the picker while no file is selected
    let trigger_file_input = move |_| {
        if gate.with_untracked(|gate| gate.can_submit()) {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_clear = move |ev: MouseEvent| {
        ev.stop_propagation();
        set_gate.update(|gate| gate.clear());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        log::info!("Selection cleared");
    };

    // Submission gate: block the post unless a validated file is active
    let on_submit = move |ev: SubmitEvent| {
        let gate_now = gate.get_untracked();
        match gate_now.submit() {
            Ok(file) => {
                log::info!("📤 Submitting {} for analysis", file.name);
            }
            Err(blocked) => {
                ev.prevent_default();
                push_notice(set_notices, Notice::from(&blocked));
            }
        }
    };

    // Reactive labels for the selection card
    let file_name = move || {
        gate.with(|gate| {
            gate.selection()
                .map(|f| truncate_text(&f.name, FILE_NAME_DISPLAY_LEN))
                .unwrap_or_default()
        })
    };
    let file_size = move || {
        gate.with(|gate| {
            gate.selection()
                .map(|f| format_file_size(f.size))
                .unwrap_or_default()
        })
    };
    let file_kind = move || {
        gate.with(|gate| {
            gate.selection()
                .and_then(|f| f.kind())
                .map(|k| k.label())
                .unwrap_or_default()
        })
    };

    view! {
        <form
            class="upload-form"
            id="uploadForm"
            method="post"
            action=UPLOAD_ENDPOINT
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div
                class="upload-area"
                id="uploadArea"
                class:dragover=move || drag_over.get()
                on:click=trigger_file_input
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <Show
                    when=move || gate.with(|gate| gate.can_submit())
                    fallback=|| view! {
                        <div class="upload-content">
                            <div class="upload-icon">"📄"</div>
                            <div class="upload-text">"Drag & drop your document here"</div>
                            <div class="upload-hint">"or click to browse"</div>
                            <div class="upload-hint mt-20">
                                "PDF and DOCX, up to 16 MB"
                            </div>
                        </div>
                    }
                >
                    <div class="file-info">
                        <div class="file-name" id="fileName">{file_name}</div>
                        <div class="file-meta">
                            <span class="file-size" id="fileSize">{file_size}</span>
                            " - "
                            <span class="file-kind">{file_kind}</span>
                        </div>
                        <button type="button" class="btn btn-clear" on:click=on_clear>
                            "Remove"
                        </button>
                    </div>
                </Show>

                <input
                    node_ref=file_input
                    type="file"
                    id="file"
                    name="file"
                    accept=format!("{MEDIA_TYPE_PDF},{MEDIA_TYPE_DOCX}")
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <button
                type="submit"
                class="btn btn-analyze"
                id="analyzeBtn"
                disabled=move || gate.with(|gate| !gate.can_submit())
            >
                "Analyze Document"
            </button>
        </form>
    }
}
