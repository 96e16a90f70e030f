//! Form state for the report composer.
//!
//! Gathers the scattered signals into one `Copy` struct responsible for
//! holding the data, resetting it, and converting it into the create
//! request. Media drafts own their object URLs; every path that drops a
//! draft must revoke its URL first or the backing binary leaks.

use ajali_shared::protocol::{CreateIncidentRequest, MediaKind};
use ajali_shared::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use leptos::prelude::*;
use std::cell::Cell;
use web_sys::Url;

thread_local! {
    static NEXT_DRAFT_ID: Cell<u64> = const { Cell::new(0) };
}

/// A staged attachment: the picked file plus a preview object URL.
#[derive(Clone)]
pub struct MediaDraft {
    /// Client-local id, used only for list keys and removal.
    pub id: u64,
    pub file: web_sys::File,
    pub preview_url: String,
}

impl MediaDraft {
    /// Stage a picked file. None when the object URL cannot be minted.
    pub fn stage(file: web_sys::File) -> Option<Self> {
        let preview_url = Url::create_object_url_with_blob(&file).ok()?;
        let id = NEXT_DRAFT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Some(Self {
            id,
            file,
            preview_url,
        })
    }

    /// Revoke the preview URL. Call before dropping the draft.
    pub fn release(&self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}

/// Signals backing the incident form. `Copy`, so it passes freely into
/// event closures.
#[derive(Clone, Copy)]
pub struct FormState {
    pub description: RwSignal<String>,
    pub latitude: RwSignal<f64>,
    pub longitude: RwSignal<f64>,
    pub images: RwSignal<Vec<MediaDraft>, LocalStorage>,
    pub videos: RwSignal<Vec<MediaDraft>, LocalStorage>,
    pub loading: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            description: RwSignal::new(String::new()),
            latitude: RwSignal::new(DEFAULT_LATITUDE),
            longitude: RwSignal::new(DEFAULT_LONGITUDE),
            images: RwSignal::new_local(Vec::new()),
            videos: RwSignal::new_local(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    fn drafts_of(&self, kind: MediaKind) -> RwSignal<Vec<MediaDraft>, LocalStorage> {
        match kind {
            MediaKind::Image => self.images,
            MediaKind::Video => self.videos,
        }
    }

    /// Stage every file from a picker selection.
    pub fn stage_files(&self, kind: MediaKind, files: &web_sys::FileList) {
        let drafts = self.drafts_of(kind);
        for index in 0..files.length() {
            if let Some(draft) = files.get(index).and_then(MediaDraft::stage) {
                drafts.update(|list| list.push(draft));
            }
        }
    }

    /// Remove one draft, revoking its preview URL.
    pub fn remove_draft(&self, kind: MediaKind, id: u64) {
        self.drafts_of(kind).update(|list| {
            if let Some(position) = list.iter().position(|d| d.id == id) {
                list[position].release();
                list.remove(position);
            }
        });
    }

    /// Clear the description and drop all drafts after a successful
    /// submit. The picked position is kept.
    pub fn reset(&self) {
        self.description.set(String::new());
        self.release_all();
    }

    /// Revoke and drop every outstanding draft (also used on unmount).
    pub fn release_all(&self) {
        for drafts in [self.images, self.videos] {
            drafts.update(|list| {
                for draft in list.iter() {
                    draft.release();
                }
                list.clear();
            });
        }
    }

    /// Snapshot the current drafts of one kind for upload.
    pub fn take_files(&self, kind: MediaKind) -> Vec<web_sys::File> {
        self.drafts_of(kind)
            .with_untracked(|list| list.iter().map(|d| d.file.clone()).collect())
    }

    /// Convert to the create request; the status tag is always
    /// "under investigation" on submission.
    pub fn to_request(&self) -> CreateIncidentRequest {
        CreateIncidentRequest::new(
            self.description.get_untracked().trim().to_string(),
            self.latitude.get_untracked(),
            self.longitude.get_untracked(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
