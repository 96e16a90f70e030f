//! Report composer: description, map-picked coordinates, staged media.
//!
//! Submit order matters: the report is created first (uploads need the
//! server-assigned id), then image and video batches upload concurrently
//! and the user sees the join of all of them.

mod form_state;

use crate::api::use_api;
use crate::components::icons::{Camera, MapPin, Trash2, VideoIcon};
use crate::notify::use_notifier;
use ajali_shared::protocol::MediaKind;
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::web::map::{LeafletMap, Marker};
use form_state::{FormState, MediaDraft};

const FORM_MAP_ZOOM: f64 = 13.0;

#[component]
pub fn IncidentForm(#[prop(into)] on_success: Callback<()>) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let state = FormState::new();

    let map_ref = NodeRef::<leptos::html::Div>::new();
    let map_handle = StoredValue::new_local(Option::<LeafletMap>::None);

    // Mount the picker map once the container exists. A click anywhere
    // replaces the position and moves the marker; no drag, no geolocation.
    Effect::new(move |_| {
        let Some(container) = map_ref.get() else {
            return;
        };
        if map_handle.with_value(|m| m.is_some()) {
            return;
        }
        let map = LeafletMap::create(
            &container,
            state.latitude.get_untracked(),
            state.longitude.get_untracked(),
            FORM_MAP_ZOOM,
        );
        let marker = Marker::place(
            &map,
            state.latitude.get_untracked(),
            state.longitude.get_untracked(),
        );
        map.on_click(move |lat, lng| {
            state.latitude.set(lat);
            state.longitude.set(lng);
            marker.move_to(lat, lng);
        });
        map_handle.set_value(Some(map));
    });

    // Previews hold file binaries; release them when the form goes away.
    on_cleanup(move || {
        state.release_all();
        map_handle.update_value(|handle| {
            if let Some(map) = handle.take() {
                map.remove();
            }
        });
    });

    let pick_files = move |ev: web_sys::Event, kind: MediaKind| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            state.stage_files(kind, &files);
        }
        // Allow re-picking the same file later.
        input.set_value("");
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Double-submit guard.
        if state.loading.get_untracked() {
            return;
        }
        let request = state.to_request();
        if request.description.is_empty() {
            return;
        }
        state.loading.set(true);

        let api = api.clone();
        spawn_local(async move {
            let created = match api.create_incident(&request).await {
                Ok(created) => created,
                Err(err) => {
                    notifier.error(err.message());
                    state.loading.set(false);
                    return;
                }
            };

            // Report exists from here on; a media failure must not
            // retract it.
            let images = state.take_files(MediaKind::Image);
            let videos = state.take_files(MediaKind::Video);
            let upload = |kind: MediaKind, files: Vec<web_sys::File>| {
                let api = api.clone();
                async move {
                    join_all(
                        files
                            .iter()
                            .map(|file| {
                                let api = api.clone();
                                async move { api.attach_media(created.id, kind, file).await }
                            })
                            .collect::<Vec<_>>(),
                    )
                    .await
                }
            };
            let (image_results, video_results) = futures::join!(
                upload(MediaKind::Image, images),
                upload(MediaKind::Video, videos)
            );

            let upload_error = image_results
                .into_iter()
                .chain(video_results)
                .find_map(Result::err);

            match upload_error {
                None => {
                    state.reset();
                    on_success.run(());
                    notifier.success("Incident reported successfully");
                }
                Some(err) => {
                    notifier.error(format!("Report saved, but media upload failed: {}", err.message()));
                }
            }
            state.loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <textarea
                placeholder="Describe the incident..."
                class="textarea textarea-bordered w-full resize-none"
                rows=4
                required
                prop:value=state.description
                on:input=move |ev| state.description.set(event_target_value(&ev))
            ></textarea>

            <div class="flex items-center gap-1 text-sm text-base-content/70">
                <span class="h-4 w-4"><MapPin /></span>
                <span>"Click the map to set the incident location"</span>
            </div>
            <div node_ref=map_ref class="h-52 rounded-lg overflow-hidden border border-base-300"></div>

            <div class="flex items-center gap-4">
                <label for="incident-images" class="btn btn-ghost btn-sm gap-2 cursor-pointer">
                    <span class="h-5 w-5"><Camera /></span>
                    "Photo"
                </label>
                <input
                    id="incident-images"
                    type="file"
                    accept="image/*"
                    multiple
                    class="hidden"
                    on:change=move |ev| pick_files(ev, MediaKind::Image)
                />
                <label for="incident-videos" class="btn btn-ghost btn-sm gap-2 cursor-pointer">
                    <span class="h-5 w-5"><VideoIcon /></span>
                    "Video"
                </label>
                <input
                    id="incident-videos"
                    type="file"
                    accept="video/*"
                    multiple
                    class="hidden"
                    on:change=move |ev| pick_files(ev, MediaKind::Video)
                />
            </div>

            <MediaDraftGrid state=state kind=MediaKind::Image />
            <MediaDraftGrid state=state kind=MediaKind::Video />

            <div class="flex justify-end">
                <button type="submit" disabled=move || state.loading.get() class="btn btn-error text-white">
                    {move || if state.loading.get() {
                        view! { <span class="loading loading-spinner"></span> "Reporting..." }.into_any()
                    } else {
                        "Report Incident".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}

/// Thumbnails for the staged drafts of one kind, each with a remove
/// affordance that revokes the preview URL.
#[component]
fn MediaDraftGrid(state: FormState, kind: MediaKind) -> impl IntoView {
    let drafts = match kind {
        MediaKind::Image => state.images,
        MediaKind::Video => state.videos,
    };

    view! {
        <Show when=move || drafts.with(|list| !list.is_empty())>
            <div class="grid grid-cols-3 gap-2">
                <For
                    each=move || drafts.get()
                    key=|draft| draft.id
                    children=move |draft: MediaDraft| {
                        let id = draft.id;
                        view! {
                            <div class="relative rounded-lg overflow-hidden border border-base-300">
                                {match kind {
                                    MediaKind::Image => view! {
                                        <img src=draft.preview_url.clone() class="h-24 w-full object-cover" />
                                    }
                                    .into_any(),
                                    MediaKind::Video => view! {
                                        <video src=draft.preview_url.clone() class="h-24 w-full object-cover" muted></video>
                                    }
                                    .into_any(),
                                }}
                                <button
                                    type="button"
                                    class="btn btn-xs btn-circle btn-error absolute top-1 right-1 text-white"
                                    on:click=move |_| state.remove_draft(kind, id)
                                >
                                    <span class="h-3 w-3"><Trash2 /></span>
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
