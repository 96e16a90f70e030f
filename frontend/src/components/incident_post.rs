//! Social-style report card for the citizen feed.
//!
//! Support/comment state is per-card and in-memory only; it is a demo
//! affordance, not persisted anywhere. Share uses the platform share
//! sheet when present and falls back to copying the page URL.

use crate::api::use_api;
use crate::components::incident_list::status_chip_class;
use crate::components::icons::{
    AlertTriangle, Clock, MapPin, MessageCircle, Send, Share2, ThumbsUp,
};
use crate::notify::use_notifier;
use crate::web::date::{Date, format_server_date};
use crate::web::share;
use ajali_shared::{IncidentReport, format_coord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;

thread_local! {
    static NEXT_COMMENT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Key for the comment list; identical texts in the same second must not
/// collide.
fn next_comment_id() -> u64 {
    NEXT_COMMENT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// A comment held only for the lifetime of this card.
#[derive(Clone, PartialEq)]
struct LocalComment {
    id: u64,
    text: String,
    /// Formatted at creation time; comments never outlive the card.
    time: String,
}

/// What the lightbox is showing.
#[derive(Clone, PartialEq)]
struct SelectedMedia {
    url: String,
    is_video: bool,
}

#[component]
pub fn IncidentPost(incident: IncidentReport) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();

    let (liked, set_liked) = signal(false);
    let (show_comments, set_show_comments) = signal(false);
    let (comment_text, set_comment_text) = signal(String::new());
    let (comments, set_comments) = signal(Vec::<LocalComment>::new());
    let (selected, set_selected) = signal(Option::<SelectedMedia>::None);

    // The displayed count is 0 or 1: likes are not aggregated or persisted.
    let likes_count = move || if liked.get() { 1 } else { 0 };

    let description = incident.description.clone();
    let share_description = incident.description.clone();
    let status = incident.status;
    let date = format_server_date(&incident.created_at);

    let media_cells: Vec<SelectedMedia> = incident
        .images
        .iter()
        .map(|image| SelectedMedia {
            url: api.media_url(&image.image_url),
            is_video: false,
        })
        .chain(incident.videos.iter().map(|video| SelectedMedia {
            url: api.media_url(&video.video_url),
            is_video: true,
        }))
        .collect();

    let on_like = move |_| {
        set_liked.update(|liked| *liked = !*liked);
    };

    let on_share = move |_| {
        let text = share_description.clone();
        spawn_local(async move {
            let url = share::current_url();
            if share::share("Incident Report", &text, &url).await.is_ok() {
                return;
            }
            match share::copy_to_clipboard(&url).await {
                Ok(()) => notifier.success("Link copied to clipboard!"),
                Err(_) => notifier.error("Could not share this report"),
            }
        });
    };

    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_comments.update(|list| {
            list.push(LocalComment {
                id: next_comment_id(),
                text,
                time: Date::now().to_time_string(),
            });
        });
        set_comment_text.set(String::new());
    };

    view! {
        <div class="card bg-base-100 shadow">
            // Header
            <div class="p-4 border-b border-base-200">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <div class="bg-error/10 rounded-full p-2 text-error">
                            <span class="inline-block h-5 w-5"><AlertTriangle /></span>
                        </div>
                        <div>
                            <p class="font-semibold">"Incident Report"</p>
                            <div class="flex items-center gap-1 text-sm text-base-content/60">
                                <span class="h-4 w-4"><Clock /></span>
                                <span>{date}</span>
                            </div>
                        </div>
                    </div>
                    <span class=status_chip_class(status)>{status.label()}</span>
                </div>
            </div>

            // Body
            <div class="p-4 space-y-4">
                <p>{description}</p>

                <Show when={
                    let has_media = !media_cells.is_empty();
                    move || has_media
                }>
                    <div class="grid grid-cols-3 gap-2">
                        {media_cells
                            .iter()
                            .map(|cell| {
                                let cell = cell.clone();
                                let open = cell.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="rounded-lg overflow-hidden border border-base-200"
                                        on:click=move |_| set_selected.set(Some(open.clone()))
                                    >
                                        {if cell.is_video {
                                            view! {
                                                <video src=cell.url.clone() class="h-24 w-full object-cover" muted></video>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <img src=cell.url.clone() class="h-24 w-full object-cover" />
                                            }
                                            .into_any()
                                        }}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <div class="flex items-center gap-1 text-sm text-base-content/60">
                    <span class="h-4 w-4"><MapPin /></span>
                    <span>
                        {format_coord(incident.latitude)} ", " {format_coord(incident.longitude)}
                    </span>
                </div>
            </div>

            // Interaction stats
            <Show when=move || { likes_count() > 0 || comments.with(|c| !c.is_empty()) }>
                <div class="px-4 py-2 border-t border-base-200 flex items-center gap-4 text-sm text-base-content/60">
                    <Show when=move || { likes_count() > 0 }>
                        <div class="flex items-center gap-1 text-error">
                            <span class="h-4 w-4"><ThumbsUp /></span>
                            <span>{likes_count}</span>
                        </div>
                    </Show>
                    <Show when=move || comments.with(|c| !c.is_empty())>
                        <button
                            class="hover:text-base-content"
                            on:click=move |_| set_show_comments.update(|v| *v = !*v)
                        >
                            {move || comments.with(|c| c.len())} " comments"
                        </button>
                    </Show>
                </div>
            </Show>

            // Actions
            <div class="flex items-center justify-around p-4 border-t border-base-200">
                <button
                    on:click=on_like
                    class=move || if liked.get() {
                        "btn btn-ghost btn-sm gap-2 text-error"
                    } else {
                        "btn btn-ghost btn-sm gap-2"
                    }
                >
                    <span class="h-5 w-5"><ThumbsUp /></span>
                    "Support"
                </button>
                <button
                    on:click=move |_| set_show_comments.update(|v| *v = !*v)
                    class="btn btn-ghost btn-sm gap-2"
                >
                    <span class="h-5 w-5"><MessageCircle /></span>
                    "Comment"
                </button>
                <button on:click=on_share class="btn btn-ghost btn-sm gap-2">
                    <span class="h-5 w-5"><Share2 /></span>
                    "Share"
                </button>
            </div>

            // Comments
            <Show when=move || show_comments.get()>
                <div class="p-4 border-t border-base-200 space-y-3">
                    <For
                        each=move || comments.get()
                        key=|comment| comment.id
                        children=move |comment: LocalComment| {
                            view! {
                                <div class="bg-base-200 rounded-lg p-3">
                                    <p class="text-sm">{comment.text}</p>
                                    <p class="text-xs text-base-content/60 mt-1">{comment.time}</p>
                                </div>
                            }
                        }
                    />

                    <form on:submit=on_comment class="flex items-center gap-2">
                        <input
                            type="text"
                            placeholder="Write a comment..."
                            class="input input-bordered input-sm flex-1 rounded-full"
                            prop:value=comment_text
                            on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-ghost btn-sm btn-circle text-error"
                            disabled=move || comment_text.with(|t| t.trim().is_empty())
                        >
                            <span class="h-5 w-5"><Send /></span>
                        </button>
                    </form>
                </div>
            </Show>

            // Lightbox: backdrop click closes, no network involved.
            <Show when=move || selected.get().is_some()>
                <div
                    class="fixed inset-0 z-50 bg-black/70 flex items-center justify-center p-4"
                    on:click=move |_| set_selected.set(None)
                >
                    <div class="max-w-3xl max-h-full" on:click=|ev| ev.stop_propagation()>
                        {move || selected.get().map(|media| {
                            if media.is_video {
                                view! {
                                    <video src=media.url class="max-h-[80vh] rounded-lg" controls autoplay></video>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <img src=media.url class="max-h-[80vh] rounded-lg" />
                                }
                                .into_any()
                            }
                        })}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_comments_get_distinct_keys() {
        let a = LocalComment {
            id: next_comment_id(),
            text: "Stay safe".into(),
            time: "9:26:53 AM".into(),
        };
        let b = LocalComment {
            id: next_comment_id(),
            text: "Stay safe".into(),
            time: "9:26:53 AM".into(),
        };
        assert_ne!(a.id, b.id);
    }
}
