use dioxus::document::eval;
use dioxus::prelude::*;

use cardio_core::model::{CardioOption, DisplayPrefs, Session, SessionId, filter_favorites};

use crate::context::AppContext;
use crate::toast::use_toasts;
use crate::vm::{ProgressVm, SessionRowVm, map_progress, map_session_rows};

use super::form::SessionForm;

/// Everything the page renders, replaced wholesale by each successful
/// fetch. Failed fetches leave the previous value in place.
#[derive(Clone, Debug, PartialEq, Default)]
struct SessionsData {
    sessions: Vec<Session>,
    options: Vec<CardioOption>,
    progress: Option<ProgressVm>,
}

#[component]
pub fn SessionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.session_log();
    let prefs = ctx.display_prefs();
    let link_opener = ctx.link_opener();
    let seed_description = ctx.seed_description().map(str::to_owned);

    let data = use_signal(SessionsData::default);
    let prefs_for_init = prefs.clone();
    let show_only_favorites = use_signal(move || prefs_for_init.load().show_only_favorites);
    let toasts = use_toasts();

    let service_for_fetch = service.clone();
    let resource = use_resource(move || {
        let service = service_for_fetch.clone();
        let mut data = data;
        async move {
            match service.overview().await {
                Ok(overview) => {
                    data.set(SessionsData {
                        options: CardioOption::from_descriptions(&overview.known_descriptions),
                        progress: Some(map_progress(&overview.progress)),
                        sessions: overview.sessions,
                    });
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to fetch sessions");
                }
            }
        }
    });

    let service_for_add = service.clone();
    let on_add = use_callback(move |(event, description, length): (FormEvent, String, String)| {
        event.prevent_default();
        let service = service_for_add.clone();
        let mut toasts = toasts;
        let mut resource = resource;
        spawn(async move {
            match service.add_session(&description, &length).await {
                Ok(()) => {
                    toasts.push("Added session");
                    resource.restart();
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to add session");
                }
            }
        });
    });

    let service_for_copy = service.clone();
    let on_copy = use_callback(move |row: SessionRowVm| {
        scroll_to_title();
        let service = service_for_copy.clone();
        let mut toasts = toasts;
        let mut resource = resource;
        spawn(async move {
            match service
                .copy_session(&row.description, row.video.as_ref(), row.length_secs)
                .await
            {
                Ok(()) => {
                    toasts.push(format!(
                        "Copied session: {} for {}",
                        row.description, row.length_str
                    ));
                    resource.restart();
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to copy session");
                }
            }
        });
    });

    let service_for_toggle = service.clone();
    let on_toggle = use_callback(move |id: SessionId| {
        let service = service_for_toggle.clone();
        let mut resource = resource;
        spawn(async move {
            match service.toggle_favorite(&id).await {
                Ok(()) => resource.restart(),
                Err(err) => {
                    tracing::error!(error = %err, "failed to toggle favorite");
                }
            }
        });
    });

    let prefs_for_save = prefs.clone();
    let on_filter_change = use_callback(move |only_favorites: bool| {
        let mut show_only_favorites = show_only_favorites;
        show_only_favorites.set(only_favorites);
        if let Err(err) = prefs_for_save.save(DisplayPrefs::new(only_favorites)) {
            tracing::error!(error = %err, "failed to save display prefs");
        }
    });

    let on_open_video = use_callback(move |url: String| {
        link_opener.open_url(&url);
    });

    let current = data();
    let only_favorites = show_only_favorites();
    let rows = map_session_rows(&filter_favorites(&current.sessions, only_favorites));

    rsx! {
        div { class: "page cardio-page",
            h1 { class: "cardio-title", "Cardio Sessions" }

            if let Some(progress) = current.progress.as_ref() {
                div { class: "progress-chips",
                    div {
                        class: "progress-text",
                        style: "background-color: {progress.weekly.color}",
                        "{progress.weekly.label}"
                    }
                    div {
                        class: "progress-text",
                        style: "background-color: {progress.monthly.color}",
                        "{progress.monthly.label}"
                    }
                }
            }

            SessionForm {
                options: current.options.clone(),
                seed_description,
                on_add,
            }

            div { class: "favorites-section",
                label {
                    input {
                        r#type: "checkbox",
                        checked: only_favorites,
                        onchange: move |evt| on_filter_change.call(evt.checked()),
                    }
                    "Show Only Favorites"
                }
            }

            table { class: "cardio-table",
                thead {
                    tr {
                        th {}
                        th { "Description" }
                        th { "YouTube URL" }
                        th { "Finish Time" }
                        th { "Length" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        SessionRow {
                            key: "{row.id}",
                            row: row.clone(),
                            on_toggle,
                            on_copy,
                            on_open_video,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(
    row: SessionRowVm,
    on_toggle: Callback<SessionId>,
    on_copy: Callback<SessionRowVm>,
    on_open_video: Callback<String>,
) -> Element {
    let id_for_toggle = row.id.clone();
    let row_for_copy = row.clone();
    let video_url = row.video.as_ref().map(|video| video.youtube_url().to_owned());
    let video_thumb = row
        .video
        .as_ref()
        .map(|video| video.thumbnail_url().to_owned());
    let star = if row.is_favorite { "★" } else { "☆" };
    let star_class = if row.is_favorite {
        "favorite-star favorite-star--on"
    } else {
        "favorite-star"
    };

    rsx! {
        tr {
            td {
                button {
                    class: "{star_class}",
                    r#type: "button",
                    aria_label: "Toggle favorite",
                    onclick: move |_| on_toggle.call(id_for_toggle.clone()),
                    "{star}"
                }
            }
            td { class: "cardio-description", "{row.description}" }
            td {
                if let (Some(url), Some(thumb)) = (video_url, video_thumb) {
                    img {
                        class: "video-thumb",
                        src: "{thumb}",
                        alt: "Open video",
                        onclick: move |_| on_open_video.call(url.clone()),
                    }
                }
            }
            td { "{row.finish_time_str}" }
            td { "{row.length_str}" }
            td {
                button {
                    class: "copy-btn",
                    r#type: "button",
                    onclick: move |_| on_copy.call(row_for_copy.clone()),
                    "Copy Session"
                }
            }
        }
    }
}

fn scroll_to_title() {
    let _ = eval(
        r#"document.querySelector(".cardio-title")?.scrollIntoView({ behavior: "smooth", block: "start" });"#,
    );
}
