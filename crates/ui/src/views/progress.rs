use chrono::Utc;
use dioxus::prelude::*;

use exam_core::model::{Badge, InterviewKind, KindAverage, TargetId};
use services::ProgressTracker;

use crate::vm::{InterviewForm, TargetForm, format_date, kind_from_value, status_from_value};

/// One history row, snapshotted out of the tracker for rendering.
#[derive(Clone, PartialEq)]
struct RecordRow {
    company: String,
    date: String,
    kind: &'static str,
    score: u32,
    notes: String,
}

#[derive(Clone, PartialEq)]
struct TargetRow {
    id: TargetId,
    name: String,
    status: &'static str,
}

#[component]
pub fn ProgressView() -> Element {
    let tracker = use_context::<Signal<ProgressTracker>>();
    let filter = use_signal(|| None::<InterviewKind>);
    let mut show_log_modal = use_signal(|| false);
    let mut show_target_modal = use_signal(|| false);

    let (summary, records, targets) = {
        let guard = tracker.read();
        let records: Vec<RecordRow> = guard
            .records_by_kind(*filter.read())
            .iter()
            .map(|record| RecordRow {
                company: record.company().to_owned(),
                date: format_date(record.date()),
                kind: record.kind().label(),
                score: record.score(),
                notes: record.notes().unwrap_or_default().to_owned(),
            })
            .collect();
        let targets: Vec<TargetRow> = guard
            .targets()
            .iter()
            .map(|target| TargetRow {
                id: target.id(),
                name: target.name().to_owned(),
                status: target.status().label(),
            })
            .collect();
        (guard.summary(), records, targets)
    };

    rsx! {
        div { class: "page progress-page",
            header { class: "progress-header",
                h1 { "Your Progress" }
                p { "Track your interviews, scores, and target companies." }
            }

            div { class: "stat-grid",
                StatCard { label: "Interviews Logged", value: summary.interviews_logged().to_string() }
                StatCard { label: "Questions Practiced", value: summary.questions_practiced().to_string() }
                StatCard { label: "Average Score", value: format!("{}%", summary.average_score()) }
            }

            div { class: "progress-columns",
                section { class: "panel",
                    div { class: "panel__head",
                        h2 { "Interview History" }
                        HistoryFilter { filter }
                    }
                    if records.is_empty() {
                        p { class: "panel__empty", "No interviews logged yet." }
                    } else {
                        table { class: "history-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Company" }
                                    th { "Type" }
                                    th { "Score" }
                                    th { "Notes" }
                                }
                            }
                            tbody {
                                for row in records {
                                    tr {
                                        td { "{row.date}" }
                                        td { "{row.company}" }
                                        td { "{row.kind}" }
                                        td { "{row.score}%" }
                                        td { class: "history-table__notes", "{row.notes}" }
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_log_modal.set(true),
                        "Log Interview"
                    }
                }

                div { class: "progress-side",
                    section { class: "panel",
                        h2 { "Performance by Type" }
                        for entry in summary.kind_averages().iter().copied() {
                            KindAverageBar { entry }
                        }
                    }
                    section { class: "panel",
                        div { class: "panel__head",
                            h2 { "Target Companies" }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| show_target_modal.set(true),
                                "Add Target"
                            }
                        }
                        ul { class: "target-list",
                            for target in targets {
                                TargetItem { tracker, target }
                            }
                        }
                    }
                    section { class: "panel",
                        h2 { "Achievements" }
                        div { class: "badge-grid",
                            for badge in summary.badges().iter().copied() {
                                BadgeCard { badge }
                            }
                        }
                    }
                }
            }

            if show_log_modal() {
                LogInterviewModal { tracker, show: show_log_modal }
            }
            if show_target_modal() {
                AddTargetModal { tracker, show: show_target_modal }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-card__value", "{value}" }
            p { class: "stat-card__label", "{label}" }
        }
    }
}

#[component]
fn HistoryFilter(mut filter: Signal<Option<InterviewKind>>) -> Element {
    rsx! {
        select {
            class: "select",
            onchange: move |evt| filter.set(kind_from_value(&evt.value())),
            option { value: "All", selected: filter.read().is_none(), "All" }
            for kind in InterviewKind::ALL {
                option {
                    value: "{kind.label()}",
                    selected: *filter.read() == Some(kind),
                    "{kind.label()}"
                }
            }
        }
    }
}

#[component]
fn KindAverageBar(entry: KindAverage) -> Element {
    let label = entry.kind.label();
    let (value_label, width) = match entry.average {
        Some(avg) => (format!("{avg}%"), avg.min(100)),
        None => ("--".to_owned(), 0),
    };

    rsx! {
        div { class: "kind-average",
            div { class: "kind-average__row",
                span { "{label}" }
                span { "{value_label}" }
            }
            div { class: "kind-average__track",
                div { class: "kind-average__fill", style: "width: {width}%;" }
            }
        }
    }
}

#[component]
fn TargetItem(mut tracker: Signal<ProgressTracker>, target: TargetRow) -> Element {
    let target_id = target.id;

    rsx! {
        li { class: "target-item",
            span { class: "target-item__name", "{target.name}" }
            select {
                class: "select",
                onchange: move |evt| {
                    if let Some(status) = status_from_value(&evt.value()) {
                        // The id came from the list; unknown-target here
                        // would mean a concurrent removal we don't support.
                        let _ = tracker.write().set_target_status(target_id, status);
                    }
                },
                for status in exam_core::model::ApplicationStatus::ALL {
                    option {
                        value: "{status.label()}",
                        selected: target.status == status.label(),
                        "{status.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn BadgeCard(badge: Badge) -> Element {
    let class = if badge.earned {
        "badge-card badge-card--earned"
    } else {
        "badge-card"
    };

    rsx! {
        div { class: "{class}",
            p { class: "badge-card__name", "{badge.kind.name()}" }
            p { class: "badge-card__desc", "{badge.kind.description()}" }
        }
    }
}

#[component]
fn LogInterviewModal(tracker: Signal<ProgressTracker>, mut show: Signal<bool>) -> Element {
    let mut form = use_signal(|| InterviewForm::new(Utc::now().date_naive()));
    let error = use_signal(|| None::<String>);

    let submit = use_callback(move |()| {
        let mut error = error;
        let mut show = show;
        let mut tracker = tracker;
        match form.read().to_draft() {
            Ok(draft) => {
                if tracker.write().log_interview(draft).is_ok() {
                    show.set(false);
                } else {
                    error.set(Some("Could not save the interview.".to_owned()));
                }
            }
            Err(message) => error.set(Some(message)),
        }
    });

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h3 { "Log Interview" }
                if let Some(message) = error.read().as_ref() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "field",
                    span { "Company" }
                    input {
                        value: "{form.read().company}",
                        oninput: move |evt| form.write().company = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Date" }
                    input {
                        r#type: "date",
                        value: "{form.read().date}",
                        oninput: move |evt| form.write().date = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Type" }
                    select {
                        class: "select",
                        onchange: move |evt| {
                            if let Some(kind) = kind_from_value(&evt.value()) {
                                form.write().kind = kind;
                            }
                        },
                        for kind in InterviewKind::ALL {
                            option {
                                value: "{kind.label()}",
                                selected: form.read().kind == kind,
                                "{kind.label()}"
                            }
                        }
                    }
                }
                label { class: "field",
                    span { "Score (%)" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "100",
                        value: "{form.read().score}",
                        oninput: move |evt| form.write().score = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Notes" }
                    textarea {
                        value: "{form.read().notes}",
                        oninput: move |evt| form.write().notes = evt.value(),
                    }
                }
                div { class: "modal__actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| submit.call(()),
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn AddTargetModal(tracker: Signal<ProgressTracker>, mut show: Signal<bool>) -> Element {
    let mut form = use_signal(TargetForm::new);
    let error = use_signal(|| None::<String>);

    let submit = use_callback(move |()| {
        let mut error = error;
        let mut show = show;
        let mut tracker = tracker;
        let (name, status) = {
            let guard = form.read();
            (guard.validated_name(), guard.status)
        };
        match name {
            Ok(name) => {
                if tracker.write().add_target(name, status).is_ok() {
                    show.set(false);
                } else {
                    error.set(Some("Could not add the target.".to_owned()));
                }
            }
            Err(message) => error.set(Some(message)),
        }
    });

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h3 { "Add Target Company" }
                if let Some(message) = error.read().as_ref() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "field",
                    span { "Company" }
                    input {
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Status" }
                    select {
                        class: "select",
                        onchange: move |evt| {
                            if let Some(status) = status_from_value(&evt.value()) {
                                form.write().status = status;
                            }
                        },
                        for status in exam_core::model::ApplicationStatus::ALL {
                            option {
                                value: "{status.label()}",
                                selected: form.read().status == status,
                                "{status.label()}"
                            }
                        }
                    }
                }
                div { class: "modal__actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| submit.call(()),
                        "Add"
                    }
                }
            }
        }
    }
}
