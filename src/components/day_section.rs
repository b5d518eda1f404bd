//! One itinerary day: header plus its ordered activity cards.

#[cfg(test)]
#[path = "day_section_test.rs"]
mod day_section_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::icon::Icon;
use crate::state::itinerary::{Activity, Day};
use crate::util::glyph::IconName;

/// Narrow-viewport summary, e.g. `"1 activity"`, `"3 activities"`.
pub fn activity_count_label(count: usize) -> String {
    if count == 1 { "1 activity".to_owned() } else { format!("{count} activities") }
}

/// Whether a connector follows the card for `activity_id`. Only the last
/// card (and ids not in the day) go without one.
pub fn connector_after(day: &Day, activity_id: &str) -> bool {
    match day.position_of(activity_id) {
        Some(index) => index + 1 < day.activities.len(),
        None => false,
    }
}

/// Render key of a card: its activity id, never its position.
pub fn activity_key(activity: &Activity) -> String {
    activity.id.clone()
}

/// Cards are keyed by `activity.id` so reordered input moves existing nodes
/// instead of re-rendering by position.
#[component]
pub fn DaySection(#[prop(into)] day: Signal<Day>) -> impl IntoView {
    let day_number = move || day.with(|d| d.day_number.clone());
    let title = move || day.with(|d| d.title.clone());
    let date = move || day.with(|d| d.date.clone());
    let summary = move || day.with(|d| activity_count_label(d.activity_count()));

    view! {
        <section class="day-section">
            <header class="day-section__header">
                <div class="day-section__number">{day_number}</div>
                <div class="day-section__heading">
                    <h3 class="day-section__title">{title}</h3>
                    <div class="day-section__date">
                        <Icon name=IconName::Calendar/>
                        <span>{date}</span>
                    </div>
                </div>
            </header>

            <div class="day-section__activities">
                <For
                    each=move || day.with(|d| d.activities.clone())
                    key=activity_key
                    children=move |activity: Activity| {
                        let id = activity.id.clone();
                        let has_connector = move || day.with(|d| connector_after(d, &id));
                        view! {
                            <div class="day-section__item">
                                <ActivityCard activity=activity is_dragging=false/>
                                <Show when=has_connector>
                                    <div class="day-section__connector" aria-hidden="true"></div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <div class="day-section__summary">
                <span>{summary}</span>
            </div>
        </section>
    }
}
