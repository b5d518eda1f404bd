//! Board root: owns the itinerary order and wires the drag coordinator.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::day_section::DaySection;
use crate::config::ItineraryConfig;
use crate::state::drag::{DropResult, SignalSortable, SortableContext};
use crate::state::itinerary::{Activity, Day, Reorder, reorder_within_day};

const KEYBOARD_INSTRUCTIONS: &str =
    "To pick up an activity, press space or enter. Press space or enter again to drop it, or escape to cancel.";

fn find_activity(days: &[Day], id: &str) -> Option<Activity> {
    days.iter().flat_map(|d| d.activities.iter()).find(|a| a.id == id).cloned()
}

/// Full itinerary board.
///
/// Provides [`ItineraryConfig`] and a [`SortableContext`] to every card, renders
/// the floating overlay copy of the dragged card, and applies drops as a new
/// activity order inside the owning day.
#[component]
pub fn ItineraryBoard(days: Vec<Day>, #[prop(optional)] config: Option<ItineraryConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let days = RwSignal::new(days);

    let on_drop = Callback::new(move |dropped: DropResult| {
        let outcome = days.try_update(|days| reorder_within_day(days, &dropped.active, dropped.over.as_deref()));
        match outcome {
            Some(Reorder::Moved { day, from, to }) => {
                log::debug!("day {day}: moved {} from {from} to {to}", dropped.active);
            }
            Some(Reorder::CrossDay) => log::warn!("ignored cross-day drop of {}", dropped.active),
            Some(Reorder::Unknown) => log::warn!("ignored drop with unknown ids: {dropped:?}"),
            Some(Reorder::Unchanged) | None => {}
        }
    });

    let sortable = SignalSortable::new(config.instructions_id.clone()).with_overlay().on_drop(on_drop);
    provide_context(config.clone());
    provide_context(SortableContext::new(sortable.clone()));
    #[cfg(feature = "hydrate")]
    crate::state::drag::bind_window_pointer(&sortable);

    let active_id = {
        let sortable = sortable.clone();
        Memo::new(move |_| sortable.active_id())
    };
    let origin = {
        let sortable = sortable.clone();
        Memo::new(move |_| sortable.active_origin())
    };
    let overlay_style = move || {
        let (x, y) = origin.get().unwrap_or_default();
        format!("left: {x}px; top: {y}px; pointer-events: none; transform: {}", sortable.active_offset().to_css())
    };
    // Keyboard drags have no pointer to follow; the faded source is enough.
    let overlay = move || {
        origin.get()?;
        let id = active_id.get()?;
        let activity = days.with(|ds| find_activity(ds, &id))?;
        Some(view! { <ActivityCard activity=activity is_dragging=true is_overlay=true/> })
    };

    view! {
        <div class="itinerary-board">
            <p id=config.instructions_id.clone() class="itinerary-board__instructions">
                {KEYBOARD_INSTRUCTIONS}
            </p>
            <For
                each=move || days.get()
                key=|day: &Day| day.key().to_owned()
                children=move |day: Day| {
                    let key = day.key().to_owned();
                    let day = Signal::derive(move || {
                        days.with(|ds| ds.iter().find(|d| d.key() == key).cloned().unwrap_or_default())
                    });
                    view! { <DaySection day=day/> }
                }
            />
            <div class="itinerary-board__overlay" style=overlay_style>
                {overlay}
            </div>
        </div>
    }
}
