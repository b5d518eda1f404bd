//! Draggable card for one itinerary activity.
//!
//! DESIGN
//! ======
//! The root element carries the sortable coordinator's bindings verbatim so
//! the coordinator can detect press, move and release on it. Everything the
//! card shows is derived from the `Activity` prop; the only local state is the
//! thumbnail source, which flips to the placeholder once on a load error.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::config::use_config;
use crate::state::drag::{Activation, UseSortable, is_pickup_key, use_sortable};
use crate::state::itinerary::Activity;
use crate::util::activity_style::activity_style;
use crate::util::card_style::{card_inline_style, card_visual};
use crate::util::glyph::{IconName, IconSize};
use crate::util::image_fallback::ImageSource;

const PRIMARY_BUTTON: i16 = 0;

/// Thumbnail classes; the placeholder gets a modifier so it can be dimmed.
pub fn image_class(source: &ImageSource) -> &'static str {
    if source.is_placeholder() { "activity-card__image activity-card__image--placeholder" } else { "activity-card__image" }
}

/// Optional text fragments of a card. `None` suppresses the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub cost: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub type_label: String,
}

impl CardContent {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            cost: activity.cost.clone(),
            description: activity.description.clone(),
            duration: activity.duration.as_ref().map(|d| format!("Duration: {d}")),
            type_label: activity.kind.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn ActivityCard(activity: Activity, is_dragging: bool, #[prop(optional)] is_overlay: bool) -> impl IntoView {
    let config = use_config();
    let style = activity_style(activity.kind.as_deref());
    let content = CardContent::from_activity(&activity);
    let UseSortable { state, bindings, activate } = use_sortable(activity.id.clone(), is_overlay);

    let visual = move || card_visual(is_overlay, state.with(|s| s.is_dragging), is_dragging);
    let inline_style = {
        let default_transition = config.default_transition();
        move || {
            let current = state.get();
            let visual = card_visual(is_overlay, current.is_dragging, is_dragging);
            card_inline_style(&current, visual, &default_transition)
        }
    };
    let aria_pressed = move || state.with(|s| s.is_dragging).then_some("true");

    let image = RwSignal::new(ImageSource::new(activity.image.as_deref(), &config.placeholder_image_url));
    let on_image_error = {
        let id = activity.id.clone();
        move |_| {
            image.update(|source| {
                if source.on_error() {
                    log::warn!("activity {id}: image failed to load, using placeholder");
                }
            });
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        activate.run(Activation::Pointer { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) });
    };
    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if !is_overlay && is_pickup_key(&key) {
            ev.prevent_default();
        }
        activate.run(Activation::Keyboard { key });
    };

    let Activity { title, time, location, .. } = activity;
    let alt = title.clone();

    view! {
        <div
            class=move || visual().class()
            style=inline_style
            role=bindings.role
            tabindex=bindings.tabindex()
            aria-roledescription=bindings.role_description
            aria-disabled=bindings.aria_disabled()
            aria-pressed=aria_pressed
            aria-describedby=bindings.described_by.clone()
            data-sortable-id=bindings.id.clone()
            on:pointerdown=on_pointer_down
            on:keydown=on_key_down
        >
            <div class="activity-card__body">
                <div class="activity-card__thumb">
                    <img
                        class=move || image.with(image_class)
                        src=move || image.with(|source| source.src().to_owned())
                        alt=alt
                        draggable="false"
                        on:error=on_image_error
                    />
                    <div class="activity-card__handle">
                        <Icon name=IconName::GripVertical/>
                    </div>
                    <div class="activity-card__badge-slot">
                        <span class=style.badge_class()>
                            <Icon name=style.icon size=IconSize::Medium/>
                        </span>
                    </div>
                </div>

                <div class="activity-card__content">
                    <div class="activity-card__header">
                        <div class="activity-card__heading">
                            <h4 class="activity-card__title">{title}</h4>
                            <div class="activity-card__meta">
                                <div class="activity-card__meta-item">
                                    <Icon name=IconName::Clock/>
                                    <span class="activity-card__time">{time}</span>
                                </div>
                                <div class="activity-card__meta-item">
                                    <Icon name=IconName::MapPin/>
                                    <span class="activity-card__location">{location}</span>
                                </div>
                            </div>
                        </div>
                        {content.cost.map(|cost| view! {
                            <div class="activity-card__cost">
                                <Icon name=IconName::DollarSign/>
                                <span>{cost}</span>
                            </div>
                        })}
                    </div>

                    {content.description.map(|description| view! {
                        <p class="activity-card__description">{description}</p>
                    })}

                    <div class="activity-card__footer">
                        {content.duration.map(|duration| view! {
                            <div class="activity-card__duration">{duration}</div>
                        })}
                        <span class=style.pill_class()>{content.type_label}</span>
                    </div>
                </div>
            </div>

            <div class="activity-card__touch-dots" aria-hidden="true">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
