//! Sortable drag coordination seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards never track gestures themselves. They only need four things from a
//! coordinator per sortable id: the current transform, the transition to
//! animate with, whether the id is the active drag source, and the
//! attributes/listeners to bind on their root element. [`SortableCoordinator`] is that contract.
//!
//! [`SignalSortable`] is the board's signal-backed coordinator, fed by card
//! presses and window pointer listeners; [`InertSortable`] is used when no
//! coordinator is provided (server render, static previews).

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use std::sync::Arc;

use leptos::prelude::*;

/// Element translation/scale reported by the coordinator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { x, y, scale_x: 1.0, scale_y: 1.0 }
    }

    /// CSS `transform` value. Translation is rounded to whole pixels.
    pub fn to_css(&self) -> String {
        let x = self.x.round() + 0.0;
        let y = self.y.round() + 0.0;
        format!("translate3d({x}px, {y}px, 0) scaleX({}) scaleY({})", self.scale_x, self.scale_y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::translate(0.0, 0.0)
    }
}

/// CSS transition descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub property: String,
    pub duration_ms: u32,
    pub easing: String,
}

impl Transition {
    pub fn transform(duration_ms: u32, easing: impl Into<String>) -> Self {
        Self { property: "transform".to_owned(), duration_ms, easing: easing.into() }
    }

    pub fn to_css(&self) -> String {
        format!("{} {}ms {}", self.property, self.duration_ms, self.easing)
    }
}

/// Transient per-item drag state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortableState {
    pub transform: Option<Transform>,
    pub transition: Option<Transition>,
    /// This id is the active drag source.
    pub is_dragging: bool,
}

/// Attributes a sortable root element must carry verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortableBindings {
    pub id: String,
    pub role: &'static str,
    pub role_description: &'static str,
    pub disabled: bool,
    pub described_by: String,
}

impl SortableBindings {
    pub fn new(id: impl Into<String>, disabled: bool, described_by: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: "button",
            role_description: "sortable",
            disabled,
            described_by: described_by.into(),
        }
    }

    pub fn tabindex(&self) -> &'static str {
        if self.disabled { "-1" } else { "0" }
    }

    pub fn aria_disabled(&self) -> &'static str {
        if self.disabled { "true" } else { "false" }
    }
}

/// Gesture that asks the coordinator to start a drag.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    Pointer { x: f64, y: f64 },
    Keyboard { key: String },
}

/// Outcome of a completed drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub active: String,
    pub over: Option<String>,
}

/// External drag-and-drop coordinator contract.
///
/// `state` is called inside reactive closures, so implementations backed by
/// signals get fine-grained re-rendering for free.
pub trait SortableCoordinator: Send + Sync {
    fn state(&self, id: &str) -> SortableState;
    fn bindings(&self, id: &str, disabled: bool) -> SortableBindings;
    fn activate(&self, id: &str, activation: Activation);
}

/// Coordinator handle stored in Leptos context.
#[derive(Clone)]
pub struct SortableContext(pub Arc<dyn SortableCoordinator>);

impl SortableContext {
    pub fn new(coordinator: impl SortableCoordinator + 'static) -> Self {
        Self(Arc::new(coordinator))
    }
}

/// Read the coordinator from context, falling back to [`InertSortable`].
pub fn use_sortable_context() -> SortableContext {
    use_context::<SortableContext>().unwrap_or_else(|| SortableContext::new(InertSortable::default()))
}

/// Per-card view of the coordinator.
pub struct UseSortable {
    pub state: Signal<SortableState>,
    pub bindings: SortableBindings,
    pub activate: Callback<Activation>,
}

/// Register `id` as a sortable item. Disabled items never report drag state
/// and ignore activation gestures.
pub fn use_sortable(id: String, disabled: bool) -> UseSortable {
    let SortableContext(coordinator) = use_sortable_context();
    let bindings = coordinator.bindings(&id, disabled);

    let state = {
        let coordinator = Arc::clone(&coordinator);
        let id = id.clone();
        Signal::derive(move || if disabled { SortableState::default() } else { coordinator.state(&id) })
    };

    let activate = Callback::new(move |activation: Activation| {
        if !disabled {
            coordinator.activate(&id, activation);
        }
    });

    UseSortable { state, bindings, activate }
}

/// Coordinator that never drags anything.
#[derive(Clone, Debug)]
pub struct InertSortable {
    described_by: String,
}

impl Default for InertSortable {
    fn default() -> Self {
        Self { described_by: crate::config::DEFAULT_INSTRUCTIONS_ID.to_owned() }
    }
}

impl SortableCoordinator for InertSortable {
    fn state(&self, _id: &str) -> SortableState {
        SortableState::default()
    }

    fn bindings(&self, id: &str, disabled: bool) -> SortableBindings {
        SortableBindings::new(id, disabled, self.described_by.clone())
    }

    fn activate(&self, id: &str, _activation: Activation) {
        log::trace!("sortable {id}: activation ignored, no coordinator provided");
    }
}

/// Keys that pick up an item for keyboard dragging.
const KEYBOARD_START_KEYS: &[&str] = &[" ", "Enter"];

/// Space/Enter pick up and drop; the card suppresses their default scroll/click.
pub fn is_pickup_key(key: &str) -> bool {
    KEYBOARD_START_KEYS.contains(&key)
}

/// Selector matching any element bound as a sortable item.
pub const SORTABLE_SELECTOR: &str = "[data-sortable-id]";

/// Reactive drag session shared by all cards on a board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    pub active: Option<String>,
    /// Press position of a pointer drag. `None` for keyboard drags.
    pub origin: Option<(f64, f64)>,
    pub offset: Transform,
}

/// Window-level pointer input observed after a card was pressed.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerGesture {
    Move { x: f64, y: f64 },
    /// Released over the sortable with this id, if any.
    Release { over: Option<String> },
    Cancel,
}

/// Signal-backed coordinator store. Cards start drags through
/// [`SortableCoordinator::activate`]; window pointer input arrives through
/// [`SignalSortable::track`] (see [`bind_window_pointer`]).
#[derive(Clone)]
pub struct SignalSortable {
    session: RwSignal<DragSession>,
    described_by: String,
    on_drop: Option<Callback<DropResult>>,
    overlay: bool,
}

impl SignalSortable {
    pub fn new(described_by: impl Into<String>) -> Self {
        Self {
            session: RwSignal::new(DragSession::default()),
            described_by: described_by.into(),
            on_drop: None,
            overlay: false,
        }
    }

    /// A drag overlay carries the pointer offset; the source stays in place.
    #[must_use]
    pub fn with_overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    #[must_use]
    pub fn on_drop(mut self, callback: Callback<DropResult>) -> Self {
        self.on_drop = Some(callback);
        self
    }

    /// Currently dragged id (tracked).
    pub fn active_id(&self) -> Option<String> {
        self.session.with(|s| s.active.clone())
    }

    /// Press position of the active pointer drag (tracked).
    pub fn active_origin(&self) -> Option<(f64, f64)> {
        self.session.with(|s| s.origin)
    }

    /// Offset of the active item from its press origin (tracked).
    pub fn active_offset(&self) -> Transform {
        self.session.with(|s| s.offset)
    }

    /// Apply window pointer input. Only pointer-started drags react; a keyboard
    /// drag ignores stray mouse movement and clicks.
    pub fn track(&self, gesture: PointerGesture) -> Option<DropResult> {
        if self.session.with_untracked(|s| s.origin.is_none()) {
            return None;
        }
        match gesture {
            PointerGesture::Move { x, y } => {
                self.drag_to(x, y);
                None
            }
            PointerGesture::Release { over } => self.finish(over.as_deref()),
            PointerGesture::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// Pointer moved while dragging.
    pub fn drag_to(&self, x: f64, y: f64) {
        let Some((ox, oy)) = self.session.with_untracked(|s| s.origin) else {
            return;
        };
        self.session.update(|s| s.offset = Transform::translate(x - ox, y - oy));
    }

    /// End the drag. The drop is reported to the `on_drop` callback and returned.
    pub fn finish(&self, over: Option<&str>) -> Option<DropResult> {
        let active = self.session.with_untracked(|s| s.active.clone())?;
        self.session.set(DragSession::default());
        let result = DropResult { active, over: over.map(str::to_owned) };
        log::debug!("sortable drop: {} over {:?}", result.active, result.over);
        if let Some(on_drop) = &self.on_drop {
            on_drop.run(result.clone());
        }
        Some(result)
    }

    /// Abandon the drag without reporting a drop.
    pub fn cancel(&self) {
        let Some(active) = self.session.with_untracked(|s| s.active.clone()) else {
            return;
        };
        log::debug!("sortable drag cancelled: {active}");
        self.session.set(DragSession::default());
    }

    fn begin(&self, id: &str, origin: Option<(f64, f64)>) {
        log::debug!("sortable drag start: {id}");
        self.session.set(DragSession { active: Some(id.to_owned()), origin, offset: Transform::default() });
    }
}

/// Forward window `pointermove`/`pointerup`/`pointercancel` to `sortable` until
/// the current reactive owner is cleaned up. The release target is the
/// sortable under the pointer, so the drag overlay must not take hits.
#[cfg(feature = "hydrate")]
pub fn bind_window_pointer(sortable: &SignalSortable) {
    let on_move = {
        let sortable = sortable.clone();
        window_event_listener(leptos::ev::pointermove, move |ev| {
            sortable.track(PointerGesture::Move { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) });
        })
    };
    let on_up = {
        let sortable = sortable.clone();
        window_event_listener(leptos::ev::pointerup, move |ev| {
            sortable.track(PointerGesture::Release { over: sortable_id_at(&ev) });
        })
    };
    let on_cancel = {
        let sortable = sortable.clone();
        window_event_listener(leptos::ev::pointercancel, move |_| {
            sortable.track(PointerGesture::Cancel);
        })
    };
    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
        on_cancel.remove();
    });
}

#[cfg(feature = "hydrate")]
fn sortable_id_at(ev: &leptos::ev::PointerEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    let Ok(element) = ev.target()?.dyn_into::<web_sys::Element>() else {
        return None;
    };
    match element.closest(SORTABLE_SELECTOR) {
        Ok(Some(sortable)) => sortable.get_attribute("data-sortable-id"),
        _ => None,
    }
}

impl SortableCoordinator for SignalSortable {
    fn state(&self, id: &str) -> SortableState {
        self.session.with(|s| {
            if s.active.as_deref() == Some(id) {
                let transform = if self.overlay { None } else { Some(s.offset) };
                SortableState { transform, transition: None, is_dragging: true }
            } else {
                SortableState::default()
            }
        })
    }

    fn bindings(&self, id: &str, disabled: bool) -> SortableBindings {
        SortableBindings::new(id, disabled, self.described_by.clone())
    }

    fn activate(&self, id: &str, activation: Activation) {
        let already_active = self.session.with_untracked(|s| s.active.is_some());
        match activation {
            Activation::Pointer { x, y } => {
                if !already_active {
                    self.begin(id, Some((x, y)));
                }
            }
            Activation::Keyboard { key } if key == "Escape" => self.cancel(),
            Activation::Keyboard { key } if is_pickup_key(&key) => {
                if already_active {
                    self.finish(Some(id));
                } else {
                    self.begin(id, None);
                }
            }
            Activation::Keyboard { .. } => {}
        }
    }
}
