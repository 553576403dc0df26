//! Attach / detach lifecycle
//!
//! `attach` registers the content scroll subscription, the resize observation
//! and the two document-level pointer listeners exactly once. The returned
//! [`Handle`] releases them exactly once, on [`Handle::detach`] or on drop,
//! whichever happens first.
//!
//! Hosts must not drop or detach a handle while they are dispatching to it.
//! If they do, the listeners cannot be removed; they stay registered but are
//! switched off and never touch the surfaces again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::ScrollbarConfig;
use crate::controller::{Scrollbar, StepDirection};
use crate::interaction::DragState;
use crate::surface::{ContentSurface, EventHost, Listener, ListenerId, PointerEvent, TrackSurface};
use crate::thumb::ThumbState;

/// Callback used to commit a new thumb to the render surface
pub type ThumbCallback = Box<dyn FnMut(ThumbState)>;

/// State shared between the handle and its registered listeners
struct Shared {
    scrollbar: Scrollbar,
    on_thumb_change: Option<ThumbCallback>,
}

impl Shared {
    fn commit(&mut self, thumb: Option<ThumbState>) -> Option<ThumbState> {
        if let (Some(thumb), Some(callback)) = (thumb, self.on_thumb_change.as_mut()) {
            callback(thumb);
        }
        thumb
    }
}

struct Attached<C, T, H> {
    shared: Rc<RefCell<Shared>>,
    content: Rc<RefCell<C>>,
    track: Rc<RefCell<T>>,
    host: Rc<RefCell<H>>,
    listeners: Vec<ListenerId>,
    detached: Rc<Cell<bool>>,
}

/// Live attachment of a scrollbar overlay to its surfaces
///
/// Every method is a no-op once the handle has been detached. Methods must not
/// be called from inside one of the overlay's own listeners.
pub struct Handle<C, T, H>
where
    C: ContentSurface + 'static,
    T: TrackSurface + 'static,
    H: EventHost,
{
    inner: Option<Attached<C, T, H>>,
}

/// Mount a scrollbar overlay onto a content surface and its track
///
/// Sizes and positions the thumb immediately, then registers listeners with
/// the host.
pub fn attach<C, T, H>(
    content: Rc<RefCell<C>>,
    track: Rc<RefCell<T>>,
    host: Rc<RefCell<H>>,
    config: ScrollbarConfig,
) -> Handle<C, T, H>
where
    C: ContentSurface + 'static,
    T: TrackSurface + 'static,
    H: EventHost,
{
    let mut scrollbar = Scrollbar::new(config);
    scrollbar.mount(&*content.borrow(), &*track.borrow());
    let shared = Rc::new(RefCell::new(Shared {
        scrollbar,
        on_thumb_change: None,
    }));

    let detached = Rc::new(Cell::new(false));
    let listeners = {
        let mut host = host.borrow_mut();
        vec![
            host.add_listener(Listener::ContentScroll(Box::new(scroll_listener(
                &shared, &content, &detached,
            )))),
            host.add_listener(Listener::ContentResize(Box::new(resize_listener(
                &shared, &content, &detached,
            )))),
            host.add_listener(Listener::DocumentPointerMove(Box::new(move_listener(
                &shared, &content, &detached,
            )))),
            host.add_listener(Listener::DocumentPointerRelease(Box::new(
                release_listener(&shared, &detached),
            ))),
        ]
    };
    debug!(listeners = listeners.len(), "Scrollbar attached");

    Handle {
        inner: Some(Attached {
            shared,
            content,
            track,
            host,
            listeners,
            detached,
        }),
    }
}

fn scroll_listener<C: ContentSurface + 'static>(
    shared: &Rc<RefCell<Shared>>,
    content: &Rc<RefCell<C>>,
    detached: &Rc<Cell<bool>>,
) -> impl FnMut() + 'static {
    let shared = Rc::clone(shared);
    let content = Rc::clone(content);
    let detached = Rc::clone(detached);
    move || {
        if detached.get() {
            return;
        }
        let (Ok(mut shared), Ok(content)) = (shared.try_borrow_mut(), content.try_borrow()) else {
            warn!("Scroll notification delivered re-entrantly, skipping");
            return;
        };
        let thumb = shared.scrollbar.on_scroll(&*content);
        shared.commit(thumb);
    }
}

fn resize_listener<C: ContentSurface + 'static>(
    shared: &Rc<RefCell<Shared>>,
    content: &Rc<RefCell<C>>,
    detached: &Rc<Cell<bool>>,
) -> impl FnMut() + 'static {
    let shared = Rc::clone(shared);
    let content = Rc::clone(content);
    let detached = Rc::clone(detached);
    move || {
        if detached.get() {
            return;
        }
        let (Ok(mut shared), Ok(content)) = (shared.try_borrow_mut(), content.try_borrow()) else {
            warn!("Resize notification delivered re-entrantly, skipping");
            return;
        };
        let thumb = shared.scrollbar.on_geometry_changed(&*content);
        shared.commit(thumb);
    }
}

fn move_listener<C: ContentSurface + 'static>(
    shared: &Rc<RefCell<Shared>>,
    content: &Rc<RefCell<C>>,
    detached: &Rc<Cell<bool>>,
) -> impl FnMut(&mut PointerEvent) + 'static {
    let shared = Rc::clone(shared);
    let content = Rc::clone(content);
    let detached = Rc::clone(detached);
    move |event| {
        if detached.get() {
            return;
        }
        let (Ok(mut shared), Ok(mut content)) =
            (shared.try_borrow_mut(), content.try_borrow_mut())
        else {
            warn!("Pointer move delivered re-entrantly, skipping");
            return;
        };
        shared.scrollbar.pointer_move(event, &mut *content);
    }
}

fn release_listener(
    shared: &Rc<RefCell<Shared>>,
    detached: &Rc<Cell<bool>>,
) -> impl FnMut(&mut PointerEvent) + 'static {
    let shared = Rc::clone(shared);
    let detached = Rc::clone(detached);
    move |event| {
        if detached.get() {
            return;
        }
        let Ok(mut shared) = shared.try_borrow_mut() else {
            warn!("Pointer release delivered re-entrantly, skipping");
            return;
        };
        shared.scrollbar.pointer_release(event);
    }
}

impl<C, T, H> Handle<C, T, H>
where
    C: ContentSurface + 'static,
    T: TrackSurface + 'static,
    H: EventHost,
{
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// Last committed thumb geometry
    pub fn thumb(&self) -> Option<ThumbState> {
        let inner = self.inner.as_ref()?;
        let thumb = inner.shared.borrow().scrollbar.thumb();
        Some(thumb)
    }

    pub fn drag_state(&self) -> DragState {
        self.inner
            .as_ref()
            .map(|inner| inner.shared.borrow().scrollbar.drag_state())
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag_state(), DragState::Dragging(_))
    }

    /// Content currently overflows, so the overlay should be shown
    pub fn needs_scrollbar(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| {
            inner
                .shared
                .borrow()
                .scrollbar
                .needs_scrollbar(&*inner.content.borrow())
        })
    }

    /// Install the render-commit callback, invoking it once with the current thumb
    pub fn set_on_thumb_change(&self, callback: impl FnMut(ThumbState) + 'static) {
        let Some(inner) = self.inner.as_ref() else {
            return;
        };
        let mut shared = inner.shared.borrow_mut();
        shared.on_thumb_change = Some(Box::new(callback));
        let thumb = shared.scrollbar.thumb();
        shared.commit(Some(thumb));
    }

    /// Synchronously re-project the thumb from the content's scroll offset
    pub fn on_scroll(&self) -> Option<ThumbState> {
        let inner = self.inner.as_ref()?;
        let mut shared = inner.shared.borrow_mut();
        let thumb = shared.scrollbar.on_scroll(&*inner.content.borrow());
        shared.commit(thumb)
    }

    /// Synchronously recompute thumb length and position
    pub fn on_geometry_changed(&self) -> Option<ThumbState> {
        let inner = self.inner.as_ref()?;
        let mut shared = inner.shared.borrow_mut();
        let thumb = shared.scrollbar.on_geometry_changed(&*inner.content.borrow());
        shared.commit(thumb)
    }

    /// Re-measure the track (layout change) and recompute the thumb
    pub fn remeasure_track(&self) -> Option<ThumbState> {
        let inner = self.inner.as_ref()?;
        let mut shared = inner.shared.borrow_mut();
        let thumb = shared
            .scrollbar
            .remeasure_track(&*inner.content.borrow(), &*inner.track.borrow());
        shared.commit(thumb)
    }

    /// Pointer-down on the thumb; returns true if a drag session started
    pub fn thumb_pointer_down(&self, event: &mut PointerEvent) -> bool {
        let Some(inner) = self.inner.as_ref() else {
            return false;
        };
        let session = inner
            .shared
            .borrow_mut()
            .scrollbar
            .thumb_pointer_down(event, &*inner.content.borrow());
        session.is_some()
    }

    /// Click on the track; returns the requested content offset
    pub fn track_click(&self, event: &PointerEvent) -> Option<f64> {
        let inner = self.inner.as_ref()?;
        inner.shared.borrow_mut().scrollbar.track_click(
            event,
            &mut *inner.content.borrow_mut(),
            &*inner.track.borrow(),
        )
    }

    /// Step button activation; returns the requested delta
    pub fn step(&self, direction: StepDirection) -> Option<f64> {
        let inner = self.inner.as_ref()?;
        inner
            .shared
            .borrow()
            .scrollbar
            .step(direction, &mut *inner.content.borrow_mut())
    }

    /// Release every listener registered by `attach`
    ///
    /// Returns false when already detached.
    pub fn detach(&mut self) -> bool {
        let Some(inner) = self.inner.take() else {
            return false;
        };
        inner.detached.set(true);
        match inner.host.try_borrow_mut() {
            Ok(mut host) => {
                for id in &inner.listeners {
                    if !host.remove_listener(*id) {
                        warn!(?id, "Listener already released by host");
                    }
                }
            }
            Err(_) => {
                warn!(
                    listeners = inner.listeners.len(),
                    "Host busy during detach, listeners switched off but still registered"
                );
            }
        }
        if let Ok(mut shared) = inner.shared.try_borrow_mut() {
            shared.scrollbar.unmount();
            shared.on_thumb_change = None;
        }
        debug!("Scrollbar detached");
        true
    }
}

impl<C, T, H> Drop for Handle<C, T, H>
where
    C: ContentSurface + 'static,
    T: TrackSurface + 'static,
    H: EventHost,
{
    fn drop(&mut self) {
        self.detach();
    }
}
