//! DOM event wiring.
//!
//! Every listener translates its DOM event into a [`PageEvent`] and hands it
//! to the shared controller. Listener closures live for the page lifetime;
//! timer and frame callbacks are one-shot.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use super::page::WebPage;
use crate::controller::PageController;
use crate::error::FolioError;
use crate::input::{Click, PageEvent, Propagation, Schedule};
use crate::page::markup::{
    INTERACTIVE, MENU_BUTTON_ID, MENU_CLOSE_ID, MOBILE_NAV_LINK, NAV_LINK, VIEWER_CLOSE_ID,
    VIEWER_FRAME_ID, VIEWER_MODAL_ID, VIEWER_OPEN_ID,
};
use crate::page::Page;

pub(crate) type SharedController = Rc<RefCell<PageController<WebPage>>>;

/// Feed one event to the controller and run whatever it scheduled.
pub(crate) fn dispatch(controller: &SharedController, event: PageEvent<Element>) -> Propagation {
    let propagation = {
        let Ok(mut ctl) = controller.try_borrow_mut() else {
            log::warn!("dropping re-entrant page event");
            return Propagation::Continue;
        };
        ctl.handle(event)
    };
    flush(controller);
    propagation
}

/// Hand pending timer and frame requests to the browser.
pub(crate) fn flush(controller: &SharedController) {
    let Ok(requests) = controller.try_borrow_mut().map(|mut c| c.take_scheduled()) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    for request in requests {
        let ctl = Rc::clone(controller);
        let result = match request {
            Schedule::After { delay, task } => {
                let callback = Closure::once_into_js(move || {
                    let _ = dispatch(&ctl, PageEvent::Timer(task));
                });
                let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        callback.unchecked_ref(),
                        millis,
                    )
                    .map(drop)
            }
            Schedule::NextFrame => {
                let callback = Closure::once_into_js(move |now: f64| {
                    let _ = dispatch(&ctl, PageEvent::Frame { now });
                });
                window
                    .request_animation_frame(callback.unchecked_ref())
                    .map(drop)
            }
        };
        if let Err(e) = result {
            log::warn!("could not schedule {request:?}: {e:?}");
        }
    }
}

/// Attach every feature's listeners. A feature that fails to wire is
/// logged and the rest still get wired.
pub(crate) fn bind(controller: &SharedController) {
    report("menu", bind_menu(controller));
    report("navigation", bind_navigation(controller));
    report("keyboard", bind_keyboard(controller));
    report("scroll", bind_scroll(controller));
    report("reveal", bind_reveal(controller));
    report("cursor", bind_cursor(controller));
    report("viewer", bind_viewer(controller));
}

fn report(feature: &str, result: Result<(), FolioError>) {
    if let Err(e) = result {
        log::warn!("{feature} wiring failed: {e}");
    }
}

fn listen<F>(target: &EventTarget, kind: &str, passive: bool, handler: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Dispatch `make(event)` on click and honor the controller's verdict on
/// the default action.
fn on_click<F>(controller: &SharedController, target: &EventTarget, make: F) -> Result<(), FolioError>
where
    F: Fn(&Event) -> Option<PageEvent<Element>> + 'static,
{
    let ctl = Rc::clone(controller);
    listen(target, "click", false, move |event| {
        let Some(page_event) = make(&event) else {
            return;
        };
        if dispatch(&ctl, page_event) == Propagation::PreventDefault {
            event.prevent_default();
        }
    })
}

fn by_id(controller: &SharedController, id: &str) -> Option<Element> {
    controller.borrow().page().element_by_id(id)
}

fn all(controller: &SharedController, selector: &str) -> Vec<Element> {
    controller.borrow().page().query_all(selector)
}

fn bind_menu(controller: &SharedController) -> Result<(), FolioError> {
    if let Some(button) = by_id(controller, MENU_BUTTON_ID) {
        on_click(controller, &button, |_| Some(PageEvent::Click(Click::MenuButton)))?;
    }
    if let Some(close) = by_id(controller, MENU_CLOSE_ID) {
        on_click(controller, &close, |_| Some(PageEvent::Click(Click::MenuClose)))?;
    }
    Ok(())
}

fn bind_navigation(controller: &SharedController) -> Result<(), FolioError> {
    for link in all(controller, &format!("{NAV_LINK}, {MOBILE_NAV_LINK}")) {
        let mobile = link.class_list().contains(&MOBILE_NAV_LINK[1..]);
        let source = link.clone();
        on_click(controller, &link, move |_| {
            let href = source.get_attribute("href").unwrap_or_default();
            Some(PageEvent::Click(Click::NavLink { href, mobile }))
        })?;
    }
    Ok(())
}

fn bind_keyboard(controller: &SharedController) -> Result<(), FolioError> {
    let document = controller.borrow().page().document().clone();
    let ctl = Rc::clone(controller);
    listen(&document, "keydown", false, move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            let _ = dispatch(&ctl, PageEvent::KeyDown { key: key_event.key() });
        }
    })
}

fn bind_scroll(controller: &SharedController) -> Result<(), FolioError> {
    let window = controller.borrow().page().window().clone();
    let ctl = Rc::clone(controller);
    listen(&window, "scroll", true, move |_| {
        let _ = dispatch(&ctl, PageEvent::Scroll);
    })
}

fn bind_reveal(controller: &SharedController) -> Result<(), FolioError> {
    let (targets, threshold) = {
        let ctl = controller.borrow();
        (
            ctl.reveal_targets().to_vec(),
            ctl.options().animation.reveal_threshold,
        )
    };
    if targets.is_empty() {
        return Ok(());
    }

    let ctl = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let _ = dispatch(
                    &ctl,
                    PageEvent::Intersection {
                        target: entry.target(),
                        intersecting: entry.is_intersecting(),
                    },
                );
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

fn bind_cursor(controller: &SharedController) -> Result<(), FolioError> {
    if !controller.borrow().cursor_enabled() {
        return Ok(());
    }

    let window = controller.borrow().page().window().clone();
    let ctl = Rc::clone(controller);
    listen(&window, "mousemove", true, move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let _ = dispatch(
                &ctl,
                PageEvent::PointerMoved {
                    x: f64::from(mouse.client_x()),
                    y: f64::from(mouse.client_y()),
                },
            );
        }
    })?;

    for element in all(controller, INTERACTIVE) {
        for (kind, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let ctl = Rc::clone(controller);
            listen(&element, kind, false, move |_| {
                let _ = dispatch(&ctl, PageEvent::InteractiveHover { entered });
            })?;
        }
    }
    Ok(())
}

fn bind_viewer(controller: &SharedController) -> Result<(), FolioError> {
    if let Some(open) = by_id(controller, VIEWER_OPEN_ID) {
        on_click(controller, &open, |_| Some(PageEvent::Click(Click::ViewerOpen)))?;
    }
    if let Some(close) = by_id(controller, VIEWER_CLOSE_ID) {
        on_click(controller, &close, |_| Some(PageEvent::Click(Click::ViewerClose)))?;
    }
    if let Some(modal) = by_id(controller, VIEWER_MODAL_ID) {
        on_click(controller, &modal, |event| {
            let target = event.target()?.dyn_into::<Element>().ok()?;
            Some(PageEvent::Click(Click::ViewerBackdrop { target }))
        })?;
    }
    if let Some(frame) = by_id(controller, VIEWER_FRAME_ID) {
        let ctl = Rc::clone(controller);
        listen(&frame, "error", false, move |_| {
            let _ = dispatch(&ctl, PageEvent::ViewerError);
        })?;
    }
    Ok(())
}
