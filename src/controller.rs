//! Routes page events to the feature that owns them.
//!
//! The `PageController` owns the page environment and every mounted
//! feature. It is the only thing between raw DOM events (translated by the
//! host into [`PageEvent`]s) and the page mutations they cause. Deferred
//! work is queued as [`Schedule`] requests for the host to drain.

use crate::effects::{Counters, CursorGlow, ProgressBars, Radials, Reveal};
use crate::input::{Click, PageEvent, Propagation, Schedule, Task};
use crate::menu::MobileMenu;
use crate::options::Options;
use crate::page::Page;
use crate::scroll::Scrollspy;
use crate::viewer::CvViewer;

/// Key that dismisses the menu and the modal.
pub const DISMISS_KEY: &str = "Escape";

/// Wires every page feature to one page environment.
///
/// # Usage
///
/// ```ignore
/// let mut controller = PageController::new(page, options);
/// let propagation = controller.handle(event);
/// for request in controller.take_scheduled() {
///     // run timers / animation frames, then feed their events back in
/// }
/// ```
pub struct PageController<P: Page> {
    page: P,
    options: Options,
    menu: Option<MobileMenu<P::Node>>,
    spy: Scrollspy<P::Node>,
    counters: Counters<P::Node>,
    bars: ProgressBars<P::Node>,
    radials: Radials<P::Node>,
    reveal: Reveal<P::Node>,
    cursor: Option<CursorGlow<P::Node>>,
    viewer: Option<CvViewer<P::Node>>,
    scheduled: Vec<Schedule>,
}

impl<P: Page> PageController<P> {
    /// Mount every feature against `page`.
    ///
    /// Radial strokes are hidden, timers for bars and circles and the first
    /// counter frame are queued, and the scrollspy runs once. Features whose
    /// markup is missing are skipped.
    pub fn new(page: P, options: Options) -> Self {
        let menu = MobileMenu::mount(&page);
        if menu.is_none() {
            log::debug!("no mobile menu on this page");
        }
        let spy = Scrollspy::mount(&page, &options.navigation);
        let counters = Counters::mount(&page, &options.animation);
        let bars = ProgressBars::mount(&page);
        let radials = Radials::mount(&page, &options.animation);
        let reveal = Reveal::mount(&page);
        let cursor = CursorGlow::mount(&page, &options.cursor);
        if cursor.is_none() {
            log::debug!("cursor glow disabled: glow or dot element missing");
        }
        let viewer = CvViewer::mount(&page, &options.viewer);
        if viewer.is_none() {
            log::debug!("no CV modal on this page");
        }

        let mut scheduled = Vec::new();
        if counters.running() {
            scheduled.push(Schedule::NextFrame);
        }
        if !bars.is_empty() {
            scheduled.push(Schedule::After {
                delay: options.animation.progress_delay(),
                task: Task::FillProgressBars,
            });
        }
        if !radials.is_empty() {
            scheduled.push(Schedule::After {
                delay: options.animation.radial_delay(),
                task: Task::SweepRadials,
            });
        }

        let controller = Self {
            page,
            options,
            menu,
            spy,
            counters,
            bars,
            radials,
            reveal,
            cursor,
            viewer,
            scheduled,
        };
        let _ = controller.spy.refresh(&controller.page);
        controller
    }

    /// The page environment.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Options the controller was mounted with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Elements the host must observe for intersection.
    pub fn reveal_targets(&self) -> &[P::Node] {
        self.reveal.targets()
    }

    /// Whether pointer events should be delivered at all.
    pub fn cursor_enabled(&self) -> bool {
        self.cursor.is_some()
    }

    /// Whether the mobile menu is showing.
    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.is_open(&self.page))
    }

    /// Whether the CV modal is showing.
    pub fn viewer_open(&self) -> bool {
        self.viewer.as_ref().is_some_and(|v| v.is_open(&self.page))
    }

    /// Drain the timers and frames requested since the last call.
    pub fn take_scheduled(&mut self) -> Vec<Schedule> {
        std::mem::take(&mut self.scheduled)
    }

    /// Process one page event.
    pub fn handle(&mut self, event: PageEvent<P::Node>) -> Propagation {
        match event {
            PageEvent::Click(click) => return self.handle_click(click),
            PageEvent::KeyDown { key } => self.handle_key(&key),
            PageEvent::Scroll => {
                let _ = self.spy.refresh(&self.page);
            }
            PageEvent::PointerMoved { x, y } => {
                if let Some(cursor) = &self.cursor {
                    cursor.track(&self.page, x, y);
                }
            }
            PageEvent::InteractiveHover { entered } => {
                if let Some(cursor) = &self.cursor {
                    cursor.hover(&self.page, entered);
                }
            }
            PageEvent::Intersection {
                target,
                intersecting,
            } => Reveal::observe(&self.page, &target, intersecting),
            PageEvent::ViewerError => {
                if let Some(viewer) = &self.viewer {
                    viewer.render_failed(&self.page);
                }
            }
            PageEvent::Timer(task) => self.run_task(task),
            PageEvent::Frame { now } => {
                if self.counters.frame(&self.page, now) {
                    self.scheduled.push(Schedule::NextFrame);
                }
            }
        }
        Propagation::Continue
    }

    fn handle_click(&mut self, click: Click<P::Node>) -> Propagation {
        match click {
            Click::MenuButton => {
                if let Some(menu) = &self.menu {
                    menu.open(&self.page);
                }
            }
            Click::MenuClose => {
                if let Some(menu) = &self.menu {
                    menu.close(&self.page);
                }
            }
            Click::NavLink { href, mobile } => {
                if mobile {
                    if let Some(menu) = &self.menu {
                        menu.close(&self.page);
                    }
                }
                if self.spy.follow_link(&self.page, &href) {
                    return Propagation::PreventDefault;
                }
            }
            Click::ViewerOpen => {
                if let Some(viewer) = &self.viewer {
                    viewer.open(&self.page);
                }
            }
            Click::ViewerClose => {
                if let Some(viewer) = &self.viewer {
                    viewer.close(&self.page);
                }
            }
            Click::ViewerBackdrop { target } => {
                if let Some(viewer) = &self.viewer {
                    viewer.backdrop_click(&self.page, &target);
                }
            }
        }
        Propagation::Continue
    }

    fn handle_key(&self, key: &str) {
        if key != DISMISS_KEY {
            return;
        }
        if let Some(menu) = self.menu.as_ref().filter(|m| m.is_open(&self.page)) {
            menu.close(&self.page);
        }
        if let Some(viewer) = self.viewer.as_ref().filter(|v| v.is_open(&self.page)) {
            viewer.close(&self.page);
        }
    }

    fn run_task(&self, task: Task) {
        match task {
            Task::FillProgressBars => self.bars.fill(&self.page),
            Task::SweepRadials => self.radials.sweep(&self.page),
        }
    }
}
