use std::time::Duration;

/// Platform-agnostic page events.
///
/// The browser host translates DOM events into these and feeds them to
/// [`PageController::handle`](crate::controller::PageController::handle).
/// `N` is the host's element handle.
///
/// # Example
///
/// ```ignore
/// let propagation = controller.handle(PageEvent::KeyDown {
///     key: "Escape".into(),
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// A wired control was clicked.
    Click(Click<N>),
    /// A key was pressed anywhere in the document.
    KeyDown {
        /// `KeyboardEvent.key` value (e.g. `"Escape"`).
        key: String,
    },
    /// The window scrolled.
    Scroll,
    /// The pointer moved to client coordinates.
    PointerMoved {
        /// Horizontal position in CSS pixels.
        x: f64,
        /// Vertical position in CSS pixels.
        y: f64,
    },
    /// The pointer entered (`true`) or left an interactive element.
    InteractiveHover {
        /// Whether the pointer entered.
        entered: bool,
    },
    /// The intersection observer reported on a reveal target.
    Intersection {
        /// The observed element.
        target: N,
        /// Whether it now intersects the viewport past the threshold.
        intersecting: bool,
    },
    /// The embedded document frame failed to render.
    ViewerError,
    /// A timer requested through [`Schedule::After`] fired.
    Timer(Task),
    /// An animation frame requested through [`Schedule::NextFrame`] fired.
    Frame {
        /// Frame timestamp in milliseconds, same clock as
        /// [`Page::now`](crate::page::Page::now).
        now: f64,
    },
}

/// Wired click sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click<N> {
    /// Mobile menu trigger.
    MenuButton,
    /// Mobile menu close button.
    MenuClose,
    /// A desktop or mobile navigation link.
    NavLink {
        /// The link's raw `href`.
        href: String,
        /// Whether it is a mobile menu link (closes the menu).
        mobile: bool,
    },
    /// CV viewer open control.
    ViewerOpen,
    /// CV viewer close control.
    ViewerClose,
    /// Any click inside the modal container.
    ViewerBackdrop {
        /// The element actually clicked.
        target: N,
    },
}

/// Deferred work the controller asks the host to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Apply widths to progress bars.
    FillProgressBars,
    /// Sweep radial indicators to their values.
    SweepRadials,
}

/// A scheduling request drained from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Deliver [`PageEvent::Timer`] after `delay`.
    After {
        /// Wait before delivery.
        delay: Duration,
        /// Task to deliver.
        task: Task,
    },
    /// Deliver [`PageEvent::Frame`] on the next animation frame.
    NextFrame,
}

/// What the host should do with the originating DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the browser's default action run.
    #[default]
    Continue,
    /// Call `preventDefault()`.
    PreventDefault,
}
