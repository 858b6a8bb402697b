//! Element ids, selectors and class names the page markup provides.

/// Mobile menu trigger button.
pub const MENU_BUTTON_ID: &str = "menuBtn";
/// Mobile menu panel.
pub const MOBILE_MENU_ID: &str = "mobileMenu";
/// Close button inside the mobile menu.
pub const MENU_CLOSE_ID: &str = "closeMenu";
/// Links inside the mobile menu.
pub const MOBILE_NAV_LINK: &str = ".mobile-nav-link";
/// Desktop navigation links (scrollspy targets).
pub const NAV_LINK: &str = ".nav-link";

/// Animated counters.
pub const COUNTER: &str = ".stat-number[data-target]";
/// Linear progress bar fills.
pub const PROGRESS_FILL: &str = ".progress-fill[data-percent]";
/// Radial progress circles.
pub const RADIAL_CIRCLE: &str = ".radial-progress circle.progress[data-percent]";
/// Elements revealed on first intersection.
pub const SECTION_FADE: &str = ".section-fade";

/// Cursor glow element.
pub const CURSOR_GLOW: &str = ".cursor-glow";
/// Cursor dot element.
pub const CURSOR_DOT: &str = ".cursor-dot";
/// Elements that emphasize the cursor glow while hovered.
pub const INTERACTIVE: &str = "a, button, [role=\"button\"], .btn-primary, .btn-outline";

/// CV viewer open control.
pub const VIEWER_OPEN_ID: &str = "viewCvBtn";
/// CV modal container. Must ship with the `hidden` class: the viewer
/// treats a container without it as already open and will not load the
/// document on the first open click.
pub const VIEWER_MODAL_ID: &str = "cvModal";
/// CV modal close control.
pub const VIEWER_CLOSE_ID: &str = "cvClose";
/// Embedded document frame.
pub const VIEWER_FRAME_ID: &str = "cvIframe";
/// Notice shown when the frame cannot render the document.
pub const VIEWER_FALLBACK_ID: &str = "cvFallback";
/// Content panel inside the modal; clicks outside it close the modal.
pub const VIEWER_PANEL: &str = ".glass-effect";

/// Inline options block.
pub const OPTIONS_ID: &str = "folio-options";

/// Counter goal attribute.
pub const ATTR_TARGET: &str = "data-target";
/// Percentage attribute for bars and circles.
pub const ATTR_PERCENT: &str = "data-percent";
/// SVG circle radius attribute.
pub const ATTR_RADIUS: &str = "r";

/// Open menu / current nav link.
pub const CLASS_ACTIVE: &str = "active";
/// Revealed section.
pub const CLASS_VISIBLE: &str = "visible";
/// Cursor glow over an interactive element.
pub const CLASS_HOVERING: &str = "hovering";
/// Closed modal and hidden fallback notice.
pub const CLASS_HIDDEN: &str = "hidden";
/// Body class while the modal is open.
pub const CLASS_MODAL_OPEN: &str = "modal-open";

/// Every id the page may provide, for markup audits.
pub const IDS: [&str; 9] = [
    MENU_BUTTON_ID,
    MOBILE_MENU_ID,
    MENU_CLOSE_ID,
    VIEWER_OPEN_ID,
    VIEWER_MODAL_ID,
    VIEWER_CLOSE_ID,
    VIEWER_FRAME_ID,
    VIEWER_FALLBACK_ID,
    OPTIONS_ID,
];

/// Every hook class the page may provide, for markup audits.
pub const CLASSES: [&str; 10] = [
    "mobile-nav-link",
    "nav-link",
    "stat-number",
    "progress-fill",
    "radial-progress",
    "progress",
    "section-fade",
    "cursor-glow",
    "cursor-dot",
    "glass-effect",
];
