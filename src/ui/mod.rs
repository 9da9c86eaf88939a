//! User interface rendering module
//!
//! The screen is inflated from the `main` layout resource; this module fills
//! its slots with live data using ratatui.
//!
//! - `option_view` - Option value list, empty placeholder and detail popup
//! - `status` - Header, status bar and error panel

mod option_view;
mod status;

use crate::{App, AppMode};
use catalogtui::view::LayoutId;
use option_view::{render_option_detail, render_option_list};
use ratatui::Frame;
use status::{render_error_panel, render_header, render_status_bar};

/// Whole-screen layout with `header`, `content` and `status` slots
pub(crate) const MAIN_LAYOUT: LayoutId = LayoutId::new("main");
/// Side panel attached next to the list while errors are shown
pub(crate) const ERROR_PANEL_LAYOUT: LayoutId = LayoutId::new("error_panel");
/// Placeholder shown while no option values match
pub(crate) const EMPTY_CATALOG_LAYOUT: LayoutId = LayoutId::new("empty_catalog");
/// Popup describing the selected option value
pub(crate) const OPTION_DETAIL_LAYOUT: LayoutId = LayoutId::new("option_detail");

/// Main UI rendering function
///
/// Draws the inflated screen, dispatching each slot to its renderer, then
/// overlays the detail popup when it is open.
pub(crate) fn ui(f: &mut Frame, app: &mut App) {
    let screen = app.screen.clone();
    let area = f.area();

    screen.render(f, area, &mut |slot, f, area| match slot {
        "header" => render_header(f, app, area),
        "content" => render_option_list(f, app, area),
        "status" => render_status_bar(f, app, area),
        "errors" => render_error_panel(f, app, area),
        _ => {}
    });

    if app.mode == AppMode::Detail {
        render_option_detail(f, app);
    }
}
