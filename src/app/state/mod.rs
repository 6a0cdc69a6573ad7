//! Application State — zentrale Datenhaltung.

pub mod alerts;
pub mod app_state;
pub mod dialogs;
pub mod mode;
pub mod view;

pub use alerts::{Alert, AlertCenter, AlertSeverity};
pub use app_state::AppState;
pub use dialogs::{
    ConfirmAction, ConfirmDialogState, DownloadRequest, MarkerDialogState, RouteDialogState,
    UiState,
};
pub use mode::{InteractionMode, ModeState};
pub use view::ViewState;
