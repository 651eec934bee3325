pub mod controller;
pub mod markup;
pub mod state;
pub mod surface;

pub use controller::{Controller, Modal, ModalKind, UiEvent, ASSIGNED_RESPONDER};
pub use state::ViewState;
pub use surface::{RecordingSurface, StatTiles, Surface};
