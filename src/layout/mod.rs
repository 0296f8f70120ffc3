mod error;
pub(crate) mod label_visibility;
pub(crate) mod types;
pub use error::LayoutError;
pub use label_visibility::{
    apply_label_visibility, resolve_label_decisions, resolve_label_visibility,
};
pub use types::*;
