//! Trust boundary between CMS-authored content and rendered pages.
//!
//! The `normalize` module turns a loosely-typed [`ContentRecord`] into
//! display values without ever failing; the `embed` module decides whether
//! an editor's player snippet may be rendered and, if so, rebuilds it from
//! scratch. `watch` ties the two together for a detail page.

pub mod config;
pub mod logging;

pub mod card;
pub mod embed;
pub mod normalize;
pub mod record;
pub mod watch;

pub use embed::{validate_embed, EmbedValidationResult};
pub use normalize::{normalize, NormalizedDisplayFields};
pub use record::ContentRecord;
