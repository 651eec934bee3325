//! Pure markup builders: message snapshots in, HTML strings out.
//!
//! Nothing here touches view state or the network; the controller feeds
//! these functions the current snapshot and hands the result to a
//! [`crate::Surface`].

mod cards;
mod detail;
mod escape;

pub use cards::render_card_list;
pub use detail::{render_detail, render_detail_missing};
pub use escape::{escape_html, format_timestamp};
