//! Classification and rendering of course fee records.
//!
//! Fee records come out of a flexible-schema database column and have no
//! explicit type tag. `detect_fee_pattern` classifies a record by which keys
//! it carries; `build_course_fee_card` classifies once and extracts the
//! display structure for that shape. Keys a card does not consume are
//! rendered generically by `render_field`, ordered by `sort_fields_by_priority`.
//!
//! Everything here is a pure function of its input and never panics.

mod cards;
mod detail;
mod format;
mod other_fees;
mod pattern;
mod priority;
mod render;

pub use cards::{build_course_fee_card, build_course_fee_cards, nested_total_label};
pub use detail::{build_detail_view, render_blob};
pub use format::{format_amount, format_currency, format_field_label, parse_numeric_value};
pub use other_fees::build_other_fees_table;
pub use pattern::detect_fee_pattern;
pub use priority::{field_priority, sort_fields_by_priority};
pub use render::{render_field, render_value};
