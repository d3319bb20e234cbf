//! Member testimonials.

use serde::{Deserialize, Serialize};

/// A member testimonial pulled from the published sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    /// Free-form "member since" label, empty when the sheet omits it.
    pub member_since: String,
}
