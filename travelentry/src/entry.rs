//! Travel entry model and its HTML renderer.
//!
//! `TravelEntry` carries the four presentational fields of a single log
//! entry (author, place, coordinates, link). Rendering is a pure function
//! from those fields to a fixed-structure HTML fragment; there is no
//! validation and no error path — absent fields simply render as empty
//! slots. Keep the fragment structure in sync with the styles served by
//! the `travelweb` pages.
//!
use serde::{Deserialize, Serialize};

use crate::markup::escape;

/// A single travel-log entry as displayed in the UI.
///
/// All fields are opaque renderable values; none is required. The struct
/// derives `Deserialize` so the web layer can accept the property set
/// directly from query parameters or a JSON body.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TravelEntry {
    /// Who logged the trip.
    pub author: Option<String>,
    /// Where the trip went.
    pub place: Option<String>,
    /// Coordinates, kept as one free-form string (e.g. "38.7N,9.1W").
    pub lat: Option<String>,
    /// Link to photos or a write-up.
    pub link: Option<String>,
}

impl TravelEntry {
    /// Render the entry as an HTML fragment.
    ///
    /// Total function: any combination of present and absent fields
    /// produces the same fixed structure — a divider followed by the four
    /// labeled fields in the order Author, Place, Lat + Long, Link.
    /// Values are escaped on the way in.
    pub fn render(&self) -> String {
        format!(
            r#"<div class="travel-entry">
    <hr class="divider" />
    <div class="travel-name">
        <span class="label"><strong>Author:</strong></span> {}
    </div>
    <div class="travel-location">
        <span class="label"><strong>Place:</strong></span> {}
    </div>
    <div class="travel-lat">
        <span class="label"><strong>Lat + Long:</strong></span> {}
    </div>
    <div class="travel-link">
        <span class="label"><strong>Link:</strong></span> {}
    </div>
</div>"#,
            escape(self.author.as_deref().unwrap_or("")),
            escape(self.place.as_deref().unwrap_or("")),
            escape(self.lat.as_deref().unwrap_or("")),
            escape(self.link.as_deref().unwrap_or("")),
        )
    }
}
