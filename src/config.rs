//! Render options.
//!
//! Every field has a default, so a JSON object only needs the keys it
//! wants to change:
//!
//! ```
//! use songsheet::RenderOptions;
//!
//! let opts = RenderOptions::from_json(r#"{ "columns": 3, "hide_title": true }"#).unwrap();
//! assert_eq!(opts.columns, 3);
//! assert_eq!(opts.spacing_ratio, 1.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SongsheetError;
use crate::renderer::{DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Columns per page.
    pub columns: usize,
    /// Height of a blank line relative to the lyric font height.
    pub spacing_ratio: f64,
    /// Curve amplitude relative to the lyric font height.
    pub amplitude_ratio: f64,
    /// Draw chord chart strings thinnest first (left-handed view).
    pub mirror_strings: bool,
    pub hide_title: bool,
    /// Page size in inches.
    pub page_width: f64,
    pub page_height: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 2,
            spacing_ratio: 1.5,
            amplitude_ratio: 0.8,
            mirror_strings: false,
            hide_title: false,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

impl RenderOptions {
    /// Decode and validate options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, SongsheetError> {
        let opts: RenderOptions = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<(), SongsheetError> {
        if self.columns == 0 {
            return Err(SongsheetError::Options("columns must be at least 1".into()));
        }
        if !(self.spacing_ratio > 0.0 && self.amplitude_ratio > 0.0) {
            return Err(SongsheetError::Options(format!(
                "spacing ({}) and amplitude ({}) ratios must be positive",
                self.spacing_ratio, self.amplitude_ratio
            )));
        }
        // half an inch goes to padding and the right-hand info block needs room
        if !(self.page_width > 1.0 && self.page_height > 1.0) {
            return Err(SongsheetError::Options(format!(
                "page {}x{}in is too small",
                self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(RenderOptions::from_json("{}").unwrap(), RenderOptions::default());
    }

    #[test]
    fn partial_objects_keep_other_defaults() {
        let opts = RenderOptions::from_json(r#"{"mirror_strings": true, "page_height": 14.0}"#).unwrap();
        assert!(opts.mirror_strings);
        assert_eq!(opts.page_height, 14.0);
        assert_eq!(opts.columns, 2);
    }

    #[test]
    fn zero_columns_are_rejected() {
        let err = RenderOptions::from_json(r#"{"columns": 0}"#).unwrap_err();
        assert!(matches!(err, SongsheetError::Options(_)));
    }

    #[test]
    fn bad_json_is_an_options_error() {
        assert!(matches!(RenderOptions::from_json("[1, 2"), Err(SongsheetError::Options(_))));
        assert!(matches!(
            RenderOptions::from_json(r#"{"amplitude_ratio": -1.0}"#),
            Err(SongsheetError::Options(_))
        ));
    }
}
