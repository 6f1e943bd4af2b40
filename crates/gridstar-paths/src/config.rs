use gridstar_core::Directions;

/// Tuning for a [`Pathfinder`](crate::Pathfinder).
///
/// The default searches 8-connected with no iteration cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Direction set used to expand the current cell.
    pub directions: Directions,
    /// Give up once this many cells have been closed without reaching the
    /// goal; `Some(0)` gives up before closing the start. `None` searches
    /// until the open set is empty.
    pub max_iterations: Option<usize>,
}

impl SearchConfig {
    /// Set the expansion direction set (builder).
    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    /// Cap the number of closed cells (builder).
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"directions":"cardinals"}"#).unwrap();
        assert_eq!(cfg, SearchConfig::default().with_directions(Directions::Cardinals));

        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn round_trip() {
        let cfg = SearchConfig::default().with_max_iterations(64);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
