//! Deciding whether a press starts a drag.

use rowdrag_common::{ConfigError, PressTarget, RowId};
use rowdrag_config::{RowReorderConfig, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleHit {
    Row(RowId),
    /// The press landed on an excluded child inside the handle.
    Excluded,
    Miss,
}

#[derive(Debug, Clone)]
pub struct HandleResolver {
    handle: Selector,
    excluded: Option<Selector>,
}

impl HandleResolver {
    pub fn from_config(config: &RowReorderConfig) -> Result<Self, ConfigError> {
        let excluded = match config.excluded_children.trim() {
            "" => None,
            src => Some(Selector::parse(src)?),
        };
        Ok(Self {
            handle: Selector::parse(&config.selector)?,
            excluded,
        })
    }

    /// `target.path` runs from the pressed element outward, stopping below the
    /// row element.
    pub fn resolve(&self, target: &PressTarget) -> HandleHit {
        let Some(row) = target.row else {
            return HandleHit::Miss;
        };
        if !target.path.iter().any(|el| self.handle.matches(el)) {
            return HandleHit::Miss;
        }
        match (&self.excluded, target.element()) {
            (Some(excluded), Some(el)) if excluded.matches(el) => HandleHit::Excluded,
            _ => HandleHit::Row(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowdrag_common::ElementInfo;

    fn resolver() -> HandleResolver {
        HandleResolver::from_config(&RowReorderConfig::default()).unwrap()
    }

    fn first_cell() -> ElementInfo {
        ElementInfo::new("td").at(0, 3)
    }

    #[test]
    fn press_on_first_cell_hits() {
        let target = PressTarget::new(RowId(2), vec![first_cell()]);
        assert_eq!(resolver().resolve(&target), HandleHit::Row(RowId(2)));
    }

    #[test]
    fn press_inside_handle_hits() {
        let target = PressTarget::new(RowId(2), vec![ElementInfo::new("span"), first_cell()]);
        assert_eq!(resolver().resolve(&target), HandleHit::Row(RowId(2)));
    }

    #[test]
    fn press_on_link_is_excluded() {
        let target = PressTarget::new(RowId(2), vec![ElementInfo::new("a"), first_cell()]);
        assert_eq!(resolver().resolve(&target), HandleHit::Excluded);
    }

    #[test]
    fn press_on_other_cell_misses() {
        let target = PressTarget::new(RowId(2), vec![ElementInfo::new("td").at(1, 3)]);
        assert_eq!(resolver().resolve(&target), HandleHit::Miss);
        assert_eq!(resolver().resolve(&PressTarget::default()), HandleHit::Miss);
    }

    #[test]
    fn empty_exclusion_allows_links() {
        let config = RowReorderConfig {
            excluded_children: String::new(),
            ..RowReorderConfig::default()
        };
        let resolver = HandleResolver::from_config(&config).unwrap();
        let target = PressTarget::new(RowId(1), vec![ElementInfo::new("a"), first_cell()]);
        assert_eq!(resolver.resolve(&target), HandleHit::Row(RowId(1)));
    }

    #[test]
    fn bad_selector_is_rejected() {
        let config = RowReorderConfig {
            selector: "tr > td".into(),
            ..RowReorderConfig::default()
        };
        assert!(HandleResolver::from_config(&config).is_err());
    }
}
