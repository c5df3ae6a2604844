//! Hover-target lookup: one page element per planet, `#planet-<zone>`,
//! carrying `data-description` and `data-color` attributes.

use nova_scene::{ConfigurationError, InputEvent};

pub const DESCRIPTION_ATTR: &str = "data-description";
pub const COLOR_ATTR: &str = "data-color";

/// Element id for the hover zone of planet `zone`.
pub fn hover_target_id(zone: usize) -> String {
    format!("planet-{zone}")
}

/// Attributes read from one hover element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub zone: usize,
    pub id: String,
    pub description: String,
    pub color: String,
}

impl HoverTarget {
    pub fn enter_event(&self) -> InputEvent {
        InputEvent::HoverEnter {
            zone: self.zone,
            description: self.description.clone(),
            color: self.color.clone(),
        }
    }
}

/// Resolve `count` hover targets through `lookup`, which maps an element id
/// to `(description, color)` or `None` when the element is absent.
/// Missing attributes read as empty strings; a missing element is an error.
pub fn collect_hover_targets<F>(count: usize, mut lookup: F) -> Result<Vec<HoverTarget>, ConfigurationError>
where
    F: FnMut(&str) -> Option<(String, String)>,
{
    (0..count)
        .map(|zone| -> Result<HoverTarget, ConfigurationError> {
            let id = hover_target_id(zone);
            let (description, color) = lookup(&id)
                .ok_or_else(|| ConfigurationError::MissingHoverTarget { id: id.clone() })?;
            Ok(HoverTarget { zone, id, description, color })
        })
        .collect()
}

/// Look the hover targets up in the current document.
pub fn bind_document_targets(count: usize) -> Result<Vec<HoverTarget>, ConfigurationError> {
    let document = web_sys::window().and_then(|w| w.document());
    collect_hover_targets(count, |id| {
        let element = document.as_ref()?.get_element_by_id(id)?;
        Some((
            element.get_attribute(DESCRIPTION_ATTR).unwrap_or_default(),
            element.get_attribute(COLOR_ATTR).unwrap_or_default(),
        ))
    })
}
