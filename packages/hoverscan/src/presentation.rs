//! Hover popup and list highlight state, expressed as commands for the renderer.
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::identity::IdentityChanged;

/// Text shown in the hover popup for a matched entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl PopupContent {
    pub fn header(&self) -> String {
        format!("ID: {}\nАртикул: {}", self.id, self.code)
    }

    pub fn section(&self) -> String {
        format!("Название: {}", self.name)
    }
}

impl From<&CatalogEntry> for PopupContent {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            code: entry.code.clone(),
            name: entry.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// Instructions for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PresentationCommand {
    RenderCatalog { entries: Vec<CatalogEntry> },
    SetBoxSize { size: f64 },
    SetCursorVisual { x: f64, y: f64 },
    ShowPopup { content: PopupContent },
    HidePopup,
    Highlight { id: String },
    ClearHighlight,
    ScrollIntoView {
        id: String,
        block: ScrollBlock,
        behavior: ScrollBehavior,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HoverPhase {
    #[default]
    Idle,
    Matched(CatalogEntry),
}

pub struct HoverPresentationController {
    catalog: Arc<Catalog>,
    phase: HoverPhase,
}

impl HoverPresentationController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            phase: HoverPhase::Idle,
        }
    }

    pub fn phase(&self) -> &HoverPhase {
        &self.phase
    }

    /// Commands that set up the list and the box outline.
    pub fn initial_commands(&self, box_size: f64) -> Vec<PresentationCommand> {
        vec![
            PresentationCommand::RenderCatalog {
                entries: self.catalog.entries().to_vec(),
            },
            PresentationCommand::SetBoxSize { size: box_size },
        ]
    }

    pub fn pointer_moved(&self, x: f64, y: f64) -> PresentationCommand {
        PresentationCommand::SetCursorVisual { x, y }
    }

    pub fn on_identity_changed(&mut self, change: &IdentityChanged) -> Vec<PresentationCommand> {
        // The highlight is always cleared first so at most one entry is lit.
        let mut commands = vec![PresentationCommand::ClearHighlight];

        let Some(entry) = self.catalog.lookup(&change.identifier).cloned() else {
            if !change.is_empty() {
                log::debug!("no catalog entry for {:?}", change.identifier);
            }
            commands.push(PresentationCommand::HidePopup);
            self.phase = HoverPhase::Idle;
            return commands;
        };

        log::debug!("hovering catalog entry {} ({})", entry.id, entry.code);
        commands.push(PresentationCommand::ShowPopup {
            content: PopupContent::from(&entry),
        });
        commands.push(PresentationCommand::Highlight {
            id: entry.id.clone(),
        });
        commands.push(PresentationCommand::ScrollIntoView {
            id: entry.id.clone(),
            block: ScrollBlock::Center,
            behavior: ScrollBehavior::Smooth,
        });
        self.phase = HoverPhase::Matched(entry);
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> HoverPresentationController {
        HoverPresentationController::new(Arc::new(Catalog::builtin()))
    }

    fn changed(identifier: &str) -> IdentityChanged {
        IdentityChanged {
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(controller().phase(), &HoverPhase::Idle);
    }

    #[test]
    fn test_match_shows_popup_and_highlights() {
        let mut controller = controller();
        let commands = controller.on_identity_changed(&changed("003456"));
        assert_eq!(
            commands,
            vec![
                PresentationCommand::ClearHighlight,
                PresentationCommand::ShowPopup {
                    content: PopupContent {
                        id: "3".into(),
                        code: "003456".into(),
                        name: "Фильтр".into(),
                    }
                },
                PresentationCommand::Highlight { id: "3".into() },
                PresentationCommand::ScrollIntoView {
                    id: "3".into(),
                    block: ScrollBlock::Center,
                    behavior: ScrollBehavior::Smooth,
                },
            ]
        );
        assert!(matches!(controller.phase(), HoverPhase::Matched(e) if e.id == "3"));
    }

    #[test]
    fn test_miss_returns_to_idle() {
        let mut controller = controller();
        controller.on_identity_changed(&changed("001234"));
        let commands = controller.on_identity_changed(&changed("999999"));
        assert_eq!(
            commands,
            vec![
                PresentationCommand::ClearHighlight,
                PresentationCommand::HidePopup
            ]
        );
        assert_eq!(controller.phase(), &HoverPhase::Idle);
    }

    #[test]
    fn test_empty_returns_to_idle() {
        let mut controller = controller();
        controller.on_identity_changed(&changed("5"));
        controller.on_identity_changed(&changed(""));
        assert_eq!(controller.phase(), &HoverPhase::Idle);
    }

    #[test]
    fn test_switching_entries_clears_before_highlighting() {
        let mut controller = controller();
        controller.on_identity_changed(&changed("001234"));
        let commands = controller.on_identity_changed(&changed("002345"));
        assert_eq!(commands[0], PresentationCommand::ClearHighlight);
        let highlights: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, PresentationCommand::Highlight { .. }))
            .collect();
        assert_eq!(highlights.len(), 1);
        assert!(matches!(controller.phase(), HoverPhase::Matched(e) if e.id == "2"));
    }

    #[test]
    fn test_initial_commands_render_list_then_box() {
        let commands = controller().initial_commands(40.0);
        assert!(matches!(&commands[0], PresentationCommand::RenderCatalog { entries } if entries.len() == 16));
        assert_eq!(commands[1], PresentationCommand::SetBoxSize { size: 40.0 });
    }

    #[test]
    fn test_popup_text() {
        let content = PopupContent::from(&CatalogEntry::new("3", "Фильтр", "003456"));
        assert_eq!(content.header(), "ID: 3\nАртикул: 003456");
        assert_eq!(content.section(), "Название: Фильтр");
    }
}
