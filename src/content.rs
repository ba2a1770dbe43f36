use std::rc::Rc;

use log::error;
use serde::Deserialize;

use crate::components::bento_card::Tone;

const SHOWCASES_JSON: &str = include_str!("../assets/showcases.json");

/// Which modal body renders the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalCategory {
    Cinematic,
    Showcase,
    #[default]
    Reference,
    Gallery,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalLayout {
    #[default]
    Default,
    Reverse,
    VerticalTextTop,
    VerticalImageTop,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalTheme {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
}

fn one_column() -> u8 {
    1
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GalleryItem {
    pub url: String,
    /// Grid columns taken by the image.
    #[serde(default = "one_column")]
    pub span: u8,
    #[serde(default)]
    pub fit: ObjectFit,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Panel {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModalContent {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub category: ModalCategory,
    #[serde(default)]
    pub layout: ModalLayout,
    #[serde(default)]
    pub theme: ModalTheme,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ShowcaseCard {
    pub title: String,
    pub subtitle: String,
    pub background: String,
    #[serde(default)]
    pub tone: Tone,
    /// Clip played in the card itself on hover, or while in view on touch screens.
    #[serde(default)]
    pub video: Option<String>,
    pub modal: Rc<ModalContent>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ShowcaseSection {
    pub id: String,
    pub eyebrow: String,
    pub heading: String,
    pub cards: Vec<ShowcaseCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Catalogue {
    pub sections: Vec<Rc<ShowcaseSection>>,
}

impl Catalogue {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The catalogue compiled into the page. Empty if it fails to parse.
    pub fn embedded() -> Self {
        Self::parse(SHOWCASES_JSON).unwrap_or_else(|err| {
            error!("showcase catalogue is invalid, rendering no showcases: {}", err);
            Self::default()
        })
    }

    #[cfg(test)]
    pub fn section(&self, id: &str) -> Option<&Rc<ShowcaseSection>> {
        self.sections.iter().find(|section| section.id == id)
    }
}
