//! Design-layout model for generated label variations.
//!
//! Elements are a closed set of known kinds sharing a geometry block. Style
//! fields the backend invents beyond the declared ones land in `extra`, so
//! nothing a model proposes is lost on the way to the label editor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Position and size of an element on the canvas, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One element of a label layout, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text {
        #[serde(flatten)]
        geometry: Geometry,
        text: String,
        #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Barcode {
        #[serde(flatten)]
        geometry: Geometry,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Rectangle {
        #[serde(flatten)]
        geometry: Geometry,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
        stroke_width: Option<f64>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Line {
        #[serde(flatten)]
        geometry: Geometry,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Symbol {
        #[serde(flatten)]
        geometry: Geometry,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl Element {
    pub fn geometry(&self) -> &Geometry {
        match self {
            Element::Text { geometry, .. }
            | Element::Barcode { geometry, .. }
            | Element::Rectangle { geometry, .. }
            | Element::Line { geometry, .. }
            | Element::Symbol { geometry, .. } => geometry,
        }
    }
}

/// One candidate label layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: u32,
    pub layout_type: String,
    pub description: String,
    pub elements: Vec<Element>,
    pub confidence: f64,
}

/// Whether a design response came from the backend or the fallback rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Success,
    Fallback,
}
