//! Static registration records for hosts that load these operations as graph nodes.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    /// Host type tag, e.g. `MASK` or `COLOR`.
    pub kind: &'static str,
    pub default: Option<&'static str>,
    /// Allowed values for enumerated inputs; empty otherwise.
    pub choices: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    /// Entry point the host invokes.
    pub function: &'static str,
    pub inputs: &'static [InputSpec],
    pub outputs: &'static [&'static str],
}

pub const MASKS_TO_COLORED_MASKS: NodeDescriptor = NodeDescriptor {
    id: "MasksToColoredMasks",
    display_name: "Masks to Colored Masks",
    category: "mask",
    function: "masks_to_image",
    inputs: &[
        InputSpec {
            name: "mask",
            kind: "MASK",
            default: None,
            choices: &[],
        },
        InputSpec {
            name: "colors",
            kind: "STRING",
            default: Some("palette"),
            choices: &[],
        },
        InputSpec {
            name: "background",
            kind: "COLOR",
            default: Some("#000000"),
            choices: &[],
        },
    ],
    outputs: &["IMAGE"],
};

pub const COLOR_PICKER: NodeDescriptor = NodeDescriptor {
    id: "ColorPicker",
    display_name: "Color Picker",
    category: "mask",
    function: "pick_color",
    inputs: &[
        InputSpec {
            name: "color",
            kind: "COLOR",
            default: Some("#FFFFFF"),
            choices: &[],
        },
        InputSpec {
            name: "mode",
            kind: "ENUM",
            default: Some("HEX"),
            choices: &["HEX", "DEC"],
        },
    ],
    outputs: &["COLOR"],
};

/// Every node this crate provides.
pub fn registry() -> &'static [NodeDescriptor] {
    &[MASKS_TO_COLORED_MASKS, COLOR_PICKER]
}
