//! JSON scene format.
//!
//! A scene is a viewport plus a list of boxes under the initial containing
//! block. Lengths are CSS strings (`"120px"`, `"50%"`, `"auto"`, `"none"`)
//! so a scene reads like the stylesheet that produced it.
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600 },
//!   "boxes": [
//!     { "name": "card", "position": "relative", "width": "500px",
//!       "children": [
//!         { "name": "badge", "position": "absolute", "right": "0" }
//!       ] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, bail};
use quokka_style::{
    Au, ComputedStyle, DisplayType, Edges, LengthPercentage, LengthPercentageOrAuto,
    PositionType, parse_max_size,
};
use quokka_tree::{BoxId, BoxTree};
use serde::Deserialize;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// A whole scene file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub boxes: Vec<SceneBox>,
}

/// How a scene box is allocated in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneBoxKind {
    #[default]
    Container,
    Leaf,
    Replaced,
}

/// Either one value for all four sides or a value per side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EdgeValues {
    All(String),
    Sides {
        top: Option<String>,
        right: Option<String>,
        bottom: Option<String>,
        left: Option<String>,
    },
}

/// One box of the scene and its subtree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SceneBox {
    pub name: Option<String>,
    pub kind: SceneBoxKind,
    pub display: DisplayType,
    pub position: PositionType,
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub min_height: Option<String>,
    pub max_height: Option<String>,
    pub margin: Option<EdgeValues>,
    pub padding: Option<EdgeValues>,
    pub border: Option<EdgeValues>,
    pub children: Vec<SceneBox>,
}

/// A scene turned into a box tree.
#[derive(Debug)]
pub struct LoadedScene {
    pub tree: BoxTree,
    pub viewport: Viewport,
    /// Every scene box in document order with its label and depth.
    pub boxes: Vec<SceneEntry>,
}

/// A laid-out box as the report lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntry {
    pub id: BoxId,
    pub label: String,
    pub depth: usize,
}

impl Scene {
    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("scene is not valid JSON")
    }

    /// Build the box tree. Boxes are attached top-down so every out-of-flow
    /// box is registered with its final containing block.
    pub fn load(&self) -> Result<LoadedScene> {
        if self.viewport.width < 0 || self.viewport.height < 0 {
            bail!(
                "viewport {}x{} has a negative side",
                self.viewport.width,
                self.viewport.height
            );
        }
        let mut tree = BoxTree::new();
        let mut boxes = Vec::new();
        let root = tree.root();
        for (index, scene_box) in self.boxes.iter().enumerate() {
            let path = format!("boxes[{index}]");
            append_scene_box(&mut tree, &mut boxes, root, scene_box, &path, 0)?;
        }
        log::debug!("scene loaded with {} boxes", boxes.len());
        Ok(LoadedScene {
            tree,
            viewport: self.viewport,
            boxes,
        })
    }
}

fn append_scene_box(
    tree: &mut BoxTree,
    entries: &mut Vec<SceneEntry>,
    parent: BoxId,
    scene_box: &SceneBox,
    path: &str,
    depth: usize,
) -> Result<()> {
    let style = scene_box
        .computed_style()
        .with_context(|| format!("invalid style at {path}"))?;
    let id = match scene_box.kind {
        SceneBoxKind::Container => tree.create_container(style),
        SceneBoxKind::Leaf => tree.create_leaf(style),
        SceneBoxKind::Replaced => tree.create_replaced(style),
    };
    tree.append_child(parent, id)
        .with_context(|| format!("cannot attach {path}"))?;

    let label = scene_box.name.clone().unwrap_or_else(|| path.to_string());
    entries.push(SceneEntry { id, label, depth });

    if !scene_box.children.is_empty() && scene_box.kind != SceneBoxKind::Container {
        bail!("{path} is a {:?} box and cannot have children", scene_box.kind);
    }
    for (index, child) in scene_box.children.iter().enumerate() {
        let child_path = format!("{path}.children[{index}]");
        append_scene_box(tree, entries, id, child, &child_path, depth + 1)?;
    }
    Ok(())
}

fn parse_or_auto(value: Option<&String>, property: &str) -> Result<LengthPercentageOrAuto> {
    value.map_or(Ok(LengthPercentageOrAuto::Auto), |value| {
        value
            .parse()
            .with_context(|| format!("`{property}: {value}`"))
    })
}

fn parse_max(value: Option<&String>, property: &str) -> Result<Option<LengthPercentage>> {
    value.map_or(Ok(None), |value| {
        parse_max_size(value).with_context(|| format!("`{property}: {value}`"))
    })
}

/// Expand an edge shorthand, keeping `initial` for sides not given.
fn parse_edges<T: Copy>(
    values: Option<&EdgeValues>,
    initial: T,
    property: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<Edges<T>> {
    let side = |value: Option<&String>, name: &str| -> Result<T> {
        value.map_or(Ok(initial), |value| {
            parse(value).with_context(|| format!("`{property}-{name}: {value}`"))
        })
    };
    match values {
        None => Ok(Edges::all(initial)),
        Some(EdgeValues::All(value)) => {
            let value = parse(value).with_context(|| format!("`{property}: {value}`"))?;
            Ok(Edges::all(value))
        }
        Some(EdgeValues::Sides {
            top,
            right,
            bottom,
            left,
        }) => Ok(Edges::new(
            side(top.as_ref(), "top")?,
            side(right.as_ref(), "right")?,
            side(bottom.as_ref(), "bottom")?,
            side(left.as_ref(), "left")?,
        )),
    }
}

fn parse_border_width(value: &str) -> Result<Au> {
    let parsed: LengthPercentage = value.parse()?;
    match parsed.fixed() {
        Some(width) if width >= Au(0) => Ok(width),
        Some(_) => bail!("border widths cannot be negative"),
        None => bail!("border widths cannot be percentages"),
    }
}

impl SceneBox {
    /// The computed style this box describes. Properties left out keep
    /// their initial values.
    pub fn computed_style(&self) -> Result<ComputedStyle> {
        let mut style = ComputedStyle {
            display: self.display,
            position: self.position,
            ..ComputedStyle::default()
        };

        style.inset = Edges::new(
            parse_or_auto(self.top.as_ref(), "top")?,
            parse_or_auto(self.right.as_ref(), "right")?,
            parse_or_auto(self.bottom.as_ref(), "bottom")?,
            parse_or_auto(self.left.as_ref(), "left")?,
        );
        style.width = parse_or_auto(self.width.as_ref(), "width")?;
        style.height = parse_or_auto(self.height.as_ref(), "height")?;
        style.min_width = parse_or_auto(self.min_width.as_ref(), "min-width")?;
        style.min_height = parse_or_auto(self.min_height.as_ref(), "min-height")?;
        style.max_width = parse_max(self.max_width.as_ref(), "max-width")?;
        style.max_height = parse_max(self.max_height.as_ref(), "max-height")?;

        style.margin = parse_edges(
            self.margin.as_ref(),
            LengthPercentageOrAuto::ZERO,
            "margin",
            |value| Ok(value.parse()?),
        )?;
        style.padding = parse_edges(
            self.padding.as_ref(),
            LengthPercentage::ZERO,
            "padding",
            |value| Ok(value.parse()?),
        )?;
        style.border_width = parse_edges(self.border.as_ref(), Au(0), "border", parse_border_width)?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scene_loads() {
        let scene = Scene::from_json(include_str!("../scenes/positioned.json")).unwrap();
        let loaded = scene.load().unwrap();
        assert_eq!(loaded.viewport, Viewport { width: 800, height: 600 });
        assert!(loaded.boxes.iter().any(|entry| entry.label == "badge"));
        assert!(loaded.boxes.iter().all(|entry| loaded.tree.contains(entry.id)));
    }

    #[test]
    fn test_style_strings_are_parsed() {
        let scene = Scene::from_json(
            r#"{ "boxes": [ { "position": "absolute", "right": "0", "width": "50%",
                 "max-width": "none", "margin": { "left": "auto" }, "border": "2px" } ] }"#,
        )
        .unwrap();
        let style = scene.boxes[0].computed_style().unwrap();
        assert_eq!(style.position, PositionType::Absolute);
        assert_eq!(style.inset.right, LengthPercentageOrAuto::ZERO);
        assert_eq!(style.inset.left, LengthPercentageOrAuto::Auto);
        assert_eq!(style.width, LengthPercentageOrAuto::percent(50.0));
        assert_eq!(style.max_width, None);
        assert_eq!(style.margin.left, LengthPercentageOrAuto::Auto);
        assert_eq!(style.margin.right, LengthPercentageOrAuto::ZERO);
        assert_eq!(style.border_width, Edges::all(Au::from_px(2)));
    }

    #[test]
    fn test_invalid_values_name_the_box() {
        let scene = Scene::from_json(r#"{ "boxes": [ { "width": "3em" } ] }"#).unwrap();
        let error = scene.load().unwrap_err();
        assert_eq!(error.to_string(), "invalid style at boxes[0]");
    }

    #[test]
    fn test_percentage_border_is_rejected() {
        let scene = Scene::from_json(r#"{ "boxes": [ { "border": "10%" } ] }"#).unwrap();
        assert!(scene.boxes[0].computed_style().is_err());
    }

    #[test]
    fn test_leaf_with_children_is_rejected() {
        let scene =
            Scene::from_json(r#"{ "boxes": [ { "kind": "leaf", "children": [ {} ] } ] }"#)
                .unwrap();
        assert!(scene.load().is_err());
    }
}
