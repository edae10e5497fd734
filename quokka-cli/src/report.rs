//! Printing laid-out scenes.

use owo_colors::OwoColorize;
use quokka_layout::{DisplayBox, LayoutContext, map_top_left_to_ancestor};
use quokka_style::Au;
use quokka_tree::LayoutBox;
use serde::Serialize;

use crate::scene::SceneEntry;

/// Geometry of one box in CSS pixels. `x`/`y` are in viewport space,
/// `left`/`top` relative to the containing block's content box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxReport {
    pub name: String,
    pub position: String,
    pub containing_block: Option<String>,
    pub x: f32,
    pub y: f32,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub margin: [f32; 4],
    pub inset: [f32; 4],
}

/// The report for a whole scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub viewport: [f32; 2],
    pub boxes: Vec<BoxReport>,
}

fn px(value: Au) -> f32 {
    value.to_f32_px()
}

fn box_report(ctx: &LayoutContext<'_>, entry: &SceneEntry, entries: &[SceneEntry]) -> BoxReport {
    let tree = ctx.tree();
    let layout_box = ctx.layout_box(entry.id);
    let display_box: &DisplayBox = ctx.display_box(entry.id);
    let viewport_position = map_top_left_to_ancestor(ctx, entry.id, tree.root());

    let containing_block = tree.containing_block(entry.id).and_then(|containing_block| {
        entries
            .iter()
            .find(|candidate| candidate.id == containing_block)
            .map(|candidate| candidate.label.clone())
    });
    let margin = display_box.horizontal_margin();
    let vertical_margin = display_box.vertical_margin();
    let inset = display_box.horizontal_inset();
    let vertical_inset = display_box.vertical_inset();

    BoxReport {
        name: entry.label.clone(),
        position: position_keyword(layout_box),
        containing_block,
        x: px(viewport_position.left),
        y: px(viewport_position.top),
        left: px(display_box.left()),
        top: px(display_box.top()),
        width: px(display_box.border_box_width()),
        height: px(display_box.border_box_height()),
        margin: [
            px(vertical_margin.top),
            px(margin.right),
            px(vertical_margin.bottom),
            px(margin.left),
        ],
        inset: [
            px(vertical_inset.top),
            px(inset.right),
            px(vertical_inset.bottom),
            px(inset.left),
        ],
    }
}

fn position_keyword(layout_box: &LayoutBox) -> String {
    layout_box.style().position.to_string()
}

/// Collect the geometry of every scene box after layout.
pub fn scene_report(ctx: &LayoutContext<'_>, entries: &[SceneEntry]) -> SceneReport {
    let root = ctx.display_box(ctx.tree().root());
    SceneReport {
        viewport: [px(root.content_box_width()), px(root.content_box_height())],
        boxes: entries
            .iter()
            .map(|entry| box_report(ctx, entry, entries))
            .collect(),
    }
}

/// Print the report as an indented tree.
pub fn print_report(report: &SceneReport, entries: &[SceneEntry]) {
    println!(
        "{} {}x{}",
        "viewport".bold(),
        report.viewport[0],
        report.viewport[1]
    );
    for (entry, box_report) in entries.iter().zip(&report.boxes) {
        let indent = "  ".repeat(entry.depth + 1);
        let position = if box_report.position == "static" {
            box_report.position.dimmed().to_string()
        } else {
            box_report.position.yellow().to_string()
        };
        println!("{indent}{} {position}", box_report.name.bold().cyan());
        println!(
            "{indent}  border box: x={:.2} y={:.2} w={:.2} h={:.2}",
            box_report.x, box_report.y, box_report.width, box_report.height
        );
        if let Some(containing_block) = &box_report.containing_block {
            println!(
                "{indent}  {} {containing_block} at left={:.2} top={:.2}",
                "in".dimmed(),
                box_report.left,
                box_report.top
            );
        }
        if box_report.margin.iter().any(|side| *side != 0.0) {
            let [top, right, bottom, left] = box_report.margin;
            println!("{indent}  margin: t={top:.2} r={right:.2} b={bottom:.2} l={left:.2}");
        }
        if box_report.inset.iter().any(|side| *side != 0.0) {
            let [top, right, bottom, left] = box_report.inset;
            println!(
                "{indent}  {}: t={top:.2} r={right:.2} b={bottom:.2} l={left:.2}",
                "inset".green()
            );
        }
    }
}
