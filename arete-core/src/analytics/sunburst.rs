//! Radial hierarchical partition ("sunburst") layout.
//!
//! Lays out a two-level tree (synthetic root, categories, habits) as
//! concentric rings: ring depth encodes tree level, angular span encodes
//! a node's share of its siblings' total value. The output is pure
//! geometry (angles in radians, radii in the caller's canvas unit); arc
//! path construction is a presentation concern.

use crate::palette::{Palette, ROOT_HEX};
use crate::types::{active_habits, Habit, HabitLogs};
use serde::Serialize;
use std::f64::consts::TAU;

/// Each ring is `outer_radius / RING_DIVISOR` thick.
pub const RING_DIVISOR: f64 = 3.5;

/// Trimmed off a full-circle slice's end angle so renderers never see a
/// degenerate closed arc.
pub const FULL_CIRCLE_EPSILON: f64 = 1e-4;

/// One node of the value tree fed to [`layout`].
#[derive(Debug, Clone, Default)]
pub struct SunburstNode {
    pub name: String,
    /// Sum of the subtree's completion counts
    pub value: u64,
    /// Explicit color; children without one inherit the parent's
    pub color: Option<String>,
    pub children: Vec<SunburstNode>,
}

impl SunburstNode {
    pub fn leaf(name: &str, value: u64) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: None,
            children: Vec::new(),
        }
    }
}

/// One laid-out slice, ready for geometric rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Slice {
    /// Stable within one layout: depth, name, and start angle
    pub id: String,
    pub name: String,
    pub value: u64,
    pub depth: usize,
    /// Radians, clockwise from 12 o'clock by renderer convention
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Resolved `#rrggbb` color after inheritance
    pub color: String,
    /// Id chain from root to this slice, inclusive; lets a renderer do
    /// O(1) "is this an ancestor of the hovered slice" checks
    pub ancestors: Vec<String>,
}

/// Build the category/habit value tree from current state.
///
/// Active habits only. Categories are sorted by completion sum
/// descending so the largest share starts at 12 o'clock; habits keep
/// list order within their category. The root's value is the grand
/// total of the active habits' completions.
pub fn habit_tree(habits: &[Habit], logs: &HabitLogs, palette: &Palette) -> SunburstNode {
    let mut categories: Vec<SunburstNode> = Vec::new();

    for habit in active_habits(habits) {
        let completions = logs.completion_count(&habit.id) as u64;

        let index = match categories.iter().position(|c| c.name == habit.category) {
            Some(i) => i,
            None => {
                categories.push(SunburstNode {
                    name: habit.category.clone(),
                    value: 0,
                    color: Some(palette.color(&habit.category).to_string()),
                    children: Vec::new(),
                });
                categories.len() - 1
            }
        };

        categories[index].value += completions;
        categories[index]
            .children
            .push(SunburstNode::leaf(&habit.title, completions));
    }

    categories.sort_by(|a, b| b.value.cmp(&a.value));
    let total = categories.iter().map(|c| c.value).sum();

    SunburstNode {
        name: "Root".to_string(),
        value: total,
        color: None,
        children: categories,
    }
}

/// Lay out the tree as slices. Root spans the full circle at depth 0;
/// each child gets a sub-span of its parent proportional to
/// `value / sum(sibling values)`. Zero-value nodes are skipped entirely
/// (zero span, nothing emitted); the root is always emitted.
pub fn layout(root: &SunburstNode, outer_radius: f64) -> Vec<Slice> {
    let ring = outer_radius / RING_DIVISOR;
    layout_node(root, 0, 0.0, TAU, ROOT_HEX, &[], ring)
}

/// Recursive layout step: returns this node's slice (if drawn) followed
/// by its descendants', pre-order. Pure; each call returns its own list
/// and the caller concatenates.
fn layout_node(
    node: &SunburstNode,
    depth: usize,
    start_angle: f64,
    end_angle: f64,
    parent_color: &str,
    ancestors: &[String],
    ring: f64,
) -> Vec<Slice> {
    let color = if depth == 0 {
        ROOT_HEX
    } else {
        node.color.as_deref().unwrap_or(parent_color)
    };

    let id = format!("{}-{}-{:.4}", depth, node.name, start_angle);
    let mut chain = ancestors.to_vec();
    chain.push(id.clone());

    let mut slices = Vec::new();
    if node.value > 0 || depth == 0 {
        // A perfect full circle degenerates to a zero-length arc in path
        // renderers; trim the end angle by epsilon before emitting.
        let drawn_end = if end_angle - start_angle >= TAU {
            start_angle + TAU - FULL_CIRCLE_EPSILON
        } else {
            end_angle
        };
        let inner_radius = if depth == 0 { 0.0 } else { depth as f64 * ring };

        slices.push(Slice {
            id,
            name: node.name.clone(),
            value: node.value,
            depth,
            start_angle,
            end_angle: drawn_end,
            inner_radius,
            outer_radius: (depth as f64 + 1.0) * ring,
            color: color.to_string(),
            ancestors: chain.clone(),
        });
    }

    // Children subdivide the untrimmed span so sibling spans stay exact.
    let sibling_total: u64 = node.children.iter().map(|c| c.value).sum();
    if sibling_total > 0 {
        let span = end_angle - start_angle;
        let mut cursor = start_angle;
        for child in &node.children {
            if child.value == 0 {
                continue;
            }
            let child_span = child.value as f64 / sibling_total as f64 * span;
            slices.extend(layout_node(
                child,
                depth + 1,
                cursor,
                cursor + child_span,
                color,
                &chain,
                ring,
            ));
            cursor += child_span;
        }
    }

    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const TOLERANCE: f64 = 1e-9;

    fn tree(children: Vec<SunburstNode>) -> SunburstNode {
        let value = children.iter().map(|c| c.value).sum();
        SunburstNode {
            name: "Root".to_string(),
            value,
            color: None,
            children,
        }
    }

    fn habit(id: &str, category: &str) -> Habit {
        Habit {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: category.to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            archived: false,
        }
    }

    #[test]
    fn test_spans_proportional_to_values() {
        let root = tree(vec![
            SunburstNode {
                name: "Fitness".to_string(),
                value: 30,
                color: Some("#9f1239".to_string()),
                children: vec![SunburstNode::leaf("Run", 30)],
            },
            SunburstNode {
                name: "Learning".to_string(),
                value: 10,
                color: Some("#0c4a6e".to_string()),
                children: vec![SunburstNode::leaf("Read", 10)],
            },
        ]);
        let slices = layout(&root, 250.0);

        let categories: Vec<&Slice> = slices.iter().filter(|s| s.depth == 1).collect();
        assert_eq!(categories.len(), 2);
        let fitness = categories[0].end_angle - categories[0].start_angle;
        let learning = categories[1].end_angle - categories[1].start_angle;
        // 3:1 split covering the full circle exactly
        assert!((fitness - 3.0 * learning).abs() < TOLERANCE);
        assert!((fitness + learning - TAU).abs() < TOLERANCE);
        // Adjacent: second category starts where the first ends
        assert!((categories[0].end_angle - categories[1].start_angle).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_value_child_absent() {
        let root = tree(vec![
            SunburstNode {
                name: "Fitness".to_string(),
                value: 5,
                color: None,
                children: vec![SunburstNode::leaf("Run", 5)],
            },
            SunburstNode {
                name: "Idle".to_string(),
                value: 0,
                color: None,
                children: vec![SunburstNode::leaf("Nothing", 0)],
            },
        ]);
        let slices = layout(&root, 250.0);
        assert!(slices.iter().all(|s| s.name != "Idle" && s.name != "Nothing"));
        // The surviving category takes the whole circle, minus epsilon
        let fitness = slices.iter().find(|s| s.name == "Fitness").unwrap();
        assert!((fitness.end_angle - (TAU - FULL_CIRCLE_EPSILON)).abs() < TOLERANCE);
    }

    #[test]
    fn test_ring_radii_by_depth() {
        let root = tree(vec![SunburstNode {
            name: "Fitness".to_string(),
            value: 1,
            color: None,
            children: vec![SunburstNode::leaf("Run", 1)],
        }]);
        let outer = 250.0;
        let ring = outer / RING_DIVISOR;
        let slices = layout(&root, outer);

        let root_slice = &slices[0];
        assert_eq!(root_slice.depth, 0);
        assert_eq!(root_slice.inner_radius, 0.0);
        assert!((root_slice.outer_radius - ring).abs() < TOLERANCE);
        // Root is a full disc, end trimmed by epsilon
        assert!((root_slice.end_angle - (TAU - FULL_CIRCLE_EPSILON)).abs() < TOLERANCE);

        let habit_slice = slices.iter().find(|s| s.depth == 2).unwrap();
        assert!((habit_slice.inner_radius - 2.0 * ring).abs() < TOLERANCE);
        assert!((habit_slice.outer_radius - 3.0 * ring).abs() < TOLERANCE);
    }

    #[test]
    fn test_ancestor_chains_and_ids() {
        let root = tree(vec![SunburstNode {
            name: "Fitness".to_string(),
            value: 2,
            color: None,
            children: vec![SunburstNode::leaf("Run", 1), SunburstNode::leaf("Swim", 1)],
        }]);
        let slices = layout(&root, 250.0);

        let run = slices.iter().find(|s| s.name == "Run").unwrap();
        let category = slices.iter().find(|s| s.name == "Fitness").unwrap();
        let root_slice = &slices[0];

        assert_eq!(run.ancestors.len(), 3);
        assert_eq!(run.ancestors[0], root_slice.id);
        assert_eq!(run.ancestors[1], category.id);
        assert_eq!(run.ancestors[2], run.id);
        assert!(run.id.starts_with("2-Run-"));

        // Sibling slices get distinct ids via their start angle
        let swim = slices.iter().find(|s| s.name == "Swim").unwrap();
        assert_ne!(run.id, swim.id);
    }

    #[test]
    fn test_color_inheritance() {
        let root = tree(vec![
            SunburstNode {
                name: "Fitness".to_string(),
                value: 1,
                color: Some("#9f1239".to_string()),
                children: vec![SunburstNode::leaf("Run", 1)],
            },
            SunburstNode {
                name: "Unknown".to_string(),
                value: 1,
                color: None,
                children: Vec::new(),
            },
        ]);
        let slices = layout(&root, 250.0);

        assert_eq!(slices[0].color, ROOT_HEX);
        let run = slices.iter().find(|s| s.name == "Run").unwrap();
        assert_eq!(run.color, "#9f1239"); // inherited from category
        // No own color anywhere up the chain: inherits the root tone
        let unknown = slices.iter().find(|s| s.name == "Unknown").unwrap();
        assert_eq!(unknown.color, ROOT_HEX);
    }

    #[test]
    fn test_habit_tree_groups_and_sorts() {
        let habits = vec![
            habit("read", "Learning"),
            habit("run", "Fitness"),
            habit("swim", "Fitness"),
        ];
        let mut logs = HabitLogs::new();
        for i in 1..=3 {
            logs.mark("run", NaiveDate::from_ymd_opt(2025, 6, i).unwrap());
        }
        logs.mark("read", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let root = habit_tree(&habits, &logs, &Palette::new());
        assert_eq!(root.value, 4);
        // Fitness (3) sorts before Learning (1)
        assert_eq!(root.children[0].name, "Fitness");
        assert_eq!(root.children[0].value, 3);
        assert_eq!(root.children[0].children.len(), 2);
        assert_eq!(root.children[1].name, "Learning");
        assert_eq!(
            root.children[0].color.as_deref(),
            Some("#9f1239")
        );
    }

    #[test]
    fn test_habit_tree_skips_archived() {
        let mut archived = habit("run", "Fitness");
        archived.archived = true;
        let habits = vec![archived, habit("read", "Learning")];
        let mut logs = HabitLogs::new();
        logs.mark("run", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        logs.mark("read", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let root = habit_tree(&habits, &logs, &Palette::new());
        assert_eq!(root.value, 1);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "Learning");
    }

    #[test]
    fn test_empty_tree_only_root() {
        let root = habit_tree(&[], &HabitLogs::new(), &Palette::new());
        let slices = layout(&root, 250.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].depth, 0);
    }
}
