use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{RRTree, Scene, TreeNode};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::rrt::RRTSolution;

/// Renders the scene, the grown tree and the path to the goal.
/// The y-axis points upwards, as in the coordinate system of the scene.
pub fn solution_to_svg(scene: &Scene, solution: &RRTSolution, options: SvgDrawOptions) -> Document {
    let bbox = scene.region.bbox();
    let theme = &options.theme;
    let tree = &solution.tree;

    let margin = 0.05 * f32::max(bbox.width(), bbox.height());
    let (vb_x, vb_y) = (bbox.x_min - margin, bbox.y_min - margin);
    let (vb_w, vb_h) = (bbox.width() + 2.0 * margin, bbox.height() + 2.0 * margin);

    let stroke_width = f32::min(bbox.width(), bbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let background = Rectangle::new()
        .set("x", vb_x)
        .set("y", vb_y)
        .set("width", vb_w)
        .set("height", vb_h)
        .set("fill", format!("{}", theme.background_fill));

    let region = svg_util::data_to_path(
        svg_util::simple_polygon_data(&scene.region.shape),
        &[
            ("fill", "none"),
            ("stroke", &*format!("{}", theme.region_stroke)),
            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
        ],
    )
    .add(Title::new(format!(
        "region, width: {:.3}, height: {:.3}",
        scene.region.width(),
        scene.region.height()
    )));

    let obstacles = scene
        .obstacles
        .iter()
        .fold(Group::new().set("id", "obstacles"), |group, obstacle| {
            group.add(
                svg_util::data_to_path(
                    svg_util::simple_polygon_data(&obstacle.shape),
                    &[
                        ("fill", &*format!("{}", theme.obstacle_fill)),
                        ("stroke", &*format!("{}", theme.obstacle_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "obstacle {}, lower left: ({:.3}, {:.3}), width: {:.3}, height: {:.3}",
                    obstacle.id,
                    obstacle.rect.x_min,
                    obstacle.rect.y_min,
                    obstacle.width(),
                    obstacle.height()
                ))),
            )
        });

    let on_path = |child: usize| match &solution.path {
        Some(path) => path.node_ids().any(|id| id.0 == child),
        None => false,
    };

    let edges = tree
        .edges()
        .iter()
        .filter(|e| !options.path_only || on_path(e.child.0))
        .fold(Group::new().set("id", "edges"), |group, edge| {
            group.add(svg_util::data_to_path(
                svg_util::edge_data(edge.segment),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", edge.color)),
                    ("stroke-width", &*format!("{}", stroke_width)),
                    ("stroke-linecap", "round"),
                ],
            ))
        });

    let nodes = match options.draw_nodes {
        false => Group::new().set("id", "nodes"),
        true => tree
            .nodes()
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, n)| !n.is_goal && (!options.path_only || on_path(*i)))
            .fold(Group::new().set("id", "nodes"), |group, (i, node)| {
                group.add(
                    svg_util::point(node.position, node.color, node.radius)
                        .add(Title::new(format!("node n{i}"))),
                )
            }),
    };

    let endpoint = |node: &TreeNode, name: &str| {
        svg_util::point(node.position, node.color, node.radius)
            .set("fill-opacity", "0.8")
            .set(
                "stroke",
                format!("{}", svg_util::change_brightness(node.color, 0.5)),
            )
            .set("stroke-width", stroke_width)
            .add(Title::new(format!(
                "{name}, ({:.3}, {:.3})",
                node.position.0, node.position.1
            )))
    };
    let endpoints = Group::new()
        .set("id", "endpoints")
        .add(endpoint(tree.root(), "start"))
        .add(endpoint(tree.goal(), "goal"));

    //mirror the y-axis within the view box
    let scene_group = Group::new()
        .set(
            "transform",
            format!("translate(0 {}) scale(1 -1)", 2.0 * vb_y + vb_h),
        )
        .add(background)
        .add(region)
        .add(obstacles)
        .add(edges)
        .add(nodes)
        .add(endpoints);

    let mut document = Document::new()
        .set("viewBox", (vb_x, vb_y - margin, vb_w, vb_h + margin))
        .add(scene_group);

    if options.label {
        document = document.add(label(solution, tree, vb_x, vb_y, margin));
    }
    document
}

fn label(solution: &RRTSolution, tree: &RRTree, x: f32, y: f32, margin: f32) -> Text {
    let path_info = match &solution.path {
        Some(path) => format!(
            "path: {} edges, length {:.3}",
            path.links.len(),
            path.length(tree)
        ),
        None => "no path found".to_string(),
    };
    let content = format!(
        "nodes: {} | edges: {} | iterations: {} | {}",
        tree.n_nodes(),
        tree.n_edges(),
        solution.n_iterations,
        path_info
    );
    Text::new(content)
        .set("x", x)
        .set("y", y - 0.25 * margin)
        .set("font-size", 0.5 * margin)
        .set("font-family", "monospace")
        .set("font-weight", "500")
}
