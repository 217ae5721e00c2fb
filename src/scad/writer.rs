//! Serialization of [`Scad`] trees to OpenSCAD scene text
//!
//! Output is deterministic: stable operator nesting, fixed six-decimal
//! number formatting, two-space indentation. Identical input parameters
//! produce byte-identical output, so generated scenes are diffable
//! between runs.

use super::Scad;
use crate::float_types::Real;
use std::fmt::Write;

/// Render a full scene: header, global tessellation setting, tree.
pub fn scene(root: &Scad, segments: u32) -> String {
    let mut out = String::new();
    out.push_str("// generated by keyforge - do not edit\n");
    let _ = writeln!(out, "$fn = {};", segments);
    out.push('\n');
    write_node(&mut out, root, 0);
    out
}

fn fmt_num(value: Real) -> String {
    // Normalize negative zero so equal geometry serializes identically.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.6}", value)
}

fn fmt_triple(v: &[Real; 3]) -> String {
    format!("[{}, {}, {}]", fmt_num(v[0]), fmt_num(v[1]), fmt_num(v[2]))
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_block(out: &mut String, name: &str, children: &[Scad], depth: usize) {
    indent(out, depth);
    out.push_str(name);
    out.push_str(" {\n");
    for child in children {
        write_node(out, child, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn write_node(out: &mut String, node: &Scad, depth: usize) {
    match node {
        Scad::Cube { size, center } => {
            indent(out, depth);
            let _ = writeln!(out, "cube(size = {}, center = {});", fmt_triple(size), center);
        },
        Scad::Cylinder {
            height,
            bottom_radius,
            top_radius,
            center,
        } => {
            indent(out, depth);
            if bottom_radius == top_radius {
                let _ = writeln!(
                    out,
                    "cylinder(h = {}, r = {}, center = {});",
                    fmt_num(*height),
                    fmt_num(*bottom_radius),
                    center
                );
            } else {
                let _ = writeln!(
                    out,
                    "cylinder(h = {}, r1 = {}, r2 = {}, center = {});",
                    fmt_num(*height),
                    fmt_num(*bottom_radius),
                    fmt_num(*top_radius),
                    center
                );
            }
        },
        Scad::Sphere { radius } => {
            indent(out, depth);
            let _ = writeln!(out, "sphere(r = {});", fmt_num(*radius));
        },
        Scad::Polygon { points } => {
            indent(out, depth);
            out.push_str("polygon(points = [");
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "[{}, {}]", fmt_num(p[0]), fmt_num(p[1]));
            }
            out.push_str("]);\n");
        },
        Scad::LinearExtrude {
            height,
            scale,
            child,
        } => {
            indent(out, depth);
            let _ = writeln!(
                out,
                "linear_extrude(height = {}, scale = {}) {{",
                fmt_num(*height),
                fmt_num(*scale)
            );
            write_node(out, child, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        },
        Scad::Translate { offset, child } => {
            indent(out, depth);
            let _ = writeln!(out, "translate(v = {}) {{", fmt_triple(offset));
            write_node(out, child, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        },
        Scad::Rotate {
            angle_deg,
            axis,
            child,
        } => {
            indent(out, depth);
            let _ = writeln!(
                out,
                "rotate(a = {}, v = {}) {{",
                fmt_num(*angle_deg),
                fmt_triple(axis)
            );
            write_node(out, child, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        },
        Scad::Union { children } => write_block(out, "union()", children, depth),
        Scad::Difference { children } => write_block(out, "difference()", children, depth),
        Scad::Intersection { children } => write_block(out, "intersection()", children, depth),
        Scad::Hull { children } => write_block(out, "hull()", children, depth),
        Scad::Minkowski { children } => write_block(out, "minkowski()", children, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Length;

    #[test]
    fn output_is_stable_between_runs() {
        let solid = Scad::cube(Length::mm(1.0), Length::mm(2.0), Length::mm(3.0), true)
            .minus(Scad::sphere(Length::mm(0.5)));
        assert_eq!(scene(&solid, 64), scene(&solid, 64));
    }

    #[test]
    fn negative_zero_serializes_as_zero() {
        assert_eq!(fmt_num(-0.0), "0.000000");
    }

    #[test]
    fn difference_lists_minuend_first() {
        let solid = Scad::sphere(Length::mm(2.0)).minus(Scad::sphere(Length::mm(1.0)));
        let text = scene(&solid, 32);
        let minuend = text.find("r = 2.000000").unwrap();
        let subtrahend = text.find("r = 1.000000").unwrap();
        assert!(text.contains("difference() {"));
        assert!(minuend < subtrahend);
    }
}
