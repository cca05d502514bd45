//! Named constructors for the element types the renderer understands.
//!
//! Each family is a plain `(function name => type string)` table. The
//! `tag_catalog!` macro turns a table into one constructor per entry plus a
//! `CATALOG` slice, so adding a tag is a one-line change here.

use crate::node::{Node, element};
use crate::value::Props;

macro_rules! tag_catalog {
    ($(#[$meta:meta])* $family:ident { $($func:ident => $ty:literal),* $(,)? }) => {
        $(#[$meta])*
        pub mod $family {
            use crate::node::{Node, element};
            use crate::value::Props;

            /// `(function name, type string)` for every constructor in this module.
            pub const CATALOG: &[(&str, &str)] = &[$((stringify!($func), $ty)),*];

            $(
                #[doc = concat!("Builds a `", $ty, "` node.")]
                pub fn $func(children: Vec<Node>, props: Props) -> Node {
                    element($ty, children, props)
                }
            )*
        }
    };
}

tag_catalog! {
    /// Generic HTML-like container and element tags.
    html {
        div => "div",
        span => "span",
        p => "p",
        h1 => "h1",
        h2 => "h2",
        h3 => "h3",
        h4 => "h4",
        h5 => "h5",
        h6 => "h6",
        ul => "ul",
        ol => "ol",
        li => "li",
        table => "table",
        thead => "thead",
        tfoot => "tfoot",
        tbody => "tbody",
        tr => "tr",
        td => "td",
        th => "th",
        img => "img",
        a => "a",
        button => "button",
        input => "input",
        label => "label",
        form => "form",
        select => "select",
        option => "option",
        section => "section",
        article => "article",
        header => "header",
        footer => "footer",
        main => "main",
        nav => "nav",
        svg => "svg",
        path => "path",
        rect => "rect",
        circle => "circle",
        line => "line",
        g => "g",
    }
}

tag_catalog! {
    /// Charting components, namespaced under `Recharts.`.
    recharts {
        responsive_container => "Recharts.ResponsiveContainer",
        line_chart => "Recharts.LineChart",
        bar_chart => "Recharts.BarChart",
        pie_chart => "Recharts.PieChart",
        area_chart => "Recharts.AreaChart",
        x_axis => "Recharts.XAxis",
        y_axis => "Recharts.YAxis",
        z_axis => "Recharts.ZAxis",
        tooltip => "Recharts.Tooltip",
        legend => "Recharts.Legend",
        line => "Recharts.Line",
        bar => "Recharts.Bar",
        pie => "Recharts.Pie",
        area => "Recharts.Area",
        cell => "Recharts.Cell",
        cartesian_grid => "Recharts.CartesianGrid",
        brush => "Recharts.Brush",
        reference_line => "Recharts.ReferenceLine",
        reference_dot => "Recharts.ReferenceDot",
        composed_chart => "Recharts.ComposedChart",
        scatter_chart => "Recharts.ScatterChart",
        scatter => "Recharts.Scatter",
        radar_chart => "Recharts.RadarChart",
        radar => "Recharts.Radar",
        polar_grid => "Recharts.PolarGrid",
        polar_angle_axis => "Recharts.PolarAngleAxis",
        polar_radius_axis => "Recharts.PolarRadiusAxis",
    }
}

tag_catalog! {
    /// Renderer-side components used by reports.
    components {
        table => "Table",
        column => "Column",
        space => "Space",
        button => "Button",
    }
}

/// Families searched by [`lookup`], in priority order.
const FAMILIES: [&[(&str, &str)]; 3] = [html::CATALOG, recharts::CATALOG, components::CATALOG];

/// Resolves a constructor name or a type string to its canonical type string.
///
/// Families are searched in the order html, recharts, components, so the bare
/// name `table` resolves to the HTML tag while the type string `Table` resolves
/// to the component.
pub fn lookup(name: &str) -> Option<&'static str> {
    FAMILIES
        .iter()
        .flat_map(|family| family.iter())
        .find(|(func, ty)| *ty == name || *func == name)
        .map(|(_, ty)| *ty)
}

/// Builds a node for a catalog entry, or `None` if `name` isn't catalogued.
pub fn by_name(name: &str, children: Vec<Node>, props: Props) -> Option<Node> {
    lookup(name).map(|ty| element(ty, children, props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{none, text};
    use rstest::rstest;

    #[rstest]
    #[case("div", "div")]
    #[case("line_chart", "Recharts.LineChart")]
    #[case("Recharts.PolarRadiusAxis", "Recharts.PolarRadiusAxis")]
    #[case("Table", "Table")]
    #[case("table", "table")]
    #[case("column", "Column")]
    fn test_lookup(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(lookup(name), Some(expected));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("marquee"), None);
        assert!(by_name("marquee", none(), Props::new()).is_none());
    }

    #[test]
    fn test_named_constructors_use_catalog_type() {
        assert_eq!(html::h1(vec![text("x")], Props::new()).kind, "h1");
        assert_eq!(recharts::x_axis(none(), Props::new()).kind, "Recharts.XAxis");
        assert_eq!(components::table(none(), Props::new()).kind, "Table");
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(html::CATALOG.len(), 39);
        assert_eq!(recharts::CATALOG.len(), 27);
        assert!(recharts::CATALOG.iter().all(|(_, ty)| ty.starts_with("Recharts.")));
    }

    #[test]
    fn test_catalog_type_strings_are_unique_within_family() {
        for family in FAMILIES {
            let mut types: Vec<_> = family.iter().map(|(_, ty)| *ty).collect();
            types.sort_unstable();
            types.dedup();
            assert_eq!(types.len(), family.len());
        }
    }
}
