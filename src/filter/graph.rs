use crate::foundation::core::InstanceToken;

/// Namespaced ids of one instance's filter and its bindable primitives.
///
/// Every id is derived from the instance token, so two mounted effects never write
/// into each other's primitives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilterIds {
    /// `<filter id>` referenced by `backdrop-filter: url(#...)`.
    pub filter: String,
    /// `feImage` that samples the displacement map.
    pub image: String,
    /// Red-pass `feDisplacementMap`.
    pub red: String,
    /// Green-pass `feDisplacementMap`.
    pub green: String,
    /// Blue-pass `feDisplacementMap`.
    pub blue: String,
    /// Final `feGaussianBlur`.
    pub blur: String,
}

impl FilterIds {
    /// Derive all ids from `token`.
    pub fn new(token: &InstanceToken) -> Self {
        let t = token.as_str();
        Self {
            filter: t.to_string(),
            image: format!("{t}-map"),
            red: format!("{t}-red"),
            green: format!("{t}-green"),
            blue: format!("{t}-blue"),
            blur: format!("{t}-blur"),
        }
    }

    /// CSS reference to the filter.
    pub fn filter_url(&self) -> String {
        format!("url(#{})", self.filter)
    }

    /// Displacement nodes in red, green, blue order.
    pub fn channel_nodes(&self) -> [&str; 3] {
        [&self.red, &self.green, &self.blue]
    }

    /// Every node the binder writes to, in write order.
    pub fn bindable(&self) -> [&str; 5] {
        [&self.image, &self.red, &self.green, &self.blue, &self.blur]
    }
}

/// Imperative access to a live filter-primitive graph.
///
/// Implementations mutate attributes in place and never remount the filter; a remount
/// would flash and drop the compositor's cached filter state.
pub trait FilterTarget {
    /// Whether the node `id` exists and can be written.
    fn is_attached(&self, id: &str) -> bool;

    /// Write `attrs` onto node `id`. Returns `false` (and writes nothing) when absent.
    fn apply_attributes(&mut self, id: &str, attrs: &[(&str, String)]) -> bool;
}

/// One attribute write recorded by [`FilterGraph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeWrite {
    /// Target node id.
    pub node: String,
    /// Attribute name.
    pub name: String,
    /// New value.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
struct FilterNode {
    element: &'static str,
    attrs: Vec<(String, String)>,
}

impl FilterNode {
    fn new(element: &'static str, attrs: &[(&str, &str)]) -> Self {
        Self {
            element,
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    fn id(&self) -> Option<&str> {
        self.get("id")
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }
}

const RED_MATRIX: &str = "1 0 0 0 0  0 0 0 0 0  0 0 0 0 0  0 0 0 1 0";
const GREEN_MATRIX: &str = "0 0 0 0 0  0 1 0 0 0  0 0 0 0 0  0 0 0 1 0";
const BLUE_MATRIX: &str = "0 0 0 0 0  0 0 0 0 0  0 0 1 0 0  0 0 0 1 0";

/// In-memory retained filter graph for one instance.
///
/// Holds the chromatic displacement scaffold
/// `feImage -> 3x (feDisplacementMap -> feColorMatrix) -> 2x feBlend(screen) -> feGaussianBlur`
/// and records every write in a journal. A detached graph behaves like filter nodes that
/// are not in the render tree yet.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterGraph {
    ids: FilterIds,
    nodes: Vec<FilterNode>,
    attached: bool,
    journal: Vec<AttributeWrite>,
}

impl FilterGraph {
    /// Attached scaffold for `ids`.
    pub fn new(ids: FilterIds) -> Self {
        let nodes = vec![
            FilterNode::new(
                "feImage",
                &[
                    ("id", &ids.image),
                    ("x", "0"),
                    ("y", "0"),
                    ("width", "100%"),
                    ("height", "100%"),
                    ("result", "map"),
                ],
            ),
            displacement_node(&ids.red, "dispRed"),
            FilterNode::new(
                "feColorMatrix",
                &[
                    ("in", "dispRed"),
                    ("type", "matrix"),
                    ("values", RED_MATRIX),
                    ("result", "red"),
                ],
            ),
            displacement_node(&ids.green, "dispGreen"),
            FilterNode::new(
                "feColorMatrix",
                &[
                    ("in", "dispGreen"),
                    ("type", "matrix"),
                    ("values", GREEN_MATRIX),
                    ("result", "green"),
                ],
            ),
            displacement_node(&ids.blue, "dispBlue"),
            FilterNode::new(
                "feColorMatrix",
                &[
                    ("in", "dispBlue"),
                    ("type", "matrix"),
                    ("values", BLUE_MATRIX),
                    ("result", "blue"),
                ],
            ),
            FilterNode::new(
                "feBlend",
                &[("in", "red"), ("in2", "green"), ("mode", "screen"), ("result", "rg")],
            ),
            FilterNode::new(
                "feBlend",
                &[("in", "rg"), ("in2", "blue"), ("mode", "screen"), ("result", "output")],
            ),
            FilterNode::new(
                "feGaussianBlur",
                &[("id", &ids.blur), ("in", "output"), ("stdDeviation", "0.7")],
            ),
        ];

        Self {
            ids,
            nodes,
            attached: true,
            journal: Vec::new(),
        }
    }

    /// Scaffold whose nodes are not in the render tree yet.
    pub fn detached(ids: FilterIds) -> Self {
        Self {
            attached: false,
            ..Self::new(ids)
        }
    }

    /// Mount the nodes.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Unmount the nodes; attribute values are kept.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Whether the nodes are mounted.
    pub fn is_mounted(&self) -> bool {
        self.attached
    }

    /// Ids this graph was built for.
    pub fn ids(&self) -> &FilterIds {
        &self.ids
    }

    /// Current value of `name` on node `id`.
    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.get(name))
    }

    /// Writes applied so far, oldest first.
    pub fn journal(&self) -> &[AttributeWrite] {
        &self.journal
    }

    /// Forget recorded writes.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// Serialize the graph as a zero-size `<svg>` holding the `<filter>`.
    pub fn to_svg_markup(&self) -> String {
        let mut s = String::with_capacity(2048);
        s.push_str(concat!(
            r#"<svg class="liquid-filter" xmlns="http://www.w3.org/2000/svg" "#,
            r#"xmlns:xlink="http://www.w3.org/1999/xlink" "#,
            r#"style="position:absolute;inset:0;width:0;height:0"><defs>"#,
        ));
        s.push_str(&format!(
            r#"<filter id="{}" color-interpolation-filters="sRGB">"#,
            escape_attr(&self.ids.filter)
        ));
        for node in &self.nodes {
            s.push('<');
            s.push_str(node.element);
            for (k, v) in &node.attrs {
                s.push_str(&format!(r#" {k}="{}""#, escape_attr(v)));
            }
            s.push_str("/>");
        }
        s.push_str("</filter></defs></svg>");
        s
    }

    fn node(&self, id: &str) -> Option<&FilterNode> {
        self.nodes.iter().find(|n| n.id() == Some(id))
    }
}

impl FilterTarget for FilterGraph {
    fn is_attached(&self, id: &str) -> bool {
        self.attached && self.node(id).is_some()
    }

    fn apply_attributes(&mut self, id: &str, attrs: &[(&str, String)]) -> bool {
        if !self.attached {
            return false;
        }
        let Some(node) = self.nodes.iter_mut().find(|n| n.id() == Some(id)) else {
            return false;
        };
        for (name, value) in attrs {
            node.set(name, value);
            self.journal.push(AttributeWrite {
                node: id.to_string(),
                name: (*name).to_string(),
                value: value.clone(),
            });
        }
        true
    }
}

fn displacement_node(id: &str, result: &str) -> FilterNode {
    FilterNode::new(
        "feDisplacementMap",
        &[
            ("id", id),
            ("in", "SourceGraphic"),
            ("in2", "map"),
            ("xChannelSelector", "R"),
            ("yChannelSelector", "G"),
            ("result", result),
        ],
    )
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/filter/graph.rs"]
mod tests;
