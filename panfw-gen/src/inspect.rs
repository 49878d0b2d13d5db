use xml_build_core::Element;

/// Render an XML tree with a configurable max depth.
///
/// Entry elements show their `name` attribute so rule and address entries
/// stay distinguishable.
pub fn render_tree(node: &Element, max_depth: usize) -> String {
    let mut out = String::new();
    render_node(node, 0, max_depth, &mut out);
    out
}

fn render_node(node: &Element, depth: usize, max_depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node.get_attr("name") {
        Some(name) => out.push_str(&format!("{}{} name={}\n", indent, node.tag, name)),
        None => out.push_str(&format!("{}{}\n", indent, node.tag)),
    }

    if depth >= max_depth {
        return;
    }

    for child in &node.children {
        render_node(child, depth + 1, max_depth, out);
    }
}
