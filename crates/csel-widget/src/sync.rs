//! Tree synchronizer
//!
//! Builds rendered nodes from native nodes and keeps both trees consistent
//! across insert, remove, and clear operations. Every operation validates
//! all of its inputs before touching either tree, so a failure leaves no
//! partial mutation behind. The rendered tree is only built from scratch at
//! attach time; everything after that is incremental, because focus and
//! selection state live on the rendered nodes.

use csel_dom::{Document, NodeId};
use tracing::trace;

use crate::links::MirrorLinks;
use crate::{Config, WidgetError, WidgetResult};

/// Walk the select's children and produce the isomorphic rendered tree under
/// the panel. Returns the rendered counterpart of the option the control
/// reports as selected (first flagged, else first option).
pub(crate) fn build(
    doc: &mut Document,
    links: &mut MirrorLinks,
    config: &Config,
    select: NodeId,
    panel: NodeId,
) -> WidgetResult<Option<NodeId>> {
    let entries: Vec<_> = doc.children(select).collect();
    for &entry in &entries {
        validate_subtree(doc, links, entry)?;
    }
    for entry in entries {
        let rendered = render_subtree(doc, links, config, entry)?;
        doc.append_child(panel, rendered)?;
    }
    trace!(mirrored = links.len(), "built rendered tree");
    Ok(doc
        .effective_selected_option(select)
        .and_then(|native| links.rendered(native)))
}

/// Validate that the select's children can be mirrored, without mutating.
pub(crate) fn validate_control(doc: &Document, select: NodeId) -> WidgetResult<()> {
    let links = MirrorLinks::new();
    for entry in doc.children(select) {
        validate_subtree(doc, &links, entry)?;
    }
    Ok(())
}

/// Append freshly constructed native nodes and their mirrors under the panel
/// root or a mirrored group, mutating the native tree too. Returns the now
/// attached native nodes.
pub(crate) fn append(
    doc: &mut Document,
    links: &mut MirrorLinks,
    config: &Config,
    select: NodeId,
    panel: NodeId,
    nodes: &[NodeId],
    target: Option<NodeId>,
) -> WidgetResult<Vec<NodeId>> {
    let (native_parent, rendered_parent) = match target {
        None => (select, panel),
        Some(group) if group == select => (select, panel),
        Some(group) => {
            if !doc.is_optgroup(group) {
                return Err(WidgetError::InvalidArgument(
                    "append target is not an option group",
                ));
            }
            let mirror = links.rendered(group).ok_or(WidgetError::InvalidArgument(
                "append target group is not attached to the control",
            ))?;
            (group, mirror)
        }
    };
    for (i, &node) in nodes.iter().enumerate() {
        if nodes[..i].contains(&node) {
            return Err(WidgetError::InvalidArgument(
                "duplicate node in insertion list",
            ));
        }
        validate_fresh(doc, links, node)?;
    }
    for &node in nodes {
        let rendered = render_subtree(doc, links, config, node)?;
        doc.append_child(rendered_parent, rendered)?;
        doc.append_child(native_parent, node)?;
    }
    trace!(count = nodes.len(), "appended nodes");
    Ok(nodes.to_vec())
}

/// Insert a freshly constructed native node (and its mirror) immediately
/// before an attached reference node, in both trees.
pub(crate) fn insert_before(
    doc: &mut Document,
    links: &mut MirrorLinks,
    config: &Config,
    node: NodeId,
    reference: NodeId,
) -> WidgetResult<NodeId> {
    let anchor = links.rendered(reference).ok_or(WidgetError::InvalidArgument(
        "reference node is not attached to the control",
    ))?;
    validate_fresh(doc, links, node)?;

    let rendered = render_subtree(doc, links, config, node)?;
    let rendered_parent = doc
        .parent(anchor)
        .ok_or(WidgetError::InvalidArgument("reference mirror is detached"))?;
    doc.insert_before(rendered_parent, rendered, anchor)?;

    let native_parent = doc.parent(reference).ok_or(WidgetError::InvalidArgument(
        "reference node is not attached to the control",
    ))?;
    doc.insert_before(native_parent, node, reference)?;
    Ok(node)
}

/// Remove an attached native node and its mirror from both trees, unlinking
/// the whole subtree. Returns the (now detached) native node.
pub(crate) fn remove(
    doc: &mut Document,
    links: &mut MirrorLinks,
    node: NodeId,
) -> WidgetResult<NodeId> {
    let rendered = links.rendered(node).ok_or(WidgetError::InvalidArgument(
        "node is not attached to the control",
    ))?;
    let rendered_parent = doc
        .parent(rendered)
        .ok_or(WidgetError::InvalidArgument("mirror is detached"))?;
    let native_parent = doc.parent(node).ok_or(WidgetError::InvalidArgument(
        "node is not attached to the control",
    ))?;

    doc.remove_child(rendered_parent, rendered)?;
    doc.remove_child(native_parent, node)?;
    unlink_subtree(doc, links, node);
    Ok(node)
}

/// Remove every native child of the select and its mirror as one batch,
/// returning the removed native nodes in original order.
pub(crate) fn empty(
    doc: &mut Document,
    links: &mut MirrorLinks,
    select: NodeId,
) -> WidgetResult<Vec<NodeId>> {
    let entries: Vec<_> = doc.children(select).collect();
    let mut removed = Vec::with_capacity(entries.len());
    for node in entries {
        if let Some(rendered) = links.rendered(node) {
            if let Some(rendered_parent) = doc.parent(rendered) {
                doc.remove_child(rendered_parent, rendered)?;
            }
        }
        doc.remove_child(select, node)?;
        unlink_subtree(doc, links, node);
        removed.push(node);
    }
    trace!(count = removed.len(), "emptied control");
    Ok(removed)
}

/// Drop the link table and put the select back where the container stands,
/// discarding the rendered tree.
pub(crate) fn restore_native(
    doc: &mut Document,
    links: &mut MirrorLinks,
    select: NodeId,
    container: NodeId,
) -> WidgetResult<()> {
    links.clear();
    let host_parent = doc
        .parent(container)
        .ok_or(WidgetError::InvalidArgument("container is detached"))?;
    doc.replace_child(host_parent, select, container)?;
    Ok(())
}

/// A mirrorable subtree: options, or groups of mirrorable subtrees, none of
/// them mirrored yet.
fn validate_subtree(doc: &Document, links: &MirrorLinks, node: NodeId) -> WidgetResult<()> {
    let Some(n) = doc.get(node) else {
        return Err(WidgetError::InvalidArgument("unknown node"));
    };
    if links.rendered(node).is_some() {
        return Err(WidgetError::InvalidArgument("node is already mirrored"));
    }
    if n.is_option() {
        Ok(())
    } else if n.is_optgroup() {
        for child in doc.children(node) {
            validate_subtree(doc, links, child)?;
        }
        Ok(())
    } else {
        Err(WidgetError::InvalidArgument(
            "node is not an option or option group",
        ))
    }
}

/// Insertion input contract: a valid subtree whose root is not attached
/// anywhere yet.
fn validate_fresh(doc: &Document, links: &MirrorLinks, node: NodeId) -> WidgetResult<()> {
    if doc.parent(node).is_some() {
        return Err(WidgetError::InvalidArgument(
            "node is already attached to a parent",
        ));
    }
    validate_subtree(doc, links, node)
}

/// Create the rendered counterpart of a validated native subtree and install
/// the links as each node is created.
fn render_subtree(
    doc: &mut Document,
    links: &mut MirrorLinks,
    config: &Config,
    node: NodeId,
) -> WidgetResult<NodeId> {
    enum Kind {
        Option { value: String, text: String },
        Group { label: String },
    }
    let kind = {
        let n = doc
            .get(node)
            .ok_or(WidgetError::InvalidArgument("unknown node"))?;
        if let Some(option) = n.as_option() {
            Kind::Option {
                value: option.value.clone(),
                text: option.text.clone(),
            }
        } else if let Some(group) = n.as_optgroup() {
            Kind::Group {
                label: group.label.clone(),
            }
        } else {
            return Err(WidgetError::InvalidArgument(
                "node is not an option or option group",
            ));
        }
    };

    match kind {
        Kind::Option { value, text } => {
            let rendered = doc.create_element("div");
            if let Some(el) = doc.get_mut(rendered).and_then(|n| n.as_element_mut()) {
                el.classes.add(&config.option_class);
                el.dataset.set("value", value);
            }
            doc.set_text_content(rendered, &text)?;
            links.link(node, rendered);
            Ok(rendered)
        }
        Kind::Group { label } => {
            let rendered = doc.create_element("div");
            if let Some(el) = doc.get_mut(rendered).and_then(|n| n.as_element_mut()) {
                el.classes.add(&config.optgroup_class);
                el.dataset.set("label", label);
            }
            links.link(node, rendered);
            let children: Vec<_> = doc.children(node).collect();
            for child in children {
                let child_rendered = render_subtree(doc, links, config, child)?;
                doc.append_child(rendered, child_rendered)?;
            }
            Ok(rendered)
        }
    }
}

/// Remove the links of a native subtree (the node and, for groups, every
/// descendant).
fn unlink_subtree(doc: &Document, links: &mut MirrorLinks, node: NodeId) {
    links.unlink_native(node);
    let children: Vec<_> = doc.children(node).collect();
    for child in children {
        unlink_subtree(doc, links, child);
    }
}
