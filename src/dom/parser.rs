// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use std::borrow::Cow;
use std::collections::HashMap;
use std::rc::Rc;

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeBuilderOpts, TreeSink};
use html5ever::{parse_document, Attribute, ExpandedName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData as RcNodeData, RcDom};

use super::document::{Document, FormElement};
use super::element::Element;
use crate::error::{Error, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let (dom, owners) = parse_document(FormOwnerSink::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let mut doc = Document::new();
    FormCollector::new(&mut doc, owners).collect(&dom.document);

    Ok(doc)
}

/// `RcDom` sink that also records the parser's form owner for each input
///
/// Tree repair can move an input out of its form while the parser still
/// associates the two, e.g. a `<form>` opened directly inside a `<table>`.
#[derive(Default)]
struct FormOwnerSink {
    dom: RcDom,
    /// (input, form) pairs in insertion order
    owners: Vec<(Handle, Handle)>,
}

impl TreeSink for FormOwnerSink {
    type Handle = Handle;
    type Output = (RcDom, Vec<(Handle, Handle)>);

    fn finish(self) -> Self::Output {
        (self.dom, self.owners)
    }

    fn parse_error(&mut self, msg: Cow<'static, str>) {
        self.dom.parse_error(msg);
    }

    fn get_document(&mut self) -> Handle {
        self.dom.get_document()
    }

    fn elem_name<'a>(&'a self, target: &'a Handle) -> ExpandedName<'a> {
        self.dom.elem_name(target)
    }

    fn create_element(
        &mut self,
        name: QualName,
        attrs: Vec<Attribute>,
        flags: ElementFlags,
    ) -> Handle {
        self.dom.create_element(name, attrs, flags)
    }

    fn create_comment(&mut self, text: StrTendril) -> Handle {
        self.dom.create_comment(text)
    }

    fn create_pi(&mut self, target: StrTendril, data: StrTendril) -> Handle {
        self.dom.create_pi(target, data)
    }

    fn append(&mut self, parent: &Handle, child: NodeOrText<Handle>) {
        self.dom.append(parent, child);
    }

    fn append_based_on_parent_node(
        &mut self,
        element: &Handle,
        prev_element: &Handle,
        child: NodeOrText<Handle>,
    ) {
        self.dom
            .append_based_on_parent_node(element, prev_element, child);
    }

    fn append_doctype_to_document(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        self.dom
            .append_doctype_to_document(name, public_id, system_id);
    }

    fn get_template_contents(&mut self, target: &Handle) -> Handle {
        self.dom.get_template_contents(target)
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        self.dom.same_node(x, y)
    }

    fn set_quirks_mode(&mut self, mode: QuirksMode) {
        self.dom.set_quirks_mode(mode);
    }

    fn append_before_sibling(&mut self, sibling: &Handle, new_node: NodeOrText<Handle>) {
        self.dom.append_before_sibling(sibling, new_node);
    }

    fn add_attrs_if_missing(&mut self, target: &Handle, attrs: Vec<Attribute>) {
        self.dom.add_attrs_if_missing(target, attrs);
    }

    fn associate_with_form(
        &mut self,
        target: &Handle,
        form: &Handle,
        _nodes: (&Handle, Option<&Handle>),
    ) {
        if is_element(target, "input") {
            self.owners.push((target.clone(), form.clone()));
        }
    }

    fn remove_from_parent(&mut self, target: &Handle) {
        self.dom.remove_from_parent(target);
    }

    fn reparent_children(&mut self, node: &Handle, new_parent: &Handle) {
        self.dom.reparent_children(node, new_parent);
    }

    fn is_mathml_annotation_xml_integration_point(&self, handle: &Handle) -> bool {
        self.dom.is_mathml_annotation_xml_integration_point(handle)
    }
}

/// An input found during the walk, waiting to be attached to its form
struct PendingInput {
    node: *const Node,
    element: Element,
    /// Innermost enclosing form in the tree
    ancestor_form: Option<usize>,
}

/// Walks the html5ever tree and records forms with their inputs
struct FormCollector<'a> {
    doc: &'a mut Document,
    /// Input node to the form the parser associated it with
    owners: HashMap<*const Node, *const Node>,
    title_seen: bool,
}

impl<'a> FormCollector<'a> {
    fn new(doc: &'a mut Document, owners: Vec<(Handle, Handle)>) -> Self {
        Self {
            doc,
            owners: owners
                .iter()
                .map(|(input, form)| (Rc::as_ptr(input), Rc::as_ptr(form)))
                .collect(),
            title_seen: false,
        }
    }

    fn collect(mut self, root: &Handle) {
        // Explicit stack keeps deep markup from exhausting the call stack.
        // Each entry carries the open form (index into `forms`) it sits in.
        let mut forms: Vec<FormElement> = Vec::new();
        let mut form_index: HashMap<*const Node, usize> = HashMap::new();
        let mut inputs: Vec<PendingInput> = Vec::new();
        let mut stack: Vec<(Handle, Option<usize>)> = vec![(root.clone(), None)];

        while let Some((handle, form_idx)) = stack.pop() {
            let mut child_form = form_idx;

            if let RcNodeData::Element {
                ref name,
                ref attrs,
                ref template_contents,
                ..
            } = handle.data
            {
                match &*name.local {
                    "form" => {
                        forms.push(FormElement::new(to_element(&attrs.borrow())));
                        child_form = Some(forms.len() - 1);
                        form_index.insert(Rc::as_ptr(&handle), forms.len() - 1);
                    }
                    "input" => inputs.push(PendingInput {
                        node: Rc::as_ptr(&handle),
                        element: to_element(&attrs.borrow()),
                        ancestor_form: form_idx,
                    }),
                    "title" if !self.title_seen => {
                        self.title_seen = true;
                        self.doc.set_title(text_content(&handle));
                    }
                    _ => {}
                }

                if let Some(ref contents) = *template_contents.borrow() {
                    stack.push((contents.clone(), child_form));
                }
            }

            // Reverse so children pop in document order
            for child in handle.children.borrow().iter().rev() {
                stack.push((child.clone(), child_form));
            }
        }

        // Forms are indexed only after the walk: a foster-parented input
        // can sit before the form that owns it.
        for input in inputs {
            let owner = input.ancestor_form.or_else(|| {
                self.owners
                    .get(&input.node)
                    .and_then(|form| form_index.get(form).copied())
            });
            if let Some(idx) = owner {
                forms[idx].inputs.push(input.element);
            }
        }

        for form in forms {
            self.doc.push_form(form);
        }
    }
}

fn is_element(handle: &Handle, local_name: &str) -> bool {
    matches!(handle.data, RcNodeData::Element { ref name, .. } if &*name.local == local_name)
}

fn to_element(attrs: &[Attribute]) -> Element {
    attrs.iter().fold(Element::new(), |el, attr| {
        el.with_attribute(attr.name.local.to_string(), attr.value.to_string())
    })
}

fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    for child in handle.children.borrow().iter() {
        if let RcNodeData::Text { ref contents } = child.data {
            text.push_str(&contents.borrow());
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &Document) -> Vec<&str> {
        doc.inputs().filter_map(|i| i.get_attribute("name")).collect()
    }

    #[test]
    fn test_parse_without_forms() {
        let doc = parse_html("<html><body><p>Hello</p></body></html>").unwrap();
        assert!(doc.forms().is_empty());
        assert_eq!(doc.inputs().count(), 0);
    }

    #[test]
    fn test_title() {
        let doc = parse_html("<html><head><title> Login </title></head></html>").unwrap();
        assert_eq!(doc.title(), "Login");
    }

    #[test]
    fn test_forms() {
        let html = r#"
            <form id="login" action="/login" method="post">
                <input type="text" name="username">
                <input type="password" name="password" required>
                <button type="submit">Login</button>
            </form>
        "#;
        let doc = parse_html(html).unwrap();

        let forms = doc.forms();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].method(), "POST");
        assert_eq!(forms[0].action(), Some("/login"));

        let inputs: Vec<_> = doc.inputs().collect();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].get_attribute("name"), Some("username"));
        assert!(inputs[1].has_attribute("required"));
    }

    #[test]
    fn test_inputs_outside_forms_ignored() {
        let html = r#"
            <input type="text" name="search">
            <form><input type="email" name="email"></form>
            <input type="text" name="footer">
        "#;
        let doc = parse_html(html).unwrap();

        assert_eq!(names(&doc), vec!["email"]);
    }

    #[test]
    fn test_document_order_across_forms() {
        let html = r#"
            <div>
                <form id="a">
                    <fieldset><input name="a1"><input name="a2"></fieldset>
                </form>
            </div>
            <form id="b"><table><tr><td><input name="b1"></td></tr></table></form>
        "#;
        let doc = parse_html(html).unwrap();

        assert_eq!(doc.forms().len(), 2);
        assert_eq!(names(&doc), vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_form_inside_table() {
        // The parser closes the <form> immediately; the input is only
        // tied to it through the form owner.
        let html = r#"<table><form action="/login"><tr><td><input type="password" name="pw" autocomplete="on"></td></tr></form></table>"#;
        let doc = parse_html(html).unwrap();

        assert_eq!(doc.forms().len(), 1);
        assert_eq!(doc.forms()[0].action(), Some("/login"));
        assert_eq!(names(&doc), vec!["pw"]);
    }

    #[test]
    fn test_form_inside_table_keeps_order() {
        let html = r#"
            <table>
                <form>
                    <tr><td><input name="user"></td></tr>
                    <tr><td><input type="hidden" name="csrf"></td></tr>
                    <tr><td><input type="password" name="pw"></td></tr>
                </form>
            </table>
            <input name="outside">
        "#;
        let doc = parse_html(html).unwrap();

        assert_eq!(doc.forms().len(), 1);
        assert_eq!(names(&doc), vec!["user", "csrf", "pw"]);
    }

    #[test]
    fn test_attribute_names_lowercased() {
        let doc = parse_html(r#"<form><INPUT TYPE="Email" Required></form>"#).unwrap();
        let input = doc.inputs().next().unwrap();

        assert_eq!(input.get_attribute("type"), Some("Email"));
        assert!(input.has_attribute("required"));
    }
}
