use navdom::{Document, DomError, NodeKind};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_fragment_single_element() {
    let mut doc = Document::new();
    let a = doc
        .parse_fragment(r#"  <a class="fa fa-caret-left" href='#' data-x=1>x</a>  "#)
        .unwrap();

    let el = doc.element(a).unwrap();
    assert_eq!(el.tag, "a");
    assert!(el.classes.contains("fa-caret-left"));
    assert_eq!(el.attr("href"), Some("#"));
    assert_eq!(el.attr("data-x"), Some("1"));
    assert!(!doc.is_attached(a));
}

#[test]
fn test_parse_fragment_requires_one_element() {
    let mut doc = Document::new();
    assert!(matches!(
        doc.parse_fragment("<a></a><b></b>"),
        Err(DomError::Markup { .. })
    ));
    assert!(matches!(doc.parse_fragment("text"), Err(DomError::Markup { .. })));
}

#[test]
fn test_parse_reports_unclosed_and_mismatched_tags() {
    let mut doc = Document::new();
    assert!(matches!(
        doc.parse_nodes("<ul><li>x</ul>"),
        Err(DomError::Markup { .. })
    ));
    assert!(matches!(
        doc.parse_nodes("<ul><li>x</li>"),
        Err(DomError::Markup { pos: 0, .. })
    ));
    assert!(matches!(doc.parse_nodes("</ul>"), Err(DomError::Markup { .. })));
}

#[test]
fn test_parse_skips_comments_and_doctype() {
    let mut doc = Document::new();
    let nodes = doc
        .parse_nodes("<!DOCTYPE html><!-- nav --><nav><br><img src=x.png/></nav>")
        .unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(doc.element_children(nodes[0]).len(), 2);
}

#[test]
fn test_text_entities_are_decoded() {
    let mut doc = Document::new();
    let span = doc.parse_fragment("<span>Q&amp;A &lt;faq&gt;</span>").unwrap();
    assert_eq!(doc.text_content(span), "Q&A <faq>");
    assert!(matches!(
        doc.kind(doc.children(span)[0]),
        Some(NodeKind::Text(_))
    ));
}

#[test]
fn test_bare_less_than_is_text() {
    let mut doc = Document::new();
    let a = doc.parse_fragment("<a>a < b</a>").unwrap();
    assert_eq!(doc.text_content(a), "a < b");

    let p = doc.parse_fragment("<p>1 <2 and <</p>").unwrap();
    assert_eq!(doc.text_content(p), "1 <2 and <");
    assert_eq!(doc.outer_html(p), "<p>1 &lt;2 and &lt;</p>");

    let nodes = doc.parse_nodes("< x <b>y</b>").unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(doc.text_content(nodes[0]), "< x ");
    assert_eq!(doc.tag(nodes[1]), Some("b"));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_round_trip_preserves_markup() {
    let markup = r#"<li class="toctree-l1 current"><a class="reference" href="guide.html">Guide &amp; more</a><ul class="subnav" style="display: none;"><li class="toctree-l2"><a href="x.html">X</a></li></ul></li>"#;
    let mut doc = Document::new();
    let li = doc.parse_fragment(markup).unwrap();
    assert_eq!(doc.outer_html(li), markup);
}

#[test]
fn test_class_first_style_last() {
    let mut doc = Document::new();
    let a = doc
        .parse_fragment(r##"<a style="right: 0;" href="#" class="fa"></a>"##)
        .unwrap();
    assert_eq!(
        doc.outer_html(a),
        r##"<a class="fa" href="#" style="right: 0;"></a>"##
    );
}

#[test]
fn test_inner_html_of_root() {
    let mut doc = Document::new();
    doc.append_markup(doc.root(), "<p>a</p><hr><p>b</p>").unwrap();
    assert_eq!(doc.inner_html(doc.root()), "<p>a</p><hr><p>b</p>");
    assert_eq!(doc.outer_html(doc.root()), "<p>a</p><hr><p>b</p>");
}
