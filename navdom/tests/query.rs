use navdom::{Document, DomError, ElementData, Selector};

fn sidebar() -> (Document, navdom::NodeId) {
    let mut doc = Document::new();
    let nodes = doc
        .append_markup(
            doc.root(),
            r#"<ul id="nav">
  <li class="toctree-l1 current"><span>Guide</span>
    <ul class="subnav">
      <li class="toctree-l2 current"><a href="a.html">A</a></li>
      <li class="toctree-l2"><a href="b.html">B</a></li>
    </ul>
  </li>
</ul>"#,
        )
        .unwrap();
    (doc, nodes[0])
}

// ============================================================================
// Selector parsing
// ============================================================================

#[test]
fn test_parse_compound_selectors() {
    let selector = Selector::parse("ul.subnav:not(li.toctree-l2)").unwrap();
    assert_eq!(selector.to_string(), "ul.subnav:not(li.toctree-l2)");
    assert_eq!(
        Selector::parse("li.toctree-l1").unwrap(),
        Selector::tag("li").class("toctree-l1")
    );
    assert_eq!(Selector::parse("*").unwrap(), Selector::any());
    assert_eq!(Selector::any().to_string(), "*");
}

#[test]
fn test_parse_rejects_malformed_selectors() {
    assert!(matches!(Selector::parse(""), Err(DomError::Selector { .. })));
    assert!(matches!(Selector::parse("ul."), Err(DomError::Selector { .. })));
    assert!(matches!(
        Selector::parse("ul:not(.a"),
        Err(DomError::Selector { .. })
    ));
    assert!(matches!(
        Selector::parse("ul > li"),
        Err(DomError::Selector { .. })
    ));
}

#[test]
fn test_exclusion_applies_to_same_element() {
    let selector: Selector = ".subnav:not(.toctree-l2)".parse().unwrap();

    let mut ul = ElementData::new("ul");
    ul.set_attr("class", "subnav");
    assert!(selector.matches(&ul));

    let mut marked = ElementData::new("ul");
    marked.set_attr("class", "subnav toctree-l2");
    assert!(!selector.matches(&marked));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_first_and_all() {
    let (doc, nav) = sidebar();

    let span = doc.find_first(nav, &Selector::tag("span")).unwrap();
    assert_eq!(doc.text_content(span), "Guide");

    let items = doc.find_all(nav, &Selector::tag("li").class("toctree-l2"));
    assert_eq!(items.len(), 2);

    let current = doc.select_all(&Selector::any().class("current"));
    assert_eq!(current.len(), 2);

    assert_eq!(doc.find_first(nav, &Selector::tag("table")), None);
}

#[test]
fn test_closest_is_inclusive() {
    let (doc, nav) = sidebar();
    let link = doc.find_first(nav, &Selector::tag("a")).unwrap();
    let top = doc.find_first(nav, &Selector::parse("li.toctree-l1").unwrap());

    assert_eq!(doc.closest(link, &Selector::parse("li.toctree-l1").unwrap()), top);
    assert_eq!(doc.closest(link, &Selector::tag("a")), Some(link));
    assert_eq!(doc.closest(link, &Selector::tag("table")), None);
}
