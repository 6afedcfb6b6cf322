use navcollapse::logging::init_file_logger;
use navcollapse::NavbarCollapser;
use navdom::{Document, Event};
use simplelog::LevelFilter;

const SIDEBAR: &str = r#"<ul class="current">
<li class="toctree-l1"><a href="index.html">Home</a></li>
<li class="toctree-l1"><a href="guide/">User Guide</a></li>
<li class="toctree-l1"><span class="caption-text">User Guide</span>
<ul class="subnav">
<li class="toctree-l2"><a href="guide/install/">Installation</a></li>
<li class="toctree-l2"><a href="guide/config/">Configuration</a></li>
</ul>
</li>
<li class="toctree-l1 current"><a href="api/">API</a></li>
<li class="toctree-l1 current"><span class="caption-text">API</span>
<ul class="subnav">
<li class="toctree-l2 current"><a class="current" href="api/client/">Client</a></li>
</ul>
</li>
</ul>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_file_logger("sidebar.log", LevelFilter::Trace)?;

    let mut doc = Document::new();
    doc.append_markup(doc.root(), SIDEBAR)?;
    println!("before:\n{}\n", doc.inner_html(doc.root()));

    let collapser = NavbarCollapser::default();
    let report = collapser.initialize(&mut doc)?;
    println!("after initialize:\n{}\n", doc.inner_html(doc.root()));

    for toggle in &report.toggles {
        let click = collapser.on_toggle_click(&mut doc, &Event::click(toggle.node));
        println!(
            "clicked {}: {:?} -> {:?}",
            doc.text_content(toggle.link),
            toggle.state,
            click.state
        );
    }
    println!("\nafter clicks:\n{}", doc.inner_html(doc.root()));
    Ok(())
}
