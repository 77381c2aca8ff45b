use crumbtk::prelude::*;

fn main() -> anyhow::Result<()> {
    let settings = smol::block_on(SettingsRegistry::new()).unwrap_or_else(|e| {
        eprintln!("Falling back to default settings: {}", e);
        SettingsRegistry::empty()
    });

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(filter) = settings.log_filter() {
        logger.parse_filters(filter);
    }
    logger.init();

    let config = settings.breadcrumb_config();
    log::info!("Using breadcrumb config {:?}", config);

    let mut breadcrumb = Breadcrumb::attach(ElementList::new(), config).with_on_change(|event| {
        println!("change ({:?}): {:?} context={:?}", event.kind, event.path, event.context);
    });

    breadcrumb.push("Home");
    breadcrumb.push(Segment::new("Documents").try_with_context(&["/home", "user", "Documents"])?);
    breadcrumb.push(Segment::new("Projects").with_context(json!({"id": 3})));
    breadcrumb.push("crumbtk");
    println!("{}", breadcrumb);
    println!("{}", breadcrumb.container().to_markup());

    // Clicking "Documents" cuts the path back to it.
    breadcrumb.click(1);
    println!("{}", breadcrumb);

    breadcrumb.pop_one();
    breadcrumb.reset();
    println!("{}", breadcrumb.container().to_markup());

    Ok(())
}
