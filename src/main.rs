use log::debug;
use product_records::{fixture, load_config, parse_document, report, RecordExtractor};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config()?;
    debug!("{:#?}", config);

    // Optional path to an HTML file; the bundled product page otherwise
    let html = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)?,
        None => fixture::PRODUCT_PAGE.to_string(),
    };

    let extractor = RecordExtractor::from_layout(&config.layout)?;
    let records = extractor.extract_document(&parse_document(&html));

    print!("{}", report::render(&html, &records, &config.report)?);

    Ok(())
}
