use crate::config::ReportConfig;
use crate::error::ExtractError;
use crate::model::Record;
use crate::table::Table;

/// Summary of one extraction run, as printed by the binary.
pub fn render(html: &str, records: &[Record], config: &ReportConfig) -> Result<String, ExtractError> {
    let mut out = String::new();

    let preview: String = html.chars().take(config.preview_chars).collect();
    section(&mut out, "Simulated HTML Content");
    out.push_str(&preview);
    out.push_str("...\n");

    section(&mut out, "Extracting Data");
    for record in records {
        out.push_str(&format!("Extracted: {}\n", serde_json::to_string(record)?));
    }

    let mut table = Table::from_records(records);
    section(&mut out, "Custom Dataset");
    out.push_str(&format!("{table}\n"));

    section(&mut out, "Data Types");
    out.push_str(&format!("{} entries\n", table.len()));
    for info in table.info() {
        out.push_str(&format!(
            "{:<16} {} non-null  {}\n",
            info.name, info.non_null, info.dtype
        ));
    }

    section(
        &mut out,
        &format!("Products with Price > ${}", config.price_threshold),
    );
    // A layout without the configured columns just skips these sections
    if table.coerce_numeric(&config.price_column).is_ok() {
        if let Ok(expensive) =
            table.filter_greater_than(&config.price_column, config.price_threshold)
        {
            out.push_str(&format!("{expensive}\n"));
        }
    }

    section(&mut out, "Average Rating of Rated Products");
    match table.mean(&config.rating_column) {
        Ok(Some(mean)) => out.push_str(&format!("Average Rating: {mean:.2}\n")),
        _ => out.push_str("No numeric ratings available to calculate average.\n"),
    }

    Ok(out)
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n--- {title} ---\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{parse_document, RecordExtractor};
    use crate::fixture::PRODUCT_PAGE;

    fn fixture_report() -> String {
        let records = RecordExtractor::products().extract_document(&parse_document(PRODUCT_PAGE));
        render(PRODUCT_PAGE, &records, &ReportConfig::default()).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let report = fixture_report();

        assert!(report.contains("--- Simulated HTML Content ---"));
        assert_eq!(report.matches("Extracted: ").count(), 4);
        assert!(report.contains(
            r#"Extracted: {"name":"USB-C Hub Elite","price":49.99,"rating":"Not Rated","availability":"Out of Stock"}"#
        ));
        assert!(report.contains("Average Rating: 4.43"));
    }

    #[test]
    fn test_report_lists_only_expensive_products() {
        let report = fixture_report();
        let (_, expensive) = report.split_once("Products with Price > $100").unwrap();
        let (expensive, _) = expensive.split_once("--- Average").unwrap();

        assert!(expensive.contains("Laptop Pro X"));
        assert!(!expensive.contains("Wireless Mouse Z"));
    }

    #[test]
    fn test_report_without_ratings() {
        let report = render("<html></html>", &[], &ReportConfig::default()).unwrap();
        assert!(report.contains("No numeric ratings available to calculate average."));
        assert!(report.contains("0 entries"));
    }
}
