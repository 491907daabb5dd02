use crate::coerce::Coercion;
use crate::config::LayoutConfig;
use crate::error::ExtractError;
use crate::model::{Field, FieldValue, Product, Record, SentinelReason};
use crate::tree::{find_all, find_first, ElementSelector, Node};
use log::{debug, info, warn};
use scraper::Html;

/// How to derive one named value from inside a record element
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub selector: ElementSelector,
    pub coercion: Coercion,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, selector: ElementSelector, coercion: Coercion) -> Self {
        Self {
            name: name.into(),
            selector,
            coercion,
        }
    }

    /// Locate, strip and coerce this field within `record`.
    pub fn extract<N: Node>(&self, record: N) -> Result<FieldValue, SentinelReason> {
        let element = find_first(record, |n| self.selector.matches(n))
            .ok_or(SentinelReason::MissingElement)?;
        let text = element.text_content();
        self.coercion.apply(text.trim())
    }
}

/// Turns every record-boundary element of a document into a [`Record`].
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    record: ElementSelector,
    fields: Vec<FieldSpec>,
}

impl RecordExtractor {
    pub fn new(record: ElementSelector, fields: Vec<FieldSpec>) -> Self {
        Self { record, fields }
    }

    /// Build an extractor from `tag.class` selector strings.
    pub fn from_layout(layout: &LayoutConfig) -> Result<Self, ExtractError> {
        let record = ElementSelector::parse(&layout.record)?;
        let fields = layout
            .fields
            .iter()
            .map(|f| {
                Ok(FieldSpec::new(
                    f.name.clone(),
                    ElementSelector::parse(&f.selector)?,
                    f.coercion,
                ))
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self::new(record, fields))
    }

    /// The product listing layout: name, price, rating, availability.
    pub fn products() -> Self {
        let field = |name: &str, tag: &str, class: &str, coercion| {
            FieldSpec::new(name, ElementSelector::new(tag, class), coercion)
        };

        Self::new(
            ElementSelector::new("div", "product-item"),
            vec![
                field("name", "h2", "product-name", Coercion::Identity),
                field("price", "p", "product-price", Coercion::Currency),
                field("rating", "div", "product-rating", Coercion::Rating),
                field("availability", "span", "availability", Coercion::Identity),
            ],
        )
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Extract one record per element under `root` matching the record
    /// selector, in document order.
    pub fn extract<N: Node>(&self, root: N) -> Vec<Record> {
        let boundaries = find_all(root, |n| self.record.matches(n));
        debug!(
            "Found {} elements matching {}",
            boundaries.len(),
            self.record
        );

        boundaries
            .into_iter()
            .enumerate()
            .map(|(index, element)| self.extract_record(index, element))
            .collect()
    }

    pub fn extract_document(&self, document: &Html) -> Vec<Record> {
        let records = self.extract(document.root_element());
        info!("Extracted {} records", records.len());
        records
    }

    fn extract_record<N: Node>(&self, index: usize, element: N) -> Record {
        let fields: Vec<Field> = self
            .fields
            .iter()
            .map(|spec| match spec.extract(element) {
                Ok(value) => Field {
                    name: spec.name.clone(),
                    value,
                    failure: None,
                },
                Err(reason) => {
                    debug!(
                        "Record {}: field '{}' ({}) set to N/A: {}",
                        index, spec.name, spec.selector, reason
                    );
                    Field {
                        name: spec.name.clone(),
                        value: FieldValue::NotAvailable,
                        failure: Some(reason),
                    }
                }
            })
            .collect();

        if !fields.is_empty() && fields.iter().all(|f| f.failure.is_some()) {
            warn!("Record {} has no extractable fields", index);
        }

        Record { fields }
    }
}

/// Parse `html` and extract the product listing.
pub fn extract_products(html: &str) -> Result<Vec<Product>, ExtractError> {
    let document = parse_document(html);
    RecordExtractor::products()
        .extract_document(&document)
        .iter()
        .map(Product::try_from)
        .collect()
}

/// Parse HTML text. html5ever recovers from malformed markup, so parse
/// errors are only logged.
pub fn parse_document(html: &str) -> Html {
    let document = Html::parse_document(html);
    for error in &document.errors {
        debug!("HTML parse error: {}", error);
    }
    document
}
