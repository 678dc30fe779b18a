//! Element selection for the homepage pass

use crate::dom::{Document, Element};

/// Checks whether an element loads an external resource
///
/// True for elements carrying `src`, or carrying `href` without `hreflang`,
/// as long as the element is not an `<a>` hyperlink. Alternate-language
/// `<link hreflang>` entries point at other versions of the same page and
/// are not resources.
pub fn has_external_source(element: &Element<'_>) -> bool {
    ((element.has_attribute("href") && !element.has_attribute("hreflang"))
        || element.has_attribute("src"))
        && element.tag_name() != "a"
}

/// Every element of the document that loads an external resource
pub fn external_resources(document: &Document) -> Vec<Element<'_>> {
    document.find_all(has_external_source)
}

/// Every `<a>` element of the document, with or without `href`
pub fn hyperlinks(document: &Document) -> Vec<Element<'_>> {
    document.find_all_by_tag("a")
}
