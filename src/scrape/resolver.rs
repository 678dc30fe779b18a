//! Locating the followed link by its text

use crate::dom::Element;
use crate::ScrapeError;
use url::Url;

/// Position of the first element whose direct text equals `target_text`
///
/// The comparison is exact: case-sensitive and untrimmed. Returns `None`
/// when no element matches.
pub fn find_index_by_text(target_text: &str, elements: &[Element<'_>]) -> Option<usize> {
    elements
        .iter()
        .position(|element| element.text() == Some(target_text))
}

/// Resolves the link labelled `target_text` to an absolute URL
///
/// # Errors
///
/// * `ScrapeError::LinkNotFound` - no element has the target text
/// * `ScrapeError::MissingHref` - the matching element has no `href`
/// * `ScrapeError::UrlParse` - the `href` cannot be joined onto `base`
pub fn resolve_target(
    base: &Url,
    target_text: &str,
    elements: &[Element<'_>],
) -> Result<Url, ScrapeError> {
    let index =
        find_index_by_text(target_text, elements).ok_or_else(|| ScrapeError::LinkNotFound {
            text: target_text.to_string(),
        })?;

    let href = elements[index]
        .attr("href")
        .ok_or_else(|| ScrapeError::MissingHref {
            text: target_text.to_string(),
        })?;

    tracing::debug!("Matched link {} of {}: href='{}'", index, elements.len(), href);

    Ok(base.join(href.trim())?)
}
