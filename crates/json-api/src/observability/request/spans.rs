//! Route templates for span and metric labels.

use uuid::Uuid;

/// Segments whose successor is a free-form identifier.
const PARAMETERISED: [(&str, &str); 3] = [
    ("product", "{barcode}"),
    ("category", "{category}"),
    ("items", "{code}"),
];

/// Replace identifiers in `path` with placeholders so labels stay low-cardinality.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = Vec::new();
    let mut previous: Option<&str> = None;

    for segment in path.trim_start_matches('/').split('/') {
        let placeholder = PARAMETERISED
            .iter()
            .find(|(parent, _)| previous == Some(*parent))
            .map(|(_, placeholder)| *placeholder);

        template.push(match placeholder {
            Some(placeholder) => placeholder,
            None if Uuid::parse_str(segment).is_ok() => "{cart}",
            None => segment,
        });

        previous = Some(segment);
    }

    format!("/{}", template.join("/"))
}
