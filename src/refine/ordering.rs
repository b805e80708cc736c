//! Canonical ordering of PROJ string parameters.

/// Reorders the parameters of a PROJ string.
///
/// Parameters named in `order` (without their leading `+`) come first, in
/// that order. All other parameters follow in the order they first appeared.
/// A parameter given twice keeps its first position and its last value.
/// The result is single-space separated.
pub fn reorder(definition: &str, order: &[String]) -> String {
    let mut components: Vec<(&str, Option<&str>)> = Vec::new();
    for token in definition.split_whitespace() {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        };
        match components.iter_mut().find(|(existing, _)| *existing == key) {
            Some(component) => component.1 = value,
            None => components.push((key, value)),
        }
    }

    let is_ordered = |key: &str| {
        key.strip_prefix('+')
            .is_some_and(|name| order.iter().any(|o| o == name))
    };

    let mut sorted = Vec::with_capacity(components.len());
    for name in order {
        if let Some(component) = components
            .iter()
            .find(|(key, _)| key.strip_prefix('+') == Some(name.as_str()))
        {
            sorted.push(render(component));
        }
    }
    for component in components.iter().filter(|(key, _)| !is_ordered(*key)) {
        sorted.push(render(component));
    }
    sorted.join(" ")
}

fn render((key, value): &(&str, Option<&str>)) -> String {
    match value {
        Some(value) => format!("{key}={value}"),
        None => (*key).to_string(),
    }
}
