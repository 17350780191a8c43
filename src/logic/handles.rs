//! Federated handle helpers
//!
//! A handle is a username optionally qualified with the instance it lives
//! on (`user@host`).

/// Join a handle and host, leaving local handles bare
///
/// # Examples
/// ```
/// use chump::logic::handles::qualify;
///
/// assert_eq!(qualify("cian", ""), "cian");
/// assert_eq!(qualify("cian", "rabble.ie"), "cian@rabble.ie");
/// ```
pub fn qualify(handle: &str, host: &str) -> String {
    if host.is_empty() {
        handle.to_string()
    } else {
        format!("{}@{}", handle, host)
    }
}

/// Split user input like `@cian@rabble.ie` into handle and optional host
pub fn split(input: &str) -> (String, Option<String>) {
    let trimmed = input.trim().trim_start_matches('@');
    match trimmed.split_once('@') {
        Some((handle, host)) if !host.is_empty() => (handle.to_string(), Some(host.to_string())),
        Some((handle, _)) => (handle.to_string(), None),
        None => (trimmed.to_string(), None),
    }
}
