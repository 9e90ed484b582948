/// Drum kit selectors unlocked by the drum input switch.
pub const DRUM_KIT_SELECTORS: [&str; 5] = ["DK11", "DK12", "DK13", "DK14", "DK15"];

/// Controls whose enabled state follows the checkbox `id`.
///
/// Depends on the id alone: `es` ids map to their `ec.<name>-param` slider,
/// `ds` ids map to the drum kit selectors. Both rules may apply.
pub fn dependent_targets(id: &str) -> Vec<String> {
    let mut targets = Vec::new();
    if id.contains("es") {
        if let Some(name) = id.split('.').nth(1) {
            targets.push(format!("ec.{name}-param"));
        }
    }
    if id.contains("ds") {
        targets.extend(DRUM_KIT_SELECTORS.iter().map(|kit| kit.to_string()));
    }
    targets
}
