const VISIBLE_PREFIX: usize = 4;
const MIN_MASKED_LENGTH: usize = 12;

pub fn mask_secret(secret: &str) -> String {
    let trimmed = secret.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let length = trimmed.chars().count();
    if length < MIN_MASKED_LENGTH {
        return String::from("[REDACTED]");
    }

    let prefix: String = trimmed.chars().take(VISIBLE_PREFIX).collect();
    format!("{}****({} chars)", prefix, length)
}
