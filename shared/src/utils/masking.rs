//! Masking of personal data before it reaches the logs

/// Mask an email address for logging, keeping the first character of the
/// local part and the full domain: `alice@example.com` -> `a****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => {
                    let hidden = chars.count().max(1);
                    format!("{}{}@{}", first, "*".repeat(hidden), domain)
                }
                None => format!("*@{}", domain),
            }
        }
        None => "*".repeat(email.chars().count().min(8)),
    }
}
