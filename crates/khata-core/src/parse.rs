//! Expense amount extraction from bank notification text
//!
//! Bank SMS text is free-form, so extraction is token-driven: a message
//! must read like a debit before any amount is taken from it, and credit
//! wording vetoes the message outright. Amounts are whole rupees behind a
//! currency marker (₹, Rs, Rs., INR).

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Tokens that mark a notification as a credit (money in)
const CREDIT_TOKENS: &[&str] = &["credit", "received", "deposited"];

/// Tokens that mark a notification as an expense (money out)
const EXPENSE_TOKENS: &[&str] = &["debit", "spent", "paid", "purchase", "withdrawn"];

/// Currency marker patterns in priority order, matched against the
/// original (case-preserved) text
const CURRENCY_PATTERNS: &[&str] = &[
    r"₹\s*(\d+)",       // ₹299 or ₹ 299
    r"Rs\.?\s*(\d+)",   // Rs.120 or Rs 120
    r"INR\s*(\d+)",     // INR 200
];

fn currency_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        CURRENCY_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Extract an expense amount from raw notification text.
///
/// Returns `None` for empty input, credit notifications (credit wording
/// takes precedence even when debit wording is also present), messages
/// without expense wording, and text where no currency marker is followed
/// by digits.
///
/// # Examples
///
/// ```
/// use khata_core::parse::extract_amount;
///
/// assert_eq!(extract_amount("₹299 debited from your account"), Some(299));
/// assert_eq!(extract_amount("Your account credited with ₹500"), None);
/// ```
pub fn extract_amount(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();

    // Credits are never expenses, no matter what else the text says
    if CREDIT_TOKENS.iter().any(|t| lower.contains(t)) {
        return None;
    }

    if !EXPENSE_TOKENS.iter().any(|t| lower.contains(t)) {
        return None;
    }

    for re in currency_regexes() {
        if let Some(caps) = re.captures(text) {
            // A digit run too large for i64 is a no-match for this marker
            if let Ok(amount) = caps[1].parse::<i64>() {
                debug!("Extracted expense amount {} from notification", amount);
                return Some(amount);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_sign() {
        assert_eq!(
            extract_amount("₹299 debited from your account for Amazon"),
            Some(299)
        );
    }

    #[test]
    fn test_rupee_sign_with_space() {
        assert_eq!(extract_amount("₹ 45 spent at the canteen"), Some(45));
    }

    #[test]
    fn test_rs_with_period() {
        assert_eq!(extract_amount("Rs.120 spent via UPI"), Some(120));
    }

    #[test]
    fn test_rs_with_space() {
        assert_eq!(extract_amount("Rs 150 spent at Amazon"), Some(150));
    }

    #[test]
    fn test_inr_prefix() {
        assert_eq!(extract_amount("INR 200 paid to Zomato"), Some(200));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_amount(""), None);
    }

    #[test]
    fn test_credit_ignored() {
        assert_eq!(extract_amount("Your account credited with ₹500"), None);
        assert_eq!(extract_amount("₹500 received from John"), None);
        assert_eq!(extract_amount("₹1000 deposited to your account"), None);
    }

    #[test]
    fn test_credit_takes_precedence_over_debit() {
        // Both wordings present: credit wins
        assert_eq!(
            extract_amount("₹500 credited after ₹200 debit reversal"),
            None
        );
        assert_eq!(
            extract_amount("Refund received: Rs 300 for your debit of Rs 300"),
            None
        );
    }

    #[test]
    fn test_amount_without_expense_token() {
        assert_eq!(extract_amount("Your balance is ₹2500"), None);
        assert_eq!(extract_amount("OTP for txn of Rs 999 is 482913"), None);
    }

    #[test]
    fn test_expense_token_without_amount() {
        assert_eq!(extract_amount("Card payment debited successfully"), None);
        assert_eq!(extract_amount("Random text without amount"), None);
    }

    #[test]
    fn test_tokens_match_case_insensitively() {
        assert_eq!(extract_amount("₹80 DEBITED from your account"), Some(80));
        assert_eq!(extract_amount("Rs 60 Spent at the store"), Some(60));
    }

    #[test]
    fn test_marker_priority_order() {
        // The rupee sign wins even when it appears after an Rs amount
        assert_eq!(extract_amount("Rs 100 fee plus ₹250 debited"), Some(250));
    }

    #[test]
    fn test_first_match_within_pattern() {
        assert_eq!(
            extract_amount("₹299 debited, balance ₹5000 remaining"),
            Some(299)
        );
    }

    #[test]
    fn test_overlong_digit_run_falls_through() {
        // 25 digits overflow i64; the Rs amount is picked up instead
        assert_eq!(
            extract_amount("₹9999999999999999999999999 ref, Rs 120 debited"),
            Some(120)
        );
        assert_eq!(extract_amount("₹9999999999999999999999999 debited"), None);
    }
}
