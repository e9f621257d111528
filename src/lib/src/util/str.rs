use crate::constants::{MAX_MESSAGE_LEN, MESSAGE_ELLIPSIS, SHORT_REV_LEN};

/// First `SHORT_REV_LEN` characters of a commit sha. Shorter ids are returned whole.
pub fn short_rev(sha: &str) -> String {
    sha.chars().take(SHORT_REV_LEN).collect()
}

/// Cuts messages longer than `MAX_MESSAGE_LEN` characters and marks the cut with an ellipsis.
pub fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(MAX_MESSAGE_LEN) {
        Some((idx, _)) => format!("{}{}", &message[..idx], MESSAGE_ELLIPSIS),
        None => message.to_string(),
    }
}

pub fn split_and_trim(input: &str, delimiter: &str) -> Vec<String> {
    input
        .split(delimiter)
        .map(|v| v.trim())
        .map(String::from)
        .collect::<Vec<String>>()
}
