use std::sync::LazyLock;

use regex::Regex;

pub use op::Op;
pub use step::Step;

mod op;
mod step;

// <positive integer><operation>, anything else in between is ignored
static STEP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([MIDNSHP=X])").expect("valid CIGAR step regex"));

/// Marker used by SAM when the CIGAR string is unavailable.
pub const UNAVAILABLE: &str = "*";

/// Longest accepted step. Longer steps are treated as malformed fragments.
pub const MAX_STEP_LEN: usize = i32::MAX as usize;

/// Split a CIGAR string into steps.
///
/// The tokenizer is permissive: fragments that are not `<length><op>` pairs are skipped,
/// steps of zero length or longer than [`MAX_STEP_LEN`] are dropped, and an empty or
/// unavailable (`*`) CIGAR yields no steps.
pub fn tokenize(cigar: &str) -> Vec<Step> {
    if cigar.is_empty() || cigar == UNAVAILABLE {
        return Vec::new();
    }

    let mut steps = Vec::new();
    let mut recognized = 0;
    for captures in STEP_REGEX.captures_iter(cigar) {
        let (whole, [len, op]) = captures.extract();
        recognized += whole.len();

        let len = match len.parse::<usize>() {
            Ok(len) if len > 0 && len <= MAX_STEP_LEN => len,
            _ => continue,
        };
        let op = match op.chars().next().map(Op::try_from) {
            Some(Ok(op)) => op,
            _ => continue,
        };
        steps.push(Step::new(op, len));
    }

    if recognized != cigar.len() {
        log::debug!(
            "Skipped {} unrecognized character(s) in CIGAR {:?}",
            cigar.len() - recognized,
            cigar
        );
    }
    steps
}

/// Format steps back into a CIGAR string. No steps produce the unavailable marker.
pub fn to_string(steps: &[Step]) -> String {
    if steps.is_empty() {
        return UNAVAILABLE.to_string();
    }
    steps.iter().map(|x| x.to_string()).collect()
}
