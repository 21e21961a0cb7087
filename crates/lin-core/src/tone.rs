use crate::profile::Tone;

/// Apply the tone transform to one line.
///
/// Gentle swaps every exclamation mark for a period. Warm and playful pass
/// the line through untouched; playful has no transform of its own yet.
pub fn apply_tone(line: &str, tone: Tone) -> String {
    match tone {
        Tone::Gentle => line.replace('!', "."),
        Tone::Warm | Tone::Playful => line.to_string(),
    }
}
