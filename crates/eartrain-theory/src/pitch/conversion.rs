//! Conversion between MIDI note numbers, frequencies and note names.

use super::constants::{A4_FREQUENCY, A4_MIDI, LETTER_SEMITONES, NOTE_NAMES, SEMITONES_PER_OCTAVE};

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12). No rounding is applied.
///
/// # Examples
/// ```
/// use eartrain_theory::pitch::frequency_of;
///
/// assert_eq!(frequency_of(69), 440.0);
/// assert_eq!(frequency_of(81), 880.0);
/// ```
pub fn frequency_of(midi: i32) -> f64 {
    A4_FREQUENCY * 2.0_f64.powf((midi - A4_MIDI) as f64 / SEMITONES_PER_OCTAVE as f64)
}

/// Convert a frequency in Hz to the nearest MIDI note number.
///
/// # Examples
/// ```
/// use eartrain_theory::pitch::frequency_to_midi;
///
/// assert_eq!(frequency_to_midi(440.0), 69);
/// assert_eq!(frequency_to_midi(261.626), 60);
/// ```
pub fn frequency_to_midi(freq: f64) -> i32 {
    let note = A4_MIDI as f64 + SEMITONES_PER_OCTAVE as f64 * (freq / A4_FREQUENCY).log2();
    note.round() as i32
}

/// Pitch class of a MIDI note (`midi mod 12`, always in `0..12`).
pub fn pitch_class(midi: i32) -> i32 {
    midi.rem_euclid(SEMITONES_PER_OCTAVE)
}

/// Name of a MIDI note with its octave, e.g. `"C4"` for 60.
///
/// The octave is `floor(midi / 12) - 1`, so MIDI 0 is `"C-1"`.
///
/// # Examples
/// ```
/// use eartrain_theory::pitch::note_name_of;
///
/// assert_eq!(note_name_of(60), "C4");
/// assert_eq!(note_name_of(69), "A4");
/// assert_eq!(note_name_of(0), "C-1");
/// ```
pub fn note_name_of(midi: i32) -> String {
    let octave = midi.div_euclid(SEMITONES_PER_OCTAVE) - 1;
    format!("{}{}", NOTE_NAMES[pitch_class(midi) as usize], octave)
}

/// Parse a note name such as `"A#3"`, `"Bb5"` or `"C-1"` into a MIDI note.
///
/// Returns `None` for malformed names and for octaves whose note number
/// does not fit in an `i32`.
///
/// # Examples
/// ```
/// use eartrain_theory::pitch::midi_from_note_name;
///
/// assert_eq!(midi_from_note_name("C4"), Some(60));
/// assert_eq!(midi_from_note_name("Bb3"), Some(58));
/// assert_eq!(midi_from_note_name("H2"), None);
/// ```
pub fn midi_from_note_name(name: &str) -> Option<i32> {
    let name = name.trim();
    let mut chars = name.chars();

    let letter = chars.next()?.to_ascii_uppercase();
    let mut semitone = LETTER_SEMITONES
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s)?;

    let rest = chars.as_str();
    let octave_str = if let Some(stripped) = rest.strip_prefix('#') {
        semitone += 1;
        stripped
    } else if let Some(stripped) = rest.strip_prefix('b') {
        semitone -= 1;
        stripped
    } else {
        rest
    };

    let octave: i32 = octave_str.parse().ok()?;
    octave
        .checked_add(1)?
        .checked_mul(SEMITONES_PER_OCTAVE)?
        .checked_add(semitone)
}
