//! MIDI, frequency and note-name conversion.
//!
//! MIDI note 69 is A4 at 440 Hz and MIDI note 0 is C-1. All functions accept
//! any integer, including negative or out-of-range values; the caller is
//! responsible for keeping notes in a sensible range.

mod constants;
mod conversion;


pub use constants::{A4_FREQUENCY, A4_MIDI, NOTE_NAMES, SEMITONES_PER_OCTAVE};
pub use conversion::{
    frequency_of, frequency_to_midi, midi_from_note_name, note_name_of, pitch_class,
};
