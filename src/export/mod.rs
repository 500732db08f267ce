// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File export of generated progressions.

pub mod midi;

pub use midi::{
    chord_track, progression_to_midi, write_midi_file, ExportSettings, MidiExporter,
    MidiFileFormat,
};
