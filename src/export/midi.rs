// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Standard MIDI file export of chord progressions.
//!
//! Every chord is held for one bar: the root doubled in two bass
//! octaves under the full chord in the middle register.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::Chord;

/// Lowest bass octave (C2)
const BASS_BASE: u8 = 36;
/// Upper bass octave (C3)
const TENOR_BASE: u8 = 48;
/// Chord register (middle C)
const CHORD_BASE: u8 = 60;
/// Gap left before the next chord, in beats
const RELEASE_GAP_BEATS: f64 = 0.1;

/// MIDI file layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidiFileFormat {
    /// Everything in one track
    Type0,
    /// Tempo track followed by the chord track
    #[default]
    Type1,
}

/// Settings for rendering a progression to MIDI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Tempo in BPM
    pub tempo: f64,
    /// General MIDI program for the chord channel
    pub program: u8,
    /// Note velocity (1-127)
    pub velocity: u8,
    /// Bar length in beats
    pub beats_per_chord: f64,
    /// Ticks per quarter note
    pub ppqn: u16,
    /// File layout
    pub format: MidiFileFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            tempo: 120.0,
            program: 90,
            velocity: 72,
            beats_per_chord: 4.0,
            ppqn: 960,
            format: MidiFileFormat::Type1,
        }
    }
}

impl ExportSettings {
    /// Clamp every field into its valid range
    pub fn validated(self) -> Self {
        Self {
            tempo: self.tempo.clamp(20.0, 300.0),
            program: self.program.min(127),
            velocity: self.velocity.clamp(1, 127),
            beats_per_chord: self.beats_per_chord.clamp(0.5, 32.0),
            ppqn: self.ppqn.max(24),
            format: self.format,
        }
    }

    fn beats_to_ticks(&self, beats: f64) -> u64 {
        (beats * self.ppqn as f64).round().max(0.0) as u64
    }
}

/// A sounding note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportNote {
    /// Start tick
    pub tick: u64,
    /// MIDI note number
    pub key: u8,
    pub velocity: u8,
    /// Length in ticks
    pub duration: u64,
}

impl ExportNote {
    pub fn end_tick(&self) -> u64 {
        self.tick + self.duration
    }
}

/// A named track on one channel
#[derive(Debug, Clone)]
pub struct ExportTrack {
    pub name: String,
    /// MIDI channel (0-15)
    pub channel: u8,
    /// Program change at tick 0
    pub program: Option<u8>,
    pub notes: Vec<ExportNote>,
}

impl ExportTrack {
    pub fn new(name: impl Into<String>, channel: u8) -> Self {
        Self {
            name: name.into(),
            channel: channel & 0x0F,
            program: None,
            notes: Vec::new(),
        }
    }

    pub fn with_program(mut self, program: u8) -> Self {
        self.program = Some(program & 0x7F);
        self
    }

    /// Add every voice of a chord starting at `tick`
    pub fn add_chord(&mut self, chord: &Chord, tick: u64, duration: u64, velocity: u8) {
        let root = chord.root().pitch_class();
        let bass = [BASS_BASE + root, TENOR_BASE + root];
        let upper = chord.notes().iter().map(|n| CHORD_BASE + n.pitch_class());

        for key in bass.into_iter().chain(upper) {
            self.notes.push(ExportNote {
                tick,
                key,
                velocity,
                duration,
            });
        }
    }
}

/// Build the chord track for a progression: one chord per bar
pub fn chord_track(chords: &[Chord], settings: &ExportSettings) -> ExportTrack {
    let bar = settings.beats_to_ticks(settings.beats_per_chord);
    let held = settings.beats_to_ticks(settings.beats_per_chord - RELEASE_GAP_BEATS);

    let mut track = ExportTrack::new("Chords", 0).with_program(settings.program);
    for (i, chord) in chords.iter().enumerate() {
        track.add_chord(chord, bar * i as u64, held, settings.velocity);
    }
    track
}

/// One timed event inside a track chunk
#[derive(Debug, Clone)]
struct SmfEvent {
    tick: u64,
    /// Ordering among events on the same tick (lower first)
    rank: u8,
    data: Vec<u8>,
}

impl SmfEvent {
    fn meta(tick: u64, kind: u8, payload: &[u8]) -> Self {
        let mut data = vec![0xFF, kind];
        push_variable_length(&mut data, payload.len() as u32);
        data.extend_from_slice(payload);
        Self { tick, rank: 0, data }
    }

    fn tempo(bpm: f64) -> Self {
        let micros = (60_000_000.0 / bpm).round() as u32;
        Self::meta(0, 0x51, &micros.to_be_bytes()[1..])
    }

    fn time_signature(numerator: u8) -> Self {
        // denominator as a power of two (quarter note), 24 clocks per click,
        // 8 thirty-seconds per quarter
        Self::meta(0, 0x58, &[numerator, 2, 24, 8])
    }

    fn track_name(name: &str) -> Self {
        Self::meta(0, 0x03, name.as_bytes())
    }

    fn program_change(channel: u8, program: u8) -> Self {
        Self {
            tick: 0,
            rank: 1,
            data: vec![0xC0 | channel, program],
        }
    }

    fn note_off(tick: u64, channel: u8, key: u8) -> Self {
        Self {
            tick,
            rank: 2,
            data: vec![0x80 | channel, key & 0x7F, 0],
        }
    }

    fn note_on(tick: u64, channel: u8, key: u8, velocity: u8) -> Self {
        Self {
            tick,
            rank: 3,
            data: vec![0x90 | channel, key & 0x7F, velocity & 0x7F],
        }
    }
}

/// Append a MIDI variable-length quantity
fn push_variable_length(out: &mut Vec<u8>, mut value: u32) {
    let mut groups = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        groups.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out.extend(groups.iter().rev());
}

/// Standard MIDI file writer
pub struct MidiExporter {
    format: MidiFileFormat,
    ppqn: u16,
    tempo: f64,
    tracks: Vec<ExportTrack>,
}

impl MidiExporter {
    pub fn new(settings: &ExportSettings) -> Self {
        let settings = settings.clone().validated();
        Self {
            format: settings.format,
            ppqn: settings.ppqn,
            tempo: settings.tempo,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(&mut self, track: ExportTrack) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[ExportTrack] {
        &self.tracks
    }

    fn conductor_events(&self) -> Vec<SmfEvent> {
        vec![SmfEvent::tempo(self.tempo), SmfEvent::time_signature(4)]
    }

    fn track_events(track: &ExportTrack) -> Vec<SmfEvent> {
        let mut events = Vec::with_capacity(track.notes.len() * 2 + 1);
        if let Some(program) = track.program {
            events.push(SmfEvent::program_change(track.channel, program));
        }
        for note in &track.notes {
            events.push(SmfEvent::note_on(note.tick, track.channel, note.key, note.velocity));
            events.push(SmfEvent::note_off(note.end_tick(), track.channel, note.key));
        }
        events
    }

    /// Encode the whole file
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut chunks: Vec<Vec<SmfEvent>> = Vec::new();
        match self.format {
            MidiFileFormat::Type0 => {
                let mut events = self.conductor_events();
                for track in &self.tracks {
                    events.extend(Self::track_events(track));
                }
                chunks.push(events);
            }
            MidiFileFormat::Type1 => {
                let mut conductor = vec![SmfEvent::track_name("Tempo")];
                conductor.extend(self.conductor_events());
                chunks.push(conductor);
                for track in &self.tracks {
                    let mut events = vec![SmfEvent::track_name(&track.name)];
                    events.extend(Self::track_events(track));
                    chunks.push(events);
                }
            }
        }

        let format = match self.format {
            MidiFileFormat::Type0 => 0u16,
            MidiFileFormat::Type1 => 1u16,
        };

        let mut out = Vec::new();
        out.extend_from_slice(b"MThd");
        out.extend_from_slice(&6u32.to_be_bytes());
        out.extend_from_slice(&format.to_be_bytes());
        out.extend_from_slice(&(chunks.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.ppqn.to_be_bytes());

        for mut events in chunks {
            events.sort_by_key(|e| (e.tick, e.rank));
            Self::write_chunk(&mut out, &events);
        }
        out
    }

    fn write_chunk(out: &mut Vec<u8>, events: &[SmfEvent]) {
        let mut body = Vec::new();
        let mut last_tick = 0;
        for event in events {
            push_variable_length(&mut body, (event.tick - last_tick) as u32);
            body.extend_from_slice(&event.data);
            last_tick = event.tick;
        }
        // end of track
        body.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

        out.extend_from_slice(b"MTrk");
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(&body);
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

/// Encode a progression as a standard MIDI file
pub fn progression_to_midi(chords: &[Chord], settings: &ExportSettings) -> Vec<u8> {
    let settings = settings.clone().validated();
    let mut exporter = MidiExporter::new(&settings);
    exporter.add_track(chord_track(chords, &settings));
    exporter.to_bytes()
}

/// Write a progression to a MIDI file
pub fn write_midi_file<P: AsRef<Path>>(
    path: P,
    chords: &[Chord],
    settings: &ExportSettings,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = progression_to_midi(chords, settings);
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write MIDI file: {}", path.display()))?;
    info!(path = %path.display(), bars = chords.len(), "exported progression");
    Ok(())
}
