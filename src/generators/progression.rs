// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression generator.
//!
//! Progressions are built backward from a tonic: each new chord is
//! chosen as something that can lead into the previously chosen one.
//! Three strategies compete for every bar:
//!
//! - strict functional motion inside the current key (predominant to
//!   dominant, with an occasional plagal cadence),
//! - functional motion in a secondary key implied by the previous chord,
//! - voice-leading modulation to a mediant or submediant key, weighted
//!   by circle-of-fifths distance from the starting key.
//!
//! Minor keys may borrow harmonic-minor dominants, dominants may have
//! their fifth raised, and a random "spice" chord can override any bar.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::distance::{key_distance, modulation_weights};
use super::{choose_weighted, GeneratorParams};
use crate::error::Result;
use crate::music::{Chord, ChordQuality, Key, Mode, Note};

/// Seventh-chord qualities on each degree of a major key
const MAJOR_DIATONIC_CHORDS: [ChordQuality; 7] = [
    ChordQuality::MajorTriad,
    ChordQuality::MinorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::MajorSeventh,
    ChordQuality::DominantSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::HalfDiminishedSeventh,
];

/// Seventh-chord qualities on each degree of a natural minor key
const MINOR_DIATONIC_CHORDS: [ChordQuality; 7] = [
    ChordQuality::MinorTriad,
    ChordQuality::HalfDiminishedSeventh,
    ChordQuality::MajorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::MajorSeventh,
    ChordQuality::DominantSeventh,
];

/// Diatonic positions a secondary tonic may resolve to (tonic, mediant, submediant)
const SECONDARY_TONIC_POSITIONS: [usize; 3] = [0, 2, 5];

const DOMINANT: usize = 4;
const SUBDOMINANT: usize = 3;
const LEADING_TONE: usize = 6;

/// A generated progression with the key and scale degree behind each chord.
///
/// The three sequences are parallel and share one length. Bar 0 is the
/// tonic chord of the starting key at degree 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    chords: Vec<Chord>,
    keys: Vec<Key>,
    degrees: Vec<u8>,
}

impl Progression {
    /// Chords in playing order
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Key center each chord was generated in
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Scale degree (0-6) of each chord within its key
    pub fn degrees(&self) -> &[u8] {
        &self.degrees
    }

    /// The key of the whole progression
    pub fn starting_key(&self) -> Key {
        self.keys[0]
    }

    /// Number of bars
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Iterate over (chord, key, degree) per bar
    pub fn bars(&self) -> impl Iterator<Item = (&Chord, &Key, u8)> + '_ {
        self.chords
            .iter()
            .zip(self.keys.iter())
            .zip(self.degrees.iter())
            .map(|((chord, key), &degree)| (chord, key, degree))
    }

    /// Put the tonic first and the remaining bars in reverse order of
    /// decision. The first decided chord leads into the tonic, so it
    /// ends the progression and the loop closes on the tonic.
    fn into_playing_order(mut self) -> Self {
        if self.chords.len() > 1 {
            self.chords[1..].reverse();
            self.keys[1..].reverse();
            self.degrees[1..].reverse();
        }
        self
    }
}

/// Pick one of the twelve pitch classes as a key, minor half the time
fn random_key<R: Rng + ?Sized>(rng: &mut R) -> Key {
    let tonic = Note::from_pitch_class(rng.gen_range(0..12));
    let mode = if rng.gen::<f64>() < 0.5 {
        Mode::Minor
    } else {
        Mode::Major
    };
    Key::new(tonic, mode).normalized()
}

/// Candidate keys for a modulation that keeps common tones with `prev`
fn voice_leading_candidates(prev: &Chord) -> Result<Vec<Key>> {
    let scale = Key::major(prev.root()).diatonic_notes()?;
    let mediant = scale[2];
    let dominant = scale[4];
    let submediant = scale[5];

    let candidates = match (prev.has_major_third(), prev.has_perfect_fifth()) {
        // major: (vi, iii) > (bVI, bIII) > (VI, III)
        (true, true) => vec![
            Key::minor(mediant),
            Key::minor(submediant),
            Key::major(mediant.flattened()),
            Key::major(submediant.flattened()),
            Key::major(mediant),
            Key::major(submediant),
        ],
        // augmented
        (true, false) => vec![
            Key::major(mediant),
            Key::major(submediant),
            Key::major(dominant.sharpened()),
        ],
        // minor: (bIII, bVI) > (iii, vi) > (biii, bvi)
        (false, true) => vec![
            Key::major(mediant.flattened()),
            Key::major(submediant.flattened()),
            Key::minor(mediant),
            Key::minor(submediant),
            Key::minor(mediant.flattened()),
            Key::minor(submediant.flattened()),
        ],
        // diminished
        (false, false) => vec![Key::minor(prev.root()), Key::minor(prev.third())],
    };
    Ok(candidates)
}

/// Generate a progression from the given parameters and random source.
///
/// Identical seeds and parameters always give identical progressions.
pub fn generate<R: Rng + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Result<Progression> {
    let params = params.validated();
    let diatonicity = params.diatonicity;
    let functional = params.functional_harmony;
    let weights = modulation_weights(diatonicity);

    let starting_key = random_key(rng);
    let mut progression = Progression {
        chords: vec![starting_key.tonic_chord()?],
        keys: vec![starting_key],
        degrees: vec![0],
    };

    for bar in 1..params.num_bars {
        let prev_chord = progression.chords[bar - 1].clone();
        let prev_key = progression.keys[bar - 1];
        let prev_degree = progression.degrees[bar - 1] as usize;

        let mut current_key = if rng.gen::<f64>() < diatonicity {
            starting_key
        } else {
            prev_key
        }
        .normalized();

        let can_be_tonic = prev_chord.has_perfect_fifth();
        let implied_key = prev_chord.implied_key();

        let mut degree;
        let stay_roll = rng.gen::<f64>();
        // Strict motion only while the bar is in the starting key; a drifted
        // key always falls through to the secondary or voice-leading branch.
        if stay_roll > weights[key_distance(&starting_key, &implied_key)? as usize]
            && current_key == starting_key
        {
            // Diatonic functional harmony in the current key
            degree = (prev_degree + if rng.gen::<f64>() <= functional { 4 } else { 6 }) % 7;
            if bar == 1 && rng.gen::<f64>() >= functional {
                degree = SUBDOMINANT;
            }
            debug!(bar, degree, key = %current_key, "functional motion");
        } else if rng.gen::<f64>() < functional && can_be_tonic {
            // Functional harmony around a secondary key center
            current_key = implied_key;

            let resolves_to_tonic = prev_chord.is_seventh_chord()
                && implied_key.is_major()
                && prev_chord.has_minor_seventh();
            let position = if resolves_to_tonic && rng.gen_bool(params.deceptive_tonic_bias) {
                0
            } else {
                *SECONDARY_TONIC_POSITIONS.choose(rng).unwrap_or(&0)
            };

            let local_tonic = implied_key.diatonic_notes()?[position];
            if implied_key.is_major() && local_tonic != implied_key.tonic() {
                current_key = Key::minor(local_tonic);
            }

            degree = if rng.gen::<f64>() <= functional || position == 5 {
                DOMINANT
            } else {
                LEADING_TONE
            };
            debug!(bar, degree, key = %current_key, "secondary key motion");
        } else {
            // Voice-leading modulation by common tones
            let candidates = voice_leading_candidates(&prev_chord)?;
            let candidate_weights = candidates
                .iter()
                .map(|k| -> Result<f64> {
                    Ok(weights[key_distance(&starting_key, &k.normalized())? as usize])
                })
                .collect::<Result<Vec<f64>>>()?;
            current_key = candidates[choose_weighted(rng, &candidate_weights)?];
            degree = 0;
            debug!(bar, key = %current_key, "voice-leading modulation");
        }

        current_key = current_key.normalized();
        let scale = current_key.diatonic_notes()?;
        let table = match current_key.mode() {
            Mode::Major => &MAJOR_DIATONIC_CHORDS,
            Mode::Minor => &MINOR_DIATONIC_CHORDS,
        };
        let mut chord = Chord::build(scale[degree], table[degree]);

        // Harmonic minor: raised leading tone under V and vii
        if current_key.is_minor() && rng.gen::<f64>() <= functional {
            match degree {
                DOMINANT => chord = Chord::build(scale[DOMINANT], ChordQuality::DominantSeventh),
                LEADING_TONE => {
                    chord = Chord::build(
                        scale[LEADING_TONE].sharpened(),
                        ChordQuality::DiminishedSeventh,
                    )
                }
                _ => {}
            }
        }

        if degree == DOMINANT && prev_chord.has_major_third() && rng.gen::<f64>() > diatonicity {
            chord = chord.with_augmented_fifth();
        }

        // Spice: replace the bar with the tonic of a random key
        if rng.gen::<f64>() > diatonicity + functional {
            current_key = random_key(rng);
            degree = 0;
            chord = current_key.tonic_chord()?;
            debug!(bar, key = %current_key, "spice override");
        }

        progression.chords.push(chord);
        progression.keys.push(current_key);
        progression.degrees.push(degree as u8);
    }

    Ok(progression.into_playing_order())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::VecDeque;

    /// Replays a fixed list of raw draws so each branch can be forced
    struct ScriptedRng {
        draws: VecDeque<u64>,
    }

    impl ScriptedRng {
        fn new(draws: &[u64]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.draws.pop_front().expect("scripted draws exhausted")
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Raw draw that `gen::<f64>()` turns into exactly `x`
    fn roll(x: f64) -> u64 {
        ((x * (1u64 << 53) as f64) as u64) << 11
    }

    /// Raw draw that a uniform index draw over `n` items turns into `i`
    fn pick(i: u64, n: u64) -> u64 {
        (((i << 32) + n - 1) / n) << 32
    }

    /// Start in C major (pitch class 0, mode roll above 0.5), then replay `tail`
    fn scripted(tail: &[u64]) -> ScriptedRng {
        let mut draws = vec![pick(0, 12), roll(0.75)];
        draws.extend_from_slice(tail);
        ScriptedRng::new(&draws)
    }

    fn params(diatonicity: f64, functional_harmony: f64, num_bars: usize) -> GeneratorParams {
        GeneratorParams {
            diatonicity,
            functional_harmony,
            num_bars,
            ..Default::default()
        }
    }

    fn spelled(chord: &Chord) -> Vec<String> {
        chord.notes().iter().map(|n| n.to_string()).collect()
    }

    /// Generate with a seed, retrying over seeds the way callers do
    fn generate_ok(params: &GeneratorParams, seed: u64) -> Progression {
        for offset in 0..1000 {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(offset * 7919));
            if let Ok(progression) = generate(params, &mut rng) {
                return progression;
            }
        }
        panic!("no progression generated for seed {}", seed);
    }

    #[test]
    fn test_progression_lengths() {
        for bars in 1..=8 {
            let params = GeneratorParams {
                num_bars: bars,
                ..Default::default()
            };
            for seed in 0..20 {
                let progression = generate_ok(&params, seed);
                assert_eq!(progression.len(), bars);
                assert_eq!(progression.keys().len(), bars);
                assert_eq!(progression.degrees().len(), bars);
            }
        }
    }

    #[test]
    fn test_first_bar_is_tonic() {
        let params = GeneratorParams::default();
        for seed in 0..100 {
            let progression = generate_ok(&params, seed);
            assert_eq!(progression.degrees()[0], 0);
            let key = progression.starting_key();
            assert_eq!(progression.chords()[0], key.tonic_chord().unwrap());
        }
    }

    #[test]
    fn test_single_bar() {
        let params = GeneratorParams {
            num_bars: 1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let progression = generate(&params, &mut rng).unwrap();
        assert_eq!(progression.len(), 1);
        assert!(!progression.is_empty());
    }

    #[test]
    fn test_same_seed_same_output() {
        let params = GeneratorParams {
            diatonicity: 0.56,
            functional_harmony: 0.72,
            num_bars: 4,
            ..Default::default()
        };
        for seed in 0..50 {
            let first = generate(&params, &mut StdRng::seed_from_u64(seed));
            let second = generate(&params, &mut StdRng::seed_from_u64(seed));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_degrees_in_range() {
        let params = GeneratorParams {
            diatonicity: 0.3,
            functional_harmony: 0.4,
            num_bars: 8,
            ..Default::default()
        };
        for seed in 0..100 {
            let progression = generate_ok(&params, seed);
            assert!(progression.degrees().iter().all(|&d| d < 7));
        }
    }

    #[test]
    fn test_full_diatonicity_stays_functional() {
        // With both factors at 1.0 the spice override can never fire, so
        // every non-tonic bar is built from its recorded key and degree.
        let params = GeneratorParams {
            diatonicity: 1.0,
            functional_harmony: 1.0,
            num_bars: 8,
            ..Default::default()
        };
        for seed in 0..200 {
            let progression = generate_ok(&params, seed);
            for (chord, key, degree) in progression.bars().skip(1) {
                let scale = key.diatonic_notes().unwrap();
                let root = chord.root();
                let raised = scale[degree as usize].sharpened();
                assert!(
                    root == scale[degree as usize] || root == raised,
                    "chord {} does not sit on degree {} of {}",
                    chord,
                    degree,
                    key
                );
            }
        }
    }

    #[test]
    fn test_voice_leading_candidates_for_major_chord() {
        let c_major = Chord::build(Note::parse("C").unwrap(), ChordQuality::MajorTriad);
        let names: Vec<String> = voice_leading_candidates(&c_major)
            .unwrap()
            .iter()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(names, vec!["e", "a", "Eb", "Ab", "E", "A"]);
    }

    #[test]
    fn test_voice_leading_candidates_for_minor_chord() {
        let a_minor = Chord::build(Note::parse("A").unwrap(), ChordQuality::MinorTriad);
        let names: Vec<String> = voice_leading_candidates(&a_minor)
            .unwrap()
            .iter()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(names, vec!["C", "F", "c#", "f#", "c", "f"]);
    }

    #[test]
    fn test_voice_leading_candidates_for_diminished_chord() {
        let b_dim = Chord::build(Note::parse("B").unwrap(), ChordQuality::HalfDiminishedSeventh);
        let names: Vec<String> = voice_leading_candidates(&b_dim)
            .unwrap()
            .iter()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_voice_leading_candidates_for_augmented_chord() {
        let augmented = Chord::build(Note::parse("G").unwrap(), ChordQuality::DominantSeventh)
            .with_augmented_fifth();
        let names: Vec<String> = voice_leading_candidates(&augmented)
            .unwrap()
            .iter()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(names, vec!["B", "E", "D#"]);
    }

    #[test]
    fn test_unsupported_root_key_fails() {
        let g_sharp = Chord::build(Note::parse("G#").unwrap(), ChordQuality::MajorTriad);
        assert!(voice_leading_candidates(&g_sharp).is_err());
    }

    #[test]
    fn test_random_keys_are_supported() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            assert!(random_key(&mut rng).is_supported());
        }
    }

    #[test]
    fn test_playing_order() {
        let c = Key::parse("C").unwrap();
        let progression = Progression {
            chords: vec![
                c.tonic_chord().unwrap(),
                Chord::build(Note::parse("G").unwrap(), ChordQuality::DominantSeventh),
                Chord::build(Note::parse("D").unwrap(), ChordQuality::MinorSeventh),
            ],
            keys: vec![c, c, c],
            degrees: vec![0, 4, 1],
        }
        .into_playing_order();

        assert_eq!(progression.degrees(), &[0, 1, 4]);
        assert_eq!(progression.chords()[2].root(), Note::parse("G").unwrap());
    }

    #[test]
    fn test_plagal_override_on_first_bar() {
        // stay in C, strict motion, +4, then the plagal roll
        let mut rng = scripted(&[roll(0.25), roll(0.75), roll(0.25), roll(0.75), roll(0.5)]);
        let progression = generate(&params(0.5, 0.5, 2), &mut rng).unwrap();

        assert_eq!(progression.keys()[1].to_string(), "C");
        assert_eq!(progression.degrees()[1], 3);
        assert_eq!(spelled(&progression.chords()[1]), vec!["F", "A", "C", "E"]);
    }

    #[test]
    fn test_dominant_after_tonic() {
        let mut rng = scripted(&[
            roll(0.25),
            roll(0.75),
            roll(0.25),
            roll(0.25),
            roll(0.25),
            roll(0.5),
        ]);
        let progression = generate(&params(0.5, 0.5, 2), &mut rng).unwrap();

        assert_eq!(progression.degrees()[1], 4);
        assert_eq!(spelled(&progression.chords()[1]), vec!["G", "B", "D", "F"]);
    }

    #[test]
    fn test_dominant_augmented_after_major_third() {
        // same path, but the augmentation roll beats diatonicity
        let mut rng = scripted(&[
            roll(0.25),
            roll(0.75),
            roll(0.25),
            roll(0.25),
            roll(0.75),
            roll(0.5),
        ]);
        let progression = generate(&params(0.5, 0.5, 2), &mut rng).unwrap();

        assert_eq!(progression.degrees()[1], 4);
        assert_eq!(spelled(&progression.chords()[1]), vec!["G", "B", "D#", "F"]);
    }

    #[test]
    fn test_secondary_mediant_with_raised_leading_tone() {
        // secondary branch, position 2 (E) lowered to e minor, leading tone,
        // then harmonic minor
        let mut rng = scripted(&[
            roll(0.25),
            roll(0.25),
            roll(0.25),
            pick(1, 3),
            roll(0.75),
            roll(0.25),
            roll(0.5),
        ]);
        let progression = generate(&params(0.5, 0.5, 2), &mut rng).unwrap();

        assert_eq!(progression.keys()[1].to_string(), "e");
        assert_eq!(progression.degrees()[1], 6);
        assert_eq!(
            spelled(&progression.chords()[1]),
            vec!["D#", "F#", "A", "C"]
        );
    }

    #[test]
    fn test_secondary_submediant_forces_harmonic_dominant() {
        // position 5 takes the dominant even when the degree roll fails
        let mut rng = scripted(&[
            roll(0.25),
            roll(0.25),
            roll(0.25),
            pick(2, 3),
            roll(0.75),
            roll(0.25),
            roll(0.25),
            roll(0.5),
        ]);
        let progression = generate(&params(0.5, 0.5, 2), &mut rng).unwrap();

        assert_eq!(progression.keys()[1].to_string(), "a");
        assert_eq!(progression.degrees()[1], 4);
        assert_eq!(spelled(&progression.chords()[1]), vec!["E", "G#", "B", "D"]);
    }

    /// Bar 1 lands on G7 in C; the tail decides bar 2
    fn after_dominant_seventh(tail: &[u64]) -> ScriptedRng {
        let mut draws = vec![
            roll(0.25),
            roll(0.75),
            roll(0.25),
            roll(0.25),
            roll(0.25),
            roll(0.5),
            roll(0.25),
            roll(0.125),
            roll(0.25),
        ];
        draws.extend_from_slice(tail);
        scripted(&draws)
    }

    #[test]
    fn test_dominant_seventh_resolves_to_own_tonic() {
        let mut rng = after_dominant_seventh(&[roll(0.25), roll(0.25), roll(0.5)]);
        let progression = generate(&params(0.5, 0.5, 3), &mut rng).unwrap();

        // playing order puts the last decided bar right after the tonic
        assert_eq!(progression.keys()[1].to_string(), "G");
        assert_eq!(progression.degrees()[1], 4);
        assert_eq!(spelled(&progression.chords()[1]), vec!["D", "F#", "A", "C"]);
        assert_eq!(spelled(&progression.chords()[2]), vec!["G", "B", "D", "F"]);
    }

    #[test]
    fn test_zero_tonic_bias_allows_deceptive_resolution() {
        let params = GeneratorParams {
            deceptive_tonic_bias: 0.0,
            ..params(0.5, 0.5, 3)
        };
        let mut rng = after_dominant_seventh(&[
            roll(0.5),
            pick(1, 3),
            roll(0.25),
            roll(0.25),
            roll(0.25),
            roll(0.5),
        ]);
        let progression = generate(&params, &mut rng).unwrap();

        assert_eq!(progression.keys()[1].to_string(), "b");
        assert_eq!(progression.degrees()[1], 4);
        assert_eq!(
            spelled(&progression.chords()[1]),
            vec!["F#", "A#", "C#", "E"]
        );
    }

    #[test]
    fn test_voice_leading_draws_only_weighted_candidates() {
        // at diatonicity 0 only the relative minor (distance 0) carries weight
        for draw in [0.0, 0.5, 0.96875] {
            let mut rng = scripted(&[
                roll(0.5),
                roll(0.5),
                roll(0.75),
                roll(draw),
                roll(0.25),
                roll(0.25),
            ]);
            let progression = generate(&params(0.0, 0.5, 2), &mut rng).unwrap();

            assert_eq!(progression.keys()[1].to_string(), "a");
            assert_eq!(progression.degrees()[1], 0);
            assert_eq!(spelled(&progression.chords()[1]), vec!["A", "C", "E"]);
        }
    }

    #[test]
    fn test_zero_diatonicity_never_modulates_away() {
        let params = params(0.0, 1.0, 8);
        let mut generated = 0;
        for seed in 0..3000 {
            let Ok(progression) = generate(&params, &mut StdRng::seed_from_u64(seed)) else {
                continue;
            };
            generated += 1;
            let start = progression.starting_key();
            for (_, key, degree) in progression.bars().skip(1) {
                if degree == 0 {
                    assert!(
                        !matches!(key_distance(&start, key), Ok(d) if d > 0),
                        "seed {}: {} moved to {}",
                        seed,
                        start,
                        key
                    );
                }
            }
        }
        assert!(generated > 0);
    }

    #[test]
    fn test_strict_motion_needs_the_starting_key() {
        // Bar 1 modulates C -> a by voice leading. Bar 2 keeps a and rolls
        // high enough to stay, but a is not the starting key, so the bar is
        // decided by the secondary branch: leading tone of a, raised.
        let mut rng = scripted(&[
            roll(0.75),
            roll(0.25),
            roll(0.75),
            roll(0.5),
            roll(0.75),
            roll(0.5),
            roll(0.75),
            roll(0.875),
            roll(0.25),
            pick(0, 3),
            roll(0.75),
            roll(0.25),
            roll(0.5),
        ]);
        let progression = generate(&params(0.5, 0.5, 3), &mut rng).unwrap();

        assert_eq!(progression.keys()[2].to_string(), "a");
        assert_eq!(progression.degrees()[2], 0);
        assert_eq!(progression.keys()[1].to_string(), "a");
        assert_eq!(progression.degrees()[1], 6);
        assert_eq!(
            spelled(&progression.chords()[1]),
            vec!["G#", "B", "D", "F"]
        );
    }

    #[test]
    fn test_spice_replaces_bar_with_random_tonic() {
        // strict dominant, then a spice roll above 0.75 draws g minor
        let mut rng = scripted(&[
            roll(0.25),
            roll(0.75),
            roll(0.25),
            roll(0.125),
            roll(0.25),
            roll(0.875),
            pick(7, 12),
            roll(0.25),
        ]);
        let progression = generate(&params(0.5, 0.25, 2), &mut rng).unwrap();

        assert_eq!(progression.keys()[1].to_string(), "g");
        assert_eq!(progression.degrees()[1], 0);
        assert_eq!(spelled(&progression.chords()[1]), vec!["G", "Bb", "D"]);
    }
}
