use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hero::sentences::SENTENCE_COUNT;

/// What a beat does to the hero when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeatEffect {
    ShowSentence(usize),
    HideSentence,
    RevealLogo,
    UnlockDownstreamContent,
}

/// One scheduled effect, `fire_at_ms` after the timeline is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceBeat {
    pub fire_at_ms: u32,
    pub effect: BeatEffect,
}

impl SequenceBeat {
    pub const fn new(fire_at_ms: u32, effect: BeatEffect) -> Self {
        Self { fire_at_ms, effect }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BeatTableError {
    #[error("beat {index} fires at {fire_at_ms}ms, before the previous beat at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        fire_at_ms: u32,
        previous_ms: u32,
    },
    #[error("sentence index {0} is outside the sentence set")]
    SentenceOutOfRange(usize),
    #[error("sentence {0} is shown out of sequence")]
    SentenceOutOfSequence(usize),
    #[error("sentence {0} is shown while another sentence is still visible")]
    OverlappingSentence(usize),
    #[error("hide beat at {0}ms has no visible sentence to hide")]
    NothingToHide(u32),
    #[error("sentence {sentence} is hidden at the same instant it is shown ({at_ms}ms)")]
    ZeroLengthSentence { sentence: usize, at_ms: u32 },
    #[error("sentence {0} is never shown")]
    MissingSentence(usize),
    #[error("timeline ends with sentence {0} still visible")]
    SentenceLeftVisible(usize),
    #[error("timeline must reveal the logo exactly once")]
    LogoRevealCount,
    #[error("timeline must unlock downstream content exactly once")]
    UnlockCount,
    #[error("downstream content unlocks at {unlock_ms}ms, before the logo at {logo_ms}ms")]
    UnlockBeforeLogo { unlock_ms: u32, logo_ms: u32 },
}

/// Ordered beat table. Construction validates every ordering rule the
/// sequencer relies on, so an armed table can be scheduled blindly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SequenceBeat>", into = "Vec<SequenceBeat>")]
pub struct BeatTable {
    beats: Vec<SequenceBeat>,
}

const STANDARD_BEATS: [SequenceBeat; 8] = [
    SequenceBeat::new(1_500, BeatEffect::ShowSentence(0)),
    SequenceBeat::new(7_500, BeatEffect::HideSentence),
    SequenceBeat::new(9_000, BeatEffect::ShowSentence(1)),
    SequenceBeat::new(15_000, BeatEffect::HideSentence),
    SequenceBeat::new(16_500, BeatEffect::ShowSentence(2)),
    SequenceBeat::new(22_500, BeatEffect::HideSentence),
    SequenceBeat::new(24_000, BeatEffect::RevealLogo),
    SequenceBeat::new(27_000, BeatEffect::UnlockDownstreamContent),
];

impl BeatTable {
    pub fn new(beats: Vec<SequenceBeat>) -> Result<Self, BeatTableError> {
        validate(&beats)?;
        Ok(Self { beats })
    }

    /// The table tuned against the hero clip at its configured rate.
    pub fn standard() -> Self {
        Self {
            beats: STANDARD_BEATS.to_vec(),
        }
    }

    pub fn beats(&self) -> &[SequenceBeat] {
        &self.beats
    }

    pub fn get(&self, index: usize) -> Option<&SequenceBeat> {
        self.beats.get(index)
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Offset of the last beat.
    pub fn duration_ms(&self) -> u32 {
        self.beats.last().map_or(0, |beat| beat.fire_at_ms)
    }

    pub fn first_fire_of(&self, effect: BeatEffect) -> Option<u32> {
        self.beats
            .iter()
            .find(|beat| beat.effect == effect)
            .map(|beat| beat.fire_at_ms)
    }
}

impl Default for BeatTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<SequenceBeat>> for BeatTable {
    type Error = BeatTableError;

    fn try_from(beats: Vec<SequenceBeat>) -> Result<Self, Self::Error> {
        Self::new(beats)
    }
}

impl From<BeatTable> for Vec<SequenceBeat> {
    fn from(table: BeatTable) -> Self {
        table.beats
    }
}

fn validate(beats: &[SequenceBeat]) -> Result<(), BeatTableError> {
    let mut previous_ms = 0;
    // (sentence, shown_at)
    let mut visible: Option<(usize, u32)> = None;
    let mut next_sentence = 0;
    let mut logo_at = None;
    let mut logo_count = 0;
    let mut unlock_at = None;
    let mut unlock_count = 0;

    for (index, beat) in beats.iter().enumerate() {
        if beat.fire_at_ms < previous_ms {
            return Err(BeatTableError::OutOfOrder {
                index,
                fire_at_ms: beat.fire_at_ms,
                previous_ms,
            });
        }
        previous_ms = beat.fire_at_ms;

        match beat.effect {
            BeatEffect::ShowSentence(sentence) => {
                if sentence >= SENTENCE_COUNT {
                    return Err(BeatTableError::SentenceOutOfRange(sentence));
                }
                if sentence != next_sentence {
                    return Err(BeatTableError::SentenceOutOfSequence(sentence));
                }
                if visible.is_some() {
                    return Err(BeatTableError::OverlappingSentence(sentence));
                }
                visible = Some((sentence, beat.fire_at_ms));
                next_sentence += 1;
            }
            BeatEffect::HideSentence => match visible.take() {
                Some((sentence, shown_at)) if shown_at == beat.fire_at_ms => {
                    return Err(BeatTableError::ZeroLengthSentence {
                        sentence,
                        at_ms: shown_at,
                    });
                }
                Some(_) => {}
                None => return Err(BeatTableError::NothingToHide(beat.fire_at_ms)),
            },
            BeatEffect::RevealLogo => {
                logo_count += 1;
                logo_at = Some(beat.fire_at_ms);
            }
            BeatEffect::UnlockDownstreamContent => {
                unlock_count += 1;
                unlock_at = Some(beat.fire_at_ms);
            }
        }
    }

    if let Some((sentence, _)) = visible {
        return Err(BeatTableError::SentenceLeftVisible(sentence));
    }
    if next_sentence < SENTENCE_COUNT {
        return Err(BeatTableError::MissingSentence(next_sentence));
    }
    if logo_count != 1 {
        return Err(BeatTableError::LogoRevealCount);
    }
    if unlock_count != 1 {
        return Err(BeatTableError::UnlockCount);
    }
    match (logo_at, unlock_at) {
        (Some(logo_ms), Some(unlock_ms)) if unlock_ms < logo_ms => {
            Err(BeatTableError::UnlockBeforeLogo { unlock_ms, logo_ms })
        }
        _ => Ok(()),
    }
}

fn default_fallback_ms() -> u32 {
    35_000
}

fn default_unlock_at_media_secs() -> f64 {
    31.0
}

fn default_playback_rate() -> f64 {
    0.8
}

/// Everything tunable about the hero sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroTimeline {
    /// Arms the beat table when playback never confirms it started.
    #[serde(default = "default_fallback_ms")]
    pub fallback_ms: u32,
    /// Media position that unlocks downstream content on its own.
    #[serde(default = "default_unlock_at_media_secs")]
    pub unlock_at_media_secs: f64,
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
    #[serde(default)]
    pub beats: BeatTable,
}

impl HeroTimeline {
    /// Longest time from visibility to unlock when the video never plays.
    pub fn worst_case_unlock_ms(&self) -> u32 {
        let unlock = self
            .beats
            .first_fire_of(BeatEffect::UnlockDownstreamContent)
            .unwrap_or_else(|| self.beats.duration_ms());
        self.fallback_ms.saturating_add(unlock)
    }
}

impl Default for HeroTimeline {
    fn default() -> Self {
        Self {
            fallback_ms: default_fallback_ms(),
            unlock_at_media_secs: default_unlock_at_media_secs(),
            playback_rate: default_playback_rate(),
            beats: BeatTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BeatEffect::*;

    fn beat(fire_at_ms: u32, effect: BeatEffect) -> SequenceBeat {
        SequenceBeat::new(fire_at_ms, effect)
    }

    fn fire_of(table: &BeatTable, wanted: impl Fn(&BeatEffect) -> bool, nth: usize) -> u32 {
        table
            .beats()
            .iter()
            .filter(|beat| wanted(&beat.effect))
            .nth(nth)
            .map(|beat| beat.fire_at_ms)
            .unwrap()
    }

    #[test]
    fn standard_table_passes_validation() {
        let table = BeatTable::standard();
        assert_eq!(BeatTable::new(table.beats().to_vec()), Ok(table));
    }

    #[test]
    fn standard_table_is_monotonic() {
        let table = BeatTable::standard();
        for n in 0..SENTENCE_COUNT {
            let show = fire_of(&table, |e| *e == ShowSentence(n), 0);
            let hide = fire_of(&table, |e| *e == HideSentence, n);
            assert!(hide > show, "sentence {n} hides at {hide} but shows at {show}");
            if n + 1 < SENTENCE_COUNT {
                let next_show = fire_of(&table, |e| *e == ShowSentence(n + 1), 0);
                assert!(next_show >= hide);
            }
        }
        let logo = table.first_fire_of(RevealLogo).unwrap();
        let unlock = table.first_fire_of(UnlockDownstreamContent).unwrap();
        assert!(unlock >= logo);
        assert_eq!(table.duration_ms(), unlock);
    }

    #[test]
    fn rejects_beats_out_of_order() {
        let mut beats = BeatTable::standard().beats().to_vec();
        beats[3].fire_at_ms = 8_000;
        assert!(matches!(
            BeatTable::new(beats),
            Err(BeatTableError::OutOfOrder { index: 3, .. })
        ));
    }

    #[test]
    fn rejects_overlapping_sentences() {
        let beats = vec![
            beat(0, ShowSentence(0)),
            beat(10, ShowSentence(1)),
            beat(20, HideSentence),
        ];
        assert_eq!(
            BeatTable::new(beats),
            Err(BeatTableError::OverlappingSentence(1))
        );
    }

    #[test]
    fn rejects_hide_at_the_show_instant() {
        let beats = vec![beat(5, ShowSentence(0)), beat(5, HideSentence)];
        assert_eq!(
            BeatTable::new(beats),
            Err(BeatTableError::ZeroLengthSentence { sentence: 0, at_ms: 5 })
        );
    }

    #[test]
    fn rejects_sentence_outside_the_set() {
        let beats = vec![beat(0, ShowSentence(SENTENCE_COUNT))];
        assert_eq!(
            BeatTable::new(beats),
            Err(BeatTableError::SentenceOutOfRange(SENTENCE_COUNT))
        );
    }

    #[test]
    fn rejects_unlock_before_logo() {
        let mut beats = BeatTable::standard().beats().to_vec();
        let last = beats.len() - 1;
        beats[last - 1].effect = UnlockDownstreamContent;
        beats[last].effect = RevealLogo;
        assert!(matches!(
            BeatTable::new(beats),
            Err(BeatTableError::UnlockBeforeLogo { .. })
        ));
    }

    #[test]
    fn rejects_missing_unlock() {
        let mut beats = BeatTable::standard().beats().to_vec();
        beats.pop();
        assert_eq!(BeatTable::new(beats), Err(BeatTableError::UnlockCount));
    }

    #[test]
    fn deserializes_and_validates_beats() {
        let json = r#"[
            {"fire_at_ms": 0, "effect": {"show_sentence": 0}},
            {"fire_at_ms": 10, "effect": "hide_sentence"},
            {"fire_at_ms": 10, "effect": {"show_sentence": 1}},
            {"fire_at_ms": 20, "effect": "hide_sentence"},
            {"fire_at_ms": 20, "effect": {"show_sentence": 2}},
            {"fire_at_ms": 30, "effect": "hide_sentence"},
            {"fire_at_ms": 30, "effect": "reveal_logo"},
            {"fire_at_ms": 30, "effect": "unlock_downstream_content"}
        ]"#;
        let table: BeatTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.duration_ms(), 30);

        let broken = r#"[{"fire_at_ms": 0, "effect": "hide_sentence"}]"#;
        assert!(serde_json::from_str::<BeatTable>(broken).is_err());
    }

    #[test]
    fn timeline_fields_default_when_omitted() {
        let timeline: HeroTimeline = serde_json::from_str("{}").unwrap();
        assert_eq!(timeline, HeroTimeline::default());
        assert_eq!(timeline.worst_case_unlock_ms(), 35_000 + 27_000);
    }
}
