/// How a word is rendered inside its sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Highlighted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: &'static str,
    pub emphasis: Emphasis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(self) -> &'static str {
        match self {
            Align::Left => "align-left",
            Align::Center => "align-center",
            Align::Right => "align-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentence {
    pub words: &'static [Word],
    pub align: Align,
}

impl Sentence {
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|word| word.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub const SENTENCE_COUNT: usize = 3;

pub type SentenceSet = [Sentence; SENTENCE_COUNT];

const fn normal(text: &'static str) -> Word {
    Word {
        text,
        emphasis: Emphasis::Normal,
    }
}

const fn highlighted(text: &'static str) -> Word {
    Word {
        text,
        emphasis: Emphasis::Highlighted,
    }
}

pub static SENTENCES: SentenceSet = [
    Sentence {
        words: &[
            normal("Without"),
            highlighted("memory,"),
            normal("there's"),
            normal("no"),
            highlighted("meaning."),
        ],
        align: Align::Left,
    },
    Sentence {
        words: &[
            normal("Without"),
            highlighted("vision,"),
            normal("there's"),
            normal("no"),
            highlighted("velocity."),
        ],
        align: Align::Center,
    },
    Sentence {
        words: &[
            normal("Without"),
            highlighted("place,"),
            normal("there's"),
            normal("no"),
            highlighted("perspective."),
        ],
        align: Align::Right,
    },
];
