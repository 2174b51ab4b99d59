use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Language {
  #[default]
  English,
  Hindi,
}

impl Language {
  pub(crate) fn next(self) -> Self {
    match self {
      Self::English => Self::Hindi,
      Self::Hindi => Self::English,
    }
  }
}

impl Display for Language {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::English => write!(f, "english"),
      Self::Hindi => write!(f, "hindi"),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
  #[default]
  Practice,
  Test,
}

impl Mode {
  pub(crate) fn next(self) -> Self {
    match self {
      Self::Practice => Self::Test,
      Self::Test => Self::Practice,
    }
  }

  pub(crate) fn is_timed(self) -> bool {
    self == Self::Test
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Practice => write!(f, "practice"),
      Self::Test => write!(f, "test"),
    }
  }
}

const ENGLISH_PRACTICE: &str = "The quick brown fox jumps over the lazy dog. This pangram sentence contains every letter of the alphabet at least once.";

const ENGLISH_TEST: &str = "In the heart of the bustling city, where skyscrapers touch the clouds and streets hum with the rhythm of life, there exists a hidden oasis of tranquility. A small park, adorned with ancient trees and a serene pond, offers a refuge from the chaos. It is a place where time seems to slow down, allowing weary souls to find a moment of peace and reflection amidst the urban jungle.";

const HINDI_PRACTICE: &str = "टाइपिंग एक कला है। इसमें अभ्यास का बहुत महत्व है। नियमित रूप से प्रैक्टिस करने से गति और सटीकता दोनों बढ़ती है।";

const HINDI_TEST: &str = "प्रौद्योगिकी के इस युग में कंप्यूटर और इंटरनेट हमारे जीवन का एक अभिन्न अंग बन चुके हैं। चाहे शिक्षा हो, व्यवसाय हो या मनोरंजन, हर क्षेत्र में टाइपिंग की स्किल की आवश्यकता महसूस होती है। एक अच्छी टाइपिंग स्पीड न केवल समय बचाती है, बल्कि कार्यक्षमता को भी बढ़ाती है।";

/// Reference text bundled for a language and mode.
pub(crate) fn text(language: Language, mode: Mode) -> &'static str {
  match (language, mode) {
    (Language::English, Mode::Practice) => ENGLISH_PRACTICE,
    (Language::English, Mode::Test) => ENGLISH_TEST,
    (Language::Hindi, Mode::Practice) => HINDI_PRACTICE,
    (Language::Hindi, Mode::Test) => HINDI_TEST,
  }
}
