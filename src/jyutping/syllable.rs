/// Syllable onset. `Zero` covers both vowel-initial syllables and the
/// historical `ng-` onset, which is folded into the zero category at parse
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Initial {
    Zero,
    B,
    P,
    M,
    F,
    D,
    T,
    N,
    L,
    G,
    K,
    H,
    Gw,
    Kw,
    W,
    Z,
    C,
    S,
    J,
}

/// Vowel core of a syllable. Compound nuclei are enumerated individually
/// because their kana renderings do not reduce to a uniform formula.
///
/// `Oeng` and `Oek` carry their own closing consonant; they are matched as
/// whole nuclei rather than `Oe` + coda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleus {
    A,
    I,
    U,
    E,
    O,
    Aa,
    Aai,
    Aau,
    Ai,
    Au,
    Ei,
    Eu,
    Iu,
    Ou,
    Oi,
    Ui,
    Oe,
    Oeng,
    Oek,
    Eoi,
    Eo,
    Yu,
}

/// Syllable-final consonant class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coda {
    None,
    /// m, n, ng
    Nasal,
    /// p, t, k
    Stop,
}

/// A fully decomposed Jyutping syllable. The tone is carried through for
/// callers that want it but never affects the phonetic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Initial,
    pub nucleus: Nucleus,
    pub coda: Coda,
    pub tone: Option<u8>,
}

/// Result of parsing one romanized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Syllable(Syllable),
    /// Syllabic `m` or `ng` with no vowel. Rendered as the fixed nasal
    /// symbol, independent of the row tables.
    BareNasal { tone: Option<u8> },
    /// Token does not match the grammar. The mapping stage must echo the
    /// original token verbatim.
    PassThrough,
}
