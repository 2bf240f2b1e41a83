use super::{Coda, Initial, Nucleus, ParseOutcome, Syllable};

/// Two-letter onsets must be tried before their one-letter prefixes.
const INITIALS: &[(&str, Initial)] = &[
    ("ng", Initial::Zero), // ng- onset folds into the zero category
    ("gw", Initial::Gw),
    ("kw", Initial::Kw),
    ("b", Initial::B),
    ("p", Initial::P),
    ("m", Initial::M),
    ("f", Initial::F),
    ("d", Initial::D),
    ("t", Initial::T),
    ("n", Initial::N),
    ("l", Initial::L),
    ("g", Initial::G),
    ("k", Initial::K),
    ("h", Initial::H),
    ("w", Initial::W),
    ("z", Initial::Z),
    ("c", Initial::C),
    ("s", Initial::S),
    ("j", Initial::J),
];

/// Ordered longest-first so greedy matching resolves ambiguous clusters
/// (e.g. "aai" before "aa" before "a", "eoi" before "eo").
const NUCLEI: &[(&str, Nucleus)] = &[
    ("oeng", Nucleus::Oeng),
    ("aai", Nucleus::Aai),
    ("aau", Nucleus::Aau),
    ("oek", Nucleus::Oek),
    ("eoi", Nucleus::Eoi),
    ("aa", Nucleus::Aa),
    ("ai", Nucleus::Ai),
    ("au", Nucleus::Au),
    ("ei", Nucleus::Ei),
    ("eu", Nucleus::Eu),
    ("iu", Nucleus::Iu),
    ("ou", Nucleus::Ou),
    ("oi", Nucleus::Oi),
    ("ui", Nucleus::Ui),
    ("oe", Nucleus::Oe),
    ("eo", Nucleus::Eo),
    ("yu", Nucleus::Yu),
    ("a", Nucleus::A),
    ("i", Nucleus::I),
    ("u", Nucleus::U),
    ("e", Nucleus::E),
    ("o", Nucleus::O),
];

/// Parse a single Jyutping token into its syllable decomposition.
///
/// The grammar is `initial? nucleus coda? tone?`. Tokens that are not
/// lowercase ASCII letters plus an optional trailing tone digit 1-6, or
/// that leave unconsumed letters after the coda, come back as
/// [`ParseOutcome::PassThrough`]; the caller echoes them unchanged.
pub fn parse(token: &str) -> ParseOutcome {
    if token.is_empty() {
        return ParseOutcome::PassThrough;
    }

    let (body, tone) = split_tone(token);
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_lowercase()) {
        return ParseOutcome::PassThrough;
    }

    // Syllabic nasal: the whole body is a bare m or ng.
    if body == "m" || body == "ng" {
        return ParseOutcome::BareNasal { tone };
    }

    let (initial, rest) = match_initial(body);
    let Some((nucleus, rest)) = match_nucleus(rest) else {
        return ParseOutcome::PassThrough;
    };
    let Some(coda) = match_coda(rest) else {
        return ParseOutcome::PassThrough;
    };

    ParseOutcome::Syllable(Syllable {
        initial,
        nucleus,
        coda,
        tone,
    })
}

/// Split an optional trailing tone digit off the token. A trailing digit
/// outside 1-6 invalidates the whole token, signalled by returning a body
/// that still contains it.
fn split_tone(token: &str) -> (&str, Option<u8>) {
    let bytes = token.as_bytes();
    match bytes.last() {
        Some(b @ b'1'..=b'6') => (&token[..token.len() - 1], Some(b - b'0')),
        _ => (token, None),
    }
}

fn match_initial(body: &str) -> (Initial, &str) {
    for &(prefix, initial) in INITIALS {
        if let Some(rest) = body.strip_prefix(prefix) {
            return (initial, rest);
        }
    }
    (Initial::Zero, body)
}

fn match_nucleus(rest: &str) -> Option<(Nucleus, &str)> {
    for &(prefix, nucleus) in NUCLEI {
        if let Some(rest) = rest.strip_prefix(prefix) {
            return Some((nucleus, rest));
        }
    }
    None
}

fn match_coda(rest: &str) -> Option<Coda> {
    match rest {
        "" => Some(Coda::None),
        "m" | "n" | "ng" => Some(Coda::Nasal),
        "p" | "t" | "k" => Some(Coda::Stop),
        _ => None,
    }
}
