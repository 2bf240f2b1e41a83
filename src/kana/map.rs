use crate::jyutping::{parse, Coda, Initial, Nucleus, ParseOutcome, Syllable};

use super::table::{
    initial_row, C_YU, GLIDE_YU, LONG_MARK, NASAL_MARK, SMALL_YU, STOP_MARK,
};

/// Map one romanized token to its kana rendering.
///
/// Unparseable tokens come back unchanged, so this function is total and
/// acts as the identity on anything outside the grammar.
pub fn map_to_kana(token: &str) -> String {
    map_outcome(token, &parse(token))
}

/// Map an already-parsed outcome, echoing `token` on pass-through.
pub fn map_outcome(token: &str, outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Syllable(s) => map_syllable(s),
        ParseOutcome::BareNasal { .. } => NASAL_MARK.to_string(),
        ParseOutcome::PassThrough => token.to_string(),
    }
}

fn map_syllable(s: &Syllable) -> String {
    let mut out = map_nucleus(s);
    match s.coda {
        Coda::None => {}
        Coda::Nasal => out.push_str(NASAL_MARK),
        Coda::Stop => out.push_str(STOP_MARK),
    }
    out
}

/// Per-nucleus dispatch. Each compound nucleus has its own composition
/// rule; the irregularities are deliberate and must stay auditable case by
/// case, so no arm is factored into a general formula.
fn map_nucleus(s: &Syllable) -> String {
    let row = initial_row(s.initial);
    match s.nucleus {
        Nucleus::A => row.a.to_string(),
        Nucleus::I => row.i.to_string(),
        Nucleus::U => row.u.to_string(),
        Nucleus::E => row.e.to_string(),
        Nucleus::O => row.o.to_string(),

        // Long a keeps the length mark with or without a following coda.
        Nucleus::Aa => format!("{}{}", row.a, LONG_MARK),
        Nucleus::Aai => format!("{}{}イ", row.a, LONG_MARK),
        Nucleus::Aau => format!("{}{}ウ", row.a, LONG_MARK),

        Nucleus::Ai => format!("{}イ", row.a),
        Nucleus::Au => format!("{}ウ", row.a),
        Nucleus::Ei => format!("{}イ", row.e),
        Nucleus::Eu => format!("{}ウ", row.e),
        Nucleus::Iu => format!("{}ウ", row.i),
        Nucleus::Ou => format!("{}ウ", row.o),
        Nucleus::Oi => format!("{}イ", row.o),
        Nucleus::Ui => format!("{}イ", row.u),

        Nucleus::Oe => format!("{}ェ", row.o),
        Nucleus::Eo => format!("{}ェ", row.o),
        Nucleus::Eoi => format!("{}ェイ", row.o),
        // oeng/oek close themselves; the mark is part of the nucleus case.
        Nucleus::Oeng => format!("{}ェ{}", row.o, NASAL_MARK),
        Nucleus::Oek => format!("{}ェ{}", row.o, STOP_MARK),

        Nucleus::Yu => map_yu(s.initial, row.i),
    }
}

/// The `yu` nucleus dispatches by initial class rather than by row.
fn map_yu(initial: Initial, row_i: &str) -> String {
    match initial {
        Initial::Zero | Initial::J => GLIDE_YU.to_string(),
        Initial::C => C_YU.to_string(),
        _ => format!("{row_i}{SMALL_YU}"),
    }
}
