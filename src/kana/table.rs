use crate::jyutping::Initial;

/// Rendered after any nucleus when the syllable closes on m/n/ng, and on
/// its own for syllabic nasals.
pub const NASAL_MARK: &str = "ン";

/// Rendered after any nucleus when the syllable closes on p/t/k.
pub const STOP_MARK: &str = "ッ";

/// Long-vowel mark. Long-a syllables take it whether or not a coda
/// follows; open and closed long-a render identically apart from the coda
/// mark itself.
pub const LONG_MARK: &str = "ー";

/// The glide-vowel symbol used when a `yu` nucleus stands without a
/// consonantal onset (zero initial or the semivowel j).
pub const GLIDE_YU: &str = "ユ";

/// Small glide appended for the yoon-style `yu` contraction.
pub const SMALL_YU: &str = "ュ";

/// Fixed compound for `yu` after the non-palatalizing affricate c.
pub const C_YU: &str = "ツュ";

/// Five-slot vowel row for one initial, in a/i/u/e/o order.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub a: &'static str,
    pub i: &'static str,
    pub u: &'static str,
    pub e: &'static str,
    pub o: &'static str,
}

const fn row(
    a: &'static str,
    i: &'static str,
    u: &'static str,
    e: &'static str,
    o: &'static str,
) -> Row {
    Row { a, i, u, e, o }
}

/// Look up the vowel row for an initial.
///
/// Irregular rows:
/// - `F` is the compound small-vowel glide series (フ + small vowel).
/// - `C` never palatalizes before i; it stays on the tsu series.
/// - `J` takes the glide-vowel ユ in the i slot and the distinguished
///   symbol ヲ in the o slot instead of the regular ヨ.
pub fn initial_row(initial: Initial) -> Row {
    match initial {
        Initial::Zero => row("ア", "イ", "ウ", "エ", "オ"),
        Initial::B => row("バ", "ビ", "ブ", "ベ", "ボ"),
        Initial::P => row("パ", "ピ", "プ", "ペ", "ポ"),
        Initial::M => row("マ", "ミ", "ム", "メ", "モ"),
        Initial::F => row("ファ", "フィ", "フ", "フェ", "フォ"),
        Initial::D => row("ダ", "ディ", "ドゥ", "デ", "ド"),
        Initial::T => row("タ", "ティ", "トゥ", "テ", "ト"),
        Initial::N => row("ナ", "ニ", "ヌ", "ネ", "ノ"),
        Initial::L => row("ラ", "リ", "ル", "レ", "ロ"),
        Initial::G => row("ガ", "ギ", "グ", "ゲ", "ゴ"),
        Initial::K => row("カ", "キ", "ク", "ケ", "コ"),
        Initial::H => row("ハ", "ヒ", "フ", "ヘ", "ホ"),
        Initial::Gw => row("グァ", "グィ", "グ", "グェ", "グォ"),
        Initial::Kw => row("クァ", "クィ", "ク", "クェ", "クォ"),
        Initial::W => row("ワ", "ウィ", "ウ", "ウェ", "ウォ"),
        Initial::Z => row("ザ", "ジ", "ズ", "ゼ", "ゾ"),
        Initial::C => row("ツァ", "ツィ", "ツ", "ツェ", "ツォ"),
        Initial::S => row("サ", "シ", "ス", "セ", "ソ"),
        Initial::J => row("ヤ", "ユ", "ユ", "イェ", "ヲ"),
    }
}
