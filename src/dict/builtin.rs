//! Embedded seed dictionary.
//!
//! A small table of common characters with their canonical Jyutping
//! readings, so the engine can run before a full compiled dictionary has
//! been installed. One reading per character; variant readings are a
//! dictionary-compilation concern, not an engine concern.

use super::CharDictionary;

pub const SEED: &[(char, &str)] = &[
    // Pronouns and particles
    ('我', "ngo5"),
    ('你', "nei5"),
    ('佢', "keoi5"),
    ('哋', "dei6"),
    ('係', "hai6"),
    ('唔', "m4"),
    ('喺', "hai2"),
    ('咗', "zo2"),
    ('緊', "gan2"),
    ('嘅', "ge3"),
    ('啦', "laa1"),
    ('呀', "aa3"),
    ('喇', "laa3"),
    ('囉', "lo1"),
    ('咩', "me1"),
    ('乜', "mat1"),
    ('嘢', "je5"),
    ('點', "dim2"),
    ('樣', "joeng2"),
    ('邊', "bin1"),
    ('度', "dou6"),
    ('呢', "ni1"),
    ('嗰', "go2"),
    ('個', "go3"),
    ('啲', "di1"),
    // Numerals
    ('一', "jat1"),
    ('二', "ji6"),
    ('三', "saam1"),
    ('四', "sei3"),
    ('五', "ng5"),
    ('六', "luk6"),
    ('七', "cat1"),
    ('八', "baat3"),
    ('九', "gau2"),
    ('十', "sap6"),
    ('百', "baak3"),
    ('千', "cin1"),
    ('萬', "maan6"),
    ('零', "ling4"),
    // Common verbs and adjectives
    ('食', "sik6"),
    ('飲', "jam2"),
    ('去', "heoi3"),
    ('嚟', "lai4"),
    ('返', "faan1"),
    ('行', "hang4"),
    ('走', "zau2"),
    ('企', "kei5"),
    ('坐', "co5"),
    ('瞓', "fan3"),
    ('睇', "tai2"),
    ('講', "gong2"),
    ('聽', "teng1"),
    ('寫', "se2"),
    ('讀', "duk6"),
    ('買', "maai5"),
    ('賣', "maai6"),
    ('畀', "bei2"),
    ('攞', "lo2"),
    ('搵', "wan2"),
    ('識', "sik1"),
    ('知', "zi1"),
    ('有', "jau5"),
    ('冇', "mou5"),
    ('想', "soeng2"),
    ('要', "jiu3"),
    ('會', "wui5"),
    ('可', "ho2"),
    ('以', "ji5"),
    ('鍾', "zung1"),
    ('意', "ji3"),
    ('愛', "oi3"),
    ('好', "hou2"),
    ('靚', "leng3"),
    ('啱', "ngaam1"),
    ('錯', "co3"),
    ('快', "faai3"),
    ('慢', "maan6"),
    ('新', "san1"),
    ('舊', "gau6"),
    ('高', "gou1"),
    ('矮', "ai2"),
    ('長', "coeng4"),
    ('短', "dyun2"),
    ('大', "daai6"),
    ('細', "sai3"),
    ('多', "do1"),
    ('少', "siu2"),
    // Common nouns
    ('人', "jan4"),
    ('屋', "uk1"),
    ('家', "gaa1"),
    ('飯', "faan6"),
    ('水', "seoi2"),
    ('茶', "caa4"),
    ('奶', "naai5"),
    ('包', "baau1"),
    ('麵', "min6"),
    ('菜', "coi3"),
    ('肉', "juk6"),
    ('魚', "jyu4"),
    ('蛋', "daan2"),
    ('米', "mai5"),
    ('錢', "cin4"),
    ('蚊', "man1"),
    ('車', "ce1"),
    ('飛', "fei1"),
    ('機', "gei1"),
    ('船', "syun4"),
    ('路', "lou6"),
    ('街', "gaai1"),
    ('舖', "pou3"),
    ('門', "mun4"),
    ('手', "sau2"),
    ('腳', "goek3"),
    ('眼', "ngaan5"),
    ('口', "hau2"),
    ('心', "sam1"),
    ('頭', "tau4"),
    ('氣', "hei3"),
    ('山', "saan1"),
    ('火', "fo2"),
    ('天', "tin1"),
    ('地', "dei6"),
    ('日', "jat6"),
    ('月', "jyut6"),
    ('年', "nin4"),
    ('時', "si4"),
    ('間', "gaan1"),
    ('今', "gam1"),
    ('明', "ming4"),
    ('早', "zou2"),
    ('晚', "maan5"),
    ('夜', "je6"),
    // Language and places
    ('香', "hoeng1"),
    ('港', "gong2"),
    ('廣', "gwong2"),
    ('東', "dung1"),
    ('中', "zung1"),
    ('國', "gwok3"),
    ('話', "waa2"),
    ('語', "jyu5"),
    ('言', "jin4"),
    ('文', "man4"),
    ('字', "zi6"),
    ('書', "syu1"),
    ('學', "hok6"),
    ('校', "haau6"),
    ('老', "lou5"),
    ('師', "si1"),
    ('生', "sang1"),
    ('仔', "zai2"),
    ('女', "neoi5"),
    ('男', "naam4"),
    ('媽', "maa1"),
    ('爸', "baa4"),
    ('哥', "go1"),
    ('姐', "ze2"),
    ('弟', "dai6"),
    ('妹', "mui6"),
    ('朋', "pang4"),
    ('友', "jau5"),
    ('先', "sin1"),
    ('後', "hau6"),
    ('上', "soeng6"),
    ('下', "haa6"),
    ('出', "ceot1"),
    ('入', "jap6"),
    ('開', "hoi1"),
    ('閂', "saan1"),
    ('見', "gin3"),
    ('謝', "ze6"),
    ('該', "goi1"),
    ('請', "cing2"),
    ('問', "man6"),
    ('答', "daap3"),
];

/// Build a dictionary from the embedded seed table.
pub fn seed() -> CharDictionary {
    CharDictionary::from_entries(SEED.iter().map(|&(ch, r)| (ch, r.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::Romanization;
    use crate::jyutping::{parse, ParseOutcome};

    #[test]
    fn test_seed_lookup() {
        let dict = seed();
        assert_eq!(dict.lookup('我'), Some("ngo5"));
        assert_eq!(dict.lookup('唔'), Some("m4"));
    }

    #[test]
    fn test_seed_has_no_duplicate_keys() {
        let mut keys: Vec<char> = SEED.iter().map(|&(ch, _)| ch).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SEED.len());
    }

    #[test]
    fn test_every_seed_reading_parses() {
        for &(ch, reading) in SEED {
            assert_ne!(
                parse(reading),
                ParseOutcome::PassThrough,
                "unparseable reading {reading} for {ch}"
            );
        }
    }
}
