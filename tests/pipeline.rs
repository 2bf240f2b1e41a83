//! End-to-end conversion through the process-wide resources.

use zhengyu_engine::{convert, resources, Segment};

#[test]
fn test_convert_via_global_resources() {
    resources::init_seed_dictionary();

    let result = convert("我哋去香港").unwrap();
    assert_eq!(result.display, "我哋（オデイ）ホェイ香港（ホェンゴン）");
    assert_eq!(result.phonetic, "オデイホェイホェンゴン");
    assert_eq!(result.romanized, "ngo5 dei6 heoi3 hoeng1 gong2");

    let reconstructed: String = result.segments.iter().map(Segment::literal).collect();
    assert_eq!(reconstructed, "我哋去香港");
}

#[test]
fn test_mixed_script_input() {
    resources::init_seed_dictionary();

    let result = convert("今日食 pizza 啦!").unwrap();
    // 今日食 phoneticized, the ASCII word and punctuation preserved.
    assert_eq!(result.phonetic, "ガンヤッシッ pizza ラー!");
    assert_eq!(result.romanized, "gam1 jat6 sik6 pizza laa1!");
}
