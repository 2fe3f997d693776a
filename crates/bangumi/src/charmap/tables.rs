//! 文字置換テーブル（静的データ）
//!
//! ARIB 外字（タイトル用・記号用）と Unicode の絵文字・囲み文字の3系統。
//! ARIB 外字の値は ARIB STD-B24 の外字領域を Unicode 上の同位置に展開したもの。
//! 対応表は epgdump_py の aribgaiji.py (MIT License, (C) 2011 Yasumasa Murakami) に基づく。

/// ARIB 外字（番組タイトル用の囲み文字）
pub const ARIB_GAIJI_TITLE: &[(char, &str)] = &[
  ('\u{7A50}', "[HV]"),
  ('\u{7A51}', "[SD]"),
  ('\u{7A52}', "[Ｐ]"),
  ('\u{7A53}', "[Ｗ]"),
  ('\u{7A54}', "[MV]"),
  ('\u{7A55}', "[手]"),
  ('\u{7A56}', "[字]"),
  ('\u{7A57}', "[双]"),
  ('\u{7A58}', "[デ]"),
  ('\u{7A59}', "[Ｓ]"),
  ('\u{7A5A}', "[二]"),
  ('\u{7A5B}', "[多]"),
  ('\u{7A5C}', "[解]"),
  ('\u{7A5D}', "[SS]"),
  ('\u{7A5E}', "[Ｂ]"),
  ('\u{7A5F}', "[Ｎ]"),
  ('\u{7A62}', "[天]"),
  ('\u{7A63}', "[交]"),
  ('\u{7A64}', "[映]"),
  ('\u{7A65}', "[無]"),
  ('\u{7A66}', "[料]"),
  ('\u{7A67}', "[年齢制限]"),
  ('\u{7A68}', "[前]"),
  ('\u{7A69}', "[後]"),
  ('\u{7A6A}', "[再]"),
  ('\u{7A6B}', "[新]"),
  ('\u{7A6C}', "[初]"),
  ('\u{7A6D}', "[終]"),
  ('\u{7A6E}', "[生]"),
  ('\u{7A6F}', "[販]"),
  ('\u{7A70}', "[声]"),
  ('\u{7A71}', "[吹]"),
  ('\u{7A72}', "[PPV]"),
];

/// ARIB 外字（記号類）
///
/// 番組情報で実際に現れるものだけを収録している。
pub const ARIB_GAIJI_SYMBOLS: &[(char, &str)] = &[
  ('\u{7A60}', "■"),
  ('\u{7A61}', "●"),
  ('\u{7A73}', "（秘）"),
  ('\u{7A74}', "ほか"),
  ('\u{7C21}', "→"),
  ('\u{7C22}', "←"),
  ('\u{7C23}', "↑"),
  ('\u{7C24}', "↓"),
  ('\u{7C25}', "●"),
  ('\u{7C26}', "○"),
  ('\u{7C3F}', "[新]"),
  ('\u{7C7A}', "[演]"),
];

/// Unicode の絵文字・囲み文字
pub const UNICODE_EMOJI: &[(char, &str)] = &[
  // 囲み数字（Shift_JIS の NEC 特殊文字にあるためそのまま）
  ('\u{2460}', "①"),
  ('\u{2461}', "②"),
  ('\u{2462}', "③"),
  ('\u{2463}', "④"),
  ('\u{2464}', "⑤"),
  ('\u{2465}', "⑥"),
  ('\u{2466}', "⑦"),
  ('\u{2467}', "⑧"),
  ('\u{2468}', "⑨"),
  ('\u{2469}', "⑩"),
  // Enclosed Ideographic Supplement (U+1F200..U+1F2FF)
  ('\u{1F200}', "[ほか]"),
  ('\u{1F201}', "[ココ]"),
  ('\u{1F202}', "[サ]"),
  ('\u{1F210}', "[手]"),
  ('\u{1F211}', "[字]"),
  ('\u{1F212}', "[双]"),
  ('\u{1F213}', "[デ]"),
  ('\u{1F214}', "[二]"),
  ('\u{1F215}', "[多]"),
  ('\u{1F216}', "[解]"),
  ('\u{1F217}', "[天]"),
  ('\u{1F218}', "[交]"),
  ('\u{1F219}', "[映]"),
  ('\u{1F21A}', "[無]"),
  ('\u{1F21B}', "[料]"),
  ('\u{1F21C}', "[前]"),
  ('\u{1F21D}', "[後]"),
  ('\u{1F21E}', "[再]"),
  ('\u{1F21F}', "[新]"),
  ('\u{1F220}', "[初]"),
  ('\u{1F221}', "[終]"),
  ('\u{1F222}', "[生]"),
  ('\u{1F223}', "[販]"),
  ('\u{1F224}', "[声]"),
  ('\u{1F225}', "[吹]"),
  ('\u{1F226}', "[演]"),
  ('\u{1F227}', "[投]"),
  ('\u{1F228}', "[捕]"),
  ('\u{1F229}', "[一]"),
  ('\u{1F22A}', "[二]"),
  ('\u{1F22B}', "[三]"),
  ('\u{1F22C}', "[四]"),
  ('\u{1F22D}', "[五]"),
  ('\u{1F22E}', "[六]"),
  ('\u{1F22F}', "[指]"),
  ('\u{1F230}', "[七]"),
  ('\u{1F231}', "[八]"),
  ('\u{1F232}', "[禁]"),
  ('\u{1F233}', "[空]"),
  ('\u{1F234}', "[合]"),
  ('\u{1F235}', "[満]"),
  ('\u{1F236}', "[有]"),
  ('\u{1F237}', "[月]"),
  ('\u{1F238}', "[申]"),
  ('\u{1F239}', "[割]"),
  ('\u{1F23A}', "[営]"),
  ('\u{1F23B}', "[祝]"),
  ('\u{1F240}', "[富]"),
  ('\u{1F241}', "[祝日]"),
  ('\u{1F242}', "[株]"),
  ('\u{1F243}', "[社]"),
  ('\u{1F244}', "[名]"),
  ('\u{1F245}', "[特]"),
  ('\u{1F246}', "[財]"),
  ('\u{1F247}', "[祭]"),
  ('\u{1F248}', "[労]"),
  ('\u{1F250}', "[得]"),
  ('\u{1F251}', "[可]"),
  // 天気
  ('\u{2600}', "☀"),
  ('\u{2601}', "☁"),
  ('\u{2602}', "☂"),
  ('\u{2603}', "☃"),
  ('\u{26A1}', "⚡"),
];
