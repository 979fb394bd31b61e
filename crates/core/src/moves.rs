//! Static move-name catalog used for input suggestions.
//!
//! The catalog is advisory: party slots accept any free text, and nothing
//! validates against these lists. They exist so clients can offer
//! autocomplete for the common case of real move names.

use std::collections::BTreeSet;

/// Fast (normal) move names.
pub const NORMAL_MOVES: &[&str] = &[
    "はっぱカッター", "つるのムチ", "でんきショック", "10まんボルト", "かみなり",
    "みずでっぽう", "あわ", "ハイドロポンプ", "なみのり", "アクアテール",
    "ひのこ", "かえんほうしゃ", "だいもんじ", "ニトロチャージ", "オーバーヒート",
    "つつく", "でんこうせっか", "はかいこうせん", "ギガインパクト", "のしかかり",
    "たいあたり", "ひっかく", "きりさく", "シャドークロー", "メタルクロー",
    "いわおとし", "いわなだれ", "ストーンエッジ", "じしん", "マグニチュード",
    "あなをほる", "マッドショット", "どろかけ", "すなかけ", "かぜおこし",
    "つばさでうつ", "エアスラッシュ", "ゴッドバード", "ブレイブバード", "そらをとぶ",
    "ねんりき", "サイコキネシス", "サイケこうせん", "みらいよち", "サイコカッター",
    "むしくい", "れんぞくぎり", "シザークロス", "むしのさざめき", "とんぼがえり",
    "どくづき", "ヘドロこうげき", "ヘドロばくだん", "ダストシュート", "クロスポイズン",
    "れいとうパンチ", "こおりのつぶて", "ふぶき", "れいとうビーム", "オーロラビーム",
    "はがねのつばさ", "アイアンヘッド", "ラスターカノン", "コメットパンチ", "てっぺき",
    "りゅうのいぶき", "りゅうのはどう", "ドラゴンクロー", "げきりん", "ドラゴンテール",
    "あくのはどう", "かみつく", "かみくだく", "イカサマ", "つじぎり",
    "フェアリーウィンド", "チャームボイス", "ムーンフォース", "マジカルシャイン", "あまえる",
    "けたぐり", "からてチョップ", "クロスチョップ", "ばくれつパンチ", "きあいだま",
    "シャドーボール", "したでなめる", "おどろかす", "シャドーパンチ", "ナイトヘッド",
];

/// Charged (special) move names, grouped by type.
pub const SPECIAL_MOVES: &[&str] = &[
    // Grass
    "ソーラービーム", "パワーウィップ", "リーフブレード", "くさむすび", "エナジーボール",
    "はなふぶき", "タネばくだん", "リーフストーム", "くさのちかい", "フレンジプラント",
    // Electric
    "かみなり", "10まんボルト", "でんじほう", "ワイルドボルト", "かみなりパンチ",
    "ボルトチェンジ", "でんきショック", "チャージビーム", "エレキボール", "でんじは",
    // Water
    "ハイドロポンプ", "なみのり", "アクアテール", "みずのはどう", "クラブハンマー",
    "ハイドロカノン", "アクアジェット", "しおふき", "うずしお", "みずのちかい",
    // Fire
    "だいもんじ", "かえんほうしゃ", "オーバーヒート", "ニトロチャージ", "かえんぐるま",
    "ブラストバーン", "フレアドライブ", "ほのおのパンチ", "やきつくす", "ほのおのちかい",
    // Normal
    "はかいこうせん", "ギガインパクト", "のしかかり", "でんこうせっか", "きりさく",
    "つじぎり", "おんがえし", "やつあたり", "スピードスター", "つのドリル",
    // Fighting
    "ばくれつパンチ", "きあいだま", "インファイト", "クロスチョップ", "けたぐり",
    "ドレインパンチ", "かわらわり", "ローキック", "スカイアッパー", "とびひざげり",
    // Poison
    "ヘドロばくだん", "ダストシュート", "ヘドロウェーブ", "クロスポイズン", "どくづき",
    "ベノムショック", "どくどく", "アシッドボム", "どくガス", "ヘドロこうげき",
    // Ground
    "じしん", "マグニチュード", "あなをほる", "だいちのちから", "すなじごく",
    "じならし", "マッドボム", "ボーンラッシュ", "ホネブーメラン", "だいちのはどう",
    // Flying
    "ゴッドバード", "ブレイブバード", "エアスラッシュ", "つばめがえし", "かぜおこし",
    "ぼうふう", "エアカッター", "はがねのつばさ", "アクロバット", "そらをとぶ",
    // Psychic
    "サイコキネシス", "みらいよち", "サイケこうせん", "サイコブースト", "サイコカッター",
    "しねんのずつき", "サイコショック", "ドリームイーター", "めいそう", "テレポート",
    // Bug
    "むしのさざめき", "シザークロス", "とんぼがえり", "れんぞくぎり", "メガホーン",
    "ぎんいろのかぜ", "むしくい", "きゅうけつ", "ミサイルばり", "かまいたち",
    // Rock
    "ストーンエッジ", "いわなだれ", "げんしのちから", "いわおとし", "ロックブラスト",
    "がんせきふうじ", "すなあらし", "いわくだき", "ステルスロック", "いわのつぶて",
    // Ghost
    "シャドーボール", "シャドークロー", "シャドーパンチ", "おどろかす", "のろい",
    "あやしいひかり", "ナイトヘッド", "あくむ", "たたりめ", "シャドーダイブ",
    // Dragon
    "ドラゴンクロー", "りゅうのはどう", "げきりん", "ドラゴンテール", "りゅうせいぐん",
    "ドラゴンダイブ", "りゅうのいぶき", "ツインドラゴン", "スケイルショット", "たつまき",
    // Dark
    "あくのはどう", "かみくだく", "つじぎり", "イカサマ", "だましうち",
    "よこどり", "ちょうはつ", "つめとぎ", "かみつく", "ナイトバースト",
    // Steel
    "ラスターカノン", "アイアンヘッド", "コメットパンチ", "はがねのつばさ", "ジャイロボール",
    "メタルバースト", "てっぺき", "マグネットボム", "ヘビーボンバー", "バレットパンチ",
    // Fairy
    "ムーンフォース", "マジカルシャイン", "チャームボイス", "じゃれつく", "フェアリーウィンド",
    "ドレインキッス", "あまえる", "マジカルフレイム", "ミストフィールド", "ようせいのかぜ",
    // Ice
    "ふぶき", "れいとうビーム", "れいとうパンチ", "オーロラビーム", "こおりのつぶて",
    "こおりのキバ", "アイスボール", "ゼッタイレイド", "こなゆき", "あられ",
];

/// Whether `name` is a cataloged fast move.
pub fn is_normal_move(name: &str) -> bool {
    NORMAL_MOVES.contains(&name)
}

/// Whether `name` is a cataloged charged move.
pub fn is_special_move(name: &str) -> bool {
    SPECIAL_MOVES.contains(&name)
}

/// Whether `name` appears in either catalog.
pub fn is_known_move(name: &str) -> bool {
    is_normal_move(name) || is_special_move(name)
}

/// Every distinct move name, sorted. Moves that exist in both catalogs
/// (e.g. "かみなり") appear once.
pub fn all_moves() -> Vec<&'static str> {
    NORMAL_MOVES
        .iter()
        .chain(SPECIAL_MOVES.iter())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(NORMAL_MOVES.len(), 90);
        assert_eq!(SPECIAL_MOVES.len(), 180);
    }

    #[test]
    fn membership() {
        assert!(is_normal_move("はかいこうせん"));
        assert!(is_special_move("りゅうせいぐん"));
        assert!(is_known_move("かみなり"));
        assert!(!is_known_move("そんなワザはない"));
    }

    #[test]
    fn all_moves_is_sorted_and_deduplicated() {
        let moves = all_moves();
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        // Overlapping entries collapse, so the union is strictly smaller
        // than the sum of both catalogs.
        assert!(moves.len() < NORMAL_MOVES.len() + SPECIAL_MOVES.len());
        assert_eq!(
            moves.iter().filter(|m| **m == "かみなり").count(),
            1
        );
    }
}
