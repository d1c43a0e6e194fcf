//! セクション定義 - 見出しの固定順序と境界パターン

use regex::Regex;
use std::sync::LazyLock;

/// 抽出できなかった項目に入るデフォルト値
pub const NOT_AVAILABLE: &str = "Information not available";

/// 回答テキスト中の見出し（順序が抽出境界を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CommonName,
    ScientificName,
    Family,
    Description,
    NativeRegion,
    Uses,
    InterestingFacts,
}

impl Section {
    /// 見出しの固定順序
    pub const ALL: [Section; 7] = [
        Section::CommonName,
        Section::ScientificName,
        Section::Family,
        Section::Description,
        Section::NativeRegion,
        Section::Uses,
        Section::InterestingFacts,
    ];

    /// 見出しの表記
    pub const fn label(self) -> &'static str {
        match self {
            Section::CommonName => "Common Name",
            Section::ScientificName => "Scientific Name",
            Section::Family => "Family",
            Section::Description => "Description",
            Section::NativeRegion => "Native Region",
            Section::Uses => "Uses",
            Section::InterestingFacts => "Interesting Facts",
        }
    }

    /// 正規化したキー名 (小文字化し、最初の空白をアンダースコアに置換)
    pub fn key(self) -> String {
        self.label().to_lowercase().replacen(' ', "_", 1)
    }

    /// 固定順序で次に来る見出し。最後の見出しは None
    pub fn next(self) -> Option<Section> {
        let index = self.index();
        Section::ALL.get(index + 1).copied()
    }

    fn index(self) -> usize {
        self as usize
    }

    /// 「見出し:」から次の見出し（無ければ末尾）までを捕捉するパターン
    fn boundary_pattern(self) -> String {
        let label = regex::escape(self.label());
        match self.next() {
            Some(next) => format!(r"(?s){}:(.*?)(?:{}|$)", label, regex::escape(next.label())),
            None => format!(r"(?s){}:(.*)$", label),
        }
    }
}

/// コンパイル済みの境界パターン（Section::ALL と同じ順序）
static BOUNDARIES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .map(|section| Regex::new(&section.boundary_pattern()).ok())
        .collect()
});

/// テキストから1セクション分の値を取り出す
///
/// 各セクションは元のテキスト全体に対して独立に照合する。
/// 見出しが無い場合、または見出しの直後に何も無い場合はデフォルト値を返す。
pub fn extract_section(text: &str, section: Section) -> String {
    BOUNDARIES
        .get(section.index())
        .and_then(Option::as_ref)
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .filter(|m| !m.as_str().is_empty())
        .map(|m| sanitize(m.as_str()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 前後の空白を除去し、強調用のアスタリスクをすべて取り除く
fn sanitize(value: &str) -> String {
    value.trim().replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_are_normalized() {
        let keys: Vec<String> = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                "common_name",
                "scientific_name",
                "family",
                "description",
                "native_region",
                "uses",
                "interesting_facts",
            ]
        );
    }

    #[test]
    fn next_follows_fixed_order() {
        assert_eq!(Section::CommonName.next(), Some(Section::ScientificName));
        assert_eq!(Section::Uses.next(), Some(Section::InterestingFacts));
        assert_eq!(Section::InterestingFacts.next(), None);
    }

    #[test]
    fn all_boundary_patterns_compile() {
        assert!(BOUNDARIES.iter().all(Option::is_some));
        assert_eq!(BOUNDARIES.len(), Section::ALL.len());
    }

    #[test]
    fn captures_up_to_next_label() {
        let text = "Family: Rosaceae\nDescription: shrub";
        assert_eq!(extract_section(text, Section::Family), "Rosaceae");
    }

    #[test]
    fn missing_next_label_captures_to_end() {
        let text = "Family: Rosaceae\nUses: hedges";
        assert_eq!(extract_section(text, Section::Family), "Rosaceae\nUses: hedges");
    }

    #[test]
    fn whitespace_only_value_is_empty_not_default() {
        let text = "Family:   \n\nDescription: shrub";
        assert_eq!(extract_section(text, Section::Family), "");
    }

    #[test]
    fn label_directly_followed_by_next_label_is_default() {
        let text = "Family:Description: shrub";
        assert_eq!(extract_section(text, Section::Family), NOT_AVAILABLE);
    }

    #[test]
    fn trailing_label_without_value_is_default() {
        assert_eq!(extract_section("Uses:", Section::Uses), NOT_AVAILABLE);
        assert_eq!(
            extract_section("Interesting Facts:", Section::InterestingFacts),
            NOT_AVAILABLE
        );
    }

    #[test]
    fn label_without_colon_is_default() {
        let text = "Family Rosaceae\nDescription: shrub";
        assert_eq!(extract_section(text, Section::Family), NOT_AVAILABLE);
    }

    #[test]
    fn strips_every_asterisk() {
        let text = "Uses: **Ornamental** * and *culinary\nInteresting Facts: none";
        assert_eq!(extract_section(text, Section::Uses), "Ornamental  and culinary");
    }

    #[test]
    fn label_inside_preceding_narrative_is_not_guarded() {
        // 本文中に次の見出し語が現れると、そこで値が切れる
        let text = "Common Name: Tree of Scientific Name fame\nScientific Name: Quercus";
        assert_eq!(extract_section(text, Section::CommonName), "Tree of");
    }
}
