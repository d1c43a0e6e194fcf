//! テキスト解析モジュール - モデルの回答から植物情報を抽出

mod section;

pub use section::{extract_section, Section, NOT_AVAILABLE};

use serde::Serialize;

/// 回答テキストから抽出された植物情報
///
/// 7項目すべてが常に埋まる。見つからなかった項目は [`NOT_AVAILABLE`]。
/// JSON では見出し順のフラットなオブジェクトとして出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantInfo {
    /// 一般名
    pub common_name: String,
    /// 学名
    pub scientific_name: String,
    /// 科
    pub family: String,
    /// 説明（外観、葉、花、果実など）
    pub description: String,
    /// 原産地
    pub native_region: String,
    /// 用途
    pub uses: String,
    /// 豆知識
    pub interesting_facts: String,
}

impl PlantInfo {
    /// テキストから植物情報を解析
    ///
    /// どんな入力でも失敗しない。空文字列なら全項目がデフォルト値になる。
    pub fn parse(text: &str) -> Self {
        let field = |section| extract_section(text, section);

        Self {
            common_name: field(Section::CommonName),
            scientific_name: field(Section::ScientificName),
            family: field(Section::Family),
            description: field(Section::Description),
            native_region: field(Section::NativeRegion),
            uses: field(Section::Uses),
            interesting_facts: field(Section::InterestingFacts),
        }
    }

    /// セクションに対応する値
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::CommonName => &self.common_name,
            Section::ScientificName => &self.scientific_name,
            Section::Family => &self.family,
            Section::Description => &self.description,
            Section::NativeRegion => &self.native_region,
            Section::Uses => &self.uses,
            Section::InterestingFacts => &self.interesting_facts,
        }
    }

    /// (正規化キー, 値) を見出し順に列挙
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        Section::ALL
            .into_iter()
            .map(move |section| (section.key(), self.get(section)))
    }

    /// 抽出できた項目の数
    pub fn found_count(&self) -> usize {
        Section::ALL
            .into_iter()
            .filter(|&section| self.get(section) != NOT_AVAILABLE)
            .count()
    }
}
