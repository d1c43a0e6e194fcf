//! モデルへ渡す固定プロンプト

/// 植物判定の指示文。見出しは [`Section`](crate::parser::Section) と同じ順序
pub const IDENTIFY_PROMPT: &str = "Identify this plant and provide the following information:
    1. Common Name
    2. Scientific Name
    3. Family
    4. Description (including appearance, leaves, flowers, and fruit if applicable)
    5. Native Region
    6. Uses (medicinal, culinary, ornamental, etc.)
    7. Interesting Facts
    
    Please format the response in a structured manner, using the headings above.";
