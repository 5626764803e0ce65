/// Taxonomy level label grouping keywords and questions by cognitive level.
/// Examples: `BT1`, `BT4`
pub type CategoryLabel = String;
/// Verb whose per-category frequency is tracked.
/// Examples: `analisar`, `identificar`, `criar`
pub type Keyword = String;
/// Unique identifier of a question-bank entry.
/// Example: `1042`
pub type QuestionId = u32;
/// Free text searched by the highlighter and the context-tree builder.
/// Example: `O aluno deve analisar o texto.`
pub type Passage = String;
/// Lowercased word emitted by term-frequency summaries and context trees.
/// Examples: `aluno`, `texto`
pub type Term = String;
